//! Named textual formats for a caster

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// Selectable rendering of a caster.
///
/// | Key        | Output                                   |
/// |------------|------------------------------------------|
/// | `short`    | `Aelar (Lv 5)`                           |
/// | `mana`     | `Aelar: 20 MP`                           |
/// | `friendly` | `Caster Aelar (Lv 5, Mana 20, 3 spells)` |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CasterFormat {
    Short,
    Mana,
    #[default]
    Friendly,
}

impl CasterFormat {
    /// Resolve a format key, falling back to the friendly form for
    /// anything unrecognised.
    pub fn from_key(key: &str) -> Self {
        key.parse().unwrap_or_default()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CasterFormat::Short => "short",
            CasterFormat::Mana => "mana",
            CasterFormat::Friendly => "friendly",
        }
    }
}

impl fmt::Display for CasterFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CasterFormat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "short" => Ok(CasterFormat::Short),
            "mana" => Ok(CasterFormat::Mana),
            "friendly" | "" => Ok(CasterFormat::Friendly),
            other => Err(DomainError::parse(format!("Unknown format key: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_keys() {
        assert_eq!("short".parse(), Ok(CasterFormat::Short));
        assert_eq!("mana".parse(), Ok(CasterFormat::Mana));
        assert_eq!("".parse(), Ok(CasterFormat::Friendly));
        assert!(matches!(
            "fancy".parse::<CasterFormat>(),
            Err(DomainError::Parse(_))
        ));
    }

    #[test]
    fn unknown_key_falls_back_to_friendly() {
        assert_eq!(CasterFormat::from_key("fancy"), CasterFormat::Friendly);
        assert_eq!(CasterFormat::from_key("short"), CasterFormat::Short);
    }
}
