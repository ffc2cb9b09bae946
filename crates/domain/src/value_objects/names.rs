//! Validated name newtypes for domain entities
//!
//! These newtypes ensure that names are valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for caster names
pub const MAX_NAME_LENGTH: usize = 200;

// ============================================================================
// CasterName
// ============================================================================

/// A validated caster name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CasterName(String);

impl CasterName {
    /// Create a new validated caster name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Caster name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Caster name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CasterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CasterName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CasterName> for String {
    fn from(name: CasterName) -> String {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name_is_trimmed() {
        let name = CasterName::new("  Aelar  ").unwrap();
        assert_eq!(name.as_str(), "Aelar");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            CasterName::new("   "),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_name_length_limit() {
        let at_limit = "a".repeat(MAX_NAME_LENGTH);
        assert!(CasterName::new(at_limit).is_ok());

        let too_long = "a".repeat(MAX_NAME_LENGTH + 1);
        assert!(CasterName::new(too_long).is_err());
    }

    #[test]
    fn test_serde_rejects_invalid_name() {
        let result: Result<CasterName, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());

        let name: CasterName = serde_json::from_str("\"Lyra\"").unwrap();
        assert_eq!(name.as_str(), "Lyra");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Lyra\"");
    }
}
