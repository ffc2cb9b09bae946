//! Field tags and dynamic values used by the accessor layer

use std::fmt;
use std::str::FromStr;

use crate::aggregates::Caster;
use crate::error::DomainError;
use crate::value_objects::SpellBook;

/// A named field on a caster, as seen from outside.
///
/// `Hp` is an alias of `Mana`; `NumSpells` is synthesized from the spell
/// book and has no storage of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Level,
    Mana,
    Hp,
    Spells,
    NumSpells,
}

impl Field {
    pub const ALL: [Field; 6] = [
        Field::Name,
        Field::Level,
        Field::Mana,
        Field::Hp,
        Field::Spells,
        Field::NumSpells,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Level => "level",
            Field::Mana => "mana",
            Field::Hp => "hp",
            Field::Spells => "spells",
            Field::NumSpells => "numSpells",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "level" => Ok(Field::Level),
            "mana" => Ok(Field::Mana),
            "hp" => Ok(Field::Hp),
            "spells" => Ok(Field::Spells),
            "numSpells" | "num_spells" => Ok(Field::NumSpells),
            _ => Err(DomainError::attribute_not_found(s)),
        }
    }
}

/// A dynamically typed value flowing through the accessor layer and the
/// dynamic comparison/operator entry points.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Int(i64),
    Text(String),
    Spells(SpellBook),
    Caster(Box<Caster>),
}

impl FieldValue {
    /// Short name of the value's kind, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Int(_) => "integer",
            FieldValue::Text(_) => "text",
            FieldValue::Spells(_) => "spell book",
            FieldValue::Caster(_) => "caster",
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            FieldValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Int(n)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<SpellBook> for FieldValue {
    fn from(book: SpellBook) -> Self {
        FieldValue::Spells(book)
    }
}

impl From<Caster> for FieldValue {
    fn from(caster: Caster) -> Self {
        FieldValue::Caster(Box::new(caster))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_fields_and_aliases() {
        for field in Field::ALL {
            assert_eq!(field.as_str().parse::<Field>(), Ok(field));
        }
        assert_eq!("num_spells".parse::<Field>(), Ok(Field::NumSpells));
    }

    #[test]
    fn unknown_field_is_attribute_not_found() {
        assert_eq!(
            "wisdom".parse::<Field>(),
            Err(DomainError::AttributeNotFound("wisdom".into()))
        );
        // Field names are case-sensitive
        assert!("Mana".parse::<Field>().is_err());
    }

    #[test]
    fn value_kinds() {
        assert_eq!(FieldValue::from(3).kind(), "integer");
        assert_eq!(FieldValue::from("x").kind(), "text");
        assert_eq!(FieldValue::from(SpellBook::new()).kind(), "spell book");
        assert_eq!(FieldValue::from(3).as_int(), Some(3));
        assert_eq!(FieldValue::from("x").as_int(), None);
        assert_eq!(FieldValue::from("x").as_text(), Some("x"));
        assert_eq!(FieldValue::from(3).as_text(), None);
    }
}
