//! Unified error types for the domain layer
//!
//! Every fallible Caster operation returns `DomainError`. Casting outcomes
//! (unknown spell, insufficient mana) are not errors; they live in
//! [`crate::events::CastOutcome`].

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Constructed or mutated state would break `level >= 1` / `mana >= 0`
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Spell-book lookup or removal of an absent spell
    #[error("Spell not found: {0:?}")]
    KeyNotFound(String),

    /// Mana operator given something other than an integer
    #[error("Unsupported operand for {op}: expected integer, got {found}")]
    UnsupportedOperand { op: &'static str, found: &'static str },

    /// Mana divided by zero
    #[error("Cannot divide mana by zero")]
    DivisionByZero,

    /// Comparison or write against an incompatible value kind
    #[error("Type mismatch: expected {expected}, got {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Read or write of a field that is neither stored, aliased, nor synthesized
    #[error("Caster has no attribute {0:?}")]
    AttributeNotFound(String),

    /// Delete (or write, for synthesized fields) of a protected field
    #[error("Cannot modify core attribute {field:?}: {reason}")]
    ImmutableField { field: String, reason: &'static str },

    /// Byte/text decoding failure
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for invariant violations.
    ///
    /// # Example
    /// ```ignore
    /// if level < MIN_LEVEL {
    ///     return Err(DomainError::validation("Caster level must be >= 1"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a missing spell error
    pub fn key_not_found(spell: impl Into<String>) -> Self {
        Self::KeyNotFound(spell.into())
    }

    /// Create an unsupported operand error
    pub fn unsupported_operand(op: &'static str, found: &'static str) -> Self {
        Self::UnsupportedOperand { op, found }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch { expected, found }
    }

    /// Create an unknown attribute error
    pub fn attribute_not_found(name: impl Into<String>) -> Self {
        Self::AttributeNotFound(name.into())
    }

    /// Create a protected field error
    pub fn immutable_field(field: impl Into<String>, reason: &'static str) -> Self {
        Self::ImmutableField {
            field: field.into(),
            reason,
        }
    }

    /// Creates a parse error for text/byte decoding failures.
    ///
    /// Use this in `FromStr` implementations and in the byte codec when the
    /// input doesn't match the expected shape:
    /// - Unknown format keys
    /// - Wrong number of delimited fields
    /// - Malformed integers
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
