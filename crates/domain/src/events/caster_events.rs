//! Caster-related domain events
//!
//! These enums communicate what happened when caster state was modified,
//! allowing callers to react appropriately.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::{CasterName, Level, Mana};

/// Outcome of attempting to cast a spell.
///
/// None of these are failures of the call itself: an unknown spell or an
/// empty mana pool is a normal answer, and only `Cast` changes state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum CastOutcome {
    /// The spell is not in the caster's book
    UnknownSpell { caster: CasterName, spell: String },
    /// The caster cannot pay the spell's cost; mana is untouched
    #[serde(rename_all = "camelCase")]
    InsufficientMana {
        caster: CasterName,
        spell: String,
        cost: i64,
        available: Mana,
    },
    /// The spell was cast and its cost deducted
    #[serde(rename_all = "camelCase")]
    Cast {
        caster: CasterName,
        spell: String,
        cost: i64,
        remaining_mana: Mana,
        target: Option<String>,
    },
}

impl CastOutcome {
    #[inline]
    pub fn is_cast(&self) -> bool {
        matches!(self, CastOutcome::Cast { .. })
    }

    /// Mana left after a successful cast.
    pub fn remaining_mana(&self) -> Option<Mana> {
        match self {
            CastOutcome::Cast { remaining_mana, .. } => Some(*remaining_mana),
            _ => None,
        }
    }
}

impl fmt::Display for CastOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastOutcome::UnknownSpell { caster, spell } => {
                write!(f, "{} doesn't know the spell '{}'.", caster, spell)
            }
            CastOutcome::InsufficientMana { caster, spell, .. } => {
                write!(f, "{} tries to cast '{}' but lacks mana!", caster, spell)
            }
            CastOutcome::Cast {
                caster,
                spell,
                cost,
                remaining_mana,
                target: None,
            } => write!(
                f,
                "{} casts '{}' (cost {} MP). Remaining mana: {}.",
                caster, spell, cost, remaining_mana
            ),
            CastOutcome::Cast {
                caster,
                spell,
                cost,
                remaining_mana,
                target: Some(target),
            } => write!(
                f,
                "{} casts '{}' on {}! (cost {} MP, remaining mana: {})",
                caster, spell, target, cost, remaining_mana
            ),
        }
    }
}

/// Outcome of a successful field write through the accessor layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CasterUpdate {
    NameChanged { from: CasterName, to: CasterName },
    LevelChanged { from: Level, to: Level },
    ManaChanged { from: Mana, to: Mana },
    SpellsReplaced { previous_count: usize, count: usize },
    SpellsCleared { removed: usize },
}

/// Outcome of a spell-book write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpellBookChange {
    Learned { spell: String, cost: i64 },
    CostChanged { spell: String, from: i64, to: i64 },
    Forgotten { spell: String, cost: i64 },
}
