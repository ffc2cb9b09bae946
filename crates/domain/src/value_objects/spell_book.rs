//! Spell book - an insertion-ordered map from spell name to mana cost

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Spell name -> mana cost, in insertion order.
///
/// Costs are not validated: a negative cost is legal data and refunds mana
/// when cast.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpellBook {
    entries: IndexMap<String, i64>,
}

impl SpellBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of known spells.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, spell: &str) -> bool {
        self.entries.contains_key(spell)
    }

    /// Cost of `spell`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::KeyNotFound` if the spell is not in the book.
    pub fn get(&self, spell: &str) -> Result<i64, DomainError> {
        self.entries
            .get(spell)
            .copied()
            .ok_or_else(|| DomainError::key_not_found(spell))
    }

    /// Insert or overwrite a spell. Returns the previous cost, if any.
    ///
    /// Overwriting keeps the spell's original position.
    pub fn set(&mut self, spell: impl Into<String>, cost: i64) -> Option<i64> {
        self.entries.insert(spell.into(), cost)
    }

    /// Remove a spell, returning its cost.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::KeyNotFound` if the spell is not in the book.
    pub fn remove(&mut self, spell: &str) -> Result<i64, DomainError> {
        self.entries
            .shift_remove(spell)
            .ok_or_else(|| DomainError::key_not_found(spell))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// `(name, cost)` pairs in insertion order. Each call starts over.
    pub fn iter(&self) -> SpellIter<'_> {
        SpellIter {
            inner: self.entries.iter(),
        }
    }

    /// Spell names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }
}

/// Borrowing iterator over a [`SpellBook`].
#[derive(Debug, Clone)]
pub struct SpellIter<'a> {
    inner: indexmap::map::Iter<'a, String, i64>,
}

impl<'a> Iterator for SpellIter<'a> {
    type Item = (&'a str, i64);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, cost)| (name.as_str(), *cost))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for SpellIter<'_> {}

impl<'a> IntoIterator for &'a SpellBook {
    type Item = (&'a str, i64);
    type IntoIter = SpellIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<S: Into<String>> FromIterator<(S, i64)> for SpellBook {
    fn from_iter<I: IntoIterator<Item = (S, i64)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, cost)| (name.into(), cost))
                .collect(),
        }
    }
}

impl<S: Into<String>, const N: usize> From<[(S, i64); N]> for SpellBook {
    fn from(entries: [(S, i64); N]) -> Self {
        entries.into_iter().collect()
    }
}
