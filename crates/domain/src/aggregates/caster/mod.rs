//! Caster aggregate - a spellcaster with a validated mana pool and a spell book
//!
//! # Rustic DDD Design
//!
//! This aggregate follows Rustic DDD principles:
//! - **Private fields**: All fields are encapsulated; every field read, write
//!   and delete goes through the [`accessor`] module
//! - **Newtypes**: `CasterName`, `Level` and `Mana` are valid by construction
//! - **Owned spell book**: the `SpellBook` is moved in, never shared, and only
//!   reachable through the container methods or a shared reference
//! - **Domain events**: Mutations return outcome enums (`CastOutcome`,
//!   `CasterUpdate`, `SpellBookChange`)
//!
//! # Identity vs. ordering
//!
//! Two casters are equal when `name` and `level` match, and `Hash` uses the
//! same key. Ordering is by `(level, mana)` and is exposed as
//! [`Caster::compare`] rather than `Ord`, because an `Ord` that disagrees with
//! `Eq` would break sorted collections.

pub mod accessor;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Add;

use crate::error::DomainError;
use crate::events::{CastOutcome, CasterUpdate, SpellBookChange};
use crate::value_objects::{
    CasterFormat, CasterName, FieldValue, Level, Mana, ManaOp, SpellBook, SpellIter,
};

/// Field delimiter of the byte form.
const BYTES_DELIMITER: char = '|';

/// A spellcaster
///
/// # Invariants
///
/// - `name` is always non-empty and <= 200 characters (enforced by `CasterName`)
/// - `level >= 1` (enforced by `Level`)
/// - `mana >= 0` (enforced by `Mana`); a rejected write leaves state unchanged
/// - the spell book is exclusively owned
///
/// # Example
///
/// ```
/// use grimoire_domain::aggregates::Caster;
/// use grimoire_domain::value_objects::SpellBook;
///
/// let mut caster = Caster::new("Aelar", 5, 20)
///     .unwrap()
///     .with_spells(SpellBook::from([("fireball", 3)]));
///
/// let outcome = caster.invoke("fireball", None);
/// assert!(outcome.is_cast());
/// assert_eq!(caster.mana().get(), 17);
/// ```
#[derive(Clone)]
pub struct Caster {
    name: CasterName,
    level: Level,
    mana: Mana,
    spells: SpellBook,
}

impl Caster {
    // =========================================================================
    // Constructor
    // =========================================================================

    /// Create a caster with an empty spell book.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty, `level < 1`
    /// or `mana < 0`.
    pub fn new(name: impl Into<String>, level: i64, mana: i64) -> Result<Self, DomainError> {
        Ok(Self::from_parts(
            CasterName::new(name)?,
            Level::new(level)?,
            Mana::new(mana)?,
        ))
    }

    /// Create a caster from pre-validated parts.
    pub fn from_parts(name: CasterName, level: Level, mana: Mana) -> Self {
        Self {
            name,
            level,
            mana,
            spells: SpellBook::new(),
        }
    }

    /// Set the caster's spell book. The book is moved in, so the caller
    /// keeps no handle to it.
    pub fn with_spells(mut self, spells: impl Into<SpellBook>) -> Self {
        self.spells = spells.into();
        self
    }

    /// A caster with the same identity and a copy of the spell book, but a
    /// different mana pool.
    fn derive(&self, mana: Mana) -> Self {
        Self {
            name: self.name.clone(),
            level: self.level,
            mana,
            spells: self.spells.clone(),
        }
    }

    // =========================================================================
    // Equality, ordering, hashing
    // =========================================================================

    /// The `(name, level)` key shared by `PartialEq` and `Hash`.
    #[inline]
    pub fn identity_key(&self) -> (&str, Level) {
        (self.name.as_str(), self.level)
    }

    /// The `(level, mana)` key used for ordering.
    #[inline]
    pub fn ordering_key(&self) -> (Level, Mana) {
        (self.level, self.mana)
    }

    /// Compare by `(level, mana)`, ascending. Name and spells are ignored.
    pub fn compare(&self, other: &Caster) -> Ordering {
        self.ordering_key().cmp(&other.ordering_key())
    }

    #[inline]
    pub fn is_weaker_than(&self, other: &Caster) -> bool {
        self.compare(other) == Ordering::Less
    }

    #[inline]
    pub fn is_stronger_than(&self, other: &Caster) -> bool {
        self.compare(other) == Ordering::Greater
    }

    /// `<=` under [`Caster::compare`].
    #[inline]
    pub fn is_at_most(&self, other: &Caster) -> bool {
        self.compare(other).is_le()
    }

    /// `>=` under [`Caster::compare`].
    #[inline]
    pub fn is_at_least(&self, other: &Caster) -> bool {
        self.compare(other).is_ge()
    }

    /// Equality against a dynamic value. Anything but a caster is unequal.
    pub fn equals_value(&self, other: &FieldValue) -> bool {
        match other {
            FieldValue::Caster(other) => self == other.as_ref(),
            _ => false,
        }
    }

    /// Ordering against a dynamic value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::TypeMismatch` if `other` is not a caster.
    pub fn try_compare(&self, other: &FieldValue) -> Result<Ordering, DomainError> {
        match other {
            FieldValue::Caster(other) => Ok(self.compare(other)),
            other => Err(DomainError::type_mismatch("caster", other.kind())),
        }
    }

    // =========================================================================
    // Container protocol over the spell book
    // =========================================================================

    /// Number of known spells.
    #[inline]
    pub fn len(&self) -> usize {
        self.spells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }

    pub fn contains(&self, spell: &str) -> bool {
        self.spells.contains(spell)
    }

    /// Cost of a known spell.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::KeyNotFound` if the spell is unknown.
    pub fn get(&self, spell: &str) -> Result<i64, DomainError> {
        self.spells.get(spell)
    }

    /// Learn a spell or change its cost. Costs are not validated.
    pub fn set(&mut self, spell: impl Into<String>, cost: i64) -> SpellBookChange {
        let spell = spell.into();
        tracing::trace!(caster = %self.name, spell = %spell, cost, "Writing spell");
        match self.spells.set(spell.clone(), cost) {
            Some(from) => SpellBookChange::CostChanged {
                spell,
                from,
                to: cost,
            },
            None => SpellBookChange::Learned { spell, cost },
        }
    }

    /// Forget a spell.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::KeyNotFound` if the spell is unknown.
    pub fn delete(&mut self, spell: &str) -> Result<SpellBookChange, DomainError> {
        let cost = self.spells.remove(spell)?;
        tracing::trace!(caster = %self.name, spell = %spell, "Forgot spell");
        Ok(SpellBookChange::Forgotten {
            spell: spell.to_string(),
            cost,
        })
    }

    /// `(spell, cost)` pairs in the order they were learned.
    pub fn iter(&self) -> SpellIter<'_> {
        self.spells.iter()
    }

    /// Spell names in the order they were learned.
    pub fn known_spells(&self) -> Vec<&str> {
        self.spells.names().collect()
    }

    // =========================================================================
    // Mana arithmetic (new casters, except `add_in_place`)
    // =========================================================================

    /// A new caster with `mana + n`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the result would be negative.
    pub fn add(&self, n: i64) -> Result<Caster, DomainError> {
        Ok(self.derive(self.mana.checked_add(n)?))
    }

    /// A new caster with `max(0, mana - n)`. Never fails.
    pub fn subtract(&self, n: i64) -> Caster {
        self.derive(self.mana.clamped_sub(n))
    }

    /// A new caster with `mana * n`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the product would be negative.
    pub fn multiply(&self, n: i64) -> Result<Caster, DomainError> {
        Ok(self.derive(self.mana.checked_mul(n)?))
    }

    /// A new caster with `floor(mana / n)`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DivisionByZero` if `n == 0`, and
    /// `DomainError::Validation` if the quotient would be negative.
    pub fn divide(&self, n: i64) -> Result<Caster, DomainError> {
        Ok(self.derive(self.mana.floor_div(n)?))
    }

    /// Add `n` to this caster's own mana.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the result would be negative;
    /// mana is left unchanged.
    pub fn add_in_place(&mut self, n: i64) -> Result<CasterUpdate, DomainError> {
        let mana = self.mana.checked_add(n)?;
        Ok(self.store_mana(mana))
    }

    /// Apply a mana operator to a dynamic operand.
    ///
    /// Returns the derived caster, or `None` for `ManaOp::AddInPlace`, which
    /// mutates `self` instead.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnsupportedOperand` for a non-integer operand,
    /// otherwise whatever the operator itself returns.
    pub fn apply(
        &mut self,
        op: ManaOp,
        operand: &FieldValue,
    ) -> Result<Option<Caster>, DomainError> {
        let n = operand
            .as_int()
            .ok_or_else(|| DomainError::unsupported_operand(op.as_str(), operand.kind()))?;
        match op {
            ManaOp::Add => self.add(n).map(Some),
            ManaOp::Subtract => Ok(Some(self.subtract(n))),
            ManaOp::Multiply => self.multiply(n).map(Some),
            ManaOp::Divide => self.divide(n).map(Some),
            ManaOp::AddInPlace => self.add_in_place(n).map(|_| None),
        }
    }

    // =========================================================================
    // Invocation
    // =========================================================================

    /// Attempt to cast `spell`, optionally at a target.
    ///
    /// Only a successful cast changes state (its cost is deducted). Unknown
    /// spells and insufficient mana come back as outcomes, not errors.
    pub fn invoke(&mut self, spell: &str, target: Option<&str>) -> CastOutcome {
        let Ok(cost) = self.spells.get(spell) else {
            tracing::debug!(caster = %self.name, spell = %spell, "Unknown spell");
            return CastOutcome::UnknownSpell {
                caster: self.name.clone(),
                spell: spell.to_string(),
            };
        };

        if self.mana.get() < cost {
            tracing::debug!(
                caster = %self.name,
                spell = %spell,
                cost,
                mana = %self.mana,
                "Not enough mana to cast"
            );
            return CastOutcome::InsufficientMana {
                caster: self.name.clone(),
                spell: spell.to_string(),
                cost,
                available: self.mana,
            };
        }

        self.store_mana(self.mana.spend(cost));
        tracing::debug!(
            caster = %self.name,
            spell = %spell,
            cost,
            remaining = %self.mana,
            "Spell cast"
        );

        CastOutcome::Cast {
            caster: self.name.clone(),
            spell: spell.to_string(),
            cost,
            remaining_mana: self.mana,
            target: target.map(str::to_string),
        }
    }

    /// Cast `spell` at another caster, identified by name.
    pub fn invoke_on(&mut self, spell: &str, target: &Caster) -> CastOutcome {
        self.invoke(spell, Some(target.name.as_str()))
    }

    /// True when the caster has any mana left.
    #[inline]
    pub fn is_charged(&self) -> bool {
        !self.mana.is_empty()
    }

    // =========================================================================
    // Textual and byte forms
    // =========================================================================

    /// Render in one of the named formats.
    pub fn render(&self, format: CasterFormat) -> String {
        match format {
            CasterFormat::Short => format!("{} (Lv {})", self.name, self.level),
            CasterFormat::Mana => format!("{}: {} MP", self.name, self.mana),
            CasterFormat::Friendly => self.to_string(),
        }
    }

    /// Render by format key; unknown keys give the friendly form.
    pub fn render_key(&self, key: &str) -> String {
        self.render(CasterFormat::from_key(key))
    }

    /// `name|level|mana` as UTF-8.
    pub fn to_bytes(&self) -> Vec<u8> {
        format!(
            "{}{d}{}{d}{}",
            self.name,
            self.level,
            self.mana,
            d = BYTES_DELIMITER
        )
        .into_bytes()
    }

    /// Decode the byte form. The spell book is not part of it and starts
    /// empty. The name may itself contain the delimiter.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Parse` for malformed input and
    /// `DomainError::Validation` for out-of-range values.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, DomainError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| DomainError::parse(format!("Caster bytes are not UTF-8: {}", e)))?;

        let mut fields = text.rsplitn(3, BYTES_DELIMITER);
        let (Some(mana), Some(level), Some(name)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(DomainError::parse(format!(
                "Expected name{d}level{d}mana, got {:?}",
                text,
                d = BYTES_DELIMITER
            )));
        };

        let level: i64 = level
            .parse()
            .map_err(|_| DomainError::parse(format!("Invalid level: {:?}", level)))?;
        let mana: i64 = mana
            .parse()
            .map_err(|_| DomainError::parse(format!("Invalid mana: {:?}", mana)))?;

        Self::new(name, level, mana)
    }
}

impl PartialEq for Caster {
    fn eq(&self, other: &Self) -> bool {
        self.identity_key() == other.identity_key()
    }
}

impl Eq for Caster {}

impl Hash for Caster {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity_key().hash(state);
    }
}

impl fmt::Debug for Caster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Caster")
            .field("name", &self.name.as_str())
            .field("level", &self.level.get())
            .field("mana", &self.mana.get())
            .field("spells", &self.known_spells())
            .finish()
    }
}

impl fmt::Display for Caster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&format!(
            "Caster {} (Lv {}, Mana {}, {} spells)",
            self.name,
            self.level,
            self.mana,
            self.len()
        ))
    }
}

impl<'a> IntoIterator for &'a Caster {
    type Item = (&'a str, i64);
    type IntoIter = SpellIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Add<i64> for &Caster {
    type Output = Result<Caster, DomainError>;

    fn add(self, n: i64) -> Self::Output {
        Caster::add(self, n)
    }
}

/// `n + caster` is the same as `caster + n`.
impl Add<&Caster> for i64 {
    type Output = Result<Caster, DomainError>;

    fn add(self, caster: &Caster) -> Self::Output {
        caster.add(self)
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

/// Intermediate format for serialization that matches the wire format
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CasterWireFormat {
    name: CasterName,
    level: Level,
    mana: Mana,
    #[serde(default)]
    spells: SpellBook,
}

impl Serialize for Caster {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let wire = CasterWireFormat {
            name: self.name.clone(),
            level: self.level,
            mana: self.mana,
            spells: self.spells.clone(),
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Caster {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Field newtypes validate on the way in
        let wire = CasterWireFormat::deserialize(deserializer)?;
        Ok(Caster::from_parts(wire.name, wire.level, wire.mana).with_spells(wire.spells))
    }
}
