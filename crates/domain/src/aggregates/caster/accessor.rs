//! Field accessor layer for [`Caster`]
//!
//! Every field read, write and delete on a caster ends up here, both the
//! typed accessors (`mana()`, `set_level()`, ...) and the name-based ones
//! (`get_field("hp")`). Each request goes through the same three steps:
//!
//! 1. **Alias resolution** - `hp` is `mana`
//! 2. **Synthesis** - `numSpells` is computed from the spell book
//! 3. **Validation** - `level >= 1`, `mana >= 0`, and `name`/`level` can
//!    never be deleted
//!
//! Validation happens before any mutation, so a rejected write leaves the
//! caster exactly as it was.

use super::Caster;
use crate::error::DomainError;
use crate::events::CasterUpdate;
use crate::value_objects::{CasterName, Field, FieldValue, Level, Mana, SpellBook};

/// Where a field's value actually lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Name,
    Level,
    Mana,
    Spells,
    /// Computed on read, no storage
    SpellCount,
}

/// Alias resolution and synthesis: map an outward field to its slot.
fn resolve(field: Field) -> Slot {
    match field {
        Field::Name => Slot::Name,
        Field::Level => Slot::Level,
        Field::Mana | Field::Hp => Slot::Mana,
        Field::Spells => Slot::Spells,
        Field::NumSpells => Slot::SpellCount,
    }
}

impl Caster {
    // =========================================================================
    // Typed reads
    // =========================================================================

    /// Returns the caster's name.
    #[inline]
    pub fn name(&self) -> &CasterName {
        &self.name
    }

    /// Returns the caster's level.
    #[inline]
    pub fn level(&self) -> Level {
        self.level
    }

    /// Returns the caster's current mana.
    #[inline]
    pub fn mana(&self) -> Mana {
        self.mana
    }

    /// Alias of [`Caster::mana`].
    #[inline]
    pub fn hp(&self) -> Mana {
        self.mana()
    }

    /// Number of known spells, computed from the spell book.
    #[inline]
    pub fn num_spells(&self) -> usize {
        self.spells.len()
    }

    /// Read-only view of the spell book.
    #[inline]
    pub fn spells(&self) -> &SpellBook {
        &self.spells
    }

    // =========================================================================
    // Name-based access
    // =========================================================================

    /// Read a field by name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::AttributeNotFound` for names that are neither
    /// stored, aliased, nor synthesized.
    pub fn get_field(&self, name: &str) -> Result<FieldValue, DomainError> {
        Ok(self.read(name.parse()?))
    }

    /// Read a field.
    pub fn read(&self, field: Field) -> FieldValue {
        match resolve(field) {
            Slot::Name => FieldValue::Text(self.name.as_str().to_string()),
            Slot::Level => FieldValue::Int(self.level.get()),
            Slot::Mana => FieldValue::Int(self.mana.get()),
            Slot::Spells => FieldValue::Spells(self.spells.clone()),
            Slot::SpellCount => FieldValue::Int(self.num_spells() as i64),
        }
    }

    /// Write a field by name.
    ///
    /// # Errors
    ///
    /// See [`Caster::write`]; unknown names give
    /// `DomainError::AttributeNotFound`.
    pub fn set_field(
        &mut self,
        name: &str,
        value: impl Into<FieldValue>,
    ) -> Result<CasterUpdate, DomainError> {
        self.write(name.parse()?, value.into())
    }

    /// Write a field.
    ///
    /// # Errors
    ///
    /// - `DomainError::TypeMismatch` if the value kind doesn't fit the field
    /// - `DomainError::Validation` for `level < 1`, `mana < 0` or an invalid name
    /// - `DomainError::ImmutableField` for the synthesized `numSpells`
    pub fn write(&mut self, field: Field, value: FieldValue) -> Result<CasterUpdate, DomainError> {
        let result = match (resolve(field), value) {
            (Slot::Name, FieldValue::Text(name)) => self.set_name(name),
            (Slot::Level, FieldValue::Int(level)) => self.set_level(level),
            (Slot::Mana, FieldValue::Int(mana)) => self.set_mana(mana),
            (Slot::Spells, FieldValue::Spells(spells)) => Ok(self.replace_spells(spells)),
            (Slot::SpellCount, _) => Err(DomainError::immutable_field(
                field.as_str(),
                "synthesized attributes are read-only",
            )),
            (Slot::Name, other) => Err(DomainError::type_mismatch("text", other.kind())),
            (Slot::Level | Slot::Mana, other) => {
                Err(DomainError::type_mismatch("integer", other.kind()))
            }
            (Slot::Spells, other) => Err(DomainError::type_mismatch("spell book", other.kind())),
        };

        if let Err(err) = &result {
            tracing::debug!(caster = %self.name, field = %field, error = %err, "Rejected write");
        }
        result
    }

    /// Delete a field by name.
    ///
    /// # Errors
    ///
    /// See [`Caster::erase`]; unknown names give
    /// `DomainError::AttributeNotFound`.
    pub fn delete_field(&mut self, name: &str) -> Result<CasterUpdate, DomainError> {
        self.erase(name.parse()?)
    }

    /// Delete a field.
    ///
    /// Only the spell book has an empty state; deleting it forgets every
    /// spell. `name` and `level` are core attributes and are always
    /// protected; `mana` and `numSpells` have no absent state.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::ImmutableField` for anything but `spells`.
    pub fn erase(&mut self, field: Field) -> Result<CasterUpdate, DomainError> {
        match resolve(field) {
            Slot::Name | Slot::Level => Err(DomainError::immutable_field(
                field.as_str(),
                "core attributes cannot be deleted",
            )),
            Slot::Mana | Slot::SpellCount => Err(DomainError::immutable_field(
                field.as_str(),
                "attribute has no absent state",
            )),
            Slot::Spells => {
                let removed = self.spells.len();
                self.spells.clear();
                tracing::debug!(caster = %self.name, removed, "Cleared spell book");
                Ok(CasterUpdate::SpellsCleared { removed })
            }
        }
    }

    // =========================================================================
    // Typed writes
    // =========================================================================

    /// Rename the caster.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty or too long.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<CasterUpdate, DomainError> {
        let name = CasterName::new(name)?;
        let previous = std::mem::replace(&mut self.name, name);
        Ok(CasterUpdate::NameChanged {
            from: previous,
            to: self.name.clone(),
        })
    }

    /// Set the caster's level.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `level < 1`.
    pub fn set_level(&mut self, level: i64) -> Result<CasterUpdate, DomainError> {
        let level = Level::new(level)?;
        let previous = std::mem::replace(&mut self.level, level);
        Ok(CasterUpdate::LevelChanged {
            from: previous,
            to: self.level,
        })
    }

    /// Set the caster's mana.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `mana < 0`.
    pub fn set_mana(&mut self, mana: i64) -> Result<CasterUpdate, DomainError> {
        Ok(self.store_mana(Mana::new(mana)?))
    }

    /// Alias of [`Caster::set_mana`].
    pub fn set_hp(&mut self, hp: i64) -> Result<CasterUpdate, DomainError> {
        self.set_mana(hp)
    }

    /// Replace the spell book with `spells`, which is moved in.
    pub fn replace_spells(&mut self, spells: SpellBook) -> CasterUpdate {
        let previous_count = self.spells.len();
        self.spells = spells;
        CasterUpdate::SpellsReplaced {
            previous_count,
            count: self.spells.len(),
        }
    }

    /// Store an already-validated mana value. All mana mutations end here.
    pub(super) fn store_mana(&mut self, mana: Mana) -> CasterUpdate {
        let previous = std::mem::replace(&mut self.mana, mana);
        tracing::trace!(caster = %self.name, from = %previous, to = %mana, "Mana changed");
        CasterUpdate::ManaChanged {
            from: previous,
            to: self.mana,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aelar() -> Caster {
        Caster::new("Aelar", 5, 20)
            .unwrap()
            .with_spells(SpellBook::from([("fireball", 3), ("shield", 1)]))
    }

    mod reads {
        use super::*;

        #[test]
        fn hp_aliases_mana() {
            let mut caster = aelar();
            assert_eq!(caster.get_field("hp"), caster.get_field("mana"));
            assert_eq!(caster.hp(), caster.mana());

            caster.invoke("fireball", None);
            assert_eq!(caster.get_field("hp"), Ok(FieldValue::Int(17)));
            assert_eq!(caster.hp().get(), 17);

            caster.set_mana(4).unwrap();
            assert_eq!(caster.get_field("hp"), Ok(FieldValue::Int(4)));
        }

        #[test]
        fn num_spells_tracks_the_book() {
            let mut caster = aelar();
            assert_eq!(caster.get_field("numSpells"), Ok(FieldValue::Int(2)));

            caster.set("haste", 3);
            assert_eq!(caster.get_field("numSpells"), Ok(FieldValue::Int(3)));
            assert_eq!(caster.get_field("num_spells"), Ok(FieldValue::Int(3)));

            caster.delete("fireball").unwrap();
            assert_eq!(caster.num_spells(), caster.len());
            assert_eq!(caster.read(Field::NumSpells), FieldValue::Int(2));
        }

        #[test]
        fn stored_fields() {
            let caster = aelar();
            assert_eq!(caster.get_field("name"), Ok(FieldValue::from("Aelar")));
            assert_eq!(caster.get_field("level"), Ok(FieldValue::Int(5)));
            match caster.get_field("spells").unwrap() {
                FieldValue::Spells(book) => assert_eq!(&book, caster.spells()),
                other => panic!("Expected spell book, got {:?}", other),
            }
        }

        #[test]
        fn unknown_field_is_not_found() {
            assert_eq!(
                aelar().get_field("wisdom"),
                Err(DomainError::AttributeNotFound("wisdom".into()))
            );
        }
    }

    mod writes {
        use super::*;

        #[test]
        fn level_rejects_below_one() {
            let mut caster = aelar();
            assert!(matches!(
                caster.set_field("level", 0i64),
                Err(DomainError::Validation(_))
            ));
            assert_eq!(caster.level().get(), 5);

            assert_eq!(
                caster.set_field("level", 6i64),
                Ok(CasterUpdate::LevelChanged {
                    from: Level::new(5).unwrap(),
                    to: Level::new(6).unwrap()
                })
            );
        }

        #[test]
        fn mana_rejects_negative() {
            let mut caster = aelar();
            assert!(matches!(
                caster.set_field("mana", -1i64),
                Err(DomainError::Validation(_))
            ));
            assert!(matches!(caster.set_hp(-5), Err(DomainError::Validation(_))));
            assert_eq!(caster.mana().get(), 20);
        }

        #[test]
        fn hp_write_goes_to_mana() {
            let mut caster = aelar();
            caster.set_field("hp", 9i64).unwrap();
            assert_eq!(caster.mana().get(), 9);
        }

        #[test]
        fn wrong_kind_is_type_mismatch() {
            let mut caster = aelar();
            assert_eq!(
                caster.set_field("level", "high"),
                Err(DomainError::type_mismatch("integer", "text"))
            );
            assert_eq!(
                caster.set_field("name", 3i64),
                Err(DomainError::type_mismatch("text", "integer"))
            );
        }

        #[test]
        fn num_spells_is_read_only() {
            let mut caster = aelar();
            assert!(matches!(
                caster.set_field("numSpells", 10i64),
                Err(DomainError::ImmutableField { .. })
            ));
        }

        #[test]
        fn unknown_write_is_not_found() {
            let mut caster = aelar();
            assert!(matches!(
                caster.set_field("wisdom", 10i64),
                Err(DomainError::AttributeNotFound(_))
            ));
        }

        #[test]
        fn name_and_spells_pass_through() {
            let mut caster = aelar();
            caster.set_field("name", "Aelar the Bold").unwrap();
            assert_eq!(caster.name().as_str(), "Aelar the Bold");

            let update = caster
                .set_field("spells", SpellBook::from([("haste", 3)]))
                .unwrap();
            assert_eq!(
                update,
                CasterUpdate::SpellsReplaced {
                    previous_count: 2,
                    count: 1
                }
            );
            assert!(caster.contains("haste"));
        }
    }

    mod deletes {
        use super::*;

        #[test]
        fn name_and_level_are_protected() {
            let mut caster = aelar();
            for name in ["name", "level"] {
                assert!(matches!(
                    caster.delete_field(name),
                    Err(DomainError::ImmutableField { .. })
                ));
            }

            // Regardless of state
            caster.set_mana(0).unwrap();
            caster.erase(Field::Spells).unwrap();
            assert!(matches!(
                caster.erase(Field::Level),
                Err(DomainError::ImmutableField { .. })
            ));
            assert_eq!(caster.level().get(), 5);
        }

        #[test]
        fn spells_delete_clears_book() {
            let mut caster = aelar();
            assert_eq!(
                caster.delete_field("spells"),
                Ok(CasterUpdate::SpellsCleared { removed: 2 })
            );
            assert!(caster.is_empty());
            assert_eq!(caster.get_field("numSpells"), Ok(FieldValue::Int(0)));
        }

        #[test]
        fn mana_has_no_absent_state() {
            let mut caster = aelar();
            assert!(matches!(
                caster.delete_field("hp"),
                Err(DomainError::ImmutableField { .. })
            ));
            assert!(matches!(
                caster.delete_field("wisdom"),
                Err(DomainError::AttributeNotFound(_))
            ));
        }
    }
}
