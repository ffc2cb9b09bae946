//! Grimoire domain: the `Caster` aggregate and its value objects.
//!
//! A caster has a validated name, level and mana pool plus an owned spell
//! book. It supports identity equality and hashing, `(level, mana)`
//! ordering, a container protocol over its spells, mana arithmetic that
//! derives new casters, spell invocation, and a field accessor layer that
//! aliases, synthesizes and validates every field touch.
//!
//! # Quick Start
//!
//! ```
//! use grimoire_domain::{Caster, FieldValue, SpellBook};
//!
//! let mut aelar = Caster::new("Aelar", 5, 20)?
//!     .with_spells(SpellBook::from([("fireball", 3), ("shield", 1)]));
//!
//! let richer = aelar.add(10)?;
//! assert_eq!(richer.mana().get(), 30);
//! assert_eq!(aelar.mana().get(), 20);
//!
//! println!("{}", aelar.invoke("fireball", Some("goblin")));
//! assert_eq!(aelar.get_field("hp")?, FieldValue::Int(17));
//! # Ok::<(), grimoire_domain::DomainError>(())
//! ```

pub mod aggregates;
pub mod error;
pub mod events;
pub mod value_objects;

pub use aggregates::Caster;
pub use error::DomainError;
pub use events::{CastOutcome, CasterUpdate, SpellBookChange};
pub use value_objects::{
    CasterFormat, CasterName, Field, FieldValue, Level, Mana, ManaOp, SpellBook, SpellIter,
};
