//! Value objects - Immutable objects defined by their attributes

mod field;
mod format;
mod mana_op;
mod names;
mod spell_book;
mod stat;

pub use field::{Field, FieldValue};
pub use format::CasterFormat;
pub use mana_op::ManaOp;
pub use names::{CasterName, MAX_NAME_LENGTH};
pub use spell_book::{SpellBook, SpellIter};
pub use stat::{Level, Mana, MIN_LEVEL};
