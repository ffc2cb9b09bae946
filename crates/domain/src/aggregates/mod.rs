//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns domain events from mutations
//!
//! # Rustic DDD Principles
//!
//! | Dynamic-language habit | Rustic Equivalent |
//! |------------------------|-------------------|
//! | Attribute hooks on every access | One accessor module per aggregate |
//! | Operator overloading on anything | Named methods + `FieldValue` for dynamic operands |
//! | Shared mutable dict | Owned `SpellBook`, moved in |
//! | Exceptions for outcomes | Return enums from mutations |

pub mod caster;

pub use caster::Caster;
