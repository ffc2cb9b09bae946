//! Mana operators for the dynamic operator entry point

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the caster's mana operators.
///
/// All but `AddInPlace` produce a new caster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ManaOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    AddInPlace,
}

impl ManaOp {
    pub fn as_str(self) -> &'static str {
        match self {
            ManaOp::Add => "add",
            ManaOp::Subtract => "subtract",
            ManaOp::Multiply => "multiply",
            ManaOp::Divide => "divide",
            ManaOp::AddInPlace => "addInPlace",
        }
    }
}

impl fmt::Display for ManaOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
