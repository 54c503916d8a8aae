//! Small shared types.

use serde::{Deserialize, Serialize};

/// Index of a synth parameter within the engine's parameter table.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ParamIndex(pub u32);

impl ParamIndex {
    /// The raw index value.
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ParamIndex {
    fn from(index: u32) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for ParamIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
