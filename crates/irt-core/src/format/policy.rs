//! Formatting Policies
//!
//! Selects how floats are rendered and what happens to non-finite input.

use serde::{Deserialize, Serialize};

/// Float rendering policy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FloatPolicy {
    /// Fewest decimals (0, 1 or 2) needed, capped at two
    #[default]
    Nice,

    /// Always six decimals, the legacy `%f` output
    FixedSix,
}

/// Handling of NaN and infinite floats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonFinitePolicy {
    /// Emit `NaN`, `Infinity` or `-Infinity`
    #[default]
    Spell,

    /// Fail with `UndefinedNumericInput`
    Reject,
}
