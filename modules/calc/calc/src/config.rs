//! Configuration for the calc module.

use serde::Deserialize;

/// Configuration for the calc module (`modules.calc.config`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct CalcConfig {
    /// Emit a `debug` event with the operands of every operation.
    /// Default: `true`
    pub trace_operations: bool,
}

impl CalcConfig {
    pub const DEFAULT: Self = Self {
        trace_operations: true,
    };
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
