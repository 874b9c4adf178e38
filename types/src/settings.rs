//! Resolved register settings shared across crates.

use serde::Deserialize;

/// What a load does with more than four input values.
///
/// Fewer than four values is always an error; this only governs the
/// over-length case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LengthPolicy {
    /// Keep the first four values and drop the rest.
    #[default]
    Truncate,
    /// Fail with `InvalidInputLength`.
    Reject,
}

impl LengthPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Truncate => "truncate",
            Self::Reject => "reject",
        }
    }
}
