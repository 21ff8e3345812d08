#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Knobs for how strictly moves are validated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RulesConfig {
    /// Reject moves that leave the mover's own king attacked.
    ///
    /// Off by default: a side may walk into check, and the opponent may then
    /// capture the king.
    pub forbid_self_check: bool,
}

impl RulesConfig {
    /// Full chess legality: no move may expose the mover's own king.
    #[must_use]
    pub const fn strict() -> Self {
        RulesConfig {
            forbid_self_check: true,
        }
    }
}
