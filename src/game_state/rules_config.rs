//! Rule toggles for behavior the base rules leave open.
//!
//! Defaults reproduce standard play with promotion unsupported. The binary
//! reads overrides from the environment.

use std::env;

/// What happens when a pawn move ends on the far row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PromotionPolicy {
    /// The move is rejected with `IllegalMove::PromotionUnsupported`.
    #[default]
    Reject,
    /// The pawn becomes a queen of its color.
    AutoQueen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RulesConfig {
    pub promotion: PromotionPolicy,
    pub forbid_castling_through_check: bool,
    pub forbid_adjacent_kings: bool,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            promotion: PromotionPolicy::Reject,
            forbid_castling_through_check: true,
            forbid_adjacent_kings: true,
        }
    }
}

impl RulesConfig {
    /// Defaults, overridden by `CHESSBOT_PROMOTION` (`reject` | `queen`),
    /// `CHESSBOT_CASTLE_THROUGH_CHECK` (`allow` | `forbid`) and
    /// `CHESSBOT_ADJACENT_KINGS` (`allow` | `forbid`).
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(value) = lookup("CHESSBOT_PROMOTION") {
            match value.to_ascii_lowercase().as_str() {
                "queen" | "autoqueen" => config.promotion = PromotionPolicy::AutoQueen,
                "reject" => config.promotion = PromotionPolicy::Reject,
                other => log::warn!("ignoring unknown CHESSBOT_PROMOTION value: {other}"),
            }
        }
        if let Some(value) = lookup("CHESSBOT_CASTLE_THROUGH_CHECK") {
            if let Some(forbid) = parse_allow_forbid(&value) {
                config.forbid_castling_through_check = forbid;
            } else {
                log::warn!("ignoring unknown CHESSBOT_CASTLE_THROUGH_CHECK value: {value}");
            }
        }
        if let Some(value) = lookup("CHESSBOT_ADJACENT_KINGS") {
            if let Some(forbid) = parse_allow_forbid(&value) {
                config.forbid_adjacent_kings = forbid;
            } else {
                log::warn!("ignoring unknown CHESSBOT_ADJACENT_KINGS value: {value}");
            }
        }

        config
    }
}

fn parse_allow_forbid(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "allow" => Some(false),
        "forbid" => Some(true),
        _ => None,
    }
}
