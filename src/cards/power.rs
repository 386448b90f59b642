//! Power rating: ISO bucketed into the value written at position 24.
//!
//! Every tier value is a hit code, so a draw of the power slot always passes
//! the game engine's pitcher-grade gate. Recalibrated tiers must keep that
//! property (`test_all_tiers_pass_grade_gate`).

use crate::core::CardValue;

/// `(exclusive ISO upper bound, slot value)`, ascending. The last bound is
/// infinite so the lookup is total.
pub const POWER_TIERS: [(f64, CardValue); 5] = [
    (0.100, CardValue(9)),
    (0.150, CardValue(8)),
    (0.200, CardValue(6)),
    (0.250, CardValue(3)),
    (f64::INFINITY, CardValue(1)),
];

/// Power slot value for an ISO.
#[must_use]
pub fn power_rating(iso: f64) -> CardValue {
    POWER_TIERS
        .iter()
        .find(|&&(bound, _)| iso < bound)
        .map(|&(_, value)| value)
        .unwrap_or(POWER_TIERS[POWER_TIERS.len() - 1].1)
}

/// Index of the tier `iso` falls in (0 = weakest).
#[must_use]
pub fn power_tier(iso: f64) -> usize {
    POWER_TIERS
        .iter()
        .position(|&(bound, _)| iso < bound)
        .unwrap_or(POWER_TIERS.len() - 1)
}

/// Does a drawn value pass the pitcher-grade gate unconditionally?
#[must_use]
pub fn passes_grade_gate(value: CardValue) -> bool {
    value.outcome().is_hit()
}
