//! Singles quality tiers.
//!
//! BABIP acts as a prior on how hard a batter's singles are hit. The low tier
//! absorbs rounding so the three tiers always add up to the input total.

use serde::{Deserialize, Serialize};

/// Tier shares `(high, mid, low)` for a BABIP value.
#[must_use]
pub fn tier_shares(babip: f64) -> (f64, f64, f64) {
    if babip > 0.320 {
        (0.40, 0.40, 0.20)
    } else if babip > 0.300 {
        (0.35, 0.40, 0.25)
    } else if babip < 0.260 {
        (0.20, 0.45, 0.35)
    } else {
        (0.30, 0.45, 0.25)
    }
}

/// Singles split into sharp, line-drive and infield tiers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinglesSplit {
    pub high: u8,
    pub mid: u8,
    pub low: u8,
}

impl SinglesSplit {
    /// Split `total` singles using `babip` as the prior.
    #[must_use]
    pub fn new(total: u8, babip: f64) -> Self {
        let (high_share, mid_share, _) = tier_shares(babip);
        let total_f = f64::from(total);
        let high = ((total_f * high_share).round() as u8).min(total);
        let mid = ((total_f * mid_share).round() as u8).min(total - high);
        let low = total.saturating_sub(high).saturating_sub(mid);
        Self { high, mid, low }
    }

    #[must_use]
    pub fn total(&self) -> u8 {
        self.high + self.mid + self.low
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_split() {
        let split = SinglesSplit::new(8, 0.280);
        // 2.4 → 2, 3.6 → 4
        assert_eq!(split, SinglesSplit { high: 2, mid: 4, low: 2 });
    }

    #[test]
    fn test_high_babip_split() {
        let split = SinglesSplit::new(10, 0.330);
        assert_eq!(split, SinglesSplit { high: 4, mid: 4, low: 2 });
    }

    #[test]
    fn test_above_three_hundred() {
        let split = SinglesSplit::new(8, 0.310);
        // 2.8 → 3, 3.2 → 3
        assert_eq!(split, SinglesSplit { high: 3, mid: 3, low: 2 });
    }

    #[test]
    fn test_low_babip_split() {
        let split = SinglesSplit::new(5, 0.240);
        // 1.0 → 1, 2.25 → 2
        assert_eq!(split, SinglesSplit { high: 1, mid: 2, low: 2 });
    }

    #[test]
    fn test_boundaries_are_strict() {
        assert_eq!(tier_shares(0.320), (0.35, 0.40, 0.25));
        assert_eq!(tier_shares(0.300), (0.30, 0.45, 0.25));
        assert_eq!(tier_shares(0.260), (0.30, 0.45, 0.25));
    }

    #[test]
    fn test_zero_singles() {
        assert_eq!(SinglesSplit::new(0, 0.350).total(), 0);
    }

    #[test]
    fn test_tiers_sum_to_total() {
        for total in 0..=25u8 {
            for babip in [-1.0, 0.0, 0.25, 0.27, 0.305, 0.33, 1.5] {
                let split = SinglesSplit::new(total, babip);
                assert_eq!(split.total(), total, "total={} babip={}", total, babip);
            }
        }
    }
}
