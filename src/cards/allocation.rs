//! Slot allocation: per-PA rates to integer slot counts.
//!
//! ## Algorithm
//!
//! 1. Scale each rate by the 26 variable slots.
//! 2. Subtract one from every category the archetype pair already places on
//!    the card (positions 33/34 are drawn like any other slot).
//! 3. Round half away from zero; speed uses a 0–3 step on steal rate.
//! 4. Guarantee a walk and a strikeout slot when the rate is positive.
//! 5. If more than 25 slots are claimed, rescale the non-speed categories by
//!    `25 / sum` and re-round (see `RescalePolicy`), then trim any excess so
//!    at least one out slot always remains.
//! 6. Whatever is left becomes outs.

use serde::{Deserialize, Serialize};

use super::archetype::Archetype;
use crate::core::{AllocationBucket, RescalePolicy, VARIABLE_SLOTS};
use crate::stats::PlayerRates;

/// Most slots non-out categories may claim.
pub const MAX_NON_OUT_SLOTS: u32 = VARIABLE_SLOTS as u32 - 1;

/// Steal-rate steps for speed slots: rate below bound → that many slots.
pub const SPEED_STEPS: [(f64, u8); 3] = [(0.05, 0), (0.12, 1), (0.20, 2)];

/// Speed slots granted above the last step.
pub const MAX_SPEED_SLOTS: u8 = 3;

/// Integer slot counts over the 26 variable positions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAllocation {
    pub walks: u8,
    pub strikeouts: u8,
    pub home_runs: u8,
    pub singles: u8,
    pub doubles: u8,
    pub triples: u8,
    pub speed: u8,
    pub outs: u8,
}

impl SlotAllocation {
    /// Sum of every non-out category.
    #[must_use]
    pub fn non_out_total(&self) -> u32 {
        [
            self.walks,
            self.strikeouts,
            self.home_runs,
            self.singles,
            self.doubles,
            self.triples,
            self.speed,
        ]
        .iter()
        .map(|&c| u32::from(c))
        .sum()
    }

    /// Sum of every category, outs included.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.non_out_total() + u32::from(self.outs)
    }
}

/// Coarse 0–3 speed slot count for a steal rate.
#[must_use]
pub fn speed_slots(steal_rate: f64) -> u8 {
    SPEED_STEPS
        .iter()
        .find(|&&(bound, _)| steal_rate < bound)
        .map(|&(_, slots)| slots)
        .unwrap_or(MAX_SPEED_SLOTS)
}

/// Unrounded per-category slot counts (non-speed).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
struct RawCounts {
    walks: f64,
    strikeouts: f64,
    home_runs: f64,
    singles: f64,
    doubles: f64,
    triples: f64,
}

impl RawCounts {
    fn from_rates(rates: &PlayerRates) -> Self {
        let slots = VARIABLE_SLOTS as f64;
        Self {
            walks: rates.walk * slots,
            strikeouts: rates.strikeout * slots,
            home_runs: rates.home_run * slots,
            singles: rates.single * slots,
            doubles: rates.double * slots,
            triples: rates.triple * slots,
        }
    }

    fn bucket_mut(&mut self, bucket: AllocationBucket) -> Option<&mut f64> {
        match bucket {
            AllocationBucket::Walk => Some(&mut self.walks),
            AllocationBucket::Strikeout => Some(&mut self.strikeouts),
            AllocationBucket::HomeRun => Some(&mut self.home_runs),
            AllocationBucket::Single => Some(&mut self.singles),
            AllocationBucket::Double => Some(&mut self.doubles),
            AllocationBucket::Triple => Some(&mut self.triples),
            AllocationBucket::Speed => None,
        }
    }

    fn scaled(&self, factor: f64) -> Self {
        Self {
            walks: self.walks * factor,
            strikeouts: self.strikeouts * factor,
            home_runs: self.home_runs * factor,
            singles: self.singles * factor,
            doubles: self.doubles * factor,
            triples: self.triples * factor,
        }
    }
}

fn round_count(raw: f64) -> u8 {
    // f64::round is half-away-from-zero; clamp keeps u8 conversion exact.
    raw.round().clamp(0.0, VARIABLE_SLOTS as f64) as u8
}

/// Allocate the 26 variable slots.
///
/// `archetype` is the pair already chosen for positions 33/34; any category
/// it contributes is removed from the raw counts first.
#[must_use]
pub fn allocate(rates: &PlayerRates, archetype: Archetype, policy: RescalePolicy) -> SlotAllocation {
    let mut raw = RawCounts::from_rates(rates);
    let mut speed = speed_slots(rates.steal);

    for value in archetype.values() {
        match value.outcome().allocation_bucket() {
            Some(AllocationBucket::Speed) => speed = speed.saturating_sub(1),
            Some(bucket) => {
                if let Some(count) = raw.bucket_mut(bucket) {
                    *count = (*count - 1.0).max(0.0);
                }
            }
            None => {}
        }
    }

    let mut allocation = round_all(&raw, rates, speed);

    let max_passes = match policy {
        RescalePolicy::SinglePass => 1,
        RescalePolicy::Iterate { max_passes } => max_passes.max(1),
    };
    let mut passes = 0;
    while allocation.non_out_total() > MAX_NON_OUT_SLOTS && passes < max_passes {
        let factor = MAX_NON_OUT_SLOTS as f64 / allocation.non_out_total() as f64;
        raw = raw.scaled(factor);
        allocation = round_all(&raw, rates, speed);
        passes += 1;
        tracing::trace!(
            pass = passes,
            factor,
            total = allocation.non_out_total(),
            "slot allocation rescaled"
        );
    }

    trim_excess(&mut allocation);
    allocation.outs = (VARIABLE_SLOTS as u32 - allocation.non_out_total()) as u8;
    allocation
}

fn round_all(raw: &RawCounts, rates: &PlayerRates, speed: u8) -> SlotAllocation {
    let mut allocation = SlotAllocation {
        walks: round_count(raw.walks),
        strikeouts: round_count(raw.strikeouts),
        home_runs: round_count(raw.home_runs),
        singles: round_count(raw.singles),
        doubles: round_count(raw.doubles),
        triples: round_count(raw.triples),
        speed,
        outs: 0,
    };
    if rates.walk > 0.0 && allocation.walks == 0 {
        allocation.walks = 1;
    }
    if rates.strikeout > 0.0 && allocation.strikeouts == 0 {
        allocation.strikeouts = 1;
    }
    allocation
}

/// Remove slots one at a time from the largest non-speed category until at
/// most 25 remain. Ties go to the first category in trim order.
fn trim_excess(allocation: &mut SlotAllocation) {
    let excess = allocation.non_out_total().saturating_sub(MAX_NON_OUT_SLOTS);
    if excess > 0 {
        tracing::debug!(excess, "trimming slot allocation after rescale");
    }
    while allocation.non_out_total() > MAX_NON_OUT_SLOTS {
        let order = [
            &mut allocation.singles,
            &mut allocation.strikeouts,
            &mut allocation.walks,
            &mut allocation.doubles,
            &mut allocation.home_runs,
            &mut allocation.triples,
        ];
        let mut largest = 0;
        for i in 1..order.len() {
            if *order[i] > *order[largest] {
                largest = i;
            }
        }
        if *order[largest] == 0 {
            // Only speed slots remain, and those never exceed 3.
            break;
        }
        *order[largest] -= 1;
    }
}
