//! Card generation configuration.
//!
//! Calibration constants (thresholds, tier tables, ladders) live next to the
//! code that uses them as immutable statics. `CardGenConfig` only carries the
//! knobs a caller may reasonably change per generation run.

use serde::{Deserialize, Serialize};

/// How the slot allocator handles a category sum above 25.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RescalePolicy {
    /// Rescale and re-round once, then trim any remaining excess.
    /// Matches the reference system's single rescale pass.
    #[default]
    SinglePass,
    /// Repeat the proportional rescale up to `max_passes` times before trimming.
    Iterate { max_passes: u8 },
}

/// Options for a card generation run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardGenConfig {
    /// Outs recorded a pitcher needs to enter the ERA percentile pool
    /// (default: 150, i.e. 50 innings).
    pub qualifying_outs: u32,

    /// Overflow handling in the slot allocator.
    pub rescale: RescalePolicy,

    /// Primary outcome-table attempts before the static fallback mapping.
    pub fallback_attempts: u32,
}

impl Default for CardGenConfig {
    fn default() -> Self {
        Self {
            qualifying_outs: 150,
            rescale: RescalePolicy::default(),
            fallback_attempts: 3,
        }
    }
}

impl CardGenConfig {
    /// Set the qualifying threshold for the ERA pool.
    #[must_use]
    pub fn with_qualifying_outs(mut self, outs: u32) -> Self {
        self.qualifying_outs = outs;
        self
    }

    /// Set the overflow rescale policy.
    #[must_use]
    pub fn with_rescale(mut self, policy: RescalePolicy) -> Self {
        self.rescale = policy;
        self
    }

    /// Set the number of primary lookup attempts.
    #[must_use]
    pub fn with_fallback_attempts(mut self, attempts: u32) -> Self {
        self.fallback_attempts = attempts;
        self
    }
}
