//! Pitching counting stats.
//!
//! Innings are stored as outs recorded so that 150⅓ IP stays exact (451).

use serde::{Deserialize, Serialize};

use super::batting::ratio;

/// Aggregate pitching line for one player-season.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitchingLine {
    pub outs_recorded: u32,
    pub earned_runs: u32,
    pub hits: u32,
    pub walks: u32,
    pub strikeouts: u32,
    pub home_runs: u32,
    pub games: u32,
    pub games_started: u32,
}

impl PitchingLine {
    /// Innings pitched as a decimal.
    #[must_use]
    pub fn innings(&self) -> f64 {
        self.outs_recorded as f64 / 3.0
    }

    /// Earned run average.
    #[must_use]
    pub fn era(&self) -> f64 {
        ratio(self.earned_runs as f64 * 27.0, self.outs_recorded as f64)
    }

    /// Walks plus hits per inning.
    #[must_use]
    pub fn whip(&self) -> f64 {
        ratio((self.hits + self.walks) as f64 * 3.0, self.outs_recorded as f64)
    }

    #[must_use]
    pub fn strikeouts_per_nine(&self) -> f64 {
        self.per_nine(self.strikeouts)
    }

    #[must_use]
    pub fn walks_per_nine(&self) -> f64 {
        self.per_nine(self.walks)
    }

    #[must_use]
    pub fn home_runs_per_nine(&self) -> f64 {
        self.per_nine(self.home_runs)
    }

    /// Average outs recorded per appearance.
    #[must_use]
    pub fn outs_per_appearance(&self) -> f64 {
        ratio(self.outs_recorded as f64, self.games as f64)
    }

    fn per_nine(&self, count: u32) -> f64 {
        ratio(count as f64 * 27.0, self.outs_recorded as f64)
    }
}
