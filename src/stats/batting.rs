//! Batting counting stats and the per-plate-appearance rates derived from them.
//!
//! Every ratio guards its denominator: a zero denominator yields `0.0`.

use serde::{Deserialize, Serialize};

/// Aggregate batting line for one player-season.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattingLine {
    pub ab: u32,
    pub h: u32,
    pub doubles: u32,
    pub triples: u32,
    pub hr: u32,
    pub bb: u32,
    pub so: u32,
    pub hbp: u32,
    pub sf: u32,
    pub sh: u32,
    pub sb: u32,
    pub cs: u32,
}

pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

impl BattingLine {
    /// Plate appearances: AB + BB + HBP + SF + SH.
    #[must_use]
    pub fn plate_appearances(&self) -> u32 {
        self.ab + self.bb + self.hbp + self.sf + self.sh
    }

    /// Singles, derived from hits minus extra-base hits.
    #[must_use]
    pub fn singles(&self) -> u32 {
        self.h
            .saturating_sub(self.doubles)
            .saturating_sub(self.triples)
            .saturating_sub(self.hr)
    }

    /// Total bases.
    #[must_use]
    pub fn total_bases(&self) -> u32 {
        self.singles() + 2 * self.doubles + 3 * self.triples + 4 * self.hr
    }

    /// Batting average.
    #[must_use]
    pub fn batting_average(&self) -> f64 {
        ratio(self.h as f64, self.ab as f64)
    }

    /// On-base percentage.
    #[must_use]
    pub fn on_base_percentage(&self) -> f64 {
        ratio(
            (self.h + self.bb + self.hbp) as f64,
            (self.ab + self.bb + self.hbp + self.sf) as f64,
        )
    }

    /// Slugging percentage.
    #[must_use]
    pub fn slugging(&self) -> f64 {
        ratio(self.total_bases() as f64, self.ab as f64)
    }

    /// Isolated power: SLG − BA.
    #[must_use]
    pub fn iso(&self) -> f64 {
        self.slugging() - self.batting_average()
    }

    /// Batting average on balls in play.
    #[must_use]
    pub fn babip(&self) -> f64 {
        let in_play = (self.ab + self.sf) as f64 - (self.so + self.hr) as f64;
        if in_play <= 0.0 {
            return 0.0;
        }
        (self.h.saturating_sub(self.hr)) as f64 / in_play
    }

    /// Stolen-base attempts.
    #[must_use]
    pub fn steal_attempts(&self) -> u32 {
        self.sb + self.cs
    }

    /// SB / (SB + CS); 0 with no attempts.
    #[must_use]
    pub fn steal_success_rate(&self) -> f64 {
        ratio(self.sb as f64, self.steal_attempts() as f64)
    }

    /// Steal attempts per time reaching first base (singles, walks, HBP).
    #[must_use]
    pub fn steal_rate(&self) -> f64 {
        ratio(
            self.steal_attempts() as f64,
            (self.singles() + self.bb + self.hbp) as f64,
        )
    }

    /// Per-PA rates consumed by the slot allocator.
    #[must_use]
    pub fn rates(&self) -> PlayerRates {
        let pa = self.plate_appearances() as f64;
        PlayerRates {
            walk: ratio(self.bb as f64, pa),
            strikeout: ratio(self.so as f64, pa),
            home_run: ratio(self.hr as f64, pa),
            single: ratio(self.singles() as f64, pa),
            double: ratio(self.doubles as f64, pa),
            triple: ratio(self.triples as f64, pa),
            steal: self.steal_rate(),
            iso: self.iso(),
            babip: self.babip(),
        }
    }
}

/// Per-plate-appearance outcome rates for one player-season.
///
/// Built once by `BattingLine::rates` (or by an external provider), consumed
/// once by the slot allocator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerRates {
    pub walk: f64,
    pub strikeout: f64,
    pub home_run: f64,
    pub single: f64,
    pub double: f64,
    pub triple: f64,
    /// Steal attempts per time on first.
    pub steal: f64,
    pub iso: f64,
    pub babip: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario_line() -> BattingLine {
        BattingLine {
            ab: 500,
            h: 150,
            doubles: 30,
            triples: 2,
            hr: 20,
            bb: 60,
            so: 90,
            sb: 5,
            ..Default::default()
        }
    }

    #[test]
    fn test_slash_line() {
        let line = scenario_line();
        assert_eq!(line.singles(), 98);
        assert_eq!(line.total_bases(), 244);
        assert!((line.batting_average() - 0.300).abs() < 1e-12);
        assert!((line.slugging() - 0.488).abs() < 1e-12);
        assert!((line.iso() - 0.188).abs() < 1e-9);
        assert!((line.on_base_percentage() - 210.0 / 560.0).abs() < 1e-12);
    }

    #[test]
    fn test_babip() {
        let line = scenario_line();
        // (150 - 20) / (500 - 90 - 20)
        assert!((line.babip() - 130.0 / 390.0).abs() < 1e-12);
    }

    #[test]
    fn test_rates_over_plate_appearances() {
        let line = scenario_line();
        let rates = line.rates();
        assert_eq!(line.plate_appearances(), 560);
        assert!((rates.walk - 60.0 / 560.0).abs() < 1e-12);
        assert!((rates.strikeout - 90.0 / 560.0).abs() < 1e-12);
        assert!((rates.single - 98.0 / 560.0).abs() < 1e-12);
        assert!((rates.steal - 5.0 / 158.0).abs() < 1e-12);
    }

    #[test]
    fn test_zero_denominators() {
        let empty = BattingLine::default();
        assert_eq!(empty.batting_average(), 0.0);
        assert_eq!(empty.babip(), 0.0);
        assert_eq!(empty.steal_success_rate(), 0.0);
        assert_eq!(empty.rates(), PlayerRates::default());
    }

    #[test]
    fn test_inconsistent_hits_saturate() {
        let line = BattingLine {
            ab: 10,
            h: 1,
            hr: 3,
            ..Default::default()
        };
        assert_eq!(line.singles(), 0);
    }
}
