//! Fielding counting stats.

use serde::{Deserialize, Serialize};

use super::batting::ratio;
use crate::core::Position;

/// Fielding percentage at or above which a player counts as an elite defender.
pub const ELITE_FIELDING_PCT: f64 = 0.985;

/// Is this fielding percentage elite?
#[must_use]
pub fn is_elite_defender(fielding_pct: f64) -> bool {
    fielding_pct >= ELITE_FIELDING_PCT
}

/// Fielding line at the player's primary position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldingLine {
    pub position: Position,
    pub games: u32,
    pub putouts: u32,
    pub assists: u32,
    pub errors: u32,
}

impl FieldingLine {
    /// Total chances.
    #[must_use]
    pub fn chances(&self) -> u32 {
        self.putouts + self.assists + self.errors
    }

    /// (PO + A) / chances.
    #[must_use]
    pub fn fielding_pct(&self) -> f64 {
        ratio((self.putouts + self.assists) as f64, self.chances() as f64)
    }

    /// Range factor: (PO + A) per game.
    #[must_use]
    pub fn range_factor(&self) -> f64 {
        ratio((self.putouts + self.assists) as f64, self.games as f64)
    }

    /// Assists per game.
    #[must_use]
    pub fn assists_per_game(&self) -> f64 {
        ratio(self.assists as f64, self.games as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fielding_rates() {
        let line = FieldingLine {
            position: Position::Shortstop,
            games: 150,
            putouts: 240,
            assists: 450,
            errors: 10,
        };
        assert_eq!(line.chances(), 700);
        assert!((line.fielding_pct() - 690.0 / 700.0).abs() < 1e-12);
        assert!((line.range_factor() - 4.6).abs() < 1e-12);
        assert!((line.assists_per_game() - 3.0).abs() < 1e-12);
        assert!(is_elite_defender(line.fielding_pct()));
    }

    #[test]
    fn test_elite_cutoff_is_inclusive() {
        assert!(is_elite_defender(0.985));
        assert!(!is_elite_defender(0.9849));
    }

    #[test]
    fn test_no_chances() {
        let line = FieldingLine {
            position: Position::LeftField,
            games: 0,
            putouts: 0,
            assists: 0,
            errors: 0,
        };
        assert_eq!(line.fielding_pct(), 0.0);
        assert_eq!(line.range_factor(), 0.0);
    }
}
