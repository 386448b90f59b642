//! Derived batter and fielder ratings.
//!
//! These travel with the card but are not slots: speed and discipline on a
//! 1–20 scale, range and arm on 1–10, and two raw rates. Missing fielding data
//! falls back to league-average ratings.

use serde::{Deserialize, Serialize};

use crate::core::Position;
use crate::stats::{BattingLine, FieldingLine, PlayerSeason};

/// Fielding percentage assumed without a fielding line.
pub const DEFAULT_FIELDING_PCT: f64 = 0.975;
/// Range and arm rating assumed without usable data.
pub const DEFAULT_FIELD_RATING: u8 = 5;

/// Steal rate that maxes out the steal component of speed.
const SPEED_STEAL_CEILING: f64 = 0.35;
/// Triples per hit that maxes out the triples component of speed.
const SPEED_TRIPLE_CEILING: f64 = 0.05;

/// League-average range factor and assists per game by position.
fn positional_norms(position: Position) -> Option<(f64, f64)> {
    match position {
        Position::Pitcher => Some((2.0, 1.0)),
        Position::Catcher => Some((7.0, 0.6)),
        Position::FirstBase => Some((8.5, 0.6)),
        Position::SecondBase => Some((4.8, 2.8)),
        Position::ThirdBase => Some((2.6, 1.9)),
        Position::Shortstop => Some((4.3, 2.9)),
        Position::LeftField => Some((1.9, 0.05)),
        Position::CenterField => Some((2.5, 0.06)),
        Position::RightField => Some((2.0, 0.07)),
        Position::DesignatedHitter => None,
    }
}

/// Ratings derived alongside the card.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DerivedAttributes {
    /// 1–20.
    pub speed: u8,
    /// 1–20.
    pub discipline: u8,
    /// Share of plate appearances without a strikeout.
    pub contact_rate: f64,
    /// Fielding percentage.
    pub fielding: f64,
    /// 1–10, range factor relative to position average.
    pub range: u8,
    /// 1–10, assists per game relative to position average.
    pub arm: u8,
}

impl Default for DerivedAttributes {
    fn default() -> Self {
        Self {
            speed: 1,
            discipline: 1,
            contact_rate: 0.0,
            fielding: DEFAULT_FIELDING_PCT,
            range: DEFAULT_FIELD_RATING,
            arm: DEFAULT_FIELD_RATING,
        }
    }
}

impl DerivedAttributes {
    /// Ratings for a season record.
    #[must_use]
    pub fn from_season(season: &PlayerSeason) -> Self {
        Self::compute(&season.batting, season.fielding.as_ref())
    }

    /// Compute every rating from a season's lines.
    #[must_use]
    pub fn compute(batting: &BattingLine, fielding: Option<&FieldingLine>) -> Self {
        let (fielding_pct, range, arm) = match fielding {
            Some(line) if line.chances() > 0 && line.games > 0 => (
                line.fielding_pct(),
                relative_rating(line.position, line.range_factor(), |(rf, _)| rf),
                relative_rating(line.position, line.assists_per_game(), |(_, apg)| apg),
            ),
            _ => (DEFAULT_FIELDING_PCT, DEFAULT_FIELD_RATING, DEFAULT_FIELD_RATING),
        };

        Self {
            speed: speed_rating(batting),
            discipline: discipline_rating(batting),
            contact_rate: contact_rate(batting),
            fielding: fielding_pct,
            range,
            arm,
        }
    }
}

fn speed_rating(batting: &BattingLine) -> u8 {
    let steal = (batting.steal_rate() / SPEED_STEAL_CEILING).min(1.0);
    let triples_per_hit = if batting.h == 0 {
        0.0
    } else {
        batting.triples as f64 / batting.h as f64
    };
    let triples = (triples_per_hit / SPEED_TRIPLE_CEILING).min(1.0);
    (15.0 * steal + 5.0 * triples).round().clamp(1.0, 20.0) as u8
}

fn discipline_rating(batting: &BattingLine) -> u8 {
    let ratio = batting.bb as f64 / batting.so.max(1) as f64;
    (10.0 * ratio).round().clamp(1.0, 20.0) as u8
}

fn contact_rate(batting: &BattingLine) -> f64 {
    let pa = batting.plate_appearances();
    if pa == 0 {
        return 0.0;
    }
    1.0 - batting.so as f64 / pa as f64
}

fn relative_rating(position: Position, observed: f64, pick: fn((f64, f64)) -> f64) -> u8 {
    match positional_norms(position) {
        Some(norms) => (5.0 * observed / pick(norms)).round().clamp(1.0, 10.0) as u8,
        None => DEFAULT_FIELD_RATING,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batting() -> BattingLine {
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
    fn test_batting_ratings() {
        let attrs = DerivedAttributes::compute(&batting(), None);
        // steal 5/158 → 0.090·15 = 1.36; triples 2/150 → 0.267·5 = 1.33
        assert_eq!(attrs.speed, 3);
        // 60/90 → 6.67
        assert_eq!(attrs.discipline, 7);
        assert!((attrs.contact_rate - (1.0 - 90.0 / 560.0)).abs() < 1e-12);
    }

    #[test]
    fn test_fielding_fallback() {
        let attrs = DerivedAttributes::compute(&batting(), None);
        assert_eq!(attrs.fielding, DEFAULT_FIELDING_PCT);
        assert_eq!(attrs.range, DEFAULT_FIELD_RATING);
        assert_eq!(attrs.arm, DEFAULT_FIELD_RATING);
    }

    #[test]
    fn test_relative_fielding() {
        let line = FieldingLine {
            position: Position::Shortstop,
            games: 150,
            putouts: 240,
            assists: 510,
            errors: 12,
        };
        let attrs = DerivedAttributes::compute(&batting(), Some(&line));
        // RF 5.0 vs 4.3 → 5.81; APG 3.4 vs 2.9 → 5.86
        assert_eq!(attrs.range, 6);
        assert_eq!(attrs.arm, 6);
        assert!((attrs.fielding - 750.0 / 762.0).abs() < 1e-12);
    }

    #[test]
    fn test_designated_hitter_uses_defaults() {
        let line = FieldingLine {
            position: Position::DesignatedHitter,
            games: 100,
            putouts: 1,
            assists: 0,
            errors: 0,
        };
        let attrs = DerivedAttributes::compute(&batting(), Some(&line));
        assert_eq!(attrs.range, DEFAULT_FIELD_RATING);
        assert_eq!(attrs.arm, DEFAULT_FIELD_RATING);
    }

    #[test]
    fn test_ratings_clamped() {
        let burner = BattingLine {
            ab: 100,
            h: 30,
            triples: 10,
            bb: 80,
            so: 1,
            sb: 60,
            cs: 5,
            ..Default::default()
        };
        let attrs = DerivedAttributes::compute(&burner, None);
        assert_eq!(attrs.speed, 20);
        assert_eq!(attrs.discipline, 20);

        let empty = DerivedAttributes::compute(&BattingLine::default(), None);
        assert_eq!(empty.speed, 1);
        assert_eq!(empty.discipline, 1);
        assert_eq!(empty.contact_rate, 0.0);
    }
}
