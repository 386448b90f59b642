//! The per-player-season input record.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::{BattingLine, FieldingLine, PitchingLine};
use crate::core::{BattingHand, PlayerId, Position, ThrowingHand};

/// Everything the card pipeline needs to know about one player-season.
///
/// ## Example
///
/// ```
/// use rust_diamond::core::{BattingHand, PlayerId, Position, ThrowingHand};
/// use rust_diamond::stats::{BattingLine, PlayerSeason};
///
/// let season = PlayerSeason::new(PlayerId::new(7), "Sam Example", 1987)
///     .with_hands(BattingHand::Left, ThrowingHand::Right)
///     .with_position(Position::CenterField)
///     .with_batting(BattingLine { ab: 400, h: 110, ..Default::default() });
///
/// assert!(!season.is_pitcher());
/// assert_eq!(season.eligible_position_count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerSeason {
    pub player_id: PlayerId,
    pub name: String,
    pub season: u16,
    pub bats: BattingHand,
    pub throws: ThrowingHand,
    pub primary_position: Position,
    /// Positions the player is rated at, primary included.
    pub eligible_positions: SmallVec<[Position; 4]>,
    pub batting: BattingLine,
    pub pitching: Option<PitchingLine>,
    pub fielding: Option<FieldingLine>,
}

impl PlayerSeason {
    /// Create a right-handed designated hitter with no stats.
    pub fn new(player_id: PlayerId, name: impl Into<String>, season: u16) -> Self {
        Self {
            player_id,
            name: name.into(),
            season,
            bats: BattingHand::Right,
            throws: ThrowingHand::Right,
            primary_position: Position::DesignatedHitter,
            eligible_positions: SmallVec::from_slice(&[Position::DesignatedHitter]),
            batting: BattingLine::default(),
            pitching: None,
            fielding: None,
        }
    }

    /// Set batting and throwing hands.
    #[must_use]
    pub fn with_hands(mut self, bats: BattingHand, throws: ThrowingHand) -> Self {
        self.bats = bats;
        self.throws = throws;
        self
    }

    /// Set the primary position, which becomes the only eligible position.
    #[must_use]
    pub fn with_position(mut self, position: Position) -> Self {
        self.primary_position = position;
        self.eligible_positions = SmallVec::from_slice(&[position]);
        self
    }

    /// Add a secondary eligible position.
    #[must_use]
    pub fn with_eligible(mut self, position: Position) -> Self {
        if !self.eligible_positions.contains(&position) {
            self.eligible_positions.push(position);
        }
        self
    }

    #[must_use]
    pub fn with_batting(mut self, batting: BattingLine) -> Self {
        self.batting = batting;
        self
    }

    #[must_use]
    pub fn with_pitching(mut self, pitching: PitchingLine) -> Self {
        self.pitching = Some(pitching);
        self
    }

    #[must_use]
    pub fn with_fielding(mut self, fielding: FieldingLine) -> Self {
        self.fielding = Some(fielding);
        self
    }

    /// Is this player's primary position pitcher?
    #[must_use]
    pub fn is_pitcher(&self) -> bool {
        self.primary_position == Position::Pitcher
    }

    #[must_use]
    pub fn eligible_position_count(&self) -> usize {
        self.eligible_positions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let season = PlayerSeason::new(PlayerId::new(1), "Utility Guy", 1990)
            .with_position(Position::SecondBase)
            .with_eligible(Position::Shortstop)
            .with_eligible(Position::ThirdBase)
            .with_eligible(Position::Shortstop);

        assert_eq!(season.primary_position, Position::SecondBase);
        assert_eq!(season.eligible_position_count(), 3);
        assert!(!season.is_pitcher());
    }

    #[test]
    fn test_pitcher_flag() {
        let season = PlayerSeason::new(PlayerId::new(2), "Arm", 1990).with_position(Position::Pitcher);
        assert!(season.is_pitcher());
    }

    #[test]
    fn test_serialization() {
        let season = PlayerSeason::new(PlayerId::new(3), "Json", 1991)
            .with_pitching(PitchingLine { outs_recorded: 30, ..Default::default() });
        let json = serde_json::to_string(&season).unwrap();
        let back: PlayerSeason = serde_json::from_str(&json).unwrap();
        assert_eq!(season, back);
    }
}
