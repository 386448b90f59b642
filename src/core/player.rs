//! Player identification, handedness and fielding positions.

use serde::{Deserialize, Serialize};

/// Player identifier assigned by the ingestion layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u32);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player({})", self.0)
    }
}

/// Side of the plate a batter hits from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BattingHand {
    Left,
    Right,
    Switch,
}

/// Arm a pitcher throws with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThrowingHand {
    Left,
    Right,
}

/// Fielding positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    Pitcher,
    Catcher,
    FirstBase,
    SecondBase,
    ThirdBase,
    Shortstop,
    LeftField,
    CenterField,
    RightField,
    DesignatedHitter,
}

impl Position {
    /// Up-the-middle positions where elite defense earns an archetype.
    pub const PREMIUM: [Position; 4] = [
        Position::Catcher,
        Position::SecondBase,
        Position::Shortstop,
        Position::CenterField,
    ];

    /// Is this a premium defensive position?
    #[must_use]
    pub fn is_premium(self) -> bool {
        Self::PREMIUM.contains(&self)
    }

    /// Standard scorebook abbreviation.
    #[must_use]
    pub const fn abbreviation(self) -> &'static str {
        match self {
            Position::Pitcher => "P",
            Position::Catcher => "C",
            Position::FirstBase => "1B",
            Position::SecondBase => "2B",
            Position::ThirdBase => "3B",
            Position::Shortstop => "SS",
            Position::LeftField => "LF",
            Position::CenterField => "CF",
            Position::RightField => "RF",
            Position::DesignatedHitter => "DH",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id() {
        let id = PlayerId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Player(42)");
    }

    #[test]
    fn test_premium_positions() {
        assert!(Position::Shortstop.is_premium());
        assert!(Position::CenterField.is_premium());
        assert!(!Position::FirstBase.is_premium());
        assert!(!Position::DesignatedHitter.is_premium());
    }

    #[test]
    fn test_position_display() {
        assert_eq!(format!("{}", Position::SecondBase), "2B");
    }
}
