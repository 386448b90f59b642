//! Static mapping from card codes to outcome categories.
//!
//! The table is total: any code without an explicit entry resolves to
//! `OutcomeCategory::GroundOut`. It is also the degraded fallback used when
//! the game engine's probability tables cannot resolve a draw.

use serde::{Deserialize, Serialize};

use super::card::CardValue;

/// Closed set of plate-appearance outcomes a card slot can encode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutcomeCategory {
    Walk,
    Strikeout,
    StrikeoutLooking,
    /// Hard-hit single (high quality tier).
    SingleSharp,
    /// Line-drive single (mid tier).
    SingleLine,
    /// Infield single (low tier).
    SingleInfield,
    Double,
    Triple,
    TripleAlley,
    HomeRun,
    HomeRunWallScraper,
    GroundOut,
    GroundOutDoublePlay,
    FlyOut,
    LineOut,
    PopOut,
    StealOpportunity,
    ReachedOnError,
    FieldersChoice,
    /// Hit-by-pitch, wild pitch, balk and similar.
    SpecialEvent,
}

/// Categories the slot allocator counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AllocationBucket {
    Walk,
    Strikeout,
    HomeRun,
    Single,
    Double,
    Triple,
    Speed,
}

impl OutcomeCategory {
    /// Does this outcome put the batter on base with a hit?
    #[must_use]
    pub fn is_hit(self) -> bool {
        matches!(
            self,
            OutcomeCategory::SingleSharp
                | OutcomeCategory::SingleLine
                | OutcomeCategory::SingleInfield
                | OutcomeCategory::Double
                | OutcomeCategory::Triple
                | OutcomeCategory::TripleAlley
                | OutcomeCategory::HomeRun
                | OutcomeCategory::HomeRunWallScraper
        )
    }

    /// Is this a ball-in-play out?
    #[must_use]
    pub fn is_out(self) -> bool {
        matches!(
            self,
            OutcomeCategory::GroundOut
                | OutcomeCategory::GroundOutDoublePlay
                | OutcomeCategory::FlyOut
                | OutcomeCategory::LineOut
                | OutcomeCategory::PopOut
        )
    }

    /// Is this either strikeout variant?
    #[must_use]
    pub fn is_strikeout(self) -> bool {
        matches!(
            self,
            OutcomeCategory::Strikeout | OutcomeCategory::StrikeoutLooking
        )
    }

    /// Allocator bucket this outcome counts against, if any.
    #[must_use]
    pub fn allocation_bucket(self) -> Option<AllocationBucket> {
        match self {
            OutcomeCategory::Walk => Some(AllocationBucket::Walk),
            OutcomeCategory::Strikeout | OutcomeCategory::StrikeoutLooking => {
                Some(AllocationBucket::Strikeout)
            }
            OutcomeCategory::HomeRun | OutcomeCategory::HomeRunWallScraper => {
                Some(AllocationBucket::HomeRun)
            }
            OutcomeCategory::SingleSharp
            | OutcomeCategory::SingleLine
            | OutcomeCategory::SingleInfield => Some(AllocationBucket::Single),
            OutcomeCategory::Double => Some(AllocationBucket::Double),
            OutcomeCategory::Triple | OutcomeCategory::TripleAlley => {
                Some(AllocationBucket::Triple)
            }
            OutcomeCategory::StealOpportunity => Some(AllocationBucket::Speed),
            _ => None,
        }
    }
}

/// Explicit code → category entries. Everything else is a ground out.
const OUTCOME_TABLE: &[(u8, OutcomeCategory)] = &[
    (1, OutcomeCategory::HomeRun),
    (2, OutcomeCategory::HomeRun),
    (3, OutcomeCategory::HomeRunWallScraper),
    (4, OutcomeCategory::Triple),
    (5, OutcomeCategory::TripleAlley),
    (6, OutcomeCategory::Double),
    (7, OutcomeCategory::SingleSharp),
    (8, OutcomeCategory::SingleLine),
    (9, OutcomeCategory::SingleInfield),
    (10, OutcomeCategory::StealOpportunity),
    (11, OutcomeCategory::StealOpportunity),
    (12, OutcomeCategory::StealOpportunity),
    (13, OutcomeCategory::Walk),
    (14, OutcomeCategory::Strikeout),
    (15, OutcomeCategory::StrikeoutLooking),
    (16, OutcomeCategory::ReachedOnError),
    (17, OutcomeCategory::FieldersChoice),
    (18, OutcomeCategory::SpecialEvent),
    (19, OutcomeCategory::SpecialEvent),
    (24, OutcomeCategory::GroundOut),
    (25, OutcomeCategory::GroundOutDoublePlay),
    (26, OutcomeCategory::FlyOut),
    (27, OutcomeCategory::LineOut),
    (28, OutcomeCategory::PopOut),
    (29, OutcomeCategory::FlyOut),
    (30, OutcomeCategory::GroundOut),
    (31, OutcomeCategory::GroundOut),
    (32, OutcomeCategory::FlyOut),
    (42, OutcomeCategory::SpecialEvent),
];

/// Category the engine falls back to for unmapped codes.
pub const DEFAULT_OUTCOME: OutcomeCategory = OutcomeCategory::GroundOut;

/// Map a card code to its outcome category. Total.
#[must_use]
pub fn outcome_for(value: CardValue) -> OutcomeCategory {
    OUTCOME_TABLE
        .iter()
        .find(|&&(code, _)| code == value.raw())
        .map(|&(_, category)| category)
        .unwrap_or(DEFAULT_OUTCOME)
}

// Fill codes written by the card builder.

/// Walk.
pub const WALK_CODE: CardValue = CardValue(13);
/// Swinging strikeout.
pub const STRIKEOUT_CODE: CardValue = CardValue(14);
/// Home run variants, used in order and capped at the last.
pub const HOME_RUN_CODES: [CardValue; 3] = [CardValue(1), CardValue(2), CardValue(3)];
/// Single codes for the high, mid and low quality tiers.
pub const SINGLE_CODES: (CardValue, CardValue, CardValue) = (CardValue(7), CardValue(8), CardValue(9));
/// Double.
pub const DOUBLE_CODE: CardValue = CardValue(6);
/// Triple variants, used in order and capped at the last.
pub const TRIPLE_CODES: [CardValue; 2] = [CardValue(4), CardValue(5)];
/// Steal-opportunity variants, used in order and capped at the last.
pub const SPEED_CODES: [CardValue; 3] = [CardValue(10), CardValue(11), CardValue(12)];
/// Out codes rotated round-robin over the remaining slots: ground, fly, line, pop.
pub const OUT_CYCLE: [CardValue; 4] = [CardValue(24), CardValue(26), CardValue(27), CardValue(28)];
