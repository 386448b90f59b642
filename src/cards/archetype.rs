//! Batter archetypes and the ordered rule table that assigns them.
//!
//! An archetype is a pair of card codes stamped into positions 33 and 34.
//! Because those positions are drawn like any other slot during play, the
//! pair also contributes outcomes to the card; the slot allocator subtracts
//! that contribution before allocating.
//!
//! Classification walks `ARCHETYPE_RULES` top-down and returns the first
//! match. The order is part of the calibration and must not change.

use serde::{Deserialize, Serialize};

use crate::core::{BattingHand, CardValue, Position};
use crate::stats::{is_elite_defender, PlayerSeason};

/// Home runs at or above which a batter is a power hitter.
pub const POWER_HR_THRESHOLD: u32 = 18;
/// ISO at or above which a batter is a power hitter.
pub const POWER_ISO_THRESHOLD: f64 = 0.200;
/// Stolen bases at or above which a runner is a speed specialist.
pub const SPEED_SB_THRESHOLD: u32 = 20;
/// Success rate at or above which a runner is a speed specialist.
pub const SPEED_SUCCESS_THRESHOLD: f64 = 0.80;
/// Batting average for the contact-speed hybrid.
pub const CONTACT_AVG_THRESHOLD: f64 = 0.290;
/// Stolen bases for the contact-speed hybrid.
pub const CONTACT_SB_THRESHOLD: u32 = 10;
/// Eligible positions needed for the utility archetype.
pub const UTILITY_MIN_POSITIONS: usize = 3;
/// Batting average below which a multi-position player is a utility hitter.
pub const UTILITY_AVG_CEILING: f64 = 0.250;

/// Raw archetype bytes as stored in card positions 33 and 34.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Archetype {
    pub byte33: u8,
    pub byte34: u8,
}

impl Archetype {
    /// Create from raw bytes.
    #[must_use]
    pub const fn new(byte33: u8, byte34: u8) -> Self {
        Self { byte33, byte34 }
    }

    /// Both bytes as card values.
    #[must_use]
    pub const fn values(self) -> [CardValue; 2] {
        [CardValue(self.byte33), CardValue(self.byte34)]
    }

    /// Named archetype for this pair, if it is one of the eight.
    #[must_use]
    pub fn kind(self) -> Option<ArchetypeKind> {
        ArchetypeKind::ALL.into_iter().find(|k| k.archetype() == self)
    }
}

impl std::fmt::Display for Archetype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            Some(kind) => write!(f, "{:?}({},{})", kind, self.byte33, self.byte34),
            None => write!(f, "Archetype({},{})", self.byte33, self.byte34),
        }
    }
}

/// The eight named archetypes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArchetypeKind {
    Pitcher,
    PowerPlatoon,
    Power,
    Speed,
    ContactSpeed,
    Defense,
    Utility,
    Standard,
}

impl ArchetypeKind {
    pub const ALL: [ArchetypeKind; 8] = [
        ArchetypeKind::Pitcher,
        ArchetypeKind::PowerPlatoon,
        ArchetypeKind::Power,
        ArchetypeKind::Speed,
        ArchetypeKind::ContactSpeed,
        ArchetypeKind::Defense,
        ArchetypeKind::Utility,
        ArchetypeKind::Standard,
    ];

    /// Byte pair for this archetype.
    #[must_use]
    pub const fn archetype(self) -> Archetype {
        match self {
            ArchetypeKind::Pitcher => Archetype::new(14, 24),
            ArchetypeKind::PowerPlatoon => Archetype::new(1, 6),
            ArchetypeKind::Power => Archetype::new(1, 26),
            ArchetypeKind::Speed => Archetype::new(10, 9),
            ArchetypeKind::ContactSpeed => Archetype::new(7, 11),
            ArchetypeKind::Defense => Archetype::new(25, 8),
            ArchetypeKind::Utility => Archetype::new(24, 28),
            ArchetypeKind::Standard => Archetype::new(7, 27),
        }
    }
}

/// Facts the classifier looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArchetypeInput {
    pub is_pitcher: bool,
    pub bats: BattingHand,
    pub primary_position: Position,
    pub home_runs: u32,
    pub iso: f64,
    pub batting_average: f64,
    pub stolen_bases: u32,
    pub steal_attempts: u32,
    pub steal_success_rate: f64,
    pub elite_defender: bool,
    pub eligible_positions: usize,
}

impl ArchetypeInput {
    /// Gather classifier inputs from a season record.
    #[must_use]
    pub fn from_season(season: &PlayerSeason) -> Self {
        let batting = &season.batting;
        let elite_defender = season
            .fielding
            .as_ref()
            .is_some_and(|f| f.chances() > 0 && is_elite_defender(f.fielding_pct()));
        Self {
            is_pitcher: season.is_pitcher(),
            bats: season.bats,
            primary_position: season.primary_position,
            home_runs: batting.hr,
            iso: batting.iso(),
            batting_average: batting.batting_average(),
            stolen_bases: batting.sb,
            steal_attempts: batting.steal_attempts(),
            steal_success_rate: batting.steal_success_rate(),
            elite_defender,
            eligible_positions: season.eligible_position_count(),
        }
    }
}

/// Ordered archetype rule. Evaluated top-down; first match wins.
struct ArchetypeRule {
    matches: fn(&ArchetypeInput) -> bool,
    select: fn(&ArchetypeInput) -> ArchetypeKind,
}

fn is_power(input: &ArchetypeInput) -> bool {
    input.home_runs >= POWER_HR_THRESHOLD || input.iso >= POWER_ISO_THRESHOLD
}

fn power_kind(input: &ArchetypeInput) -> ArchetypeKind {
    match input.bats {
        BattingHand::Left | BattingHand::Switch => ArchetypeKind::PowerPlatoon,
        BattingHand::Right => ArchetypeKind::Power,
    }
}

fn is_speed(input: &ArchetypeInput) -> bool {
    input.stolen_bases >= SPEED_SB_THRESHOLD || input.steal_success_rate >= SPEED_SUCCESS_THRESHOLD
}

fn is_contact_speed(input: &ArchetypeInput) -> bool {
    input.batting_average >= CONTACT_AVG_THRESHOLD && input.stolen_bases >= CONTACT_SB_THRESHOLD
}

fn is_defense(input: &ArchetypeInput) -> bool {
    input.elite_defender && input.primary_position.is_premium()
}

fn is_utility(input: &ArchetypeInput) -> bool {
    input.eligible_positions >= UTILITY_MIN_POSITIONS && input.batting_average < UTILITY_AVG_CEILING
}

const ARCHETYPE_RULES: [ArchetypeRule; 7] = [
    ArchetypeRule {
        matches: |i| i.is_pitcher,
        select: |_| ArchetypeKind::Pitcher,
    },
    ArchetypeRule {
        matches: is_power,
        select: power_kind,
    },
    ArchetypeRule {
        matches: is_speed,
        select: |_| ArchetypeKind::Speed,
    },
    ArchetypeRule {
        matches: is_contact_speed,
        select: |_| ArchetypeKind::ContactSpeed,
    },
    ArchetypeRule {
        matches: is_defense,
        select: |_| ArchetypeKind::Defense,
    },
    ArchetypeRule {
        matches: is_utility,
        select: |_| ArchetypeKind::Utility,
    },
    ArchetypeRule {
        matches: |_| true,
        select: |_| ArchetypeKind::Standard,
    },
];

/// Classify a batter. Total: the last rule matches everyone.
#[must_use]
pub fn classify(input: &ArchetypeInput) -> ArchetypeKind {
    ARCHETYPE_RULES
        .iter()
        .find(|rule| (rule.matches)(input))
        .map(|rule| (rule.select)(input))
        .unwrap_or(ArchetypeKind::Standard)
}
