//! The finished per-player-season artifact.

use serde::{Deserialize, Serialize};

use super::archetype::Archetype;
use super::attributes::DerivedAttributes;
use super::generator::CardGenerator;
use crate::core::{BattingHand, Card, CardGenConfig, CardValue, PlayerId, Position, ThrowingHand};
use crate::error::Result;
use crate::grades::{EraPool, PitcherAttributes};
use crate::resolution::apply_platoon;
use crate::stats::{BattingLine, PlayerSeason};

/// Player id reserved for the synthetic fallback pitcher.
pub const DEFAULT_PITCHER_ID: PlayerId = PlayerId(0);

/// Where a card's slots came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSource {
    /// Built from season statistics.
    Synthesized,
    /// Copied verbatim from a legacy binary record.
    Legacy,
}

/// A generated (or imported) player card with everything the simulation
/// engine reads. Immutable once built.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerCard {
    player_id: PlayerId,
    season: u16,
    name: String,
    bats: BattingHand,
    source: CardSource,
    card: Card,
    archetype: Archetype,
    power_rating: CardValue,
    attributes: DerivedAttributes,
    pitcher: Option<PitcherAttributes>,
}

impl PlayerCard {
    pub(crate) fn new(
        season: &PlayerSeason,
        source: CardSource,
        card: Card,
        archetype: Archetype,
        power_rating: CardValue,
        pitcher: Option<PitcherAttributes>,
    ) -> Self {
        Self {
            player_id: season.player_id,
            season: season.season,
            name: season.name.clone(),
            bats: season.bats,
            source,
            card,
            archetype,
            power_rating,
            attributes: DerivedAttributes::from_season(season),
            pitcher,
        }
    }

    /// Synthetic card used when a rotation has no usable pitchers.
    ///
    /// Hits like a league-average pitcher and carries neutral fallback
    /// pitching ratings.
    #[must_use]
    pub fn default_pitcher() -> Self {
        let season = PlayerSeason::new(DEFAULT_PITCHER_ID, "Replacement Pitcher", 0)
            .with_position(Position::Pitcher)
            .with_batting(BattingLine {
                ab: 60,
                h: 8,
                doubles: 1,
                bb: 3,
                so: 25,
                sh: 6,
                ..Default::default()
            });
        CardGenerator::new(&CardGenConfig::default(), &EraPool::default()).generate(&season)
    }

    pub fn player_id(&self) -> PlayerId {
        self.player_id
    }

    pub fn season(&self) -> u16 {
        self.season
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bats(&self) -> BattingHand {
        self.bats
    }

    pub fn source(&self) -> CardSource {
        self.source
    }

    pub fn card(&self) -> &Card {
        &self.card
    }

    pub fn archetype(&self) -> Archetype {
        self.archetype
    }

    /// Value written at the power slot.
    pub fn power_rating(&self) -> CardValue {
        self.power_rating
    }

    pub fn attributes(&self) -> &DerivedAttributes {
        &self.attributes
    }

    /// Pitching ratings, present only for pitchers.
    pub fn pitcher(&self) -> Option<&PitcherAttributes> {
        self.pitcher.as_ref()
    }

    pub fn is_pitcher(&self) -> bool {
        self.pitcher.is_some()
    }

    /// The card as seen against a pitcher throwing with `throws`.
    ///
    /// Returns a new card; `self` is never modified.
    #[must_use]
    pub fn platoon_card(&self, throws: ThrowingHand) -> Card {
        apply_platoon(&self.card, self.bats, throws)
    }

    /// Encode for compact persistence.
    pub fn to_bincode(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a card written by `to_bincode`.
    pub fn from_bincode(bytes: &[u8]) -> Result<Self> {
        Ok(bincode::deserialize(bytes)?)
    }
}
