//! Per-player card generation pipeline.
//!
//! ```text
//! PlayerSeason ─► classify ─► allocate ─► split singles ─► fill ─► power ─► PlayerCard
//!                                                               │
//!                                            EraPool ─► pitcher grade (pitchers only)
//! ```
//!
//! The generator only borrows its configuration and ERA pool, so one instance
//! can be shared across threads once the pool is built.

use super::allocation::allocate;
use super::archetype::{classify, ArchetypeInput};
use super::builder::CardBuilder;
use super::player_card::{CardSource, PlayerCard};
use super::power::power_rating;
use super::singles::SinglesSplit;
use crate::core::{CardGenConfig, CardValue};
use crate::grades::{EraPool, PitcherAttributes, PitcherGrade};
use crate::resolution::{resolve_outcome, OutcomeTable, Resolution};
use crate::stats::PlayerSeason;

/// Build the ERA pool for a run from every pitcher who reached
/// `config.qualifying_outs`.
#[must_use]
pub fn qualifying_era_pool(seasons: &[PlayerSeason], config: &CardGenConfig) -> EraPool {
    let pool = EraPool::new(
        seasons
            .iter()
            .filter_map(|s| s.pitching.as_ref())
            .filter(|p| p.outs_recorded > 0 && p.outs_recorded >= config.qualifying_outs)
            .map(|p| p.era()),
    );
    tracing::debug!(
        qualifying = pool.len(),
        min_outs = config.qualifying_outs,
        "built ERA pool"
    );
    pool
}

/// Stateless card factory over a fixed configuration and ERA pool.
#[derive(Clone, Copy, Debug)]
pub struct CardGenerator<'a> {
    config: &'a CardGenConfig,
    pool: &'a EraPool,
}

impl<'a> CardGenerator<'a> {
    pub fn new(config: &'a CardGenConfig, pool: &'a EraPool) -> Self {
        Self { config, pool }
    }

    pub fn config(&self) -> &CardGenConfig {
        self.config
    }

    pub fn pool(&self) -> &EraPool {
        self.pool
    }

    /// Synthesize a card from one season of statistics.
    #[must_use]
    pub fn generate(&self, season: &PlayerSeason) -> PlayerCard {
        let kind = classify(&ArchetypeInput::from_season(season));
        let archetype = kind.archetype();

        let rates = season.batting.rates();
        let allocation = allocate(&rates, archetype, self.config.rescale);
        let singles = SinglesSplit::new(allocation.singles, rates.babip);
        let power = power_rating(rates.iso);

        let mut builder = CardBuilder::new();
        builder
            .apply_structural()
            .fill(&allocation, &singles)
            .stamp_archetype(archetype)
            .set_power(power);
        let card = builder.finish();

        let pitcher = season.is_pitcher().then(|| match &season.pitching {
            Some(line) => PitcherAttributes::from_line(line, self.pool),
            None => {
                tracing::warn!(
                    player = %season.player_id,
                    "pitcher without a pitching line, using fallback ratings"
                );
                PitcherAttributes::fallback()
            }
        });

        tracing::debug!(
            player = %season.player_id,
            archetype = ?kind,
            power = %power,
            outs = allocation.outs,
            "generated card"
        );

        PlayerCard::new(season, CardSource::Synthesized, card, archetype, power, pitcher)
    }

    /// Resolve a drawn value through `table`, allowing the configured number
    /// of primary attempts before the static mapping.
    pub fn resolve<T: OutcomeTable + ?Sized>(
        &self,
        table: &T,
        value: CardValue,
        grade: PitcherGrade,
    ) -> Resolution {
        resolve_outcome(table, value, grade, self.config.fallback_attempts)
    }
}
