//! League-wide card generation.
//!
//! The ERA pool is a read-only input shared by every pitcher grade, so it is
//! built from the whole league before any card is generated. After that each
//! season is independent and cards are produced in parallel. Output order
//! always matches input order.

use rayon::prelude::*;
use rustc_hash::FxHashMap;

use super::pool::{run_on, WorkerPool};
use crate::cards::{qualifying_era_pool, CardGenerator, PlayerCard};
use crate::core::{CardGenConfig, PlayerId};
use crate::grades::EraPool;
use crate::stats::PlayerSeason;

/// Split `total` items into up to `num_batches` ranges `[start, end)`.
/// Batches are as equal in size as possible; earlier batches take the
/// remainder.
///
/// # Example
/// ```
/// # use rust_diamond::batch::batch_ranges;
/// let ranges = batch_ranges(10, 3);
/// assert_eq!(ranges, vec![(0, 4), (4, 7), (7, 10)]);
/// ```
pub fn batch_ranges(total: usize, num_batches: usize) -> Vec<(usize, usize)> {
    if total == 0 || num_batches == 0 {
        return Vec::new();
    }
    let num_batches = num_batches.min(total);
    let base = total / num_batches;
    let remainder = total % num_batches;
    let mut ranges = Vec::with_capacity(num_batches);
    let mut start = 0;
    for i in 0..num_batches {
        let end = start + base + usize::from(i < remainder);
        ranges.push((start, end));
        start = end;
    }
    ranges
}

/// Cards for one generation run, in input order.
#[derive(Clone, Debug, Default)]
pub struct LeagueCards {
    cards: Vec<PlayerCard>,
    index: FxHashMap<PlayerId, usize>,
    pool: EraPool,
}

impl LeagueCards {
    fn new(cards: Vec<PlayerCard>, pool: EraPool) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(cards.len());
        for (i, card) in cards.iter().enumerate() {
            // Later seasons for the same player win.
            index.insert(card.player_id(), i);
        }
        Self { cards, index, pool }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Card for a player, if one was generated.
    pub fn get(&self, player_id: PlayerId) -> Option<&PlayerCard> {
        self.index.get(&player_id).map(|&i| &self.cards[i])
    }

    pub fn cards(&self) -> &[PlayerCard] {
        &self.cards
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerCard> {
        self.cards.iter()
    }

    /// The ERA pool pitchers were graded against.
    pub fn era_pool(&self) -> &EraPool {
        &self.pool
    }

    /// Pitcher cards in input order.
    pub fn pitchers(&self) -> impl Iterator<Item = &PlayerCard> {
        self.cards.iter().filter(|c| c.is_pitcher())
    }

    pub fn into_cards(self) -> Vec<PlayerCard> {
        self.cards
    }
}

/// Generate a card for every season.
pub fn generate_league(
    seasons: &[PlayerSeason],
    config: &CardGenConfig,
    pool: &WorkerPool,
) -> LeagueCards {
    let era_pool = qualifying_era_pool(seasons, config);
    let generator = CardGenerator::new(config, &era_pool);
    let cards: Vec<PlayerCard> =
        pool.install(|| seasons.par_iter().map(|s| generator.generate(s)).collect());

    tracing::info!(
        players = cards.len(),
        qualifying_pitchers = era_pool.len(),
        "generated league cards"
    );
    LeagueCards::new(cards, era_pool)
}

/// Generate in `num_batches` sequential batches, each in parallel, calling
/// `progress(done, total)` after every batch.
///
/// Produces the same cards as `generate_league`.
pub fn generate_league_in_batches<P>(
    seasons: &[PlayerSeason],
    config: &CardGenConfig,
    pool: &WorkerPool,
    num_batches: usize,
    mut progress: P,
) -> LeagueCards
where
    P: FnMut(usize, usize),
{
    let era_pool = qualifying_era_pool(seasons, config);
    let generator = CardGenerator::new(config, &era_pool);
    let threads = pool.build();
    let mut cards = Vec::with_capacity(seasons.len());

    for (start, end) in batch_ranges(seasons.len(), num_batches) {
        let batch = &seasons[start..end];
        let generated: Vec<PlayerCard> = run_on(threads.as_ref(), || {
            batch.par_iter().map(|s| generator.generate(s)).collect()
        });
        cards.extend(generated);
        progress(end, seasons.len());
        tracing::debug!(done = end, total = seasons.len(), "batch complete");
    }

    tracing::info!(
        players = cards.len(),
        qualifying_pitchers = era_pool.len(),
        "generated league cards"
    );
    LeagueCards::new(cards, era_pool)
}
