//! Parallel generation over a whole league.
//!
//! ## Key Types
//!
//! - `WorkerPool`: Rayon thread count for a run
//! - `LeagueCards`: generated cards in input order, indexed by player

pub mod league;
pub mod pool;

pub use league::{batch_ranges, generate_league, generate_league_in_batches, LeagueCards};
pub use pool::WorkerPool;
