//! Season statistics supplied by the ingestion layer.
//!
//! ## Key Types
//!
//! - `BattingLine`: batting counting stats, with slash-line helpers
//! - `PlayerRates`: per-plate-appearance rates consumed by the slot allocator
//! - `PitchingLine`: pitching counting stats (innings kept as outs)
//! - `FieldingLine`: fielding counting stats at the primary position
//! - `PlayerSeason`: the full per-player-season input record

pub mod batting;
pub mod fielding;
pub mod pitching;
pub mod season;

pub use batting::{BattingLine, PlayerRates};
pub use fielding::{is_elite_defender, FieldingLine, ELITE_FIELDING_PCT};
pub use pitching::PitchingLine;
pub use season::PlayerSeason;
