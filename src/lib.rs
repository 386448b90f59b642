//! # rust-diamond
//!
//! Statistical card synthesis for tabletop baseball simulation.
//!
//! A player's season statistics become a fixed 35-slot card whose values are
//! drawn by a game engine to decide plate-appearance outcomes. Generation is
//! closed-form and bit-reproducible: the same season always yields the same
//! card.
//!
//! ## Design Principles
//!
//! 1. **Static Tables**: Structural slots, outcome codes, archetype rules,
//!    power tiers and grade ladders are immutable `const` data.
//!
//! 2. **Explicit Ownership**: `CardBuilder` owns its buffer until `finish`;
//!    anything that adjusts a finished card borrows it and returns a new one.
//!
//! 3. **Total Functions**: Zero denominators, empty pools and unknown codes
//!    degrade to neutral values. Only decoding external bytes can fail.
//!
//! ## Pipeline
//!
//! ```text
//! stats ─► archetype ─► allocation ─► singles split ─► builder ─► power ─► PlayerCard
//! ```
//!
//! ## Modules
//!
//! - `core`: Card layout, outcome codes, players, configuration
//! - `stats`: Season counting stats and the rates derived from them
//! - `cards`: Archetypes, slot allocation, the builder, `PlayerCard`
//! - `grades`: ERA pools, grade ladders, pitcher attributes
//! - `resolution`: Platoon adjustment and outcome fallback
//! - `legacy`: Verbatim import/export of 35-byte legacy cards
//! - `batch`: Parallel league-wide generation
//!
//! ## Example
//!
//! ```
//! use rust_diamond::{CardGenConfig, CardGenerator, EraPool, PlayerId, PlayerSeason};
//! use rust_diamond::stats::BattingLine;
//!
//! let season = PlayerSeason::new(PlayerId::new(1), "Example", 2001).with_batting(BattingLine {
//!     ab: 500,
//!     h: 150,
//!     doubles: 30,
//!     triples: 2,
//!     hr: 20,
//!     bb: 60,
//!     so: 90,
//!     sb: 5,
//!     ..Default::default()
//! });
//!
//! let config = CardGenConfig::default();
//! let pool = EraPool::default();
//! let card = CardGenerator::new(&config, &pool).generate(&season);
//! assert_eq!(card.card().slots().len(), 35);
//! ```

pub mod batch;
pub mod cards;
pub mod core;
pub mod error;
pub mod grades;
pub mod legacy;
pub mod resolution;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{
    BattingHand, Card, CardGenConfig, CardValue, OutcomeCategory, PlayerId, Position,
    RescalePolicy, ThrowingHand,
};

pub use crate::stats::{BattingLine, FieldingLine, PitchingLine, PlayerRates, PlayerSeason};

pub use crate::cards::{
    Archetype, ArchetypeKind, CardBuilder, CardGenerator, CardSource, DerivedAttributes,
    PlayerCard, SlotAllocation,
};

pub use crate::grades::{EraPool, GradeScale, PitcherAttributes, PitcherGrade};

pub use crate::resolution::{apply_platoon, resolve_outcome, OutcomeTable, Resolution};

pub use crate::legacy::{export_card, import_card};

pub use crate::batch::{generate_league, LeagueCards, WorkerPool};

pub use crate::error::{CardError, Result};
