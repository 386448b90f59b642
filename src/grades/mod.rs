//! Pitcher grading.
//!
//! ## Key Types
//!
//! - `EraPool`: sorted qualifying ERAs for one generation run
//! - `PitcherGrade` / `GradeScale`: percentile-ladder grades (1–22 or legacy 1–15)
//! - `PitcherAttributes`: grade plus rate-based pitching ratings

pub mod ladder;
pub mod pitcher;

pub use ladder::{
    EraPool, GradeScale, PitcherGrade, LEGACY_LADDER, MIN_GRADE, MODERN_LADDER, NEUTRAL_PERCENTILE,
};
pub use pitcher::{PitcherAttributes, PitcherRole};
