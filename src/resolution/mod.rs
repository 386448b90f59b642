//! Draw-time helpers for the game engine.
//!
//! - `apply_platoon`: copy-on-write handedness adjustment
//! - `resolve_outcome`: primary outcome lookup with a static fallback

pub mod fallback;
pub mod platoon;

pub use fallback::{resolve_outcome, OutcomeTable, Resolution, StaticOutcomes};
pub use platoon::{apply_platoon, has_platoon_advantage, PLATOON_CONTACT_CODE, PLATOON_HIT_CODE};
