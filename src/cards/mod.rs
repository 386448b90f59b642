//! Card synthesis: from season statistics to a finished `PlayerCard`.
//!
//! ## Key Types
//!
//! - `Archetype` / `ArchetypeKind`: the byte pair stamped into positions 33/34
//! - `SlotAllocation`: integer slot counts over the 26 variable positions
//! - `SinglesSplit`: singles divided into three quality tiers
//! - `CardBuilder`: exclusive owner of a card buffer until `finish`
//! - `DerivedAttributes`: speed, discipline, contact and fielding ratings
//! - `PlayerCard`: the immutable output record
//! - `CardGenerator`: the per-player pipeline

pub mod allocation;
pub mod archetype;
pub mod attributes;
pub mod builder;
pub mod generator;
pub mod player_card;
pub mod power;
pub mod singles;

pub use allocation::{allocate, speed_slots, SlotAllocation, MAX_NON_OUT_SLOTS};
pub use archetype::{classify, Archetype, ArchetypeInput, ArchetypeKind};
pub use attributes::DerivedAttributes;
pub use builder::CardBuilder;
pub use generator::{qualifying_era_pool, CardGenerator};
pub use player_card::{CardSource, PlayerCard, DEFAULT_PITCHER_ID};
pub use power::{passes_grade_gate, power_rating, power_tier, POWER_TIERS};
pub use singles::{tier_shares, SinglesSplit};
