//! Core types: the card, outcome codes, players and configuration.
//!
//! Everything here is immutable static data or plain value types. The card
//! pipeline in `cards` and the resolution helpers in `resolution` build on it.

pub mod card;
pub mod config;
pub mod outcome;
pub mod player;

pub use card::{
    is_reserved, is_structural, Card, CardValue, ARCHETYPE_SLOTS, CARD_LEN, FREE_SLOTS,
    MAX_CARD_VALUE, POWER_SLOT, STRUCTURAL_SLOTS, VARIABLE_POSITIONS, VARIABLE_SLOTS,
};
pub use config::{CardGenConfig, RescalePolicy};
pub use outcome::{
    outcome_for, AllocationBucket, OutcomeCategory, DEFAULT_OUTCOME, DOUBLE_CODE, HOME_RUN_CODES,
    OUT_CYCLE, SINGLE_CODES, SPEED_CODES, STRIKEOUT_CODE, TRIPLE_CODES, WALK_CODE,
};
pub use player::{BattingHand, PlayerId, Position, ThrowingHand};
