//! The 35-slot card and its value codes.
//!
//! A `Card` is a fixed-length array of `CardValue` codes. Nine positions are
//! structural constants shared by every card; the remaining 26 are variable
//! positions written by the card builder. Positions 24, 33 and 34 are reserved
//! inside the variable set for the power rating and the archetype pair.
//!
//! ## Ownership
//!
//! `Card` is deliberately `Clone` but not `Copy`. Stages that mutate a buffer
//! own it exclusively (see `CardBuilder`); stages that adjust a finished card
//! borrow it and return a fresh value.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::ops::Index;

use super::outcome::{outcome_for, OutcomeCategory};
use crate::error::CardError;

/// Number of slots on every card.
pub const CARD_LEN: usize = 35;

/// Number of non-structural slots.
pub const VARIABLE_SLOTS: usize = 26;

/// Largest code produced by synthesis.
pub const MAX_CARD_VALUE: u8 = 42;

/// Slot carrying the power rating.
pub const POWER_SLOT: usize = 24;

/// Slots carrying the archetype pair (byte33, byte34).
pub const ARCHETYPE_SLOTS: (usize, usize) = (33, 34);

/// Fixed (position, value) pairs present on every card.
pub const STRUCTURAL_SLOTS: [(usize, CardValue); 9] = [
    (0, CardValue(18)),
    (5, CardValue(25)),
    (10, CardValue(16)),
    (15, CardValue(17)),
    (20, CardValue(25)),
    (25, CardValue(19)),
    (28, CardValue(29)),
    (30, CardValue(31)),
    (32, CardValue(32)),
];

/// The 26 non-structural positions in visitation order.
pub const VARIABLE_POSITIONS: [usize; VARIABLE_SLOTS] = [
    1, 2, 3, 4, 6, 7, 8, 9, 11, 12, 13, 14, 16, 17, 18, 19, 21, 22, 23, 24, 26, 27, 29, 31, 33, 34,
];

/// Is this position one of the structural constants?
#[must_use]
pub fn is_structural(position: usize) -> bool {
    STRUCTURAL_SLOTS.iter().any(|&(p, _)| p == position)
}

/// Is this a variable position overwritten after the fill (power or archetype)?
#[must_use]
pub const fn is_reserved(position: usize) -> bool {
    position == POWER_SLOT || position == ARCHETYPE_SLOTS.0 || position == ARCHETYPE_SLOTS.1
}

/// Variable positions the filler owns outright.
pub const FREE_SLOTS: usize = VARIABLE_SLOTS - 3;

/// A single slot code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardValue(pub u8);

impl CardValue {
    /// Pre-fill sentinel. Never present on a finished synthesized card.
    pub const EMPTY: CardValue = CardValue(0);

    /// Create a new card value.
    #[must_use]
    pub const fn new(code: u8) -> Self {
        Self(code)
    }

    /// Get the raw code.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Outcome category for this code.
    #[must_use]
    pub fn outcome(self) -> OutcomeCategory {
        outcome_for(self)
    }
}

impl std::fmt::Display for CardValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Finished 35-slot card.
///
/// Serialized as a plain sequence; deserializing a sequence of any other
/// length fails.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<CardValue>", into = "Vec<CardValue>")]
pub struct Card {
    slots: [CardValue; CARD_LEN],
}

impl Card {
    /// Wrap an already-complete slot array.
    #[must_use]
    pub const fn from_slots(slots: [CardValue; CARD_LEN]) -> Self {
        Self { slots }
    }

    /// Build a card from raw bytes, copying them verbatim.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CardError> {
        if bytes.len() != CARD_LEN {
            return Err(CardError::InvalidLength {
                expected: CARD_LEN,
                actual: bytes.len(),
            });
        }
        let mut slots = [CardValue::EMPTY; CARD_LEN];
        for (slot, &byte) in slots.iter_mut().zip(bytes) {
            *slot = CardValue(byte);
        }
        Ok(Self { slots })
    }

    /// Raw byte image of the card.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; CARD_LEN] {
        self.slots.map(CardValue::raw)
    }

    /// All slots in position order.
    #[must_use]
    pub fn slots(&self) -> &[CardValue; CARD_LEN] {
        &self.slots
    }

    /// Value at `position`, or `None` when out of range.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<CardValue> {
        self.slots.get(position).copied()
    }

    /// Iterate over `(position, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, CardValue)> + '_ {
        self.slots.iter().copied().enumerate()
    }

    /// Iterate over the variable positions only.
    pub fn variable_slots(&self) -> impl Iterator<Item = (usize, CardValue)> + '_ {
        VARIABLE_POSITIONS.iter().map(move |&p| (p, self.slots[p]))
    }

    /// Number of slots holding exactly `value`.
    #[must_use]
    pub fn count_of(&self, value: CardValue) -> usize {
        self.slots.iter().filter(|&&v| v == value).count()
    }

    /// Histogram of outcome categories over all 35 slots.
    #[must_use]
    pub fn category_counts(&self) -> FxHashMap<OutcomeCategory, usize> {
        let mut counts = FxHashMap::default();
        for value in &self.slots {
            *counts.entry(value.outcome()).or_insert(0) += 1;
        }
        counts
    }

    /// Positions where `self` and `other` hold different values.
    #[must_use]
    pub fn differing_positions(&self, other: &Card) -> SmallVec<[usize; 4]> {
        self.slots
            .iter()
            .zip(other.slots.iter())
            .enumerate()
            .filter(|(_, (a, b))| a != b)
            .map(|(i, _)| i)
            .collect()
    }

    /// Do all structural positions hold their constants?
    #[must_use]
    pub fn has_structural_constants(&self) -> bool {
        STRUCTURAL_SLOTS
            .iter()
            .all(|&(position, value)| self.slots[position] == value)
    }
}

impl Index<usize> for Card {
    type Output = CardValue;

    fn index(&self, position: usize) -> &Self::Output {
        &self.slots[position]
    }
}

impl TryFrom<Vec<CardValue>> for Card {
    type Error = CardError;

    fn try_from(values: Vec<CardValue>) -> Result<Self, Self::Error> {
        let actual = values.len();
        let slots: [CardValue; CARD_LEN] = values
            .try_into()
            .map_err(|_| CardError::InvalidLength {
                expected: CARD_LEN,
                actual,
            })?;
        Ok(Self { slots })
    }
}

impl From<Card> for Vec<CardValue> {
    fn from(card: Card) -> Self {
        card.slots.to_vec()
    }
}
