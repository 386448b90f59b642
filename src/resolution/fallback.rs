//! Outcome resolution with a static fallback.
//!
//! The game engine resolves a drawn card value through its own probability
//! tables, which may depend on the pitcher's grade and can decline to answer.
//! `resolve_outcome` retries that lookup a bounded number of times and then
//! degrades to the static code → category mapping, which never fails.

use serde::{Deserialize, Serialize};

use crate::core::{outcome_for, CardValue, OutcomeCategory};
use crate::grades::PitcherGrade;

/// Primary outcome lookup supplied by the game engine.
pub trait OutcomeTable {
    /// Resolve `value` against a pitcher of `grade`. `attempt` counts from 0.
    ///
    /// Returning `None` asks the caller to try again or fall back.
    fn lookup(
        &self,
        value: CardValue,
        grade: PitcherGrade,
        attempt: u32,
    ) -> Option<OutcomeCategory>;
}

impl<F> OutcomeTable for F
where
    F: Fn(CardValue, PitcherGrade, u32) -> Option<OutcomeCategory>,
{
    fn lookup(
        &self,
        value: CardValue,
        grade: PitcherGrade,
        attempt: u32,
    ) -> Option<OutcomeCategory> {
        self(value, grade, attempt)
    }
}

/// Table that never answers; every resolution uses the static mapping.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticOutcomes;

impl OutcomeTable for StaticOutcomes {
    fn lookup(&self, _: CardValue, _: PitcherGrade, _: u32) -> Option<OutcomeCategory> {
        None
    }
}

/// A resolved outcome and how it was obtained.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub category: OutcomeCategory,
    /// The primary table never answered.
    pub used_fallback: bool,
    /// Primary lookups made.
    pub attempts: u32,
}

/// Resolve `value`, trying `table` up to `max_attempts` times.
#[must_use]
pub fn resolve_outcome<T: OutcomeTable + ?Sized>(
    table: &T,
    value: CardValue,
    grade: PitcherGrade,
    max_attempts: u32,
) -> Resolution {
    for attempt in 0..max_attempts {
        if let Some(category) = table.lookup(value, grade, attempt) {
            return Resolution {
                category,
                used_fallback: false,
                attempts: attempt + 1,
            };
        }
    }

    tracing::warn!(
        value = value.raw(),
        grade = grade.raw(),
        attempts = max_attempts,
        "primary outcome lookup failed, using static mapping"
    );
    Resolution {
        category: outcome_for(value),
        used_fallback: true,
        attempts: max_attempts,
    }
}
