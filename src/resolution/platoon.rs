//! Handedness adjustment applied to a card just before it is drawn.
//!
//! The adjuster borrows the stored card and returns a new one. The stored card
//! is never touched, so the same card can be adjusted for any number of
//! matchups concurrently.

use crate::core::{is_structural, BattingHand, Card, CardValue, OutcomeCategory, ThrowingHand};

/// Code that replaces the first out on an advantaged card (line single).
pub const PLATOON_HIT_CODE: CardValue = CardValue(8);
/// Code that replaces the first strikeout on an advantaged card (ball in play).
pub const PLATOON_CONTACT_CODE: CardValue = CardValue(30);

/// Does the batter have the platoon edge?
///
/// Switch hitters always do; otherwise only opposite hands.
#[must_use]
pub fn has_platoon_advantage(bats: BattingHand, throws: ThrowingHand) -> bool {
    matches!(
        (bats, throws),
        (BattingHand::Switch, _)
            | (BattingHand::Left, ThrowingHand::Right)
            | (BattingHand::Right, ThrowingHand::Left)
    )
}

/// Copy of `card` adjusted for the matchup.
///
/// With the advantage, the first non-structural out becomes
/// `PLATOON_HIT_CODE` and the first non-structural strikeout becomes
/// `PLATOON_CONTACT_CODE`. Both are located on the input card. A missing
/// match skips that substitution.
#[must_use]
pub fn apply_platoon(card: &Card, bats: BattingHand, throws: ThrowingHand) -> Card {
    if !has_platoon_advantage(bats, throws) {
        return card.clone();
    }

    let first_matching = |pred: fn(OutcomeCategory) -> bool| {
        card.iter()
            .find(|&(position, value)| !is_structural(position) && pred(value.outcome()))
            .map(|(position, _)| position)
    };
    let out_position = first_matching(OutcomeCategory::is_out);
    let strikeout_position = first_matching(OutcomeCategory::is_strikeout);

    let mut slots = *card.slots();
    if let Some(position) = out_position {
        slots[position] = PLATOON_HIT_CODE;
    }
    if let Some(position) = strikeout_position {
        slots[position] = PLATOON_CONTACT_CODE;
    }
    Card::from_slots(slots)
}
