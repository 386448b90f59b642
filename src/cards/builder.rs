//! Exclusive-buffer card construction.
//!
//! `CardBuilder` owns a zeroed 35-slot buffer until `finish` converts it into
//! an immutable `Card`. Writes happen in a fixed order:
//!
//! 1. `apply_structural` stamps the nine constants (idempotent).
//! 2. `fill` walks the 23 free variable positions ascending and writes walks,
//!    strikeouts, home runs, singles (high, mid, low), doubles, triples,
//!    speed, then rotates through the out codes for whatever is left. The
//!    reserved positions 24, 33 and 34 come last, so the power and archetype
//!    stamps only displace outs unless more than 23 codes were allocated.
//! 3. `stamp_archetype` writes positions 33/34.
//! 4. `set_power` writes position 24.
//!
//! Structural positions are never written after step 1.

use super::allocation::SlotAllocation;
use super::archetype::Archetype;
use super::singles::SinglesSplit;
use crate::core::{
    is_reserved, is_structural, Card, CardValue, ARCHETYPE_SLOTS, CARD_LEN, DOUBLE_CODE,
    FREE_SLOTS, HOME_RUN_CODES, OUT_CYCLE, POWER_SLOT, SINGLE_CODES, SPEED_CODES, STRIKEOUT_CODE, STRUCTURAL_SLOTS,
    TRIPLE_CODES, VARIABLE_POSITIONS, WALK_CODE,
};

/// Owner of a card buffer under construction.
#[derive(Debug)]
pub struct CardBuilder {
    slots: [CardValue; CARD_LEN],
}

impl Default for CardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CardBuilder {
    /// Start from an all-sentinel buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: [CardValue::EMPTY; CARD_LEN],
        }
    }

    /// Stamp the nine structural constants.
    pub fn apply_structural(&mut self) -> &mut Self {
        for &(position, value) in &STRUCTURAL_SLOTS {
            self.slots[position] = value;
        }
        self
    }

    /// Write allocated outcome codes over the variable positions.
    ///
    /// Free positions are filled before reserved ones. If the allocation
    /// covers fewer than 26 slots, the remainder continues the out rotation;
    /// extra counts beyond 26 are dropped.
    pub fn fill(&mut self, allocation: &SlotAllocation, singles: &SinglesSplit) -> &mut Self {
        let (single_high, single_mid, single_low) = SINGLE_CODES;
        let mut sequence = Vec::with_capacity(VARIABLE_POSITIONS.len());

        sequence.extend(std::iter::repeat(WALK_CODE).take(allocation.walks.into()));
        sequence.extend(std::iter::repeat(STRIKEOUT_CODE).take(allocation.strikeouts.into()));
        extend_variants(&mut sequence, &HOME_RUN_CODES, allocation.home_runs);
        sequence.extend(std::iter::repeat(single_high).take(singles.high.into()));
        sequence.extend(std::iter::repeat(single_mid).take(singles.mid.into()));
        sequence.extend(std::iter::repeat(single_low).take(singles.low.into()));
        sequence.extend(std::iter::repeat(DOUBLE_CODE).take(allocation.doubles.into()));
        extend_variants(&mut sequence, &TRIPLE_CODES, allocation.triples);
        extend_variants(&mut sequence, &SPEED_CODES, allocation.speed);

        if sequence.len() > FREE_SLOTS {
            tracing::debug!(
                allocated = sequence.len(),
                free = FREE_SLOTS,
                "allocation spills into reserved slots"
            );
        }

        let free = VARIABLE_POSITIONS.iter().filter(|&&p| !is_reserved(p));
        let reserved = VARIABLE_POSITIONS.iter().filter(|&&p| is_reserved(p));
        let outs = OUT_CYCLE.iter().copied().cycle();
        for (&position, value) in free.chain(reserved).zip(sequence.into_iter().chain(outs)) {
            self.write(position, value);
        }
        self
    }

    /// Write the archetype pair into positions 33/34.
    pub fn stamp_archetype(&mut self, archetype: Archetype) -> &mut Self {
        let [byte33, byte34] = archetype.values();
        self.write(ARCHETYPE_SLOTS.0, byte33);
        self.write(ARCHETYPE_SLOTS.1, byte34);
        self
    }

    /// Write the power rating into position 24.
    pub fn set_power(&mut self, value: CardValue) -> &mut Self {
        self.write(POWER_SLOT, value);
        self
    }

    /// Current value at `position`.
    #[must_use]
    pub fn get(&self, position: usize) -> CardValue {
        self.slots[position]
    }

    /// Release the buffer as an immutable card.
    #[must_use]
    pub fn finish(self) -> Card {
        debug_assert!(
            self.slots.iter().all(|&v| v != CardValue::EMPTY),
            "card finished with unfilled slots"
        );
        Card::from_slots(self.slots)
    }

    fn write(&mut self, position: usize, value: CardValue) {
        debug_assert!(
            !is_structural(position),
            "write to structural position {}",
            position
        );
        self.slots[position] = value;
    }
}

/// Push `count` codes from `variants`, repeating the last once exhausted.
fn extend_variants(sequence: &mut Vec<CardValue>, variants: &[CardValue], count: u8) {
    let last = variants.len() - 1;
    sequence.extend((0..usize::from(count)).map(|i| variants[i.min(last)]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::archetype::ArchetypeKind;
    use crate::core::{OutcomeCategory, VARIABLE_SLOTS};

    fn structural_only() -> CardBuilder {
        let mut builder = CardBuilder::new();
        builder.apply_structural();
        builder
    }

    #[test]
    fn test_apply_structural_idempotent() {
        let mut once = CardBuilder::new();
        once.apply_structural();
        let mut twice = CardBuilder::new();
        twice.apply_structural().apply_structural();
        assert_eq!(once.slots, twice.slots);
        for &(p, v) in &STRUCTURAL_SLOTS {
            assert_eq!(once.get(p), v);
        }
    }

    #[test]
    fn test_fill_order() {
        let allocation = SlotAllocation {
            walks: 2,
            strikeouts: 1,
            home_runs: 1,
            singles: 3,
            doubles: 1,
            triples: 1,
            speed: 1,
            outs: 16,
        };
        let singles = SinglesSplit { high: 1, mid: 1, low: 1 };
        let mut builder = structural_only();
        builder.fill(&allocation, &singles);

        let values: Vec<u8> = VARIABLE_POSITIONS.iter().map(|&p| builder.get(p).raw()).collect();
        assert_eq!(&values[..10], &[13, 13, 14, 1, 7, 8, 9, 6, 4, 10]);
        // Out rotation starts fresh after the last allocated slot.
        assert_eq!(&values[10..14], &[24, 26, 27, 28]);
        assert_eq!(values[14], 24);
    }

    #[test]
    fn test_variants_cap_at_last() {
        let allocation = SlotAllocation {
            home_runs: 5,
            triples: 3,
            speed: 4,
            outs: 14,
            ..Default::default()
        };
        let mut builder = structural_only();
        builder.fill(&allocation, &SinglesSplit::default());

        let values: Vec<u8> = VARIABLE_POSITIONS.iter().map(|&p| builder.get(p).raw()).collect();
        assert_eq!(&values[..5], &[1, 2, 3, 3, 3]);
        assert_eq!(&values[5..8], &[4, 5, 5]);
        assert_eq!(&values[8..12], &[10, 11, 12, 12]);
    }

    #[test]
    fn test_undershoot_filled_with_outs() {
        let allocation = SlotAllocation {
            walks: 1,
            ..Default::default()
        };
        let mut builder = structural_only();
        builder.fill(&allocation, &SinglesSplit::default());
        let card = builder.finish();

        assert_eq!(card.count_of(WALK_CODE), 1);
        for (_, value) in card.variable_slots().skip(1) {
            assert!(value.outcome().is_out());
        }
    }

    #[test]
    fn test_no_sentinel_left_and_structural_intact() {
        let allocation = SlotAllocation {
            walks: 3,
            strikeouts: 5,
            singles: 4,
            outs: 14,
            ..Default::default()
        };
        let mut builder = structural_only();
        builder
            .fill(&allocation, &SinglesSplit::new(4, 0.3))
            .stamp_archetype(ArchetypeKind::Standard.archetype())
            .set_power(CardValue(6));
        let card = builder.finish();

        assert!(card.iter().all(|(_, v)| v != CardValue::EMPTY));
        assert!(card.has_structural_constants());
        assert_eq!(card[POWER_SLOT], CardValue(6));
        assert_eq!(card[33], CardValue(7));
        assert_eq!(card[34], CardValue(27));
    }

    #[test]
    fn test_reserved_slots_only_displace_outs() {
        // 22 non-out slots: an ascending fill would reach position 24.
        let allocation = SlotAllocation {
            walks: 9,
            strikeouts: 4,
            singles: 6,
            doubles: 2,
            speed: 1,
            outs: 4,
            ..Default::default()
        };
        let singles = SinglesSplit { high: 2, mid: 2, low: 2 };
        let archetype = ArchetypeKind::Standard.archetype();
        let mut builder = structural_only();
        builder
            .fill(&allocation, &singles)
            .stamp_archetype(archetype)
            .set_power(CardValue(6));
        let card = builder.finish();

        let free_count = |code: CardValue| {
            card.variable_slots()
                .filter(|&(p, v)| !is_reserved(p) && v == code)
                .count()
        };
        assert_eq!(free_count(WALK_CODE), 9);
        assert_eq!(free_count(STRIKEOUT_CODE), 4);
        assert_eq!(free_count(DOUBLE_CODE), 2);
        let (high, mid, low) = SINGLE_CODES;
        for code in [high, mid, low] {
            assert_eq!(free_count(code), 2);
        }
        let speed: usize = SPEED_CODES.iter().map(|&c| free_count(c)).sum();
        assert_eq!(speed, 1);
        assert_eq!(card[POWER_SLOT], CardValue(6));
        assert_eq!(card[ARCHETYPE_SLOTS.0], archetype.values()[0]);
    }

    #[test]
    fn test_reserved_positions_get_outs_before_stamping() {
        let allocation = SlotAllocation {
            walks: 20,
            outs: 6,
            ..Default::default()
        };
        let mut builder = structural_only();
        builder.fill(&allocation, &SinglesSplit::default());
        for position in [POWER_SLOT, ARCHETYPE_SLOTS.0, ARCHETYPE_SLOTS.1] {
            assert!(builder.get(position).outcome().is_out());
        }
    }

    #[test]
    fn test_fill_covers_every_variable_slot() {
        let allocation = SlotAllocation {
            singles: VARIABLE_SLOTS as u8,
            ..Default::default()
        };
        let mut builder = structural_only();
        builder.fill(&allocation, &SinglesSplit { high: 26, mid: 0, low: 0 });
        let card = builder.finish();
        let counts = card.category_counts();
        assert_eq!(counts.get(&OutcomeCategory::SingleSharp), Some(&VARIABLE_SLOTS));
    }
}
