//! Bridge to the legacy 35-byte card format.
//!
//! Imported cards are copied verbatim: the slot array, the archetype bytes at
//! positions 33/34 and the power value at position 24 are never re-derived.
//! Only the derived attributes are computed from the season, and pitchers are
//! graded on the legacy 1–15 scale that matches the records' calibration.

use crate::cards::{Archetype, CardSource, PlayerCard};
use crate::core::{Card, ARCHETYPE_SLOTS, CARD_LEN, POWER_SLOT};
use crate::error::Result;
use crate::grades::{GradeScale, PitcherAttributes, NEUTRAL_PERCENTILE};
use crate::stats::PlayerSeason;

/// Import a legacy card for `season`.
///
/// `legacy_percentile` is the pitcher's ERA percentile as recorded alongside
/// the legacy card (0.0 = best); without one the neutral percentile is used.
/// It is ignored for non-pitchers.
///
/// ## Errors
///
/// `CardError::InvalidLength` unless `bytes` is exactly 35 long.
pub fn import_card(
    season: &PlayerSeason,
    bytes: &[u8],
    legacy_percentile: Option<f64>,
) -> Result<PlayerCard> {
    let card = Card::from_bytes(bytes)?;
    if !card.has_structural_constants() {
        tracing::debug!(
            player = %season.player_id,
            "legacy card has non-standard structural slots"
        );
    }

    let archetype = Archetype::new(card[ARCHETYPE_SLOTS.0].raw(), card[ARCHETYPE_SLOTS.1].raw());
    let power = card[POWER_SLOT];

    let pitcher = season.is_pitcher().then(|| {
        let percentile = legacy_percentile.unwrap_or(NEUTRAL_PERCENTILE);
        let grade = GradeScale::Legacy.grade_for(percentile);
        match &season.pitching {
            Some(line) => PitcherAttributes::with_grade(line, grade, GradeScale::Legacy),
            None => PitcherAttributes {
                grade,
                scale: GradeScale::Legacy,
                ..PitcherAttributes::fallback()
            },
        }
    });

    Ok(PlayerCard::new(season, CardSource::Legacy, card, archetype, power, pitcher))
}

/// Byte image of a card in the legacy layout.
#[must_use]
pub fn export_card(card: &PlayerCard) -> [u8; CARD_LEN] {
    card.card().to_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::ArchetypeKind;
    use crate::core::{PlayerId, Position};
    use crate::error::CardError;
    use crate::grades::PitcherGrade;
    use crate::stats::{BattingLine, PitchingLine};

    fn legacy_bytes() -> Vec<u8> {
        let mut bytes = vec![26u8; CARD_LEN];
        bytes[1] = 13;
        bytes[2] = 7;
        bytes[24] = 3;
        bytes[33] = 1;
        bytes[34] = 6;
        bytes
    }

    fn batter() -> PlayerSeason {
        PlayerSeason::new(PlayerId(3), "Imported", 1987).with_batting(BattingLine {
            ab: 400,
            h: 110,
            hr: 25,
            bb: 40,
            so: 80,
            ..Default::default()
        })
    }

    #[test]
    fn test_round_trip_preserves_bytes() {
        let bytes = legacy_bytes();
        let card = import_card(&batter(), &bytes, None).unwrap();
        assert_eq!(export_card(&card).as_slice(), bytes.as_slice());
        assert_eq!(card.source(), CardSource::Legacy);
    }

    #[test]
    fn test_reserved_bytes_copied() {
        let card = import_card(&batter(), &legacy_bytes(), None).unwrap();
        assert_eq!(card.archetype().kind(), Some(ArchetypeKind::PowerPlatoon));
        assert_eq!(card.power_rating().raw(), 3);
        assert!(card.pitcher().is_none());
    }

    #[test]
    fn test_unknown_archetype_pair_kept() {
        let mut bytes = legacy_bytes();
        bytes[33] = 40;
        bytes[34] = 41;
        let card = import_card(&batter(), &bytes, None).unwrap();
        assert_eq!(card.archetype(), Archetype::new(40, 41));
        assert_eq!(card.archetype().kind(), None);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = import_card(&batter(), &[13; 34], None).unwrap_err();
        assert!(matches!(
            err,
            CardError::InvalidLength {
                expected: 35,
                actual: 34
            }
        ));
    }

    #[test]
    fn test_pitcher_uses_legacy_scale() {
        let season = PlayerSeason::new(PlayerId(4), "Legacy Arm", 1987)
            .with_position(Position::Pitcher)
            .with_pitching(PitchingLine {
                outs_recorded: 600,
                earned_runs: 70,
                games: 32,
                games_started: 32,
                ..Default::default()
            });

        let ace = import_card(&season, &legacy_bytes(), Some(0.0)).unwrap();
        let ace = ace.pitcher().unwrap();
        assert_eq!(ace.grade, PitcherGrade(15));
        assert_eq!(ace.scale, GradeScale::Legacy);

        let unknown = import_card(&season, &legacy_bytes(), None).unwrap();
        assert_eq!(unknown.pitcher().unwrap().grade, PitcherGrade(8));
    }

    #[test]
    fn test_pitcher_without_line() {
        let season = PlayerSeason::new(PlayerId(5), "No Line", 1987).with_position(Position::Pitcher);
        let card = import_card(&season, &legacy_bytes(), Some(1.0)).unwrap();
        let pitcher = card.pitcher().unwrap();
        assert_eq!(pitcher.grade, PitcherGrade(1));
        assert_eq!(pitcher.scale, GradeScale::Legacy);
    }
}
