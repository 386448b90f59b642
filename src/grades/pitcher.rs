//! Pitcher attributes attached to pitcher cards.

use serde::{Deserialize, Serialize};

use super::ladder::{EraPool, GradeScale, PitcherGrade};
use crate::stats::PitchingLine;

/// Outs per appearance that earns full stamina (seven innings).
pub const FULL_STAMINA_OUTS: f64 = 21.0;

/// Starter or reliever.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PitcherRole {
    Starter,
    Reliever,
}

/// Pitching ratings carried on a `PlayerCard`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PitcherAttributes {
    pub grade: PitcherGrade,
    pub scale: GradeScale,
    pub era: f64,
    pub whip: f64,
    pub strikeouts_per_nine: f64,
    pub walks_per_nine: f64,
    pub home_runs_per_nine: f64,
    /// 1–10, from walk rate.
    pub control: u8,
    /// 1–10, from outs per appearance.
    pub stamina: u8,
    pub role: PitcherRole,
}

impl PitcherAttributes {
    /// Rate a pitcher against an ERA pool on the modern scale.
    ///
    /// A pitcher with no recorded outs has no meaningful ERA and receives the
    /// neutral grade.
    #[must_use]
    pub fn from_line(line: &PitchingLine, pool: &EraPool) -> Self {
        let grade = if line.outs_recorded == 0 {
            tracing::warn!("pitcher has no recorded outs, using neutral grade");
            PitcherGrade::neutral(GradeScale::Modern)
        } else {
            pool.grade(line.era())
        };
        Self::with_grade(line, grade, GradeScale::Modern)
    }

    /// Rate a pitcher with an externally determined grade.
    #[must_use]
    pub fn with_grade(line: &PitchingLine, grade: PitcherGrade, scale: GradeScale) -> Self {
        Self {
            grade,
            scale,
            era: line.era(),
            whip: line.whip(),
            strikeouts_per_nine: line.strikeouts_per_nine(),
            walks_per_nine: line.walks_per_nine(),
            home_runs_per_nine: line.home_runs_per_nine(),
            control: control_rating(line),
            stamina: stamina_rating(line),
            role: role_for(line),
        }
    }

    /// Conservative ratings used when no pitching data exists.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            grade: PitcherGrade::neutral(GradeScale::Modern),
            scale: GradeScale::Modern,
            era: 0.0,
            whip: 0.0,
            strikeouts_per_nine: 0.0,
            walks_per_nine: 0.0,
            home_runs_per_nine: 0.0,
            control: 5,
            stamina: 5,
            role: PitcherRole::Reliever,
        }
    }
}

fn control_rating(line: &PitchingLine) -> u8 {
    if line.outs_recorded == 0 {
        return 5;
    }
    (10.0 - (line.walks_per_nine() - 1.0).round()).clamp(1.0, 10.0) as u8
}

fn stamina_rating(line: &PitchingLine) -> u8 {
    if line.games == 0 {
        return 5;
    }
    (line.outs_per_appearance() / FULL_STAMINA_OUTS * 10.0)
        .round()
        .clamp(1.0, 10.0) as u8
}

fn role_for(line: &PitchingLine) -> PitcherRole {
    if line.games > 0 && line.games_started * 2 >= line.games {
        PitcherRole::Starter
    } else {
        PitcherRole::Reliever
    }
}
