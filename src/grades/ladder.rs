//! ERA percentile pools and percentile → grade ladders.
//!
//! Lower ERA is better, so a pitcher's percentile is the share of the pool
//! with a strictly lower ERA: the league's best pitcher sits at 0.0. Two
//! ladders exist. The modern one grades 1–22 and is used for synthesized
//! cards; the legacy one grades 1–15 and is only used on the binary-import
//! path. They come from different calibration eras and are kept distinct.

use serde::{Deserialize, Serialize};

/// Percentile assigned when the pool is too small to rank against.
pub const NEUTRAL_PERCENTILE: f64 = 0.5;

/// `(exclusive percentile bound, grade)`, best first. Below every bound → 1.
pub const MODERN_LADDER: [(f64, u8); 21] = [
    (0.005, 22),
    (0.02, 21),
    (0.05, 20),
    (0.09, 19),
    (0.14, 18),
    (0.20, 17),
    (0.26, 16),
    (0.32, 15),
    (0.38, 14),
    (0.44, 13),
    (0.50, 12),
    (0.56, 11),
    (0.62, 10),
    (0.68, 9),
    (0.74, 8),
    (0.80, 7),
    (0.86, 6),
    (0.91, 5),
    (0.95, 4),
    (0.98, 3),
    (0.995, 2),
];

/// Legacy 1–15 ladder used for imported binary cards.
pub const LEGACY_LADDER: [(f64, u8); 14] = [
    (0.01, 15),
    (0.04, 14),
    (0.09, 13),
    (0.16, 12),
    (0.24, 11),
    (0.33, 10),
    (0.43, 9),
    (0.57, 8),
    (0.67, 7),
    (0.76, 6),
    (0.84, 5),
    (0.91, 4),
    (0.96, 3),
    (0.99, 2),
];

/// Grade assigned past the last ladder step.
pub const MIN_GRADE: u8 = 1;

/// Which ladder produced a grade.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradeScale {
    /// 1–22, synthesized cards.
    Modern,
    /// 1–15, legacy binary imports.
    Legacy,
}

impl GradeScale {
    /// Highest grade on this scale.
    #[must_use]
    pub const fn max_grade(self) -> u8 {
        match self {
            GradeScale::Modern => 22,
            GradeScale::Legacy => 15,
        }
    }

    fn ladder(self) -> &'static [(f64, u8)] {
        match self {
            GradeScale::Modern => &MODERN_LADDER,
            GradeScale::Legacy => &LEGACY_LADDER,
        }
    }

    /// Map a percentile (0.0 = best) onto this scale.
    #[must_use]
    pub fn grade_for(self, percentile: f64) -> PitcherGrade {
        let grade = self
            .ladder()
            .iter()
            .find(|&&(bound, _)| percentile < bound)
            .map(|&(_, grade)| grade)
            .unwrap_or(MIN_GRADE);
        PitcherGrade(grade)
    }
}

/// Pitcher grade; higher is better.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PitcherGrade(pub u8);

impl PitcherGrade {
    /// Get the raw grade.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Grade for the neutral percentile on a scale.
    #[must_use]
    pub fn neutral(scale: GradeScale) -> Self {
        scale.grade_for(NEUTRAL_PERCENTILE)
    }
}

impl std::fmt::Display for PitcherGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Grade({})", self.0)
    }
}

/// Sorted pool of qualifying ERAs for one generation run.
///
/// Build once, before any grade is computed, then share read-only.
///
/// ## Example
///
/// ```
/// use rust_diamond::grades::EraPool;
///
/// let pool = EraPool::new(vec![4.10, 2.50, 3.30, 5.00]);
/// assert_eq!(pool.percentile(2.50), 0.0);
/// assert_eq!(pool.percentile(3.30), 0.25);
/// assert_eq!(pool.percentile(6.00), 1.0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EraPool {
    eras: Vec<f64>,
}

impl EraPool {
    /// Build a pool, discarding non-finite ERAs.
    #[must_use]
    pub fn new(eras: impl IntoIterator<Item = f64>) -> Self {
        let mut eras: Vec<f64> = eras.into_iter().filter(|e| e.is_finite()).collect();
        eras.sort_by(f64::total_cmp);
        Self { eras }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.eras.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.eras.is_empty()
    }

    /// Share of the pool with a strictly lower ERA.
    ///
    /// Pools of zero or one ERA give `NEUTRAL_PERCENTILE`.
    #[must_use]
    pub fn percentile(&self, era: f64) -> f64 {
        if self.eras.len() <= 1 {
            return NEUTRAL_PERCENTILE;
        }
        let better = self.eras.partition_point(|&e| e < era);
        better as f64 / self.eras.len() as f64
    }

    /// Modern-scale grade for an ERA against this pool.
    #[must_use]
    pub fn grade(&self, era: f64) -> PitcherGrade {
        GradeScale::Modern.grade_for(self.percentile(era))
    }
}
