//! Scoring module - line clear points and gravity pacing
//!
//! Points depend only on how many rows a single lock clears. Gravity gets
//! faster as the score grows, down to a fixed floor.

use crate::types::{DELAY_STEP_MS, LINE_SCORES, MAX_DELAY_MS, MIN_DELAY_MS, POINTS_PER_STEP};

/// Points for clearing `rows` rows with one lock.
/// More than 4 rows scores as 4.
pub fn line_clear_score(rows: usize) -> u32 {
    LINE_SCORES[rows.min(LINE_SCORES.len() - 1)]
}

/// Gravity delay as a function of score
///
/// `delay = max(min_delay_ms, max_delay_ms - (score / points_per_step) * decrease_ms)`
///
/// With `points_per_step = 1` this is the plain `max(min, max - score * step)`
/// curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GravityCurve {
    pub max_delay_ms: u32,
    pub min_delay_ms: u32,
    pub decrease_ms: u32,
    pub points_per_step: u32,
}

impl GravityCurve {
    /// Milliseconds to wait before the next gravity step at `score`
    pub fn delay_ms(&self, score: u32) -> u32 {
        let steps = score / self.points_per_step.max(1);
        self.max_delay_ms
            .saturating_sub(steps.saturating_mul(self.decrease_ms))
            .max(self.min_delay_ms)
    }
}

impl Default for GravityCurve {
    fn default() -> Self {
        Self {
            max_delay_ms: MAX_DELAY_MS,
            min_delay_ms: MIN_DELAY_MS,
            decrease_ms: DELAY_STEP_MS,
            points_per_step: POINTS_PER_STEP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_scores() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 300);
        assert_eq!(line_clear_score(3), 500);
        assert_eq!(line_clear_score(4), 800);
        assert_eq!(line_clear_score(5), 800);
    }

    #[test]
    fn test_default_delay_curve() {
        let curve = GravityCurve::default();
        assert_eq!(curve.delay_ms(0), 1000);
        assert_eq!(curve.delay_ms(99), 1000);
        assert_eq!(curve.delay_ms(100), 975);
        assert_eq!(curve.delay_ms(800), 800);
        assert_eq!(curve.delay_ms(3700), 75);
        assert_eq!(curve.delay_ms(u32::MAX), 75);
    }

    #[test]
    fn test_unit_step_curve() {
        let curve = GravityCurve {
            points_per_step: 1,
            ..GravityCurve::default()
        };
        assert_eq!(curve.delay_ms(1), 975);
        assert_eq!(curve.delay_ms(10), 750);
        assert_eq!(curve.delay_ms(37), 75);
        assert_eq!(curve.delay_ms(1000), 75);
    }

    #[test]
    fn test_zero_points_per_step_does_not_divide_by_zero() {
        let curve = GravityCurve {
            points_per_step: 0,
            ..GravityCurve::default()
        };
        assert_eq!(curve.delay_ms(2), 950);
    }
}
