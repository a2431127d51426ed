use crate::error::{ChartError, ChartResult};

/// Fraction of a column slot occupied by its bars.
///
/// Callers configure the *gap* instead: a spacing percent `p` in `[0, 1]`
/// is stored as the occupancy `1 - p`. Geometry always reads the stored
/// occupancy, never the percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpacingFactor(f64);

impl Default for SpacingFactor {
    fn default() -> Self {
        Self(0.9)
    }
}

impl SpacingFactor {
    /// Converts a gap fraction into the stored bar occupancy `1 - spacing_percent`.
    pub fn from_spacing_percent(spacing_percent: f64) -> ChartResult<Self> {
        if !spacing_percent.is_finite() || !(0.0..=1.0).contains(&spacing_percent) {
            return Err(ChartError::SpacingPercentOutOfRange {
                value: spacing_percent,
            });
        }
        Ok(Self(1.0 - spacing_percent))
    }

    /// Stored bar occupancy of a column slot.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Gap fraction the factor was configured from.
    #[must_use]
    pub fn spacing_percent(self) -> f64 {
        1.0 - self.0
    }
}
