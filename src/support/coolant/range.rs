//! Valid temperature ranges and the clamping policy applied to them.
//!
//! Correlations are only fitted over a finite temperature interval. Rather than
//! failing outside it, evaluation clamps the temperature to the nearest bound
//! and reports the substitution as a [`RangeWarning`] carried in the returned
//! [`Evaluated`] value.

use std::fmt;

/// Which end of a [`TemperatureRange`] a temperature was clamped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Lower,
    Upper,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lower => f.write_str("lower"),
            Self::Upper => f.write_str("upper"),
        }
    }
}

/// A non-fatal notice that a requested temperature was outside the valid range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeWarning {
    /// The temperature the caller asked for, in °C.
    pub requested: f64,
    /// The temperature actually used, in °C.
    pub clamped_to: f64,
    pub bound: Bound,
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "temperature {} °C is outside the valid range, using {} bound {} °C",
            self.requested, self.bound, self.clamped_to
        )
    }
}

/// A computed value together with any range warning raised while computing it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluated<T> {
    pub value: T,
    pub warning: Option<RangeWarning>,
}

impl<T> Evaluated<T> {
    /// Returns `true` if the input temperature had to be clamped.
    #[must_use]
    pub fn is_clamped(&self) -> bool {
        self.warning.is_some()
    }

    /// Discards the warning and returns the value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Transforms the value, keeping the warning.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Evaluated<U> {
        Evaluated {
            value: f(self.value),
            warning: self.warning,
        }
    }
}

/// A closed temperature interval `[min, max]` in °C.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRange {
    min: f64,
    max: f64,
}

impl TemperatureRange {
    /// Creates a range from its bounds in °C.
    ///
    /// # Panics
    ///
    /// Panics if `min > max` or either bound is not finite.
    /// Ranges come from compiled-in tables, so this indicates a data defect.
    #[must_use]
    pub fn new(min: f64, max: f64) -> Self {
        assert!(
            min.is_finite() && max.is_finite() && min <= max,
            "invalid temperature range [{min}, {max}]"
        );
        Self { min, max }
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns `true` if `temp_c` lies within the range, bounds included.
    #[must_use]
    pub fn contains(&self, temp_c: f64) -> bool {
        (self.min..=self.max).contains(&temp_c)
    }

    /// Clamps `temp_c` into the range.
    ///
    /// Returns the temperature to evaluate at and, when clamping occurred,
    /// the warning describing it. `NaN` is passed through unchanged;
    /// callers reject it before clamping.
    #[must_use]
    pub fn clamp(&self, temp_c: f64) -> (f64, Option<RangeWarning>) {
        let bound = if temp_c < self.min {
            Bound::Lower
        } else if temp_c > self.max {
            Bound::Upper
        } else {
            return (temp_c, None);
        };

        let clamped_to = match bound {
            Bound::Lower => self.min,
            Bound::Upper => self.max,
        };

        (
            clamped_to,
            Some(RangeWarning {
                requested: temp_c,
                clamped_to,
                bound,
            }),
        )
    }
}
