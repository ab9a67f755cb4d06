//! Freeze-point curves of water-based mixtures.

use crate::support::constraint::UnitInterval;

use super::{ConcentrationError, Solute, correlation::Polynomial};

/// Freezing temperature as a polynomial in solute mass fraction.
///
/// The curve has no constant term, so pure water freezes at exactly 0 °C.
/// It is only defined on `[0, max_concentration]`; there is no fitted data
/// beyond that, so queries outside it fail instead of extrapolating.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreezeCurve {
    polynomial: Polynomial,
    max_concentration: f64,
}

impl FreezeCurve {
    /// Creates a curve from its first- and higher-order coefficients.
    ///
    /// `coefficients[k]` multiplies `x^(k + 1)`.
    ///
    /// # Panics
    ///
    /// Panics if more than five coefficients are given.
    #[must_use]
    pub const fn new(max_concentration: f64, coefficients: &[f64]) -> Self {
        assert!(coefficients.len() < 6, "freeze curve has too many coefficients");
        let mut shifted = [0.0; 6];
        let mut i = 0;
        while i < coefficients.len() {
            shifted[i + 1] = coefficients[i];
            i += 1;
        }
        Self {
            polynomial: Polynomial::new(&shifted),
            max_concentration,
        }
    }

    /// Upper end of the fitted concentration interval.
    #[must_use]
    pub fn max_concentration(&self) -> f64 {
        self.max_concentration
    }

    /// Checks that `concentration` lies in `[0, max_concentration]`.
    ///
    /// # Errors
    ///
    /// Returns [`ConcentrationError::NotAFraction`] for values outside `[0, 1]`
    /// or `NaN`, and [`ConcentrationError::OutsideFittedRange`] for fractions
    /// above the fitted maximum.
    pub fn check(&self, solute: Solute, concentration: f64) -> Result<f64, ConcentrationError> {
        let fraction = UnitInterval::new(concentration)
            .map_err(|source| ConcentrationError::NotAFraction {
                concentration,
                source,
            })?
            .into_inner();

        if fraction > self.max_concentration {
            return Err(ConcentrationError::OutsideFittedRange {
                solute,
                concentration,
                min: 0.0,
                max: self.max_concentration,
            });
        }
        Ok(fraction)
    }

    /// Freezing temperature in °C at `concentration`.
    ///
    /// # Errors
    ///
    /// See [`FreezeCurve::check`].
    pub fn freeze_point(&self, solute: Solute, concentration: f64) -> Result<f64, ConcentrationError> {
        let x = self.check(solute, concentration)?;
        Ok(self.polynomial.evaluate(x))
    }
}
