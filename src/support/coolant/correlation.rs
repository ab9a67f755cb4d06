//! Correlation forms and their evaluation.
//!
//! A [`Correlation`] maps a temperature in °C to a property value in SI units.
//! The temperature is first mapped onto a [`TemperatureAxis`], then one of the
//! functional [`Form`]s is evaluated on that coordinate.
//!
//! Mixture data is stored as [`Surface`]s: polynomials in temperature whose
//! coefficients are themselves polynomials in concentration. A surface is
//! resolved into a plain [`Correlation`] once, when the mixture is built.

/// Offset between the Celsius and Kelvin scales.
pub(crate) const KELVIN_OFFSET: f64 = 273.15;

/// Largest number of coefficients a [`Polynomial`] can hold.
pub const MAX_TERMS: usize = 6;

/// A polynomial with coefficients in ascending power order.
///
/// Coefficients are stored inline so polynomials can live in `const` tables.
///
/// ```
/// use twine_coolants::support::coolant::correlation::Polynomial;
///
/// // 1 + 2x + 3x²
/// let p = Polynomial::new(&[1.0, 2.0, 3.0]);
/// assert_eq!(p.evaluate(2.0), 17.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polynomial {
    coefficients: [f64; MAX_TERMS],
    len: usize,
}

impl Polynomial {
    /// Creates a polynomial from coefficients in ascending power order.
    ///
    /// # Panics
    ///
    /// Panics if more than [`MAX_TERMS`] coefficients are given.
    /// In `const` tables this is a compile-time error.
    #[must_use]
    pub const fn new(coefficients: &[f64]) -> Self {
        assert!(
            coefficients.len() <= MAX_TERMS,
            "polynomial has too many coefficients"
        );
        let mut stored = [0.0; MAX_TERMS];
        let mut i = 0;
        while i < coefficients.len() {
            stored[i] = coefficients[i];
            i += 1;
        }
        Self {
            coefficients: stored,
            len: coefficients.len(),
        }
    }

    /// Returns the coefficients in ascending power order.
    #[must_use]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients[..self.len]
    }

    /// Evaluates the polynomial at `x` using Horner's scheme.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients()
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * x + c)
    }
}

/// The coordinate a correlation is polynomial in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TemperatureAxis {
    /// `t − center`, with `t` in °C.
    Celsius { center: f64 },

    /// `1000 / T − center`, with `T` in kelvin.
    ///
    /// Used for viscosity, whose logarithm is close to linear in `1/T`.
    InverseKelvin { center: f64 },
}

impl TemperatureAxis {
    /// Maps a Celsius temperature onto this axis.
    #[must_use]
    pub fn coordinate(self, temp_c: f64) -> f64 {
        match self {
            Self::Celsius { center } => temp_c - center,
            Self::InverseKelvin { center } => 1000.0 / (temp_c + KELVIN_OFFSET) - center,
        }
    }
}

/// Functional form of a correlation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Form {
    /// `p(u)`
    Polynomial(Polynomial),

    /// `exp(p(u))`, a polynomial in log space.
    Exponential(Polynomial),

    /// `p(u) / q(u)`
    Rational {
        numerator: Polynomial,
        denominator: Polynomial,
    },
}

impl Form {
    /// Evaluates the form at axis coordinate `u`.
    #[must_use]
    pub fn evaluate(&self, u: f64) -> f64 {
        match self {
            Self::Polynomial(p) => p.evaluate(u),
            Self::Exponential(p) => p.evaluate(u).exp(),
            Self::Rational {
                numerator,
                denominator,
            } => numerator.evaluate(u) / denominator.evaluate(u),
        }
    }
}

/// A property correlation in temperature alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Correlation {
    pub axis: TemperatureAxis,
    pub form: Form,
}

impl Correlation {
    /// Evaluates the correlation at `temp_c` without any range checks.
    ///
    /// The result may be non-finite for temperatures far outside the fit;
    /// callers are expected to clamp first and validate the result.
    #[must_use]
    pub fn evaluate(&self, temp_c: f64) -> f64 {
        self.form.evaluate(self.axis.coordinate(temp_c))
    }
}

/// Whether a resolved surface is used directly or as an exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceForm {
    Polynomial,
    Exponential,
}

/// A two-stage polynomial in concentration and temperature.
///
/// ```text
/// f(x, t) = Σⱼ ( Σᵢ terms[j][i] · (x − x_center)ⁱ ) · u(t)ʲ
/// ```
///
/// where `u` is the surface's [`TemperatureAxis`] coordinate.
/// Row `j` of `terms` is the concentration polynomial for the `j`-th
/// temperature power.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface<const N: usize> {
    pub concentration_center: f64,
    pub axis: TemperatureAxis,
    pub form: SurfaceForm,
    pub terms: [Polynomial; N],
}

impl<const N: usize> Surface<N> {
    /// Fixes the concentration, producing a correlation in temperature alone.
    ///
    /// # Panics
    ///
    /// Panics if `N` exceeds [`MAX_TERMS`].
    #[must_use]
    pub fn resolve(&self, concentration: f64) -> Correlation {
        let dx = concentration - self.concentration_center;
        let coefficients = self.terms.map(|row| row.evaluate(dx));
        let polynomial = Polynomial::new(&coefficients);
        let form = match self.form {
            SurfaceForm::Polynomial => Form::Polynomial(polynomial),
            SurfaceForm::Exponential => Form::Exponential(polynomial),
        };
        Correlation {
            axis: self.axis,
            form,
        }
    }
}
