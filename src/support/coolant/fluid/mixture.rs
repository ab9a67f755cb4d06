use std::fmt;

use crate::support::coolant::{
    ConcentrationError, Coolant, Correlation, FreezeCurve, Property, TemperatureRange,
    correlation::{KELVIN_OFFSET, Polynomial, Surface, SurfaceForm, TemperatureAxis},
};

use super::{ethyl_alcohol, ethylene_glycol, methyl_alcohol, propylene_glycol};

/// Mass fraction the mixture surfaces are centered on.
const CONCENTRATION_CENTER: f64 = 0.3;

/// Number of concentration terms per temperature power.
const CONCENTRATION_TERMS: usize = 5;

/// Temperature in °C the mixture surfaces are centered on.
const TEMPERATURE_CENTER: f64 = 20.0;

/// Coefficient tables and bounds for one solute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct MixtureData {
    pub(crate) t_max: f64,
    pub(crate) freeze: FreezeCurve,
    pub(crate) viscosity: Surface<3>,
    pub(crate) density: Surface<3>,
    pub(crate) specific_heat: Surface<3>,
    pub(crate) conductivity: Surface<3>,
}

/// Builds the viscosity surface: `ln μ` in concentration and `1000/T`.
///
/// `terms[j][i]` multiplies `(x − 0.3)ⁱ · (1000/T − 1000/293.15)ʲ`.
pub(super) const fn viscosity_surface(terms: [[f64; CONCENTRATION_TERMS]; 3]) -> Surface<3> {
    Surface {
        concentration_center: CONCENTRATION_CENTER,
        axis: TemperatureAxis::InverseKelvin {
            center: 1000.0 / (TEMPERATURE_CENTER + KELVIN_OFFSET),
        },
        form: SurfaceForm::Exponential,
        terms: rows(terms),
    }
}

/// Builds a polynomial surface in concentration and Celsius temperature.
///
/// `terms[j][i]` multiplies `(x − 0.3)ⁱ · (t − 20)ʲ`.
pub(super) const fn property_surface(terms: [[f64; CONCENTRATION_TERMS]; 3]) -> Surface<3> {
    Surface {
        concentration_center: CONCENTRATION_CENTER,
        axis: TemperatureAxis::Celsius {
            center: TEMPERATURE_CENTER,
        },
        form: SurfaceForm::Polynomial,
        terms: rows(terms),
    }
}

const fn rows(terms: [[f64; CONCENTRATION_TERMS]; 3]) -> [Polynomial; 3] {
    [
        Polynomial::new(&terms[0]),
        Polynomial::new(&terms[1]),
        Polynomial::new(&terms[2]),
    ]
}

/// A solute mixed with water to form a secondary coolant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solute {
    EthyleneGlycol,
    PropyleneGlycol,
    EthylAlcohol,
    MethylAlcohol,
}

impl Solute {
    pub const ALL: [Self; 4] = [
        Self::EthyleneGlycol,
        Self::PropyleneGlycol,
        Self::EthylAlcohol,
        Self::MethylAlcohol,
    ];

    pub(crate) fn data(self) -> &'static MixtureData {
        match self {
            Self::EthyleneGlycol => &ethylene_glycol::DATA,
            Self::PropyleneGlycol => &propylene_glycol::DATA,
            Self::EthylAlcohol => &ethyl_alcohol::DATA,
            Self::MethylAlcohol => &methyl_alcohol::DATA,
        }
    }

    /// Highest mass fraction the correlations were fitted for.
    #[must_use]
    pub fn max_concentration(self) -> f64 {
        self.data().freeze.max_concentration()
    }

    /// Freezing temperature in °C of a mixture at `concentration`.
    ///
    /// # Errors
    ///
    /// Returns [`ConcentrationError`] if `concentration` is outside
    /// `[0, max_concentration]`.
    pub fn freeze_point(self, concentration: f64) -> Result<f64, ConcentrationError> {
        self.data().freeze.freeze_point(self, concentration)
    }
}

impl fmt::Display for Solute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EthyleneGlycol => "ethylene glycol",
            Self::PropyleneGlycol => "propylene glycol",
            Self::EthylAlcohol => "ethyl alcohol",
            Self::MethylAlcohol => "methyl alcohol",
        })
    }
}

/// A water-based mixture at a fixed solute mass fraction.
///
/// All coefficient surfaces are resolved at construction, so property
/// queries only evaluate polynomials in temperature. The valid range runs
/// from the mixture's own freeze point up to a solute-specific maximum.
///
/// # Example
///
/// ```
/// use twine_coolants::support::coolant::{Coolant, Mixture};
///
/// let eg = Mixture::ethylene_glycol(0.4).unwrap();
/// assert!((eg.freeze_point(0.4).unwrap() + 23.813).abs() < 0.01);
///
/// let rho = eg.density(20.0).unwrap();
/// assert!(rho.warning.is_none());
/// assert!((rho.value - 1051.9).abs() < 1.0);
///
/// // Below the freeze point the lower bound is used, with a warning.
/// let cold = eg.density(-50.0).unwrap();
/// assert!(cold.warning.is_some());
/// assert_eq!(cold.value, eg.density(eg.t_min()).unwrap().value);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mixture {
    solute: Solute,
    concentration: f64,
    range: TemperatureRange,
    viscosity: Correlation,
    density: Correlation,
    specific_heat: Correlation,
    conductivity: Correlation,
}

impl Mixture {
    /// Creates a mixture of `solute` at mass fraction `concentration`.
    ///
    /// # Errors
    ///
    /// Returns [`ConcentrationError`] if `concentration` is not a fraction or
    /// lies outside the solute's fitted range.
    pub fn new(solute: Solute, concentration: f64) -> Result<Self, ConcentrationError> {
        let data = solute.data();
        let x = data.freeze.check(solute, concentration)?;
        let t_min = data.freeze.freeze_point(solute, x)?;

        Ok(Self {
            solute,
            concentration: x,
            range: TemperatureRange::new(t_min, data.t_max),
            viscosity: data.viscosity.resolve(x),
            density: data.density.resolve(x),
            specific_heat: data.specific_heat.resolve(x),
            conductivity: data.conductivity.resolve(x),
        })
    }

    /// Ethylene glycol and water.
    ///
    /// # Errors
    ///
    /// See [`Mixture::new`].
    pub fn ethylene_glycol(concentration: f64) -> Result<Self, ConcentrationError> {
        Self::new(Solute::EthyleneGlycol, concentration)
    }

    /// Propylene glycol and water.
    ///
    /// # Errors
    ///
    /// See [`Mixture::new`].
    pub fn propylene_glycol(concentration: f64) -> Result<Self, ConcentrationError> {
        Self::new(Solute::PropyleneGlycol, concentration)
    }

    /// Ethyl alcohol and water.
    ///
    /// # Errors
    ///
    /// See [`Mixture::new`].
    pub fn ethyl_alcohol(concentration: f64) -> Result<Self, ConcentrationError> {
        Self::new(Solute::EthylAlcohol, concentration)
    }

    /// Methyl alcohol and water.
    ///
    /// # Errors
    ///
    /// See [`Mixture::new`].
    pub fn methyl_alcohol(concentration: f64) -> Result<Self, ConcentrationError> {
        Self::new(Solute::MethylAlcohol, concentration)
    }

    #[must_use]
    pub fn solute(&self) -> Solute {
        self.solute
    }

    /// Solute mass fraction fixed at construction.
    #[must_use]
    pub fn concentration(&self) -> f64 {
        self.concentration
    }

    /// Freezing temperature in °C of this solute at `concentration`.
    ///
    /// The query is independent of the concentration the mixture was built with.
    ///
    /// # Errors
    ///
    /// See [`Solute::freeze_point`].
    pub fn freeze_point(&self, concentration: f64) -> Result<f64, ConcentrationError> {
        self.solute.freeze_point(concentration)
    }
}

impl Coolant for Mixture {
    fn temperature_range(&self) -> TemperatureRange {
        self.range
    }

    fn correlation(&self, property: Property) -> Correlation {
        match property {
            Property::Viscosity => self.viscosity,
            Property::Density => self.density,
            Property::SpecificHeat => self.specific_heat,
            Property::Conductivity => self.conductivity,
        }
    }
}
