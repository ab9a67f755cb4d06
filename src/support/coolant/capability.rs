use std::fmt;

use tracing::warn;

use crate::support::constraint::{Constraint, StrictlyPositive};

use super::{Correlation, Evaluated, PropertyError, RangeWarning, TemperatureRange};

/// A thermophysical property provided by every coolant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Property {
    /// Dynamic viscosity in Pa·s.
    Viscosity,
    /// Density in kg/m³.
    Density,
    /// Specific heat capacity in J/(kg·K).
    SpecificHeat,
    /// Thermal conductivity in W/(m·K).
    Conductivity,
}

impl Property {
    pub const ALL: [Self; 4] = [
        Self::Viscosity,
        Self::Density,
        Self::SpecificHeat,
        Self::Conductivity,
    ];

    /// Returns the SI unit symbol the property is reported in.
    #[must_use]
    pub fn unit(self) -> &'static str {
        match self {
            Self::Viscosity => "Pa·s",
            Self::Density => "kg/m³",
            Self::SpecificHeat => "J/(kg·K)",
            Self::Conductivity => "W/(m·K)",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Viscosity => "viscosity",
            Self::Density => "density",
            Self::SpecificHeat => "specific heat",
            Self::Conductivity => "conductivity",
        })
    }
}

/// All four properties evaluated at one temperature, in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Properties {
    pub viscosity: f64,
    pub density: f64,
    pub specific_heat: f64,
    pub conductivity: f64,
}

/// Property evaluation shared by all coolants.
///
/// Implementors only supply data: a valid temperature range and one
/// [`Correlation`] per [`Property`]. The provided methods apply the clamping
/// policy and validate results, and are not meant to be overridden.
///
/// Temperatures are in °C. Every accessor returns an [`Evaluated`] value whose
/// `warning` is set if, and only if, the temperature had to be clamped.
pub trait Coolant {
    /// Returns the temperature range the correlations are valid over.
    fn temperature_range(&self) -> TemperatureRange;

    /// Returns the correlation used for `property`.
    fn correlation(&self, property: Property) -> Correlation;

    /// Lowest valid temperature in °C.
    fn t_min(&self) -> f64 {
        self.temperature_range().min()
    }

    /// Highest valid temperature in °C.
    fn t_max(&self) -> f64 {
        self.temperature_range().max()
    }

    /// Evaluates a single property at `temp_c`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidTemperature`] for a `NaN` temperature, or
    /// [`PropertyError::Degenerate`] if the correlation yields a non-finite or
    /// non-positive value.
    fn evaluate(&self, property: Property, temp_c: f64) -> Result<Evaluated<f64>, PropertyError> {
        let (temp_c, warning) = clamp_temperature(self.temperature_range(), temp_c)?;
        let value = checked(property, &self.correlation(property), temp_c)?;
        Ok(Evaluated { value, warning })
    }

    /// Dynamic viscosity in Pa·s.
    ///
    /// # Errors
    ///
    /// See [`Coolant::evaluate`].
    fn viscosity(&self, temp_c: f64) -> Result<Evaluated<f64>, PropertyError> {
        self.evaluate(Property::Viscosity, temp_c)
    }

    /// Density in kg/m³.
    ///
    /// # Errors
    ///
    /// See [`Coolant::evaluate`].
    fn density(&self, temp_c: f64) -> Result<Evaluated<f64>, PropertyError> {
        self.evaluate(Property::Density, temp_c)
    }

    /// Specific heat capacity in J/(kg·K).
    ///
    /// # Errors
    ///
    /// See [`Coolant::evaluate`].
    fn specific_heat(&self, temp_c: f64) -> Result<Evaluated<f64>, PropertyError> {
        self.evaluate(Property::SpecificHeat, temp_c)
    }

    /// Thermal conductivity in W/(m·K).
    ///
    /// # Errors
    ///
    /// See [`Coolant::evaluate`].
    fn conductivity(&self, temp_c: f64) -> Result<Evaluated<f64>, PropertyError> {
        self.evaluate(Property::Conductivity, temp_c)
    }

    /// Evaluates all four properties with a single clamp.
    ///
    /// # Errors
    ///
    /// See [`Coolant::evaluate`].
    fn properties(&self, temp_c: f64) -> Result<Evaluated<Properties>, PropertyError> {
        let (temp_c, warning) = clamp_temperature(self.temperature_range(), temp_c)?;
        let eval = |property| checked(property, &self.correlation(property), temp_c);

        Ok(Evaluated {
            value: Properties {
                viscosity: eval(Property::Viscosity)?,
                density: eval(Property::Density)?,
                specific_heat: eval(Property::SpecificHeat)?,
                conductivity: eval(Property::Conductivity)?,
            },
            warning,
        })
    }
}

/// Applies the range policy, logging each clamp.
fn clamp_temperature(
    range: TemperatureRange,
    temp_c: f64,
) -> Result<(f64, Option<RangeWarning>), PropertyError> {
    if temp_c.is_nan() {
        return Err(PropertyError::InvalidTemperature { temp_c });
    }

    let (clamped, warning) = range.clamp(temp_c);
    if let Some(w) = &warning {
        warn!(
            requested = w.requested,
            clamped_to = w.clamped_to,
            bound = %w.bound,
            "temperature outside valid range, clamping"
        );
    }
    Ok((clamped, warning))
}

fn checked(property: Property, correlation: &Correlation, temp_c: f64) -> Result<f64, PropertyError> {
    let value = correlation.evaluate(temp_c);
    if value.is_finite() && StrictlyPositive::check(&value).is_ok() {
        Ok(value)
    } else {
        Err(PropertyError::Degenerate {
            property,
            temp_c,
            value,
        })
    }
}
