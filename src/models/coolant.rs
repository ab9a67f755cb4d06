//! Coolant property models.
//!
//! [`CoolantModel`] evaluates all properties of a [`Coolant`] at a given
//! temperature. [`freeze_protection`] solves the inverse freeze-point problem.

pub mod freeze_protection;

use twine_core::Model;
use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{
        DynamicViscosity, MassDensity, SpecificHeatCapacity, ThermalConductivity,
        ThermodynamicTemperature,
    },
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::coolant::{Coolant, Evaluated, Properties, PropertyError};

/// Coolant properties as unit-safe quantities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolantProperties {
    pub viscosity: DynamicViscosity,
    pub density: MassDensity,
    pub specific_heat: SpecificHeatCapacity,
    pub conductivity: ThermalConductivity,
}

impl From<Properties> for CoolantProperties {
    fn from(p: Properties) -> Self {
        Self {
            viscosity: DynamicViscosity::new::<pascal_second>(p.viscosity),
            density: MassDensity::new::<kilogram_per_cubic_meter>(p.density),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(p.specific_heat),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(p.conductivity),
        }
    }
}

/// A [`Model`] mapping temperature to the properties of a coolant.
///
/// The output keeps any [`RangeWarning`](crate::support::coolant::RangeWarning)
/// raised while clamping the input temperature.
///
/// # Example
///
/// ```
/// use twine_core::Model;
/// use twine_coolants::{models::coolant::CoolantModel, support::coolant::Mixture};
/// use uom::si::{
///     f64::ThermodynamicTemperature, mass_density::kilogram_per_cubic_meter,
///     thermodynamic_temperature::degree_celsius,
/// };
///
/// let model = CoolantModel::new(Mixture::propylene_glycol(0.2).unwrap());
/// let t = ThermodynamicTemperature::new::<degree_celsius>(20.0);
/// let out = model.call(&t).unwrap();
///
/// let rho = out.value.density.get::<kilogram_per_cubic_meter>();
/// assert!((rho - 1014.8).abs() < 1.0);
/// assert!(out.warning.is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoolantModel<C> {
    coolant: C,
}

impl<C: Coolant> CoolantModel<C> {
    #[must_use]
    pub fn new(coolant: C) -> Self {
        Self { coolant }
    }

    #[must_use]
    pub fn coolant(&self) -> &C {
        &self.coolant
    }
}

impl<C: Coolant> Model for CoolantModel<C> {
    type Input = ThermodynamicTemperature;
    type Output = Evaluated<CoolantProperties>;
    type Error = PropertyError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let evaluated = self.coolant.properties(input.get::<degree_celsius>())?;
        Ok(evaluated.map(CoolantProperties::from))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::coolant::{Bound, Mixture, Water};

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    #[test]
    fn matches_raw_accessors() -> Result<(), PropertyError> {
        let mixture = Mixture::ethylene_glycol(0.0).unwrap();
        let model = CoolantModel::new(mixture);

        let out = model.call(&celsius(20.0))?;
        assert!(out.warning.is_none());

        let p = out.value;
        assert_relative_eq!(p.viscosity.get::<pascal_second>(), 1.0078e-3, max_relative = 1e-3);
        assert_relative_eq!(
            p.density.get::<kilogram_per_cubic_meter>(),
            mixture.density(20.0)?.value,
            max_relative = 1e-12,
        );
        assert_relative_eq!(
            p.specific_heat.get::<joule_per_kilogram_kelvin>(),
            mixture.specific_heat(20.0)?.value,
            max_relative = 1e-12,
        );
        assert_relative_eq!(
            p.conductivity.get::<watt_per_meter_kelvin>(),
            mixture.conductivity(20.0)?.value,
            max_relative = 1e-12,
        );

        Ok(())
    }

    #[test]
    fn keeps_range_warning() -> Result<(), PropertyError> {
        let model = CoolantModel::new(Water);
        let out = model.call(&celsius(-10.0))?;

        let warning = out.warning.expect("below freezing must clamp");
        assert_eq!(warning.bound, Bound::Lower);
        assert_relative_eq!(
            out.value.density.get::<kilogram_per_cubic_meter>(),
            Water.density(0.0)?.value,
        );

        Ok(())
    }
}
