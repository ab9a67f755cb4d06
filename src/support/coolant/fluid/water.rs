use crate::support::coolant::{
    Coolant, Correlation, Property, TemperatureRange,
    correlation::{Form, Polynomial, TemperatureAxis},
};

const T_MIN: f64 = 0.0;
const T_MAX: f64 = 100.0;

/// `ln μ` as a cubic in `1000/T`, with `T` in kelvin.
const VISCOSITY: Correlation = Correlation {
    axis: TemperatureAxis::InverseKelvin { center: 0.0 },
    form: Form::Exponential(Polynomial::new(&[
        -1.658314553e1,
        6.740509784,
        -2.078592850,
        2.738764187e-1,
    ])),
};

/// Kell's rational fit for air-free water at atmospheric pressure.
const DENSITY: Correlation = Correlation {
    axis: TemperatureAxis::Celsius { center: 0.0 },
    form: Form::Rational {
        numerator: Polynomial::new(&[
            999.83952,
            16.945176,
            -7.9870401e-3,
            -46.170461e-6,
            105.56302e-9,
            -280.54253e-12,
        ]),
        denominator: Polynomial::new(&[1.0, 16.879850e-3]),
    },
};

const SPECIFIC_HEAT: Correlation = Correlation {
    axis: TemperatureAxis::Celsius { center: 0.0 },
    form: Form::Polynomial(Polynomial::new(&[
        4.215904127e3,
        -2.205964383,
        3.648126898e-2,
        -1.459973594e-4,
    ])),
};

const CONDUCTIVITY: Correlation = Correlation {
    axis: TemperatureAxis::Celsius { center: 0.0 },
    form: Form::Polynomial(Polynomial::new(&[
        5.573190630e-1,
        2.156086186e-3,
        -9.658967411e-6,
    ])),
};

/// Pure liquid water between 0 °C and 100 °C at atmospheric pressure.
///
/// Water has no concentration, so it is a unit struct and its freeze point
/// takes no argument.
///
/// # Example
///
/// ```
/// use twine_coolants::support::coolant::{Coolant, Water};
///
/// let cp = Water.specific_heat(50.0).unwrap();
/// assert!((cp.value - 4181.0).abs() / 4181.0 < 0.01);
/// assert_eq!(Water.freeze_point(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Water;

impl Water {
    /// Freezing temperature in °C.
    #[must_use]
    pub fn freeze_point(&self) -> f64 {
        0.0
    }
}

impl Coolant for Water {
    fn temperature_range(&self) -> TemperatureRange {
        TemperatureRange::new(T_MIN, T_MAX)
    }

    fn correlation(&self, property: Property) -> Correlation {
        match property {
            Property::Viscosity => VISCOSITY,
            Property::Density => DENSITY,
            Property::SpecificHeat => SPECIFIC_HEAT,
            Property::Conductivity => CONDUCTIVITY,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::support::coolant::PropertyError;

    const TEMPERATURES: [f64; 9] = [1.0, 5.0, 10.0, 25.0, 50.0, 75.0, 90.0, 95.0, 99.0];

    fn check(property: Property, expected: [f64; 9]) -> Result<(), PropertyError> {
        for (t, value) in TEMPERATURES.into_iter().zip(expected) {
            let evaluated = Water.evaluate(property, t)?;
            assert!(evaluated.warning.is_none());
            assert_relative_eq!(evaluated.value, value, max_relative = 0.01);
        }
        Ok(())
    }

    #[test]
    fn viscosity() -> Result<(), PropertyError> {
        check(
            Property::Viscosity,
            [
                1.731e-3, 1.518e-3, 1.306e-3, 8.9e-4, 5.465e-4, 3.774e-4, 3.142e-4, 2.971e-4,
                2.846e-4,
            ],
        )
    }

    #[test]
    fn specific_heat() -> Result<(), PropertyError> {
        check(
            Property::SpecificHeat,
            [
                4.216e3, 4.205e3, 4.195e3, 4.181e3, 4.181e3, 4.193e3, 4.205e3, 4.21e3, 4.215e3,
            ],
        )
    }

    #[test]
    fn density() -> Result<(), PropertyError> {
        check(
            Property::Density,
            [
                999.9, 1000.0, 999.7, 997.0, 988.0, 974.8, 965.3, 961.9, 959.1,
            ],
        )
    }

    #[test]
    fn conductivity() -> Result<(), PropertyError> {
        check(
            Property::Conductivity,
            [
                0.5582, 0.5678, 0.5788, 0.6065, 0.6406, 0.6636, 0.6728, 0.6752, 0.6768,
            ],
        )
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn freezes_at_zero() {
        assert_eq!(Water.freeze_point(), 0.0);
        assert_eq!(Water.t_min(), Water.freeze_point());
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn out_of_range_temperatures_clamp() -> Result<(), PropertyError> {
        let cold = Water.density(-10.0)?;
        assert_eq!(cold.value, Water.density(Water.t_min())?.value);
        assert!(cold.warning.is_some());

        let hot = Water.density(110.0)?;
        assert_eq!(hot.value, Water.density(Water.t_max())?.value);
        assert!(hot.warning.is_some());

        Ok(())
    }
}
