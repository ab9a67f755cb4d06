//! Ethyl alcohol and water.

use super::mixture::{MixtureData, property_surface, viscosity_surface};
use crate::support::coolant::FreezeCurve;

pub(super) const DATA: MixtureData = MixtureData {
    t_max: 40.0,
    freeze: FreezeCurve::new(
        0.6,
        &[
            -4.028903232e1,
            4.538010560e1,
            -1.031261421e3,
            2.445721831e3,
            -1.688355904e3,
        ],
    ),
    viscosity: viscosity_surface([
        [-5.939599934, 1.393020873, -5.393100441, 2.699371738, 1.050971448],
        [3.374390244, 7.895063285e-1, -1.302929294e1, 1.182791434e1, 5.463171291e1],
        [1.581567654, -2.204707315, -3.904549306e1, 1.268796987e1, 2.789152503e2],
    ]),
    density: property_surface([
        [9.53733e2, -1.666916667e2, -1.688333333e2, -1.308333333e2, 7.533333333e2],
        [-6.027967262e-1, -1.56593998, 2.694320437, 4.701140873, -2.206001984e1],
        [-2.12297619e-3, 1.512400794e-2, -4.810515873e-2, -1.052579365e-1, 4.450396825e-1],
    ]),
    specific_heat: property_surface([
        [4.2170175e3, -1.557395833e3, -3.786875e3, 6.039583333e3, -1.4875e3],
        [1.961916667, 3.673263889e1, 1.598115079e1, -1.598115079e2, 3.196230159e2],
        [-4.953214286e-2, -5.556845238e-1, 4.825496032, 4.020833333, -4.03234127e1],
    ]),
    conductivity: property_surface([
        [4.0989075e-1, -5.2603125e-1, 3.908125e-1, 4.8125e-2, -4.3875e-1],
        [6.276906746e-4, -2.426040013e-3, 4.507490079e-3, -2.28885582e-3, -1.253670635e-2],
        [-1.1825e-6, -3.37202381e-6, 4.673611111e-5, 1.443452381e-4, -7.295634921e-4],
    ]),
};

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::support::coolant::{ConcentrationError, Coolant, Mixture, PropertyError};

    /// (concentration, °C, viscosity, density, specific heat, conductivity)
    const REFERENCE: [(f64, f64, f64, f64, f64, f64); 9] = [
        (0.0, 5.0, 0.0015015, 1000.1, 4205.2, 0.5709),
        (0.0, 20.0, 0.0010005, 998.18, 4168.3, 0.59802),
        (0.0, 40.0, 0.00065457, 992.44, 4200.5, 0.63014),
        (0.2, 5.0, 0.0040621, 974.42, 4359.5, 0.45243),
        (0.2, 20.0, 0.0021648, 968.92, 4328.7, 0.46631),
        (0.2, 40.0, 0.001164, 958.81, 4320.0, 0.4844),
        (0.4, 5.0, 0.0055016, 946.01, 3931.5, 0.35458),
        (0.4, 20.0, 0.0028758, 935.32, 4029.3, 0.3612),
        (0.4, 40.0, 0.0014573, 920.26, 4119.9, 0.36934),
    ];

    const FREEZE_POINTS: [(f64, f64); 6] = [
        (0.1, -4.379),
        (0.2, -11.119),
        (0.3, -20.14),
        (0.4, -29.533),
        (0.5, -37.611),
        (0.6, -44.91),
    ];

    #[test]
    fn matches_reference_properties() -> Result<(), PropertyError> {
        for (x, t, mu, rho, cp, k) in REFERENCE {
            let mixture = Mixture::ethyl_alcohol(x).unwrap();
            assert_relative_eq!(mixture.viscosity(t)?.value, mu, max_relative = 1e-3);
            assert_relative_eq!(mixture.density(t)?.value, rho, max_relative = 1e-3);
            assert_relative_eq!(mixture.specific_heat(t)?.value, cp, max_relative = 1e-3);
            assert_relative_eq!(mixture.conductivity(t)?.value, k, max_relative = 1e-3);
        }
        Ok(())
    }

    #[test]
    fn matches_reference_freeze_points() -> Result<(), ConcentrationError> {
        for (x, expected) in FREEZE_POINTS {
            let mixture = Mixture::ethyl_alcohol(x)?;
            assert_abs_diff_eq!(mixture.freeze_point(x)?, expected, epsilon = 0.01);
        }
        Ok(())
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn out_of_range_temperatures_clamp() -> Result<(), PropertyError> {
        let mixture = Mixture::ethyl_alcohol(0.4).unwrap();

        let cold = mixture.density(-50.0)?;
        assert_eq!(cold.value, mixture.density(mixture.t_min())?.value);
        assert!(cold.warning.is_some());

        let hot = mixture.density(150.0)?;
        assert_eq!(hot.value, mixture.density(mixture.t_max())?.value);
        assert!(hot.warning.is_some());

        Ok(())
    }
}
