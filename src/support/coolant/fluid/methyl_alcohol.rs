//! Methyl alcohol and water.

use super::mixture::{MixtureData, property_surface, viscosity_surface};
use crate::support::coolant::FreezeCurve;

pub(super) const DATA: MixtureData = MixtureData {
    t_max: 40.0,
    freeze: FreezeCurve::new(
        0.6,
        &[
            -5.434230697e1,
            -1.216219483e2,
            1.438659262e2,
            -3.594248825e2,
            2.429234380e2,
        ],
    ),
    viscosity: viscosity_surface([
        [-6.342835024, 6.723744971e-1, -2.540273066, 2.892427586, -6.973800654],
        [2.641373525, -1.261989416e-1, -3.953877606, 9.936439563, 7.973661237],
        [8.03366063e-1, -1.659253514, -1.567010133e1, 4.819386003, 1.270643973e2],
    ]),
    density: property_surface([
        [9.5162225e2, -1.596104167e2, -9.889583333e1, -1.489583333e2, 4.670833333e2],
        [-4.889017857e-1, -1.201770833, 2.027728175, 3.938988095, -1.756448413e1],
        [-2.028452381e-3, 9.887896825e-3, -3.739087302e-2, -2.688492063e-2, 2.140873016e-1],
    ]),
    specific_heat: property_surface([
        [3.978615e3, -1.469375e3, -1.153333333e3, 3.0875e3, -8.316666667e3],
        [2.879815476, 2.203506944e1, 4.053075397, -4.053075397e1, 8.106150794e1],
        [-1.733142857e-1, -3.129761905e-1, 8.087896825, 1.273809524, -6.112301587e1],
    ]),
    conductivity: property_surface([
        [4.316115e-1, -4.887541667e-1, 3.013333333e-1, 3.541666667e-2, -7.483333333e-1],
        [7.418791667e-4, -2.693159722e-3, 3.978125e-3, 9.826388889e-4, -1.827083333e-2],
        [1.346666667e-6, 1.036111111e-5, -1.179166667e-4, 3.055555556e-5, 6.583333333e-4],
    ]),
};

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use crate::support::coolant::{ConcentrationError, Coolant, Mixture, PropertyError};

    /// (concentration, °C, viscosity, density, specific heat, conductivity)
    const REFERENCE: [(f64, f64, f64, f64, f64, f64); 9] = [
        (0.0, 5.0, 0.0015169, 1000.0, 4215.9, 0.57057),
        (0.0, 20.0, 0.001, 998.41, 4164.9, 0.59834),
        (0.0, 40.0, 0.00065422, 992.16, 4180.2, 0.62986),
        (0.2, 5.0, 0.0026531, 971.35, 4083.2, 0.46748),
        (0.2, 20.0, 0.0015979, 966.79, 4110.1, 0.48339),
        (0.2, 40.0, 0.00094179, 958.37, 4098.0, 0.50402),
        (0.4, 5.0, 0.0030165, 943.05, 3717.1, 0.37833),
        (0.4, 20.0, 0.0018385, 934.57, 3822.4, 0.38571),
        (0.4, 40.0, 0.0010684, 922.27, 3872.8, 0.39646),
    ];

    const FREEZE_POINTS: [(f64, f64); 6] = [
        (0.1, -6.54),
        (0.2, -15.08),
        (0.3, -25.685),
        (0.4, -38.703),
        (0.5, -54.466),
        (0.6, -73.006),
    ];

    #[test]
    fn matches_reference_properties() -> Result<(), PropertyError> {
        for (x, t, mu, rho, cp, k) in REFERENCE {
            let mixture = Mixture::methyl_alcohol(x).unwrap();
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
            let mixture = Mixture::methyl_alcohol(x)?;
            assert_abs_diff_eq!(mixture.freeze_point(x)?, expected, epsilon = 0.01);
        }
        Ok(())
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn out_of_range_temperatures_clamp() -> Result<(), PropertyError> {
        let mixture = Mixture::methyl_alcohol(0.4).unwrap();

        let cold = mixture.density(-50.0)?;
        assert_eq!(cold.value, mixture.density(mixture.t_min())?.value);
        assert!(cold.warning.is_some());

        let hot = mixture.density(150.0)?;
        assert_eq!(hot.value, mixture.density(mixture.t_max())?.value);
        assert!(hot.warning.is_some());

        Ok(())
    }
}
