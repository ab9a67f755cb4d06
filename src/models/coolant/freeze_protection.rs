//! Inverse freeze-point solve.
//!
//! Finds the smallest concentration of a solute that protects a mixture down
//! to a target temperature, by bisecting the solute's freeze curve.

mod config;
mod error;
mod problem;

pub use config::FreezeProtectionConfig;
pub use error::FreezeProtectionError;

use std::cmp::Ordering;

use tracing::debug;
use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Ratio, TemperatureInterval, ThermodynamicTemperature},
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::coolant::Solute;

use problem::{FreezeCurveModel, FreezeProtectionProblem};

/// Returns the concentration of `solute` whose mixture freezes at `target`.
///
/// Targets at or above 0 °C need no protection and return zero.
///
/// # Errors
///
/// Returns [`FreezeProtectionError::Unreachable`] if the target lies below the
/// freeze point at the solute's highest fitted concentration, and
/// [`FreezeProtectionError::MaxIters`] if bisection does not converge.
///
/// # Example
///
/// ```
/// use twine_coolants::{
///     models::coolant::freeze_protection::{FreezeProtectionConfig, required_concentration},
///     support::coolant::Solute,
/// };
/// use uom::si::{f64::ThermodynamicTemperature, ratio::ratio, thermodynamic_temperature::degree_celsius};
///
/// let target = ThermodynamicTemperature::new::<degree_celsius>(-15.0);
/// let x = required_concentration(Solute::PropyleneGlycol, target, FreezeProtectionConfig::default())
///     .unwrap()
///     .get::<ratio>();
///
/// let achieved = Solute::PropyleneGlycol.freeze_point(x).unwrap();
/// assert!((achieved + 15.0).abs() < 1e-6);
/// ```
pub fn required_concentration(
    solute: Solute,
    target: ThermodynamicTemperature,
    config: FreezeProtectionConfig,
) -> Result<Ratio, FreezeProtectionError> {
    let target_c = target.get::<degree_celsius>();
    if target_c.is_nan() {
        return Err(FreezeProtectionError::InvalidTarget { target_c });
    }
    if target_c >= 0.0 {
        return Ok(Ratio::new::<ratio>(0.0));
    }

    let max_concentration = solute.max_concentration();
    let limit_c = solute.freeze_point(max_concentration)?;
    match target_c.partial_cmp(&limit_c) {
        Some(Ordering::Less) | None => {
            return Err(FreezeProtectionError::Unreachable {
                solute,
                target_c,
                limit_c,
                max_concentration,
            });
        }
        Some(Ordering::Equal) => return Ok(Ratio::new::<ratio>(max_concentration)),
        Some(Ordering::Greater) => {}
    }

    let model = FreezeCurveModel::new(solute);
    let problem = FreezeProtectionProblem::new(target_c);

    let solution = bisection::solve(
        &model,
        &problem,
        [0.0, max_concentration],
        &config.bisection(),
        |event: &bisection::Event<'_, _, _>| {
            // Only concentrations past the fitted maximum fail, and the curve
            // is colder than the target there.
            if event.result().is_err() {
                return Some(bisection::Action::assume_negative());
            }
            None
        },
    )?;

    if solution.status != bisection::Status::Converged {
        return Err(FreezeProtectionError::MaxIters {
            residual: TemperatureInterval::new::<delta_kelvin>(solution.residual),
            iters: solution.iters,
        });
    }

    let concentration = solution.snapshot.output.concentration;
    debug!(
        %solute,
        target_c,
        concentration = concentration.get::<ratio>(),
        iters = solution.iters,
        "freeze-protection solve converged"
    );
    Ok(concentration)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_abs_diff_eq;

    fn celsius(value: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(value)
    }

    #[test]
    fn roundtrip() -> Result<(), FreezeProtectionError> {
        for solute in Solute::ALL {
            for target_c in [-2.0, -10.0, -25.0] {
                let x = required_concentration(
                    solute,
                    celsius(target_c),
                    FreezeProtectionConfig::default(),
                )?
                .get::<ratio>();

                assert!(x > 0.0 && x < solute.max_concentration());
                assert_abs_diff_eq!(solute.freeze_point(x)?, target_c, epsilon = 1e-6);
            }
        }
        Ok(())
    }

    #[test]
    fn ethylene_glycol_forty_percent() -> Result<(), FreezeProtectionError> {
        let x = required_concentration(
            Solute::EthyleneGlycol,
            celsius(-23.813),
            FreezeProtectionConfig::default(),
        )?;
        assert_abs_diff_eq!(x.get::<ratio>(), 0.4, epsilon = 1e-3);
        Ok(())
    }

    #[test]
    fn warm_targets_need_no_solute() -> Result<(), FreezeProtectionError> {
        for target_c in [0.0, 5.0, 40.0] {
            let x = required_concentration(
                Solute::MethylAlcohol,
                celsius(target_c),
                FreezeProtectionConfig::default(),
            )?;
            assert_abs_diff_eq!(x.get::<ratio>(), 0.0);
        }
        Ok(())
    }

    #[test]
    fn unreachable_target() {
        let result = required_concentration(
            Solute::EthylAlcohol,
            celsius(-90.0),
            FreezeProtectionConfig::default(),
        );
        match result {
            Err(FreezeProtectionError::Unreachable {
                solute,
                limit_c,
                max_concentration,
                ..
            }) => {
                assert_eq!(solute, Solute::EthylAlcohol);
                assert!(limit_c > -90.0);
                assert_abs_diff_eq!(max_concentration, 0.6);
            }
            other => panic!("expected Unreachable, got {other:?}"),
        }
    }

    #[test]
    fn iteration_limit_is_reported() {
        let config = FreezeProtectionConfig {
            max_iters: 2,
            ..FreezeProtectionConfig::default()
        };
        let err = required_concentration(Solute::PropyleneGlycol, celsius(-12.345), config)
            .unwrap_err();
        assert!(matches!(err, FreezeProtectionError::MaxIters { .. }));
        assert!(err.to_string().contains("from target after"));
    }
}
