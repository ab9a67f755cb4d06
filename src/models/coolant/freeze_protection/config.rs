use twine_solvers::equation::bisection;
use uom::si::{
    f64::{Ratio, TemperatureInterval},
    ratio::ratio,
    temperature_interval::kelvin as delta_kelvin,
};

/// Settings for the freeze-protection solve.
///
/// The search runs over solute mass fraction. It stops once the concentration
/// bracket is narrower than `concentration_tol`, or once the freeze point at
/// the current concentration is within `temp_tol` of the target.
#[derive(Debug, Clone, Copy)]
pub struct FreezeProtectionConfig {
    /// Iteration cap.
    pub max_iters: usize,

    /// Width of the concentration bracket at which the search stops.
    pub concentration_tol: Ratio,

    /// Largest accepted gap between the achieved freeze point and the target.
    pub temp_tol: TemperatureInterval,
}

impl Default for FreezeProtectionConfig {
    fn default() -> Self {
        Self {
            max_iters: 100,
            concentration_tol: Ratio::new::<ratio>(1e-12),
            temp_tol: TemperatureInterval::new::<delta_kelvin>(1e-9),
        }
    }
}

impl FreezeProtectionConfig {
    /// Maps onto the bisection settings, in mass fraction and kelvin.
    pub(super) fn bisection(&self) -> bisection::Config {
        bisection::Config {
            max_iters: self.max_iters,
            x_abs_tol: self.concentration_tol.get::<ratio>(),
            x_rel_tol: 0.0,
            residual_tol: self.temp_tol.get::<delta_kelvin>(),
        }
    }
}
