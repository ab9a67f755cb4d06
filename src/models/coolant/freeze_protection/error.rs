use thiserror::Error;
use twine_solvers::equation::bisection;
use uom::si::f64::TemperatureInterval;

use crate::support::coolant::{ConcentrationError, Solute};

/// Why no protective concentration could be found.
#[derive(Debug, Error)]
pub enum FreezeProtectionError {
    #[error("invalid target freeze point: {target_c} °C")]
    InvalidTarget { target_c: f64 },

    /// The target is colder than the freeze point at the solute's highest
    /// fitted concentration.
    #[error(
        "{solute} cannot protect to {target_c} °C: freeze point at concentration \
         {max_concentration} is {limit_c} °C"
    )]
    Unreachable {
        solute: Solute,
        target_c: f64,
        limit_c: f64,
        max_concentration: f64,
    },

    #[error("freeze curve evaluation failed")]
    Concentration(#[from] ConcentrationError),

    #[error("bisection solver error")]
    Bisection(#[from] bisection::Error),

    /// The freeze point never came within tolerance of the target.
    #[error("freeze point still {residual:?} from target after {iters} iterations")]
    MaxIters {
        /// Freeze point minus target at the closest concentration tried.
        residual: TemperatureInterval,
        iters: usize,
    },
}
