//! Problem formulation for the freeze-protection solve.

use std::convert::Infallible;

use twine_core::{EquationProblem, Model};
use uom::si::{
    f64::{Ratio, ThermodynamicTemperature},
    ratio::ratio,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::coolant::{ConcentrationError, Solute};

/// A concentration paired with the temperature it freezes at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct FreezeState {
    pub(super) concentration: Ratio,
    pub(super) freeze_point: ThermodynamicTemperature,
}

/// Model adapter exposing a solute's freeze curve.
pub(super) struct FreezeCurveModel {
    solute: Solute,
}

impl FreezeCurveModel {
    pub(super) fn new(solute: Solute) -> Self {
        Self { solute }
    }
}

impl Model for FreezeCurveModel {
    type Input = Ratio;
    type Output = FreezeState;
    type Error = ConcentrationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        let freeze_c = self.solute.freeze_point(input.get::<ratio>())?;
        Ok(FreezeState {
            concentration: *input,
            freeze_point: ThermodynamicTemperature::new::<degree_celsius>(freeze_c),
        })
    }
}

/// Equation problem definition for freeze protection.
///
/// Computes the residual as `freeze_point - target` in kelvin.
pub(super) struct FreezeProtectionProblem {
    target_c: f64,
}

impl FreezeProtectionProblem {
    pub(super) fn new(target_c: f64) -> Self {
        Self { target_c }
    }
}

impl EquationProblem<1> for FreezeProtectionProblem {
    type Input = Ratio;
    type Output = FreezeState;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Self::Input, Self::Error> {
        Ok(Ratio::new::<ratio>(x[0]))
    }

    fn residuals(
        &self,
        _input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; 1], Self::Error> {
        Ok([output.freeze_point.get::<degree_celsius>() - self.target_c])
    }
}
