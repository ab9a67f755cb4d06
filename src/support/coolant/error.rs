use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::{Property, Solute};

/// Errors that may occur when evaluating a coolant property.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PropertyError {
    /// The requested temperature is not a number.
    #[error("invalid temperature: {temp_c} °C")]
    InvalidTemperature { temp_c: f64 },

    /// The correlation produced a non-finite or non-positive value.
    ///
    /// Coefficient tables are compiled-in constants, so this points at a
    /// defect in the tables rather than at the caller's input.
    #[error("degenerate {property} at {temp_c} °C: {value}")]
    Degenerate {
        property: Property,
        temp_c: f64,
        value: f64,
    },
}

/// Errors raised for a concentration that has no fitted behavior.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConcentrationError {
    /// The value is not a fraction in `[0, 1]`.
    #[error("concentration {concentration} is not a fraction in [0, 1]")]
    NotAFraction {
        concentration: f64,
        #[source]
        source: ConstraintError,
    },

    /// The value is a fraction, but outside the interval the solute was fitted over.
    #[error("{solute} concentration {concentration} is outside the fitted range [{min}, {max}]")]
    OutsideFittedRange {
        solute: Solute,
        concentration: f64,
        min: f64,
        max: f64,
    },
}
