//! Numeric invariants checked once at construction.
//!
//! Coolant descriptors validate their inputs and outputs through the
//! [`Constraint`] trait:
//!
//! - [`UnitInterval`]: closed unit interval `0 ≤ x ≤ 1`, used for mass fractions
//! - [`StrictlyPositive`]: greater than zero, used for evaluated properties
//!
//! Each marker pairs with the generic [`Constrained<T, C>`] wrapper, so a
//! `Constrained<f64, UnitInterval>` can only hold a valid fraction.

use std::{cmp::Ordering, marker::PhantomData};

use num_traits::{One, Zero};
use thiserror::Error;

/// A check that a value satisfies some numeric invariant.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] describing the violation.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A value that is known to satisfy constraint `C`.
///
/// # Example
///
/// ```
/// use twine_coolants::support::constraint::{Constrained, UnitInterval};
///
/// let x = Constrained::<f64, UnitInterval>::new(0.3).unwrap();
/// assert_eq!(x.into_inner(), 0.3);
/// assert!(Constrained::<f64, UnitInterval>::new(1.2).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Wraps `value` after checking it against `C`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}

/// Marker for the closed unit interval `0 ≤ x ≤ 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitInterval;

impl UnitInterval {
    /// Constructs `Constrained<T, UnitInterval>` if `0 ≤ value ≤ 1`.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than one.
    /// - [`ConstraintError::NotANumber`] if the comparison is undefined.
    pub fn new<T>(value: T) -> Result<Constrained<T, UnitInterval>, ConstraintError>
    where
        T: PartialOrd + Zero + One,
    {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero + One> Constraint<T> for UnitInterval {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}

/// Marker for values strictly greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs `Constrained<T, StrictlyPositive>` if `value > 0`.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or `NaN`.
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[allow(clippy::float_cmp)]
    fn unit_interval_accepts_endpoints() {
        assert_eq!(UnitInterval::new(0.0).unwrap().into_inner(), 0.0);
        assert_eq!(UnitInterval::new(1.0).unwrap().into_inner(), 1.0);
        assert_eq!(*UnitInterval::new(0.45).unwrap().as_ref(), 0.45);
    }

    #[test]
    fn unit_interval_rejects_outside() {
        assert_eq!(
            UnitInterval::new(-1e-15).unwrap_err(),
            ConstraintError::BelowMinimum
        );
        assert_eq!(
            UnitInterval::new(1.0 + 1e-15).unwrap_err(),
            ConstraintError::AboveMaximum
        );
        assert_eq!(
            UnitInterval::new(f64::INFINITY).unwrap_err(),
            ConstraintError::AboveMaximum
        );
        assert_eq!(
            UnitInterval::new(f64::NAN).unwrap_err(),
            ConstraintError::NotANumber
        );
    }

    #[test]
    fn strictly_positive() {
        assert!(StrictlyPositive::new(1e-300).is_ok());
        assert!(StrictlyPositive::new(f64::INFINITY).is_ok());
        assert_eq!(StrictlyPositive::new(0.0).unwrap_err(), ConstraintError::Zero);
        assert_eq!(
            StrictlyPositive::new(-2.0).unwrap_err(),
            ConstraintError::Negative
        );
        assert_eq!(
            StrictlyPositive::new(f64::NAN).unwrap_err(),
            ConstraintError::NotANumber
        );
    }
}
