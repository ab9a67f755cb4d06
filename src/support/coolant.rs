//! Thermophysical properties of secondary coolants.
//!
//! A coolant is either pure [`Water`] or a [`Mixture`] of water and a
//! [`Solute`] at a fixed mass fraction. Both implement [`Coolant`], which
//! evaluates viscosity, density, specific heat, and thermal conductivity from
//! compiled-in correlations.
//!
//! # Range policy
//!
//! Each coolant has a valid temperature range. Temperatures outside it are
//! clamped to the nearest bound, and the returned [`Evaluated`] value carries
//! a [`RangeWarning`]. The same warning is also emitted as a `tracing` event.
//!
//! # Example
//!
//! ```
//! use twine_coolants::support::coolant::{Coolant, Mixture, Water};
//!
//! let ea = Mixture::ethyl_alcohol(0.2).unwrap();
//! let k = ea.conductivity(40.0).unwrap().value;
//! assert!((k - 0.4844).abs() / 0.4844 < 1e-3);
//!
//! let mu = Water.viscosity(25.0).unwrap().value;
//! assert!((mu - 8.9e-4).abs() / 8.9e-4 < 0.01);
//! ```

mod capability;
mod error;
mod fluid;
mod freeze;
mod range;

pub mod correlation;

pub use capability::{Coolant, Properties, Property};
pub use correlation::Correlation;
pub use error::{ConcentrationError, PropertyError};
pub use fluid::{Mixture, Solute, Water};
pub use freeze::FreezeCurve;
pub use range::{Bound, Evaluated, RangeWarning, TemperatureRange};
