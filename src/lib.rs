//! # Twine Coolants
//!
//! Thermophysical properties of liquid water and water-based secondary
//! coolants for [Twine](https://github.com/isentropic-dev/twine).
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations over coolant properties,
//!   and the freeze-protection solve.
//! - [`support`]: The property core: coolant descriptors, correlations and
//!   freeze curves, evaluated on plain `f64` temperatures in °C.
//!
//! ## Range policy
//!
//! Property correlations are only fitted over a temperature range. Requests
//! outside it are clamped to the nearest bound, evaluated there, and reported
//! through [`support::coolant::Evaluated::warning`] and a `tracing` warning.
//! Concentrations outside the fitted range are rejected when a mixture is built.
//!
//! Modules in [`support`] are part of the public API, but their APIs are not
//! stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
