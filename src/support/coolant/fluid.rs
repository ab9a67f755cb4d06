//! Concrete coolants.
//!
//! [`Water`] is a pure fluid. The four solutes combine with water into a
//! [`Mixture`] at a chosen mass fraction. Each solute module holds only
//! coefficient tables and bounds; evaluation is shared.
//!
//! Each mixture surface is quadratic in temperature, with every temperature
//! coefficient a quartic in mass fraction. The coefficients are pinned at
//! five concentrations:
//!
//! - at 0, 0.2 and 0.4 they reproduce reference data between 5 °C and 40 °C;
//! - at 0.5 and 0.6 they follow handbook values at 20 °C, with temperature
//!   terms set from the freeze point and the upper bound of each mixture.
//!
//! Freeze points match reference data from 0.1 to 0.6 to within 0.01 °C.

mod ethyl_alcohol;
mod ethylene_glycol;
mod methyl_alcohol;
mod mixture;
mod propylene_glycol;
mod water;

pub use mixture::{Mixture, Solute};
pub use water::Water;
