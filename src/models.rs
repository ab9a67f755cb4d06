//! Public Twine models.
//!
//! Models are thin [`twine_core::Model`] adapters over the coolant property
//! core in [`crate::support::coolant`]. They trade raw Celsius floats for
//! [`uom`] quantities so coolants can be composed with other Twine models.

pub mod coolant;
