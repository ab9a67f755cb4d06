//! Supporting utilities used by models.

pub mod constraint;
pub mod coolant;
