//! Shared helpers.

pub mod decimal_serde;
