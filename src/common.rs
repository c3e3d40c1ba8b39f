//! Defines some common functions used in this library.

/// Defines some constants.
pub mod constants;

/// Defines some useful functions such as weighted agreement calculation.
pub mod utils;

/// Defines some checker functions.
pub(crate) mod checker;
