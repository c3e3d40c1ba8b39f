//! This directory provides some features for research
//! Measure the followings of boosting algorithm per iteration
//! - Running time
//! - Training loss
//! - Test loss

/// Defines a struct for logging.
pub mod logger;

/// Defines loss functions on data sets.
pub mod loss_functions;

pub use logger::{
    Logger,
    CurrentHypothesis,
};

pub use loss_functions::{
    zero_one_loss,
    accuracy,
};
