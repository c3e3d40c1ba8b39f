//! Defines the decision stump and its learner.
pub mod dstump;
pub mod dstump_classifier;

pub use dstump::DStump;
pub use dstump_classifier::DStumpClassifier;
