//! Defines `ClusterBoost`.
//! A boosting algorithm over decision stumps
//! on spatially clustered features.
pub mod cluster_boost_algorithm;

pub use cluster_boost_algorithm::ClusterBoost;
