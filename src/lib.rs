#![warn(missing_docs)]

//!
//! A crate that provides a boosting algorithm
//! over spatially clustered features.
//!
//! Each training example is a vector of integer measurements
//! taken on `m` locations on the plane.
//! The crate works in two stages.
//!
//! - Clustering
//!     The locations are grouped into `k` clusters
//!     by cutting the `k - 1` heaviest edges
//!     of the Euclidean minimum spanning tree.
//!     Each example is reduced to the `k` sums of its values per cluster.
//!     See [`Clustering`].
//!
//! - Boosting
//!     [`ClusterBoost`] trains a decision stump ([`DStump`])
//!     on the reduced examples in each round,
//!     doubles the weights on the misclassified examples,
//!     and predicts by the unweighted majority vote of the stumps.
//!
//! ```
//! use clusterboost::prelude::*;
//!
//! let locations = vec![
//!     Location::new(0.0, 0.0),
//!     Location::new(0.0, 1.0),
//!     Location::new(50.0, 50.0),
//! ];
//! let input = vec![vec![5, 4, 0], vec![0, 1, 3], vec![6, 6, 1]];
//! let labels = vec![1, 0, 1];
//!
//! let mut booster = ClusterBoost::init(&input, &labels, &locations, 2)
//!     .unwrap()
//!     .force_quit_at(5);
//! let weak_learner = booster.weak_learner().clone();
//! let f = booster.run(&weak_learner);
//!
//! assert_eq!(f.predict(&[7, 7, 0]).unwrap(), 1);
//! ```

pub mod error;
pub mod common;
pub mod clustering;
pub mod sample;
pub mod hypothesis;
pub mod weak_learner;
pub mod booster;
pub mod research;

pub mod prelude;


pub use error::{Error, Result};

pub use clustering::{Clustering, Location};

pub use sample::{Sample, DataSet, DataSetReader};

pub use hypothesis::{
    Classifier,
    MajorityVote,
    ClusterBoostClassifier,
};

pub use weak_learner::{
    WeakLearner,
    DStump,
    DStumpClassifier,
};

pub use booster::{
    Booster,
    ClusterBoost,
};
