//! Exports the boosting algorithm, the clustering, and traits.
//!
pub use crate::booster::{
    // Booster trait
    Booster,

    ClusterBoost,
};


pub use crate::weak_learner::{
    // Weak Learner trait
    WeakLearner,

    // Decision stump
    DStump,
    DStumpClassifier,
};


pub use crate::hypothesis::{
    Classifier,
    MajorityVote,
    ClusterBoostClassifier,
};


pub use crate::clustering::{
    Clustering,
    Location,
};


pub use crate::sample::{
    Sample,
    DataSet,
    DataSetReader,
};


pub use crate::research::{
    Logger,
    CurrentHypothesis,
    zero_one_loss,
    accuracy,
};


pub use crate::error::Error;
