//! The core library for `Hypothesis` traits.

pub(crate) mod hypothesis_traits;
pub(crate) mod majority_vote;
pub(crate) mod clustered;


pub use hypothesis_traits::Classifier;

pub use majority_vote::MajorityVote;
pub use clustered::ClusterBoostClassifier;
