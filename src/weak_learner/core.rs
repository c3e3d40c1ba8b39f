//! Provides `WeakLearner` trait.
use crate::Sample;


/// An interface for weak learners.
/// Given a sample and a distribution over it,
/// a weak learner returns a hypothesis that performs
/// well with respect to the distribution.
pub trait WeakLearner {
    /// The hypothesis this weak learner returns.
    type Hypothesis;

    /// Returns the name of the weak learner.
    fn name(&self) -> &str;

    /// Returns the information of the weak learner as `String`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }

    /// Returns a hypothesis trained on `sample` weighted by `dist`.
    /// `dist` must be non-negative and have length `sample.shape().0`.
    fn produce(&self, sample: &Sample, dist: &[f64]) -> Self::Hypothesis;
}
