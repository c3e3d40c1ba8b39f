//! Provides the decision stump class.
use serde::{Serialize, Deserialize};

use crate::{
    Classifier,
    Error,
    Result,
    Sample,
    WeakLearner,
    common::checker,
};
use super::DStump;


/// The struct `DStumpClassifier` defines the decision stump class.
/// Given a point `x` over the `k`-dimensional integer lattice,
/// a stump `(d, v, s)` predicts its label as
/// ```txt
/// s       if x[d] <= v,
/// 1 - s   otherwise.
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DStumpClassifier {
    pub(crate) dimension: usize,
    pub(crate) threshold: i64,
    pub(crate) sign: u8,
    pub(crate) n_feature: usize,
}


impl DStumpClassifier {
    /// Trains a stump on `input` weighted by `weights`,
    /// maximizing the weighted agreement with `labels`.
    /// See [`DStump`] for the algorithm.
    ///
    /// Returns `Err` if `input` is empty or not rectangular,
    /// `weights` or `labels` has a different length,
    /// some weight is negative,
    /// or some label is not `0` or `1`.
    pub fn fit(input: &[Vec<i64>], weights: &[f64], labels: &[u8])
        -> Result<Self>
    {
        checker::length("weights", input.len(), weights.len())?;
        checker::non_negative(weights)?;
        let sample = Sample::new(input.to_vec(), labels.to_vec())?;

        let weak_learner = DStump::init(&sample);
        Ok(weak_learner.produce(&sample, weights))
    }


    /// Returns the feature index `d` used in prediction.
    #[inline]
    pub fn dimension(&self) -> usize {
        self.dimension
    }


    /// Returns the threshold `v`.
    #[inline]
    pub fn threshold(&self) -> i64 {
        self.threshold
    }


    /// Returns the label `s` predicted for `x[d] <= v`.
    #[inline]
    pub fn sign(&self) -> u8 {
        self.sign
    }


    /// Returns the dimension of the examples this stump was trained on.
    #[inline]
    pub fn n_feature(&self) -> usize {
        self.n_feature
    }


    /// Predicts the label of `x`.
    /// Returns `Err` if `x` does not have the training dimension.
    pub fn try_predict(&self, x: &[i64]) -> Result<u8> {
        checker::length("example", self.n_feature, x.len())?;
        Ok(self.predict(x))
    }


    /// Checks that `sign` is `0` or `1`
    /// and `dimension` is smaller than `n_feature`.
    /// A stump read from a model file must pass this check
    /// before it is used.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.sign > 1 {
            return Err(Error::invalid(format!(
                "the sign of a stump must be 0 or 1. got {}", self.sign
            )));
        }
        checker::index(self.dimension, self.n_feature)
    }
}


impl Classifier for DStumpClassifier {
    fn confidence(&self, x: &[i64]) -> f64 {
        if self.predict(x) == 1 { 1.0 } else { -1.0 }
    }


    /// Predicts the label of `x`.
    /// This method panics if `x.len() <= self.dimension()`.
    /// Use [`DStumpClassifier::try_predict`] to get an `Err` instead.
    #[inline]
    fn predict(&self, x: &[i64]) -> u8 {
        if x[self.dimension] <= self.threshold {
            self.sign
        } else {
            1 - self.sign
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_predict_01() {
        let h = DStumpClassifier {
            dimension: 1, threshold: 3, sign: 1, n_feature: 2,
        };
        assert_eq!(h.predict(&[100, 3]), 1);
        assert_eq!(h.predict(&[-100, 4]), 0);
        assert_eq!(h.confidence(&[0, 0]), 1.0);
        assert!(h.try_predict(&[1, 2, 3]).is_err());
    }

    #[test]
    fn test_validate() {
        let h = DStumpClassifier {
            dimension: 1, threshold: 3, sign: 1, n_feature: 2,
        };
        assert!(h.validate().is_ok());
        assert!(DStumpClassifier { sign: 2, ..h }.validate().is_err());
        assert!(DStumpClassifier { dimension: 2, ..h }.validate().is_err());
    }
}
