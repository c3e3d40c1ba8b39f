use crate::Sample;


/// A trait that defines the behavor of classifier.
/// You only need to implement `confidence` method.
///
/// The methods of this trait assume that `x` has the dimension
/// of the training examples, and may panic otherwise.
pub trait Classifier {
    /// Computes the confidence of the example `x`.
    /// A positive value votes for label `1`,
    /// a non-positive value votes for label `0`.
    fn confidence(&self, x: &[i64]) -> f64;


    /// Predicts the label of the example `x`.
    /// Returns `1` if the confidence is strictly positive, `0` otherwise.
    fn predict(&self, x: &[i64]) -> u8 {
        let conf = self.confidence(x);
        if conf > 0.0 { 1 } else { 0 }
    }


    /// Predicts the labels of `sample`.
    fn predict_all(&self, sample: &Sample) -> Vec<u8> {
        sample.iter()
            .map(|(x, _)| self.predict(x))
            .collect::<Vec<_>>()
    }
}
