use crate::{Result, common::checker};


/// A batch of training examples.
/// Each example is a `k`-dimensional integer vector
/// with a binary label in `{0, 1}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sample {
    features: Vec<Vec<i64>>,
    target: Vec<u8>,
    n_feature: usize,
}


impl Sample {
    /// Construct a new sample from `rows` and `target`.
    ///
    /// Returns `Err` if `rows` is empty, the rows have different lengths,
    /// `target.len() != rows.len()`, or some label is not `0` or `1`.
    pub fn new(rows: Vec<Vec<i64>>, target: Vec<u8>) -> Result<Self> {
        let n_feature = checker::rows(&rows, "sample")?;
        checker::length("target", rows.len(), target.len())?;
        checker::binary_labels(&target)?;

        Ok(Self { features: rows, target, n_feature })
    }


    /// Returns the pair `(n_sample, n_feature)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.target.len(), self.n_feature)
    }


    /// Returns the `i`th example.
    #[inline]
    pub fn row(&self, i: usize) -> &[i64] {
        &self.features[i][..]
    }


    /// Returns the slice of target values.
    #[inline]
    pub fn target(&self) -> &[u8] {
        &self.target[..]
    }


    /// Returns an iterator over the pairs `(example, label)`.
    pub fn iter(&self) -> impl Iterator<Item = (&[i64], u8)> + '_ {
        self.features.iter()
            .map(|row| &row[..])
            .zip(self.target.iter().copied())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_01() {
        let sample = Sample::new(
            vec![vec![1, 2], vec![3, 4], vec![5, 6]],
            vec![0, 1, 1],
        ).unwrap();
        assert_eq!(sample.shape(), (3, 2));
        assert_eq!(sample.row(1), &[3, 4]);
        assert_eq!(sample.iter().count(), 3);
    }

    #[test]
    fn test_new_failure_01() {
        let result = Sample::new(vec![vec![1, 2], vec![3, 4]], vec![0]);
        assert!(result.is_err());
    }

    #[test]
    fn test_new_failure_02() {
        let result = Sample::new(vec![vec![1, 2], vec![3, 4]], vec![0, 3]);
        assert!(result.is_err());
    }
}
