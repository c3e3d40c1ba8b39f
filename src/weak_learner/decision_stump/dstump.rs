//! Provides the decision stump learner.
use rayon::prelude::*;

use crate::{Sample, WeakLearner};
use super::DStumpClassifier;


// The examples sharing the value `v` on some feature,
// in ascending order of index.
type IndicesByValue = (i64, Vec<usize>);
// The groups of a feature, in ascending order of value.
type FeatureIndex = Vec<IndicesByValue>;


/// The struct `DStump` generates a [`DStumpClassifier`]
/// for each call of [`WeakLearner::produce`].
///
/// `DStump` finds the stump `(d, v, s)` that maximizes
/// the weighted agreement
/// ```txt
/// sum( dist[i] * [ h(x[i]) == y[i] ] ),
/// ```
/// i.e., [`weighted_agreement`](crate::common::utils::weighted_agreement)
/// of the stump.
/// For each feature `d` and sign `s`,
/// the threshold starts just below the minimal value,
/// where every example is predicted as `1 - s`,
/// and sweeps upward through the distinct values.
/// Passing a value moves the examples having it to the `s` side,
/// so the agreement is updated in `O(1)` per example.
/// The sorted groups are computed once in [`DStump::init`],
/// so that each call of `produce` takes `O(k n)` time.
///
/// Ties are broken toward the first stump found.
/// Features are scanned in ascending order of `d`.
/// Within a feature, the sweep for `s = 0` precedes the one for `s = 1`,
/// and each sweep visits the thresholds in ascending order.
#[derive(Debug, Clone)]
pub struct DStump {
    indices: Vec<FeatureIndex>,
    n_sample: usize,
}


impl DStump {
    /// Initializes and produce an instance of `DStump`.
    ///
    /// Time complexity: `O(k n log n)`.
    pub fn init(sample: &Sample) -> Self {
        let (n_sample, n_feature) = sample.shape();

        // indices: Vec<FeatureIndex>
        // the j'th element of this vector stores
        // the grouped indices by value.
        let indices = (0..n_feature).into_par_iter()
            .map(|j| {
                let mut vals = (0..n_sample)
                    .map(|i| (sample.row(i)[j], i))
                    .collect::<Vec<(i64, usize)>>();
                vals.sort_unstable();

                let mut index: FeatureIndex = Vec::new();
                for (v, i) in vals {
                    if let Some((last, group)) = index.last_mut() {
                        if *last == v {
                            group.push(i);
                            continue;
                        }
                    }
                    index.push((v, vec![i]));
                }
                index
            })
            .collect::<Vec<_>>();

        Self { indices, n_sample }
    }


    /// Returns the best stump on the `j`th feature with its agreement.
    fn best_on_feature(
        &self,
        sample: &Sample,
        dist: &[f64],
        j: usize,
    ) -> (f64, DStumpClassifier)
    {
        let index = &self.indices[j];
        let target = sample.target();
        let n_feature = sample.shape().1;

        let mut best_agreement = f64::NEG_INFINITY;
        let mut best = DStumpClassifier {
            dimension: j,
            threshold: index[0].0,
            sign: 0,
            n_feature,
        };

        for sign in [0_u8, 1] {
            let mut update = |agreement: f64, threshold: i64| {
                if agreement > best_agreement {
                    best_agreement = agreement;
                    best.threshold = threshold;
                    best.sign = sign;
                }
            };

            // Every example is predicted as `1 - sign`.
            let mut agreement = target.iter()
                .zip(dist)
                .map(|(&y, &d)| if y != sign { d } else { 0f64 })
                .sum::<f64>();

            if let Some(threshold) = index[0].0.checked_sub(1) {
                update(agreement, threshold);
            }

            for (threshold, group) in index {
                for &i in group {
                    if target[i] == sign {
                        agreement += dist[i];
                    } else {
                        agreement -= dist[i];
                    }
                }
                update(agreement, *threshold);
            }
        }

        (best_agreement, best)
    }
}


impl WeakLearner for DStump {
    type Hypothesis = DStumpClassifier;


    fn name(&self) -> &str {
        "Decision Stump"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let n_values = self.indices.iter()
            .map(|index| index.len())
            .sum::<usize>();
        let info = Vec::from([
            ("# of features", format!("{}", self.indices.len())),
            ("# of examples", format!("{}", self.n_sample)),
            ("# of thresholds", format!("{n_values}")),
        ]);
        Some(info)
    }


    fn produce(&self, sample: &Sample, dist: &[f64]) -> Self::Hypothesis {
        assert_eq!(
            (self.n_sample, self.indices.len()), sample.shape(),
            "the sample differs from the one `DStump` was initialized with"
        );
        assert_eq!(dist.len(), self.n_sample);

        // Features are independent of each other.
        // The results are merged in ascending order of feature,
        // keeping the first maximizer.
        let candidates = (0..self.indices.len()).into_par_iter()
            .map(|j| self.best_on_feature(sample, dist, j))
            .collect::<Vec<_>>();

        let mut best_agreement = f64::NEG_INFINITY;
        let mut best = candidates[0].1;
        for (agreement, h) in candidates {
            if agreement > best_agreement {
                best_agreement = agreement;
                best = h;
            }
        }
        best
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_groups_by_value() {
        let sample = Sample::new(
            vec![vec![3, 0], vec![1, 0], vec![3, 0]],
            vec![0, 1, 0],
        ).unwrap();
        let dstump = DStump::init(&sample);
        assert_eq!(dstump.indices[0], vec![(1, vec![1]), (3, vec![0, 2])]);
        assert_eq!(dstump.indices[1], vec![(0, vec![0, 1, 2])]);
    }

    #[test]
    fn test_constant_feature() {
        // Only the "below minimum" thresholds and the maximal one exist.
        let sample = Sample::new(vec![vec![5], vec![5]], vec![1, 1]).unwrap();
        let dstump = DStump::init(&sample);
        let h = dstump.produce(&sample, &[0.5, 0.5]);
        assert_eq!((h.dimension(), h.threshold(), h.sign()), (0, 4, 0));
    }
}
