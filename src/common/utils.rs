//! This file provides some common functions
//! such as the weighted agreement calculation.
use rayon::prelude::*;
use fixedbitset::FixedBitSet;

use crate::{Sample, Classifier};


/// Returns the weighted agreement of a single hypothesis
/// for the given distribution, i.e.,
/// ```txt
/// sum( dist[i] * [ h(x[i]) == y[i] ] )
/// ```
///
/// Time complexity: `O(n)`, where `n` is the number of training examples.
#[inline(always)]
pub fn weighted_agreement<H>(
    sample: &Sample,
    dist: &[f64],
    h: &H,
) -> f64
    where H: Classifier,
{
    sample.target()
        .iter()
        .zip(dist)
        .enumerate()
        .filter(|(i, (y, _))| h.predict(sample.row(*i)) == **y)
        .map(|(_, (_, d))| *d)
        .sum::<f64>()
}


/// Returns the set of examples that `h` misclassifies.
#[inline(always)]
pub fn mistakes<H>(sample: &Sample, h: &H) -> FixedBitSet
    where H: Classifier,
{
    let n_sample = sample.shape().0;
    let mut bits = FixedBitSet::with_capacity(n_sample);
    h.predict_all(sample)
        .into_iter()
        .zip(sample.target())
        .enumerate()
        .filter(|(_, (p, y))| *p != **y)
        .for_each(|(i, _)| bits.insert(i));
    bits
}


/// Normalizes the given slice.
#[inline(always)]
pub fn normalize(items: &mut [f64]) {
    let z = items.iter()
        .map(|it| it.abs())
        .sum::<f64>();

    assert_ne!(z, 0.0, "{items:?}");

    items.par_iter_mut()
        .for_each(|item| { *item /= z; });
}
