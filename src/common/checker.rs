//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::{Error, Result};
use crate::clustering::Location;
use crate::common::constants::SIMPLEX_TOLERANCE;


/// Check whether the rows are non-empty and every row has the same width.
/// Returns the width of the rows.
#[inline(always)]
pub(crate) fn rows<T>(rows: &[Vec<T>], what: &str) -> Result<usize> {
    if rows.is_empty() {
        return Err(Error::invalid(format!("{what} has no rows")));
    }

    let width = rows[0].len();
    if width == 0 {
        return Err(Error::invalid(format!("{what} has no columns")));
    }

    if let Some(i) = rows.iter().position(|row| row.len() != width) {
        return Err(Error::invalid(format!(
            "every row of {what} must have length {width}. \
            row {i} has length {}", rows[i].len()
        )));
    }
    Ok(width)
}


/// Check whether the given slice has the expected length.
#[inline(always)]
pub(crate) fn length(what: &str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(Error::invalid(format!(
            "{what} must have length {expected}. got {got}"
        )));
    }
    Ok(())
}


/// Check whether the labels take values in `{0, 1}`.
#[inline(always)]
pub(crate) fn binary_labels(labels: &[u8]) -> Result<()> {
    match labels.iter().position(|&y| y > 1) {
        Some(i) => Err(Error::invalid(format!(
            "labels must be 0 or 1. got {} at {i}", labels[i]
        ))),
        None => Ok(()),
    }
}


/// Check whether the weights are non-negative.
/// `NaN` is rejected as well.
#[inline(always)]
pub(crate) fn non_negative(weights: &[f64]) -> Result<()> {
    match weights.iter().position(|w| !(*w >= 0f64)) {
        Some(i) => Err(Error::invalid(format!(
            "weights must be non-negative. got {} at {i}", weights[i]
        ))),
        None => Ok(()),
    }
}


/// Check whether the number of clusters `k` satisfies `1 <= k <= m`.
#[inline(always)]
pub(crate) fn cluster_count(k: usize, m: usize) -> Result<()> {
    if !(1..=m).contains(&k) {
        return Err(Error::invalid(format!(
            "k must be in [1, {m}]. got k = {k}"
        )));
    }
    Ok(())
}


/// Check whether `i` is a valid index for a collection of length `len`.
#[inline(always)]
pub(crate) fn index(i: usize, len: usize) -> Result<()> {
    if i >= len {
        return Err(Error::invalid(format!(
            "index {i} is out of range [0, {len})"
        )));
    }
    Ok(())
}


/// Check whether every location is present, i.e., has finite coordinates.
#[inline(always)]
pub(crate) fn locations(locations: &[Location]) -> Result<()> {
    if locations.is_empty() {
        return Err(Error::invalid("no locations are given"));
    }
    match locations.iter().position(|p| !p.is_finite()) {
        Some(i) => Err(Error::invalid(format!(
            "location {i} is missing. got {:?}", locations[i]
        ))),
        None => Ok(()),
    }
}


/// Check whether `dist` is a probability distribution.
/// This is an internal invariant of the booster, not a user input.
#[inline(always)]
pub(crate) fn simplex_condition(dist: &[f64]) {
    let sum = dist.iter().sum::<f64>();
    debug_assert!(
        (sum - 1f64).abs() < SIMPLEX_TOLERANCE,
        "sum(dist[..]) = {sum}"
    );
    debug_assert!(
        dist.iter().all(|d| *d >= 0f64),
        "dist has a negative entry. dist = {dist:?}"
    );
}
