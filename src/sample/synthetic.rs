//! Generates locations that form well-separated clusters,
//! and labeled data sets on them.
use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::{Error, Result, Location, DataSet};


/// The side length of the square `[0, SIDE)²` the centers are drawn from.
pub const SIDE: f64 = 1_000f64;

// Rejection sampling gives up after this many draws for a single center.
const MAX_TRIALS: usize = 100_000;


/// Returns `n_centers * per_center` locations.
/// The centers are drawn uniformly from `[0, SIDE)²`
/// so that every pair of centers is at least `min_separation` apart.
/// Then `per_center` points are drawn uniformly
/// from the unit disc around each center.
///
/// The `j`th point around the `i`th center
/// is the `i * per_center + j`th location.
///
/// Returns `Err` if the centers do not fit into the square.
pub fn clustered_locations<R: Rng>(
    n_centers: usize,
    per_center: usize,
    min_separation: f64,
    rng: &mut R,
) -> Result<Vec<Location>>
{
    let coord = Uniform::new(0f64, SIDE);
    let min_squared = min_separation * min_separation;

    let mut centers: Vec<Location> = Vec::with_capacity(n_centers);
    for i in 0..n_centers {
        let center = (0..MAX_TRIALS)
            .map(|_| Location::new(coord.sample(rng), coord.sample(rng)))
            .find(|p| {
                centers.iter()
                    .all(|c| p.distance_squared_to(c) >= min_squared)
            })
            .ok_or_else(|| Error::invalid(format!(
                "failed to place center {i} at distance \
                {min_separation} from the others"
            )))?;
        centers.push(center);
    }

    let offset = Uniform::new_inclusive(-1f64, 1f64);
    let mut locations = Vec::with_capacity(n_centers * per_center);
    for center in centers {
        for _ in 0..per_center {
            let point = loop {
                let dx = offset.sample(rng);
                let dy = offset.sample(rng);
                if dx * dx + dy * dy <= 1f64 {
                    break Location::new(center.x + dx, center.y + dy);
                }
            };
            locations.push(point);
        }
    }
    Ok(locations)
}


/// Returns a data set of `n_sample` examples on `locations`,
/// laid out as [`clustered_locations`] does.
///
/// The label of an example is drawn uniformly.
/// On the first `per_center` locations,
/// a positive example takes values in `[10, 20]`
/// and a negative one takes values in `[0, 5]`.
/// The other locations take values in `[0, 20]` regardless of the label.
pub fn labeled_dataset<R: Rng>(
    locations: Vec<Location>,
    per_center: usize,
    n_sample: usize,
    rng: &mut R,
) -> Result<DataSet>
{
    let m = locations.len();
    let high = Uniform::new_inclusive(10_i64, 20);
    let low = Uniform::new_inclusive(0_i64, 5);
    let noise = Uniform::new_inclusive(0_i64, 20);

    let mut input = Vec::with_capacity(n_sample);
    let mut labels = Vec::with_capacity(n_sample);
    for _ in 0..n_sample {
        let label = u8::from(rng.gen_bool(0.5));
        let row = (0..m).map(|j| {
                if j >= per_center {
                    noise.sample(rng)
                } else if label == 1 {
                    high.sample(rng)
                } else {
                    low.sample(rng)
                }
            })
            .collect::<Vec<_>>();
        input.push(row);
        labels.push(label);
    }
    DataSet::new(input, labels, locations)
}
