//! Provides the MST-based clustering of locations.
use serde::{Serialize, Deserialize};

use crate::{Error, Result, common::checker};
use super::{Location, mst};


/// The struct `Clustering` partitions `m` locations into `k` clusters.
///
/// # Algorithm
/// 1. Build the complete graph on the locations,
///    weighted by the Euclidean distance.
/// 2. Compute a minimum spanning tree by Kruskal's algorithm.
/// 3. Drop the `k - 1` heaviest tree edges.
/// 4. The connected components of the remaining forest are the clusters.
///
/// Since every tree edge is a bridge,
/// step 3 always yields exactly `k` clusters.
///
/// # Example
/// ```
/// use clusterboost::{Clustering, Location};
///
/// let locations = vec![
///     Location::new(0.0, 0.0),
///     Location::new(0.5, 0.0),
///     Location::new(100.0, 100.0),
/// ];
/// let clustering = Clustering::new(&locations, 2).unwrap();
///
/// assert_eq!(clustering.cluster_of(0).unwrap(), clustering.cluster_of(1).unwrap());
/// assert_eq!(clustering.reduce_dimensions(&[1, 2, 3]).unwrap(), vec![3, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clustering {
    // `ids[i]` is the cluster of the `i`th location.
    ids: Vec<usize>,

    // Number of clusters.
    k: usize,
}


impl Clustering {
    /// Run the clustering on `locations` with `k` clusters.
    ///
    /// Returns `Err` if `locations` is empty,
    /// some location has a non-finite coordinate,
    /// or `k` is not in `[1, locations.len()]`.
    ///
    /// Time complexity: `O(m² log m)`.
    pub fn new(locations: &[Location], k: usize) -> Result<Self> {
        checker::locations(locations)?;
        let m = locations.len();
        checker::cluster_count(k, m)?;

        let edges = mst::complete_graph(locations);
        let tree = mst::minimum_spanning_tree(m, edges);
        debug_assert_eq!(tree.len(), m - 1);

        // `tree` is sorted in ascending order of weight,
        // so the first `m - k` edges are the lightest ones.
        let (ids, n_components) = mst::connected_components(
            m, &tree[..m - k]
        );
        debug_assert_eq!(n_components, k);

        Ok(Self { ids, k })
    }


    /// Returns the cluster of the `i`th location.
    #[inline]
    pub fn cluster_of(&self, i: usize) -> Result<usize> {
        checker::index(i, self.ids.len())?;
        Ok(self.ids[i])
    }


    /// Sums the values of `input` per cluster.
    /// The `c`th entry of the output is the sum of `input[i]`
    /// over the locations `i` in cluster `c`.
    ///
    /// Returns `Err` if `input.len() != m`
    /// or some cluster sum overflows `i64`.
    pub fn reduce_dimensions(&self, input: &[i64]) -> Result<Vec<i64>> {
        checker::length("input", self.ids.len(), input.len())?;

        let mut reduced = vec![0_i64; self.k];
        for (&c, &x) in self.ids.iter().zip(input) {
            reduced[c] = reduced[c].checked_add(x)
                .ok_or_else(|| Error::invalid(format!(
                    "the sum of cluster {c} overflows i64"
                )))?;
        }
        Ok(reduced)
    }


    /// Checks the invariants that [`Clustering::new`] establishes:
    /// at least one location, `1 <= k`,
    /// and every cluster id in `[0, k)` owns some location.
    /// A clustering read from a model file must pass this check
    /// before it is used.
    pub(crate) fn validate(&self) -> Result<()> {
        if self.ids.is_empty() {
            return Err(Error::invalid("the clustering has no locations"));
        }
        checker::cluster_count(self.k, self.ids.len())?;

        let mut owned = vec![false; self.k];
        for (i, &c) in self.ids.iter().enumerate() {
            if c >= self.k {
                return Err(Error::invalid(format!(
                    "location {i} has cluster id {c}, but k = {}", self.k
                )));
            }
            owned[c] = true;
        }
        match owned.iter().position(|o| !o) {
            Some(c) => Err(Error::invalid(format!("cluster {c} is empty"))),
            None => Ok(()),
        }
    }


    /// Returns the number of clusters `k`.
    #[inline]
    pub fn n_clusters(&self) -> usize {
        self.k
    }


    /// Returns the number of locations `m`.
    #[inline]
    pub fn n_locations(&self) -> usize {
        self.ids.len()
    }


    /// Returns the cluster of each location.
    #[inline]
    pub fn assignments(&self) -> &[usize] {
        &self.ids[..]
    }


    /// Returns the locations in cluster `c`, in ascending order.
    pub fn members(&self, c: usize) -> Result<Vec<usize>> {
        checker::index(c, self.k)?;
        let members = self.ids.iter()
            .enumerate()
            .filter_map(|(i, &id)| (id == c).then_some(i))
            .collect();
        Ok(members)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn line(m: usize) -> Vec<Location> {
        (0..m).map(|i| Location::new((i * i) as f64, 0.0))
            .collect()
    }

    #[test]
    fn test_every_k() {
        let m = 12;
        let locations = line(m);
        for k in 1..=m {
            let clustering = Clustering::new(&locations, k).unwrap();
            let mut ids = clustering.assignments().to_vec();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids, (0..k).collect::<Vec<_>>(), "k = {k}");
        }
    }

    #[test]
    fn test_drops_heaviest_edges() {
        // Gaps between consecutive points are 1, 3, 5, 7, 9.
        let locations = line(6);
        let clustering = Clustering::new(&locations, 3).unwrap();
        assert_eq!(clustering.assignments(), &[0, 0, 0, 0, 1, 2]);
    }

    #[test]
    fn test_invalid_k() {
        let locations = line(4);
        assert!(Clustering::new(&locations, 0).is_err());
        assert!(Clustering::new(&locations, 5).is_err());
    }

    #[test]
    fn test_reduce_dimensions_overflow() {
        let locations = line(2);
        let clustering = Clustering::new(&locations, 1).unwrap();
        assert!(matches!(
            clustering.reduce_dimensions(&[i64::MAX, 1]),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(
            clustering.reduce_dimensions(&[i64::MAX, -1]).unwrap(),
            vec![i64::MAX - 1],
        );
    }

    #[test]
    fn test_validate() {
        let clustering = Clustering::new(&line(5), 2).unwrap();
        assert!(clustering.validate().is_ok());

        let out_of_range = Clustering { ids: vec![3], k: 1 };
        assert!(out_of_range.validate().is_err());
        let no_location = Clustering { ids: Vec::new(), k: 1 };
        assert!(no_location.validate().is_err());
        let no_cluster = Clustering { ids: vec![0], k: 0 };
        assert!(no_cluster.validate().is_err());
        let empty_cluster = Clustering { ids: vec![0, 0, 2], k: 3 };
        assert!(empty_cluster.validate().is_err());
    }

    #[test]
    fn test_members() {
        let locations = line(6);
        let clustering = Clustering::new(&locations, 3).unwrap();
        assert_eq!(clustering.members(0).unwrap(), vec![0, 1, 2, 3]);
        assert_eq!(clustering.members(2).unwrap(), vec![5]);
        assert!(clustering.members(3).is_err());
    }
}
