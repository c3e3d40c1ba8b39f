//! The files in `clustering/` directory defines
//! the MST-based clustering that reduces `m` locations to `k` features.

/// Defines a 2-D location.
pub mod location;

/// Defines the disjoint-set forest.
pub(crate) mod union_find;

/// Defines the complete distance graph and its minimum spanning tree.
pub(crate) mod mst;

/// Defines the clustering itself.
pub mod mst_clustering;


pub use location::Location;
pub use mst_clustering::Clustering;
