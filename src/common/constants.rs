/// Tolerance for `sum(dist[..]) == 1`.
pub const SIMPLEX_TOLERANCE: f64 = 1e-9;

/// The number of boosting rounds `Booster::run` performs by default.
pub const DEFAULT_ROUNDS: usize = 100;

/// The factor applied to the weight of a misclassified example.
pub const MISTAKE_FACTOR: f64 = 2f64;
