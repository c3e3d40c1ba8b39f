use serde::{Serialize, Deserialize};


/// An immutable point on the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// The x-coordinate.
    pub x: f64,
    /// The y-coordinate.
    pub y: f64,
}


impl Location {
    /// Construct a new location `(x, y)`.
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }


    /// Returns the Euclidean distance to `other`.
    #[inline]
    pub fn distance_to(&self, other: &Self) -> f64 {
        self.distance_squared_to(other).sqrt()
    }


    /// Returns the squared Euclidean distance to `other`.
    #[inline]
    pub fn distance_squared_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }


    /// Returns `true` if both coordinates are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}


impl From<(f64, f64)> for Location {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_01() {
        let p = Location::new(0.0, 0.0);
        let q = Location::new(3.0, 4.0);
        assert_eq!(p.distance_to(&q), 5.0);
        assert_eq!(q.distance_squared_to(&p), 25.0);
    }
}
