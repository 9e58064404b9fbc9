//! Point structure for representing coordinates

/// A point in a coordinate system
///
/// For geographic points `x` is the longitude and `y` the latitude in degrees.
/// For projected points both are planar meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// X coordinate (longitude in geographic systems)
    pub x: f64,
    /// Y coordinate (latitude in geographic systems)
    pub y: f64,
}

impl Point {
    /// Create a new 2D point
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    /// Longitude of a geographic point
    pub fn lon(&self) -> f64 {
        self.x
    }

    /// Latitude of a geographic point
    pub fn lat(&self) -> f64 {
        self.y
    }

    /// Check that both coordinates are finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Check that this point is a valid longitude/latitude pair
    pub fn is_valid_geographic(&self) -> bool {
        self.is_finite()
            && (-180.0..=180.0).contains(&self.x)
            && (-90.0..=90.0).contains(&self.y)
    }

    /// Coordinates as a `[x, y]` pair
    pub fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }
}
