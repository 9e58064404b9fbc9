//! Bounding box structure for defining regions

use super::point::Point;

/// A bounding box in a coordinate system
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Minimum X coordinate
    pub min_x: f64,
    /// Minimum Y coordinate
    pub min_y: f64,
    /// Maximum X coordinate
    pub max_x: f64,
    /// Maximum Y coordinate
    pub max_y: f64,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        BoundingBox {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    /// Compute the tightest box around a set of points
    ///
    /// # Returns
    /// `None` when `points` is empty
    pub fn from_points(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let mut bbox = BoundingBox::new(first.x, first.y, first.x, first.y);

        for point in &points[1..] {
            bbox.min_x = bbox.min_x.min(point.x);
            bbox.min_y = bbox.min_y.min(point.y);
            bbox.max_x = bbox.max_x.max(point.x);
            bbox.max_y = bbox.max_y.max(point.y);
        }

        Some(bbox)
    }

    /// Get the width of the bounding box
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Get the height of the bounding box
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Lower-left corner
    pub fn min_point(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points() {
        let points = vec![
            Point::new(3.0, -1.0),
            Point::new(-2.0, 4.0),
            Point::new(0.5, 0.5),
        ];
        let bbox = BoundingBox::from_points(&points).unwrap();

        assert_eq!(bbox, BoundingBox::new(-2.0, -1.0, 3.0, 4.0));
        assert_eq!(bbox.width(), 5.0);
        assert_eq!(bbox.height(), 5.0);
        assert_eq!(bbox.min_point(), Point::new(-2.0, -1.0));
    }

    #[test]
    fn test_from_no_points() {
        assert!(BoundingBox::from_points(&[]).is_none());
    }
}
