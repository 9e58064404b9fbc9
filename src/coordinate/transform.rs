//! Coordinate transformation functionality
//!
//! Geographic longitude/latitude points are moved into a planar equal-area
//! system before any area or distance is measured. The projection sits behind
//! the [`Projection`] trait so the hull and grid code never depend on a
//! particular formula.

use std::f64::consts::{FRAC_PI_2, PI, SQRT_2};
use log::debug;

use super::crs::CoordinateSystem;
use super::point::Point;

/// Forward/inverse mapping between geographic degrees and planar meters
pub trait Projection: Send + Sync {
    /// Project a longitude/latitude pair (degrees) to planar meters
    fn forward(&self, lon: f64, lat: f64) -> Point;

    /// Map planar meters back to longitude/latitude (degrees)
    fn inverse(&self, x: f64, y: f64) -> Point;

    /// Coordinate system produced by `forward`
    fn target_crs(&self) -> CoordinateSystem;
}

/// Spherical World Mollweide (ESRI:54009)
///
/// Uses the WGS84 semi-major axis as the sphere radius and a central
/// meridian of 0, which matches how PROJ evaluates `+proj=moll +datum=WGS84`.
#[derive(Debug, Clone, Copy)]
pub struct Mollweide {
    radius: f64,
}

impl Mollweide {
    /// Earth radius in meters
    pub const EARTH_RADIUS: f64 = 6378137.0;

    const MAX_ITERATIONS: usize = 100;
    const TOLERANCE: f64 = 1e-12;

    /// Create a Mollweide projection on a sphere of the given radius
    pub fn with_radius(radius: f64) -> Self {
        Mollweide { radius }
    }

    /// Solve `2θ + sin 2θ = π sin φ` for the auxiliary angle θ
    fn auxiliary_angle(phi: f64) -> f64 {
        let k = PI * phi.sin();
        let mut t = phi * 2.0;

        for _ in 0..Self::MAX_ITERATIONS {
            let delta = (t + t.sin() - k) / (1.0 + t.cos());
            t -= delta;
            if delta.abs() < Self::TOLERANCE {
                return t / 2.0;
            }
        }

        // Only the poles fail to converge (double root at t = ±π)
        FRAC_PI_2.copysign(phi)
    }
}

impl Default for Mollweide {
    fn default() -> Self {
        Mollweide::with_radius(Self::EARTH_RADIUS)
    }
}

impl Projection for Mollweide {
    fn forward(&self, lon: f64, lat: f64) -> Point {
        let lambda = lon.to_radians();
        let phi = lat.to_radians();

        let theta = if (FRAC_PI_2 - phi.abs()) < Self::TOLERANCE {
            FRAC_PI_2.copysign(phi)
        } else {
            Self::auxiliary_angle(phi)
        };

        let x = 2.0 * SQRT_2 / PI * self.radius * lambda * theta.cos();
        let y = SQRT_2 * self.radius * theta.sin();

        Point::new(x, y)
    }

    fn inverse(&self, x: f64, y: f64) -> Point {
        let theta = (y / (SQRT_2 * self.radius)).clamp(-1.0, 1.0).asin();
        let phi = ((2.0 * theta + (2.0 * theta).sin()) / PI).clamp(-1.0, 1.0).asin();

        let cos_theta = theta.cos();
        let lambda = if cos_theta.abs() < Self::TOLERANCE {
            0.0
        } else {
            PI * x / (2.0 * SQRT_2 * self.radius * cos_theta)
        };

        Point::new(lambda.to_degrees(), phi.to_degrees())
    }

    fn target_crs(&self) -> CoordinateSystem {
        CoordinateSystem::WorldMollweide
    }
}

/// Transformer for converting point sets between geographic and projected space
pub struct CoordinateTransformer {
    projection: Box<dyn Projection>,
}

impl CoordinateTransformer {
    /// Create a transformer around a specific projection
    pub fn new(projection: Box<dyn Projection>) -> Self {
        CoordinateTransformer { projection }
    }

    /// Coordinate system of the input points
    pub fn source_crs(&self) -> CoordinateSystem {
        CoordinateSystem::WGS84
    }

    /// Coordinate system of the projected points
    pub fn target_crs(&self) -> CoordinateSystem {
        self.projection.target_crs()
    }

    /// Project a single geographic point
    pub fn project(&self, point: &Point) -> Point {
        self.projection.forward(point.x, point.y)
    }

    /// Project a point set, preserving order and count
    pub fn project_points(&self, points: &[Point]) -> Vec<Point> {
        let projected: Vec<Point> = points.iter().map(|p| self.project(p)).collect();
        debug!("Projected {} points from {} to {}",
               projected.len(), self.source_crs().description(), self.target_crs().description());
        projected
    }

}

impl Default for CoordinateTransformer {
    fn default() -> Self {
        CoordinateTransformer::new(Box::new(Mollweide::default()))
    }
}
