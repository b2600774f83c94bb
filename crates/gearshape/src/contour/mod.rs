//! Closed planar contours.
//!
//! Purpose
//! - Hold the boundary polygon of a gear profile (or any 2D shape) as an
//!   ordered point list that is implicitly closed: the last point connects back
//!   to the first.
//! - Orientation is counterclockwise by caller contract. It is not enforced;
//!   `signed_area` lets callers check.
//!
//! Submodules
//! - `resample`: arc-length-uniform resampling (`ContourResampler`).
//! - `shapes`: reference profiles (circle, ellipse, focal ellipse, rectangle).
//! - `rand`: reproducible random star-shaped contours for tests and benches.

pub mod rand;
mod resample;
pub mod shapes;

pub use resample::{resample_uniform, ArcLengthResampler, ContourResampler};

use nalgebra::Vector2;

use crate::error::ShapeError;

/// Closed, ordered polygon with at least 3 finite points.
#[derive(Clone, Debug, PartialEq)]
pub struct Contour {
    points: Vec<Vector2<f64>>,
}

impl Contour {
    /// Validate and wrap a point list.
    ///
    /// Fails with `InvalidContour` for fewer than 3 points or a non-finite
    /// coordinate. Coincident points are allowed here; a contour whose whole
    /// perimeter vanishes is rejected later as `DegenerateContour`.
    pub fn new(points: Vec<Vector2<f64>>) -> Result<Self, ShapeError> {
        if points.len() < 3 {
            return Err(ShapeError::invalid_contour(format!(
                "need at least 3 points, got {}",
                points.len()
            )));
        }
        if let Some(k) = points
            .iter()
            .position(|p| !(p.x.is_finite() && p.y.is_finite()))
        {
            return Err(ShapeError::invalid_contour(format!(
                "point {k} has a non-finite coordinate"
            )));
        }
        Ok(Self { points })
    }

    /// Convenience constructor from `(x, y)` pairs.
    pub fn from_xy(xy: &[(f64, f64)]) -> Result<Self, ShapeError> {
        Self::new(xy.iter().map(|&(x, y)| Vector2::new(x, y)).collect())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: construction requires at least 3 points.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Vector2<f64>] {
        &self.points
    }

    /// Iterate the closed edge list `(p[k], p[k+1 mod n])`.
    pub fn edges(&self) -> impl Iterator<Item = (Vector2<f64>, Vector2<f64>)> + '_ {
        let n = self.points.len();
        (0..n).map(move |k| (self.points[k], self.points[(k + 1) % n]))
    }

    /// Sum of edge lengths, including the closing edge.
    pub fn perimeter(&self) -> f64 {
        perimeter(&self.points)
    }

    /// Shoelace area; positive for counterclockwise orientation.
    pub fn signed_area(&self) -> f64 {
        0.5 * self
            .edges()
            .map(|(p, q)| p.x * q.y - p.y * q.x)
            .sum::<f64>()
    }

    /// Cyclic re-indexing: point `k` of the result is point `k + shift` of `self`.
    pub fn rotated(&self, shift: usize) -> Self {
        let mut points = self.points.clone();
        let n = points.len();
        points.rotate_left(shift % n);
        Self { points }
    }

    /// Uniform scaling about the origin.
    pub fn scaled(&self, s: f64) -> Self {
        Self {
            points: self.points.iter().map(|p| p * s).collect(),
        }
    }

    pub fn translated(&self, t: Vector2<f64>) -> Self {
        Self {
            points: self.points.iter().map(|p| p + t).collect(),
        }
    }
}

/// Closed-polygon perimeter of a raw point slice (wraparound edge included).
pub(crate) fn perimeter(points: &[Vector2<f64>]) -> f64 {
    let n = points.len();
    (0..n)
        .map(|k| (points[(k + 1) % n] - points[k]).norm())
        .sum()
}

/// True when `perimeter` is non-finite, vanishes relative to the largest
/// absolute coordinate, or is too small to square and invert.
pub(crate) fn is_degenerate(points: &[Vector2<f64>], perimeter: f64, eps: f64) -> bool {
    let extent = points
        .iter()
        .map(|p| p.x.abs().max(p.y.abs()))
        .fold(0.0, f64::max);
    !perimeter.is_finite()
        || perimeter <= eps * extent
        || !(perimeter * perimeter).recip().is_finite()
}
