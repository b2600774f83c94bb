//! Reference profiles used as rating targets.
//!
//! Radii are sampled at `θ_k = 2πk/n`, `k ∈ 0..n` (endpoint excluded), and
//! turned into counterclockwise contours around a center point.
//! Ellipse semi-axes are fixed at `a = 1.5`, `b = 1`.

use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use nalgebra::Vector2;

use super::Contour;
use crate::error::ShapeError;

pub const ELLIPSE_A: f64 = 1.5;
pub const ELLIPSE_B: f64 = 1.0;

/// Reference shape families.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StdShape {
    Circular,
    Ellipse,
    /// Ellipse with the polar origin at a focus.
    FocalEllipse,
}

impl StdShape {
    pub const ALL: [StdShape; 3] = [StdShape::Circular, StdShape::Ellipse, StdShape::FocalEllipse];

    pub fn name(self) -> &'static str {
        match self {
            StdShape::Circular => "circular",
            StdShape::Ellipse => "ellipse",
            StdShape::FocalEllipse => "focal_ellipse",
        }
    }

    /// Polar radii at `n` equally spaced angles.
    pub fn radii(self, n: usize) -> Vec<f64> {
        match self {
            StdShape::Circular => circular_radii(n),
            StdShape::Ellipse => ellipse_radii(n),
            StdShape::FocalEllipse => focal_ellipse_radii(n),
        }
    }

    /// Contour with `n` points around `center`.
    pub fn contour(self, n: usize, center: Vector2<f64>) -> Result<Contour, ShapeError> {
        polar_contour(&self.radii(n), center)
    }
}

impl fmt::Display for StdShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StdShape {
    type Err = ShapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StdShape::ALL
            .into_iter()
            .find(|shape| shape.name() == s)
            .ok_or_else(|| ShapeError::UnknownShape { name: s.to_string() })
    }
}

#[inline]
fn sample_angles(n: usize) -> impl Iterator<Item = f64> {
    (0..n).map(move |k| TAU * k as f64 / n as f64)
}

pub fn circular_radii(n: usize) -> Vec<f64> {
    vec![1.0; n]
}

/// Center-origin ellipse: `r(θ) = ab / |(b cos θ, a sin θ)|`.
pub fn ellipse_radii(n: usize) -> Vec<f64> {
    let (a, b) = (ELLIPSE_A, ELLIPSE_B);
    sample_angles(n)
        .map(|th| a * b / Vector2::new(b * th.cos(), a * th.sin()).norm())
        .collect()
}

/// Focus-origin ellipse: `r(θ) = a(1 − e²) / (1 + e cos θ)`.
pub fn focal_ellipse_radii(n: usize) -> Vec<f64> {
    let a = ELLIPSE_A;
    let e = (1.0 - ELLIPSE_B * ELLIPSE_B / (a * a)).sqrt();
    sample_angles(n)
        .map(|th| a * (1.0 - e * e) / (1.0 + e * th.cos()))
        .collect()
}

/// Point `k` is `center + r_k (cos θ_k, sin θ_k)`.
pub fn polar_contour(radii: &[f64], center: Vector2<f64>) -> Result<Contour, ShapeError> {
    let n = radii.len();
    let points = radii
        .iter()
        .zip(sample_angles(n))
        .map(|(&r, th)| center + Vector2::new(th.cos(), th.sin()) * r)
        .collect();
    Contour::new(points)
}

/// Axis-aligned rectangle with a corner at the origin, counterclockwise.
pub fn rectangle(width: f64, height: f64) -> Result<Contour, ShapeError> {
    Contour::from_xy(&[(0.0, 0.0), (width, 0.0), (width, height), (0.0, height)])
}
