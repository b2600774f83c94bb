//! Triangle-Area Representation (TAR) of closed contours.
//!
//! Purpose
//! - Describe a contour by the signed areas of the triangles `(i−t, i, i+t)`
//!   for every sample `i` and every spacing `t ∈ 1..=⌊(N−1)/2⌋`.
//! - Divide by the squared perimeter so uniform scaling cancels. Uniform
//!   arc-length resampling makes the descriptor independent of the input's
//!   original resolution.
//!
//! Layout
//! - `Tar` is a dense `(N, M)` matrix: row `i` is the sample, column `t−1` the
//!   spacing. Spacing 0 is left out since its triangle is always degenerate.
//! - `distance`: pairwise row distances between two descriptors.

mod distance;

pub use distance::{build_distance_matrix, DistanceMatrix};

use nalgebra::{DMatrix, Vector2};

use crate::cfg::RatingCfg;
use crate::contour::{is_degenerate, perimeter, ArcLengthResampler, Contour, ContourResampler};
use crate::error::ShapeError;

/// Signed triangle area `½·det[x1 y1 1; x2 y2 1; x3 y3 1]`; positive for CCW.
#[inline]
pub fn signed_triangle_area(p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> f64 {
    let u = p2 - p1;
    let v = p3 - p1;
    0.5 * (u.x * v.y - u.y * v.x)
}

/// Signed area of the triangle at `index − spacing, index, index + spacing` (mod N).
///
/// # Panics
/// If `points` is empty. Debug builds also panic when `spacing` lies outside
/// `1..=⌊(N−1)/2⌋`.
#[inline]
pub fn local_triangle_area(points: &[Vector2<f64>], index: usize, spacing: usize) -> f64 {
    let n = points.len();
    assert!(n > 0, "local_triangle_area on an empty point list");
    debug_assert!(
        spacing >= 1 && spacing <= spacing_count(n),
        "spacing {spacing} out of range for {n} points"
    );
    let s = spacing % n;
    let prev = (index + n - s) % n;
    let next = (index + s) % n;
    signed_triangle_area(points[prev], points[index % n], points[next])
}

/// Number of spacings for `n` samples: `⌊(n−1)/2⌋`.
#[inline]
pub fn spacing_count(n: usize) -> usize {
    n.saturating_sub(1) / 2
}

/// Perimeter-normalized triangle-area descriptor of shape `(N, ⌊(N−1)/2⌋)`.
#[derive(Clone, Debug, PartialEq)]
pub struct Tar {
    m: DMatrix<f64>,
}

impl Tar {
    /// `(samples, spacings)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        self.m.shape()
    }

    #[inline]
    pub fn samples(&self) -> usize {
        self.m.nrows()
    }

    #[inline]
    pub fn spacings(&self) -> usize {
        self.m.ncols()
    }

    /// Normalized area at sample `i` and spacing `t` (1-based, as in the definition).
    ///
    /// # Panics
    /// If `i >= self.samples()` or `t` is outside `1..=self.spacings()`.
    #[inline]
    pub fn get(&self, i: usize, t: usize) -> f64 {
        assert!(t >= 1, "spacing is 1-based, got 0");
        self.m[(i, t - 1)]
    }

    #[inline]
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.m
    }

    /// Build directly from points already sampled uniformly (no resampling).
    pub fn from_uniform_points(
        points: &[Vector2<f64>],
        cfg: RatingCfg,
    ) -> Result<Self, ShapeError> {
        let n = points.len();
        if n < 3 {
            return Err(ShapeError::InvalidSampleCount { n });
        }
        let perimeter = perimeter(points);
        if is_degenerate(points, perimeter, cfg.eps_perimeter) {
            return Err(ShapeError::DegenerateContour { perimeter });
        }
        let scale = 1.0 / (perimeter * perimeter);
        let m = DMatrix::from_fn(n, spacing_count(n), |i, t| {
            local_triangle_area(points, i, t + 1) * scale
        });
        Ok(Self { m })
    }
}

/// TAR of `contour` resampled to `n` points by arc length.
pub fn build_tar(contour: &Contour, n: usize) -> Result<Tar, ShapeError> {
    build_tar_with(&ArcLengthResampler::default(), contour, n, RatingCfg::default())
}

/// TAR with an explicit resampler and tolerances.
pub fn build_tar_with<R: ContourResampler + ?Sized>(
    resampler: &R,
    contour: &Contour,
    n: usize,
    cfg: RatingCfg,
) -> Result<Tar, ShapeError> {
    if n < 3 {
        return Err(ShapeError::InvalidSampleCount { n });
    }
    let sampled = resampler.resample(contour, n)?;
    if sampled.len() != n {
        return Err(ShapeError::invalid_contour(format!(
            "resampler returned {} points, expected {n}",
            sampled.len()
        )));
    }
    Tar::from_uniform_points(sampled.points(), cfg)
}

#[cfg(test)]
mod tests;
