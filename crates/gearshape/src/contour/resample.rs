//! Arc-length-uniform resampling of closed contours.
//!
//! The descriptor normalizes triangle areas by the squared perimeter. That only
//! makes descriptors of different inputs comparable when both were sampled
//! uniformly along the boundary, which is what this module guarantees.

use super::{is_degenerate, Contour};
use crate::error::ShapeError;

/// Resamples a closed contour to exactly `n` points.
pub trait ContourResampler {
    fn resample(&self, contour: &Contour, n: usize) -> Result<Contour, ShapeError>;
}

/// Places sample `k` at arc length `k·L/n` from the first input point.
///
/// Sample 0 is the first input point, so start and orientation are kept.
#[derive(Clone, Copy, Debug)]
pub struct ArcLengthResampler {
    /// Total lengths at or below `eps_length · max |coordinate|` are rejected
    /// as degenerate.
    pub eps_length: f64,
}

impl Default for ArcLengthResampler {
    fn default() -> Self {
        Self { eps_length: 1e-12 }
    }
}

impl ContourResampler for ArcLengthResampler {
    fn resample(&self, contour: &Contour, n: usize) -> Result<Contour, ShapeError> {
        if n < 3 {
            return Err(ShapeError::InvalidSampleCount { n });
        }
        let pts = contour.points();
        let m = pts.len();
        // Cumulative arc length at the start of each edge, plus the closing total.
        let mut cum = Vec::with_capacity(m + 1);
        cum.push(0.0);
        for k in 0..m {
            let len = (pts[(k + 1) % m] - pts[k]).norm();
            cum.push(cum[k] + len);
        }
        let total = cum[m];
        if is_degenerate(pts, total, self.eps_length) {
            return Err(ShapeError::DegenerateContour { perimeter: total });
        }

        let step = total / n as f64;
        let mut out = Vec::with_capacity(n);
        let mut edge = 0;
        for k in 0..n {
            let s = step * k as f64;
            // Advance to the edge containing s; zero-length edges are skipped
            // because their end equals their start.
            while edge + 1 < m && cum[edge + 1] <= s {
                edge += 1;
            }
            let a = pts[edge];
            let b = pts[(edge + 1) % m];
            let len = cum[edge + 1] - cum[edge];
            let p = if len > 0.0 {
                let t = ((s - cum[edge]) / len).clamp(0.0, 1.0);
                a + (b - a) * t
            } else {
                a
            };
            out.push(p);
        }
        Ok(Contour { points: out })
    }
}

/// Resample with the default `ArcLengthResampler`.
pub fn resample_uniform(contour: &Contour, n: usize) -> Result<Contour, ShapeError> {
    ArcLengthResampler::default().resample(contour, n)
}
