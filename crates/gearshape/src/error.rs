//! Error taxonomy shared by every stage of the rating pipeline.
//!
//! All variants are precondition violations. They are raised before the
//! offending arithmetic runs, so no stage ever hands NaN or infinity downstream.

use thiserror::Error;

/// Errors surfaced by contour construction, resampling, descriptors and rating.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ShapeError {
    /// Fewer than 3 samples requested: no spacing `1..=⌊(n−1)/2⌋` exists.
    #[error("sample count {n} is invalid (need at least 3)")]
    InvalidSampleCount { n: usize },
    /// Perimeter is zero, near zero or not finite; normalization is undefined.
    #[error("contour is degenerate (perimeter {perimeter:e})")]
    DegenerateContour { perimeter: f64 },
    /// Two descriptors compared against each other have different shapes.
    #[error("descriptor shapes differ: {left:?} vs {right:?}")]
    ShapeMismatch {
        left: (usize, usize),
        right: (usize, usize),
    },
    /// Input points cannot form a contour.
    #[error("invalid contour: {reason}")]
    InvalidContour { reason: String },
    /// Reference shape name not in the table.
    #[error("unknown reference shape `{name}`")]
    UnknownShape { name: String },
}

impl ShapeError {
    pub(crate) fn invalid_contour(reason: impl Into<String>) -> Self {
        Self::InvalidContour {
            reason: reason.into(),
        }
    }
}
