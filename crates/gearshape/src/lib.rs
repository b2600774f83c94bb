//! Shape-difference rating for closed planar contours.
//!
//! Rates how well a candidate gear profile matches a target shape. The score
//! is invariant to the contour's start point, its sampling resolution and
//! uniform scale:
//!
//! contour → uniform resample → TAR descriptor → distance matrix →
//! per-offset alignment cost → minimum over all offsets.
//!
//! Module map
//! - `contour`: `Contour`, arc-length resampling, reference shapes, random contours.
//! - `descriptor`: triangle-area representation (`Tar`) and `DistanceMatrix`.
//! - `align`: `AlignmentStrategy` (warped/direct) and the DTW solver.
//! - `rating`: rotation search and `shape_difference_rating`.
//! - `api`: curated re-exports for callers.

pub mod align;
pub mod api;
pub mod cfg;
pub mod contour;
pub mod descriptor;
pub mod error;
pub mod rating;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use align::AlignmentStrategy;
pub use cfg::RatingCfg;
pub use contour::Contour;
pub use error::ShapeError;
pub use nalgebra::Vector2 as Vec2;
pub use rating::{rate, shape_difference_rating, tar_distance, Alignment, RatingOptions};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::align::AlignmentStrategy;
    pub use crate::contour::shapes::{rectangle, StdShape};
    pub use crate::contour::Contour;
    pub use crate::error::ShapeError;
    pub use crate::rating::{rate, shape_difference_rating, RatingOptions};
    pub use nalgebra::Vector2 as Vec2;
}
