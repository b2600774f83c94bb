//! Curated API surface.
//!
//! Groups the pipeline stages so callers that drive individual steps (an
//! outer shape-search loop caching one side's descriptor, benchmarks) can
//! import them from one place.

// Contours
pub use crate::contour::rand::{draw_contour_radial, RadialCfg, ReplayToken, VertexCount};
pub use crate::contour::shapes::{
    circular_radii, ellipse_radii, focal_ellipse_radii, polar_contour, rectangle, StdShape,
};
pub use crate::contour::{resample_uniform, ArcLengthResampler, Contour, ContourResampler};
// Descriptors
pub use crate::descriptor::{
    build_distance_matrix, build_tar, build_tar_with, local_triangle_area,
    signed_triangle_area, spacing_count, DistanceMatrix, Tar,
};
// Alignment
pub use crate::align::dtw::{dtw, dtw_cost, Warp, WarpStep};
pub use crate::align::{direct_cost, warped_cost, AlignmentStrategy};
// Rating
pub use crate::rating::{
    best_alignment, rate, shape_difference_rating, tar_distance, Alignment, RatingOptions,
};
pub use crate::{RatingCfg, ShapeError};
