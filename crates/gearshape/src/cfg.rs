//! Numeric tolerances for the rating pipeline.

/// Rating configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct RatingCfg {
    /// Relative degeneracy threshold: a perimeter at or below
    /// `eps_perimeter · max |coordinate|` is rejected. Scale-free, so tiny but
    /// well-formed contours still rate.
    pub eps_perimeter: f64,
}

impl Default for RatingCfg {
    fn default() -> Self {
        Self {
            eps_perimeter: 1e-12,
        }
    }
}
