//! Cost of aligning two descriptors under a cyclic offset.
//!
//! Purpose
//! - Turn a `DistanceMatrix` and a rotation offset into one scalar.
//! - Two interchangeable strategies share the signature
//!   `compute_cost(matrix, offset) -> f64`:
//!   - `Warped` (default): order-preserving alignment that tolerates local
//!     stretching, solved by `dtw::dtw_cost` over the shifted matrix.
//!   - `Direct`: rigid one-to-one correspondence, the sum of one wrapped
//!     diagonal. O(N) instead of O(N²).
//!
//! Offsets are reduced modulo N.

pub mod dtw;

use std::fmt;

use crate::descriptor::DistanceMatrix;

/// Alignment policy for one offset; selected by configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AlignmentStrategy {
    /// Dynamic time warping over `d(a, b) = M[a, (b − offset) mod N]`.
    #[default]
    Warped,
    /// `trace(offset) + trace(offset − N)`, i.e. `Σ_i M[i, (i + offset) mod N]`.
    Direct,
}

impl AlignmentStrategy {
    pub const ALL: [AlignmentStrategy; 2] = [AlignmentStrategy::Warped, AlignmentStrategy::Direct];

    pub fn name(self) -> &'static str {
        match self {
            AlignmentStrategy::Warped => "warped",
            AlignmentStrategy::Direct => "direct",
        }
    }

    #[inline]
    pub fn compute_cost(self, matrix: &DistanceMatrix, offset: usize) -> f64 {
        match self {
            AlignmentStrategy::Warped => warped_cost(matrix, offset),
            AlignmentStrategy::Direct => direct_cost(matrix, offset),
        }
    }
}

impl fmt::Display for AlignmentStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Minimum monotone path cost from `(0, 0)` to `(N−1, N−1)` over the
/// column-shifted matrix.
pub fn warped_cost(matrix: &DistanceMatrix, offset: usize) -> f64 {
    let n = matrix.n();
    let shift = n - offset % n;
    let m = matrix.as_matrix();
    dtw::dtw_cost((n, n), |a, b| m[(a % n, (b + shift) % n)])
}

/// Rigid correspondence `i ↔ (i + offset) mod N`.
pub fn direct_cost(matrix: &DistanceMatrix, offset: usize) -> f64 {
    let n = matrix.n();
    let offset = offset % n;
    let m = matrix.as_matrix();
    (0..n).map(|i| m[(i, (i + offset) % n)]).sum()
}
