//! Pairwise row distances between two descriptors.
//!
//! Cell `(i, j)` is the mean absolute difference between row `i` of A and row
//! `j` of B over all spacings. The matrix compares two different descriptors,
//! so it is not symmetric in general.

use nalgebra::DMatrix;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::Tar;
use crate::error::ShapeError;

/// Dense `N×N` matrix of nonnegative per-sample dissimilarities.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceMatrix {
    m: DMatrix<f64>,
}

impl DistanceMatrix {
    /// Wrap a square matrix. Returns `None` if it is not square or empty.
    pub fn from_matrix(m: DMatrix<f64>) -> Option<Self> {
        (m.is_square() && m.nrows() > 0).then_some(Self { m })
    }

    #[inline]
    pub fn n(&self) -> usize {
        self.m.nrows()
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.m[(i, j)]
    }

    #[inline]
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.m
    }
}

/// Build the distance matrix; fails with `ShapeMismatch` if the shapes differ.
pub fn build_distance_matrix(tar_a: &Tar, tar_b: &Tar) -> Result<DistanceMatrix, ShapeError> {
    if tar_a.shape() != tar_b.shape() {
        return Err(ShapeError::ShapeMismatch {
            left: tar_a.shape(),
            right: tar_b.shape(),
        });
    }
    let (n, spacings) = tar_a.shape();
    // Transposed copies keep each descriptor row contiguous (nalgebra is column-major).
    let at = tar_a.as_matrix().transpose();
    let bt = tar_b.as_matrix().transpose();
    let inv = 1.0 / spacings as f64;
    let cell = |k: usize| {
        let (i, j) = (k % n, k / n);
        let row_a = at.column(i);
        let row_b = bt.column(j);
        row_a
            .iter()
            .zip(row_b.iter())
            .map(|(x, y)| (x - y).abs())
            .sum::<f64>()
            * inv
    };

    #[cfg(feature = "parallel")]
    let data: Vec<f64> = (0..n * n).into_par_iter().map(cell).collect();
    #[cfg(not(feature = "parallel"))]
    let data: Vec<f64> = (0..n * n).map(cell).collect();

    Ok(DistanceMatrix {
        m: DMatrix::from_vec(n, n, data),
    })
}
