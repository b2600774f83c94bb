use super::*;
use crate::contour::shapes::{rectangle, StdShape};
use nalgebra::{dmatrix, vector, Vector2};

fn square(side: f64) -> Contour {
    rectangle(side, side).unwrap()
}

#[test]
fn signed_area_orientation() {
    let a = vector![0.0, 0.0];
    let b = vector![1.0, 0.0];
    let c = vector![0.0, 1.0];
    assert!((signed_triangle_area(a, b, c) - 0.5).abs() < 1e-12);
    assert!((signed_triangle_area(a, c, b) + 0.5).abs() < 1e-12);
    // Collinear points have zero area.
    assert!(signed_triangle_area(a, b, vector![2.0, 0.0]).abs() < 1e-12);
}

#[test]
fn local_area_wraps_indices() {
    let pts: Vec<Vector2<f64>> = square(1.0).points().to_vec();
    // Around index 0 with spacing 1: (0,1), (0,0), (1,0).
    assert!((local_triangle_area(&pts, 0, 1) - 0.5).abs() < 1e-12);
    assert!((local_triangle_area(&pts, 3, 1) - 0.5).abs() < 1e-12);
    // Reversed orientation flips the sign.
    let cw: Vec<Vector2<f64>> = pts.iter().rev().copied().collect();
    assert!((local_triangle_area(&cw, 0, 1) + 0.5).abs() < 1e-12);
}

#[test]
fn tar_shape_contract() {
    let c = StdShape::Ellipse.contour(40, Vector2::zeros()).unwrap();
    for n in [3usize, 4, 5, 16, 17, 64] {
        let tar = build_tar(&c, n).unwrap();
        assert_eq!(tar.shape(), (n, (n - 1) / 2));
        assert_eq!(tar.samples(), n);
        assert_eq!(tar.spacings(), spacing_count(n));
    }
}

#[test]
fn tar_values_for_sampled_square() {
    // 8 samples on the unit square: corners and edge midpoints, perimeter 4.
    let tar = build_tar(&square(1.0), 8).unwrap();
    assert_eq!(tar.shape(), (8, 3));
    // Midpoint samples with spacing 1 have collinear neighbours.
    assert!(tar.get(1, 1).abs() < 1e-12);
    // Corner (1,0) with neighbours (0.5,0) and (1,0.5): area 1/8, over 16.
    assert!((tar.get(2, 1) - 0.125 / 16.0).abs() < 1e-12);
    // A convex contour never produces a negative triangle.
    assert!(tar.as_matrix().iter().all(|&v| v >= -1e-15));
}

#[test]
fn tar_is_scale_and_translation_invariant() {
    let c = StdShape::FocalEllipse.contour(50, Vector2::zeros()).unwrap();
    let base = build_tar(&c, 33).unwrap();
    let moved = build_tar(&c.scaled(7.5).translated(vector![100.0, -40.0]), 33).unwrap();
    let diff = (base.as_matrix() - moved.as_matrix()).abs().max();
    assert!(diff < 1e-12, "max diff {diff}");
}

#[test]
fn tar_errors() {
    let sq = square(1.0);
    assert_eq!(build_tar(&sq, 2), Err(ShapeError::InvalidSampleCount { n: 2 }));
    assert_eq!(build_tar(&sq, 0), Err(ShapeError::InvalidSampleCount { n: 0 }));
    let point = Contour::from_xy(&[(2.0, 3.0); 5]).unwrap();
    assert!(matches!(
        build_tar(&point, 16),
        Err(ShapeError::DegenerateContour { .. })
    ));
    // Degenerate check on pre-sampled points, independent of the resampler.
    assert!(matches!(
        Tar::from_uniform_points(&[Vector2::zeros(); 4], RatingCfg::default()),
        Err(ShapeError::DegenerateContour { .. })
    ));
}

#[test]
fn tiny_contours_are_not_degenerate() {
    let base = build_tar(&square(1.0), 16).unwrap();
    for s in [1e-6, 1e-13, 1e-100] {
        let tiny = build_tar(&square(1.0).scaled(s), 16).unwrap();
        let diff = (base.as_matrix() - tiny.as_matrix()).abs().max();
        assert!(diff < 1e-12, "scale {s}: max diff {diff}");
    }
    // Relative to its offset, a square of side 1e-9 at 1e6 is below resolution.
    let far = square(1e-9).translated(vector![1e6, 1e6]);
    assert!(matches!(
        build_tar(&far, 16),
        Err(ShapeError::DegenerateContour { .. })
    ));
}

#[test]
#[should_panic]
fn local_area_of_no_points_panics() {
    local_triangle_area(&[], 0, 1);
}

#[test]
#[should_panic(expected = "1-based")]
fn tar_spacing_zero_panics() {
    build_tar(&square(1.0), 8).unwrap().get(0, 0);
}

#[test]
fn distance_matrix_values() {
    let tar_a = Tar {
        m: dmatrix![0.0, 1.0; 2.0, 4.0; 1.0, 1.0],
    };
    let tar_b = Tar {
        m: dmatrix![1.0, 1.0; 0.0, 0.0; 2.0, 2.0],
    };
    let d = build_distance_matrix(&tar_a, &tar_b).unwrap();
    assert_eq!(d.n(), 3);
    let expected = dmatrix![
        0.5, 0.5, 1.5;
        2.0, 3.0, 1.0;
        0.0, 1.0, 1.0
    ];
    assert!((d.as_matrix() - expected).abs().max() < 1e-12);
    // Swapping the arguments transposes the matrix.
    let swapped = build_distance_matrix(&tar_b, &tar_a).unwrap();
    assert!((swapped.as_matrix() - d.as_matrix().transpose()).abs().max() < 1e-12);
}

#[test]
fn distance_matrix_of_identical_descriptors_has_zero_diagonal() {
    let c = StdShape::Ellipse.contour(24, Vector2::zeros()).unwrap();
    let tar = build_tar(&c, 24).unwrap();
    let d = build_distance_matrix(&tar, &tar).unwrap();
    assert!(d.as_matrix().iter().all(|&v| v >= 0.0));
    for i in 0..d.n() {
        assert_eq!(d.get(i, i), 0.0);
    }
}

#[test]
fn distance_matrix_rejects_shape_mismatch() {
    let c = square(1.0);
    let a = build_tar(&c, 16).unwrap();
    let b = build_tar(&c, 17).unwrap();
    assert_eq!(
        build_distance_matrix(&a, &b),
        Err(ShapeError::ShapeMismatch {
            left: (16, 7),
            right: (17, 8),
        })
    );
}

#[test]
fn distance_matrix_from_matrix_requires_square() {
    assert!(DistanceMatrix::from_matrix(DMatrix::zeros(2, 3)).is_none());
    assert!(DistanceMatrix::from_matrix(DMatrix::zeros(0, 0)).is_none());
    assert!(DistanceMatrix::from_matrix(DMatrix::zeros(3, 3)).is_some());
}
