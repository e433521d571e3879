use super::*;
use nalgebra::vector;
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn facing_and_polar_agree() {
    let p = vector![1.0, 1.0];
    let q = vector![1.0, 3.0];
    let a = facing(p, q);
    assert!((a - FRAC_PI_2).abs() < 1e-12);
    let back = p + polar(distance(p, q), a);
    assert!((back - q).norm() < 1e-12);
    // Due west is +π, not −π.
    assert!((facing(vector![0.0, 0.0], vector![-1.0, 0.0]) - PI).abs() < 1e-12);
}

#[test]
fn cross_sign_tracks_turn_direction() {
    let east = vector![1.0, 0.0];
    let north = vector![0.0, 1.0];
    assert!(cross(east, north) > 0.0);
    assert!(cross(north, east) < 0.0);
    assert_eq!(cross(east, east * 3.0), 0.0);
}

#[test]
fn normalize_guards_zero_length() {
    let z = normalize(vector![0.0, 0.0]);
    assert!(is_finite(z));
    assert_eq!(z, vector![0.0, 0.0]);
    let u = normalize(vector![3.0, 4.0]);
    assert!((u.norm() - 1.0).abs() < 1e-12);
}

#[test]
fn interpolate_endpoints_and_midpoint() {
    let p = vector![0.0, 2.0];
    let q = vector![4.0, -2.0];
    assert_eq!(interpolate(p, q, 0.0), p);
    assert_eq!(interpolate(p, q, 1.0), q);
    assert_eq!(interpolate(p, q, 0.5), vector![2.0, 0.0]);
}

#[test]
fn angle_difference_literal_vs_minor_arc() {
    // Across the seam the literal formula reports the long way round.
    let a = 0.9 * PI;
    let b = -0.9 * PI;
    assert!((angle_difference(a, b) - 1.8 * PI).abs() < 1e-12);
    assert!((arc_angle(a, b) - 0.2 * PI).abs() < 1e-12);
    assert!((arc_angle(b, a) - arc_angle(a, b)).abs() < 1e-15);
    assert!((arc_angle(0.0, PI) - PI).abs() < 1e-12);
}

#[test]
fn closest_point_clamps_to_segment() {
    let p = vector![0.0, 0.0];
    let q = vector![10.0, 0.0];
    assert_eq!(closest_point_on_segment(p, q, vector![5.0, 3.0]), vector![5.0, 0.0]);
    assert_eq!(closest_point_on_segment(p, q, vector![-4.0, 1.0]), p);
    assert_eq!(closest_point_on_segment(p, q, vector![12.0, -1.0]), q);
    // Degenerate segment.
    assert_eq!(closest_point_on_segment(p, p, vector![1.0, 1.0]), p);
}

#[test]
fn validation_rejects_malformed_lists() {
    let ok = [Circle::new(0, 0.0, 0.0, 1.0), Circle::point(1, 5.0, 5.0)];
    assert!(validate_circles(&ok).is_ok());

    let dup = [Circle::new(3, 0.0, 0.0, 1.0), Circle::new(3, 9.0, 0.0, 1.0)];
    assert_eq!(
        validate_circles(&dup),
        Err(CircleError::DuplicateId(CircleId(3)))
    );

    let neg = [Circle::new(1, 0.0, 0.0, -2.0)];
    assert!(matches!(
        validate_circles(&neg),
        Err(CircleError::NegativeRadius { id: CircleId(1), .. })
    ));

    let nan = [Circle::new(2, f64::NAN, 0.0, 1.0)];
    assert_eq!(validate_circles(&nan), Err(CircleError::NonFinite(CircleId(2))));
}

#[test]
fn find_circle_by_id() {
    let cs = [Circle::new(4, 1.0, 2.0, 3.0), Circle::point(9, 0.0, 0.0)];
    assert_eq!(find_circle(&cs, CircleId(9)).unwrap().r, 0.0);
    assert_eq!(
        find_circle(&cs, CircleId(5)),
        Err(CircleError::UnknownId(CircleId(5)))
    );
}

#[test]
fn touches_counts_contact() {
    let a = Circle::new(0, 0.0, 0.0, 2.0);
    let b = Circle::new(1, 5.0, 0.0, 3.0);
    let c = Circle::new(2, 5.1, 0.0, 3.0);
    assert!(a.touches(&b));
    assert!(!a.touches(&c));
}
