//! Property and scenario tests exercising the public coordinate API

use approx::assert_abs_diff_eq;
use locus::constants::EQUALITY_THRESHOLD;
use locus::{CartesianCoordinate, Coordinate, CoordinateError, SphericCoordinate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;
use std::f64::consts::{FRAC_PI_2, PI};

fn random_cartesian(rng: &mut StdRng) -> CartesianCoordinate {
    CartesianCoordinate::new(
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
        rng.gen_range(-100.0..100.0),
    )
}

#[test]
fn test_spheric_roundtrip_random() {
    let mut rng = StdRng::seed_from_u64(424242);
    for i in 0..200 {
        // Stay clear of the poles and the azimuth seam, where φ is ill-conditioned
        let phi = (rng.gen::<f64>() * 2.0 * PI - PI) * 0.999;
        let theta = 0.01 + rng.gen::<f64>() * (PI - 0.02);
        let radius = 0.1 + rng.gen::<f64>() * 100.0;

        let original = SphericCoordinate::new(phi, theta, radius).unwrap();
        let roundtrip = original.as_cartesian().as_spheric();

        assert_abs_diff_eq!(roundtrip.phi(), phi, epsilon = 1e-9);
        assert_abs_diff_eq!(roundtrip.theta(), theta, epsilon = 1e-9);
        assert_abs_diff_eq!(roundtrip.radius(), radius, epsilon = 1e-9);
        assert!(
            original.as_cartesian().is_equal(&roundtrip),
            "iteration {i}: {original:?} -> {roundtrip:?}"
        );
    }
}

#[rstest]
#[case(0.0)]
#[case(PI)]
fn test_roundtrip_at_poles_loses_azimuth(#[case] theta: f64) {
    let original = SphericCoordinate::new(1.0, theta, 2.0).unwrap();
    let roundtrip = original.as_cartesian().as_spheric();

    // The point survives, the azimuth does not necessarily
    assert_abs_diff_eq!(roundtrip.theta(), theta, epsilon = 1e-9);
    assert_abs_diff_eq!(roundtrip.radius(), 2.0, epsilon = 1e-12);
    assert!(original.as_cartesian().is_equal(&roundtrip));
}

#[test]
fn test_roundtrip_at_origin() {
    let original = SphericCoordinate::new(1.0, 1.0, 0.0).unwrap();
    let roundtrip = original.as_cartesian().as_spheric();

    assert_eq!(roundtrip.radius(), 0.0);
    assert_eq!(roundtrip.phi(), 0.0);
    assert_eq!(roundtrip.theta(), 0.0);
    assert!(original.as_cartesian().is_equal(&roundtrip));
    assert!(matches!(
        original.as_cartesian().try_as_spheric(),
        Err(CoordinateError::DegenerateCoordinate { .. })
    ));
}

#[test]
fn test_cartesian_distance_symmetry_and_identity() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let a = random_cartesian(&mut rng);
        let b = random_cartesian(&mut rng).as_spheric();

        assert_eq!(a.cartesian_distance(&b), b.as_cartesian().cartesian_distance(&a));
        assert!(a.cartesian_distance(&b) >= 0.0);
        assert_eq!(a.cartesian_distance(&a), 0.0);
        assert_abs_diff_eq!(b.cartesian_distance(&b), 0.0, epsilon = 1e-12);
    }
}

#[test]
fn test_central_angle_identity() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..100 {
        let a = random_cartesian(&mut rng);
        assert_abs_diff_eq!(a.central_angle(&a), 0.0, epsilon = 1e-7);
        assert_abs_diff_eq!(a.as_spheric().central_angle(&a), 0.0, epsilon = 1e-7);
    }
}

#[test]
fn test_central_angle_stays_in_range() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..200 {
        let a = random_cartesian(&mut rng);
        let b = random_cartesian(&mut rng);
        let angle = a.central_angle(&b);
        assert!((0.0..=PI).contains(&angle), "angle {angle} out of range");
    }
}

#[rstest]
#[case(EQUALITY_THRESHOLD - 1e-9, true)]
#[case(EQUALITY_THRESHOLD + 1e-9, false)]
fn test_tolerance_boundary(#[case] offset: f64, #[case] equal: bool) {
    let base = CartesianCoordinate::new(10.0, -4.0, 2.0);

    // Spread the Manhattan sum over all three axes
    let third = offset / 3.0;
    let moved = CartesianCoordinate::new(10.0 + third, -4.0 - third, 2.0 + third);

    assert_eq!(base.is_equal(&moved), equal);
    assert_eq!(moved.is_equal(&base), equal);
}

#[test]
fn test_x_axis_scenario() {
    let cartesian = CartesianCoordinate::new(1.0, 0.0, 0.0);
    let spheric = cartesian.as_spheric();

    assert_eq!(spheric.phi(), 0.0);
    assert_abs_diff_eq!(spheric.theta(), FRAC_PI_2, epsilon = 1e-15);
    assert_eq!(spheric.radius(), 1.0);
    assert!(spheric.as_cartesian().is_equal(&cartesian));
}

#[test]
fn test_pole_to_pole_distance() {
    let north = CartesianCoordinate::new(0.0, 0.0, 1.0);
    let south = CartesianCoordinate::new(0.0, 0.0, -1.0);
    assert_eq!(north.cartesian_distance(&south), 2.0);
}

#[test]
fn test_construction_bounds() {
    assert!(matches!(
        SphericCoordinate::new(PI, 0.0, 1.0),
        Err(CoordinateError::InvalidArgument { name: "phi", .. })
    ));
    assert!(matches!(
        SphericCoordinate::new(0.0, 0.0, -1.0),
        Err(CoordinateError::InvalidArgument { name: "radius", .. })
    ));
}

#[test]
fn test_equality_depends_on_receiver() {
    let cartesian = CartesianCoordinate::new(0.0, 0.0, 1.0);
    let exact = SphericCoordinate::new(0.0, 0.0, 1.0).unwrap();
    let close = SphericCoordinate::new(0.0, 1e-8, 1.0).unwrap();

    // Cartesian receiver: tolerance on the Cartesian projection
    assert!(cartesian.is_equal(&exact));
    assert!(cartesian.is_equal(&close));

    // Spherical receiver: exact field comparison
    assert!(exact.is_equal(&cartesian));
    assert!(!close.is_equal(&cartesian));
    assert!(!close.is_equal(&exact));
}

#[test]
fn test_collaborator_holds_trait_object() {
    struct Photo {
        location: Box<dyn Coordinate>,
    }

    let photos = [
        Photo {
            location: Box::new(CartesianCoordinate::new(1.0, 0.0, 0.0)),
        },
        Photo {
            location: Box::new(SphericCoordinate::new(FRAC_PI_2, FRAC_PI_2, 1.0).unwrap()),
        },
    ];

    let d = photos[0]
        .location
        .cartesian_distance(photos[1].location.as_ref());
    assert_abs_diff_eq!(d, 2.0_f64.sqrt(), epsilon = 1e-12);
    assert!(!photos[0].location.is_equal(photos[1].location.as_ref()));
}
