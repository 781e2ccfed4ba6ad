//! Tests for count resolution.

use super::*;

fn donor_of_size(size: f64) -> Vec<DVec3> {
    vec![DVec3::new(-size / 2.0, 0.0, 0.0), DVec3::new(size / 2.0, 0.25, 0.0)]
}

fn segment_of_length(length: f64) -> Segment {
    Segment::new(DVec3::new(1.0, 1.0, 1.0), DVec3::new(1.0, 1.0 + length, 1.0))
}

#[test]
fn fixed_returns_requested() {
    let donor = donor_of_size(1.0);
    for requested in [1, 2, 5, 40] {
        let count = CountMode::Fixed
            .resolve(&segment_of_length(3.0), &donor, Axis::X, requested)
            .unwrap();
        assert_eq!(count, requested as usize);
    }
}

#[test]
fn fixed_clamps_non_positive_requests() {
    let donor = donor_of_size(1.0);
    assert_eq!(CountMode::Fixed.resolve(&segment_of_length(3.0), &donor, Axis::X, 0).unwrap(), 1);
    assert_eq!(CountMode::Fixed.resolve(&segment_of_length(3.0), &donor, Axis::X, -4).unwrap(), 1);
}

#[test]
fn fixed_ignores_donor() {
    // No extent needed, so even an empty donor resolves.
    assert_eq!(CountMode::Fixed.resolve(&segment_of_length(2.0), &[], Axis::X, 4).unwrap(), 4);
}

#[test]
fn scale_up_floors() {
    let donor = donor_of_size(1.0);
    assert_eq!(CountMode::ScaleUp.resolve(&segment_of_length(3.0), &donor, Axis::X, 9).unwrap(), 3);
    assert_eq!(CountMode::ScaleUp.resolve(&segment_of_length(3.9), &donor, Axis::X, 9).unwrap(), 3);
}

#[test]
fn scale_down_ceils() {
    let donor = donor_of_size(1.0);
    assert_eq!(CountMode::ScaleDown.resolve(&segment_of_length(3.5), &donor, Axis::X, 9).unwrap(), 4);
    assert_eq!(CountMode::ScaleDown.resolve(&segment_of_length(3.0), &donor, Axis::X, 9).unwrap(), 3);
}

#[test]
fn no_scale_uses_floor_formula() {
    let donor = donor_of_size(1.0);
    assert_eq!(CountMode::NoScale.resolve(&segment_of_length(3.5), &donor, Axis::X, 9).unwrap(), 3);
}

#[test]
fn short_segment_clamps_to_one() {
    let donor = donor_of_size(2.0);
    assert_eq!(CountMode::ScaleUp.resolve(&segment_of_length(0.5), &donor, Axis::X, 9).unwrap(), 1);
    assert_eq!(CountMode::NoScale.resolve(&segment_of_length(0.5), &donor, Axis::X, 9).unwrap(), 1);
}

#[test]
fn ratio_snaps_to_integer() {
    // 0.3 / 0.1 is 2.9999999999999996 in f64
    let donor = donor_of_size(0.1);
    assert_eq!(CountMode::ScaleUp.resolve(&segment_of_length(0.3), &donor, Axis::X, 1).unwrap(), 3);
    assert_eq!(CountMode::ScaleDown.resolve(&segment_of_length(0.3), &donor, Axis::X, 1).unwrap(), 3);
}

#[test]
fn degenerate_segment_fails_for_every_mode() {
    let donor = donor_of_size(1.0);
    let p = DVec3::new(2.0, -1.0, 0.5);
    for mode in CountMode::ALL {
        assert_eq!(
            mode.resolve(&Segment::new(p, p), &donor, Axis::X, 3),
            Err(DistributeError::DegenerateSegment),
            "{mode:?}"
        );
    }
}

#[test]
fn flat_donor_fails_automatic_modes() {
    let donor = donor_of_size(1.0);
    for mode in [CountMode::ScaleUp, CountMode::ScaleDown, CountMode::NoScale] {
        assert_eq!(
            mode.resolve(&segment_of_length(3.0), &donor, Axis::Z, 3),
            Err(DistributeError::DegenerateDonor { axis: Axis::Z }),
            "{mode:?}"
        );
    }
}

#[test]
fn empty_donor_fails_automatic_modes() {
    assert_eq!(
        CountMode::ScaleDown.resolve(&segment_of_length(3.0), &[], Axis::X, 3),
        Err(DistributeError::EmptyMesh)
    );
}

#[test]
fn only_no_scale_skips_scaling() {
    assert!(CountMode::Fixed.applies_scale());
    assert!(CountMode::ScaleUp.applies_scale());
    assert!(CountMode::ScaleDown.applies_scale());
    assert!(!CountMode::NoScale.applies_scale());
}

#[test]
fn ratio_beyond_usize_fails_instead_of_saturating() {
    let donor = donor_of_size(1e-9);
    for mode in [CountMode::ScaleUp, CountMode::ScaleDown, CountMode::NoScale] {
        let result = mode.resolve(&segment_of_length(1e30), &donor, Axis::X, 3);
        assert!(
            matches!(result, Err(DistributeError::CountOverflow { ratio }) if ratio >= 1e38),
            "{mode:?}: {result:?}"
        );
    }
}

#[test]
fn infinite_ratio_fails() {
    let result = CountMode::ScaleDown.resolve(&segment_of_length(1e300), &donor_of_size(1e-9), Axis::X, 3);
    assert!(matches!(result, Err(DistributeError::CountOverflow { ratio }) if ratio.is_infinite()));
}
