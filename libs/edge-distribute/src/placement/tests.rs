//! Tests for placement generation.

use super::*;
use crate::count::CountMode;
use crate::extent::bounds;
use approx::assert_relative_eq;

/// Box centered on the origin, 1 × 0.5 × 0.25.
fn donor() -> Vec<DVec3> {
    vec![
        DVec3::new(-0.5, -0.25, -0.125),
        DVec3::new(0.5, -0.25, -0.125),
        DVec3::new(0.5, 0.25, -0.125),
        DVec3::new(-0.5, 0.25, 0.125),
    ]
}

fn x_segment(length: f64) -> Segment {
    Segment::new(DVec3::ZERO, DVec3::new(length, 0.0, 0.0))
}

#[test]
fn origins_are_slot_midpoints() {
    let origins = origins(&x_segment(3.0), 3);
    assert_eq!(
        origins,
        vec![
            DVec3::new(0.5, 0.0, 0.0),
            DVec3::new(1.5, 0.0, 0.0),
            DVec3::new(2.5, 0.0, 0.0),
        ]
    );
}

#[test]
fn origins_follow_offset_segment() {
    let seg = Segment::new(DVec3::new(1.0, 1.0, 1.0), DVec3::new(1.0, 1.0, 5.0));
    let origins = origins(&seg, 2);
    assert_eq!(origins, vec![DVec3::new(1.0, 1.0, 2.0), DVec3::new(1.0, 1.0, 4.0)]);
}

#[test]
fn output_lengths_match_count() {
    for count in [1, 2, 7] {
        let placement = place(&x_segment(3.0), &donor(), count, &Settings::default()).unwrap();
        assert_eq!(placement.transforms.len(), count);
        assert_eq!(placement.vertex_sets.len(), count);
        assert_eq!(placement.origins.len(), count);
        for set in &placement.vertex_sets {
            assert_eq!(set.len(), donor().len());
        }
    }
}

#[test]
fn zero_count_is_clamped() {
    let placement = place(&x_segment(3.0), &donor(), 0, &Settings::default()).unwrap();
    assert_eq!(placement.count(), 1);
}

#[test]
fn scale_up_keeps_natural_size() {
    let settings = Settings::default().with_count_mode(CountMode::ScaleUp);
    let placement = place(&x_segment(3.0), &donor(), 3, &settings).unwrap();
    assert_relative_eq!(placement.scale.unwrap(), 1.0);
}

#[test]
fn scaled_instances_tile_the_segment() {
    let settings = Settings::default().with_count_mode(CountMode::ScaleDown);
    let placement = place(&x_segment(3.5), &donor(), 4, &settings).unwrap();
    assert_relative_eq!(placement.scale.unwrap(), 0.875);

    for (k, set) in placement.vertex_sets.iter().enumerate() {
        let (lo, hi) = bounds(set, Axis::X).unwrap();
        assert_relative_eq!(lo, 0.875 * k as f64, epsilon = 1e-12);
        assert_relative_eq!(hi, 0.875 * (k + 1) as f64, epsilon = 1e-12);
    }
}

#[test]
fn no_scale_keeps_donor_size_and_undercovers() {
    let settings = Settings::default().with_count_mode(CountMode::NoScale);
    let placement = place(&x_segment(3.5), &donor(), 3, &settings).unwrap();
    assert_eq!(placement.scale, None);

    let mut covered = 0.0;
    for set in &placement.vertex_sets {
        let (lo, hi) = bounds(set, Axis::X).unwrap();
        covered += hi - lo;
    }
    assert_relative_eq!(covered, 3.0, epsilon = 1e-12);
}

#[test]
fn no_scale_accepts_flat_donor() {
    let flat = vec![DVec3::new(0.0, -1.0, 0.0), DVec3::new(0.0, 1.0, 0.0)];
    let settings = Settings::default().with_count_mode(CountMode::NoScale);
    assert!(place(&x_segment(2.0), &flat, 2, &settings).is_ok());
}

#[test]
fn scaling_flat_donor_fails() {
    let flat = vec![DVec3::new(0.0, -1.0, 0.0), DVec3::new(0.0, 1.0, 0.0)];
    assert_eq!(
        place(&x_segment(2.0), &flat, 2, &Settings::default()),
        Err(DistributeError::DegenerateDonor { axis: Axis::X })
    );
}

#[test]
fn anisotropic_scale_leaves_cross_section() {
    let placement = place(&x_segment(6.0), &donor(), 3, &Settings::default()).unwrap();
    let (lo, hi) = bounds(&placement.vertex_sets[0], Axis::Y).unwrap();
    assert_relative_eq!(hi - lo, 0.5, epsilon = 1e-12);
}

#[test]
fn uniform_scale_grows_cross_section() {
    let settings = Settings::default().with_scale_all_axes(true);
    let placement = place(&x_segment(6.0), &donor(), 3, &settings).unwrap();
    let (lo, hi) = bounds(&placement.vertex_sets[0], Axis::Y).unwrap();
    assert_relative_eq!(hi - lo, 1.0, epsilon = 1e-12);
}

#[test]
fn unapplied_vertices_are_duplicated_verbatim() {
    let settings = Settings::default().with_apply_to_vertices(false);
    let placement = place(&x_segment(5.0), &donor(), 2, &settings).unwrap();
    assert_eq!(placement.vertex_sets, vec![donor(), donor()]);
    assert_ne!(placement.transforms[0], DMat4::IDENTITY);
}

#[test]
fn donor_axis_runs_along_segment_for_any_direction() {
    let directions = [
        DVec3::new(2.0, 0.0, 0.0),
        DVec3::new(-2.0, 0.0, 0.0),
        DVec3::new(0.0, 3.0, 0.0),
        DVec3::new(1.0, -2.0, 2.0),
    ];
    for axis in Axis::ALL {
        let settings = Settings::default().with_axis(axis);
        let donor: Vec<DVec3> = vec![axis.unit() * -0.5, axis.unit() * 0.5];
        for d in directions {
            let seg = Segment::new(DVec3::new(1.0, 2.0, 3.0), DVec3::new(1.0, 2.0, 3.0) + d);
            let placement = place(&seg, &donor, 2, &settings).unwrap();
            let s = placement.scale.unwrap();
            let mapped = placement.transforms[0].transform_vector3(axis.unit());
            // The flip reverses the donor axis against the segment direction.
            let expected = -d.normalize() * s;
            assert_relative_eq!(mapped.x, expected.x, epsilon = 1e-9);
            assert_relative_eq!(mapped.y, expected.y, epsilon = 1e-9);
            assert_relative_eq!(mapped.z, expected.z, epsilon = 1e-9);
        }
    }
}

#[test]
fn instances_are_centered_on_origins() {
    let seg = Segment::new(DVec3::ZERO, DVec3::new(0.0, 3.0, 4.0));
    let placement = place(&seg, &donor(), 5, &Settings::default()).unwrap();
    for (m, origin) in placement.transforms.iter().zip(&placement.origins) {
        let center = m.transform_point3(DVec3::ZERO);
        assert_relative_eq!((center - *origin).length(), 0.0, epsilon = 1e-12);
    }
}

#[test]
fn degenerate_segment_fails() {
    let p = DVec3::ONE;
    assert_eq!(
        place(&Segment::new(p, p), &donor(), 3, &Settings::default()),
        Err(DistributeError::DegenerateSegment)
    );
}

#[test]
fn short_segment_is_oriented_by_direction() {
    let seg = Segment::new(DVec3::ZERO, DVec3::new(0.0, 5e-10, 0.0));
    let placement = place(&seg, &donor(), 1, &Settings::default()).unwrap();
    let mapped = placement.transforms[0].transform_vector3(DVec3::X).normalize();
    assert_relative_eq!(mapped.y, -1.0, epsilon = 1e-9);
    assert_relative_eq!(mapped.x, 0.0, epsilon = 1e-9);
}
