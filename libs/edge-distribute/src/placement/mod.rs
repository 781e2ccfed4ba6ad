//! # Placement Generation
//!
//! Places `count` donor instances along one segment. Each instance gets an
//! equal slot of the segment and sits at the slot's midpoint:
//!
//! ```text
//! start                                      end
//!   |----- slot 0 -----|----- slot 1 -----|----- slot 2 -----|
//!            o0                  o1                 o2
//! ```
//!
//! Instance transform, applied right to left:
//!
//! ```text
//! Translation(origin) · Rotation · Scale · AxisFlip
//! ```
//!
//! Everything but the translation depends only on the segment direction and
//! the settings, so it is built once per segment and shared by all instances.

use config::constants::{EPSILON, MIN_COUNT};
use glam::{DMat3, DMat4, DVec3};
use serde::Serialize;

use crate::axis::Axis;
use crate::error::{DistributeError, DistributeResult};
use crate::extent::nonzero_extent;
use crate::mesh::Segment;
use crate::orient::{axis_flip, orient};
use crate::settings::Settings;

/// Instances generated for one segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placement {
    /// One transform per instance, in origin order
    pub transforms: Vec<DMat4>,
    /// One vertex set per instance
    pub vertex_sets: Vec<Vec<DVec3>>,
    /// Instance origins along the segment
    pub origins: Vec<DVec3>,
    /// Scale factor applied to instances, `None` when scaling is disabled
    pub scale: Option<f64>,
}

impl Placement {
    /// Number of instances.
    #[inline]
    pub fn count(&self) -> usize {
        self.transforms.len()
    }
}

/// Midpoints of `count` equal slots of `segment`.
///
/// # Examples
/// ```
/// use edge_distribute::{placement::origins, Segment};
/// use glam::DVec3;
///
/// let seg = Segment::new(DVec3::ZERO, DVec3::new(3.0, 0.0, 0.0));
/// let xs: Vec<f64> = origins(&seg, 3).iter().map(|o| o.x).collect();
/// assert_eq!(xs, vec![0.5, 1.5, 2.5]);
/// ```
pub fn origins(segment: &Segment, count: usize) -> Vec<DVec3> {
    let n = count as f64;
    let direction = segment.direction();
    (0..count)
        .map(|k| segment.start + direction * (k as f64 + 0.5) / n)
        .collect()
}

/// Scale matrix for an optional factor.
///
/// `None` is the identity. Otherwise the factor applies to every axis when
/// `all_axes` is set, or to `axis` alone.
pub fn scale_matrix(factor: Option<f64>, axis: Axis, all_axes: bool) -> DMat4 {
    match factor {
        None => DMat4::IDENTITY,
        Some(s) if all_axes => DMat4::from_scale(DVec3::splat(s)),
        Some(s) => DMat4::from_scale(axis.splat_one_except(s)),
    }
}

/// Rotation · Scale · AxisFlip shared by every instance on a segment.
fn instance_basis(direction: DVec3, scale: Option<f64>, settings: &Settings) -> DMat4 {
    let axis = settings.axis;
    let rotation: DMat3 = orient(axis.unit(), direction, settings.epsilon);
    DMat4::from_mat3(rotation)
        * scale_matrix(scale, axis, settings.scale_all_axes)
        * DMat4::from_mat3(axis_flip(axis))
}

/// Generates `count` instances of the donor along `segment`.
///
/// The scale factor is `(length / count) / extent` along the settings axis
/// unless the count mode disables scaling. A zero `count` is clamped to one.
///
/// # Examples
/// ```
/// use edge_distribute::{placement::place, CountMode, Segment, Settings};
/// use glam::DVec3;
///
/// let seg = Segment::new(DVec3::ZERO, DVec3::new(3.5, 0.0, 0.0));
/// let donor = [DVec3::new(-0.5, 0.0, 0.0), DVec3::new(0.5, 0.0, 0.0)];
/// let settings = Settings::default().with_count_mode(CountMode::ScaleDown);
///
/// let placement = place(&seg, &donor, 4, &settings).unwrap();
/// assert_eq!(placement.count(), 4);
/// assert_eq!(placement.scale, Some(0.875));
/// ```
pub fn place(
    segment: &Segment,
    donor_vertices: &[DVec3],
    count: usize,
    settings: &Settings,
) -> DistributeResult<Placement> {
    if segment.is_degenerate(EPSILON) {
        return Err(DistributeError::DegenerateSegment);
    }
    let count = count.max(MIN_COUNT);
    let direction = segment.direction();

    let scale = if settings.count_mode.applies_scale() {
        let step = direction.length() / count as f64;
        let donor_size = nonzero_extent(donor_vertices, settings.axis, EPSILON)?;
        Some(step / donor_size)
    } else {
        None
    };

    let basis = instance_basis(direction, scale, settings);
    let origins = origins(segment, count);
    let transforms: Vec<DMat4> = origins
        .iter()
        .map(|origin| DMat4::from_translation(*origin) * basis)
        .collect();

    let vertex_sets = if settings.apply_to_vertices {
        transforms
            .iter()
            .map(|m| donor_vertices.iter().map(|v| m.transform_point3(*v)).collect())
            .collect()
    } else {
        vec![donor_vertices.to_vec(); count]
    };

    Ok(Placement {
        transforms,
        vertex_sets,
        origins,
        scale,
    })
}

#[cfg(test)]
mod tests;
