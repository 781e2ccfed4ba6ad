//! # Extent Measurement
//!
//! Donor bounding extent along a single axis. The extent is the donor's
//! natural size along the orientation axis and drives both count resolution
//! and the per-instance scale factor.

use glam::DVec3;

use crate::axis::Axis;
use crate::error::{DistributeError, DistributeResult};

/// Returns `(min, max)` of the `axis` component over `vertices`.
///
/// Fails with [`DistributeError::EmptyMesh`] when `vertices` is empty.
pub fn bounds(vertices: &[DVec3], axis: Axis) -> DistributeResult<(f64, f64)> {
    let mut components = vertices.iter().map(|v| axis.component(*v));
    let first = components.next().ok_or(DistributeError::EmptyMesh)?;
    Ok(components.fold((first, first), |(lo, hi), c| (lo.min(c), hi.max(c))))
}

/// Returns `max - min` of the `axis` component over `vertices`.
///
/// # Examples
/// ```
/// use edge_distribute::{extent::extent, Axis};
/// use glam::DVec3;
///
/// let donor = [DVec3::new(-0.5, 0.0, 2.0), DVec3::new(0.5, 3.0, 2.0)];
/// assert_eq!(extent(&donor, Axis::X).unwrap(), 1.0);
/// assert_eq!(extent(&donor, Axis::Z).unwrap(), 0.0);
/// ```
pub fn extent(vertices: &[DVec3], axis: Axis) -> DistributeResult<f64> {
    let (lo, hi) = bounds(vertices, axis)?;
    Ok(hi - lo)
}

/// Like [`extent`], but rejects a donor that is flat along `axis`.
///
/// An extent at or below `epsilon` fails with
/// [`DistributeError::DegenerateDonor`].
pub fn nonzero_extent(vertices: &[DVec3], axis: Axis, epsilon: f64) -> DistributeResult<f64> {
    let size = extent(vertices, axis)?;
    if size <= epsilon {
        return Err(DistributeError::DegenerateDonor { axis });
    }
    Ok(size)
}
