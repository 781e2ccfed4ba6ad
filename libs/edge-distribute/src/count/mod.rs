//! # Count Resolution
//!
//! Decides how many donor instances are placed along one segment.
//!
//! | Mode        | Count                       | Instance scale          |
//! |-------------|-----------------------------|-------------------------|
//! | `Fixed`     | requested                   | fitted to the slot      |
//! | `ScaleUp`   | `floor(length / extent)`    | ≥ natural size          |
//! | `ScaleDown` | `ceil(length / extent)`     | ≤ natural size          |
//! | `NoScale`   | `floor(length / extent)`    | natural size, unscaled  |
//!
//! Every result is clamped to at least [`MIN_COUNT`].

use config::constants::{COUNT_SNAP_EPSILON, EPSILON, MIN_COUNT};
use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::error::{DistributeError, DistributeResult};
use crate::extent::nonzero_extent;
use crate::mesh::Segment;

/// Policy deciding the number of instances per segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CountMode {
    /// Use the requested count.
    #[default]
    Fixed,
    /// As many whole natural-size copies as fit; instances grow to fill.
    ScaleUp,
    /// Just enough copies to cover the segment; instances shrink to fit.
    ScaleDown,
    /// Whole natural-size copies that fit, placed without any scaling.
    NoScale,
}

impl CountMode {
    /// All modes.
    pub const ALL: [CountMode; 4] = [
        CountMode::Fixed,
        CountMode::ScaleUp,
        CountMode::ScaleDown,
        CountMode::NoScale,
    ];

    /// False only for [`CountMode::NoScale`].
    #[inline]
    pub fn applies_scale(self) -> bool {
        !matches!(self, CountMode::NoScale)
    }

    /// Resolves the instance count for one segment, clamped to at least one.
    ///
    /// A degenerate segment fails for every mode, before the donor is looked
    /// at. Automatic modes additionally need a donor with nonzero extent
    /// along `axis`, and a ratio small enough to count in a `usize`.
    ///
    /// # Examples
    /// ```
    /// use edge_distribute::{Axis, CountMode, Segment};
    /// use glam::DVec3;
    ///
    /// let segment = Segment::new(DVec3::ZERO, DVec3::new(3.5, 0.0, 0.0));
    /// let donor = [DVec3::new(-0.5, 0.0, 0.0), DVec3::new(0.5, 0.0, 0.0)];
    ///
    /// assert_eq!(CountMode::ScaleUp.resolve(&segment, &donor, Axis::X, 0).unwrap(), 3);
    /// assert_eq!(CountMode::ScaleDown.resolve(&segment, &donor, Axis::X, 0).unwrap(), 4);
    /// assert_eq!(CountMode::Fixed.resolve(&segment, &donor, Axis::X, 7).unwrap(), 7);
    /// ```
    pub fn resolve(
        self,
        segment: &Segment,
        donor_vertices: &[DVec3],
        axis: Axis,
        requested_count: i64,
    ) -> DistributeResult<usize> {
        if segment.is_degenerate(EPSILON) {
            return Err(DistributeError::DegenerateSegment);
        }

        let count = match self {
            CountMode::Fixed => usize::try_from(requested_count).unwrap_or(0),
            CountMode::ScaleUp | CountMode::NoScale => {
                let ratio = fit_ratio(segment, donor_vertices, axis)?;
                to_count(ratio.floor())?
            }
            CountMode::ScaleDown => {
                let ratio = fit_ratio(segment, donor_vertices, axis)?;
                to_count(ratio.ceil())?
            }
        };

        Ok(count.max(MIN_COUNT))
    }
}

/// `length / extent`, snapped to the nearest integer when within tolerance.
fn fit_ratio(segment: &Segment, donor_vertices: &[DVec3], axis: Axis) -> DistributeResult<f64> {
    let donor_size = nonzero_extent(donor_vertices, axis, EPSILON)?;
    Ok(snap(segment.length() / donor_size))
}

/// Converts a rounded ratio to a count, rejecting values `usize` cannot hold.
fn to_count(rounded: f64) -> DistributeResult<usize> {
    if rounded.is_finite() && rounded < usize::MAX as f64 {
        Ok(rounded as usize)
    } else {
        Err(DistributeError::CountOverflow { ratio: rounded })
    }
}

fn snap(ratio: f64) -> f64 {
    let nearest = ratio.round();
    if (ratio - nearest).abs() <= COUNT_SNAP_EPSILON {
        nearest
    } else {
        ratio
    }
}

#[cfg(test)]
mod tests;
