//! Donor orientation axis selector.

use std::fmt;

use config::constants::DEFAULT_AXIS_INDEX;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Local donor axis used both for extent measurement and for orientation.
///
/// The selected axis is the one mapped onto the target segment and, when
/// scaling is anisotropic, the only axis that gets scaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Donor X axis
    X,
    /// Donor Y axis
    Y,
    /// Donor Z axis
    Z,
}

impl Axis {
    /// All axes in index order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns the axis for a component index (0 = X, 1 = Y, 2 = Z).
    ///
    /// # Examples
    /// ```
    /// use edge_distribute::Axis;
    /// assert_eq!(Axis::from_index(2), Some(Axis::Z));
    /// assert_eq!(Axis::from_index(3), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Component index of this axis.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Axis::X => 0,
            Axis::Y => 1,
            Axis::Z => 2,
        }
    }

    /// Unit basis vector along this axis.
    #[inline]
    pub fn unit(self) -> DVec3 {
        match self {
            Axis::X => DVec3::X,
            Axis::Y => DVec3::Y,
            Axis::Z => DVec3::Z,
        }
    }

    /// Extracts this axis' component of `v`.
    #[inline]
    pub fn component(self, v: DVec3) -> f64 {
        match self {
            Axis::X => v.x,
            Axis::Y => v.y,
            Axis::Z => v.z,
        }
    }

    /// Vector of ones with `value` substituted on this axis.
    ///
    /// # Examples
    /// ```
    /// use edge_distribute::Axis;
    /// use glam::DVec3;
    /// assert_eq!(Axis::Y.splat_one_except(2.0), DVec3::new(1.0, 2.0, 1.0));
    /// ```
    pub fn splat_one_except(self, value: f64) -> DVec3 {
        let mut v = DVec3::ONE;
        v[self.index()] = value;
        v
    }
}

impl Default for Axis {
    fn default() -> Self {
        Axis::from_index(DEFAULT_AXIS_INDEX).unwrap_or(Axis::X)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Axis::X => "X",
            Axis::Y => "Y",
            Axis::Z => "Z",
        };
        f.write_str(name)
    }
}
