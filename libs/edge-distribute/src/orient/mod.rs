//! # Orientation Solver
//!
//! Maps the donor's reference axis onto a target direction with a single
//! Householder reflection instead of an angle/axis rotation. The angle/axis
//! form degenerates near 0° and 180°; the reflection only needs one
//! normalization and one rank-1 update.
//!
//! ## Construction
//!
//! ```text
//! alpha = |d|
//! u     = d - alpha·e
//! v     = u / |u|
//! H     = I - 2·v·vᵀ        (H·e = d / alpha, H = H⁻¹)
//! ```
//!
//! `H` is a reflection (`det = -1`). Placement composes it with the fixed
//! [`axis_flip`] reflection so the instance transform has `det = +1`. The two
//! reflections are kept as separate values.

use glam::{DMat3, DVec3};

use crate::axis::Axis;

/// Householder reflection `I - 2·v·vᵀ` for a unit vector `v`.
///
/// # Examples
/// ```
/// use edge_distribute::orient::householder;
/// use glam::DVec3;
///
/// let h = householder(DVec3::Z);
/// assert_eq!(h * DVec3::new(1.0, 2.0, 3.0), DVec3::new(1.0, 2.0, -3.0));
/// ```
pub fn householder(v: DVec3) -> DMat3 {
    let outer = DMat3::from_cols(v * v.x, v * v.y, v * v.z);
    DMat3::IDENTITY - outer * 2.0
}

/// Linear map taking `reference_axis` onto the orientation of `direction`.
///
/// Returns the inverse of the Householder reflection built from
/// `direction - |direction|·reference_axis`; the reflection is an involution
/// so the inverse is the reflection itself. When that vector is shorter than
/// `epsilon · |direction|` the direction is already aligned and the
/// identity is returned.
///
/// `reference_axis` must be a unit vector.
///
/// # Examples
/// ```
/// use edge_distribute::orient::orient;
/// use glam::{DMat3, DVec3};
///
/// let r = orient(DVec3::X, DVec3::new(0.0, 4.0, 0.0), 1e-9);
/// assert!((r * DVec3::X - DVec3::Y).length() < 1e-12);
///
/// assert_eq!(orient(DVec3::X, DVec3::new(2.0, 0.0, 0.0), 1e-9), DMat3::IDENTITY);
/// ```
pub fn orient(reference_axis: DVec3, direction: DVec3, epsilon: f64) -> DMat3 {
    let alpha = direction.length();
    let u = direction - reference_axis * alpha;
    let norm = u.length();
    if norm <= epsilon * alpha {
        return DMat3::IDENTITY;
    }
    let reflection = householder(u / norm);
    reflection.inverse()
}

/// Fixed reflection negating the `axis` component.
///
/// Composed after the solver's reflection to cancel its determinant.
///
/// # Examples
/// ```
/// use edge_distribute::{orient::axis_flip, Axis};
/// use glam::DVec3;
///
/// assert_eq!(axis_flip(Axis::Y) * DVec3::ONE, DVec3::new(1.0, -1.0, 1.0));
/// ```
pub fn axis_flip(axis: Axis) -> DMat3 {
    DMat3::from_diagonal(axis.splat_one_except(-1.0))
}
