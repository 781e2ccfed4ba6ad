//! # Configuration Constants
//!
//! Centralized constants for the edge distribution engine. Every tolerance
//! and default used by the count resolver, orientation solver and batch
//! driver is defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Counts**: Default and minimum instance counts
//! - **Orientation**: Default donor orientation axis

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for zero-length and zero-extent tests.
///
/// A target segment whose length is at or below this value is degenerate, as
/// is a donor whose extent along the orientation axis is at or below it.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn is_degenerate(length: f64) -> bool {
///     length <= EPSILON
/// }
///
/// assert!(is_degenerate(0.0));
/// assert!(!is_degenerate(1e-6));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Relative tolerance for the orientation solver's "already aligned" test.
///
/// The Householder vector `u = d - |d|·e` is compared against
/// `ALIGNMENT_EPSILON · |d|`. The bound scales with the segment, so short
/// segments are judged by direction alone. Below it the direction is treated
/// as parallel to the reference axis and no reflection is built.
///
/// # Example
///
/// ```rust
/// use config::constants::{ALIGNMENT_EPSILON, EPSILON};
///
/// assert!(ALIGNMENT_EPSILON >= EPSILON);
/// ```
pub const ALIGNMENT_EPSILON: f64 = 1e-9;

/// Snap tolerance applied to `length / extent` before `floor`/`ceil`.
///
/// Ratios such as `0.3 / 0.1` evaluate to `2.9999999999999996` in f64; a
/// ratio within this distance of an integer resolves to that integer.
///
/// # Example
///
/// ```rust
/// use config::constants::COUNT_SNAP_EPSILON;
///
/// let ratio: f64 = 0.3 / 0.1;
/// let snapped = if (ratio - ratio.round()).abs() <= COUNT_SNAP_EPSILON {
///     ratio.round()
/// } else {
///     ratio
/// };
/// assert_eq!(snapped.floor(), 3.0);
/// ```
pub const COUNT_SNAP_EPSILON: f64 = 1e-9;

// =============================================================================
// COUNT CONSTANTS
// =============================================================================

/// Requested instance count used when the host supplies none.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_COUNT;
///
/// assert_eq!(DEFAULT_COUNT, 3);
/// ```
pub const DEFAULT_COUNT: i64 = 3;

/// Lower bound every resolved instance count is clamped to.
///
/// A resolver formula may yield zero (segment shorter than the donor) or a
/// caller may request a non-positive count; neither produces empty output.
///
/// # Example
///
/// ```rust
/// use config::constants::MIN_COUNT;
///
/// let resolved = 0usize.max(MIN_COUNT);
/// assert_eq!(resolved, 1);
/// ```
pub const MIN_COUNT: usize = 1;

// =============================================================================
// ORIENTATION CONSTANTS
// =============================================================================

/// Index of the default donor orientation axis (0 = X, 1 = Y, 2 = Z).
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_AXIS_INDEX;
///
/// assert!(DEFAULT_AXIS_INDEX < 3);
/// ```
pub const DEFAULT_AXIS_INDEX: usize = 0;
