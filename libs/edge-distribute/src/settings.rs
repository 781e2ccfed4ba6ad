//! Per-call configuration for the distribution engine.
//!
//! Settings are an immutable value passed into each call, so concurrent
//! calls with different settings never interfere.

use config::constants::ALIGNMENT_EPSILON;
use serde::{Deserialize, Serialize};

use crate::axis::Axis;
use crate::count::CountMode;

/// What the batch driver does when one batch item fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FailurePolicy {
    /// Return the first failing item's error (in batch order).
    #[default]
    Abort,
    /// Log a warning and emit nothing for the failing item.
    Skip,
}

/// Immutable distribution settings.
///
/// Missing fields take their defaults when deserialized.
///
/// # Example
///
/// ```rust
/// use edge_distribute::{Axis, CountMode, Settings};
///
/// let settings = Settings::default()
///     .with_count_mode(CountMode::ScaleDown)
///     .with_axis(Axis::Z)
///     .with_scale_all_axes(true);
/// assert!(settings.apply_to_vertices);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Count resolution policy
    pub count_mode: CountMode,
    /// Donor axis mapped onto each segment
    pub axis: Axis,
    /// Scale all three axes instead of only `axis`
    pub scale_all_axes: bool,
    /// Transform donor vertices instead of duplicating them verbatim
    pub apply_to_vertices: bool,
    /// Per-item failure handling
    pub failure_policy: FailurePolicy,
    /// Process batch items on the rayon thread pool
    pub parallel: bool,
    /// Orientation solver alignment tolerance
    pub epsilon: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            count_mode: CountMode::default(),
            axis: Axis::default(),
            scale_all_axes: false,
            apply_to_vertices: true,
            failure_policy: FailurePolicy::default(),
            parallel: false,
            epsilon: ALIGNMENT_EPSILON,
        }
    }
}

impl Settings {
    /// Sets the count mode.
    pub fn with_count_mode(mut self, count_mode: CountMode) -> Self {
        self.count_mode = count_mode;
        self
    }

    /// Sets the orientation axis.
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    /// Sets uniform scaling.
    pub fn with_scale_all_axes(mut self, scale_all_axes: bool) -> Self {
        self.scale_all_axes = scale_all_axes;
        self
    }

    /// Sets whether donor vertices are transformed.
    pub fn with_apply_to_vertices(mut self, apply_to_vertices: bool) -> Self {
        self.apply_to_vertices = apply_to_vertices;
        self
    }

    /// Sets the failure policy.
    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    /// Enables or disables parallel batch processing.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}
