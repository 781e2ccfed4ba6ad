//! # Edge Distribute
//!
//! Distributes copies of a donor mesh along target edges. For every edge the
//! engine decides how many instances fit, builds one affine transform per
//! instance and optionally applies it to the donor vertices.
//!
//! ## Architecture
//!
//! ```text
//! BatchInput → broadcast → count → placement → orient → Distribution
//! ```
//!
//! - **broadcast**: aligns parallel inputs by repeating their last entry
//! - **extent**: donor size along the orientation axis
//! - **count**: `Fixed` / `ScaleUp` / `ScaleDown` / `NoScale` policies
//! - **orient**: Householder reflection plus a fixed axis flip
//! - **placement**: slot-centered origins and per-instance transforms
//! - **batch**: drives the above over a whole batch
//!
//! The engine is pure: no host state, no I/O, no global configuration. All
//! geometry is `f64` (`glam::DVec3` / `glam::DMat4`).
//!
//! ## Usage
//!
//! ```rust
//! use edge_distribute::{distribute, Axis, BatchInput, CountMode, Recipients, Settings};
//! use glam::DVec3;
//!
//! let donor = vec![DVec3::new(-0.5, 0.0, 0.0), DVec3::new(0.5, 0.0, 0.0)];
//! let input = BatchInput::new(
//!     vec![donor],
//!     Recipients::segment(DVec3::ZERO, DVec3::new(3.5, 0.0, 0.0)),
//! );
//! let settings = Settings::default()
//!     .with_count_mode(CountMode::ScaleDown)
//!     .with_axis(Axis::X);
//!
//! let out = distribute(&input, &settings).unwrap();
//! assert_eq!(out.instance_count(), 4);
//! ```

pub mod axis;
pub mod batch;
pub mod broadcast;
pub mod count;
pub mod error;
pub mod extent;
pub mod mesh;
pub mod orient;
pub mod placement;
pub mod settings;

pub use axis::Axis;
pub use batch::{distribute, BatchInput, BatchItem, Distribution, Recipients};
pub use count::CountMode;
pub use error::{DistributeError, DistributeResult};
pub use mesh::{Edge, Face, Mesh, Segment};
pub use placement::Placement;
pub use settings::{FailurePolicy, Settings};
