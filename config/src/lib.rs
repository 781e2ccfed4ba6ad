//! # Config Crate
//!
//! Centralized configuration constants for the edge distribution engine.
//! All tolerances and defaults are defined here so the engine crate never
//! scatters literals through its numerical code.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_COUNT, EPSILON, MIN_COUNT};
//!
//! // Zero-length test for a target segment
//! let length: f64 = 1e-12;
//! assert!(length <= EPSILON);
//!
//! // Unconnected count input falls back to the default
//! let requested: Option<i64> = None;
//! assert_eq!(requested.unwrap_or(DEFAULT_COUNT), 3);
//! assert!(DEFAULT_COUNT >= MIN_COUNT as i64);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Host Compatible**: Defaults match what the host node shows when an
//!   input socket is left unconnected

pub mod constants;
