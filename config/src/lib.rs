//! # Config Crate
//!
//! Centralized configuration constants for the shape mesh generators.
//! Tessellation limits, the fixed topology of the built-in shapes, float
//! tolerances and the default view used by the transform helpers all live
//! here so the generator crate never scatters literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_SPHERE_SLICES, MIN_SPHERE_SLICES};
//!
//! let requested: Option<u32> = None;
//! let slices = requested.unwrap_or(DEFAULT_SPHERE_SLICES);
//! assert!(slices >= MIN_SPHERE_SLICES);
//! assert_eq!(slices % 2, 0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Plain constants plus one validated value type

pub mod constants;
