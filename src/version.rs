//! astv version information.
//!
//! This module exposes the generator version as a single constant so the CLI and the generated file headers agree
//! on the same value.
//!
//! ## Notes
//!
//! - The value is taken from Cargo metadata (`CARGO_PKG_VERSION`) at compile time.

/// The astv version string (for example, `0.1.0`).
pub const ASTV_VERSION: &str = env!("CARGO_PKG_VERSION");
