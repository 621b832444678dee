//! astv frontend
//!
//! Everything that reads the destination side of a run:
//! - `manifest`: module context resolution from Cargo manifests

pub mod manifest;

pub use manifest::{CargoModuleResolver, ModuleId, ModuleResolver, ResolutionError};
