//! astv backend
//!
//! Turns a node-kind catalog into the generated handlers and visitor files.
//!
//! The pipeline is:
//! 1. Catalog → `ir::lower` → `VisitorIr` (validated, every generated name derived)
//! 2. `VisitorIr` → `ir::emit` → one token stream per artifact
//! 3. Artifacts → `writer` → `handlers_gen.rs`, `visitor_gen.rs`
//!
//! ## Module Organization
//!
//! - `ir/` - IR, catalog lowering, emitters and the codegen facade
//! - `writer.rs` - rendering (optionally via `prettyplease`) and file output
//! - `pipeline.rs` - a complete run, including module resolution

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod ir;
pub mod pipeline;
pub mod writer;

pub use ir::codegen::GenerationError;
pub use ir::{ArtifactKind, GeneratedArtifact, GeneratedArtifacts, VisitorCodegen};
pub use pipeline::{GenerateOptions, RunError, run_generation};
pub use writer::{ArtifactWriter, WriteError};
