#![forbid(unsafe_code)]
//! astv: visitor/handler dispatch generator for Rust syntax trees
//!
//! Given a catalog of node kinds, astv writes two files into a destination module:
//!
//! - `handlers_gen.rs`: a `Node<'ast>` sum type and one handler trait per kind, plus `DefaultHandler`
//! - `visitor_gen.rs`: a `Visitor<'h>` that routes each node to the handler registered for its kind, falling back to
//!   the catch-all, and reports whether traversal should descend
//!
//! The generator never walks a syntax tree itself; the generated code does, inside the consumer's crate.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod backend;
pub mod cli;
pub mod frontend;
pub mod version;

pub use backend::{GenerateOptions, RunError, VisitorCodegen, run_generation};
pub use frontend::{CargoModuleResolver, ModuleResolver};
