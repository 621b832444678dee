//! Provide the pure vocabulary the `astv` generator is built on.
//!
//! This crate is intentionally small and dependency-free. It owns:
//! - the built-in node-kind catalog (syn 2.x syntax-tree types) and catalog resolution,
//! - the naming conventions shared by the emitters and the artifact writer,
//! - the Rust keyword table used to escape generated identifiers.
//!
//! ## Notes
//!
//! - **No IO**, no global state, no code generation. Validation of caller-supplied catalogs lives in the `astv`
//!   crate, which can lean on `syn` to decide what a Rust identifier is.
//!
//! ## Examples
//! ```rust
//! use astv_core::catalog::{self, CatalogSource};
//!
//! let catalog = catalog::resolve_catalog(&[]);
//! assert_eq!(catalog.source(), CatalogSource::Builtin);
//! assert!(catalog.kinds().iter().any(|k| k == "ExprCall"));
//! ```

pub mod catalog;
pub mod conventions;
pub mod rust_keywords;
