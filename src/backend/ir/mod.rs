//! Structured Intermediate Representation (IR) for the generated dispatch layer
//!
//! The IR sits between the node-kind catalog and Rust code emission. It holds every name the emitters need, derived
//! once during lowering:
//!
//! - **Validated**: duplicate, empty, reserved and non-identifier kinds never reach emission
//! - **Pre-named**: trait, method, slot, variant and registration names are computed in one place
//! - **Renderer-agnostic**: emitters turn it into `syn`/`quote` tokens; formatting is the writer's job
//!
//! ## Pipeline
//!
//! ```text
//! Catalog → CatalogLowering → VisitorIr → IrEmitter (quote!) → GeneratedArtifact → ArtifactWriter
//! ```

pub mod codegen;
pub mod emit;
pub mod lower;

pub use codegen::{ArtifactKind, GeneratedArtifact, GeneratedArtifacts, VisitorCodegen};
pub use emit::{EmitError, IrEmitter};
pub use lower::{CatalogError, CatalogErrors, CatalogLowering};

/// One catalog entry with all of its generated names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindIr {
    /// Kind name as given in the catalog; also the `Node` variant and the node type's last path segment.
    pub name: String,
    /// Handler trait (`IdentHandler`).
    pub handler_trait: String,
    /// Handler method, keyword-escaped (`ident`, `r#type`).
    pub method: String,
    /// `Visitor` slot field (`h_ident`).
    pub slot: String,
    /// `Visitor` registration method (`on_ident`).
    pub register_fn: String,
}

/// A lowered catalog, ready for emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisitorIr {
    /// Module identifier stamped into both artifact headers.
    pub module_id: String,
    /// Rust path of the module defining the node types (`syn`, `crate::ast`).
    pub ast_path: String,
    /// Catalog entries in emission order.
    pub kinds: Vec<KindIr>,
}

impl VisitorIr {
    /// Number of handler slots on the generated `Visitor` (one per kind plus the catch-all).
    pub fn slot_count(&self) -> usize {
        self.kinds.len() + 1
    }
}
