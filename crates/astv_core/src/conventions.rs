//! Naming conventions shared by the emitters and the artifact writer.
//!
//! Generated code is compiled against by the destination crate, so every name here is part of a stable contract.
//! Changing one is a breaking change for existing consumers.

/// File holding the `Node` sum type and the handler traits.
pub const HANDLERS_FILE: &str = "handlers_gen.rs";

/// File holding `Visitor`, `Continuation` and `Shared`.
pub const VISITOR_FILE: &str = "visitor_gen.rs";

/// Module name the visitor artifact uses to reach the handlers artifact (`use super::handlers_gen::*;`).
pub const HANDLERS_MODULE: &str = "handlers_gen";

/// Suffix appended to a kind name to form its handler trait (`Ident` -> `IdentHandler`).
pub const HANDLER_TRAIT_SUFFIX: &str = "Handler";

/// Catch-all handler trait.
pub const DEFAULT_HANDLER_TRAIT: &str = "DefaultHandler";

/// The single method of [`DEFAULT_HANDLER_TRAIT`].
pub const DEFAULT_HANDLER_METHOD: &str = "handle";

/// Prefix of the per-kind handler slots on `Visitor` (`Ident` -> `h_ident`).
pub const SLOT_PREFIX: &str = "h_";

/// Slot holding the catch-all handler.
pub const DEFAULT_SLOT: &str = "h_default";

/// Prefix of the per-kind registration methods on `Visitor` (`Ident` -> `on_ident`).
pub const REGISTER_PREFIX: &str = "on_";

/// Registration method for the catch-all handler.
pub const DEFAULT_REGISTER_FN: &str = "on_default";

/// `Node` variant carrying nodes whose kind is not in the catalog.
pub const OTHER_VARIANT: &str = "Other";

/// Kind names that would collide with generated names (`DefaultHandler`, `Node::Other`).
pub const RESERVED_KIND_NAMES: &[&str] = &["Default", OTHER_VARIANT];

/// Rust path of the module defining the built-in catalog's node types.
pub const DEFAULT_AST_PATH: &str = "syn";

/// Name of the handler trait for `kind`.
pub fn handler_trait_name(kind: &str) -> String {
    format!("{kind}{HANDLER_TRAIT_SUFFIX}")
}

/// Whether `kind` collides with a generated name.
pub fn is_reserved_kind(kind: &str) -> bool {
    RESERVED_KIND_NAMES.contains(&kind)
}
