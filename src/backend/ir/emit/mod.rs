//! Emit Rust source code from the visitor IR.
//!
//! This module defines [`IrEmitter`] and wires together the two artifact emitters. The heavy lifting lives in those
//! submodules; `mod.rs` holds the shared identifier and path helpers.
//!
//! ## Notes
//! - Emission produces a `TokenStream` per artifact. Pretty-printing (`syn` + `prettyplease`) happens in the artifact
//!   writer, so emitted text stays byte-stable regardless of the formatting flag.
//! - Emission is codegen-only: it does not read/write files or access the network.
//!
//! ## See also
//! - [`handlers`]: `Node` sum type and handler traits
//! - [`visitor`]: `Continuation`, `Shared`, `Visitor` and its dispatch

mod errors;
mod handlers;
mod visitor;

pub use errors::EmitError;

use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

use super::{KindIr, VisitorIr};

/// Emit Rust source code from the visitor IR.
///
/// ## Notes
/// - The public API is [`IrEmitter::emit_handlers`] (in `handlers.rs`) and [`IrEmitter::emit_visitor`] (in
///   `visitor.rs`).
/// - The AST type path is parsed once, up front; every other name in the IR was validated during lowering.
pub struct IrEmitter<'a> {
    ir: &'a VisitorIr,
    /// Parsed `ir.ast_path`.
    ast_path: syn::Path,
}

impl<'a> IrEmitter<'a> {
    /// Create an emitter for `ir`.
    ///
    /// ## Errors
    /// - [`EmitError::InvalidAstPath`] if the AST path does not parse as a Rust path.
    /// - [`EmitError::Unsupported`] if the AST path carries generic arguments.
    pub fn new(ir: &'a VisitorIr) -> Result<Self, EmitError> {
        let ast_path = parse_ast_path(&ir.ast_path)?;
        Ok(Self { ir, ast_path })
    }

    pub fn ir(&self) -> &VisitorIr {
        self.ir
    }

    /// Header comment stamped at the top of both artifacts.
    pub fn header(&self) -> String {
        format!(
            "// Code generated by astv v{} for module `{}`. DO NOT EDIT.",
            crate::version::ASTV_VERSION,
            self.ir.module_id
        )
    }

    /// Fully qualified node type for `kind` (`syn::ExprCall`).
    fn node_type(&self, kind: &KindIr) -> TokenStream {
        let path = &self.ast_path;
        let name = ident(&kind.name);
        quote! { #path::#name }
    }
}

/// Build an identifier, honoring the `r#` prefix of escaped keywords.
pub(crate) fn ident(name: &str) -> Ident {
    match name.strip_prefix("r#") {
        Some(raw) => Ident::new_raw(raw, Span::call_site()),
        None => Ident::new(name, Span::call_site()),
    }
}

fn parse_ast_path(path: &str) -> Result<syn::Path, EmitError> {
    let parsed = syn::parse_str::<syn::Path>(path).map_err(|e| EmitError::InvalidAstPath {
        path: path.to_string(),
        message: e.to_string(),
    })?;
    if parsed.segments.iter().any(|s| !s.arguments.is_none()) {
        return Err(EmitError::Unsupported(format!(
            "AST path `{}` must not carry generic arguments",
            path
        )));
    }
    Ok(parsed)
}
