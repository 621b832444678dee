//! Catalog to IR lowering pass.
//!
//! This module converts a resolved node-kind catalog into the [`VisitorIr`] the emitters consume. The lowering pass:
//!
//! 1. Validates every entry (non-empty, a Rust identifier, not reserved, unique); a kind whose slot would be the
//!    catch-all's `h_default` counts as reserved
//! 2. Derives the generated names for each kind (trait, method, slot, registration method)
//! 3. Rejects catalogs whose derived method names collide (`ExprCall` vs `Expr_Call`)
//!
//! Malformed caller-supplied lists are rejected rather than passed through: duplicate or empty entries would
//! otherwise produce generated code that does not compile.
//!
//! # Usage
//!
//! ```rust
//! use astv::backend::ir::lower::CatalogLowering;
//! use astv_core::catalog::Catalog;
//!
//! let ir = CatalogLowering::new("sample", "crate::ast")
//!     .lower(&Catalog::explicit(["Ident", "CallExpr"]))
//!     .unwrap();
//! assert_eq!(ir.kinds[1].method, "call_expr");
//! assert_eq!(ir.kinds[1].slot, "h_call_expr");
//! ```

mod errors;

use std::collections::HashMap;

use astv_core::catalog::Catalog;
use astv_core::conventions::{self, DEFAULT_SLOT, REGISTER_PREFIX, SLOT_PREFIX};
use astv_core::rust_keywords;
use heck::ToSnakeCase;

use super::{KindIr, VisitorIr};

pub use errors::{CatalogError, CatalogErrors};

/// Catalog to IR lowering context.
///
/// Carries the per-run values that end up in the IR next to the kinds: the module identifier and the AST type path.
#[derive(Debug, Clone)]
pub struct CatalogLowering {
    module_id: String,
    ast_path: String,
}

impl CatalogLowering {
    pub fn new(module_id: impl Into<String>, ast_path: impl Into<String>) -> Self {
        Self {
            module_id: module_id.into(),
            ast_path: ast_path.into(),
        }
    }

    /// Lower a catalog to IR.
    ///
    /// # Errors
    ///
    /// Returns every [`CatalogError`] found, in catalog order. No IR is produced if any entry is malformed.
    #[tracing::instrument(skip_all, fields(kind_count = catalog.len(), source = ?catalog.source()))]
    pub fn lower(&self, catalog: &Catalog) -> Result<VisitorIr, CatalogErrors> {
        let mut errors = Vec::new();
        let mut kinds = Vec::with_capacity(catalog.len());
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut methods: HashMap<String, &str> = HashMap::new();

        for (index, name) in catalog.iter().enumerate() {
            if let Err(e) = validate_kind(index, name) {
                errors.push(e);
                continue;
            }
            if seen.insert(name, index).is_some() {
                errors.push(CatalogError::Duplicate {
                    index,
                    name: name.to_string(),
                });
                continue;
            }

            let kind = lower_kind(name);
            // `DEFAULT` and `default` are valid kinds but would take the catch-all's slot and `on_default`.
            if kind.slot == DEFAULT_SLOT {
                errors.push(CatalogError::Reserved {
                    index,
                    name: name.to_string(),
                });
                continue;
            }
            let snake = name.to_snake_case();
            if let Some(other) = methods.get(&snake) {
                errors.push(CatalogError::NameCollision {
                    index,
                    name: name.to_string(),
                    other: (*other).to_string(),
                    derived: snake,
                });
                continue;
            }
            methods.insert(snake, name);
            kinds.push(kind);
        }

        if let Some(errors) = CatalogErrors::from_vec(errors) {
            return Err(errors);
        }

        tracing::debug!(kinds = kinds.len(), "lowered node-kind catalog");
        Ok(VisitorIr {
            module_id: self.module_id.clone(),
            ast_path: self.ast_path.clone(),
            kinds,
        })
    }
}

/// Check a single catalog entry.
fn validate_kind(index: usize, name: &str) -> Result<(), CatalogError> {
    if name.is_empty() {
        return Err(CatalogError::EmptyEntry { index });
    }
    // `syn` accepts raw identifiers; a kind is also a type name, so `r#` is never meaningful here.
    if name.contains('#') || syn::parse_str::<syn::Ident>(name).is_err() {
        return Err(CatalogError::InvalidIdent {
            index,
            name: name.to_string(),
        });
    }
    if conventions::is_reserved_kind(name) {
        return Err(CatalogError::Reserved {
            index,
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Derive the generated names for a validated kind.
fn lower_kind(name: &str) -> KindIr {
    let snake = name.to_snake_case();
    KindIr {
        name: name.to_string(),
        handler_trait: conventions::handler_trait_name(name),
        method: rust_keywords::escape_ident(&snake),
        slot: format!("{SLOT_PREFIX}{snake}"),
        register_fn: format!("{REGISTER_PREFIX}{snake}"),
    }
}
