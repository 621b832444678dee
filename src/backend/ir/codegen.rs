//! Visitor code generation facade
//!
//! This module provides `VisitorCodegen`, a unified API for turning a node-kind catalog into the two generated
//! artifacts:
//!
//! ```text
//! Catalog → CatalogLowering → VisitorIr → IrEmitter (quote!) → GeneratedArtifacts
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use astv::backend::ir::codegen::{ArtifactKind, VisitorCodegen};
//! use astv_core::catalog::Catalog;
//!
//! let artifacts = VisitorCodegen::from_catalog(&Catalog::explicit(["Ident"]), "sample", "crate::ast").unwrap();
//! assert_eq!(artifacts.handlers.kind, ArtifactKind::Handlers);
//! assert!(artifacts.visitor.source().contains("h_ident"));
//! ```
//!
//! ## Error Handling
//!
//! Lowering collects every malformed catalog entry before failing; emission fails on the first bad input (in
//! practice, the AST path). Both surface through [`GenerationError`]. Nothing here touches the filesystem, so a
//! failure never leaves a partially written artifact behind.

use std::fmt;

use proc_macro2::TokenStream;

use astv_core::catalog::Catalog;
use astv_core::conventions::{HANDLERS_FILE, VISITOR_FILE};

use super::{CatalogErrors, CatalogLowering, EmitError, IrEmitter, VisitorIr};

/// Error during visitor code generation.
///
/// ## Examples
///
/// ```rust
/// use astv::backend::ir::codegen::{GenerationError, VisitorCodegen};
/// use astv_core::catalog::Catalog;
///
/// match VisitorCodegen::from_catalog(&Catalog::explicit(["Ident", "Ident"]), "sample", "syn") {
///     Err(GenerationError::Catalog(errors)) => assert_eq!(errors.len(), 1),
///     other => panic!("expected a catalog error, got {:?}", other.err()),
/// }
/// ```
#[derive(Debug)]
pub enum GenerationError {
    /// Malformed catalog entries (may contain multiple errors)
    Catalog(CatalogErrors),
    /// Error during IR to Rust emission
    Emission(EmitError),
}

impl fmt::Display for GenerationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerationError::Catalog(e) => write!(f, "{}", e),
            GenerationError::Emission(e) => write!(f, "emission error: {}", e),
        }
    }
}

impl std::error::Error for GenerationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GenerationError::Catalog(e) => Some(e),
            GenerationError::Emission(e) => Some(e),
        }
    }
}

impl From<CatalogErrors> for GenerationError {
    fn from(e: CatalogErrors) -> Self {
        GenerationError::Catalog(e)
    }
}

impl From<EmitError> for GenerationError {
    fn from(e: EmitError) -> Self {
        GenerationError::Emission(e)
    }
}

/// Which of the two generated files an artifact is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Handlers,
    Visitor,
}

impl ArtifactKind {
    /// File name the artifact is written to.
    pub fn file_name(self) -> &'static str {
        match self {
            ArtifactKind::Handlers => HANDLERS_FILE,
            ArtifactKind::Visitor => VISITOR_FILE,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ArtifactKind::Handlers => "handlers",
            ArtifactKind::Visitor => "visitor",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One generated file: its header comment plus the emitted items.
#[derive(Debug, Clone)]
pub struct GeneratedArtifact {
    pub kind: ArtifactKind,
    /// `// Code generated by astv ... DO NOT EDIT.`
    pub header: String,
    pub tokens: TokenStream,
}

impl GeneratedArtifact {
    /// Unformatted source of the emitted items (no header).
    pub fn source(&self) -> String {
        self.tokens.to_string()
    }
}

/// The handlers and visitor artifacts of a single run.
#[derive(Debug, Clone)]
pub struct GeneratedArtifacts {
    pub handlers: GeneratedArtifact,
    pub visitor: GeneratedArtifact,
}

impl GeneratedArtifacts {
    /// Artifacts in write order: handlers first, then visitor.
    pub fn iter(&self) -> impl Iterator<Item = &GeneratedArtifact> {
        [&self.handlers, &self.visitor].into_iter()
    }
}

/// Visitor code generator.
///
/// Stateless; the per-run inputs live in the [`VisitorIr`].
#[derive(Debug, Default, Clone, Copy)]
pub struct VisitorCodegen;

impl VisitorCodegen {
    pub fn new() -> Self {
        Self
    }

    /// Emit both artifacts for already-lowered IR.
    ///
    /// ## Errors
    ///
    /// Returns [`EmitError`] if the IR's AST path is unusable.
    #[tracing::instrument(skip_all, fields(module = %ir.module_id, kinds = ir.kinds.len()))]
    pub fn try_generate(&self, ir: &VisitorIr) -> Result<GeneratedArtifacts, EmitError> {
        let emitter = IrEmitter::new(ir)?;
        let header = emitter.header();

        let handlers = GeneratedArtifact {
            kind: ArtifactKind::Handlers,
            header: header.clone(),
            tokens: emitter.emit_handlers(),
        };
        let visitor = GeneratedArtifact {
            kind: ArtifactKind::Visitor,
            header,
            tokens: emitter.emit_visitor(),
        };

        tracing::debug!("emitted handlers and visitor artifacts");
        Ok(GeneratedArtifacts { handlers, visitor })
    }

    /// Lower `catalog` and emit both artifacts.
    ///
    /// ## Errors
    ///
    /// - [`GenerationError::Catalog`] if any catalog entry is malformed.
    /// - [`GenerationError::Emission`] if emission fails.
    pub fn from_catalog(
        catalog: &Catalog,
        module_id: &str,
        ast_path: &str,
    ) -> Result<GeneratedArtifacts, GenerationError> {
        let ir = CatalogLowering::new(module_id, ast_path).lower(catalog)?;
        Ok(Self::new().try_generate(&ir)?)
    }
}
