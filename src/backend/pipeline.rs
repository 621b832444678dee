//! One generation run, end to end.
//!
//! ```text
//! resolve catalog → resolve module → lower → emit handlers/visitor → render both → write both
//! ```
//!
//! Both artifacts are rendered before either is written, so catalog, resolution, emission and formatting errors
//! all leave the destination directory untouched.

use std::path::PathBuf;

use astv_core::catalog::resolve_catalog;
use astv_core::conventions::DEFAULT_AST_PATH;
use thiserror::Error;

use super::ir::{ArtifactKind, CatalogErrors, CatalogLowering, EmitError, VisitorCodegen};
use super::writer::{ArtifactWriter, WriteError};
use crate::frontend::{ModuleResolver, ResolutionError};

/// Inputs of a generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Destination directory; also the directory the module identifier is resolved from.
    pub dir: PathBuf,
    /// Caller-supplied node kinds; empty selects the built-in catalog.
    pub kinds: Vec<String>,
    /// Rust path of the module defining the node types.
    pub ast_path: String,
    /// Pretty-print the generated files.
    pub format: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("."),
            kinds: Vec::new(),
            ast_path: DEFAULT_AST_PATH.to_string(),
            format: false,
        }
    }
}

/// Errors that abort a generation run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Catalog(#[from] CatalogErrors),

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("emission error: {0}")]
    Emission(#[from] EmitError),

    #[error("{artifact} artifact: {source}")]
    Artifact {
        artifact: ArtifactKind,
        #[source]
        source: WriteError,
    },
}

/// Run a full generation and return the written paths (handlers first).
///
/// ## Errors
///
/// See [`RunError`]. Every variant except an I/O failure on the second write leaves no file behind.
#[tracing::instrument(skip_all, fields(dir = %options.dir.display(), format = options.format))]
pub fn run_generation(options: &GenerateOptions, resolver: &dyn ModuleResolver) -> Result<Vec<PathBuf>, RunError> {
    let catalog = resolve_catalog(&options.kinds);
    tracing::debug!(kinds = catalog.len(), source = ?catalog.source(), "resolved node-kind catalog");

    let module_id = resolver.resolve(&options.dir)?;
    let ir = CatalogLowering::new(module_id.as_str(), options.ast_path.as_str()).lower(&catalog)?;
    let artifacts = VisitorCodegen::new().try_generate(&ir)?;

    let writer = ArtifactWriter::new(&options.dir, options.format);
    let rendered = artifacts
        .iter()
        .map(|artifact| {
            writer
                .render(artifact)
                .map(|text| (artifact.kind, text))
                .map_err(|source| RunError::Artifact {
                    artifact: artifact.kind,
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let mut written = Vec::with_capacity(rendered.len());
    for (kind, text) in rendered {
        let path = writer
            .persist(kind, &text)
            .map_err(|source| RunError::Artifact { artifact: kind, source })?;
        tracing::info!(path = %path.display(), module = %module_id, "wrote {} artifact", kind);
        written.push(path);
    }
    Ok(written)
}
