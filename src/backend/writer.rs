//! Write generated artifacts to disk.
//!
//! The writer renders a [`GeneratedArtifact`] to text (header comment, a blank line, then the items) and writes it
//! into the target directory under the artifact's conventional file name, replacing any previous version.
//!
//! ## Notes
//!
//! - With formatting enabled the items are parsed with `syn::parse_file` and pretty-printed with `prettyplease`.
//!   A parse failure is reported as [`WriteError::Format`] together with the unformatted source, and nothing is
//!   written.
//! - Without formatting the token stream's own rendering is written as-is; it compiles but is not meant for humans.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use super::ir::{ArtifactKind, GeneratedArtifact};

/// Prefix of every header written by astv.
const GENERATED_MARKER: &str = "// Code generated by astv";

/// Errors while rendering or writing an artifact.
#[derive(Debug, Error)]
pub enum WriteError {
    #[error("failed to format generated source: {message}")]
    Format {
        message: String,
        /// The unformatted source, for diagnosis.
        source_text: String,
    },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Writes artifacts into one directory.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    dir: PathBuf,
    format: bool,
}

impl ArtifactWriter {
    pub fn new(dir: impl AsRef<Path>, format: bool) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            format,
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Destination path of an artifact of the given kind.
    pub fn path_for(&self, kind: ArtifactKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }

    /// Render `artifact` to the exact text that [`write`](Self::write) puts on disk.
    ///
    /// ## Errors
    ///
    /// [`WriteError::Format`] if formatting is enabled and the emitted source does not parse.
    pub fn render(&self, artifact: &GeneratedArtifact) -> Result<String, WriteError> {
        let source = artifact.source();
        let body = if self.format {
            format_source(&source)?
        } else {
            format!("{}\n", source)
        };
        Ok(format!("{}\n\n{}", artifact.header, body))
    }

    /// Render and write `artifact`, returning the path written.
    pub fn write(&self, artifact: &GeneratedArtifact) -> Result<PathBuf, WriteError> {
        let text = self.render(artifact)?;
        self.persist(artifact.kind, &text)
    }

    /// Write already rendered text for an artifact of the given kind.
    #[tracing::instrument(skip_all, fields(artifact = %kind))]
    pub fn persist(&self, kind: ArtifactKind, text: &str) -> Result<PathBuf, WriteError> {
        let path = self.path_for(kind);
        if let Ok(existing) = fs::read_to_string(&path) {
            if !existing.starts_with(GENERATED_MARKER) {
                tracing::warn!(path = %path.display(), "replacing a file that was not generated by astv");
            }
        }
        fs::write(&path, text)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "wrote artifact");
        Ok(path)
    }
}

/// Pretty-print Rust source with `prettyplease`.
fn format_source(source: &str) -> Result<String, WriteError> {
    let file = syn::parse_file(source).map_err(|e| WriteError::Format {
        message: e.to_string(),
        source_text: source.to_string(),
    })?;
    Ok(prettyplease::unparse(&file))
}
