//! Module context resolution from Cargo manifests
//!
//! Resolves a destination directory to the module identifier stamped into generated headers, e.g.
//! `my_crate::syntax::visit` for `my-crate/src/syntax/visit`.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Component, Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

const MANIFEST_FILE: &str = "Cargo.toml";

/// Identifier of the module the generated files belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleId(String);

impl ModuleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Errors while resolving a module identifier. Always fatal for a run.
#[derive(Debug, Error)]
pub enum ResolutionError {
    #[error("cannot read directory {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("no Cargo.toml found in {} or any parent directory", dir.display())]
    NoManifest { dir: PathBuf },

    #[error("failed to parse {}: {source}", path.display())]
    Manifest {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("{} has no [package] table (virtual workspace manifest?)", path.display())]
    NoPackage { path: PathBuf },
}

/// Source of module identifiers for a destination directory.
pub trait ModuleResolver {
    fn resolve(&self, dir: &Path) -> Result<ModuleId, ResolutionError>;
}

/// Resolves module identifiers from the nearest enclosing Cargo package.
///
/// The identifier is the package name (hyphens replaced by underscores) followed by the directories between the
/// manifest and `dir`, with a leading `src` dropped.
#[derive(Debug, Default, Clone, Copy)]
pub struct CargoModuleResolver;

#[derive(Debug, Deserialize)]
struct CargoManifest {
    package: Option<PackageSection>,
}

#[derive(Debug, Deserialize)]
struct PackageSection {
    name: String,
}

impl ModuleResolver for CargoModuleResolver {
    #[tracing::instrument(skip_all, fields(dir = %dir.display()))]
    fn resolve(&self, dir: &Path) -> Result<ModuleId, ResolutionError> {
        let io_err = |source| ResolutionError::Io {
            path: dir.to_path_buf(),
            source,
        };
        let dir = fs::canonicalize(dir).map_err(io_err)?;
        if !fs::metadata(&dir).map_err(io_err)?.is_dir() {
            return Err(io_err(io::Error::new(io::ErrorKind::NotADirectory, "not a directory")));
        }

        let manifest_dir = dir
            .ancestors()
            .find(|ancestor| ancestor.join(MANIFEST_FILE).is_file())
            .ok_or_else(|| ResolutionError::NoManifest { dir: dir.clone() })?;
        let manifest_path = manifest_dir.join(MANIFEST_FILE);

        let text = fs::read_to_string(&manifest_path).map_err(|source| ResolutionError::Io {
            path: manifest_path.clone(),
            source,
        })?;
        let manifest: CargoManifest = toml::from_str(&text).map_err(|source| ResolutionError::Manifest {
            path: manifest_path.clone(),
            source,
        })?;
        let package = manifest.package.ok_or_else(|| ResolutionError::NoPackage {
            path: manifest_path.clone(),
        })?;

        let mut segments = vec![package.name.replace('-', "_")];
        // `dir` is a descendant of `manifest_dir`, so the prefix always strips.
        if let Ok(relative) = dir.strip_prefix(manifest_dir) {
            segments.extend(module_segments(relative));
        }

        let id = ModuleId::new(segments.join("::"));
        tracing::debug!(module = %id, manifest = %manifest_path.display(), "resolved module identifier");
        Ok(id)
    }
}

fn module_segments(relative: &Path) -> Vec<String> {
    let mut segments: Vec<String> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();
    if segments.first().map(String::as_str) == Some("src") {
        segments.remove(0);
    }
    segments
}
