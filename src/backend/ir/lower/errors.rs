//! Error types for catalog lowering.
//!
//! This module defines the errors reported while validating a node-kind catalog. It provides both single errors
//! (`CatalogError`) and error collections (`CatalogErrors`) so that every malformed entry of a caller-supplied list
//! is reported in one run.

use thiserror::Error;

/// A malformed catalog entry.
///
/// Entries are identified by their position in the catalog (0-based) so that empty entries from stray separators can
/// be located.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("entry {index} is empty (stray ',' in the kind list?)")]
    EmptyEntry { index: usize },

    #[error("entry {index} `{name}` is not a valid Rust identifier")]
    InvalidIdent { index: usize, name: String },

    #[error("entry {index} `{name}` is reserved for generated code")]
    Reserved { index: usize, name: String },

    #[error("entry {index} `{name}` is listed more than once")]
    Duplicate { index: usize, name: String },

    #[error("entry {index} `{name}` and `{other}` both generate the method name `{derived}`")]
    NameCollision {
        index: usize,
        name: String,
        other: String,
        derived: String,
    },
}

/// Collection of catalog errors.
///
/// # Examples
///
/// ```rust
/// use astv::backend::ir::lower::CatalogLowering;
/// use astv_core::catalog::Catalog;
///
/// let lowering = CatalogLowering::new("sample", "syn");
/// let errors = lowering.lower(&Catalog::explicit(["Ident", "", "Ident"])).unwrap_err();
/// assert_eq!(errors.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogErrors(pub Vec<CatalogError>);

impl CatalogErrors {
    /// Create a new collection with a single error.
    pub fn single(error: CatalogError) -> Self {
        Self(vec![error])
    }

    /// Create from a vector of errors.
    ///
    /// # Returns
    ///
    /// `Some(CatalogErrors)` if the vector is non-empty, `None` otherwise.
    pub fn from_vec(errors: Vec<CatalogError>) -> Option<Self> {
        if errors.is_empty() { None } else { Some(Self(errors)) }
    }

    /// Number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the errors.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogError> {
        self.0.iter()
    }

    /// The first error, in catalog order.
    pub fn first(&self) -> Option<&CatalogError> {
        self.0.first()
    }
}

impl std::fmt::Display for CatalogErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.0.len() == 1 {
            write!(f, "invalid node-kind catalog: {}", self.0[0])
        } else {
            writeln!(f, "invalid node-kind catalog ({} errors):", self.0.len())?;
            for (i, err) in self.0.iter().enumerate() {
                writeln!(f, "  {}: {}", i + 1, err)?;
            }
            Ok(())
        }
    }
}

impl std::error::Error for CatalogErrors {}

impl From<CatalogError> for CatalogErrors {
    fn from(e: CatalogError) -> Self {
        CatalogErrors::single(e)
    }
}
