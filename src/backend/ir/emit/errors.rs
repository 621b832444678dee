//! Define error types for IR → Rust emission.
//!
//! These errors represent *emission* failures (as opposed to catalog validation or formatting).
//!
//! ## Notes
//!
//! - Prefer actionable messages: users should know which input (usually `--ast-path`) to fix.

/// Error during IR emission.
#[derive(Debug)]
pub enum EmitError {
    /// The AST type path is not a Rust path (`crate::ast`, `syn`).
    InvalidAstPath { path: String, message: String },
    Unsupported(String),
}

impl std::fmt::Display for EmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmitError::InvalidAstPath { path, message } => {
                write!(f, "invalid AST path `{}`: {}", path, message)
            }
            EmitError::Unsupported(msg) => write!(f, "unsupported: {}", msg),
        }
    }
}

impl std::error::Error for EmitError {}
