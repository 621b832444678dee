//! CLI module for astv
//!
//! This module provides the command-line interface for the generator.
//!
//! ## Usage
//!
//! ```text
//! astv [-d DIR] [--ast KINDS] [--ast-path PATH] [--format]
//! astv -v
//! ```
//!
//! ## Modules
//!
//! - `commands` - Command implementations
//!
//! ## Design
//!
//! The CLI uses clap for argument parsing with derive macros.
//! Command functions return `CliResult<T>` instead of calling `process::exit`.
//! Only the top-level `run()` function handles errors and exits.

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod commands;

use std::fmt;
use std::path::PathBuf;
use std::process;

use astv_core::catalog::parse_kind_list;
use astv_core::conventions::DEFAULT_AST_PATH;
use clap::Parser;

use crate::backend::GenerateOptions;
use crate::version::ASTV_VERSION;

// ============================================================================
// CLI Error handling
// ============================================================================

/// Exit code for CLI operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCode(pub i32);

impl ExitCode {
    pub const SUCCESS: ExitCode = ExitCode(0);
    pub const FAILURE: ExitCode = ExitCode(1);
}

/// Error type for CLI operations.
///
/// Contains a user-facing message and an exit code. The CLI entry point
/// catches these errors, prints the message, and exits with the code.
#[derive(Debug)]
pub struct CliError {
    /// User-facing error message (already formatted for display)
    pub message: String,
    /// Exit code to return to the shell
    pub exit_code: ExitCode,
}

impl CliError {
    /// Create a new CLI error with a message and exit code.
    pub fn new(message: impl Into<String>, exit_code: ExitCode) -> Self {
        Self {
            message: message.into(),
            exit_code,
        }
    }

    /// Create a failure error (exit code 1).
    pub fn failure(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::FAILURE)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

// ============================================================================
// Clap CLI definition
// ============================================================================

/// Generate a visitor/handler dispatch layer for a syntax tree
#[derive(Parser, Debug)]
#[command(name = "astv")]
#[command(about = "Generate a visitor/handler dispatch layer for a syntax tree", long_about = None)]
pub struct Cli {
    /// Destination directory for handlers_gen.rs and visitor_gen.rs
    #[arg(short = 'd', long = "dir", value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Comma-separated node kinds (default: built-in syn catalog)
    #[arg(long = "ast", value_name = "KINDS")]
    pub ast: Option<String>,

    /// Rust path of the module defining the node types
    #[arg(long = "ast-path", value_name = "PATH", default_value = DEFAULT_AST_PATH)]
    pub ast_path: String,

    /// Pretty-print the generated files
    #[arg(long)]
    pub format: bool,

    /// Print version and exit
    #[arg(short = 'v', long = "version")]
    pub version: bool,
}

impl Cli {
    /// Generation inputs described by the parsed flags.
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            dir: self.dir.clone(),
            kinds: self.ast.as_deref().map(parse_kind_list).unwrap_or_default(),
            ast_path: self.ast_path.clone(),
            format: self.format,
        }
    }
}

// ============================================================================
// CLI entry point
// ============================================================================

/// Main CLI entry point.
///
/// This is the only place where `process::exit` is called. All command
/// implementations return `CliResult` and errors are handled here.
pub fn run() {
    let cli = Cli::parse();

    match execute(cli) {
        Ok(exit_code) => {
            if exit_code.0 != 0 {
                process::exit(exit_code.0);
            }
        }
        Err(e) => {
            if !e.message.is_empty() {
                eprintln!("{}", e.message);
            }
            process::exit(e.exit_code.0);
        }
    }
}

/// Execute the CLI command and return result.
fn execute(cli: Cli) -> CliResult<ExitCode> {
    if cli.version {
        println!("astv {}", ASTV_VERSION);
        return Ok(ExitCode::SUCCESS);
    }
    commands::generate(&cli.generate_options())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["astv"]).unwrap();
        assert_eq!(cli.dir, PathBuf::from("."));
        assert!(cli.ast.is_none());
        assert_eq!(cli.ast_path, "syn");
        assert!(!cli.format);
        assert!(!cli.version);

        let options = cli.generate_options();
        assert!(options.kinds.is_empty());
    }

    #[test]
    fn test_cli_parse_kind_override() {
        let cli = Cli::try_parse_from(["astv", "--ast", "Ident, CallExpr", "-d", "src/visit", "--format"]).unwrap();
        let options = cli.generate_options();
        assert_eq!(options.kinds, vec!["Ident", "CallExpr"]);
        assert_eq!(options.dir, PathBuf::from("src/visit"));
        assert!(options.format);
    }

    #[test]
    fn test_cli_empty_override_selects_builtin() {
        let cli = Cli::try_parse_from(["astv", "--ast", ""]).unwrap();
        assert!(cli.generate_options().kinds.is_empty());
    }

    #[test]
    fn test_cli_keeps_empty_entries_for_validation() {
        let cli = Cli::try_parse_from(["astv", "--ast", "Ident,,CallExpr"]).unwrap();
        assert_eq!(cli.generate_options().kinds, vec!["Ident", "", "CallExpr"]);
    }

    #[test]
    fn test_cli_parse_ast_path() {
        let cli = Cli::try_parse_from(["astv", "--ast-path", "crate::ast"]).unwrap();
        assert_eq!(cli.generate_options().ast_path, "crate::ast");
    }

    #[test]
    fn test_cli_version_flags() {
        assert!(Cli::try_parse_from(["astv", "-v"]).unwrap().version);
        assert!(Cli::try_parse_from(["astv", "--version"]).unwrap().version);
    }

    #[test]
    fn test_version_short_circuits() {
        let cli = Cli::try_parse_from(["astv", "-v", "-d", "/definitely/not/here"]).unwrap();
        assert_eq!(execute(cli).unwrap(), ExitCode::SUCCESS);
    }

    #[test]
    fn test_unknown_flag_is_rejected() {
        assert!(Cli::try_parse_from(["astv", "--watch"]).is_err());
    }
}
