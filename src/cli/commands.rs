//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use crate::backend::{GenerateOptions, RunError, WriteError, run_generation};
use crate::frontend::CargoModuleResolver;

use super::{CliError, CliResult, ExitCode};

/// Generate both artifacts into `options.dir`, reporting each written file on stdout.
pub fn generate(options: &GenerateOptions) -> CliResult<ExitCode> {
    let written = run_generation(options, &CargoModuleResolver).map_err(|e| {
        // The unformatted source is the only useful clue when the emitted text does not parse.
        if let Some(source_text) = unformatted_source(&e) {
            eprintln!("{}", source_text);
        }
        CliError::failure(format!("Error: {}", e))
    })?;

    for path in &written {
        println!("written: {}", path.display());
    }
    Ok(ExitCode::SUCCESS)
}

fn unformatted_source(e: &RunError) -> Option<&str> {
    match e {
        RunError::Artifact {
            source: WriteError::Format { source_text, .. },
            ..
        } => Some(source_text.as_str()),
        _ => None,
    }
}
