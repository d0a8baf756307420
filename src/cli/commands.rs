//! CLI command implementations
//!
//! All command functions return `CliResult<ExitCode>` instead of calling
//! `process::exit`. Error handling and exits happen in the top-level `run()`.

use std::fs;

use krait_syntax::{lexer, parser};

use super::{CliError, CliResult, ExitCode};

/// Parse a source file and print its AST, or print the collected
/// diagnostics and fail.
pub fn parse_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;

    tracing::debug!(path = file_path, "parsing source file");
    match parser::parse(&source, file_path) {
        Ok(ast) => {
            println!("{ast:#?}");
            Ok(ExitCode::SUCCESS)
        }
        Err(diagnostics) => {
            for diagnostic in &diagnostics {
                eprintln!("{diagnostic}");
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Tokenize a source file and dump the stream (debug aid).
pub fn lex_file(file_path: &str) -> CliResult<ExitCode> {
    let source = read_source(file_path)?;

    for token in lexer::tokenize(&source) {
        println!(
            "{:>4}:{:<4} {:?} {:?}",
            token.row,
            token.col,
            token.kind,
            token.text(&source)
        );
    }
    Ok(ExitCode::SUCCESS)
}

fn read_source(file_path: &str) -> CliResult<String> {
    let source = fs::read_to_string(file_path)
        .map_err(|e| CliError::failure(format!("cannot read '{file_path}': {e}")))?;
    if source.is_empty() {
        return Err(CliError::failure(format!(
            "cannot parse '{file_path}': empty file."
        )));
    }
    Ok(source)
}

// ============================================================================
// Tests
// ============================================================================
