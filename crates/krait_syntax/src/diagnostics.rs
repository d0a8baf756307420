//! Structured parse diagnostics.
//!
//! A failed parse yields the ordered list of [`ParseDiagnostic`] records
//! collected during recovery, first-error first. The `Display` form is the
//! wire line the CLI prints:
//!
//! ```text
//! ParserError at <path>:<row>:<col> <message>
//! ```
//!
//! The miette [`Diagnostic`] derive additionally labels the offending span
//! so embedding tools can render rich reports against the source.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

use crate::token::Token;

/// One positional syntax diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
#[error("ParserError at {path}:{row}:{col} {message}")]
#[diagnostic(code(krait::parse_error))]
pub struct ParseDiagnostic {
    pub path: String,
    /// 1-based source row.
    pub row: usize,
    /// 1-based source column.
    pub col: usize,
    pub message: String,
    #[label("here")]
    pub span: SourceSpan,
}

impl ParseDiagnostic {
    /// Build a diagnostic pinned at `token`'s position.
    pub fn new(path: &str, token: Token, message: impl Into<String>) -> Self {
        Self {
            path: path.to_owned(),
            row: token.row,
            col: token.col,
            message: message.into(),
            span: SourceSpan::new(token.span.start.into(), token.span.len()),
        }
    }
}
