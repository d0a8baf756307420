//! Parser for the Krait scripting language
//!
//! Converts a source buffer into an AST: recursive descent for statements,
//! a table-driven Pratt engine for expressions, panic-mode recovery for
//! diagnostics.
//!
//! ## Examples
//!
//! ```rust
//! use krait_syntax::parser;
//!
//! let ast = parser::parse("print 1 + 2 * 3;", "demo.kr").unwrap();
//! ```

use crate::ast::{BinaryOp, Node, NodeKind, PostfixOp, UnaryOp};
use crate::diagnostics::ParseDiagnostic;
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/expr.rs");
include!("parser/stmts.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
