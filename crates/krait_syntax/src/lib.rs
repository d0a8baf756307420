//! Syntax frontend for the Krait scripting language.
//!
//! Raw source text in, AST out, with positional diagnostics collected
//! along the way:
//!
//! - [`token`] — span-based token model.
//! - [`lexer`] — pull-based maximal-munch scanner.
//! - [`ast`] — owned, bottom-up node model.
//! - [`parser`] — recursive-descent statements over a Pratt expression
//!   engine, with panic-mode recovery.
//! - [`diagnostics`] — structured parse diagnostics.
//!
//! ## Examples
//!
//! ```rust
//! use krait_syntax::parser;
//!
//! let ast = parser::parse("print (1 + 2) * 3;", "demo.kr").unwrap();
//! let errors = parser::parse("1 = 2;", "demo.kr").unwrap_err();
//! assert_eq!(
//!     errors[0].to_string(),
//!     "ParserError at demo.kr:1:1 lvalue cannot be a constant."
//! );
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token;
