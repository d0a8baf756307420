#![forbid(unsafe_code)]
//! Krait Language Frontend
//!
//! Krait is a small C-like scripting language. This crate provides the
//! command-line driver around [`krait_syntax`]: it reads a source file,
//! parses it into an AST and either prints the tree or the collected
//! syntax diagnostics.
//!
//! The syntax machinery itself (lexer, parser, AST, diagnostics) lives in
//! the `krait_syntax` crate; this one only drives it.

pub mod cli;
