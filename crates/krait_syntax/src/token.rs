//! Token types for the Krait lexer.
//!
//! Tokens are **pure positional views**: they carry a byte span into the
//! source buffer plus a row/column pair, never a copy of the text. Use
//! [`Token::text`] to slice the lexeme back out of the buffer on demand.

/// Source location span (byte offsets).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Kind of token produced by the lexer.
///
/// This is a closed enumeration: every lexeme the scanner can produce maps
/// to exactly one variant, and the stream is total (`Error` tokens stand in
/// for anything unrecognized, `Eof` repeats idempotently at end of input).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    // ========== Identifiers and literals ==========
    Ident,
    Number,
    Str,

    // ========== Operators ==========
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Assign,
    EqEq,
    Not,
    NotEq,
    Lt,
    LtEq,
    Shl,
    Gt,
    GtEq,
    Shr,
    And,
    BitAnd,
    Or,
    BitOr,
    BitNot,
    Increment,
    Decrement,

    // ========== Punctuation ==========
    Semicolon,
    LParen,
    RParen,
    LBrace,
    RBrace,
    Comma,
    Question,
    Colon,

    // ========== Keywords ==========
    If,
    Else,
    For,
    While,
    Function,
    Var,
    Print,
    Return,
    True,
    False,
    Null,

    // ========== Special ==========
    Error,
    Eof,
}

/// A single classified lexeme: kind, byte span, and source position.
///
/// `message` is set only on `Error` tokens that carry a lexer diagnostic
/// (for example a non-terminated string); the parser reports it verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
    /// 1-based source row.
    pub row: usize,
    /// 1-based source column.
    pub col: usize,
    pub message: Option<&'static str>,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span, row: usize, col: usize) -> Self {
        Self {
            kind,
            span,
            row,
            col,
            message: None,
        }
    }

    /// Attach a lexer diagnostic message (error tokens only).
    pub fn with_message(mut self, message: &'static str) -> Self {
        self.message = Some(message);
        self
    }

    /// Slice the lexeme out of the source buffer this token was scanned from.
    ///
    /// The span is guaranteed to lie on character boundaries within the
    /// buffer the lexer was constructed over; passing any other buffer is a
    /// caller bug.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        &source[self.span.start..self.span.end]
    }
}
