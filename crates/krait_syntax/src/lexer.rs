//! Lexer for the Krait language.
//!
//! The scanner is pull-based: the parser asks for one token at a time via
//! [`Lexer::next_token`], and [`tokenize`] drains the whole stream for
//! consumers that want a vector (the CLI `--lex` dump, tests).
//!
//! The stream is total. Unrecognized characters and malformed strings come
//! back as [`TokenKind::Error`] tokens instead of failing the scan, and
//! once the buffer is exhausted every further call returns the same
//! [`TokenKind::Eof`] token.

use crate::token::{Span, Token, TokenKind};

/// Streaming scanner over a source buffer.
///
/// Tracks a byte cursor plus 1-based row/column. The cursor only ever
/// advances by whole characters, so every span it produces lies on
/// character boundaries.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    row: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            row: 1,
            col: 1,
        }
    }

    /// Scan and return the next token, advancing past it.
    ///
    /// Maximal munch: `==`, `<=`, `<<`, `&&`, `++` and friends are always
    /// preferred over their one-character prefixes.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.pos;
        let row = self.row;
        let col = self.col;

        let Some(c) = self.peek() else {
            return Token::new(TokenKind::Eof, Span::new(start, start), row, col);
        };

        if c.is_ascii_alphabetic() || c == '_' {
            return self.scan_identifier(start, row, col);
        }
        if c.is_ascii_digit() || c == '.' {
            return self.scan_number(start, row, col);
        }
        if c == '"' {
            return self.scan_string();
        }

        self.advance();
        let kind = match c {
            '+' => self.select('+', TokenKind::Increment, TokenKind::Plus),
            '-' => self.select('-', TokenKind::Decrement, TokenKind::Minus),
            '=' => self.select('=', TokenKind::EqEq, TokenKind::Assign),
            '!' => self.select('=', TokenKind::NotEq, TokenKind::Not),
            '&' => self.select('&', TokenKind::And, TokenKind::BitAnd),
            '|' => self.select('|', TokenKind::Or, TokenKind::BitOr),
            '<' => match self.peek() {
                Some('<') => {
                    self.advance();
                    TokenKind::Shl
                }
                Some('=') => {
                    self.advance();
                    TokenKind::LtEq
                }
                _ => TokenKind::Lt,
            },
            '>' => match self.peek() {
                Some('>') => {
                    self.advance();
                    TokenKind::Shr
                }
                Some('=') => {
                    self.advance();
                    TokenKind::GtEq
                }
                _ => TokenKind::Gt,
            },
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '~' => TokenKind::BitNot,
            ';' => TokenKind::Semicolon,
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            '?' => TokenKind::Question,
            ':' => TokenKind::Colon,
            _ => TokenKind::Error,
        };
        Token::new(kind, Span::new(start, self.pos), row, col)
    }

    fn peek(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Consume one character, updating the row/column counters.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.row += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(c)
    }

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Pick `double` when the next character is `next`, consuming it;
    /// otherwise fall back to `single`.
    fn select(&mut self, next: char, double: TokenKind, single: TokenKind) -> TokenKind {
        if self.peek() == Some(next) {
            self.advance();
            double
        } else {
            single
        }
    }

    fn scan_identifier(&mut self, start: usize, row: usize, col: usize) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.advance();
        }
        let text = &self.source[start..self.pos];
        let kind = keyword_kind(text).unwrap_or(TokenKind::Ident);
        Token::new(kind, Span::new(start, self.pos), row, col)
    }

    /// Greedy digit/dot munch. Multi-dot lexemes like `1.2.3` scan as one
    /// number token; the parser rejects them when it converts the text.
    fn scan_number(&mut self, start: usize, row: usize, col: usize) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit() || c == '.') {
            self.advance();
        }
        Token::new(TokenKind::Number, Span::new(start, self.pos), row, col)
    }

    /// Scan a string literal. The token span covers the contents only,
    /// not the quotes. A newline or end of input before the closing quote
    /// produces an error token pinned at the opening quote.
    fn scan_string(&mut self) -> Token {
        let quote = self.pos;
        let row = self.row;
        let col = self.col;
        self.advance();
        let content = self.pos;

        loop {
            match self.peek() {
                Some('"') => {
                    let end = self.pos;
                    self.advance();
                    return Token::new(TokenKind::Str, Span::new(content, end), row, col);
                }
                Some('\n') | None => {
                    let token = Token::new(TokenKind::Error, Span::new(quote, quote + 1), row, col)
                        .with_message("non-terminated string");
                    self.advance();
                    return token;
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
    }
}

/// Keyword lookup: dispatch on the first byte, then compare the whole
/// lexeme so `i`, `iff` or `printx` stay identifiers.
fn keyword_kind(text: &str) -> Option<TokenKind> {
    let check =
        |keyword: &str, kind: TokenKind| -> Option<TokenKind> { (text == keyword).then_some(kind) };

    match text.as_bytes().first()? {
        b'e' => check("else", TokenKind::Else),
        b'i' => check("if", TokenKind::If),
        b'n' => check("null", TokenKind::Null),
        b'p' => check("print", TokenKind::Print),
        b'r' => check("return", TokenKind::Return),
        b't' => check("true", TokenKind::True),
        b'v' => check("var", TokenKind::Var),
        b'w' => check("while", TokenKind::While),
        b'f' => match text.as_bytes().get(1)? {
            b'a' => check("false", TokenKind::False),
            b'o' => check("for", TokenKind::For),
            b'u' => check("function", TokenKind::Function),
            _ => None,
        },
        _ => None,
    }
}

/// Drain the whole stream into a vector ending with exactly one Eof token.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.kind == TokenKind::Eof;
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}
