// Parser state and the precedence ladder.

/// Binding precedence, weakest first. The discriminant order is load-bearing:
/// the Pratt loop compares levels with `<=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Prec {
    None,
    Comma,
    Assignment,
    Ternary,
    LogicalOr,
    LogicalAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseAnd,
    Equality,
    Comparison,
    Shift,
    Term,
    Factor,
    Unary,
    Postfix,
}

impl Prec {
    /// The next-tighter level; used so left-associative infix operators
    /// recurse above their own precedence.
    fn higher(self) -> Prec {
        match self {
            Prec::None => Prec::Comma,
            Prec::Comma => Prec::Assignment,
            Prec::Assignment => Prec::Ternary,
            Prec::Ternary => Prec::LogicalOr,
            Prec::LogicalOr => Prec::LogicalAnd,
            Prec::LogicalAnd => Prec::BitwiseOr,
            Prec::BitwiseOr => Prec::BitwiseXor,
            Prec::BitwiseXor => Prec::BitwiseAnd,
            Prec::BitwiseAnd => Prec::Equality,
            Prec::Equality => Prec::Comparison,
            Prec::Comparison => Prec::Shift,
            Prec::Shift => Prec::Term,
            Prec::Term => Prec::Factor,
            Prec::Factor => Prec::Unary,
            Prec::Unary | Prec::Postfix => Prec::Postfix,
        }
    }
}

/// Recursive-descent parser with one token of lookahead.
///
/// Errors never abort the walk: the first diagnostic in an error region
/// sets the sticky `had_error` flag and enters panic mode, which mutes
/// further diagnostics until a token is successfully consumed. The
/// finished tree is only handed out when `had_error` stayed clear.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    source: &'a str,
    /// Path label used in diagnostics; not touched as a file here.
    path: &'a str,
    current: Token,
    had_error: bool,
    panic_mode: bool,
    /// Set while parsing a call argument list, so `()` means an empty
    /// argument list instead of an empty grouping.
    parsing_call: bool,
    diagnostics: Vec<ParseDiagnostic>,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, path: &'a str) -> Self {
        let mut lexer = Lexer::new(source);
        let current = lexer.next_token();
        Self {
            lexer,
            source,
            path,
            current,
            had_error: false,
            panic_mode: false,
            parsing_call: false,
            diagnostics: Vec::new(),
        }
    }

    /// Parse the whole buffer as an implicit top-level compound.
    pub fn parse(mut self) -> Result<Node, Vec<ParseDiagnostic>> {
        let root = self.compound();
        if self.had_error {
            Err(self.diagnostics)
        } else {
            Ok(root)
        }
    }
}
