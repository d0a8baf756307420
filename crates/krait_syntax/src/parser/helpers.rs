// Lookahead, consumption and the panic-mode diagnostic protocol.

impl<'a> Parser<'a> {
    /// Pull the next token from the lexer into the lookahead slot.
    fn advance(&mut self) -> Token {
        self.current = self.lexer.next_token();
        self.current
    }

    fn token_text(&self, token: Token) -> &'a str {
        token.text(self.source)
    }

    /// Consume the current token if it has the expected kind.
    ///
    /// On a mismatch (or an error-kind token) outside panic mode, a
    /// diagnostic is recorded and the token is left in place so the
    /// caller's recovery sees it. Inside panic mode the token is consumed
    /// regardless and panic mode ends: consuming a token is the signal
    /// that the parser has found its footing again.
    fn eat(&mut self, kind: TokenKind, message: Option<&str>) -> Token {
        if (self.current.kind != kind || kind == TokenKind::Error) && !self.panic_mode {
            let msg = self.unexpected(self.current, message);
            self.error(&msg);
            self.current
        } else {
            self.panic_mode = false;
            let token = self.current;
            self.advance();
            token
        }
    }

    fn unexpected(&self, token: Token, message: Option<&str>) -> String {
        match message {
            Some(message) => format!("unexpected '{}', {}", self.token_text(token), message),
            None => format!("unexpected '{}'", self.token_text(token)),
        }
    }

    /// Record a diagnostic at the current token, entering panic mode.
    ///
    /// Suppressed entirely while already panicking, so one error region
    /// produces one diagnostic. When the current token carries its own
    /// lexer message (a malformed literal), that message wins.
    fn error(&mut self, message: &str) {
        if self.panic_mode {
            return;
        }
        self.had_error = true;
        self.panic_mode = true;
        let message = self.current.message.unwrap_or(message);
        self.diagnostics
            .push(ParseDiagnostic::new(self.path, self.current, message));
    }

    /// Record a construction-invariant diagnostic pinned at `token`.
    ///
    /// Used for violations found on an already-built operand (invalid
    /// lvalue, non-identifier callee or increment target). These bypass
    /// panic mode in both directions: they are never muted, and they do
    /// not mute what follows.
    fn error_at(&mut self, token: Token, message: impl Into<String>) {
        self.had_error = true;
        self.diagnostics
            .push(ParseDiagnostic::new(self.path, token, message.into()));
    }
}
