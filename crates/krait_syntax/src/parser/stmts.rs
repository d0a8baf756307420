// Statement and declaration productions.

impl<'a> Parser<'a> {
    /// Statement list running until EOF or an unmatched `}`. The top
    /// level of a program is an implicit compound; braced blocks reuse it.
    fn compound(&mut self) -> Node {
        let mut compound = Node::new(NodeKind::Compound(Vec::new()), self.current);
        while self.current.kind != TokenKind::Eof {
            if let Some(child) = self.declaration() {
                compound.push(child);
            }
            if self.current.kind == TokenKind::RBrace {
                break;
            }
        }
        compound
    }

    /// Declaration level: recognizes the declaration keywords before
    /// falling through to plain statements.
    ///
    /// `var`, `function`, `for` and `while` are lexed but their grammar is
    /// not implemented; they get an ordinary recoverable diagnostic and
    /// the keyword is consumed so the walk always makes progress.
    fn declaration(&mut self) -> Option<Node> {
        match self.current.kind {
            TokenKind::Var | TokenKind::Function | TokenKind::For | TokenKind::While => {
                let msg = format!(
                    "'{}' declarations are not implemented.",
                    self.token_text(self.current)
                );
                self.error(&msg);
                self.advance();
                None
            }
            TokenKind::If => self.if_statement(),
            TokenKind::Else => {
                self.error("cannot have 'else' without 'if'.");
                self.eat(TokenKind::Else, None);
                None
            }
            _ => self.statement(),
        }
    }

    /// Plain statement: braced block, `print`, or expression statement.
    /// Blocks carry no trailing semicolon; everything else does.
    fn statement(&mut self) -> Option<Node> {
        let stmt = match self.current.kind {
            TokenKind::LBrace => {
                let token = self.current;
                self.eat(TokenKind::LBrace, None);
                if self.current.kind == TokenKind::RBrace {
                    self.eat(TokenKind::RBrace, None);
                    return Some(Node::new(NodeKind::Compound(Vec::new()), token));
                }
                let stmt = self.compound();
                self.eat(TokenKind::RBrace, Some("expected '}'."));
                return Some(stmt);
            }
            TokenKind::Print => self.print_statement(),
            TokenKind::Return => {
                self.error("'return' statements are not implemented.");
                self.advance();
                None
            }
            _ => self.expression(),
        };

        if stmt.is_some() {
            self.eat(
                TokenKind::Semicolon,
                Some("statement should be ended with a semicolon."),
            );
        }
        stmt
    }

    fn print_statement(&mut self) -> Option<Node> {
        let token = self.current;
        self.eat(TokenKind::Print, None);
        let expr = self.expression()?;
        Some(Node::new(NodeKind::Print(Box::new(expr)), token))
    }

    /// `if` statement. The condition is a parenthesized group; a
    /// semicolon right after it makes a branch-free no-op node, otherwise
    /// the then-branch (and an optional `else` branch) are declarations.
    fn if_statement(&mut self) -> Option<Node> {
        let token = self.current;
        self.eat(TokenKind::If, None);

        let condition = self.group();
        let mut then = None;
        let mut otherwise = None;

        if self.current.kind == TokenKind::Semicolon {
            self.advance();
        } else {
            then = self.declaration();
            if self.current.kind == TokenKind::Else {
                self.eat(TokenKind::Else, None);
                otherwise = self.declaration();
            }
        }

        Some(Node::new(
            NodeKind::If {
                condition: condition.map(Box::new),
                then: then.map(Box::new),
                otherwise: otherwise.map(Box::new),
            },
            token,
        ))
    }
}
