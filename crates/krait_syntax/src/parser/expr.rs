// Pratt expression engine: the rule table and the expression productions.

/// Prefix dispatch targets for the rule table.
#[derive(Debug, Clone, Copy)]
enum PrefixRule {
    Group,
    Number,
    StringLit,
    Primary,
    Unary,
}

/// Infix dispatch targets for the rule table.
#[derive(Debug, Clone, Copy)]
enum InfixRule {
    Binary,
    Comma,
    Ternary,
    Call,
    Postfix,
}

struct ParseRule {
    prefix: Option<PrefixRule>,
    infix: Option<InfixRule>,
    prec: Prec,
}

/// The static rule table: how a token behaves in expression position
/// (prefix), after a finished operand (infix), and how tightly it binds.
///
/// Token kinds not listed (statement keywords, closers, `Error`, `Eof`)
/// parse as nothing: no prefix rule, and a precedence below every
/// `parse_precedence` floor.
const fn rule(kind: TokenKind) -> ParseRule {
    use TokenKind::*;

    let (prefix, infix, prec) = match kind {
        LParen => (
            Some(PrefixRule::Group),
            Some(InfixRule::Call),
            Prec::Postfix,
        ),
        Minus => (
            Some(PrefixRule::Unary),
            Some(InfixRule::Binary),
            Prec::Term,
        ),
        Plus => (None, Some(InfixRule::Binary), Prec::Term),
        Star | Slash | Percent => (None, Some(InfixRule::Binary), Prec::Factor),
        Shl | Shr => (None, Some(InfixRule::Binary), Prec::Shift),
        Lt | LtEq | Gt | GtEq => (None, Some(InfixRule::Binary), Prec::Comparison),
        EqEq | NotEq => (None, Some(InfixRule::Binary), Prec::Equality),
        And => (None, Some(InfixRule::Binary), Prec::LogicalAnd),
        Or => (None, Some(InfixRule::Binary), Prec::LogicalOr),
        BitAnd => (None, Some(InfixRule::Binary), Prec::BitwiseAnd),
        BitOr => (None, Some(InfixRule::Binary), Prec::BitwiseOr),
        Assign => (None, Some(InfixRule::Binary), Prec::Assignment),
        Not | BitNot => (Some(PrefixRule::Unary), None, Prec::Unary),
        Increment | Decrement => (
            Some(PrefixRule::Unary),
            Some(InfixRule::Postfix),
            Prec::Postfix,
        ),
        Question => (None, Some(InfixRule::Ternary), Prec::Ternary),
        Comma => (None, Some(InfixRule::Comma), Prec::Comma),
        Number => (Some(PrefixRule::Number), None, Prec::None),
        Str => (Some(PrefixRule::StringLit), None, Prec::None),
        Ident | True | False | Null => (Some(PrefixRule::Primary), None, Prec::None),
        _ => (None, None, Prec::None),
    };
    ParseRule {
        prefix,
        infix,
        prec,
    }
}

impl<'a> Parser<'a> {
    /// A full expression, comma operator included.
    fn expression(&mut self) -> Option<Node> {
        self.parse_precedence(Prec::Comma)
    }

    /// The Pratt core: parse one prefix operand, then fold in infix
    /// operators while they bind at least as tightly as `min`.
    fn parse_precedence(&mut self, min: Prec) -> Option<Node> {
        let Some(prefix) = rule(self.current.kind).prefix else {
            let msg = self.unexpected(self.current, Some("expected an expression."));
            self.error(&msg);
            if self.current.kind != TokenKind::Eof {
                self.advance();
            }
            return None;
        };
        let mut left = self.run_prefix(prefix)?;

        while min <= rule(self.current.kind).prec {
            let Some(infix) = rule(self.current.kind).infix else {
                break;
            };
            left = self.run_infix(infix, left)?;
        }
        Some(left)
    }

    fn run_prefix(&mut self, rule: PrefixRule) -> Option<Node> {
        match rule {
            PrefixRule::Group => self.group(),
            PrefixRule::Number => self.number(),
            PrefixRule::StringLit => self.string(),
            PrefixRule::Primary => self.primary(),
            PrefixRule::Unary => self.prefix_unary(),
        }
    }

    fn run_infix(&mut self, rule: InfixRule, left: Node) -> Option<Node> {
        match rule {
            InfixRule::Binary => self.binary(left),
            InfixRule::Comma => self.comma(left),
            InfixRule::Ternary => self.ternary(left),
            InfixRule::Call => self.call(left),
            InfixRule::Postfix => self.postfix(left),
        }
    }

    /// Numeric literal. The scanner munches digits and dots greedily, so
    /// conversion is where a lexeme like `1.2.3` gets rejected.
    fn number(&mut self) -> Option<Node> {
        let token = self.current;
        let Ok(value) = self.token_text(token).parse::<f64>() else {
            self.error("malformed number literal.");
            self.advance();
            return None;
        };
        self.eat(TokenKind::Number, None);
        Some(Node::new(NodeKind::Number(value), token))
    }

    fn string(&mut self) -> Option<Node> {
        let token = self.current;
        let text = self.token_text(token).to_owned();
        self.eat(TokenKind::Str, None);
        Some(Node::new(NodeKind::Str(text), token))
    }

    /// Identifier or keyword literal (`true`, `false`, `null`).
    fn primary(&mut self) -> Option<Node> {
        let token = self.current;
        let kind = match token.kind {
            TokenKind::True => {
                self.eat(TokenKind::True, None);
                NodeKind::Bool(true)
            }
            TokenKind::False => {
                self.eat(TokenKind::False, None);
                NodeKind::Bool(false)
            }
            TokenKind::Null => {
                self.eat(TokenKind::Null, None);
                NodeKind::Null
            }
            _ => {
                let name = self.token_text(token).to_owned();
                self.eat(TokenKind::Ident, None);
                NodeKind::Ident(name)
            }
        };
        Some(Node::new(kind, token))
    }

    /// Parenthesized group. Inside a call argument list a bare `()` is an
    /// empty argument list, reported as `None`. When the inner expression
    /// survives but the closer is wrong, skip forward to the `)` so one
    /// bad group does not poison the rest of the statement.
    fn group(&mut self) -> Option<Node> {
        self.eat(TokenKind::LParen, Some("expected '('."));

        if self.current.kind == TokenKind::RParen && self.parsing_call {
            self.eat(TokenKind::RParen, None);
            return None;
        }

        let group = self.expression();
        if group.is_some()
            && self.current.kind != TokenKind::RParen
            && self.current.kind != TokenKind::Eof
        {
            let msg = self.unexpected(
                self.current,
                Some("expected ',' or ')' after expression."),
            );
            self.error(&msg);
            while self.current.kind != TokenKind::RParen && self.current.kind != TokenKind::Eof {
                self.advance();
            }
        }
        if group.is_some() {
            self.eat(TokenKind::RParen, Some("expected ')'."));
        }
        group
    }

    /// Call expression: `left` is the finished callee, current is `(`.
    /// A non-identifier callee is diagnosed but the call node is still
    /// built, so recovery keeps a usable shape.
    fn call(&mut self, callee: Node) -> Option<Node> {
        if !callee.is_identifier() {
            let msg = self.unexpected(callee.token, Some("callee should be an identifier."));
            self.error_at(callee.token, msg);
        }

        let token = self.current;
        let was_parsing_call = self.parsing_call;
        self.parsing_call = true;
        let args = self.group();
        self.parsing_call = was_parsing_call;

        Some(Node::new(
            NodeKind::Call {
                callee: Box::new(callee),
                args: args.map(Box::new),
            },
            token,
        ))
    }

    /// Prefix `- ! ~ ++ --`. The operand binds at unary precedence, and
    /// `++`/`--` additionally require an identifier target (diagnosed
    /// without discarding the node).
    fn prefix_unary(&mut self) -> Option<Node> {
        let token = self.current;
        let op = UnaryOp::from_token(token.kind);
        self.eat(token.kind, None);

        let operand = self.parse_precedence(Prec::Unary);
        if matches!(token.kind, TokenKind::Increment | TokenKind::Decrement) {
            if let Some(operand) = &operand {
                if !operand.is_identifier() {
                    self.error_at(operand.token, "invalid operand in prefix operation.");
                }
            }
        }

        Some(Node::new(
            NodeKind::Unary {
                op,
                operand: Box::new(operand?),
            },
            token,
        ))
    }

    /// Postfix `++`/`--` on a finished operand, binding at the top tier.
    fn postfix(&mut self, operand: Node) -> Option<Node> {
        let token = self.current;
        let op = PostfixOp::from_token(token.kind);
        self.eat(token.kind, None);

        if !operand.is_identifier() {
            self.error_at(operand.token, "invalid operand in postfix operation.");
        }

        Some(Node::new(
            NodeKind::Postfix {
                op,
                operand: Box::new(operand),
            },
            token,
        ))
    }

    /// Infix binary operator, assignment included.
    ///
    /// Assignment is right-associative (it recurses at its own level) and
    /// checks the lvalue at construction: the left operand must be an
    /// identifier or an assignment that was already validated.
    fn binary(&mut self, left: Node) -> Option<Node> {
        let token = self.current;
        self.eat(token.kind, None);

        let is_assignment = token.kind == TokenKind::Assign;
        if is_assignment && !left.is_identifier() && left.token.kind != TokenKind::Assign {
            self.error_at(left.token, "lvalue cannot be a constant.");
            return None;
        }

        let min = if is_assignment {
            Prec::Assignment
        } else {
            rule(token.kind).prec.higher()
        };
        let right = self.parse_precedence(min)?;

        Some(Node::new(
            NodeKind::Binary {
                op: BinaryOp::from_token(token.kind),
                left: Box::new(left),
                right: Box::new(right),
            },
            token,
        ))
    }

    /// Conditional expression: `condition` is already parsed, current is
    /// `?`. The `:` is a hard requirement; without it the whole ternary
    /// is discarded.
    fn ternary(&mut self, condition: Node) -> Option<Node> {
        let token = self.current;
        self.eat(TokenKind::Question, None);

        let then = self.expression()?;
        if self.current.kind != TokenKind::Colon {
            self.error("expected ':' after expression.");
            return None;
        }
        self.eat(TokenKind::Colon, None);
        let otherwise = self.expression()?;

        Some(Node::new(
            NodeKind::Ternary {
                condition: Box::new(condition),
                then: Box::new(then),
                otherwise: Box::new(otherwise),
            },
            token,
        ))
    }

    /// Comma operator: left-fold every comma-separated expression into a
    /// single ordered Sequence. Children parse above comma precedence so
    /// this loop owns every separator at its level.
    fn comma(&mut self, first: Node) -> Option<Node> {
        let token = first.token;
        let mut sequence = Node::new(NodeKind::Sequence(Vec::new()), token);
        sequence.push(first);

        while self.current.kind == TokenKind::Comma {
            self.eat(TokenKind::Comma, None);
            let Some(child) = self.parse_precedence(Prec::Assignment) else {
                self.panic_mode = true;
                return None;
            };
            sequence.push(child);
        }
        Some(sequence)
    }
}
