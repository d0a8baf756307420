//! AST node model for the Krait language.
//!
//! Trees are built bottom-up with exclusive `Box` ownership; nodes own
//! their text (`String` copies made at construction) and never borrow
//! from the source buffer. Every node retains the token that introduced
//! it, so positional diagnostics stay available after parsing.

use crate::token::{Token, TokenKind};

/// Binary operator, mapped from the infix token that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Assign,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Shl,
    Shr,
    And,
    Or,
    BitAnd,
    BitOr,
}

impl BinaryOp {
    /// Map an infix token kind to its operator.
    ///
    /// Only token kinds the parser's rule table routes to a binary infix
    /// handler are valid here; anything else is an internal contract
    /// violation.
    pub fn from_token(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Plus => Self::Add,
            TokenKind::Minus => Self::Sub,
            TokenKind::Star => Self::Mul,
            TokenKind::Slash => Self::Div,
            TokenKind::Percent => Self::Mod,
            TokenKind::Assign => Self::Assign,
            TokenKind::EqEq => Self::Eq,
            TokenKind::NotEq => Self::NotEq,
            TokenKind::Lt => Self::Lt,
            TokenKind::LtEq => Self::LtEq,
            TokenKind::Gt => Self::Gt,
            TokenKind::GtEq => Self::GtEq,
            TokenKind::Shl => Self::Shl,
            TokenKind::Shr => Self::Shr,
            TokenKind::And => Self::And,
            TokenKind::Or => Self::Or,
            TokenKind::BitAnd => Self::BitAnd,
            TokenKind::BitOr => Self::BitOr,
            _ => unreachable!("token kind {kind:?} is not a binary operator"),
        }
    }
}

/// Prefix unary operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Neg,
    Not,
    BitNot,
    Increment,
    Decrement,
}

impl UnaryOp {
    pub fn from_token(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Minus => Self::Neg,
            TokenKind::Not => Self::Not,
            TokenKind::BitNot => Self::BitNot,
            TokenKind::Increment => Self::Increment,
            TokenKind::Decrement => Self::Decrement,
            _ => unreachable!("token kind {kind:?} is not a prefix operator"),
        }
    }
}

/// Postfix unary operator (`a++`, `a--`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostfixOp {
    Increment,
    Decrement,
}

impl PostfixOp {
    pub fn from_token(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Increment => Self::Increment,
            TokenKind::Decrement => Self::Decrement,
            _ => unreachable!("token kind {kind:?} is not a postfix operator"),
        }
    }
}

/// Tagged node payload.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Number(f64),
    Str(String),
    Ident(String),
    Bool(bool),
    Null,
    Unary {
        op: UnaryOp,
        operand: Box<Node>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Node>,
        right: Box<Node>,
    },
    Postfix {
        op: PostfixOp,
        operand: Box<Node>,
    },
    Ternary {
        condition: Box<Node>,
        then: Box<Node>,
        otherwise: Box<Node>,
    },
    /// Comma expression; children in source order.
    Sequence(Vec<Node>),
    /// Function call. `args` is `None` for an empty argument list, which
    /// keeps `f()` distinct from a call whose argument is an empty
    /// sequence.
    Call {
        callee: Box<Node>,
        args: Option<Box<Node>>,
    },
    /// Statement block; children in source order.
    Compound(Vec<Node>),
    /// `if` statement. All three parts are optional: a malformed
    /// condition is dropped during recovery, and `if (c);` is a no-op
    /// with no branches at all.
    If {
        condition: Option<Box<Node>>,
        then: Option<Box<Node>>,
        otherwise: Option<Box<Node>>,
    },
    Print(Box<Node>),
}

/// One AST node: payload plus the token that introduced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub token: Token,
}

impl Node {
    pub fn new(kind: NodeKind, token: Token) -> Self {
        Self { kind, token }
    }

    /// Append a child to an order-sensitive container, returning its
    /// index. Calling this on anything but a Sequence or Compound is an
    /// internal contract violation.
    pub fn push(&mut self, child: Node) -> usize {
        match &mut self.kind {
            NodeKind::Sequence(children) | NodeKind::Compound(children) => {
                children.push(child);
                children.len() - 1
            }
            _ => unreachable!("push on non-container node {:?}", self.token.kind),
        }
    }

    pub fn is_identifier(&self) -> bool {
        matches!(self.kind, NodeKind::Ident(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::Span;

    fn token(kind: TokenKind) -> Token {
        Token::new(kind, Span::new(0, 0), 1, 1)
    }

    #[test]
    fn test_binary_op_from_token() {
        assert_eq!(BinaryOp::from_token(TokenKind::Plus), BinaryOp::Add);
        assert_eq!(BinaryOp::from_token(TokenKind::Shl), BinaryOp::Shl);
        assert_eq!(BinaryOp::from_token(TokenKind::Assign), BinaryOp::Assign);
        assert_eq!(BinaryOp::from_token(TokenKind::And), BinaryOp::And);
    }

    #[test]
    fn test_unary_and_postfix_op_from_token() {
        assert_eq!(UnaryOp::from_token(TokenKind::Minus), UnaryOp::Neg);
        assert_eq!(UnaryOp::from_token(TokenKind::BitNot), UnaryOp::BitNot);
        assert_eq!(
            PostfixOp::from_token(TokenKind::Decrement),
            PostfixOp::Decrement
        );
    }

    #[test]
    fn test_push_preserves_order_and_returns_index() {
        let mut sequence = Node::new(NodeKind::Sequence(Vec::new()), token(TokenKind::Comma));
        let first = sequence.push(Node::new(NodeKind::Number(1.0), token(TokenKind::Number)));
        let second = sequence.push(Node::new(NodeKind::Number(2.0), token(TokenKind::Number)));
        assert_eq!((first, second), (0, 1));
        let NodeKind::Sequence(children) = &sequence.kind else {
            panic!("expected sequence");
        };
        assert_eq!(children[0].kind, NodeKind::Number(1.0));
        assert_eq!(children[1].kind, NodeKind::Number(2.0));
    }

    #[test]
    #[should_panic(expected = "push on non-container node")]
    fn test_push_on_leaf_panics() {
        let mut leaf = Node::new(NodeKind::Null, token(TokenKind::Null));
        leaf.push(Node::new(NodeKind::Null, token(TokenKind::Null)));
    }
}
