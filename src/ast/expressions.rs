use crate::lexer::tokens::Token;

use super::ast::Expr;

// LITERALS

/// Literal Expression
/// A number, string, `true`, `false` or `nil` token.
#[derive(Debug, Clone, PartialEq)]
pub struct LiteralExpr {
    pub token: Token,
}

/// Symbol Expression
/// An identifier reference.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolExpr {
    pub token: Token,
}

// COMPLEX

/// Prefix Expression
/// `!operand` or `-operand`.
#[derive(Debug, Clone, PartialEq)]
pub struct UnaryExpr {
    pub operator: Token,
    pub operand: Box<Expr>,
}

/// Binary Expression
/// Arithmetic, comparison and logical (`and`/`or`) operators.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Box<Expr>,
    pub operator: Token,
    pub right: Box<Expr>,
}

/// Call Expression
/// `operator` is the `(` that opened the argument list.
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub operator: Token,
    pub callee: Box<Expr>,
    pub arguments: Vec<Expr>,
}

/// Block Expression
/// A sequence of expressions closed by `end` or `else`. The operator is
/// always tagged `Do`, but keeps the span of the keyword that opened it.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockExpr {
    pub operator: Token,
    pub body: Vec<Expr>,
}

/// Let Expression
#[derive(Debug, Clone, PartialEq)]
pub struct LetExpr {
    pub operator: Token,
    pub name: SymbolExpr,
    pub value: Box<Expr>,
}

/// Parameter list of a function literal. `operator` is the opening `|`;
/// it is `None` when the function was written without pipes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParamList {
    pub operator: Option<Token>,
    pub params: Vec<SymbolExpr>,
}

impl ParamList {
    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

/// Function Literal Expression
#[derive(Debug, Clone, PartialEq)]
pub struct FnExpr {
    pub operator: Token,
    pub params: ParamList,
    pub body: BlockExpr,
}

/// If Expression
/// Both branches are always present.
#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub operator: Token,
    pub condition: Box<Expr>,
    pub then_branch: BlockExpr,
    pub else_branch: BlockExpr,
}
