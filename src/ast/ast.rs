use crate::lexer::tokens::{Token, TokenKind};

use super::expressions::{
    BinaryExpr, BlockExpr, CallExpr, FnExpr, IfExpr, LetExpr, LiteralExpr, ParamList, SymbolExpr,
    UnaryExpr,
};

/// A parsed program: its top-level expressions in source order.
pub type Program = Vec<Expr>;

/// Expression Types
///
/// Defines the various kinds of expressions in the AST.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum ExprType {
    Literal,
    Symbol,
    Unary,
    Binary,
    Call,
    Block,
    Let,
    Fn,
    If,
}

/// Expression
///
/// Every construct of the language. Children are owned by their parent;
/// there is no sharing between trees.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(LiteralExpr),
    Symbol(SymbolExpr),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Call(CallExpr),
    Block(BlockExpr),
    Let(LetExpr),
    Fn(FnExpr),
    If(IfExpr),
}

impl Expr {
    /// Returns the expression type of the expression.
    pub fn get_expr_type(&self) -> ExprType {
        match self {
            Expr::Literal(_) => ExprType::Literal,
            Expr::Symbol(_) => ExprType::Symbol,
            Expr::Unary(_) => ExprType::Unary,
            Expr::Binary(_) => ExprType::Binary,
            Expr::Call(_) => ExprType::Call,
            Expr::Block(_) => ExprType::Block,
            Expr::Let(_) => ExprType::Let,
            Expr::Fn(_) => ExprType::Fn,
            Expr::If(_) => ExprType::If,
        }
    }

    /// The token that names this node: the literal itself for leaves,
    /// the operator or keyword otherwise.
    pub fn operator(&self) -> Token {
        match self {
            Expr::Literal(literal) => literal.token,
            Expr::Symbol(symbol) => symbol.token,
            Expr::Unary(unary) => unary.operator,
            Expr::Binary(binary) => binary.operator,
            Expr::Call(call) => call.operator,
            Expr::Block(block) => block.operator,
            Expr::Let(binding) => binding.operator,
            Expr::Fn(function) => function.operator,
            Expr::If(conditional) => conditional.operator,
        }
    }

    /// Converts into the uniform operator-plus-children shape.
    pub fn to_node(&self) -> Node {
        Node::from(self)
    }
}

/// Node
///
/// Uniform view of an expression: an operator token and its ordered
/// children. Child order per construct:
///
/// | construct          | operator        | children                         |
/// |--------------------|-----------------|----------------------------------|
/// | literal / symbol   | the token       | none                             |
/// | unary              | `!` / `-`       | operand                          |
/// | binary             | operator        | left, right                      |
/// | call               | `(`             | callee, arguments...             |
/// | block              | `do`            | body...                          |
/// | let                | `let`           | name, value                      |
/// | function literal   | `fn`            | parameter list or empty, body    |
/// | parameter list     | `\|`            | parameters...                    |
/// | if                 | `if`            | condition, then, else            |
///
/// The empty node (no operator, no children) stands for an omitted
/// parameter list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    pub operator: Option<Token>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn leaf(token: Token) -> Self {
        Node {
            operator: Some(token),
            children: vec![],
        }
    }

    pub fn kind(&self) -> Option<TokenKind> {
        self.operator.map(|token| token.kind)
    }

    pub fn is_empty(&self) -> bool {
        self.operator.is_none() && self.children.is_empty()
    }
}

impl From<&Expr> for Node {
    fn from(expr: &Expr) -> Self {
        match expr {
            Expr::Literal(literal) => Node::leaf(literal.token),
            Expr::Symbol(symbol) => Node::from(symbol),
            Expr::Unary(unary) => Node {
                operator: Some(unary.operator),
                children: vec![Node::from(unary.operand.as_ref())],
            },
            Expr::Binary(binary) => Node {
                operator: Some(binary.operator),
                children: vec![
                    Node::from(binary.left.as_ref()),
                    Node::from(binary.right.as_ref()),
                ],
            },
            Expr::Call(call) => {
                let mut children = Vec::with_capacity(call.arguments.len() + 1);
                children.push(Node::from(call.callee.as_ref()));
                children.extend(call.arguments.iter().map(Node::from));

                Node {
                    operator: Some(call.operator),
                    children,
                }
            }
            Expr::Block(block) => Node::from(block),
            Expr::Let(binding) => Node {
                operator: Some(binding.operator),
                children: vec![
                    Node::from(&binding.name),
                    Node::from(binding.value.as_ref()),
                ],
            },
            Expr::Fn(function) => Node {
                operator: Some(function.operator),
                children: vec![Node::from(&function.params), Node::from(&function.body)],
            },
            Expr::If(conditional) => Node {
                operator: Some(conditional.operator),
                children: vec![
                    Node::from(conditional.condition.as_ref()),
                    Node::from(&conditional.then_branch),
                    Node::from(&conditional.else_branch),
                ],
            },
        }
    }
}

impl From<&SymbolExpr> for Node {
    fn from(symbol: &SymbolExpr) -> Self {
        Node::leaf(symbol.token)
    }
}

impl From<&BlockExpr> for Node {
    fn from(block: &BlockExpr) -> Self {
        Node {
            operator: Some(block.operator),
            children: block.body.iter().map(Node::from).collect(),
        }
    }
}

impl From<&ParamList> for Node {
    fn from(params: &ParamList) -> Self {
        match params.operator {
            Some(pipe) => Node {
                operator: Some(pipe),
                children: params.params.iter().map(Node::from).collect(),
            },
            None => Node::default(),
        }
    }
}
