use super::types::Type;
use super::ClassId;
use crate::span::Span;
use serde::Serialize;

/// Every expression has a statically known type, established by the
/// frontend before lowering begins.
#[derive(Debug, Clone, Serialize)]
pub struct Expression {
    pub kind: ExpressionKind,
    pub span: Span,
}

impl Expression {
    pub fn new(kind: ExpressionKind, span: Span) -> Self {
        Expression { kind, span }
    }

    /// Whether this expression denotes a class itself rather than an
    /// instance. Member access off a class reference is spelled with
    /// the scope operator instead of the arrow.
    pub fn is_class_specifier(&self) -> bool {
        matches!(self.kind, ExpressionKind::ClassRef(_))
    }
}

/// Expression variants recognized by the frontend. The back end lowers
/// the subset above the marker comment and aborts on the rest.
#[derive(Debug, Clone, Serialize)]
pub enum ExpressionKind {
    /// Reference to a local variable or parameter.
    Local(String),
    /// Numeric literal, kept as its source spelling.
    NumberLiteral(String),
    /// String literal including quotes, kept as its source spelling.
    StringLiteral(String),
    This,
    /// A class used as a value, e.g. the receiver of static access.
    ClassRef(ClassId),
    Cast(Type, Box<Expression>),
    Unary(UnaryOp, Box<Expression>),
    /// Instance or class-qualified member access.
    Member(Box<Expression>, String),
    /// Left-associative `+`.
    Additive(Box<Expression>, Box<Expression>),
    Assignment(Box<Expression>, AssignmentOp, Box<Expression>),
    Call(Box<Expression>, Vec<Expression>),
    New(ClassId, Vec<Expression>),
    // Recognized by the model, not lowered by this back end.
    BooleanLiteral(bool),
    NullLiteral,
    ArrayLiteral(Vec<Expression>),
    Equality(EqualityOp, Box<Expression>, Box<Expression>),
    Logical(LogicalOp, Box<Expression>, Box<Expression>),
    Conditional(Box<Expression>, Box<Expression>, Box<Expression>),
    Comma(Box<Expression>, Box<Expression>),
    Super,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOp {
    LogicalNot,
    BitwiseNot,
    Plus,
    Minus,
    PreIncrement,
    PreDecrement,
    TypeOf,
}

impl UnaryOp {
    pub fn token(self) -> &'static str {
        match self {
            UnaryOp::LogicalNot => "!",
            UnaryOp::BitwiseNot => "~",
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::PreIncrement => "++",
            UnaryOp::PreDecrement => "--",
            UnaryOp::TypeOf => "typeof",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AssignmentOp {
    Assign,
    AddAssign,
    SubtractAssign,
    MultiplyAssign,
    DivideAssign,
    ModuloAssign,
    ShiftLeftAssign,
    ShiftRightAssign,
    BitwiseAndAssign,
    BitwiseOrAssign,
    BitwiseXorAssign,
}

impl AssignmentOp {
    pub fn token(self) -> &'static str {
        match self {
            AssignmentOp::Assign => "=",
            AssignmentOp::AddAssign => "+=",
            AssignmentOp::SubtractAssign => "-=",
            AssignmentOp::MultiplyAssign => "*=",
            AssignmentOp::DivideAssign => "/=",
            AssignmentOp::ModuloAssign => "%=",
            AssignmentOp::ShiftLeftAssign => "<<=",
            AssignmentOp::ShiftRightAssign => ">>=",
            AssignmentOp::BitwiseAndAssign => "&=",
            AssignmentOp::BitwiseOrAssign => "|=",
            AssignmentOp::BitwiseXorAssign => "^=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EqualityOp {
    Equal,
    NotEqual,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LogicalOp {
    And,
    Or,
}
