use super::statement::Statement;
use super::types::Type;
use super::ClassId;
use crate::span::Span;
use serde::Serialize;

/// Member functions carrying this literal name are constructors.
pub const CONSTRUCTOR_NAME: &str = "constructor";

#[derive(Debug, Clone, Serialize)]
pub struct ClassDefinition {
    pub name: String,
    /// Single super type; absent only on the native root class.
    pub extends: Option<ClassId>,
    pub kind: ClassKind,
    /// Native classes model target-language built-ins and emit no body.
    pub is_native: bool,
    pub functions: Vec<MemberFunctionDefinition>,
    pub variables: Vec<MemberVariableDefinition>,
    pub span: Span,
}

impl ClassDefinition {
    /// Template definitions and their instantiations are never emitted
    /// at top level; instantiations are only nameable as types.
    pub fn is_generic(&self) -> bool {
        !matches!(self.kind, ClassKind::Regular)
    }
}

#[derive(Debug, Clone, Serialize)]
pub enum ClassKind {
    Regular,
    Template,
    /// Concrete specialization of a template class, bound to its type
    /// arguments in declaration order.
    Instantiated {
        template: String,
        type_arguments: Vec<Type>,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberFunctionDefinition {
    pub name: String,
    pub is_static: bool,
    pub is_template: bool,
    /// None for constructors.
    pub return_type: Option<Type>,
    pub parameters: Vec<Parameter>,
    /// Every local declared anywhere in the body, in declaration order.
    /// Declarations are hoisted to the top of the emitted body.
    pub locals: Vec<LocalVariable>,
    pub statements: Vec<Statement>,
    pub span: Span,
}

impl MemberFunctionDefinition {
    pub fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR_NAME
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    pub name: String,
    pub ty: Type,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocalVariable {
    pub name: String,
    pub ty: Type,
    pub span: Span,
}

#[derive(Debug, Clone, Serialize)]
pub struct MemberVariableDefinition {
    pub name: String,
    pub ty: Type,
    pub span: Span,
}
