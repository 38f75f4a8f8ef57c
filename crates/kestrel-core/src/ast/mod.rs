//! The typed AST consumed by the back end.
//!
//! Produced once by the frontend before lowering begins and immutable
//! from this crate's perspective: the engine borrows nodes, never
//! clones or rewrites them. Class references are indices into the
//! [`Program`] that owns every definition.

pub mod class;
pub mod expression;
pub mod statement;
pub mod types;

pub use class::{
    ClassDefinition, ClassKind, LocalVariable, MemberFunctionDefinition, MemberVariableDefinition,
    Parameter, CONSTRUCTOR_NAME,
};
pub use expression::{
    AssignmentOp, EqualityOp, Expression, ExpressionKind, LogicalOp, UnaryOp,
};
pub use statement::{
    ConstructorInvocationStatement, ExpressionStatement, IfStatement, LogStatement,
    ReturnStatement, Statement, ThrowStatement, WhileStatement,
};
pub use types::Type;

use rustc_hash::FxHashMap;
use serde::Serialize;

/// Index of a class definition inside a [`Program`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ClassId(pub u32);

/// Every class definition of one type-checked compilation, in
/// declaration order. Owned by the frontend; emission order follows the
/// declaration order exactly.
#[derive(Debug, Clone)]
pub struct Program {
    classes: Vec<ClassDefinition>,
    by_name: FxHashMap<String, ClassId>,
}

impl Program {
    pub fn new(classes: Vec<ClassDefinition>) -> Self {
        let mut by_name = FxHashMap::default();
        for (index, class) in classes.iter().enumerate() {
            by_name
                .entry(class.name.clone())
                .or_insert(ClassId(index as u32));
        }
        Program { classes, by_name }
    }

    pub fn class(&self, id: ClassId) -> Option<&ClassDefinition> {
        self.classes.get(id.0 as usize)
    }

    pub fn classes(&self) -> impl Iterator<Item = (ClassId, &ClassDefinition)> {
        self.classes
            .iter()
            .enumerate()
            .map(|(index, class)| (ClassId(index as u32), class))
    }

    /// First class declared under `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<ClassId> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}
