//! Lowers a small two-member class to C++ and prints the result.
//!
//! Run with `cargo run --example emit_point`.

use anyhow::Result;

use kestrel_core::ast::*;
use kestrel_core::span::Span;
use kestrel_core::CodeGeneratorBuilder;

fn expr(kind: ExpressionKind) -> Expression {
    Expression::new(kind, Span::dummy())
}

fn number() -> Type {
    Type::Primitive("number".to_string())
}

fn this_member(name: &str) -> Expression {
    expr(ExpressionKind::Member(
        Box::new(expr(ExpressionKind::This)),
        name.to_string(),
    ))
}

fn assign_member(name: &str) -> Statement {
    Statement::Expression(ExpressionStatement {
        expression: expr(ExpressionKind::Assignment(
            Box::new(this_member(name)),
            AssignmentOp::Assign,
            Box::new(expr(ExpressionKind::Local(name.to_string()))),
        )),
        span: Span::dummy(),
    })
}

fn parameter(name: &str) -> Parameter {
    Parameter {
        name: name.to_string(),
        ty: number(),
        span: Span::dummy(),
    }
}

fn member(name: &str) -> MemberVariableDefinition {
    MemberVariableDefinition {
        name: name.to_string(),
        ty: number(),
        span: Span::dummy(),
    }
}

fn point_program() -> Program {
    let object = ClassDefinition {
        name: "Object".to_string(),
        extends: None,
        kind: ClassKind::Regular,
        is_native: true,
        functions: Vec::new(),
        variables: Vec::new(),
        span: Span::dummy(),
    };

    let constructor = MemberFunctionDefinition {
        name: CONSTRUCTOR_NAME.to_string(),
        is_static: false,
        is_template: false,
        return_type: None,
        parameters: vec![parameter("x"), parameter("y")],
        locals: Vec::new(),
        statements: vec![assign_member("x"), assign_member("y")],
        span: Span::dummy(),
    };

    let sum = MemberFunctionDefinition {
        name: "sum".to_string(),
        is_static: false,
        is_template: false,
        return_type: Some(number()),
        parameters: Vec::new(),
        locals: Vec::new(),
        statements: vec![Statement::Return(ReturnStatement {
            value: Some(expr(ExpressionKind::Additive(
                Box::new(this_member("x")),
                Box::new(this_member("y")),
            ))),
            span: Span::dummy(),
        })],
        span: Span::dummy(),
    };

    let point = ClassDefinition {
        name: "Point".to_string(),
        extends: Some(ClassId(0)),
        kind: ClassKind::Regular,
        is_native: false,
        functions: vec![constructor, sum],
        variables: vec![member("x"), member("y")],
        span: Span::dummy(),
    };

    Program::new(vec![object, point])
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let program = point_program();
    let mut generator = CodeGeneratorBuilder::new().build();
    let output = generator.generate(&program)?;
    print!("{output}");
    Ok(())
}
