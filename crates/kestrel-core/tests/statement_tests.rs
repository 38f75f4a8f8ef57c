use kestrel_core::ast::*;
use kestrel_core::span::Span;
use kestrel_core::{CodeGeneratorBuilder, CodegenError, Emitter};

fn expr(kind: ExpressionKind) -> Expression {
    Expression::new(kind, Span::dummy())
}

fn local(name: &str) -> Expression {
    expr(ExpressionKind::Local(name.to_string()))
}

fn num(text: &str) -> Expression {
    expr(ExpressionKind::NumberLiteral(text.to_string()))
}

fn assign(target: Expression, value: Expression) -> Expression {
    expr(ExpressionKind::Assignment(
        Box::new(target),
        AssignmentOp::Assign,
        Box::new(value),
    ))
}

fn base_program() -> Program {
    Program::new(vec![ClassDefinition {
        name: "Base".to_string(),
        extends: None,
        kind: ClassKind::Regular,
        is_native: true,
        functions: Vec::new(),
        variables: Vec::new(),
        span: Span::dummy(),
    }])
}

fn render(program: &Program, statement: &Statement) -> Result<String, CodegenError> {
    let mut generator = CodeGeneratorBuilder::new().build();
    generator.generate_statement(program, statement)?;
    Ok(generator.output().to_string())
}

// ============================================================================
// Handled Statements
// ============================================================================

#[test]
fn test_expression_statement_gets_terminator_and_line_break() {
    let program = base_program();
    let statement = Statement::Expression(ExpressionStatement {
        expression: assign(local("x"), num("1")),
        span: Span::dummy(),
    });
    assert_eq!(render(&program, &statement).unwrap(), "x = 1;\n");
}

#[test]
fn test_statement_level_expression_is_never_parenthesized() {
    let program = base_program();
    let statement = Statement::Expression(ExpressionStatement {
        expression: assign(
            local("x"),
            expr(ExpressionKind::Additive(
                Box::new(local("a")),
                Box::new(local("b")),
            )),
        ),
        span: Span::dummy(),
    });
    let output = render(&program, &statement).unwrap();
    assert_eq!(output, "x = a + b;\n");
    assert!(!output.contains('('));
}

#[test]
fn test_return_with_value() {
    let program = base_program();
    let statement = Statement::Return(ReturnStatement {
        value: Some(expr(ExpressionKind::Additive(
            Box::new(local("x")),
            Box::new(local("y")),
        ))),
        span: Span::dummy(),
    });
    assert_eq!(render(&program, &statement).unwrap(), "return x + y;\n");
}

#[test]
fn test_bare_return() {
    let program = base_program();
    let statement = Statement::Return(ReturnStatement {
        value: None,
        span: Span::dummy(),
    });
    assert_eq!(render(&program, &statement).unwrap(), "return;\n");
}

#[test]
fn test_log_statement_wraps_arguments_in_the_console_sink() {
    let program = base_program();
    let statement = Statement::Log(LogStatement {
        arguments: vec![local("x"), num("1")],
        span: Span::dummy(),
    });
    assert_eq!(render(&program, &statement).unwrap(), "console::log(x, 1);\n");
}

#[test]
fn test_log_statement_with_no_arguments() {
    let program = base_program();
    let statement = Statement::Log(LogStatement {
        arguments: Vec::new(),
        span: Span::dummy(),
    });
    assert_eq!(render(&program, &statement).unwrap(), "console::log();\n");
}

#[test]
fn test_constructor_invocation_renders_bare() {
    // No terminator or line break: the text is consumed by the
    // member-initializer list.
    let program = base_program();
    let statement = Statement::ConstructorInvocation(ConstructorInvocationStatement {
        class: ClassId(0),
        arguments: vec![num("1"), num("2")],
        span: Span::dummy(),
    });
    assert_eq!(render(&program, &statement).unwrap(), "Base(1, 2)");
}

// ============================================================================
// Unsupported Statements Fail Loudly
// ============================================================================

#[test]
fn test_unhandled_statement_variant_is_fatal() {
    let program = base_program();
    let statement = Statement::If(IfStatement {
        condition: local("flag"),
        then_branch: Vec::new(),
        else_branch: None,
        span: Span::dummy(),
    });
    let error = render(&program, &statement).unwrap_err();
    assert!(matches!(
        error,
        CodegenError::UnsupportedConstruct { kind: "statement", .. }
    ));
    let message = error.to_string();
    assert!(message.contains("got unexpected type of statement"));
    assert!(message.contains("If"));
}

#[test]
fn test_every_unhandled_statement_variant_is_rejected() {
    let program = base_program();
    let unhandled = vec![
        Statement::While(WhileStatement {
            condition: local("flag"),
            body: Vec::new(),
            span: Span::dummy(),
        }),
        Statement::Break(Span::dummy()),
        Statement::Continue(Span::dummy()),
        Statement::Throw(ThrowStatement {
            value: local("error"),
            span: Span::dummy(),
        }),
    ];
    for statement in unhandled {
        let error = render(&program, &statement).unwrap_err();
        assert!(matches!(error, CodegenError::UnsupportedConstruct { .. }));
    }
}
