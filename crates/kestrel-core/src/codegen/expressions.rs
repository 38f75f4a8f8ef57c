//! Expression lowering: one handler per variant.
//!
//! Handlers write through the shared buffer rather than returning
//! strings; the rendered text is what a standalone pretty-printer
//! would produce. A variant with no handler aborts the whole emission.

use crate::ast::{Expression, ExpressionKind, Program};
use crate::errors::CodegenError;

use super::{CodeGenerator, Precedence};

impl CodeGenerator {
    /// Lower `expression` within the binding strength of its parent.
    /// The rendered text is parenthesized iff the expression binds
    /// looser than its context.
    pub fn generate_expression(
        &mut self,
        program: &Program,
        expression: &Expression,
        context: Precedence,
    ) -> Result<(), CodegenError> {
        match &expression.kind {
            ExpressionKind::Local(name) => {
                self.write(name);
                Ok(())
            }
            // literal spellings come out of the frontend already valid
            ExpressionKind::NumberLiteral(text) | ExpressionKind::StringLiteral(text) => {
                self.write(text);
                Ok(())
            }
            ExpressionKind::This => {
                self.write("this");
                Ok(())
            }
            ExpressionKind::ClassRef(class) => {
                let name = self.class_name(program, *class)?;
                self.write(&name);
                Ok(())
            }
            ExpressionKind::Cast(target, operand) => {
                let target = self.type_name(program, target)?;
                self.write("(");
                self.write(&target);
                self.write(")");
                self.generate_expression(program, operand, context)
            }
            ExpressionKind::Unary(op, operand) => {
                self.emit_with_precedence(context, Precedence::UNARY, |gen| {
                    gen.write(op.token());
                    gen.write(" ");
                    gen.generate_expression(program, operand, Precedence::UNARY)
                })
            }
            ExpressionKind::Member(object, member) => {
                self.emit_with_precedence(context, Precedence::PRIMARY, |gen| {
                    gen.generate_expression(program, object, Precedence::PRIMARY)?;
                    gen.write(if object.is_class_specifier() {
                        "::"
                    } else {
                        "->"
                    });
                    gen.write(member);
                    Ok(())
                })
            }
            ExpressionKind::Additive(left, right) => {
                self.emit_with_precedence(context, Precedence::ADDITIVE, |gen| {
                    gen.generate_expression(program, left, Precedence::ADDITIVE)?;
                    gen.write(" + ");
                    gen.generate_expression(program, right, Precedence::ADDITIVE.tighter())
                })
            }
            ExpressionKind::Assignment(target, op, value) => {
                self.emit_with_precedence(context, Precedence::ASSIGNMENT, |gen| {
                    gen.generate_expression(program, target, Precedence::ASSIGNMENT)?;
                    gen.write(" ");
                    gen.write(op.token());
                    gen.write(" ");
                    gen.generate_expression(program, value, Precedence::STATEMENT)
                })
            }
            ExpressionKind::Call(callee, arguments) => {
                self.emit_with_precedence(context, Precedence::PRIMARY, |gen| {
                    gen.generate_expression(program, callee, Precedence::PRIMARY)?;
                    gen.emit_call_arguments(program, arguments)
                })
            }
            ExpressionKind::New(class, arguments) => {
                self.emit_with_precedence(context, Precedence::PRIMARY, |gen| {
                    let name = gen.class_name(program, *class)?;
                    gen.write("new ");
                    gen.write(&name);
                    gen.emit_call_arguments(program, arguments)
                })
            }
            ExpressionKind::BooleanLiteral(_)
            | ExpressionKind::NullLiteral
            | ExpressionKind::ArrayLiteral(_)
            | ExpressionKind::Equality(..)
            | ExpressionKind::Logical(..)
            | ExpressionKind::Conditional(..)
            | ExpressionKind::Comma(..)
            | ExpressionKind::Super => Err(CodegenError::unsupported("expression", expression)),
        }
    }

    /// Render one expression standalone, in the statement-level context.
    pub fn expression_to_string(
        &mut self,
        program: &Program,
        expression: &Expression,
    ) -> Result<String, CodegenError> {
        let saved = std::mem::take(&mut self.writer);
        let result = self.generate_expression(program, expression, Precedence::STATEMENT);
        let rendered = std::mem::replace(&mut self.writer, saved);
        result.map(|_| rendered.finish())
    }

    pub(crate) fn emit_call_arguments(
        &mut self,
        program: &Program,
        arguments: &[Expression],
    ) -> Result<(), CodegenError> {
        self.write("(");
        for (index, argument) in arguments.iter().enumerate() {
            if index != 0 {
                self.write(", ");
            }
            self.generate_expression(program, argument, Precedence::STATEMENT)?;
        }
        self.write(")");
        Ok(())
    }

    fn emit_with_precedence(
        &mut self,
        context: Precedence,
        own: Precedence,
        body: impl FnOnce(&mut Self) -> Result<(), CodegenError>,
    ) -> Result<(), CodegenError> {
        if own.needs_parens(context) {
            self.write("(");
            body(self)?;
            self.write(")");
            Ok(())
        } else {
            body(self)
        }
    }
}
