//! Statement lowering: one handler per variant, mirroring the
//! expression dispatcher's exhaustiveness contract.

use crate::ast::{Program, Statement};
use crate::errors::CodegenError;

use super::{CodeGenerator, Precedence};

impl CodeGenerator {
    pub fn generate_statement(
        &mut self,
        program: &Program,
        statement: &Statement,
    ) -> Result<(), CodegenError> {
        match statement {
            // rendered bare; consumed by the member-initializer list
            Statement::ConstructorInvocation(invocation) => {
                let name = self.class_name(program, invocation.class)?;
                self.write(&name);
                self.emit_call_arguments(program, &invocation.arguments)
            }
            Statement::Expression(statement) => {
                self.generate_expression(program, &statement.expression, Precedence::STATEMENT)?;
                self.writeln(";");
                Ok(())
            }
            Statement::Return(statement) => {
                match &statement.value {
                    Some(value) => {
                        self.write("return ");
                        self.generate_expression(program, value, Precedence::STATEMENT)?;
                        self.writeln(";");
                    }
                    None => {
                        self.writeln("return;");
                    }
                }
                Ok(())
            }
            Statement::Log(statement) => {
                self.write("console::log(");
                for (index, argument) in statement.arguments.iter().enumerate() {
                    if index != 0 {
                        self.write(", ");
                    }
                    self.generate_expression(program, argument, Precedence::STATEMENT)?;
                }
                self.writeln(");");
                Ok(())
            }
            Statement::If(_)
            | Statement::While(_)
            | Statement::Break(_)
            | Statement::Continue(_)
            | Statement::Throw(_) => Err(CodegenError::unsupported("statement", statement)),
        }
    }
}
