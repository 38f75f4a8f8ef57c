//! Class and member lowering: headers, visibility sections,
//! constructor-delegation extraction, and local hoisting.

use tracing::{debug, trace};

use crate::ast::{
    ClassDefinition, ClassId, MemberFunctionDefinition, MemberVariableDefinition, Program,
    Statement,
};
use crate::errors::CodegenError;

use super::CodeGenerator;

impl CodeGenerator {
    pub(crate) fn generate_class(
        &mut self,
        program: &Program,
        id: ClassId,
    ) -> Result<(), CodegenError> {
        let class = self.class_def(program, id)?;
        let super_id = class.extends.ok_or_else(|| {
            CodegenError::UnresolvedReference(format!("super type of class {}", class.name))
        })?;
        let super_name = self.class_name(program, super_id)?;
        debug!(class = %class.name, "emitting class");

        self.write("class ");
        self.write(&class.name);
        self.write(" : public ");
        self.write(&super_name);
        self.writeln(" {");

        self.writeln("public:");
        self.indent();
        for function in &class.functions {
            self.generate_member_function(program, class, function)?;
        }
        self.dedent();

        self.writeln("private:");
        self.indent();
        for variable in &class.variables {
            self.generate_member_variable(program, variable)?;
        }
        self.dedent();

        self.writeln("};");
        self.writeln("");
        Ok(())
    }

    fn generate_member_function(
        &mut self,
        program: &Program,
        class: &ClassDefinition,
        function: &MemberFunctionDefinition,
    ) -> Result<(), CodegenError> {
        if function.is_template {
            trace!(class = %class.name, function = %function.name, "skipping template member function");
            return Ok(());
        }

        if function.is_constructor() {
            self.write(&class.name);
            self.write(" (");
        } else {
            if function.is_static {
                self.write("static ");
            }
            let return_type = function.return_type.as_ref().ok_or_else(|| {
                CodegenError::UnresolvedReference(format!(
                    "return type of {}::{}",
                    class.name, function.name
                ))
            })?;
            let spelled = self.type_name(program, return_type)?;
            self.write(&spelled);
            self.write(" ");
            self.write(&function.name);
            self.write(" (");
        }
        for (index, parameter) in function.parameters.iter().enumerate() {
            if index != 0 {
                self.write(", ");
            }
            let ty = self.type_name(program, &parameter.ty)?;
            self.write(&ty);
            self.write(" ");
            self.write(&parameter.name);
        }
        self.write(")");

        // A leading contiguous run of constructor delegations becomes
        // the member-initializer list and is dropped from the body.
        let delegations = function
            .statements
            .iter()
            .take_while(|statement| matches!(statement, Statement::ConstructorInvocation(_)))
            .count();
        for (index, statement) in function.statements[..delegations].iter().enumerate() {
            if index == 0 {
                self.write(" : ");
            } else {
                self.write(", ");
            }
            self.generate_statement(program, statement)?;
        }

        self.writeln(" {");
        self.indent();

        // Locals are hoisted: one declaration each, at the top of the
        // body, in declaration order.
        for local in &function.locals {
            let ty = self.type_name(program, &local.ty)?;
            self.write(&ty);
            self.write(" ");
            self.write(&local.name);
            self.writeln(";");
        }
        if !function.locals.is_empty() {
            self.writeln("");
        }

        for statement in &function.statements[delegations..] {
            self.generate_statement(program, statement)?;
        }

        self.dedent();
        self.writeln("}");
        self.writeln("");
        Ok(())
    }

    fn generate_member_variable(
        &mut self,
        program: &Program,
        variable: &MemberVariableDefinition,
    ) -> Result<(), CodegenError> {
        let ty = self.type_name(program, &variable.ty)?;
        self.write(&ty);
        self.write(" ");
        self.write(&variable.name);
        self.writeln(";");
        Ok(())
    }
}
