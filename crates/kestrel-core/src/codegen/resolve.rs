//! Type and class-name resolution for the C++ output.

use crate::ast::{ClassDefinition, ClassId, ClassKind, Program, Type};
use crate::errors::CodegenError;

use super::CodeGenerator;

/// Spelling used for function-typed values; real callable signatures
/// are not supported by this back end.
pub(crate) const FUNCTION_TYPE_PLACEHOLDER: &str = "void";

impl CodeGenerator {
    pub(crate) fn class_def<'p>(
        &self,
        program: &'p Program,
        id: ClassId,
    ) -> Result<&'p ClassDefinition, CodegenError> {
        program
            .class(id)
            .ok_or_else(|| CodegenError::UnresolvedReference(format!("class #{}", id.0)))
    }

    /// Target-language spelling of a type reference. Objects are always
    /// referenced through an owning pointer.
    pub fn type_name(&self, program: &Program, ty: &Type) -> Result<String, CodegenError> {
        match ty {
            Type::Function { .. } => Ok(FUNCTION_TYPE_PLACEHOLDER.to_string()),
            Type::Primitive(name) => Ok(name.clone()),
            Type::Object(id) => Ok(format!("{}*", self.class_name(program, *id)?)),
        }
    }

    /// Declared name of a plain class, or the mangled spelling of a
    /// template instantiation: the resolved type-argument names are
    /// concatenated in declaration order with no separator. Ambiguous
    /// for multi-argument instantiations; kept as-is.
    pub fn class_name(&self, program: &Program, id: ClassId) -> Result<String, CodegenError> {
        let class = self.class_def(program, id)?;
        match &class.kind {
            ClassKind::Instantiated {
                template,
                type_arguments,
            } => {
                let mut name = String::from(template.as_str());
                name.push('<');
                for argument in type_arguments {
                    name.push_str(&self.type_name(program, argument)?);
                }
                name.push('>');
                Ok(name)
            }
            ClassKind::Regular | ClassKind::Template => Ok(class.name.clone()),
        }
    }
}
