//! C++ code generation from the typed Kestrel AST.
//!
//! One unbroken depth-first pass: class/member lowering iterates the
//! declared classes, the statement dispatcher iterates each function
//! body, and each statement handler recurses into the expression
//! dispatcher, all writing through the shared [`SourceWriter`]. The
//! only termination modes are a completed lowering or a fatal
//! [`CodegenError`](crate::errors::CodegenError).

mod builder;
mod classes;
mod expressions;
pub mod precedence;
mod resolve;
mod statements;
pub mod writer;

pub use builder::CodeGeneratorBuilder;
pub use precedence::Precedence;
pub use writer::SourceWriter;

use std::sync::Arc;

use kestrel_runtime::cxx;
use tracing::{debug, trace};

use crate::ast::Program;
use crate::emitter::Emitter;
use crate::errors::CodegenError;
use crate::platform::Platform;

/// Namespace wrapping every generated class.
const OUTPUT_NAMESPACE: &str = "kestrel";

/// C++ code generator. One instance owns one output buffer; a lowering
/// run must not be shared between two programs at once.
pub struct CodeGenerator {
    platform: Arc<dyn Platform>,
    writer: SourceWriter,
    output_file: Option<String>,
    run_env: Option<String>,
    enable_run_time_type_check: bool,
}

impl CodeGenerator {
    pub fn new(platform: Arc<dyn Platform>) -> Self {
        Self {
            platform,
            writer: SourceWriter::new(),
            output_file: None,
            run_env: None,
            enable_run_time_type_check: false,
        }
    }

    pub fn output_file(&self) -> Option<&str> {
        self.output_file.as_deref()
    }

    pub fn run_env(&self) -> Option<&str> {
        self.run_env.as_deref()
    }

    pub fn run_time_type_check_enabled(&self) -> bool {
        self.enable_run_time_type_check
    }

    /// Lower the whole program and return the generated translation
    /// unit: runtime preamble, namespaced class bodies in declaration
    /// order, then the fixed entry stub.
    pub fn generate(&mut self, program: &Program) -> Result<String, CodegenError> {
        debug!(classes = program.len(), "lowering program to C++");
        self.writer = SourceWriter::new();

        self.emit_bootstrap()?;

        self.write("namespace ");
        self.write(OUTPUT_NAMESPACE);
        self.writeln(" {");
        self.writeln("");
        self.indent();
        for (id, class) in program.classes() {
            if class.is_native {
                trace!(class = %class.name, "skipping native class");
                continue;
            }
            if class.is_generic() {
                trace!(class = %class.name, "skipping template class");
                continue;
            }
            self.generate_class(program, id)?;
        }
        self.dedent();
        self.writeln("}");

        self.emit_entry_point();
        Ok(self.writer.output().to_string())
    }

    fn emit_bootstrap(&mut self) -> Result<(), CodegenError> {
        let path = self.platform.root().join(cxx::BOOTSTRAP_PATH);
        let bootstrap = self.platform.load(&path)?;
        self.write(&bootstrap);
        self.write("\n");
        Ok(())
    }

    fn emit_entry_point(&mut self) {
        self.write("\n");
        self.write(cxx::ENTRY_POINT);
    }

    pub(crate) fn write(&mut self, text: &str) {
        self.writer.write(text);
    }

    pub(crate) fn writeln(&mut self, text: &str) {
        self.writer.writeln(text);
    }

    pub(crate) fn indent(&mut self) {
        self.writer.indent();
    }

    pub(crate) fn dedent(&mut self) {
        self.writer.dedent();
    }
}

impl Emitter for CodeGenerator {
    fn emit(&mut self, program: &Program) -> Result<(), CodegenError> {
        self.generate(program).map(|_| ())
    }

    fn output(&self) -> &str {
        self.writer.output()
    }

    fn set_output_file(&mut self, file: Option<String>) {
        self.output_file = file;
    }

    fn set_run_env(&mut self, run_env: &str) {
        self.run_env = Some(run_env.to_string());
    }

    fn set_enable_run_time_type_check(&mut self, enable: bool) {
        self.enable_run_time_type_check = enable;
    }

    fn set_enable_source_map(&mut self, _enable: bool) -> Result<(), CodegenError> {
        Err(CodegenError::UnsupportedCapability("source maps"))
    }

    fn set_enable_profiler(&mut self, _enable: bool) -> Result<(), CodegenError> {
        Err(CodegenError::UnsupportedCapability("a profiler hook"))
    }

    fn set_enable_minifier(&mut self, _enable: bool) -> Result<(), CodegenError> {
        Err(CodegenError::UnsupportedCapability("minification"))
    }
}
