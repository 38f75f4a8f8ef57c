//! The back-end seam of the compiler: one [`Emitter`] per target
//! language.

use rustc_hash::FxHashMap;

use crate::ast::Program;
use crate::errors::CodegenError;

/// A code-generation back end.
///
/// Capability setters a back end does not support must fail at
/// configuration time, never silently at emission time.
pub trait Emitter {
    /// Lower every class definition of `program` into target source
    /// text. All-or-nothing: on error the accumulated output must not
    /// be used.
    fn emit(&mut self, program: &Program) -> Result<(), CodegenError>;

    /// The output text accumulated by the last [`Emitter::emit`].
    fn output(&self) -> &str;

    fn set_output_file(&mut self, file: Option<String>);

    fn set_run_env(&mut self, run_env: &str);

    fn set_enable_run_time_type_check(&mut self, enable: bool);

    /// Additional directories searched for runtime resources.
    fn search_paths(&self) -> Vec<String> {
        Vec::new()
    }

    /// Generated-file to source-map-file associations.
    fn source_mapping_files(&self) -> FxHashMap<String, String> {
        FxHashMap::default()
    }

    fn enable_source_map(&self) -> bool {
        false
    }

    fn set_enable_source_map(&mut self, enable: bool) -> Result<(), CodegenError>;

    fn set_enable_profiler(&mut self, enable: bool) -> Result<(), CodegenError>;

    fn enable_minifier(&self) -> bool {
        false
    }

    fn set_enable_minifier(&mut self, enable: bool) -> Result<(), CodegenError>;
}
