//! Builder for configured [`CodeGenerator`] instances.

use std::sync::Arc;

use crate::emitter::Emitter;
use crate::platform::{BundledPlatform, Platform};

use super::CodeGenerator;

/// Fluent construction of a [`CodeGenerator`].
///
/// Defaults to the bundled resource platform; embedders with an
/// on-disk toolchain root swap in a
/// [`NativePlatform`](crate::platform::NativePlatform).
///
/// # Example
///
/// ```rust
/// use kestrel_core::codegen::CodeGeneratorBuilder;
///
/// let generator = CodeGeneratorBuilder::new()
///     .run_env("debug")
///     .output_file("point.cc")
///     .build();
/// assert_eq!(generator.run_env(), Some("debug"));
/// ```
pub struct CodeGeneratorBuilder {
    platform: Arc<dyn Platform>,
    output_file: Option<String>,
    run_env: Option<String>,
    enable_run_time_type_check: bool,
}

impl CodeGeneratorBuilder {
    pub fn new() -> Self {
        Self {
            platform: Arc::new(BundledPlatform),
            output_file: None,
            run_env: None,
            enable_run_time_type_check: false,
        }
    }

    /// Resolve runtime resources through `platform` instead of the
    /// bundled ones.
    pub fn platform(mut self, platform: Arc<dyn Platform>) -> Self {
        self.platform = platform;
        self
    }

    pub fn output_file(mut self, file: impl Into<String>) -> Self {
        self.output_file = Some(file.into());
        self
    }

    pub fn run_env(mut self, run_env: impl Into<String>) -> Self {
        self.run_env = Some(run_env.into());
        self
    }

    pub fn run_time_type_check(mut self, enable: bool) -> Self {
        self.enable_run_time_type_check = enable;
        self
    }

    pub fn build(self) -> CodeGenerator {
        let mut generator = CodeGenerator::new(self.platform);
        generator.set_output_file(self.output_file);
        if let Some(run_env) = self.run_env {
            generator.set_run_env(&run_env);
        }
        generator.set_enable_run_time_type_check(self.enable_run_time_type_check);
        generator
    }
}

impl Default for CodeGeneratorBuilder {
    fn default() -> Self {
        CodeGeneratorBuilder::new()
    }
}
