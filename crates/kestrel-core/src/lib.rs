//! Kestrel compiler back end: lowers a fully type-checked, class-based
//! AST into C++ source text.
//!
//! The frontend (parser and type checker) owns the AST; this crate only
//! borrows it and appends text. Lowering is a single depth-first pass:
//! class/member lowering drives the statement dispatcher, statements
//! drive the expression dispatcher, and everything writes through one
//! indentation-aware buffer. Coverage of the source language is
//! deliberately partial: any construct without a registered handler
//! aborts emission instead of miscompiling.

pub mod ast;
pub mod codegen;
pub mod emitter;
pub mod errors;
pub mod platform;
pub mod span;

pub use codegen::{CodeGenerator, CodeGeneratorBuilder};
pub use emitter::Emitter;
pub use errors::CodegenError;
pub use platform::{BundledPlatform, NativePlatform, Platform};
