//! Runtime support code for the Kestrel compiler.
//! Provides C++ snippets embedded via `include_str!` for codegen.

pub mod cxx;
