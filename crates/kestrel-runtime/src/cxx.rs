//! C++ back-end support text.

/// Runtime-support preamble prepended verbatim to every generated
/// translation unit. Declares the `kestrel` namespace built-ins the
/// lowered code relies on (root object, boxed array, console sink).
pub const BOOTSTRAP: &str = include_str!("cxx/bootstrap.h");

/// Path of the bootstrap header relative to a platform root.
pub const BOOTSTRAP_PATH: &str = "cxx/bootstrap.h";

/// Program-entry stub appended after the namespace close. Hands an
/// empty argument array to the designated entry point.
pub const ENTRY_POINT: &str = r#"int main() {
  kestrel::_Main::main(new kestrel::Array<kestrel::string>());
}
"#;
