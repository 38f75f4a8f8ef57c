use serde::Serialize;
use std::fmt::Debug;
use thiserror::Error;

/// Fatal conditions raised by the C++ back end.
///
/// None of these are recoverable: emission is all-or-nothing and there
/// is no warning tier, so a gap in construct coverage can never turn
/// into silently miscompiled output.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// An AST variant with no registered lowering handler. Carries a
    /// serialized form of the offending node.
    #[error("got unexpected type of {kind}: {node}")]
    UnsupportedConstruct { kind: &'static str, node: String },

    /// A type or class reference that cannot be spelled in the target
    /// language.
    #[error("unresolved reference: {0}")]
    UnresolvedReference(String),

    /// A capability this back end deliberately does not provide,
    /// rejected at configuration time.
    #[error("the C++ emitter does not support {0}")]
    UnsupportedCapability(&'static str),

    /// A runtime-support resource could not be loaded.
    #[error("failed to load resource {path}")]
    MissingResource {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl CodegenError {
    pub(crate) fn unsupported<T: Serialize + Debug>(kind: &'static str, node: &T) -> Self {
        let node = serde_json::to_string(node).unwrap_or_else(|_| format!("{node:?}"));
        CodegenError::UnsupportedConstruct { kind, node }
    }
}
