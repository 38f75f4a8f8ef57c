//! Host-environment seam: where runtime-support resources come from.

use std::io;
use std::path::{Path, PathBuf};

use crate::errors::CodegenError;

/// Resolves the installation root and loads runtime-support resources.
/// A missing resource is always fatal.
pub trait Platform {
    /// Root directory under which resources are resolved.
    fn root(&self) -> &Path;

    /// Load a resource verbatim.
    fn load(&self, path: &Path) -> Result<String, CodegenError>;
}

/// Filesystem-backed platform rooted at a toolchain installation.
pub struct NativePlatform {
    root: PathBuf,
}

impl NativePlatform {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        NativePlatform { root: root.into() }
    }
}

impl Platform for NativePlatform {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load(&self, path: &Path) -> Result<String, CodegenError> {
        std::fs::read_to_string(path).map_err(|source| CodegenError::MissingResource {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Serves the resources compiled into `kestrel-runtime`; the default
/// for embedders without an on-disk toolchain root.
#[derive(Default)]
pub struct BundledPlatform;

impl Platform for BundledPlatform {
    fn root(&self) -> &Path {
        Path::new("")
    }

    fn load(&self, path: &Path) -> Result<String, CodegenError> {
        if path == Path::new(kestrel_runtime::cxx::BOOTSTRAP_PATH) {
            return Ok(kestrel_runtime::cxx::BOOTSTRAP.to_string());
        }
        Err(CodegenError::MissingResource {
            path: path.display().to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "not a bundled resource"),
        })
    }
}
