use std::path::{Path, PathBuf};

use crate::error::IntrospectionError;
use crate::services::backends::run_tool;
use crate::services::introspect::DependencyLister;

/// Environment override for the `objdump` executable.
pub const OBJDUMP_ENV: &str = "EXEFIND_OBJDUMP";

/// Dumps the private (program/dynamic) headers with `objdump -p`.
#[derive(Debug, Clone)]
pub struct ObjdumpDependencyLister {
    pub objdump_path: PathBuf,
}

impl ObjdumpDependencyLister {
    pub fn new(objdump_path: impl Into<PathBuf>) -> Self {
        Self { objdump_path: objdump_path.into() }
    }
}

impl DependencyLister for ObjdumpDependencyLister {
    fn program_headers(&self, binary: &Path) -> Result<String, IntrospectionError> {
        run_tool(&self.objdump_path, &["-p"], binary)
    }

    fn name(&self) -> &'static str {
        "objdump"
    }
}
