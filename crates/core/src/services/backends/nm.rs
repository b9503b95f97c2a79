use std::path::{Path, PathBuf};

use crate::error::IntrospectionError;
use crate::services::backends::run_tool;
use crate::services::introspect::SymbolLister;

/// Environment override for the `nm` executable.
pub const NM_ENV: &str = "EXEFIND_NM";

/// Lists the dynamic symbol table with `nm -D`.
#[derive(Debug, Clone)]
pub struct NmSymbolLister {
    pub nm_path: PathBuf,
}

impl NmSymbolLister {
    pub fn new(nm_path: impl Into<PathBuf>) -> Self {
        Self { nm_path: nm_path.into() }
    }
}

impl SymbolLister for NmSymbolLister {
    fn dynamic_symbols(&self, binary: &Path) -> Result<String, IntrospectionError> {
        run_tool(&self.nm_path, &["-D"], binary)
    }

    fn name(&self) -> &'static str {
        "nm"
    }
}
