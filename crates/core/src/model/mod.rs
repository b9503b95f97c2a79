//! Core data model: one record per recognized binary.
//!
//! A `BinaryRecord` is built once, when the corpus enumerator finds a file that
//! passes format detection, and is never refreshed afterwards.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::services::introspect::Extracted;

/// Identity + extracted metadata for one ELF binary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinaryRecord {
    /// Base file name.
    pub name: String,
    /// Canonical absolute location.
    pub path: PathBuf,
    /// Exported dynamic symbols, in extraction order (duplicates kept).
    pub symbols: Vec<String>,
    /// Directly needed shared libraries, in extraction order.
    pub dependencies: Vec<String>,
}

impl BinaryRecord {
    /// Assemble a record from a finished extraction of `resolved`.
    ///
    /// The name is taken from `found_as` (a symlink keeps its own name); the
    /// stored path is the resolved one.
    pub fn from_extracted(found_as: &Path, resolved: PathBuf, extracted: Extracted) -> Self {
        Self {
            name: base_name(found_as),
            path: resolved,
            symbols: extracted.symbols,
            dependencies: extracted.dependencies,
        }
    }

    /// Build a record from already-known metadata.
    pub fn from_parts(
        path: impl Into<PathBuf>,
        symbols: Vec<String>,
        dependencies: Vec<String>,
    ) -> Self {
        let path = path.into();
        Self { name: base_name(&path), path, symbols, dependencies }
    }

    /// Stable identity used for result-set de-duplication.
    pub fn id(&self) -> &Path {
        &self.path
    }
}

/// Canonical form of `path`, or `path` itself when it cannot be resolved.
pub fn resolve(path: &Path) -> PathBuf {
    path.canonicalize().unwrap_or_else(|_| path.to_path_buf())
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|os| os.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

impl fmt::Display for BinaryRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "File Name: {}", self.name)?;
        writeln!(f, "File Path: {}", self.path.display())?;
        writeln!(f, "Functions:")?;
        for symbol in &self.symbols {
            writeln!(f, "\t{symbol}")?;
        }
        writeln!(f, "Libraries:")?;
        for library in &self.dependencies {
            writeln!(f, "\t{library}")?;
        }
        Ok(())
    }
}
