use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::detect::is_recognized_binary;
use crate::error::{FinderError, FinderResult};
use crate::model::{resolve, BinaryRecord};
use crate::services::introspect::MetadataExtractor;

/// Binaries found by the most recent enumeration, in traversal order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    root: Option<PathBuf>,
    records: Vec<BinaryRecord>,
}

impl Corpus {
    pub fn new(root: impl Into<PathBuf>, records: Vec<BinaryRecord>) -> Self {
        Self { root: Some(root.into()), records }
    }

    /// Root this corpus was enumerated from; `None` before the first enumeration.
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    pub fn records(&self) -> &[BinaryRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BinaryRecord> {
        self.records.iter()
    }
}

/// Output of one enumeration: the new corpus plus entries the walk could not read.
#[derive(Debug, Default)]
pub struct Enumeration {
    pub corpus: Corpus,
    pub unreadable: Vec<PathBuf>,
    /// Introspection queries that failed and were recorded as empty lists.
    pub extraction_failures: usize,
}

/// Resolve `path` and require it to be an existing file or directory.
pub fn check_file_path(path: impl AsRef<Path>) -> FinderResult<PathBuf> {
    let path = path.as_ref();
    let resolved = path.canonicalize().map_err(|_| FinderError::InvalidPath {
        path: path.to_path_buf(),
        reason: "file or path does not exist".into(),
    })?;
    if resolved.is_file() || resolved.is_dir() {
        Ok(resolved)
    } else {
        Err(FinderError::InvalidPath {
            path: path.to_path_buf(),
            reason: "invalid file or path".into(),
        })
    }
}

/// Build a fresh corpus from `root` (a single file or a directory tree).
///
/// Every regular file is probed for the ELF magic; hits are extracted once.
/// Files that cannot be opened are skipped with a warning. Directory entries
/// the walk itself cannot read are reported in `unreadable`.
pub fn enumerate(
    root: impl AsRef<Path>,
    extractor: &MetadataExtractor,
) -> FinderResult<Enumeration> {
    let given = root.as_ref();
    let root = check_file_path(given)?;
    let mut walk = Walk::default();

    if root.is_file() {
        walk.visit_file(given, extractor);
    } else {
        for entry in WalkDir::new(&root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| root.clone());
                    warn!("unable to read {}: {e}", path.display());
                    walk.unreadable.push(path);
                    continue;
                }
            };
            // Symlinks to regular files count; directory symlinks are not descended.
            if entry.path().is_file() {
                walk.visit_file(entry.path(), extractor);
            }
        }
    }

    info!("found {} ELF files under {}", walk.records.len(), root.display());
    Ok(Enumeration {
        corpus: Corpus::new(root, walk.records),
        unreadable: walk.unreadable,
        extraction_failures: walk.extraction_failures,
    })
}

#[derive(Default)]
struct Walk {
    records: Vec<BinaryRecord>,
    unreadable: Vec<PathBuf>,
    extraction_failures: usize,
}

impl Walk {
    fn visit_file(&mut self, path: &Path, extractor: &MetadataExtractor) {
        if !is_recognized_binary(path) {
            return;
        }
        debug!("ELF: {}", path.display());
        let resolved = resolve(path);
        let extracted = extractor.extract(&resolved);
        self.extraction_failures += extracted.failures;
        self.records.push(BinaryRecord::from_extracted(path, resolved, extracted));
    }
}
