//! Session state: the explicit context every operator command runs against.
//!
//! Holds the current corpus, the accumulated result set and the two mode
//! flags. All mutation happens through `&mut Session`; a failed operation
//! leaves the previous state untouched.

use std::path::{Path, PathBuf};

use crate::error::FinderResult;
use crate::model::BinaryRecord;
use crate::services::corpus::{self, Corpus};
use crate::services::export;
use crate::services::introspect::MetadataExtractor;
use crate::services::search::{
    self, AccumulationMode, MatchMode, ResultSet, SearchField, SearchOutcome, SearchQuery,
};

/// Summary of a `set_root` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadSummary {
    pub root: PathBuf,
    pub found: usize,
    pub unreadable: Vec<PathBuf>,
    pub extraction_failures: usize,
}

pub struct Session {
    extractor: MetadataExtractor,
    corpus: Corpus,
    results: ResultSet,
    pub match_mode: MatchMode,
    pub accumulation: AccumulationMode,
}

impl Session {
    pub fn new(extractor: MetadataExtractor) -> Self {
        Self {
            extractor,
            corpus: Corpus::default(),
            results: ResultSet::new(),
            match_mode: MatchMode::default(),
            accumulation: AccumulationMode::default(),
        }
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    /// Enumerate `root` and replace the corpus wholesale.
    ///
    /// An invalid path is rejected before the current corpus is touched. The
    /// result set is left alone; it is only changed by searches and `clear_results`.
    pub fn set_root(&mut self, root: impl AsRef<Path>) -> FinderResult<LoadSummary> {
        let enumeration = corpus::enumerate(root, &self.extractor)?;
        self.corpus = enumeration.corpus;
        Ok(LoadSummary {
            root: self.corpus.root().map(Path::to_path_buf).unwrap_or_default(),
            found: self.corpus.len(),
            unreadable: enumeration.unreadable,
            extraction_failures: enumeration.extraction_failures,
        })
    }

    /// Flip strict mode; returns whether strict mode is now on.
    pub fn toggle_strict(&mut self) -> bool {
        self.match_mode = MatchMode::from_strict(!self.match_mode.is_strict());
        self.match_mode.is_strict()
    }

    pub fn is_strict(&self) -> bool {
        self.match_mode.is_strict()
    }

    pub fn set_accumulation(&mut self, mode: AccumulationMode) {
        self.accumulation = mode;
    }

    /// Search the corpus with the session's current modes.
    pub fn search(
        &mut self,
        field: SearchField,
        keyword: impl Into<String>,
    ) -> FinderResult<SearchOutcome> {
        let query = SearchQuery {
            field,
            mode: self.match_mode,
            accumulation: self.accumulation,
            keyword: keyword.into(),
        };
        search::search(&self.corpus, &mut self.results, &query)
    }

    pub fn clear_results(&mut self) {
        self.results.clear();
    }

    pub fn save_report(
        &self,
        destination: &Path,
        file_name: Option<&str>,
    ) -> FinderResult<PathBuf> {
        export::save_results(&self.results, destination, file_name)
    }

    pub fn save_report_json(&self, target: &Path) -> FinderResult<PathBuf> {
        export::save_results_json(&self.results, target)
    }

    pub fn save_files(&self, destination: &Path) -> FinderResult<Vec<PathBuf>> {
        export::save_files(&self.results, destination)
    }
}

/// Names only (summary) or full report blocks (detail), one entry per line/block.
pub fn render_list<'a>(
    records: impl IntoIterator<Item = &'a BinaryRecord>,
    verbose: bool,
) -> String {
    let mut out = String::new();
    for record in records {
        if verbose {
            out.push_str(&format!("{record}\n"));
        } else {
            out.push_str(&record.name);
            out.push('\n');
        }
    }
    out
}
