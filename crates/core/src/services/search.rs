use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{FinderError, FinderResult};
use crate::model::BinaryRecord;
use crate::services::corpus::Corpus;

/// Attribute of a record compared against the keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchField {
    FileName,
    SymbolName,
    LibraryName,
}

impl FromStr for SearchField {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "file" | "name" | "file-name" => Ok(Self::FileName),
            "2" | "symbol" | "function" | "symbol-name" => Ok(Self::SymbolName),
            "3" | "library" | "lib" | "library-name" => Ok(Self::LibraryName),
            _ => Err(FinderError::InvalidSearchSelector(s.to_string())),
        }
    }
}

impl fmt::Display for SearchField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::FileName => "file name",
            Self::SymbolName => "function name",
            Self::LibraryName => "library name",
        })
    }
}

/// Comparison policy between field values and the keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Byte-for-byte equality.
    Strict,
    /// Case-insensitive substring containment.
    #[default]
    Substring,
}

impl MatchMode {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Substring
        }
    }

    pub fn is_strict(self) -> bool {
        self == Self::Strict
    }

    fn matches(self, value: &str, keyword: &str) -> bool {
        match self {
            Self::Strict => value == keyword,
            Self::Substring => value.to_lowercase().contains(&keyword.to_lowercase()),
        }
    }
}

/// Whether a search replaces or extends the result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccumulationMode {
    #[default]
    Regular,
    Incremental,
}

impl FromStr for AccumulationMode {
    type Err = FinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "1" | "regular" => Ok(Self::Regular),
            "2" | "incremental" => Ok(Self::Incremental),
            _ => Err(FinderError::InvalidSearchSelector(s.to_string())),
        }
    }
}

impl fmt::Display for AccumulationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Regular => "regular",
            Self::Incremental => "incremental",
        })
    }
}

/// Accumulated matches, ordered by discovery and distinct by record id.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    records: Vec<BinaryRecord>,
    ids: HashSet<PathBuf>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `record` unless a record with the same id is already present.
    /// Returns whether it was added.
    pub fn insert(&mut self, record: &BinaryRecord) -> bool {
        if !self.ids.insert(record.id().to_path_buf()) {
            return false;
        }
        self.records.push(record.clone());
        true
    }

    pub fn clear(&mut self) {
        self.records.clear();
        self.ids.clear();
    }

    pub fn records(&self) -> &[BinaryRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BinaryRecord> {
        self.records.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.records.iter().map(|r| r.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// One search invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    pub field: SearchField,
    pub mode: MatchMode,
    pub accumulation: AccumulationMode,
    pub keyword: String,
}

/// What a search did to the result set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Corpus records that matched, including ones already in the result set.
    pub matched: usize,
    /// Names of records newly appended, in discovery order.
    pub added: Vec<String>,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        self.matched > 0
    }
}

fn record_matches(record: &BinaryRecord, query: &SearchQuery) -> bool {
    let keyword = query.keyword.as_str();
    match query.field {
        SearchField::FileName => query.mode.matches(&record.name, keyword),
        SearchField::SymbolName => record.symbols.iter().any(|s| query.mode.matches(s, keyword)),
        SearchField::LibraryName => {
            record.dependencies.iter().any(|l| query.mode.matches(l, keyword))
        }
    }
}

/// Match every corpus record against `query` and update `results`.
///
/// Regular mode clears `results` first; incremental mode keeps it. An empty
/// corpus is rejected before anything is touched.
pub fn search(
    corpus: &Corpus,
    results: &mut ResultSet,
    query: &SearchQuery,
) -> FinderResult<SearchOutcome> {
    if corpus.is_empty() {
        return Err(FinderError::EmptyCorpus);
    }
    if query.accumulation == AccumulationMode::Regular {
        results.clear();
    }

    let mut outcome = SearchOutcome::default();
    for record in corpus.iter().filter(|r| record_matches(r, query)) {
        outcome.matched += 1;
        if results.insert(record) {
            outcome.added.push(record.name.clone());
        }
    }
    debug!(
        "search {} {:?} '{}': {} matched, {} added",
        query.field,
        query.mode,
        query.keyword,
        outcome.matched,
        outcome.added.len()
    );
    Ok(outcome)
}
