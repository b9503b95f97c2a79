use std::path::Path;

use tracing::{debug, warn};

use crate::error::IntrospectionError;

/// Source of the dynamic symbol table text for a binary (e.g. `nm -D`).
pub trait SymbolLister: Send + Sync {
    fn dynamic_symbols(&self, binary: &Path) -> Result<String, IntrospectionError>;
    fn name(&self) -> &'static str;
}

/// Source of the program/dynamic header text for a binary (e.g. `objdump -p`).
pub trait DependencyLister: Send + Sync {
    fn program_headers(&self, binary: &Path) -> Result<String, IntrospectionError>;
    fn name(&self) -> &'static str;
}

/// Metadata pulled from one binary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    pub symbols: Vec<String>,
    pub dependencies: Vec<String>,
    /// Number of queries that failed and were treated as empty output.
    pub failures: usize,
}

/// Runs both introspection queries and parses their text.
pub struct MetadataExtractor {
    symbols: Box<dyn SymbolLister>,
    dependencies: Box<dyn DependencyLister>,
}

impl MetadataExtractor {
    pub fn new<S, D>(symbols: S, dependencies: D) -> Self
    where
        S: SymbolLister + 'static,
        D: DependencyLister + 'static,
    {
        Self { symbols: Box::new(symbols), dependencies: Box::new(dependencies) }
    }

    /// Extract symbols and dependencies. A failing query contributes an empty
    /// list and a warning instead of an error.
    pub fn extract(&self, binary: &Path) -> Extracted {
        let mut failures = 0;
        let symbols = match self.symbols.dynamic_symbols(binary) {
            Ok(text) => parse_dynamic_symbols(&text),
            Err(e) => {
                warn!("{} failed for {}: {e}", self.symbols.name(), binary.display());
                failures += 1;
                Vec::new()
            }
        };
        let dependencies = match self.dependencies.program_headers(binary) {
            Ok(text) => parse_needed_libraries(&text),
            Err(e) => {
                warn!("{} failed for {}: {e}", self.dependencies.name(), binary.display());
                failures += 1;
                Vec::new()
            }
        };
        debug!(
            "extracted {} symbols, {} libraries from {}",
            symbols.len(),
            dependencies.len(),
            binary.display()
        );
        Extracted { symbols, dependencies, failures }
    }
}

/// Last whitespace-delimited token of every non-blank line.
pub fn parse_dynamic_symbols(text: &str) -> Vec<String> {
    text.lines().filter_map(|line| line.split_whitespace().last()).map(str::to_string).collect()
}

/// Second token of every `NEEDED <lib>` line (exactly two tokens).
pub fn parse_needed_libraries(text: &str) -> Vec<String> {
    text.lines()
        .filter_map(|line| {
            let mut tokens = line.split_whitespace();
            match (tokens.next(), tokens.next(), tokens.next()) {
                (Some("NEEDED"), Some(lib), None) => Some(lib.to_string()),
                _ => None,
            }
        })
        .collect()
}
