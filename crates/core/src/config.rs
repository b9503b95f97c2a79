use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::services::backends::nm::NM_ENV;
use crate::services::backends::objdump::OBJDUMP_ENV;
use crate::services::backends::{NmSymbolLister, ObjdumpDependencyLister};
use crate::services::introspect::MetadataExtractor;
use crate::services::search::{AccumulationMode, MatchMode};
use crate::session::Session;

/// Serializable tool configuration.
///
/// Read from a JSON or YAML file passed with `--config`. Environment variables
/// `EXEFIND_NM` / `EXEFIND_OBJDUMP` take precedence over the file's tool paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderConfig {
    /// Executable used for the dynamic symbol table query.
    pub nm_path: PathBuf,
    /// Executable used for the program header query.
    pub objdump_path: PathBuf,
    /// Initial match strictness.
    pub strict: bool,
    /// Initial accumulation mode.
    pub accumulation: AccumulationMode,
}

impl Default for FinderConfig {
    fn default() -> Self {
        Self {
            nm_path: PathBuf::from("nm"),
            objdump_path: PathBuf::from("objdump"),
            strict: false,
            accumulation: AccumulationMode::Regular,
        }
    }
}

impl FinderConfig {
    /// Defaults with environment overrides applied.
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Load a config file (`.json`, `.yaml` or `.yml`) and apply env overrides.
    pub fn load(path: &Path) -> Result<Self> {
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let config: FinderConfig = match ext {
            "yaml" | "yml" => serde_yaml::from_str(&body).context("Failed to parse config YAML")?,
            _ => serde_json::from_str(&body).context("Failed to parse config JSON")?,
        };
        Ok(config.with_env_overrides())
    }

    /// `load` when a path is given, `from_env` otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::from_env()),
        }
    }

    fn with_env_overrides(mut self) -> Self {
        if let Some(nm) = std::env::var_os(NM_ENV) {
            self.nm_path = PathBuf::from(nm);
        }
        if let Some(objdump) = std::env::var_os(OBJDUMP_ENV) {
            self.objdump_path = PathBuf::from(objdump);
        }
        self
    }

    /// Process-backed extractor using the configured tool paths.
    pub fn extractor(&self) -> MetadataExtractor {
        MetadataExtractor::new(
            NmSymbolLister::new(&self.nm_path),
            ObjdumpDependencyLister::new(&self.objdump_path),
        )
    }

    /// Fresh session with the configured initial modes.
    pub fn session(&self) -> Session {
        let mut session = Session::new(self.extractor());
        session.match_mode = MatchMode::from_strict(self.strict);
        session.accumulation = self.accumulation;
        session
    }
}
