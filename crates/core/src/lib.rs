//! exefind-core
//!
//! Core library for locating ELF binaries under a filesystem root and searching
//! their exported dynamic symbols and shared-library dependencies.
//!
//! This crate holds the binary record model, format detection, the metadata
//! extraction boundary (`nm` / `objdump`), corpus enumeration, the search engine
//! and the exporters. Frontends (the `exefind` CLI) only parse input and print.

pub mod config;
pub mod detect;
pub mod error;
pub mod model;
pub mod services;
pub mod session;

pub use config::FinderConfig;
pub use error::{FinderError, IntrospectionError};
pub use model::BinaryRecord;
pub use session::Session;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
