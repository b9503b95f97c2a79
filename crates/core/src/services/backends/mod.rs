//! Process-backed introspection: shells out to binutils.

pub mod nm;
pub mod objdump;

pub use nm::NmSymbolLister;
pub use objdump::ObjdumpDependencyLister;

use std::ffi::OsStr;
use std::path::Path;
use std::process::Command;

use tracing::warn;

use crate::error::IntrospectionError;

/// Run `tool <args..> <binary>` and return stdout decoded lossily.
///
/// Only a spawn failure is an error. A non-zero exit is logged and whatever the
/// tool printed is still returned.
pub(crate) fn run_tool(
    tool: &Path,
    args: &[&str],
    binary: &Path,
) -> Result<String, IntrospectionError> {
    let tool_name = tool.file_name().unwrap_or(OsStr::new("?")).to_string_lossy().into_owned();
    let output = Command::new(tool)
        .args(args)
        .arg(binary)
        .output()
        .map_err(|source| IntrospectionError::Spawn { tool: tool_name.clone(), source })?;
    if !output.status.success() {
        warn!("{tool_name} exited with {} for {}", output.status, binary.display());
    }
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
