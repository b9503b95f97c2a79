use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{FinderError, FinderResult};
use crate::services::search::ResultSet;

/// Where a text report goes: `destination/file_name` when `destination` is an
/// existing directory, otherwise `destination` itself.
pub fn resolve_report_path(destination: &Path, file_name: Option<&str>) -> FinderResult<PathBuf> {
    if !destination.is_dir() {
        return Ok(destination.to_path_buf());
    }
    match file_name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => Ok(destination.join(name)),
        None => Err(FinderError::InvalidDestination {
            path: destination.to_path_buf(),
            reason: "a file name is required when saving into a directory".into(),
        }),
    }
}

/// Render the text report: every record block followed by a blank line.
pub fn render_report(results: &ResultSet) -> String {
    results.iter().map(|record| format!("{record}\n")).collect()
}

/// Write the text report for `results`, overwriting any existing file.
pub fn save_results(
    results: &ResultSet,
    destination: &Path,
    file_name: Option<&str>,
) -> FinderResult<PathBuf> {
    let target = resolve_report_path(destination, file_name)?;
    let file = fs::File::create(&target).map_err(|e| FinderError::io(&target, e))?;
    let mut writer = BufWriter::new(file);
    for record in results.iter() {
        writeln!(writer, "{record}").map_err(|e| FinderError::io(&target, e))?;
    }
    writer.flush().map_err(|e| FinderError::io(&target, e))?;
    info!("wrote {} records to {}", results.len(), target.display());
    Ok(target)
}

/// Write `results` as a pretty JSON array of records.
pub fn save_results_json(results: &ResultSet, target: &Path) -> FinderResult<PathBuf> {
    let json = serde_json::to_string_pretty(results.records())
        .map_err(|e| FinderError::io(target, e.into()))?;
    fs::write(target, json).map_err(|e| FinderError::io(target, e))?;
    Ok(target.to_path_buf())
}

/// Copy every binary in `results` into `destination` under its base name.
///
/// The directory (and parents) is created when missing. An existing path that
/// is not a directory is rejected before anything is copied. Each source is
/// read in full before its target is written, so exporting into the folder a
/// binary already lives in leaves it intact.
pub fn save_files(results: &ResultSet, destination: &Path) -> FinderResult<Vec<PathBuf>> {
    if destination.exists() && !destination.is_dir() {
        return Err(FinderError::InvalidDestination {
            path: destination.to_path_buf(),
            reason: "enter either an existing folder or a folder name to create".into(),
        });
    }
    fs::create_dir_all(destination).map_err(|e| FinderError::io(destination, e))?;

    let mut written = Vec::with_capacity(results.len());
    for record in results.iter() {
        let target = destination.join(&record.name);
        let bytes = fs::read(&record.path).map_err(|e| FinderError::io(&record.path, e))?;
        fs::write(&target, bytes).map_err(|e| FinderError::io(&target, e))?;
        written.push(target);
    }
    info!("copied {} binaries to {}", written.len(), destination.display());
    Ok(written)
}
