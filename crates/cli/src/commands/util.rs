use std::io::Write;

use anyhow::Result;
use exefind_core::session::LoadSummary;

/// Print the outcome of loading a root, including entries the walk skipped.
pub fn print_load_summary(out: &mut impl Write, summary: &LoadSummary) -> Result<()> {
    for path in &summary.unreadable {
        writeln!(out, "Warning: unable to read {}", path.display())?;
    }
    if summary.extraction_failures > 0 {
        writeln!(
            out,
            "Warning: {} introspection queries failed; affected lists are empty.",
            summary.extraction_failures
        )?;
    }
    writeln!(out, "Info: Found {} files.", summary.found)?;
    Ok(())
}
