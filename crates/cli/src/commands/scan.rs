use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use exefind_core::services::search::{AccumulationMode, MatchMode, SearchField};
use exefind_core::session::render_list;
use exefind_core::FinderConfig;
use serde::Serialize;

use crate::commands::print_load_summary;

#[derive(Serialize)]
pub struct ScanSnapshot<'a> {
    pub root: String,
    pub unreadable: Vec<String>,
    pub binaries: &'a [exefind_core::BinaryRecord],
}

/// Options for a one-shot search.
#[derive(Debug, Clone)]
pub struct SearchArgs<'a> {
    pub root: &'a str,
    pub field: SearchField,
    pub keyword: &'a str,
    pub strict: bool,
    pub report: Option<&'a Path>,
    pub copy_to: Option<&'a Path>,
    pub json: bool,
    pub verbose_listing: bool,
}

/// Enumerate `root` and list the ELF files found.
pub fn scan_command(
    config: &FinderConfig,
    root: &str,
    json: bool,
    verbose_listing: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mut session = config.session();
    let summary = session.set_root(root).with_context(|| format!("Failed to load {root}"))?;

    if json {
        let snapshot = ScanSnapshot {
            root: summary.root.display().to_string(),
            unreadable: summary.unreadable.iter().map(|p| p.display().to_string()).collect(),
            binaries: session.corpus().records(),
        };
        writeln!(out, "{}", serde_json::to_string_pretty(&snapshot)?)?;
        return Ok(());
    }

    print_load_summary(&mut *out, &summary)?;
    write!(out, "{}", render_list(session.corpus().iter(), verbose_listing))?;
    Ok(())
}

/// Enumerate, search once, then optionally export the matches.
pub fn search_command(
    config: &FinderConfig,
    args: &SearchArgs<'_>,
    out: &mut impl Write,
) -> Result<()> {
    let mut session = config.session();
    session.match_mode = MatchMode::from_strict(args.strict || config.strict);
    session.set_accumulation(AccumulationMode::Regular);

    let summary =
        session.set_root(args.root).with_context(|| format!("Failed to load {}", args.root))?;
    if !args.json {
        print_load_summary(&mut *out, &summary)?;
    }

    let outcome = session.search(args.field, args.keyword).context("Search failed")?;

    if args.json {
        writeln!(out, "{}", serde_json::to_string_pretty(session.results().records())?)?;
    } else {
        for name in &outcome.added {
            writeln!(out, "Match found: {name}")?;
        }
        if !outcome.found() {
            writeln!(out, "Info: no matches found.")?;
        } else if args.verbose_listing {
            write!(out, "{}", render_list(session.results().iter(), true))?;
        }
    }

    if let Some(report) = args.report {
        let target = session
            .save_report(report, None)
            .with_context(|| format!("Failed to save report to {}", report.display()))?;
        if !args.json {
            writeln!(out, "Info: saved {}", target.display())?;
        }
    }
    if let Some(dest) = args.copy_to {
        let written = session
            .save_files(dest)
            .with_context(|| format!("Failed to copy binaries to {}", dest.display()))?;
        if !args.json {
            writeln!(out, "Info: saved {} files.", written.len())?;
        }
    }
    Ok(())
}
