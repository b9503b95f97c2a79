use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use exefind::commands::{run_menu, scan_command, search_command, SearchArgs};
use exefind::{init_logging, load_config};
use exefind_core::services::search::{AccumulationMode, MatchMode, SearchField};
use tracing::debug;

/// Find ELF binaries under a path and search their dynamic symbols and
/// shared-library dependencies.
///
/// Runs the interactive menu by default; `scan` and `search` are one-shot
/// forms for scripts. Tool paths come from `--config` or `EXEFIND_NM` /
/// `EXEFIND_OBJDUMP`.
#[derive(Parser, Debug)]
#[command(
    name = "exefind",
    version,
    about = "Executable finder for ELF binaries",
    long_about = None
)]
struct Cli {
    /// Config file (JSON or YAML) with tool paths and initial modes.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Interactive menu (the default when no subcommand is given).
    Menu {
        /// Load this file or directory before showing the menu.
        #[arg(long)]
        root: Option<String>,

        /// Start in strict (exact match) mode.
        #[arg(long, default_value_t = false)]
        strict: bool,

        /// Start in incremental search mode.
        #[arg(long, default_value_t = false)]
        incremental: bool,
    },

    /// Enumerate a file or directory tree and list the ELF files found.
    Scan {
        /// File or directory to enumerate.
        root: String,

        /// Print full records instead of names.
        #[arg(long, default_value_t = false)]
        detail: bool,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Enumerate, run one search, and optionally export the matches.
    Search {
        /// File or directory to enumerate.
        root: String,

        /// Field to match: file, symbol or library.
        #[arg(long, default_value = "file")]
        field: SearchField,

        /// Keyword to look for.
        keyword: String,

        /// Exact match instead of case-insensitive substring.
        #[arg(long, default_value_t = false)]
        strict: bool,

        /// Write the text report to this file.
        #[arg(long)]
        report: Option<PathBuf>,

        /// Copy matched binaries into this folder (created if missing).
        #[arg(long)]
        copy_to: Option<PathBuf>,

        /// Print full records for the matches.
        #[arg(long, default_value_t = false)]
        detail: bool,

        /// Emit the matches as JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let config = load_config(cli.config.as_deref())?;
    debug!("config: {config:?}");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command.unwrap_or(Command::Menu { root: None, strict: false, incremental: false }) {
        Command::Menu { root, strict, incremental } => {
            let mut session = config.session();
            if strict {
                session.match_mode = MatchMode::Strict;
            }
            if incremental {
                session.set_accumulation(AccumulationMode::Incremental);
            }
            if let Some(root) = root {
                let summary = session.set_root(&root)?;
                exefind::commands::print_load_summary(&mut out, &summary)?;
            }
            let stdin = io::stdin();
            run_menu(&mut session, &mut stdin.lock(), &mut out)?;
        }
        Command::Scan { root, detail, json } => {
            scan_command(&config, &root, json, detail, &mut out)?
        }
        Command::Search { root, field, keyword, strict, report, copy_to, detail, json } => {
            let args = SearchArgs {
                root: &root,
                field,
                keyword: &keyword,
                strict,
                report: report.as_deref(),
                copy_to: copy_to.as_deref(),
                json,
                verbose_listing: detail,
            };
            search_command(&config, &args, &mut out)?
        }
    }

    Ok(())
}
