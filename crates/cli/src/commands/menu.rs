use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::Result;
use exefind_core::services::search::{AccumulationMode, SearchField};
use exefind_core::session::render_list;
use exefind_core::Session;

use crate::commands::print_load_summary;

const MENU: &str = "\nExecutable Finder\n-----------------\n\n\
1. Search.\n\
2. Set strict mode.\n\
3. Set file path.\n\
4. Set search mode.\n\
5. Print executable files.\n\
6. Print results.\n\
7. Save results.\n\
8. Clear Results.\n\
9. Save Files.\n\
j. Save results as JSON.\n\
0. Exit.\n";

/// Line-oriented prompt reader; `None` on end of input.
struct Prompt<'a, R, W> {
    input: &'a mut R,
    out: &'a mut W,
}

impl<R: BufRead, W: Write> Prompt<'_, R, W> {
    fn ask(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Run the interactive menu until `0` or end of input.
///
/// Every operator error is printed and the loop continues; only I/O failures
/// on `input`/`out` end the session early.
pub fn run_menu<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let mut prompt = Prompt { input, out };
    loop {
        write!(prompt.out, "{MENU}")?;
        let Some(choice) = prompt.ask("> ")? else { break };
        writeln!(prompt.out, "\n")?;
        match choice.trim() {
            "1" => search(session, &mut prompt)?,
            "2" => {
                let strict = session.toggle_strict();
                writeln!(prompt.out, "Info: strict mode set to {strict}")?;
            }
            "3" => {
                let Some(path) = prompt.ask("Enter file path: ")? else { break };
                match session.set_root(path.trim()) {
                    Ok(summary) => {
                        writeln!(prompt.out, "Info: setting file path to {}", path.trim())?;
                        print_load_summary(&mut *prompt.out, &summary)?;
                    }
                    Err(e) => writeln!(prompt.out, "Error: {e}")?,
                }
            }
            "4" => {
                writeln!(prompt.out, "1. Regular search. (Every search yields new results.)")?;
                writeln!(prompt.out, "2. Incremental search. (Every search appends to results.)")?;
                let Some(mode) = prompt.ask("> ")? else { break };
                match mode.parse::<AccumulationMode>() {
                    Ok(mode) => {
                        session.set_accumulation(mode);
                        writeln!(prompt.out, "Info: search mode set to {mode}")?;
                    }
                    Err(_) => writeln!(prompt.out, "Error: invalid search mode.")?,
                }
            }
            "5" => {
                let records = session.corpus().records();
                print_listing(&mut prompt, records)?;
            }
            "6" => {
                let records = session.results().records();
                print_listing(&mut prompt, records)?;
            }
            "7" => save_report(session, &mut prompt)?,
            "8" => {
                session.clear_results();
                writeln!(prompt.out, "Info: results cleared.")?;
            }
            "9" => {
                let Some(folder) = prompt.ask("Folder: ")? else { break };
                match session.save_files(Path::new(folder.trim())) {
                    Ok(written) => writeln!(prompt.out, "Info: saved {} files.", written.len())?,
                    Err(e) => writeln!(prompt.out, "Error: {e}")?,
                }
            }
            "j" | "J" => {
                let Some(path) = prompt.ask("Path: ")? else { break };
                match session.save_report_json(Path::new(path.trim())) {
                    Ok(target) => writeln!(prompt.out, "Info: saved {}", target.display())?,
                    Err(e) => writeln!(prompt.out, "Error: {e}")?,
                }
            }
            "0" => break,
            _ => writeln!(prompt.out, "Error: invalid choice.")?,
        }
    }
    Ok(())
}

fn search<R: BufRead, W: Write>(
    session: &mut Session,
    prompt: &mut Prompt<'_, R, W>,
) -> Result<()> {
    if session.corpus().is_empty() {
        writeln!(prompt.out, "Error: please use 'Set file path' to load files to search.")?;
        return Ok(());
    }
    writeln!(prompt.out, "1. File name search.")?;
    writeln!(prompt.out, "2. Function name search.")?;
    writeln!(prompt.out, "3. Library name search.")?;
    let Some(selector) = prompt.ask("> ")? else { return Ok(()) };
    let field = match selector.parse::<SearchField>() {
        Ok(field) => field,
        Err(_) => {
            writeln!(prompt.out, "Error: invalid search type.")?;
            return Ok(());
        }
    };
    let Some(keyword) = prompt.ask("Search: ")? else { return Ok(()) };

    match session.search(field, keyword) {
        Ok(outcome) => {
            for name in &outcome.added {
                writeln!(prompt.out, "Match found: {name}")?;
            }
            if !outcome.found() {
                writeln!(prompt.out, "Info: no matches found.")?;
            }
        }
        Err(e) => writeln!(prompt.out, "Error: {e}")?,
    }
    Ok(())
}

fn print_listing<R: BufRead, W: Write>(
    prompt: &mut Prompt<'_, R, W>,
    records: &[exefind_core::BinaryRecord],
) -> Result<()> {
    writeln!(prompt.out, "1. Summary.")?;
    writeln!(prompt.out, "2. Detail.")?;
    let Some(choice) = prompt.ask("> ")? else { return Ok(()) };
    match choice.trim() {
        "1" => write!(prompt.out, "{}", render_list(records, false))?,
        "2" => write!(prompt.out, "{}", render_list(records, true))?,
        _ => writeln!(prompt.out, "Error: invalid choice.")?,
    }
    Ok(())
}

fn save_report<R: BufRead, W: Write>(
    session: &Session,
    prompt: &mut Prompt<'_, R, W>,
) -> Result<()> {
    let Some(location) = prompt.ask("Path: ")? else { return Ok(()) };
    let location = Path::new(location.trim()).to_path_buf();
    let file_name = if location.is_dir() {
        match prompt.ask("Filename: ")? {
            Some(name) => Some(name),
            None => return Ok(()),
        }
    } else {
        None
    };
    match session.save_report(&location, file_name.as_deref()) {
        Ok(target) => writeln!(prompt.out, "Info: saved {}", target.display())?,
        Err(e) => writeln!(prompt.out, "Error: {e}")?,
    }
    Ok(())
}
