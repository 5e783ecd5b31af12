//! The one-shot pipeline driver.
//!
//! Reads the input stream, assembles records, owns the two enrichment
//! caches for the duration of the run, and writes one block per record to
//! the output stream in input order.

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::Path;

use crate::cli::Cli;
use crate::enrich::{Addr2Line, SymbolCache, Symbolizer, ThreadNames};
use crate::error::RunError;
use crate::format;
use crate::parser::parse_records;

pub fn run(cli: &Cli) -> Result<(), RunError> {
    let lines = read_lines(cli.logfile.as_deref())?;

    let threads = cli.pid.map(ThreadNames::new);
    let symbols = cli
        .binary
        .as_ref()
        .map(|binary| SymbolCache::new(Addr2Line::from_env(binary.clone())));

    let stdout = io::stdout();
    run_pipeline(
        &lines,
        threads.as_ref(),
        symbols.as_ref(),
        cli.json,
        &mut stdout.lock(),
    )
}

/// Assemble, enrich, and render every record in `lines`.
///
/// Fails with [`RunError::NoRecords`] when the input carries no header
/// markers at all.
pub fn run_pipeline<S, W>(
    lines: &[String],
    threads: Option<&ThreadNames>,
    symbols: Option<&SymbolCache<S>>,
    json: bool,
    out: &mut W,
) -> Result<(), RunError>
where
    S: Symbolizer,
    W: Write,
{
    let records = parse_records(lines);
    if records.is_empty() {
        return Err(RunError::NoRecords);
    }
    tracing::debug!(count = records.len(), "assembled irq-log records");

    for record in &records {
        let thread_name = match (threads, record.tid) {
            (Some(threads), Some(tid)) => threads.resolve(tid),
            _ => None,
        };
        let symbol = match (symbols, record.caller.as_deref()) {
            (Some(symbols), Some(caller)) => symbols.resolve(caller),
            _ => None,
        };

        if json {
            let line = format::render_json(record, thread_name.as_deref(), symbol.as_deref())?;
            writeln!(out, "{line}")?;
        } else {
            writeln!(
                out,
                "{}",
                format::render(record, thread_name.as_deref(), symbol.as_deref())
            )?;
        }
    }

    Ok(())
}

fn read_lines(path: Option<&Path>) -> Result<Vec<String>, RunError> {
    match path {
        Some(path) => {
            let text = fs::read_to_string(path).map_err(|source| RunError::ReadInput {
                path: path.to_owned(),
                source,
            })?;
            Ok(text.lines().map(str::to_string).collect())
        }
        None => {
            let lines: Result<Vec<String>, io::Error> = io::stdin().lock().lines().collect();
            Ok(lines?)
        }
    }
}
