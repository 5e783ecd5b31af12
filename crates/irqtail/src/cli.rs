//! Command-line surface.

use std::path::PathBuf;

use clap::Parser;

/// Annotate qemu-style irq-log output with thread and symbol info.
///
/// Parses the multi-line records emitted by qemu_set_irq() and adds two
/// conveniences: resolving the host thread id to a friendly thread name
/// via /proc, and resolving the recorded return address to a function and
/// source location via addr2line (or a compatible tool named in the
/// ADDR2LINE environment variable).
#[derive(Parser, Debug)]
#[command(name = "irqtail", version)]
pub struct Cli {
    /// Path to irq-log output (defaults to stdin)
    pub logfile: Option<PathBuf>,

    /// Process id used to resolve host-tid values to thread names
    #[arg(long)]
    pub pid: Option<u32>,

    /// Binary with symbols for addr2line lookups
    #[arg(long)]
    pub binary: Option<PathBuf>,

    /// Emit one JSON object per record instead of text blocks
    #[arg(long)]
    pub json: bool,
}
