//! Symbol resolution via an external addr2line-compatible tool.
//!
//! [`Symbolizer`] keeps the external invocation behind a narrow seam so
//! tests can substitute fakes without spawning processes; [`SymbolCache`]
//! adds the per-run compute-once memoization keyed by address.

use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

use dashmap::DashMap;

/// Environment override for the symbolization tool name.
pub const ADDR2LINE_ENV: &str = "ADDR2LINE";

/// Resolve one address string to a decoded symbol description.
pub trait Symbolizer {
    /// Returns function name plus source location when available, `None`
    /// on any failure. Implementations must not propagate errors.
    fn symbolize(&self, addr: &str) -> Option<String>;
}

/// Production symbolizer: invokes `addr2line -Cfpe <binary> <addr>`.
#[derive(Debug, Clone)]
pub struct Addr2Line {
    tool: String,
    binary: PathBuf,
}

impl Addr2Line {
    pub fn new(tool: impl Into<String>, binary: impl Into<PathBuf>) -> Self {
        Self {
            tool: tool.into(),
            binary: binary.into(),
        }
    }

    /// Construct with the tool name taken from the `ADDR2LINE` environment
    /// variable, falling back to `addr2line`.
    pub fn from_env(binary: impl Into<PathBuf>) -> Self {
        let tool = env::var(ADDR2LINE_ENV).unwrap_or_else(|_| "addr2line".to_string());
        Self::new(tool, binary)
    }

    pub fn binary(&self) -> &Path {
        &self.binary
    }
}

impl Symbolizer for Addr2Line {
    fn symbolize(&self, addr: &str) -> Option<String> {
        let output = Command::new(&self.tool)
            .arg("-Cfpe")
            .arg(&self.binary)
            .arg(addr)
            .output();

        match output {
            Ok(out) if out.status.success() => {
                let decoded = String::from_utf8_lossy(&out.stdout).trim().to_string();
                if decoded.is_empty() {
                    None
                } else {
                    Some(decoded)
                }
            }
            Ok(out) => {
                tracing::warn!(tool = %self.tool, addr, status = %out.status, "addr2line failed");
                None
            }
            Err(err) => {
                tracing::warn!(tool = %self.tool, addr, %err, "failed to launch addr2line");
                None
            }
        }
    }
}

/// Per-run symbol cache wrapping any [`Symbolizer`].
///
/// Negative results are cached too, so a failing tool is invoked (and its
/// failure logged) at most once per address.
#[derive(Debug)]
pub struct SymbolCache<S> {
    symbolizer: S,
    cache: DashMap<String, Option<String>>,
}

impl<S: Symbolizer> SymbolCache<S> {
    pub fn new(symbolizer: S) -> Self {
        Self {
            symbolizer,
            cache: DashMap::new(),
        }
    }

    pub fn resolve(&self, addr: &str) -> Option<String> {
        self.cache
            .entry(addr.to_string())
            .or_insert_with(|| self.symbolizer.symbolize(addr))
            .clone()
    }

    /// Number of distinct addresses resolved so far (hits and misses).
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
