//! Thread-name resolution via /proc.
//!
//! Maps a host thread id to the friendly name the OS exposes under
//! `/proc/<pid>/task/<tid>/comm`. Results — including misses — are cached
//! for the duration of the run so each tid costs at most one read.

use std::fs;

use dashmap::DashMap;

/// Per-run thread-name cache for one target process.
#[derive(Debug)]
pub struct ThreadNames {
    pid: u32,
    cache: DashMap<u32, Option<String>>,
}

impl ThreadNames {
    pub fn new(pid: u32) -> Self {
        Self {
            pid,
            cache: DashMap::new(),
        }
    }

    /// Resolve a thread id to its name.
    ///
    /// A vanished thread, permission failure, or unsupported platform is a
    /// cached negative, never an error.
    pub fn resolve(&self, tid: u32) -> Option<String> {
        self.cache
            .entry(tid)
            .or_insert_with(|| read_comm(self.pid, tid))
            .clone()
    }

    /// Number of distinct tids looked up so far (hits and misses).
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

fn read_comm(pid: u32, tid: u32) -> Option<String> {
    let path = format!("/proc/{pid}/task/{tid}/comm");

    match fs::read_to_string(&path) {
        Ok(name) => {
            let name = name.trim().to_string();
            if name.is_empty() {
                None
            } else {
                Some(name)
            }
        }
        Err(err) => {
            tracing::debug!(pid, tid, %err, "thread name lookup failed");
            None
        }
    }
}
