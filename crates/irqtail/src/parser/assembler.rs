//! Line-to-record state machine.
//!
//! Groups a stream of raw text lines into [`IrqRecord`] boundaries. A record
//! opens at every line containing the header marker and absorbs each
//! following line until the next marker; finalization is deferred, so the
//! record for event *k* is emitted only once event *k+1*'s marker (or
//! end-of-input) is seen.

use super::pattern::{extract, is_header_marker};
use super::record::IrqRecord;

/// Single-pass record assembler.
///
/// Holds at most one record in flight. Lines arriving before the first
/// header marker are discarded; a pending record with an empty `raw` is
/// never emitted.
#[derive(Debug, Default)]
pub struct RecordAssembler {
    current: Option<IrqRecord>,
}

impl RecordAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one input line.
    ///
    /// Returns the previously accumulating record when `line` opens a new
    /// one, `None` otherwise.
    pub fn push(&mut self, line: &str) -> Option<IrqRecord> {
        let mut finished = None;

        if is_header_marker(line) {
            finished = self.current.take().filter(|r| !r.raw.is_empty());
            self.current = Some(IrqRecord::default());
        }

        match self.current {
            Some(ref mut record) => {
                record.raw.push(line.to_string());
                record.merge(extract(line));
            }
            None => {
                tracing::trace!(line, "discarding line before first header marker");
            }
        }

        finished
    }

    /// Returns true if a record is accumulating and would be emitted by
    /// [`flush`](Self::flush).
    pub fn has_pending(&self) -> bool {
        self.current
            .as_ref()
            .is_some_and(|r| !r.raw.is_empty())
    }

    /// Finalize the in-flight record (call at end of input).
    pub fn flush(&mut self) -> Option<IrqRecord> {
        self.current.take().filter(|r| !r.raw.is_empty())
    }
}

/// Eagerly assemble a finite line sequence into records, in input order.
pub fn parse_records<I, S>(lines: I) -> Vec<IrqRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut assembler = RecordAssembler::new();
    let mut records = Vec::new();

    for line in lines {
        if let Some(record) = assembler.push(line.as_ref()) {
            records.push(record);
        }
    }
    if let Some(record) = assembler.flush() {
        records.push(record);
    }

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "irq-log: time=100ns level=1 n=5 kind=hardware";

    // ─── Basic assembly ─────────────────────────────────────────

    #[test]
    fn test_single_record_full_body() {
        let records = parse_records([
            HEADER,
            "         path=/machine/i8259",
            "         irq=0x55e3a1 handler=0x55ffb0 opaque=0x7f0c40",
            "         host-tid=4242 caller=0x7fcab0",
        ]);

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.raw.len(), 4);
        assert_eq!(record.raw[0], HEADER);
        assert_eq!(record.time_ns, Some(100));
        assert_eq!(record.level, Some(1));
        assert_eq!(record.sequence, Some(5));
        assert_eq!(record.kind.as_deref(), Some("hardware"));
        assert_eq!(record.path.as_deref(), Some("/machine/i8259"));
        assert_eq!(record.irq_ptr.as_deref(), Some("0x55e3a1"));
        assert_eq!(record.handler_ptr.as_deref(), Some("0x55ffb0"));
        assert_eq!(record.opaque.as_deref(), Some("0x7f0c40"));
        assert_eq!(record.tid, Some(4242));
        assert_eq!(record.caller.as_deref(), Some("0x7fcab0"));
    }

    #[test]
    fn test_raw_length_counts_every_line() {
        let records = parse_records([HEADER, "noise", "more noise", "  path=/x"]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].raw.len(), 4);
    }

    #[test]
    fn test_one_record_per_marker_line() {
        let lines = [
            "irq-log: time=1ns level=0 n=1 kind=a",
            "  path=/dev/a",
            "irq-log: time=2ns level=0 n=2 kind=b",
            "  path=/dev/b",
            "irq-log: time=3ns level=0 n=3 kind=c",
        ];
        let records = parse_records(lines);
        assert_eq!(records.len(), 3);
        for (record, expected) in records.iter().zip([1, 2, 3]) {
            assert_eq!(record.time_ns, Some(expected));
            assert!(record.raw[0].contains("irq-log:"));
        }
        assert_eq!(records[0].path.as_deref(), Some("/dev/a"));
        assert_eq!(records[1].path.as_deref(), Some("/dev/b"));
        assert_eq!(records[2].path, None);
    }

    #[test]
    fn test_back_to_back_headers() {
        let records = parse_records([
            "irq-log: time=1ns level=0 n=1 kind=a",
            "irq-log: time=2ns level=0 n=2 kind=b",
        ]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].raw.len(), 1);
        assert_eq!(records[1].raw.len(), 1);
        assert_eq!(records[0].kind.as_deref(), Some("a"));
        assert_eq!(records[1].kind.as_deref(), Some("b"));
        assert_eq!(records[0].path, None);
    }

    // ─── Stream boundaries ──────────────────────────────────────

    #[test]
    fn test_lines_before_first_marker_discarded() {
        let records = parse_records(["orphan continuation", "  path=/dev/lost", HEADER]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].raw.len(), 1);
        assert_eq!(records[0].path, None);
    }

    #[test]
    fn test_empty_input_yields_no_records() {
        let records = parse_records(std::iter::empty::<&str>());
        assert!(records.is_empty());
    }

    #[test]
    fn test_no_markers_yields_no_records() {
        let records = parse_records(["just", "plain", "noise"]);
        assert!(records.is_empty());
    }

    #[test]
    fn test_flush_emits_trailing_record() {
        let mut assembler = RecordAssembler::new();
        assert!(assembler.push(HEADER).is_none());
        assert!(assembler.push("  path=/dev/tail").is_none());
        assert!(assembler.has_pending());

        let record = assembler.flush().unwrap();
        assert_eq!(record.path.as_deref(), Some("/dev/tail"));
        assert!(!assembler.has_pending());
        assert!(assembler.flush().is_none());
    }

    #[test]
    fn test_deferred_finalization() {
        let mut assembler = RecordAssembler::new();
        assembler.push("irq-log: time=1ns level=0 n=1 kind=a");
        assembler.push("  path=/dev/a");

        // The first record is only emitted when the second marker arrives.
        let first = assembler.push("irq-log: time=2ns level=0 n=2 kind=b").unwrap();
        assert_eq!(first.time_ns, Some(1));
        assert_eq!(first.path.as_deref(), Some("/dev/a"));
    }

    // ─── Malformed fragments ────────────────────────────────────

    #[test]
    fn test_malformed_header_still_delimits() {
        let records = parse_records([
            HEADER,
            "  path=/dev/a",
            "irq-log: enabled",
            "  path=/dev/b",
        ]);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].path.as_deref(), Some("/dev/a"));

        // The control line opened a record with no header fields.
        let second = &records[1];
        assert_eq!(second.raw, vec!["irq-log: enabled", "  path=/dev/b"]);
        assert_eq!(second.time_ns, None);
        assert_eq!(second.level, None);
        assert_eq!(second.sequence, None);
        assert_eq!(second.kind, None);
        assert_eq!(second.path.as_deref(), Some("/dev/b"));
    }

    #[test]
    fn test_last_write_wins_within_span() {
        let records = parse_records([
            HEADER,
            "  irq=0x1 handler=0x2 opaque=first",
            "  irq=0x3 handler=0x4 opaque=second",
        ]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].irq_ptr.as_deref(), Some("0x3"));
        assert_eq!(records[0].handler_ptr.as_deref(), Some("0x4"));
        assert_eq!(records[0].opaque.as_deref(), Some("second"));
    }

    // ─── Determinism ────────────────────────────────────────────

    #[test]
    fn test_parse_is_idempotent() {
        let lines = [
            HEADER,
            "  path=/machine/i8259",
            "noise line",
            "irq-log: time=7ns level=-1 n=-2 kind=lower",
            "  host-tid=9 caller=0xabc",
        ];
        let first = parse_records(lines);
        let second = parse_records(lines);
        assert_eq!(first, second);
    }
}
