/// Record parsing module
///
/// Reassembles the multi-line `irq-log` records emitted by qemu_set_irq()
/// into structured, normalized records.
///
/// # Architecture
///
/// - `pattern.rs`: Line classification (the four record-line patterns)
/// - `record.rs`: The `IrqRecord` data model
/// - `assembler.rs`: Line-to-record state machine
///
/// # Guarantees
///
/// - Single forward pass, no lookahead
/// - Every consumed line is preserved verbatim in `IrqRecord::raw`
/// - Malformed fragments never fail; they leave structured fields unset

pub mod assembler;
pub mod pattern;
pub mod record;

// Re-export commonly used types
pub use assembler::{parse_records, RecordAssembler};
pub use pattern::HEADER_MARKER;
pub use record::IrqRecord;
