//! Record rendering.
//!
//! Deterministic output in two shapes: the compact human-readable block
//! (one `- ` bullet per record, raw lines reproduced underneath) and a
//! one-object-per-record JSON rendering for machine consumption.

use serde::Serialize;

use crate::parser::IrqRecord;

/// Render one record plus its optional enrichment strings as a text block.
///
/// Absent header fields render as `?`; absent optional groups suppress
/// their entire part rather than printing an empty one.
pub fn render(record: &IrqRecord, thread_name: Option<&str>, symbol: Option<&str>) -> String {
    let mut parts: Vec<String> = Vec::new();

    let mut header = match record.time_ns {
        Some(time_ns) => format!("time={time_ns}ns"),
        None => "time=?".to_string(),
    };
    match record.level {
        Some(level) => header.push_str(&format!(" level={level}")),
        None => header.push_str(" level=?"),
    }
    match record.sequence {
        Some(sequence) => header.push_str(&format!(" n={sequence}")),
        None => header.push_str(" n=?"),
    }
    match record.kind.as_deref() {
        Some(kind) if !kind.is_empty() => header.push_str(&format!(" kind={kind}")),
        _ => header.push_str(" kind=?"),
    }
    parts.push(header);

    if let Some(path) = record.path.as_deref() {
        parts.push(format!("path={path}"));
    }

    if record.irq_ptr.is_some() || record.handler_ptr.is_some() || record.opaque.is_some() {
        let mut frag: Vec<String> = Vec::new();
        if let Some(irq) = record.irq_ptr.as_deref() {
            frag.push(format!("irq={irq}"));
        }
        if let Some(handler) = record.handler_ptr.as_deref() {
            frag.push(format!("handler={handler}"));
        }
        if let Some(opaque) = record.opaque.as_deref() {
            frag.push(format!("opaque={opaque}"));
        }
        parts.push(frag.join(" "));
    }

    if let Some(tid) = record.tid {
        let mut label = format!("tid={tid}");
        if let Some(name) = thread_name {
            label.push_str(&format!(" ({name})"));
        }
        parts.push(label);
    }

    if let Some(caller) = record.caller.as_deref() {
        let mut entry = format!("caller={caller}");
        if let Some(symbol) = symbol {
            entry.push_str(&format!(" -> {symbol}"));
        }
        parts.push(entry);
    }

    let body = parts.join("\n  ");
    let raw = record.raw.join("\n    ");
    format!("- {body}\n    raw: {raw}")
}

#[derive(Serialize)]
struct EnrichedRecord<'a> {
    #[serde(flatten)]
    record: &'a IrqRecord,
    thread_name: Option<&'a str>,
    symbol: Option<&'a str>,
}

/// Render one record as a single JSON object.
pub fn render_json(
    record: &IrqRecord,
    thread_name: Option<&str>,
    symbol: Option<&str>,
) -> serde_json::Result<String> {
    serde_json::to_string(&EnrichedRecord {
        record,
        thread_name,
        symbol,
    })
}
