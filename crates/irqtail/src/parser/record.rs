//! The structured record model.

use serde::Serialize;

use super::pattern::LineFields;

/// One interrupt-delivery event, accumulated from one or more physically
/// contiguous input lines.
///
/// Every structured field is independently optional: absence means the
/// pattern that populates it never matched inside this record's span.
/// `raw` always holds the exact text consumed while the record was
/// current, including lines that matched no pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IrqRecord {
    pub raw: Vec<String>,
    pub time_ns: Option<u64>,
    pub level: Option<i64>,
    pub sequence: Option<i64>,
    pub kind: Option<String>,
    pub path: Option<String>,
    pub irq_ptr: Option<String>,
    pub handler_ptr: Option<String>,
    pub opaque: Option<String>,
    pub tid: Option<u32>,
    pub caller: Option<String>,
}

impl IrqRecord {
    /// Merge one line's captures into the record.
    ///
    /// Last write wins: a pattern recurring within the record's span
    /// overwrites the earlier occurrence's value. `None` captures never
    /// clear a field already set.
    pub fn merge(&mut self, fields: LineFields) {
        if fields.time_ns.is_some() {
            self.time_ns = fields.time_ns;
        }
        if fields.level.is_some() {
            self.level = fields.level;
        }
        if fields.sequence.is_some() {
            self.sequence = fields.sequence;
        }
        if fields.kind.is_some() {
            self.kind = fields.kind;
        }
        if fields.path.is_some() {
            self.path = fields.path;
        }
        if fields.irq_ptr.is_some() {
            self.irq_ptr = fields.irq_ptr;
        }
        if fields.handler_ptr.is_some() {
            self.handler_ptr = fields.handler_ptr;
        }
        if fields.opaque.is_some() {
            self.opaque = fields.opaque;
        }
        if fields.tid.is_some() {
            self.tid = fields.tid;
        }
        if fields.caller.is_some() {
            self.caller = fields.caller;
        }
    }
}
