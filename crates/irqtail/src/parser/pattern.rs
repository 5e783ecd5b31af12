//! Line classification for irq-log record fragments.
//!
//! Pure helpers used by [`super::assembler::RecordAssembler`] to decide
//! whether a line opens a new record and which structured fields it carries.
//! The four patterns are not mutually exclusive; a line is checked against
//! all of them and every match contributes its captures.

use std::sync::LazyLock;

use regex::Regex;

/// Literal token that marks the start of a new record.
///
/// Delimiting is a plain containment check, independent of the full header
/// grammar: control lines such as `irq-log: enabled` still open a record,
/// they just carry no parseable fields.
pub const HEADER_MARKER: &str = "irq-log:";

static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"irq-log:\s+time=(?P<time>\d+)ns\s+level=(?P<level>-?\d+)\s+n=(?P<n>-?\d+)\s+kind=(?P<kind>.+)",
    )
    .unwrap()
});

static PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*path=(?P<path>.+)").unwrap());

static DISPATCH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^\s*irq=(?P<irq>0x[0-9a-fA-F]+)\s+handler=(?P<handler>0x[0-9a-fA-F]+)\s+opaque=(?P<opaque>\S+)",
    )
    .unwrap()
});

static TAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"host-tid=(?P<tid>\d+)\s+caller=(?P<caller>0x[0-9a-fA-F]+)").unwrap()
});

/// Does this line open a new record?
pub(crate) fn is_header_marker(line: &str) -> bool {
    line.contains(HEADER_MARKER)
}

/// Structured fields extracted from a single line.
///
/// Every field is optional; a line that matches no pattern yields an
/// all-`None` value. Integer captures that fail to parse (overflow) are
/// dropped rather than turned into errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineFields {
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

/// Run all four patterns against one line and collect their captures.
pub fn extract(line: &str) -> LineFields {
    let mut fields = LineFields::default();

    if let Some(caps) = HEADER_RE.captures(line) {
        fields.time_ns = caps["time"].parse().ok();
        fields.level = caps["level"].parse().ok();
        fields.sequence = caps["n"].parse().ok();
        fields.kind = Some(caps["kind"].trim().to_string());
    }

    if let Some(caps) = PATH_RE.captures(line) {
        fields.path = Some(caps["path"].to_string());
    }

    if let Some(caps) = DISPATCH_RE.captures(line) {
        fields.irq_ptr = Some(caps["irq"].to_string());
        fields.handler_ptr = Some(caps["handler"].to_string());
        fields.opaque = Some(caps["opaque"].to_string());
    }

    if let Some(caps) = TAIL_RE.captures(line) {
        fields.tid = caps["tid"].parse().ok();
        fields.caller = Some(caps["caller"].to_string());
    }

    fields
}
