//! Record normalization.
//!
//! Turns a `LookupResult` into the lines the CLI prints, one per record:
//! - plain strings verbatim
//! - mail exchangers as `<host> <priority>`
//! - service records as `<target>:<port>:<priority>:<weight>`, after a leading
//!   `cname: <cname>` line
//!
//! An empty result renders as the single line `no record` for the record types
//! that report emptiness (see `QueryKind::reports_empty`).

use crate::config::{CNAME_LINE_PREFIX, NO_RECORD_LINE};
use crate::dns::LookupResult;

/// Renders a lookup result as display lines, preserving engine order.
pub fn normalize(result: &LookupResult) -> Vec<String> {
    if result.empty && result.kind.reports_empty() {
        return vec![NO_RECORD_LINE.to_string()];
    }

    let mut lines = Vec::with_capacity(result.records.len() + 1);
    if let Some(cname) = &result.canonical_name {
        lines.push(format!("{CNAME_LINE_PREFIX}{cname}"));
    }
    lines.extend(result.records.iter().map(ToString::to_string));
    lines
}
