//! Result output.

use std::io::{self, Write};

/// Writes one line per entry to `out` and flushes it.
pub fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()
}
