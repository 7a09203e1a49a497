//! Usage text.

use std::io::{self, Write};

use crate::dispatch::{Command, COMMAND_TABLE};

/// Builds the usage text from the command table.
///
/// Aliases are listed next to the command they stand for, e.g. `a|ip name`.
pub fn usage_text() -> String {
    let mut text = String::from("Usage: nslookup [OPTIONS] cmd args ...\n  Available commands are:\n");
    let mut seen: Vec<Command> = Vec::new();
    for entry in COMMAND_TABLE {
        if entry.command == Command::Help || seen.contains(&entry.command) {
            continue;
        }
        seen.push(entry.command);
        let tags: Vec<&str> = COMMAND_TABLE
            .iter()
            .filter(|other| other.command == entry.command)
            .map(|other| other.tag)
            .collect();
        text.push_str(&format!("    - {} {}\n", tags.join("|"), entry.params));
    }
    text.push_str("    - help\n");
    text.push_str("  Run with --help for the list of options.\n");
    text
}

/// Writes the usage text to `out`.
pub fn write_usage<W: Write>(out: &mut W) -> io::Result<()> {
    out.write_all(usage_text().as_bytes())
}
