//! Command tag table.
//!
//! Adding a record type takes one entry here plus one engine operation.

use crate::dns::QueryKind;

/// What a command tag asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A lookup of the given record type
    Lookup(QueryKind),
    /// Usage text
    Help,
}

/// One recognized command tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandEntry {
    /// Tag as typed on the command line
    pub tag: &'static str,
    /// What the tag runs
    pub command: Command,
    /// Number of positional arguments the command requires
    pub arity: usize,
    /// Argument names, as shown in usage text
    pub params: &'static str,
}

const fn lookup(tag: &'static str, kind: QueryKind, arity: usize, params: &'static str) -> CommandEntry {
    CommandEntry {
        tag,
        command: Command::Lookup(kind),
        arity,
        params,
    }
}

/// Every recognized tag, aliases included.
pub const COMMAND_TABLE: &[CommandEntry] = &[
    lookup("a", QueryKind::A, 1, "name"),
    lookup("ip", QueryKind::A, 1, "name"),
    lookup("aaaa", QueryKind::Aaaa, 1, "name"),
    lookup("cname", QueryKind::Cname, 1, "name"),
    lookup("host", QueryKind::Host, 1, "name"),
    lookup("mx", QueryKind::Mx, 1, "name"),
    lookup("mail", QueryKind::Mx, 1, "name"),
    lookup("ns", QueryKind::Ns, 1, "name"),
    lookup("ptr", QueryKind::Ptr, 1, "ip"),
    lookup("rev", QueryKind::Ptr, 1, "ip"),
    lookup("srv", QueryKind::Srv, 3, "service protocol(tcp/udp) domainname"),
    lookup("txt", QueryKind::Txt, 1, "name"),
    CommandEntry {
        tag: "help",
        command: Command::Help,
        arity: 0,
        params: "",
    },
];

/// Looks up a command tag. Tags are matched exactly.
pub fn find_command(tag: &str) -> Option<&'static CommandEntry> {
    COMMAND_TABLE.iter().find(|entry| entry.tag == tag)
}
