//! Helpers for printing status messages to the terminal.
//!
//! Messages are coloured only when the destination supports it, so piping
//! output to a file keeps it free of ANSI escapes.

use owo_colors::{AnsiColors, OwoColorize};
use std::io::{self, Write};

use is_terminal::IsTerminal;

/// The kinds of status message the CLI prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warn,
    Error,
}

impl MessageKind {
    fn color(self) -> AnsiColors {
        match self {
            MessageKind::Info => AnsiColors::Cyan,
            MessageKind::Success => AnsiColors::Green,
            MessageKind::Warn => AnsiColors::Yellow,
            MessageKind::Error => AnsiColors::Red,
        }
    }

    fn prefix(self) -> &'static str {
        match self {
            MessageKind::Info => "",
            MessageKind::Success => "",
            MessageKind::Warn => "Warning: ",
            MessageKind::Error => "Error: ",
        }
    }
}

/// Writes one message line, coloured if `supports_color` is set.
pub fn print_message<W: Write>(
    writer: &mut W,
    kind: MessageKind,
    msg: &str,
    supports_color: bool,
) -> io::Result<()> {
    let line = format!("{}{}", kind.prefix(), msg);
    if supports_color {
        writeln!(writer, "{}", line.color(kind.color()))
    } else {
        writeln!(writer, "{}", line)
    }
}

/// Prints a message to stderr unless `quiet` is set.
pub fn stderr_message(kind: MessageKind, msg: impl AsRef<str>, quiet: bool) {
    if quiet && kind != MessageKind::Error {
        return;
    }
    let supports_color = io::stderr().is_terminal();
    let _ = print_message(&mut io::stderr(), kind, msg.as_ref(), supports_color);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_output_has_no_escapes() {
        let mut buf = Vec::new();
        print_message(&mut buf, MessageKind::Warn, "cache is empty", false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Warning: cache is empty\n");
    }

    #[test]
    fn coloured_output_wraps_message() {
        let mut buf = Vec::new();
        print_message(&mut buf, MessageKind::Success, "done", true).unwrap();
        let out = String::from_utf8(buf).unwrap();
        assert!(out.contains("\u{1b}["));
        assert!(out.contains("done"));
    }
}
