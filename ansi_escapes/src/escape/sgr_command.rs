// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{CSI, ESC_DEBUG, SEPARATOR, SGR};

/// Wraps SGR command tokens into one escape sequence: `ESC [` + tokens joined by `;` +
/// `m`. No tokens produce `ESC [ m`, which terminals treat as a reset.
///
/// ```rust
/// use r3bl_ansi_escapes::format_rich_text;
///
/// assert_eq!(format_rich_text(["1", "4"]), "\x1b[1;4m");
/// assert_eq!(format_rich_text(["38;5;49"]), "\x1b[38;5;49m");
/// ```
pub fn format_rich_text<I, S>(commands: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut acc = String::from(CSI);
    for (index, command) in commands.into_iter().enumerate() {
        if index > 0 {
            acc.push_str(SEPARATOR);
        }
        acc.push_str(command.as_ref());
    }
    acc.push_str(SGR);

    tracing::trace!(message = "sgr sequence", sequence = %printable(&acc));

    acc
}

/// Renders ESC as `\u001b` so the sequence can be logged without being interpreted.
#[must_use]
pub fn printable(sequence: &str) -> String { sequence.replace('\x1b', ESC_DEBUG) }

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_command() {
        assert_eq!(format_rich_text(["0"]), "\x1b[0m");
    }

    #[test]
    fn test_joined_commands() {
        assert_eq!(format_rich_text(vec!["1", "34", "47"]), "\x1b[1;34;47m");
    }

    #[test]
    fn test_no_commands() {
        assert_eq!(format_rich_text(Vec::<String>::new()), "\x1b[m");
    }

    #[test]
    fn test_printable() {
        assert_eq!(printable("\x1b[1m"), "\\u001b[1m");
    }
}
