// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Building blocks of every sequence generated by this crate.
//!
//! More info:
//! - <https://notes.burke.libbey.me/ansi-escape-codes/>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#SGR_(Select_Graphic_Rendition)_parameters>

use const_format::concatcp;

/// Control Sequence Introducer: `ESC [`.
pub const CSI: &str = "\x1b[";

/// Terminates an SGR (Select Graphic Rendition) command.
pub const SGR: &str = "m";

/// Joins the numeric tokens of one SGR command.
pub const SEPARATOR: &str = ";";

/// How ESC is rendered in debug logs so that log lines do not change terminal state.
pub const ESC_DEBUG: &str = "\\u001b";

/// Slot 8 of the base color table. Not a color: it announces that the command continues
/// with an extended color selection (`8;5;<id>` becomes `38;5;<id>` or `48;5;<id>`).
pub const EXTENDED_COLOR_MARKER: u8 = 8;

/// Follows [`EXTENDED_COLOR_MARKER`] to select the 256 color palette.
pub const PALETTE_EXTENSION: u8 = 5;

/// Bold attribute code appended to base colors in 16 color mode.
pub const BOLD_CODE: u8 = 1;

/// Full reset sequence, emitted after rich text.
pub const SGR_RESET: &str = concatcp!(CSI, "0", SGR);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_sequence() {
        assert_eq!(SGR_RESET, "\x1b[0m");
    }
}
