// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Cursor movement and erase commands. Unlike SGR commands these are not terminated by
//! `m`; the final byte selects the operation.
//!
//! More info:
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#CSI_(Control_Sequence_Introducer)_sequences>
//! - <https://vt100.net/docs/vt100-ug/chapter3.html>

use std::fmt::{Display, Formatter, Result};

use crate::CSI;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CsiCommand {
    /// CUU: move the cursor up `n` lines.
    CursorUp(u16),
    /// CUD: move the cursor down `n` lines.
    CursorDown(u16),
    /// EL 0.
    ClearToEndOfLine,
    /// EL 1.
    ClearToStartOfLine,
    /// EL 2.
    ClearLine,
    /// ED 0.
    ClearScreenUntilEnd,
    /// ED 1.
    ClearScreenToBeginning,
    /// ED 2.
    ClearScreen,
}

impl Display for CsiCommand {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match *self {
            CsiCommand::CursorUp(n)            => write!(f, "{CSI}{n}A"),
            CsiCommand::CursorDown(n)          => write!(f, "{CSI}{n}B"),
            CsiCommand::ClearToEndOfLine       => write!(f, "{CSI}0K"),
            CsiCommand::ClearToStartOfLine     => write!(f, "{CSI}1K"),
            CsiCommand::ClearLine              => write!(f, "{CSI}2K"),
            CsiCommand::ClearScreenUntilEnd    => write!(f, "{CSI}0J"),
            CsiCommand::ClearScreenToBeginning => write!(f, "{CSI}1J"),
            CsiCommand::ClearScreen            => write!(f, "{CSI}2J"),
        }
    }
}

#[must_use]
pub fn cursor_up(number_of_lines: u16) -> String {
    CsiCommand::CursorUp(number_of_lines).to_string()
}

#[must_use]
pub fn cursor_down(number_of_lines: u16) -> String {
    CsiCommand::CursorDown(number_of_lines).to_string()
}

#[must_use]
pub fn clear_to_end_of_line() -> String { CsiCommand::ClearToEndOfLine.to_string() }

#[must_use]
pub fn clear_to_start_of_line() -> String { CsiCommand::ClearToStartOfLine.to_string() }

#[must_use]
pub fn clear_line() -> String { CsiCommand::ClearLine.to_string() }

/// Clears the current line and moves up, `number_of_lines` times. Leaves the cursor on
/// the line above the last cleared one.
#[must_use]
pub fn clear_lines(number_of_lines: u16) -> String {
    let one_line = format!("{}{}", CsiCommand::ClearLine, CsiCommand::CursorUp(1));
    one_line.repeat(usize::from(number_of_lines))
}

#[must_use]
pub fn clear_screen_until_end() -> String { CsiCommand::ClearScreenUntilEnd.to_string() }

#[must_use]
pub fn clear_screen_to_beginning() -> String {
    CsiCommand::ClearScreenToBeginning.to_string()
}

#[must_use]
pub fn clear_screen() -> String { CsiCommand::ClearScreen.to_string() }

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn cursor_movement() {
        assert_eq!(cursor_up(1), "\x1b[1A");
        assert_eq!(cursor_up(12), "\x1b[12A");
        assert_eq!(cursor_down(3), "\x1b[3B");
    }

    #[test]
    fn line_clearing() {
        assert_eq!(clear_to_end_of_line(), "\x1b[0K");
        assert_eq!(clear_to_start_of_line(), "\x1b[1K");
        assert_eq!(clear_line(), "\x1b[2K");
    }

    #[test]
    fn multi_line_clearing() {
        assert_eq!(clear_lines(2), "\x1b[2K\x1b[1A\x1b[2K\x1b[1A");
        assert_eq!(clear_lines(0), "");
    }

    #[test]
    fn screen_clearing() {
        assert_eq!(clear_screen_until_end(), "\x1b[0J");
        assert_eq!(clear_screen_to_beginning(), "\x1b[1J");
        assert_eq!(clear_screen(), "\x1b[2J");
    }
}
