// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::AnsiEscapeError;

/// Whether a color command targets the text or the cell behind it. The level is the
/// first digit of the SGR color code: `3x` / `38;5;n` for foreground and `4x` /
/// `48;5;n` for background.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DrawingLevel {
    #[default]
    Foreground,
    Background,
}

impl DrawingLevel {
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            DrawingLevel::Foreground => "3",
            DrawingLevel::Background => "4",
        }
    }
}

/// Accepts `foreground` / `background` (any case) and the raw prefixes `3` / `4`.
impl std::str::FromStr for DrawingLevel {
    type Err = AnsiEscapeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "foreground" | "3" => Ok(DrawingLevel::Foreground),
            "background" | "4" => Ok(DrawingLevel::Background),
            _ => Err(AnsiEscapeError::InvalidDrawingLevel {
                value: value.to_string(),
            }),
        }
    }
}

/// Index form: 0 is foreground, 1 is background.
impl TryFrom<i64> for DrawingLevel {
    type Error = AnsiEscapeError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(DrawingLevel::Foreground),
            1 => Ok(DrawingLevel::Background),
            _ => Err(AnsiEscapeError::InvalidDrawingLevel {
                value: index.to_string(),
            }),
        }
    }
}
