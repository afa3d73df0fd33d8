// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorRequest, DrawingLevel, EscapeResult, InlineString, basic_color_id,
            format_rich_text};

/// Drawing level prefix followed by the resolved command, eg: `31`, `41;1`, `38;5;49`.
/// This is a single SGR token, ready to be joined with others by [`format_rich_text()`].
///
/// # Errors
///
/// Whatever [`ColorRequest::resolve()`] returns.
pub fn color_command(
    request: &ColorRequest,
    drawing_level: DrawingLevel,
) -> EscapeResult<InlineString> {
    let resolved = request.resolve()?;
    let mut acc = InlineString::from(drawing_level.prefix());
    acc.push_str(&resolved.command);
    Ok(acc)
}

/// Complete escape sequence that sets a color.
///
/// ```rust
/// use r3bl_ansi_escapes::{ColorRequest, DrawingLevel, color};
///
/// assert_eq!(color("red", DrawingLevel::Foreground).unwrap(), "\x1b[31m");
/// assert_eq!(
///     color(ColorRequest::new("red").bold(true), DrawingLevel::Background).unwrap(),
///     "\x1b[41;1m"
/// );
/// ```
///
/// # Errors
///
/// Whatever [`ColorRequest::resolve()`] returns.
pub fn color(
    request: impl Into<ColorRequest>,
    drawing_level: DrawingLevel,
) -> EscapeResult<String> {
    let command = color_command(&request.into(), drawing_level)?;
    Ok(format_rich_text([command]))
}

/// Shorthand for [`color()`] with [`DrawingLevel::Background`].
///
/// # Errors
///
/// Whatever [`ColorRequest::resolve()`] returns.
pub fn background(request: impl Into<ColorRequest>) -> EscapeResult<String> {
    color(request, DrawingLevel::Background)
}

/// 8 color sequence for one of the base names. Anything else yields an empty string.
#[must_use]
pub fn color_8bit(name: &str, drawing_level: DrawingLevel) -> String {
    match basic_color_id(name) {
        Some(color_id) => format_rich_text([format!("{}{color_id}", drawing_level.prefix())]),
        None => {
            tracing::debug!(message = "not a base color name", name);
            String::new()
        }
    }
}

#[must_use]
pub fn black(drawing_level: DrawingLevel) -> String { color_8bit("black", drawing_level) }

#[must_use]
pub fn red(drawing_level: DrawingLevel) -> String { color_8bit("red", drawing_level) }

#[must_use]
pub fn green(drawing_level: DrawingLevel) -> String { color_8bit("green", drawing_level) }

#[must_use]
pub fn yellow(drawing_level: DrawingLevel) -> String { color_8bit("yellow", drawing_level) }

#[must_use]
pub fn blue(drawing_level: DrawingLevel) -> String { color_8bit("blue", drawing_level) }

#[must_use]
pub fn magenta(drawing_level: DrawingLevel) -> String { color_8bit("magenta", drawing_level) }

#[must_use]
pub fn cyan(drawing_level: DrawingLevel) -> String { color_8bit("cyan", drawing_level) }

#[must_use]
pub fn white(drawing_level: DrawingLevel) -> String { color_8bit("white", drawing_level) }
