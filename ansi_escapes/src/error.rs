// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors returned while turning a color or attribute request into an escape sequence.
//! See [`AnsiEscapeError`] for details.

/// Result type used throughout this crate.
pub type EscapeResult<T> = Result<T, AnsiEscapeError>;

/// Errors from [`resolve()`] and the escape sequence assembler.
///
/// Every variant is a local validation failure caused by the caller's input. Nothing is
/// retried and there is no partial output: a request either produces a complete command
/// string or one of these errors.
///
/// | Variant                  | Cause                                                  |
/// | :----------------------- | :----------------------------------------------------- |
/// | [`MissingColor`]         | No color slot of the [`ColorRequest`] was filled       |
/// | [`ArgumentType`]         | A generic color argument has an unrecognized shape     |
/// | [`UnknownColor`]         | A well formed key is not in the palette (or bad hex)   |
/// | [`InvalidDrawingLevel`]  | Drawing level is not foreground or background          |
/// | [`InvalidColorMode`]     | Color mode is not one of 8, 16 or 256                  |
/// | [`InvalidTextAttribute`] | Text attribute name is not recognized                  |
///
/// [`resolve()`]: crate::resolve
/// [`ColorRequest`]: crate::ColorRequest
/// [`MissingColor`]: Self::MissingColor
/// [`ArgumentType`]: Self::ArgumentType
/// [`UnknownColor`]: Self::UnknownColor
/// [`InvalidDrawingLevel`]: Self::InvalidDrawingLevel
/// [`InvalidColorMode`]: Self::InvalidColorMode
/// [`InvalidTextAttribute`]: Self::InvalidTextAttribute
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum AnsiEscapeError {
    #[error("Cannot parse nothing into a color, no color argument was provided")]
    #[diagnostic(
        code(r3bl_ansi_escapes::missing_color),
        help("Provide one of: color id, name, hex, rgb or hsl")
    )]
    MissingColor,

    #[error("Cannot understand color argument: {detail}")]
    #[diagnostic(
        code(r3bl_ansi_escapes::argument_type),
        help(
            "Use an integer id (or integer string), a color name, a `#rrggbb` hex \
             string, or a list of exactly 3 channel values"
        )
    )]
    ArgumentType {
        /// What was wrong with the argument's shape.
        detail: String,
    },

    #[error("{key} is not a valid color key")]
    #[diagnostic(
        code(r3bl_ansi_escapes::unknown_color),
        help("Run `ansi_cheatsheet --name` to list the known color names")
    )]
    UnknownColor {
        /// The normalized key that failed the palette lookup.
        key: String,
    },

    #[error("Cannot parse {value} into a drawing level")]
    #[diagnostic(
        code(r3bl_ansi_escapes::invalid_drawing_level),
        help("Valid values: `foreground`, `background`, `3`, `4`, 0 or 1")
    )]
    InvalidDrawingLevel { value: String },

    #[error("Cannot parse {value} into a color mode")]
    #[diagnostic(
        code(r3bl_ansi_escapes::invalid_color_mode),
        help("Valid color modes are 8, 16 and 256")
    )]
    InvalidColorMode { value: String },

    #[error("{value} is not a text attribute")]
    #[diagnostic(
        code(r3bl_ansi_escapes::invalid_text_attribute),
        help(
            "Valid attributes: reset, bold, underline, underscore, blink, bright, \
             reversed, concealed"
        )
    )]
    InvalidTextAttribute { value: String },
}

impl AnsiEscapeError {
    pub fn argument_type(detail: impl Into<String>) -> Self {
        Self::ArgumentType {
            detail: detail.into(),
        }
    }

    pub fn unknown_color(key: impl Into<String>) -> Self {
        Self::UnknownColor { key: key.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            AnsiEscapeError::unknown_color("hex_gfffff").to_string(),
            "hex_gfffff is not a valid color key"
        );
        assert_eq!(
            AnsiEscapeError::InvalidDrawingLevel {
                value: "sideways".into()
            }
            .to_string(),
            "Cannot parse sideways into a drawing level"
        );
    }

    #[test]
    fn test_diagnostic_code() {
        use miette::Diagnostic;
        let error = AnsiEscapeError::MissingColor;
        let code = error.code().map(|it| it.to_string());
        assert_eq!(code.as_deref(), Some("r3bl_ansi_escapes::missing_color"));
    }
}
