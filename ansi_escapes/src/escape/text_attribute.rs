// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use strum_macros::{AsRefStr, EnumIter};

use crate::{AnsiEscapeError, format_rich_text};

/// SGR text attributes. `underscore` and `bright` are accepted as names for
/// [`TextAttribute::Underline`] and [`TextAttribute::Blink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum TextAttribute {
    /// Turns every attribute off.
    Reset,
    Bold,
    Underline,
    Blink,
    Reversed,
    Concealed,
}

impl TextAttribute {
    #[rustfmt::skip]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            TextAttribute::Reset     => 0,
            TextAttribute::Bold      => 1,
            TextAttribute::Underline => 4,
            TextAttribute::Blink     => 5,
            TextAttribute::Reversed  => 7,
            TextAttribute::Concealed => 8,
        }
    }
}

impl Display for TextAttribute {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.code()) }
}

impl std::str::FromStr for TextAttribute {
    type Err = AnsiEscapeError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "reset" => Ok(TextAttribute::Reset),
            "bold" => Ok(TextAttribute::Bold),
            "underline" | "underscore" => Ok(TextAttribute::Underline),
            "blink" | "bright" => Ok(TextAttribute::Blink),
            "reversed" => Ok(TextAttribute::Reversed),
            "concealed" => Ok(TextAttribute::Concealed),
            _ => Err(AnsiEscapeError::InvalidTextAttribute {
                value: value.to_string(),
            }),
        }
    }
}

fn sequence_for(attribute: TextAttribute) -> String {
    format_rich_text([attribute.to_string()])
}

#[must_use]
pub fn reset() -> String { sequence_for(TextAttribute::Reset) }

#[must_use]
pub fn bold() -> String { sequence_for(TextAttribute::Bold) }

#[must_use]
pub fn underline() -> String { sequence_for(TextAttribute::Underline) }

#[must_use]
pub fn underscore() -> String { sequence_for(TextAttribute::Underline) }

#[must_use]
pub fn blink() -> String { sequence_for(TextAttribute::Blink) }

#[must_use]
pub fn bright() -> String { sequence_for(TextAttribute::Blink) }

#[must_use]
pub fn reversed() -> String { sequence_for(TextAttribute::Reversed) }

#[must_use]
pub fn concealed() -> String { sequence_for(TextAttribute::Concealed) }

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test_case("reset", TextAttribute::Reset)]
    #[test_case("bold", TextAttribute::Bold)]
    #[test_case("underline", TextAttribute::Underline)]
    #[test_case("underscore", TextAttribute::Underline)]
    #[test_case("blink", TextAttribute::Blink)]
    #[test_case("bright", TextAttribute::Blink)]
    #[test_case("reversed", TextAttribute::Reversed)]
    #[test_case("Concealed", TextAttribute::Concealed)]
    fn test_parse(name: &str, expected: TextAttribute) {
        assert_eq!(name.parse::<TextAttribute>(), Ok(expected));
    }

    #[test]
    fn test_parse_invalid() {
        assert_eq!(
            "italic".parse::<TextAttribute>(),
            Err(AnsiEscapeError::InvalidTextAttribute {
                value: "italic".into()
            })
        );
    }

    #[test]
    fn test_names_round_trip() {
        for attribute in TextAttribute::iter() {
            assert_eq!(attribute.as_ref().parse::<TextAttribute>(), Ok(attribute));
        }
    }

    #[test]
    fn test_sequences() {
        assert_eq!(reset(), "\x1b[0m");
        assert_eq!(bold(), "\x1b[1m");
        assert_eq!(underline(), "\x1b[4m");
        assert_eq!(underscore(), underline());
        assert_eq!(blink(), "\x1b[5m");
        assert_eq!(bright(), blink());
        assert_eq!(reversed(), "\x1b[7m");
        assert_eq!(concealed(), "\x1b[8m");
    }
}
