// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{AnsiEscapeError, EscapeResult};

/// The five mutually exclusive ways to name a color.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorIdentifier {
    /// Palette id, 0-255.
    Id(u8),
    /// Case-insensitive palette name, eg: `"mediumspringgreen"`.
    Name(String),
    /// `#rrggbb`, either case.
    Hex(String),
    Rgb(u8, u8, u8),
    /// Hue 0-360, saturation and lightness 0-100.
    Hsl(u16, u8, u8),
}

impl Display for ColorIdentifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            ColorIdentifier::Id(id) => write!(f, "id({id})"),
            ColorIdentifier::Name(name) => write!(f, "name({name})"),
            ColorIdentifier::Hex(hex) => write!(f, "hex({hex})"),
            ColorIdentifier::Rgb(r, g, b) => write!(f, "rgb({r},{g},{b})"),
            ColorIdentifier::Hsl(h, s, l) => write!(f, "hsl({h},{s},{l})"),
        }
    }
}

/// An untagged color argument, whose meaning is decided by its shape alone. See
/// [`ColorArg::classify`].
///
/// ```rust
/// use r3bl_ansi_escapes::{ColorArg, ColorIdentifier};
///
/// assert_eq!(ColorArg::from("12").classify(), Ok(ColorIdentifier::Id(12)));
/// assert_eq!(
///     ColorArg::from("#ff0000").classify(),
///     Ok(ColorIdentifier::Hex("#ff0000".into()))
/// );
/// assert_eq!(
///     ColorArg::from((255, 0, 0)).classify(),
///     Ok(ColorIdentifier::Rgb(255, 0, 0))
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ColorArg {
    Int(i64),
    Text(String),
    Values(Vec<i64>),
}

impl ColorArg {
    /// Decides which identifier space the argument belongs to, in this order:
    /// 1. Anything that parses as an integer is an [`ColorIdentifier::Id`].
    /// 2. A list of values is an [`ColorIdentifier::Rgb`] triple.
    /// 3. Text starting with `#` is a [`ColorIdentifier::Hex`].
    /// 4. Any other text is a [`ColorIdentifier::Name`].
    ///
    /// # Errors
    ///
    /// [`AnsiEscapeError::ArgumentType`] when an id is outside 0-255, or a list does not
    /// hold exactly 3 values in 0-255.
    pub fn classify(&self) -> EscapeResult<ColorIdentifier> {
        match self {
            ColorArg::Int(number) => classify_id(*number),
            ColorArg::Text(text) => match text.trim().parse::<i64>() {
                Ok(number) => classify_id(number),
                Err(_) if text.starts_with('#') => Ok(ColorIdentifier::Hex(text.clone())),
                Err(_) => Ok(ColorIdentifier::Name(text.clone())),
            },
            ColorArg::Values(values) => classify_values(values),
        }
    }
}

fn classify_id(number: i64) -> EscapeResult<ColorIdentifier> {
    u8::try_from(number).map(ColorIdentifier::Id).map_err(|_| {
        AnsiEscapeError::argument_type(format!("color id {number} is outside 0..=255"))
    })
}

fn classify_values(values: &[i64]) -> EscapeResult<ColorIdentifier> {
    let channels = values
        .iter()
        .map(|value| u8::try_from(*value).ok())
        .collect::<Option<Vec<u8>>>();
    match channels.as_deref() {
        Some(&[red, green, blue]) => Ok(ColorIdentifier::Rgb(red, green, blue)),
        _ => Err(AnsiEscapeError::argument_type(format!(
            "expected 3 channel values in 0..=255, got {values:?}"
        ))),
    }
}

mod convert_into_color_arg {
    use super::ColorArg;

    impl From<u8> for ColorArg {
        fn from(value: u8) -> Self { ColorArg::Int(i64::from(value)) }
    }

    impl From<i32> for ColorArg {
        fn from(value: i32) -> Self { ColorArg::Int(i64::from(value)) }
    }

    impl From<i64> for ColorArg {
        fn from(value: i64) -> Self { ColorArg::Int(value) }
    }

    impl From<&str> for ColorArg {
        fn from(value: &str) -> Self { ColorArg::Text(value.to_string()) }
    }

    impl From<String> for ColorArg {
        fn from(value: String) -> Self { ColorArg::Text(value) }
    }

    impl From<(u8, u8, u8)> for ColorArg {
        fn from((red, green, blue): (u8, u8, u8)) -> Self {
            ColorArg::Values(vec![i64::from(red), i64::from(green), i64::from(blue)])
        }
    }

    impl From<[u8; 3]> for ColorArg {
        fn from([red, green, blue]: [u8; 3]) -> Self { ColorArg::from((red, green, blue)) }
    }

    impl From<Vec<i64>> for ColorArg {
        fn from(values: Vec<i64>) -> Self { ColorArg::Values(values) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(ColorArg::from(5_u8), ColorIdentifier::Id(5))]
    #[test_case(ColorArg::from("200"), ColorIdentifier::Id(200))]
    #[test_case(ColorArg::from(" 7 "), ColorIdentifier::Id(7))]
    #[test_case(ColorArg::from("#00FFaf"), ColorIdentifier::Hex("#00FFaf".into()))]
    #[test_case(ColorArg::from("#zzzzzz"), ColorIdentifier::Hex("#zzzzzz".into()))]
    #[test_case(ColorArg::from("Blue"), ColorIdentifier::Name("Blue".into()))]
    #[test_case(ColorArg::from([0, 95, 135]), ColorIdentifier::Rgb(0, 95, 135))]
    #[test_case(ColorArg::from(vec![1, 2, 3]), ColorIdentifier::Rgb(1, 2, 3))]
    fn test_classify(arg: ColorArg, expected: ColorIdentifier) {
        assert_eq!(arg.classify(), Ok(expected));
    }

    #[test_case(ColorArg::from(256))]
    #[test_case(ColorArg::from(-1))]
    #[test_case(ColorArg::from("300"))]
    #[test_case(ColorArg::from(vec![1, 2]))]
    #[test_case(ColorArg::from(vec![1, 2, 3, 4]))]
    #[test_case(ColorArg::from(vec![0, 0, 256]))]
    fn test_classify_argument_type_error(arg: ColorArg) {
        assert!(matches!(
            arg.classify(),
            Err(AnsiEscapeError::ArgumentType { .. })
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(ColorIdentifier::Rgb(1, 2, 3).to_string(), "rgb(1,2,3)");
        assert_eq!(ColorIdentifier::Id(9).to_string(), "id(9)");
    }
}
