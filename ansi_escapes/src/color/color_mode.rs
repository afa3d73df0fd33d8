// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use strum_macros::EnumIter;

use crate::AnsiEscapeError;

/// Color depth of a color command.
///
/// Variants are ordered by depth, so combining two requirements is `max()`: a deeper
/// mode always wins over a shallower one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
pub enum ColorMode {
    /// 8 base colors, command is the bare id, eg: `1`.
    #[default]
    Basic8,
    /// Base colors plus the bold attribute, eg: `1;1`.
    Bold16,
    /// 256 palette via the extension marker, eg: `8;5;196`.
    Extended256,
}

impl ColorMode {
    /// Number of colors, as the mode is usually written (8, 16 or 256).
    #[must_use]
    pub const fn bits(self) -> u16 {
        match self {
            ColorMode::Basic8 => 8,
            ColorMode::Bold16 => 16,
            ColorMode::Extended256 => 256,
        }
    }
}

impl TryFrom<u16> for ColorMode {
    type Error = AnsiEscapeError;

    fn try_from(value: u16) -> std::result::Result<Self, Self::Error> {
        match value {
            8 => Ok(ColorMode::Basic8),
            16 => Ok(ColorMode::Bold16),
            256 => Ok(ColorMode::Extended256),
            _ => Err(AnsiEscapeError::InvalidColorMode {
                value: value.to_string(),
            }),
        }
    }
}

impl std::str::FromStr for ColorMode {
    type Err = AnsiEscapeError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let invalid = || AnsiEscapeError::InvalidColorMode {
            value: value.to_string(),
        };
        let bits = value.trim().parse::<u16>().map_err(|_| invalid())?;
        ColorMode::try_from(bits).map_err(|_| invalid())
    }
}

impl Display for ColorMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.bits()) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;
    use test_case::test_case;

    #[test_case(8, ColorMode::Basic8)]
    #[test_case(16, ColorMode::Bold16)]
    #[test_case(256, ColorMode::Extended256)]
    fn test_try_from_bits(bits: u16, expected: ColorMode) {
        assert_eq!(ColorMode::try_from(bits), Ok(expected));
        assert_eq!(expected.bits(), bits);
    }

    #[test_case(0)]
    #[test_case(24)]
    #[test_case(255)]
    fn test_try_from_invalid_bits(bits: u16) {
        assert_eq!(
            ColorMode::try_from(bits),
            Err(AnsiEscapeError::InvalidColorMode {
                value: bits.to_string()
            })
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("256".parse::<ColorMode>(), Ok(ColorMode::Extended256));
        assert!("truecolor".parse::<ColorMode>().is_err());
    }

    #[test]
    fn test_deeper_mode_wins() {
        assert_eq!(ColorMode::Bold16.max(ColorMode::Extended256), ColorMode::Extended256);
        assert_eq!(ColorMode::Basic8.max(ColorMode::Bold16), ColorMode::Bold16);
        let all: Vec<_> = ColorMode::iter().collect();
        assert_eq!(
            all,
            vec![ColorMode::Basic8, ColorMode::Bold16, ColorMode::Extended256]
        );
    }
}
