// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{AnsiEscapeError, ColorArg, ColorIdentifier, ColorMode, EscapeResult};

/// Everything a caller can say about one color.
///
/// There are five color slots. Only the first filled slot, in the order `color_id`,
/// `name`, `hex`, `rgb`, `hsl`, is used; the others are ignored even when set. The
/// `name` slot takes an untagged [`ColorArg`], so it may also carry an id, a hex string
/// or an RGB triple.
///
/// The flags only ever raise the color depth: `blink`, `bright` or a 256 `colormode`
/// ask for [`ColorMode::Extended256`]; `bold` or a 16 `colormode` ask for
/// [`ColorMode::Bold16`].
///
/// ```rust
/// use r3bl_ansi_escapes::{ColorMode, ColorRequest};
///
/// let request = ColorRequest::new("red").bold(true);
/// assert_eq!(request.resolve().unwrap().command.as_str(), "1;1");
///
/// let request = ColorRequest::default().hex("#ff0000");
/// let resolved = request.resolve().unwrap();
/// assert_eq!(resolved.command.as_str(), "8;5;9");
/// assert_eq!(resolved.color_mode, ColorMode::Extended256);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorRequest {
    pub color_id: Option<u8>,
    pub name: Option<ColorArg>,
    pub hex: Option<String>,
    pub rgb: Option<(u8, u8, u8)>,
    pub hsl: Option<(u16, u8, u8)>,
    pub bold: bool,
    pub blink: bool,
    pub bright: bool,
    pub colormode: ColorMode,
}

impl ColorRequest {
    /// Request with a generic argument in the `name` slot.
    pub fn new(arg: impl Into<ColorArg>) -> Self {
        Self {
            name: Some(arg.into()),
            ..Default::default()
        }
    }

    #[must_use]
    pub fn color_id(mut self, color_id: u8) -> Self {
        self.color_id = Some(color_id);
        self
    }

    #[must_use]
    pub fn name(mut self, arg: impl Into<ColorArg>) -> Self {
        self.name = Some(arg.into());
        self
    }

    #[must_use]
    pub fn hex(mut self, hex: impl Into<String>) -> Self {
        self.hex = Some(hex.into());
        self
    }

    #[must_use]
    pub fn rgb(mut self, rgb: (u8, u8, u8)) -> Self {
        self.rgb = Some(rgb);
        self
    }

    #[must_use]
    pub fn hsl(mut self, hsl: (u16, u8, u8)) -> Self {
        self.hsl = Some(hsl);
        self
    }

    #[must_use]
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }

    #[must_use]
    pub fn blink(mut self, blink: bool) -> Self {
        self.blink = blink;
        self
    }

    #[must_use]
    pub fn bright(mut self, bright: bool) -> Self {
        self.bright = bright;
        self
    }

    #[must_use]
    pub fn colormode(mut self, colormode: ColorMode) -> Self {
        self.colormode = colormode;
        self
    }

    /// Picks the first filled color slot and turns it into a [`ColorIdentifier`].
    ///
    /// # Errors
    ///
    /// - [`AnsiEscapeError::MissingColor`] when every slot is empty.
    /// - [`AnsiEscapeError::ArgumentType`] when the `name` slot wins and its argument
    ///   cannot be classified.
    pub fn first_color_identifier(&self) -> EscapeResult<ColorIdentifier> {
        if let Some(color_id) = self.color_id {
            return Ok(ColorIdentifier::Id(color_id));
        }
        if let Some(arg) = &self.name {
            return arg.classify();
        }
        if let Some(hex) = &self.hex {
            return Ok(ColorIdentifier::Hex(hex.clone()));
        }
        if let Some((red, green, blue)) = self.rgb {
            return Ok(ColorIdentifier::Rgb(red, green, blue));
        }
        if let Some((hue, saturation, lightness)) = self.hsl {
            return Ok(ColorIdentifier::Hsl(hue, saturation, lightness));
        }
        Err(AnsiEscapeError::MissingColor)
    }

    /// The depth asked for by the flags alone, [`ColorMode::Basic8`] when none are set.
    #[must_use]
    pub fn flag_color_mode(&self) -> ColorMode {
        if self.blink || self.bright || self.colormode == ColorMode::Extended256 {
            ColorMode::Extended256
        } else if self.bold || self.colormode == ColorMode::Bold16 {
            ColorMode::Bold16
        } else {
            ColorMode::Basic8
        }
    }
}

mod convert_into_color_request {
    use super::ColorRequest;

    impl From<&str> for ColorRequest {
        fn from(arg: &str) -> Self { ColorRequest::new(arg) }
    }

    impl From<u8> for ColorRequest {
        fn from(color_id: u8) -> Self { ColorRequest::default().color_id(color_id) }
    }

    impl From<(u8, u8, u8)> for ColorRequest {
        fn from(rgb: (u8, u8, u8)) -> Self { ColorRequest::default().rgb(rgb) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_empty_request_is_missing_color() {
        assert_eq!(
            ColorRequest::default().first_color_identifier(),
            Err(AnsiEscapeError::MissingColor)
        );
    }

    #[test]
    fn test_slot_order() {
        let request = ColorRequest::default()
            .hsl((0, 100, 50))
            .rgb((0, 0, 255))
            .hex("#00ff00")
            .name("red")
            .color_id(5);
        assert_eq!(request.first_color_identifier(), Ok(ColorIdentifier::Id(5)));

        let request = ColorRequest {
            color_id: None,
            ..request
        };
        assert_eq!(
            request.first_color_identifier(),
            Ok(ColorIdentifier::Name("red".into()))
        );

        let request = ColorRequest {
            name: None,
            ..request
        };
        assert_eq!(
            request.first_color_identifier(),
            Ok(ColorIdentifier::Hex("#00ff00".into()))
        );

        let request = ColorRequest { hex: None, ..request };
        assert_eq!(
            request.first_color_identifier(),
            Ok(ColorIdentifier::Rgb(0, 0, 255))
        );

        let request = ColorRequest { rgb: None, ..request };
        assert_eq!(
            request.first_color_identifier(),
            Ok(ColorIdentifier::Hsl(0, 100, 50))
        );
    }

    #[test]
    fn test_ignored_slots_are_not_classified() {
        // The bad generic argument is never looked at because the id slot wins.
        let request = ColorRequest::new(vec![1, 2]).color_id(3);
        assert_eq!(request.first_color_identifier(), Ok(ColorIdentifier::Id(3)));
    }

    #[test_case(ColorRequest::default(), ColorMode::Basic8)]
    #[test_case(ColorRequest::default().bold(true), ColorMode::Bold16)]
    #[test_case(ColorRequest::default().colormode(ColorMode::Bold16), ColorMode::Bold16)]
    #[test_case(ColorRequest::default().blink(true), ColorMode::Extended256)]
    #[test_case(ColorRequest::default().bright(true), ColorMode::Extended256)]
    #[test_case(ColorRequest::default().bold(true).blink(true), ColorMode::Extended256)]
    #[test_case(
        ColorRequest::default().bold(true).colormode(ColorMode::Extended256),
        ColorMode::Extended256
    )]
    fn test_flag_color_mode(request: ColorRequest, expected: ColorMode) {
        assert_eq!(request.flag_color_mode(), expected);
    }
}
