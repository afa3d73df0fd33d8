// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write as _;

use crate::{AnsiEscapeError, BOLD_CODE, ColorIdentifier, ColorMode, ColorRequest,
            EXTENDED_COLOR_MARKER, EscapeResult, InlineString, PALETTE_EXTENSION,
            basic_color_id, clip_rgb, is_basic_color, lookup_by_hex, lookup_by_hsl_bin,
            lookup_by_name, lookup_by_rgb_bin, nearest_hsl_bin, parse_hex_rgb};

/// Outcome of [`resolve()`]: the color command without a drawing level prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColor {
    /// Palette id the request landed on.
    pub color_id: u8,
    pub color_mode: ColorMode,
    /// Semicolon joined codes, eg: `1`, `1;1` or `8;5;49`. In 16 color mode ids 8-15
    /// are written as their base color plus bold, eg: id 9 is `1;1`.
    pub command: InlineString,
}

impl ColorRequest {
    /// See [`resolve()`].
    ///
    /// # Errors
    ///
    /// See [`resolve()`].
    pub fn resolve(&self) -> EscapeResult<ResolvedColor> { resolve(self) }
}

/// Turns a [`ColorRequest`] into a color command.
///
/// 1. The first filled color slot is classified into a [`ColorIdentifier`].
/// 2. The depth is the deepest of what the identifier implies and what the flags ask
///    for. Hex, RGB, HSL and non base names imply 256 colors; ids above 15 imply 256
///    colors; ids 8-15 imply 16 colors.
/// 3. The identifier is looked up in the palette. RGB channels are clipped to the cube
///    bins first and HSL is snapped to the nearest enumerated key.
/// 4. The command is assembled for the depth: `<id>`, `<id mod 8>;1` or `8;5;<id>`.
///
/// # Errors
///
/// - [`AnsiEscapeError::MissingColor`] when no color slot is filled.
/// - [`AnsiEscapeError::ArgumentType`] when the generic argument has no known shape.
/// - [`AnsiEscapeError::UnknownColor`] when a name or hex string is not in the palette.
pub fn resolve(request: &ColorRequest) -> EscapeResult<ResolvedColor> {
    let identifier = request.first_color_identifier()?;
    let color_mode = implied_color_mode(&identifier).max(request.flag_color_mode());
    let color_id = lookup_color_id(&identifier, color_mode)?;
    let command = assemble_command(color_id, color_mode);

    // % is Display, ? is Debug.
    tracing::debug!(
        message = "resolved color",
        identifier = %identifier,
        color_mode = %color_mode,
        color_id,
        command = %command
    );

    Ok(ResolvedColor {
        color_id,
        color_mode,
        command,
    })
}

/// Depth implied by the identifier alone, before flags are applied.
fn implied_color_mode(identifier: &ColorIdentifier) -> ColorMode {
    match identifier {
        ColorIdentifier::Hex(_) | ColorIdentifier::Rgb(..) | ColorIdentifier::Hsl(..) => {
            ColorMode::Extended256
        }
        ColorIdentifier::Name(name) if is_basic_color(name) => ColorMode::Basic8,
        ColorIdentifier::Name(_) => ColorMode::Extended256,
        ColorIdentifier::Id(0..EXTENDED_COLOR_MARKER) => ColorMode::Basic8,
        ColorIdentifier::Id(EXTENDED_COLOR_MARKER..=15) => ColorMode::Bold16,
        ColorIdentifier::Id(_) => ColorMode::Extended256,
    }
}

fn lookup_color_id(identifier: &ColorIdentifier, color_mode: ColorMode) -> EscapeResult<u8> {
    match identifier {
        ColorIdentifier::Id(color_id) => Ok(*color_id),

        // Base names mean ids 0-7 unless the 256 palette was asked for, where eg: "red"
        // is the bright red at id 9.
        ColorIdentifier::Name(name) => {
            let found = match color_mode {
                ColorMode::Extended256 => lookup_by_name(name),
                ColorMode::Basic8 | ColorMode::Bold16 => basic_color_id(name),
            };
            found.ok_or_else(|| AnsiEscapeError::unknown_color(name.to_ascii_lowercase()))
        }

        // Palette keys first so that eg: "#800000" stays id 1 rather than its cube
        // neighbor. Any other well formed hex is clipped like an RGB triple.
        ColorIdentifier::Hex(hex) => lookup_by_hex(hex)
            .or_else(|| {
                let (red, green, blue) = clip_rgb(parse_hex_rgb(hex)?);
                lookup_by_rgb_bin(red, green, blue)
            })
            .ok_or_else(|| AnsiEscapeError::unknown_color(hex.clone())),

        ColorIdentifier::Rgb(red, green, blue) => {
            let (red, green, blue) = clip_rgb((*red, *green, *blue));
            lookup_by_rgb_bin(red, green, blue).ok_or_else(|| {
                AnsiEscapeError::unknown_color(format!("rgb({red},{green},{blue})"))
            })
        }

        ColorIdentifier::Hsl(hue, saturation, lightness) => {
            let (hue, saturation, lightness) = nearest_hsl_bin(*hue, *saturation, *lightness);
            lookup_by_hsl_bin(hue, saturation, lightness).ok_or_else(|| {
                AnsiEscapeError::unknown_color(format!("hsl({hue},{saturation},{lightness})"))
            })
        }
    }
}

/// Base colors are 0-7, so in 16 color mode ids 8-15 become their base color plus bold.
fn assemble_command(color_id: u8, color_mode: ColorMode) -> InlineString {
    let mut acc = InlineString::new();
    // Writing into an inline string can not fail.
    let _ = match color_mode {
        ColorMode::Basic8 => write!(acc, "{color_id}"),
        ColorMode::Bold16 => write!(acc, "{};{BOLD_CODE}", color_id % 8),
        ColorMode::Extended256 => {
            write!(acc, "{EXTENDED_COLOR_MARKER};{PALETTE_EXTENSION};{color_id}")
        }
    };
    acc
}
