// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::Write as _;

use strum::IntoEnumIterator;

use crate::{BASIC_COLOR_NAMES, ColorMode, ColorRequest, DrawingLevel, EscapeResult,
            PaletteEntry, color, entries, entry, reset};

/// Labels on one line never exceed this many characters.
pub const MAX_CHARACTERS_PER_LINE: usize = 72;

/// Room for `255:` and a separating space.
const ID_LABEL_WIDTH: usize = 6;
/// `#rrggbb` plus `, `.
const HEX_LABEL_WIDTH: usize = 9;
/// `rgb(255,255,255)` or `hsl(360,100,100)` plus `, `.
const TRIPLE_LABEL_WIDTH: usize = 20;

/// What to render, and how to label each swatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheatsheetOptions {
    /// Rendered in this order. Ignored when any of hex, rgb or hsl is displayed, since
    /// those only describe the 256 palette.
    pub color_modes: Vec<ColorMode>,
    pub drawing_level: DrawingLevel,
    pub display_id: bool,
    pub display_name: bool,
    pub display_hex: bool,
    pub display_rgb: bool,
    pub display_hsl: bool,
}

impl Default for CheatsheetOptions {
    fn default() -> Self {
        Self {
            color_modes: ColorMode::iter().collect(),
            drawing_level: DrawingLevel::Foreground,
            display_id: true,
            display_name: false,
            display_hex: false,
            display_rgb: false,
            display_hsl: false,
        }
    }
}

impl CheatsheetOptions {
    fn displays_palette_values(&self) -> bool {
        self.display_hex || self.display_rgb || self.display_hsl
    }

    /// The modes that will actually be rendered.
    #[must_use]
    pub fn effective_color_modes(&self) -> Vec<ColorMode> {
        if self.displays_palette_values() {
            vec![ColorMode::Extended256]
        } else {
            self.color_modes.clone()
        }
    }

    /// Width every label is padded to.
    #[must_use]
    pub fn label_width(&self) -> usize {
        let mut acc = ID_LABEL_WIDTH;
        if self.display_name {
            acc += self.name_width();
        }
        if self.display_hex {
            acc += HEX_LABEL_WIDTH;
        }
        if self.display_rgb {
            acc += TRIPLE_LABEL_WIDTH;
        }
        if self.display_hsl {
            acc += TRIPLE_LABEL_WIDTH;
        }
        acc
    }

    /// Longest name among the palettes that will be rendered.
    fn name_width(&self) -> usize {
        self.effective_color_modes()
            .into_iter()
            .filter_map(|color_mode| match color_mode {
                ColorMode::Basic8 => BASIC_COLOR_NAMES.iter().map(|name| name.len()).max(),
                ColorMode::Bold16 => entries().take(16).map(|row| row.name.len()).max(),
                ColorMode::Extended256 => entries().map(|row| row.name.len()).max(),
            })
            .max()
            .unwrap_or_default()
    }

    /// How many swatches fit on one line; always at least one.
    #[must_use]
    pub fn swatches_per_line(&self) -> usize {
        (MAX_CHARACTERS_PER_LINE / self.label_width()).max(1)
    }

    /// Eg: `49: [mediumspringgreen, #00ffaf]`.
    #[must_use]
    pub fn label(&self, row: &PaletteEntry, name: &str) -> String {
        let mut info: Vec<String> = vec![];
        if self.display_name {
            info.push(name.to_string());
        }
        if self.display_hex {
            info.push(row.hex.to_string());
        }
        if self.display_rgb {
            let (red, green, blue) = row.rgb;
            info.push(format!("rgb({red},{green},{blue})"));
        }
        if self.display_hsl {
            let (hue, saturation, lightness) = row.hsl;
            info.push(format!("hsl({hue},{saturation},{lightness})"));
        }

        let id_part = if self.display_id {
            format!("{}:", row.id)
        } else {
            String::new()
        };

        match (id_part.is_empty(), info.is_empty()) {
            (_, true) => id_part,
            (true, false) => format!("[{}]", info.join(", ")),
            (false, false) => format!("{id_part} [{}]", info.join(", ")),
        }
    }
}

/// Renders one block of swatches per color mode. Each swatch is the label, padded to
/// [`CheatsheetOptions::label_width()`], drawn in its own color and followed by a reset.
///
/// - 8 colors: ids 0-7 under their base names.
/// - 16 colors: ids 0-15, where 8-15 are drawn as a base color plus bold.
/// - 256 colors: every id through the palette extension.
///
/// # Errors
///
/// A swatch color fails to resolve; this does not happen for palette ids.
pub fn render_cheatsheet(options: &CheatsheetOptions) -> EscapeResult<String> {
    let width = options.label_width();
    let per_line = options.swatches_per_line();
    let mut acc = String::new();

    for color_mode in options.effective_color_modes() {
        tracing::debug!(message = "rendering cheatsheet", %color_mode, width, per_line);

        let _ = writeln!(acc, "{} colors:", color_mode.bits());

        let last_id: u8 = match color_mode {
            ColorMode::Basic8 => 7,
            ColorMode::Bold16 => 15,
            ColorMode::Extended256 => u8::MAX,
        };
        let mut column = 0;
        for color_id in 0..=last_id {
            let row = entry(color_id);
            let name = match color_mode {
                ColorMode::Basic8 => BASIC_COLOR_NAMES[usize::from(color_id)],
                ColorMode::Bold16 | ColorMode::Extended256 => row.name,
            };

            let sequence = color(swatch_request(color_id, color_mode), options.drawing_level)?;
            let label = options.label(row, name);
            let _ = write!(acc, "{sequence}{label:<width$}{}", reset());

            column += 1;
            if column == per_line {
                acc.push('\n');
                column = 0;
            }
        }
        if column != 0 {
            acc.push('\n');
        }
    }

    Ok(acc)
}

/// Ids 8-15 already imply 16 colors, so only the 256 palette needs an explicit mode.
fn swatch_request(color_id: u8, color_mode: ColorMode) -> ColorRequest {
    let request = ColorRequest::default().color_id(color_id);
    match color_mode {
        ColorMode::Extended256 => request.colormode(ColorMode::Extended256),
        ColorMode::Basic8 | ColorMode::Bold16 => request,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn count_swatches(rendered: &str) -> usize { rendered.matches("\x1b[0m").count() }

    #[test]
    fn test_default_options_render_every_mode() {
        let rendered = render_cheatsheet(&CheatsheetOptions::default()).unwrap();
        assert!(rendered.starts_with("8 colors:\n"));
        assert!(rendered.contains("16 colors:\n"));
        assert!(rendered.contains("256 colors:\n"));
        assert_eq!(count_swatches(&rendered), 8 + 16 + 256);
    }

    #[test]
    fn test_basic8_swatches() {
        let options = CheatsheetOptions {
            color_modes: vec![ColorMode::Basic8],
            display_name: true,
            ..Default::default()
        };
        let rendered = render_cheatsheet(&options).unwrap();
        assert!(rendered.contains("\x1b[31m1: [red]"));
        assert!(!rendered.contains("maroon"));
    }

    #[test]
    fn test_bold16_swatches() {
        let options = CheatsheetOptions {
            color_modes: vec![ColorMode::Bold16],
            drawing_level: DrawingLevel::Background,
            ..Default::default()
        };
        let rendered = render_cheatsheet(&options).unwrap();
        assert!(rendered.contains("\x1b[40m0:"));
        assert!(rendered.contains("\x1b[41;1m9:"));
    }

    #[test]
    fn test_palette_values_force_256() {
        let options = CheatsheetOptions {
            display_hex: true,
            ..Default::default()
        };
        assert_eq!(options.effective_color_modes(), vec![ColorMode::Extended256]);

        let rendered = render_cheatsheet(&options).unwrap();
        assert!(rendered.starts_with("256 colors:\n"));
        assert!(rendered.contains("\x1b[38;5;49m49: [#00ffaf]"));
        assert_eq!(count_swatches(&rendered), 256);
    }

    #[test]
    fn test_label() {
        let options = CheatsheetOptions {
            display_name: true,
            display_rgb: true,
            display_hsl: true,
            ..Default::default()
        };
        assert_eq!(
            options.label(entry(49), entry(49).name),
            "49: [mediumspringgreen, rgb(0,255,175), hsl(161,100,50)]"
        );

        let options = CheatsheetOptions {
            display_id: false,
            display_hex: true,
            ..Default::default()
        };
        assert_eq!(options.label(entry(9), "red"), "[#ff0000]");
    }

    #[test]
    fn test_line_budget() {
        let options = CheatsheetOptions::default();
        assert_eq!(options.label_width(), 6);
        assert_eq!(options.swatches_per_line(), 12);

        let options = CheatsheetOptions {
            display_hex: true,
            display_rgb: true,
            display_hsl: true,
            ..Default::default()
        };
        assert_eq!(options.label_width(), 55);
        assert_eq!(options.swatches_per_line(), 1);
    }

    #[test]
    fn test_name_width_follows_rendered_palettes() {
        // "magenta" is the longest base name.
        let options = CheatsheetOptions {
            color_modes: vec![ColorMode::Basic8],
            display_name: true,
            ..Default::default()
        };
        assert_eq!(options.label_width(), 6 + 7);
        assert_eq!(options.swatches_per_line(), 5);

        // "fuchsia" is the longest among the first 16 names.
        let options = CheatsheetOptions {
            color_modes: vec![ColorMode::Bold16],
            display_name: true,
            ..Default::default()
        };
        assert_eq!(options.label_width(), 6 + 7);

        let longest = entries().map(|row| row.name.len()).max().unwrap();
        let options = CheatsheetOptions {
            color_modes: vec![ColorMode::Basic8, ColorMode::Extended256],
            display_name: true,
            ..Default::default()
        };
        assert_eq!(options.label_width(), 6 + longest);
    }

    #[test]
    fn test_lines_hold_at_most_per_line_swatches() {
        let options = CheatsheetOptions {
            color_modes: vec![ColorMode::Extended256],
            ..Default::default()
        };
        let rendered = render_cheatsheet(&options).unwrap();
        for line in rendered.lines().skip(1) {
            assert!(count_swatches(line) <= options.swatches_per_line());
        }
        // 256 swatches at 12 per line.
        assert_eq!(rendered.lines().count(), 1 + 22);
    }
}
