// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Static palette table.
//!
//! Every recognized color identifier (symbolic name, hex string, RGB triple, HSL
//! triple) aliases onto one of the 256 numeric slots of the xterm palette. The rows live
//! in [`PALETTE`] and the reverse indexes are built once, on first use, and never
//! mutated. Lookups are pure and return [`None`] rather than an error so that the
//! resolver decides how to escalate.
//!
//! When two ids share a hex, RGB or HSL key (e.g. id 0 and id 16 are both `#000000`)
//! the lower id owns the key.

// Attach.
mod color_bins;
mod palette_data;
mod palette_index;

// Re-export.
pub use color_bins::*;
pub use palette_data::*;
pub use palette_index::*;

/// One row of the palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub id: u8,
    pub name: &'static str,
    /// Lowercase `#rrggbb`.
    pub hex: &'static str,
    pub rgb: (u8, u8, u8),
    /// Hue in degrees, saturation and lightness in percent.
    pub hsl: (u16, u8, u8),
}

/// The 8 base color names, in id order. They form the 8 color palette and are
/// reused (with the bold attribute) for 16 color mode.
pub const BASIC_COLOR_NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

/// Row for `id`.
#[must_use]
pub fn entry(id: u8) -> &'static PaletteEntry { &PALETTE[usize::from(id)] }

/// All 256 rows in id order.
pub fn entries() -> impl Iterator<Item = &'static PaletteEntry> { PALETTE.iter() }

/// `true` iff `name` (case-insensitive) is one of [`BASIC_COLOR_NAMES`].
#[must_use]
pub fn is_basic_color(name: &str) -> bool { basic_color_id(name).is_some() }

/// Position of `name` (case-insensitive) in [`BASIC_COLOR_NAMES`].
#[must_use]
pub fn basic_color_id(name: &str) -> Option<u8> {
    BASIC_COLOR_NAMES
        .iter()
        .position(|it| it.eq_ignore_ascii_case(name))
        .and_then(|index| u8::try_from(index).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_rows_are_in_id_order() {
        for (index, row) in entries().enumerate() {
            assert_eq!(usize::from(row.id), index);
        }
    }

    #[test]
    fn test_hex_matches_rgb() {
        for row in entries() {
            let (r, g, b) = row.rgb;
            assert_eq!(row.hex, format!("#{r:02x}{g:02x}{b:02x}"));
        }
    }

    #[test_case("red", true)]
    #[test_case("RED", true; "uppercase red")]
    #[test_case("White", true; "capitalized white")]
    #[test_case("maroon", false)]
    #[test_case("_blink", false)]
    #[test_case("", false)]
    fn test_is_basic_color(name: &str, expected: bool) {
        assert_eq!(is_basic_color(name), expected);
    }

    #[test]
    fn test_basic_color_ids() {
        assert_eq!(basic_color_id("black"), Some(0));
        assert_eq!(basic_color_id("white"), Some(7));
        assert_eq!(basic_color_id("grey"), None);
    }

    #[test]
    fn test_entry() {
        let row = entry(49);
        assert_eq!(row.name, "mediumspringgreen");
        assert_eq!(row.hex, "#00ffaf");
        assert_eq!(row.rgb, (0, 255, 175));
    }
}
