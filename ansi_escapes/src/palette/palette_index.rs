// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use super::PALETTE;

/// Reverse indexes over [`PALETTE`]. Built on first access, read-only afterwards, so
/// concurrent readers need no synchronization beyond the [`LazyLock`].
#[derive(Debug)]
struct PaletteIndex {
    by_name: FxHashMap<&'static str, u8>,
    by_hex: FxHashMap<&'static str, u8>,
    by_rgb: FxHashMap<(u8, u8, u8), u8>,
    by_hsl: FxHashMap<(u16, u8, u8), u8>,
}

static PALETTE_INDEX: LazyLock<PaletteIndex> = LazyLock::new(PaletteIndex::build);

impl PaletteIndex {
    fn build() -> Self {
        let mut it = Self {
            by_name: FxHashMap::default(),
            by_hex: FxHashMap::default(),
            by_rgb: FxHashMap::default(),
            by_hsl: FxHashMap::default(),
        };

        // Rows are visited in id order, so `or_insert` leaves the lowest id in place.
        for row in &PALETTE {
            it.by_name.entry(row.name).or_insert(row.id);
            it.by_hex.entry(row.hex).or_insert(row.id);
            it.by_rgb.entry(row.rgb).or_insert(row.id);
            it.by_hsl.entry(row.hsl).or_insert(row.id);
        }

        tracing::trace!(
            message = "palette index built",
            names = it.by_name.len(),
            hex = it.by_hex.len(),
            rgb = it.by_rgb.len(),
            hsl = it.by_hsl.len()
        );

        it
    }
}

/// Case-insensitive lookup of a 256 palette name, eg: `"MediumSpringGreen"` -> 49.
#[must_use]
pub fn lookup_by_name(name: &str) -> Option<u8> {
    let name = name.to_ascii_lowercase();
    PALETTE_INDEX.by_name.get(name.as_str()).copied()
}

/// Lookup of a `#rrggbb` string (either case). Anything not matching that shape is
/// simply not found.
#[must_use]
pub fn lookup_by_hex(hex: &str) -> Option<u8> {
    if !is_valid_hex_string(hex) {
        return None;
    }
    let hex = hex.to_ascii_lowercase();
    PALETTE_INDEX.by_hex.get(hex.as_str()).copied()
}

/// Exact lookup of an RGB triple. Callers are expected to clip each channel to
/// [`RGB_BINS`] first, see [`clip_rgb`].
///
/// [`RGB_BINS`]: super::RGB_BINS
/// [`clip_rgb`]: super::clip_rgb
#[must_use]
pub fn lookup_by_rgb_bin(red: u8, green: u8, blue: u8) -> Option<u8> {
    PALETTE_INDEX.by_rgb.get(&(red, green, blue)).copied()
}

/// Exact lookup of an HSL triple from the enumerated table. See [`nearest_hsl_bin`] to
/// snap arbitrary values onto it.
///
/// [`nearest_hsl_bin`]: super::nearest_hsl_bin
#[must_use]
pub fn lookup_by_hsl_bin(hue: u16, saturation: u8, lightness: u8) -> Option<u8> {
    PALETTE_INDEX
        .by_hsl
        .get(&(hue, saturation, lightness))
        .copied()
}

/// Channels of a `#rrggbb` string (either case), or [`None`] when it is malformed. Unlike
/// [`lookup_by_hex`] this accepts any well formed string, not just palette keys.
#[must_use]
pub fn parse_hex_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    if !is_valid_hex_string(hex) {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range)
            .and_then(|digits| u8::from_str_radix(digits, 16).ok())
    };
    Some((channel(1..3)?, channel(3..5)?, channel(5..7)?))
}

/// `#` followed by exactly 6 hex digits.
#[must_use]
pub fn is_valid_hex_string(hex: &str) -> bool {
    match hex.strip_prefix('#') {
        Some(digits) => digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
