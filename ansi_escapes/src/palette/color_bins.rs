// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Snapping arbitrary RGB and HSL values onto keys that exist in the palette.
//!
//! More info: <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>

use super::{PALETTE, lookup_by_hsl_bin};

/// Channel intensities of the 6x6x6 color cube (ids 16-231).
pub const RGB_BINS: [u8; 6] = [0, 95, 135, 175, 215, 255];

/// Returns the bin in [`RGB_BINS`] closest to `value`. A value exactly half way between
/// two bins goes to the lower one, eg: 115 -> 95.
#[must_use]
pub fn clip_to_bin(value: u8) -> u8 {
    let mut left = RGB_BINS[0];
    for right in RGB_BINS {
        if value <= right {
            return if value - left <= right - value {
                left
            } else {
                right
            };
        }
        left = right;
    }
    // The last bin is 255, the loop always returns.
    left
}

/// Clips each channel independently, see [`clip_to_bin`].
#[must_use]
pub fn clip_rgb((red, green, blue): (u8, u8, u8)) -> (u8, u8, u8) {
    (clip_to_bin(red), clip_to_bin(green), clip_to_bin(blue))
}

/// Snaps an HSL triple onto the enumerated HSL keys of the palette.
///
/// HSL has no arithmetic bin grid, so an exact key is used as is and any other value
/// goes to the nearest enumerated key. Distance is Euclidean over (hue, saturation,
/// lightness) with hue measured around the circle. On a tie the key of the lower id
/// wins.
#[must_use]
pub fn nearest_hsl_bin(hue: u16, saturation: u8, lightness: u8) -> (u16, u8, u8) {
    let hue = hue % 360;
    if lookup_by_hsl_bin(hue, saturation, lightness).is_some() {
        return (hue, saturation, lightness);
    }

    let distance = |(other_hue, other_saturation, other_lightness): (u16, u8, u8)| {
        let raw_hue = (i32::from(hue) - i32::from(other_hue)).abs();
        let delta_hue = raw_hue.min(360 - raw_hue);
        let delta_saturation = i32::from(saturation) - i32::from(other_saturation);
        let delta_lightness = i32::from(lightness) - i32::from(other_lightness);
        delta_hue * delta_hue
            + delta_saturation * delta_saturation
            + delta_lightness * delta_lightness
    };

    // `min_by_key` keeps the first minimum, and rows are in id order.
    PALETTE
        .iter()
        .map(|row| row.hsl)
        .min_by_key(|hsl| distance(*hsl))
        .unwrap_or((hue, saturation, lightness))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(0, 0)]
    #[test_case(47, 0)]
    #[test_case(48, 95)]
    #[test_case(95, 95)]
    #[test_case(115, 95)]
    #[test_case(116, 135)]
    #[test_case(155, 135)]
    #[test_case(195, 175)]
    #[test_case(235, 215)]
    #[test_case(236, 255)]
    #[test_case(255, 255)]
    fn test_clip_to_bin(value: u8, expected: u8) {
        assert_eq!(clip_to_bin(value), expected);
    }

    #[test]
    fn test_clip_to_bin_is_idempotent_on_anchors() {
        for bin in RGB_BINS {
            assert_eq!(clip_to_bin(bin), bin);
        }
    }

    #[test]
    fn test_clip_rgb() {
        assert_eq!(clip_rgb((128, 0, 250)), (135, 0, 255));
    }

    #[test_case((120, 100, 42), (120, 100, 42))]
    #[test_case((360, 100, 50), (0, 100, 50))]
    #[test_case((121, 100, 42), (120, 100, 42))]
    #[test_case((0, 0, 1), (0, 0, 0))]
    fn test_nearest_hsl_bin(input: (u16, u8, u8), expected: (u16, u8, u8)) {
        assert_eq!(nearest_hsl_bin(input.0, input.1, input.2), expected);
    }

    #[test]
    fn test_nearest_hsl_bin_always_resolves() {
        for hue in (0..=360).step_by(7) {
            for saturation in (0..=100).step_by(9) {
                for lightness in (0..=100).step_by(11) {
                    let (h, s, l) = nearest_hsl_bin(hue, saturation, lightness);
                    assert!(lookup_by_hsl_bin(h, s, l).is_some());
                }
            }
        }
    }
}
