// crates/jumpman-core/src/render/overlay.rs
//
// "Allergic zone" overlay: the game's harvest routine misbehaves for
// peanuts whose screen position collides with the harvest offset registers.
// A position is bad when
//
//   (x + 0x30 + hx) & 0x1f < 7        x in pixels, two 7-wide bands mod 32
//   (2*y + 0x20 + hy) & 0x1f < 5      y in screen lines; the factor of two
//                                     is the player-coordinate resolution
//
// The overlay darkens and tints every bad pixel of an expanded RGB image.
// It is derived arithmetic over the two offset bytes, independent of the
// decoded commands.

use crate::grid::{screen_len, SCREEN_LINES, SCREEN_WIDTH};
use crate::render::rgb::Rgb;

/// Tint added to a darkened pixel inside a band.
pub const BAD_TINT: Rgb = Rgb::new(203, 144, 161);

/// True when pixel column `x` falls in a bad harvest band for offset `hx`.
#[inline]
pub fn in_col_band(x: usize, hx: u8) -> bool {
    (x + 0x30 + hx as usize) & 0x1f < 7
}

/// True when screen line `y` falls in a bad harvest band for offset `hy`.
#[inline]
pub fn in_row_band(y: usize, hy: u8) -> bool {
    (2 * y + 0x20 + hy as usize) & 0x1f < 5
}

/// Darken and tint every pixel in a bad band: `original/8 + tint` per
/// channel, a blend over the drawn image rather than an overwrite. `rgb`
/// must be a full 160x88 image, 3 bytes per pixel.
pub fn harvest_overlay(rgb: &mut [u8], hx: u8, hy: u8) {
    assert_eq!(rgb.len(), screen_len() * 3, "rgb buffer must be 160x88x3");

    for y in 0..SCREEN_LINES {
        let row_bad = in_row_band(y, hy);
        for x in 0..SCREEN_WIDTH {
            if row_bad || in_col_band(x, hx) {
                let base = (y * SCREEN_WIDTH + x) * 3;
                rgb[base] = rgb[base] / 8 + BAD_TINT.r;
                rgb[base + 1] = rgb[base + 1] / 8 + BAD_TINT.g;
                rgb[base + 2] = rgb[base + 2] / 8 + BAD_TINT.b;
            }
        }
    }
}
