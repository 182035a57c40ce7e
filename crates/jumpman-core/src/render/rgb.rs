// crates/jumpman-core/src/render/rgb.rs
//
// Color-index to RGB expansion for display output. Atari color bytes pack
// hue in the high nibble and luminance in the low nibble; `atari_rgb` is a
// compact approximation, not a calibrated NTSC model.

use crate::grid::screen_len;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Display colors for the four screen color indices.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Palette(pub [Rgb; 4]);

impl Default for Palette {
    /// Fallback when a segment carries no color registers: black
    /// background, white girders, green ladders, yellow ropes/peanuts.
    fn default() -> Self {
        Palette([
            Rgb::new(0, 0, 0),
            Rgb::new(240, 240, 240),
            Rgb::new(60, 200, 60),
            Rgb::new(230, 200, 60),
        ])
    }
}

/// Full-luminance base color per Atari hue nibble.
const HUES: [Rgb; 16] = [
    Rgb::new(240, 240, 240), // 0 gray
    Rgb::new(240, 220, 100), // 1 gold
    Rgb::new(240, 180, 100), // 2 orange
    Rgb::new(240, 130, 120), // 3 red-orange
    Rgb::new(240, 110, 180), // 4 pink
    Rgb::new(200, 110, 240), // 5 purple
    Rgb::new(140, 120, 240), // 6 purple-blue
    Rgb::new(100, 140, 240), // 7 blue
    Rgb::new(100, 170, 240), // 8 blue
    Rgb::new(100, 200, 230), // 9 light blue
    Rgb::new(100, 230, 200), // a turquoise
    Rgb::new(100, 240, 140), // b green-blue
    Rgb::new(120, 240, 100), // c green
    Rgb::new(170, 240, 100), // d yellow-green
    Rgb::new(220, 240, 100), // e orange-green
    Rgb::new(240, 220, 100), // f light orange
];

/// Approximate an Atari color byte (hue<<4 | luminance) as RGB.
pub fn atari_rgb(byte: u8) -> Rgb {
    let base = HUES[(byte >> 4) as usize];
    let lum = (byte & 0x0f) as u16 + 1;
    let scale = |c: u8| ((c as u16 * lum) / 16) as u8;
    Rgb::new(scale(base.r), scale(base.g), scale(base.b))
}

/// Build a display palette from a segment's five color registers (four
/// playfield colors then background). Playfield bytes equal to 0 are forced
/// to luminance 15: some levels cycle those colors for a glow effect that a
/// static view cannot show, so they get bright white instead of black.
pub fn level_palette(regs: &[u8; 5]) -> Palette {
    let fg = |b: u8| atari_rgb(if b == 0 { 0x0f } else { b });
    Palette([
        atari_rgb(regs[4]),
        fg(regs[0]),
        fg(regs[1]),
        fg(regs[2]),
    ])
}

/// Expand a color-index screen to 3 bytes per pixel.
pub fn expand_rgb(screen: &[u8], palette: &Palette) -> Vec<u8> {
    assert_eq!(screen.len(), screen_len(), "pixel buffer must be 160x88");
    let mut out = Vec::with_capacity(screen.len() * 3);
    for &px in screen {
        let c = palette.0[(px & 0x03) as usize];
        out.extend_from_slice(&[c.r, c.g, c.b]);
    }
    out
}
