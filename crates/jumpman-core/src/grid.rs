// crates/jumpman-core/src/grid.rs
//
// Screen geometry for the Jumpman playfield (ANTIC mode D / graphics 7):
// - 40 drawable cells per line, each cell 4 pixels wide and 1 pixel tall
// - 88 drawable lines
//
// Pixel buffer: one color index (0..=3) per pixel, row major, 160x88.
// Pick buffer: one i32 per cell, row major, 40x88. -1 = background,
// otherwise a byte index into the level stream's segment.

/// Level width in cells. Horizontal runs wrap modulo this.
pub const LEVEL_WIDTH: usize = 40;

/// Pixels per cell, horizontally.
pub const CELL_PIXELS: usize = 4;

/// Screen width in pixels.
pub const SCREEN_WIDTH: usize = LEVEL_WIDTH * CELL_PIXELS;

/// Drawable lines. Vertical runs clip against this (no vertical wrap).
pub const SCREEN_LINES: usize = 88;

/// Background pick value: cell owned by no source byte.
pub const PICK_EMPTY: i32 = -1;

/// Required pixel buffer length.
pub const fn screen_len() -> usize {
    SCREEN_WIDTH * SCREEN_LINES
}

/// Required pick buffer length.
pub const fn pick_len() -> usize {
    LEVEL_WIDTH * SCREEN_LINES
}

/// Wrap a signed cell column onto the playfield (arcade wraparound).
#[inline]
pub fn wrap_col(col: i32) -> usize {
    col.rem_euclid(LEVEL_WIDTH as i32) as usize
}

/// True when a signed row lands on a drawable line.
#[inline]
pub fn row_visible(row: i32) -> bool {
    row >= 0 && (row as usize) < SCREEN_LINES
}
