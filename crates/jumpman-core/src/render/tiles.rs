// crates/jumpman-core/src/render/tiles.rs

/// One drawable cell's texture: a 4-bit mask (bit 3 = leftmost pixel) and
/// the color index written where a mask bit is set. Clear bits write color
/// 0, so stamping a tile fully overwrites whatever was under the cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub mask: u8,
    pub color: u8,
}

pub const GIRDER: Tile = Tile { mask: 0b1111, color: 1 };
pub const LADDER: Tile = Tile { mask: 0b1001, color: 2 };
pub const ROPE: Tile = Tile { mask: 0b0100, color: 3 };
pub const PEANUT: Tile = Tile { mask: 0b0110, color: 3 };

impl Tile {
    /// Pixel colors for this tile, left to right.
    #[inline]
    pub fn pixels(self) -> [u8; 4] {
        let mut px = [0u8; 4];
        for (i, p) in px.iter_mut().enumerate() {
            if self.mask & (1 << (3 - i)) != 0 {
                *p = self.color;
            }
        }
        px
    }
}
