// crates/jumpman-core/src/level/command.rs
//
// Decoded level-definition commands and their byte-exact packings.
//
// Stream layout (opcode then payload):
//   0xfe  girder run    col, row, packed: dir<<7 | len (len 0..=127)
//   0xfc  ladder/rope   col, row, packed: kind<<7 | dir<<6 | len (len 0..=63)
//   0xfd  peanut group  pos (row<<4 | col), count, count placement bytes
//   0xff  end of stream
//   other unrecognized, preserved verbatim
//
// A peanut placement byte packs, relative to the group's base cell:
//   bits 0-2 column offset, bits 3-5 row offset, bits 6-7 variant.
//
// All packings are bijective, so decode -> encode is byte exact for
// well-formed streams.

use std::fmt;

use crate::error::{JmError, Result};

pub const OP_LADDER_ROPE: u8 = 0xfc;
pub const OP_PEANUTS: u8 = 0xfd;
pub const OP_GIRDER: u8 = 0xfe;
pub const OP_END: u8 = 0xff;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Per-step cell delta (dcol, drow).
    #[inline]
    pub fn step(self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        };
        f.write_str(s)
    }
}

/// A repeated-pattern drawing command: girder, ladder or rope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunCmd {
    /// Byte offset of the opcode within the level stream.
    pub source_index: usize,
    pub col: u8,
    pub row: u8,
    pub length: u8,
    pub direction: Direction,
}

impl RunCmd {
    /// Girder packed byte: bit 7 = Left, bits 0-6 = length.
    pub fn pack_girder(&self) -> u8 {
        let dir = match self.direction {
            Direction::Left => 0x80,
            _ => 0,
        };
        dir | (self.length & 0x7f)
    }

    pub fn unpack_girder(source_index: usize, col: u8, row: u8, packed: u8) -> Self {
        let direction = if packed & 0x80 != 0 {
            Direction::Left
        } else {
            Direction::Right
        };
        RunCmd {
            source_index,
            col,
            row,
            length: packed & 0x7f,
            direction,
        }
    }

    /// Ladder/rope packed byte: bit 7 = kind (rope), bit 6 = Up,
    /// bits 0-5 = length.
    pub fn pack_vertical(&self, rope: bool) -> u8 {
        let kind = if rope { 0x80 } else { 0 };
        let dir = match self.direction {
            Direction::Up => 0x40,
            _ => 0,
        };
        kind | dir | (self.length & 0x3f)
    }

    /// Returns (run, is_rope).
    pub fn unpack_vertical(source_index: usize, col: u8, row: u8, packed: u8) -> (Self, bool) {
        let rope = packed & 0x80 != 0;
        let direction = if packed & 0x40 != 0 {
            Direction::Up
        } else {
            Direction::Down
        };
        (
            RunCmd {
                source_index,
                col,
                row,
                length: packed & 0x3f,
                direction,
            },
            rope,
        )
    }
}

/// One peanut within a group. Carries its own byte offset so hit-testing
/// can resolve a click on a single peanut to that exact byte.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeanutPlacement {
    pub source_index: usize,
    /// Absolute cell, already resolved against the group base.
    pub col: u8,
    pub row: u8,
    /// Bits 6-7 of the placement byte, carried but not interpreted here.
    pub variant: u8,
}

impl PeanutPlacement {
    pub fn unpack(source_index: usize, base_col: u8, base_row: u8, byte: u8) -> Self {
        PeanutPlacement {
            source_index,
            col: base_col + (byte & 0x07),
            row: base_row + ((byte >> 3) & 0x07),
            variant: (byte >> 6) & 0x03,
        }
    }

    pub fn pack(&self, base_col: u8, base_row: u8) -> Result<u8> {
        let dc = self.col.checked_sub(base_col);
        let dr = self.row.checked_sub(base_row);
        match (dc, dr) {
            (Some(dc), Some(dr)) if dc <= 7 && dr <= 7 => {
                Ok(((self.variant & 0x03) << 6) | (dr << 3) | dc)
            }
            _ => Err(JmError::Validation(format!(
                "peanut at ({},{}) out of range of group base ({},{})",
                self.col, self.row, base_col, base_row
            ))),
        }
    }
}

/// A peanut group: base cell from the nibble-packed pos byte, then one
/// placement per payload byte. The group keeps the opcode's byte offset;
/// each placement keeps its own.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PeanutGroup {
    pub source_index: usize,
    /// Raw pos byte: low nibble base column, high nibble base row.
    pub pos: u8,
    pub placements: Vec<PeanutPlacement>,
}

impl PeanutGroup {
    #[inline]
    pub fn base_col(&self) -> u8 {
        self.pos & 0x0f
    }

    #[inline]
    pub fn base_row(&self) -> u8 {
        self.pos >> 4
    }
}

/// Catch-all for unrecognized opcodes and command headers truncated by end
/// of input. `raw` is preserved verbatim so re-encoding never corrupts
/// bytes it did not understand.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpecialBlock {
    pub source_index: usize,
    pub raw: Vec<u8>,
}

impl SpecialBlock {
    pub fn opcode(&self) -> u8 {
        self.raw.first().copied().unwrap_or(0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LevelCommand {
    Girder(RunCmd),
    Ladder(RunCmd),
    Rope(RunCmd),
    Peanuts(PeanutGroup),
    Special(SpecialBlock),
    End { source_index: usize },
}

impl LevelCommand {
    /// Byte offset of the command's first byte within the level stream.
    pub fn source_index(&self) -> usize {
        match self {
            LevelCommand::Girder(r) | LevelCommand::Ladder(r) | LevelCommand::Rope(r) => {
                r.source_index
            }
            LevelCommand::Peanuts(g) => g.source_index,
            LevelCommand::Special(s) => s.source_index,
            LevelCommand::End { source_index } => *source_index,
        }
    }

    /// Encoded byte length; `source_index .. source_index + encoded_len()`
    /// is the command's backing span in the stream.
    pub fn encoded_len(&self) -> usize {
        match self {
            LevelCommand::Girder(_) | LevelCommand::Ladder(_) | LevelCommand::Rope(_) => 4,
            LevelCommand::Peanuts(g) => 3 + g.placements.len(),
            LevelCommand::Special(s) => s.raw.len(),
            LevelCommand::End { .. } => 1,
        }
    }

    /// Append this command's encoding to `out`.
    ///
    /// A peanut group writes `count = placements.len()`, so a group whose
    /// declared count was truncated during decode re-encodes with a
    /// normalized count byte.
    pub fn encode_into(&self, out: &mut Vec<u8>) -> Result<()> {
        match self {
            LevelCommand::Girder(r) => {
                out.extend_from_slice(&[OP_GIRDER, r.col, r.row, r.pack_girder()]);
            }
            LevelCommand::Ladder(r) => {
                out.extend_from_slice(&[OP_LADDER_ROPE, r.col, r.row, r.pack_vertical(false)]);
            }
            LevelCommand::Rope(r) => {
                out.extend_from_slice(&[OP_LADDER_ROPE, r.col, r.row, r.pack_vertical(true)]);
            }
            LevelCommand::Peanuts(g) => {
                if g.placements.len() > 255 {
                    return Err(JmError::Validation(format!(
                        "peanut group has {} placements, max 255",
                        g.placements.len()
                    )));
                }
                out.extend_from_slice(&[OP_PEANUTS, g.pos, g.placements.len() as u8]);
                for p in &g.placements {
                    out.push(p.pack(g.base_col(), g.base_row())?);
                }
            }
            LevelCommand::Special(s) => {
                out.extend_from_slice(&s.raw);
            }
            LevelCommand::End { .. } => {
                out.push(OP_END);
            }
        }
        Ok(())
    }
}

impl fmt::Display for LevelCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelCommand::Girder(r) => write!(
                f,
                "girder  x={} y={} len={} {}",
                r.col, r.row, r.length, r.direction
            ),
            LevelCommand::Ladder(r) => write!(
                f,
                "ladder  x={} y={} len={} {}",
                r.col, r.row, r.length, r.direction
            ),
            LevelCommand::Rope(r) => write!(
                f,
                "rope    x={} y={} len={} {}",
                r.col, r.row, r.length, r.direction
            ),
            LevelCommand::Peanuts(g) => {
                write!(
                    f,
                    "peanuts base=({},{}) count={}",
                    g.base_col(),
                    g.base_row(),
                    g.placements.len()
                )?;
                for p in &g.placements {
                    write!(f, " ({},{})v{}", p.col, p.row, p.variant)?;
                }
                Ok(())
            }
            LevelCommand::Special(s) => {
                write!(f, "special op=0x{:02x} len={}", s.opcode(), s.raw.len())
            }
            LevelCommand::End { .. } => f.write_str("end"),
        }
    }
}
