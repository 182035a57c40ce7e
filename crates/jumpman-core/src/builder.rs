// crates/jumpman-core/src/builder.rs
//
// Facade over decoder + renderer, constructed once per editing session
// against a document's segment list. Every draw re-parses from the bytes
// the caller supplies, so an in-progress edit is always rendered from
// current data; the returned command list is the caller's to keep for
// hit-testing until the next draw.
//
// In-segment conventions of the level format (fixed document offsets):
//   0x37/0x38   little-endian address of the level-definition stream
//   0x46/0x47   harvest offset bytes hx, hy
//   0x2e..0x33  color registers (four playfield colors then background)

use crate::error::{JmError, Result};
use crate::grid::{CELL_PIXELS, LEVEL_WIDTH};
use crate::harvest::{HarvestCommand, HarvestRecord};
use crate::level::command::LevelCommand;
use crate::level::{decode, encode};
use crate::render::screen;
use crate::segment::{resolve_addr, Segment};

pub const LEVEL_TABLE_OFFSET: usize = 0x37;
pub const HARVEST_OFFSET_X: usize = 0x46;
pub const HARVEST_OFFSET_Y: usize = 0x47;
pub const COLOR_REGS_OFFSET: usize = 0x2e;

/// Arbitrary cap on level stream length; real streams are a few hundred
/// bytes and an uncapped bad pointer would decode garbage to the segment end.
pub const MAX_STREAM_LEN: usize = 500;

/// One located and decoded level stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelView {
    /// Index of the segment holding the stream.
    pub segment: usize,
    /// Byte offset of the stream within that segment. Pick indices come
    /// back with this origin added, so they address the holding segment.
    pub origin: usize,
    pub commands: Vec<LevelCommand>,
}

/// The two side-effect streams referenced by a harvest record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarvestScripts {
    pub trigger: Vec<LevelCommand>,
    pub paint: Vec<LevelCommand>,
}

pub struct LevelBuilder {
    segments: Vec<Segment>,
}

impl LevelBuilder {
    pub fn new(segments: Vec<Segment>) -> Self {
        LevelBuilder { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn segments_mut(&mut self) -> &mut Vec<Segment> {
        &mut self.segments
    }

    /// Decode a level stream without drawing, for listing features.
    pub fn parse_commands(&self, bytes: &[u8]) -> Vec<LevelCommand> {
        decode::parse_level(bytes)
    }

    /// Re-encode a command list back into stream bytes.
    pub fn encode_commands(&self, commands: &[LevelCommand]) -> Result<Vec<u8>> {
        encode::encode_level(commands)
    }

    /// Decode and draw a level stream whose location is already known.
    /// `origin` is the stream's byte offset within its segment and is added
    /// to every pick index stamped.
    pub fn draw_commands(
        &self,
        screen_buf: &mut [u8],
        pick: &mut [i32],
        bytes: &[u8],
        origin: usize,
    ) -> Vec<LevelCommand> {
        let commands = decode::parse_level(bytes);
        screen::draw_commands(screen_buf, pick, &commands, origin);
        commands
    }

    /// Locate a segment's level stream via the 0x37/0x38 table pointer and
    /// decode it. Pointer values at or above the segment's own start
    /// address are absolute and resolved across the whole segment list
    /// (level data may live in a different segment than the one displayed);
    /// smaller values are taken as offsets into the segment directly.
    pub fn parse_level_table(&self, seg_index: usize) -> Result<LevelView> {
        let seg = self.segments.get(seg_index).ok_or_else(|| {
            JmError::Validation(format!("no segment at index {seg_index}"))
        })?;
        if seg.len() <= LEVEL_TABLE_OFFSET + 1 {
            return Err(JmError::MissingLevelTable { len: seg.len() });
        }
        let addr = u16::from_le_bytes([
            seg.data[LEVEL_TABLE_OFFSET],
            seg.data[LEVEL_TABLE_OFFSET + 1],
        ]);

        let (target, origin) = if addr >= seg.start_addr {
            resolve_addr(&self.segments, addr).ok_or(JmError::UnmappedAddress(addr))?
        } else {
            (seg_index, addr as usize)
        };
        log::debug!(
            "level table 0x{addr:04x} -> segment {target} offset 0x{origin:x}"
        );

        let data = &self.segments[target].data;
        let end = data.len().min(origin.saturating_add(MAX_STREAM_LEN));
        let bytes = if origin < data.len() { &data[origin..end] } else { &[][..] };
        Ok(LevelView {
            segment: target,
            origin,
            commands: decode::parse_level(bytes),
        })
    }

    /// Locate, decode and draw a segment's level via its table pointer.
    /// On an unresolvable pointer the buffers are cleared (nothing stale to
    /// display) and the error is informational, not a panic.
    pub fn draw_level(
        &self,
        screen_buf: &mut [u8],
        pick: &mut [i32],
        seg_index: usize,
    ) -> Result<LevelView> {
        match self.parse_level_table(seg_index) {
            Ok(view) => {
                screen::draw_commands(screen_buf, pick, &view.commands, view.origin);
                Ok(view)
            }
            Err(e) => {
                screen::clear_buffers(screen_buf, pick);
                Err(e)
            }
        }
    }

    /// Hit test at pixel coordinates. Returns the byte index, within the
    /// stream's segment, that owns the cell under the pixel.
    pub fn pick(&self, pick: &[i32], x_px: usize, y: usize) -> Option<usize> {
        assert_eq!(pick.len(), crate::grid::pick_len(), "pick buffer must be 40x88");
        let col = x_px / CELL_PIXELS;
        if col >= LEVEL_WIDTH || y >= crate::grid::SCREEN_LINES {
            return None;
        }
        let v = pick[y * LEVEL_WIDTH + col];
        (v >= 0).then_some(v as usize)
    }

    /// Decode a harvest table, for listing features.
    pub fn harvest_commands(&self, bytes: &[u8]) -> Vec<HarvestCommand> {
        crate::harvest::parse_harvest(bytes)
    }

    /// Resolve and decode the two command streams a harvest record points
    /// at. Both addresses are absolute and may land in any segment.
    pub fn harvest_scripts(&self, record: &HarvestRecord) -> Result<HarvestScripts> {
        Ok(HarvestScripts {
            trigger: self.stream_at(record.script_addr)?,
            paint: self.stream_at(record.paint_addr)?,
        })
    }

    /// The harvest offset bytes hx, hy; zero when the segment is too short
    /// to contain them.
    pub fn harvest_offsets(&self, seg_index: usize) -> (u8, u8) {
        match self.segments.get(seg_index) {
            Some(seg) if seg.len() > HARVEST_OFFSET_Y => {
                (seg.data[HARVEST_OFFSET_X], seg.data[HARVEST_OFFSET_Y])
            }
            _ => (0, 0),
        }
    }

    /// The five color registers, or None when the segment is too short.
    pub fn color_registers(&self, seg_index: usize) -> Option<[u8; 5]> {
        let seg = self.segments.get(seg_index)?;
        let end = COLOR_REGS_OFFSET + 5;
        if seg.len() < end {
            return None;
        }
        let mut regs = [0u8; 5];
        regs.copy_from_slice(&seg.data[COLOR_REGS_OFFSET..end]);
        Some(regs)
    }

    fn stream_at(&self, addr: u16) -> Result<Vec<LevelCommand>> {
        let (seg, off) = resolve_addr(&self.segments, addr).ok_or_else(|| {
            log::debug!("script address 0x{addr:04x} unmapped");
            JmError::UnmappedAddress(addr)
        })?;
        let data = &self.segments[seg].data;
        let end = data.len().min(off.saturating_add(MAX_STREAM_LEN));
        Ok(decode::parse_level(&data[off..end]))
    }
}
