// crates/jumpman-core/src/harvest.rs
//
// Harvest table: fixed 7-byte records terminated by 0xff in the trigger
// position. Each record names the peanut that fires it and two little-endian
// addresses of side-effect command streams:
//
//   byte 0    trigger   peanut id (0xff = end of table)
//   byte 1    dx        harvest offset delta, horizontal
//   byte 2    dy        harvest offset delta, vertical
//   bytes 3-4 script    address of the on-harvest command stream
//   bytes 5-6 paint     address of the repaint command stream

use std::fmt;

use crate::level::command::{SpecialBlock, OP_END};

pub const RECORD_LEN: usize = 7;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarvestRecord {
    /// Byte offset of the record within the harvest table.
    pub source_index: usize,
    pub trigger: u8,
    pub dx: u8,
    pub dy: u8,
    pub script_addr: u16,
    pub paint_addr: u16,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HarvestCommand {
    Record(HarvestRecord),
    /// A trailing record with fewer than 7 bytes, preserved verbatim.
    Partial(SpecialBlock),
    End { source_index: usize },
}

impl HarvestCommand {
    pub fn source_index(&self) -> usize {
        match self {
            HarvestCommand::Record(r) => r.source_index,
            HarvestCommand::Partial(s) => s.source_index,
            HarvestCommand::End { source_index } => *source_index,
        }
    }

    pub fn encoded_len(&self) -> usize {
        match self {
            HarvestCommand::Record(_) => RECORD_LEN,
            HarvestCommand::Partial(s) => s.raw.len(),
            HarvestCommand::End { .. } => 1,
        }
    }

    pub fn encode_into(&self, out: &mut Vec<u8>) {
        match self {
            HarvestCommand::Record(r) => {
                out.extend_from_slice(&[r.trigger, r.dx, r.dy]);
                out.extend_from_slice(&r.script_addr.to_le_bytes());
                out.extend_from_slice(&r.paint_addr.to_le_bytes());
            }
            HarvestCommand::Partial(s) => out.extend_from_slice(&s.raw),
            HarvestCommand::End { .. } => out.push(OP_END),
        }
    }
}

impl fmt::Display for HarvestCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HarvestCommand::Record(r) => write!(
                f,
                "harvest trigger=0x{:02x} dx={} dy={} script=0x{:04x} paint=0x{:04x}",
                r.trigger, r.dx, r.dy, r.script_addr, r.paint_addr
            ),
            HarvestCommand::Partial(s) => write!(f, "partial len={}", s.raw.len()),
            HarvestCommand::End { .. } => f.write_str("end"),
        }
    }
}

/// Decode a harvest table. Same contract as `parse_level`: never fails,
/// terminates on 0xff or exhausted input, preserves a truncated trailing
/// record verbatim as `Partial`.
pub fn parse_harvest(bytes: &[u8]) -> Vec<HarvestCommand> {
    let mut out = Vec::new();
    let mut i = 0usize;

    while i < bytes.len() {
        if bytes[i] == OP_END {
            out.push(HarvestCommand::End { source_index: i });
            log::trace!("harvest[{i}]: end");
            break;
        }
        if bytes.len() - i < RECORD_LEN {
            log::debug!("harvest[{i}]: record truncated, {} bytes left", bytes.len() - i);
            out.push(HarvestCommand::Partial(SpecialBlock {
                source_index: i,
                raw: bytes[i..].to_vec(),
            }));
            break;
        }
        let rec = HarvestRecord {
            source_index: i,
            trigger: bytes[i],
            dx: bytes[i + 1],
            dy: bytes[i + 2],
            script_addr: u16::from_le_bytes([bytes[i + 3], bytes[i + 4]]),
            paint_addr: u16::from_le_bytes([bytes[i + 5], bytes[i + 6]]),
        };
        log::trace!("harvest[{i}]: trigger=0x{:02x}", rec.trigger);
        out.push(HarvestCommand::Record(rec));
        i += RECORD_LEN;
    }

    out
}

/// Re-encode a harvest command list. Exact inverse of `parse_harvest`.
pub fn encode_harvest(commands: &[HarvestCommand]) -> Vec<u8> {
    let mut out = Vec::with_capacity(commands.iter().map(|c| c.encoded_len()).sum());
    for cmd in commands {
        cmd.encode_into(&mut out);
    }
    out
}
