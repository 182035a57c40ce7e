// crates/jumpman-core/src/level/decode.rs

use crate::level::command::{
    LevelCommand, PeanutGroup, PeanutPlacement, RunCmd, SpecialBlock, OP_END, OP_GIRDER,
    OP_LADDER_ROPE, OP_PEANUTS,
};

/// Decode a level-definition stream into commands.
///
/// Never fails: unknown opcodes become single-byte `Special` blocks and a
/// run header truncated by end of input becomes one `Special` holding the
/// remainder verbatim, so the byte-level editor can still locate and fix
/// bad bytes. Decoding stops at `0xff` in opcode position or when the
/// input is exhausted (an implicit end, not an error).
///
/// Commands come out in stream order, which is also draw order.
pub fn parse_level(bytes: &[u8]) -> Vec<LevelCommand> {
    let mut out = Vec::new();
    let mut i = 0usize;

    while i < bytes.len() {
        let op = bytes[i];
        match op {
            OP_END => {
                out.push(LevelCommand::End { source_index: i });
                log::trace!("level[{i}]: end");
                break;
            }
            OP_GIRDER | OP_LADDER_ROPE => {
                if bytes.len() - i < 4 {
                    log::debug!("level[{i}]: run header truncated, {} bytes left", bytes.len() - i);
                    out.push(LevelCommand::Special(SpecialBlock {
                        source_index: i,
                        raw: bytes[i..].to_vec(),
                    }));
                    break;
                }
                // Fixed payloads are consumed blindly; 0xff inside one is
                // payload, not a terminator.
                let (col, row, packed) = (bytes[i + 1], bytes[i + 2], bytes[i + 3]);
                let cmd = if op == OP_GIRDER {
                    LevelCommand::Girder(RunCmd::unpack_girder(i, col, row, packed))
                } else {
                    let (run, rope) = RunCmd::unpack_vertical(i, col, row, packed);
                    if rope {
                        LevelCommand::Rope(run)
                    } else {
                        LevelCommand::Ladder(run)
                    }
                };
                log::trace!("level[{i}]: {cmd}");
                out.push(cmd);
                i += 4;
            }
            OP_PEANUTS => {
                if bytes.len() - i < 3 {
                    log::debug!("level[{i}]: peanut header truncated, {} bytes left", bytes.len() - i);
                    out.push(LevelCommand::Special(SpecialBlock {
                        source_index: i,
                        raw: bytes[i..].to_vec(),
                    }));
                    break;
                }
                let pos = bytes[i + 1];
                let count = bytes[i + 2] as usize;
                let base_col = pos & 0x0f;
                let base_row = pos >> 4;

                // The placement list ends at its declared count, at end of
                // input, or at the next opcode-range byte (0xfc..=0xff is
                // reserved and never consumed as a placement).
                let mut placements = Vec::new();
                let mut j = i + 3;
                while placements.len() < count && j < bytes.len() && bytes[j] < OP_LADDER_ROPE {
                    placements.push(PeanutPlacement::unpack(j, base_col, base_row, bytes[j]));
                    j += 1;
                }
                if placements.len() < count {
                    log::debug!(
                        "level[{i}]: peanut group truncated, {} of {count} placements",
                        placements.len()
                    );
                }
                let cmd = LevelCommand::Peanuts(PeanutGroup {
                    source_index: i,
                    pos,
                    placements,
                });
                log::trace!("level[{i}]: {cmd}");
                out.push(cmd);
                i = j;
            }
            _ => {
                log::trace!("level[{i}]: special op=0x{op:02x}");
                out.push(LevelCommand::Special(SpecialBlock {
                    source_index: i,
                    raw: vec![op],
                }));
                i += 1;
            }
        }
    }

    out
}
