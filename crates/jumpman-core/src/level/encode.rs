// crates/jumpman-core/src/level/encode.rs

use crate::error::Result;
use crate::level::command::LevelCommand;

/// Re-encode a command list into level-stream bytes.
///
/// For any stream built from complete girder/ladder/rope/peanut units (with
/// accurate counts), unknown single-byte opcodes and a final 0xff, this is
/// the exact inverse of `parse_level`. Truncated peanut groups re-encode
/// with a normalized count byte; truncated run headers survive byte-exact
/// as `Special` blocks.
pub fn encode_level(commands: &[LevelCommand]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(commands.iter().map(|c| c.encoded_len()).sum());
    for cmd in commands {
        cmd.encode_into(&mut out)?;
    }
    Ok(out)
}
