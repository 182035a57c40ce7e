// crates/jumpman-core/src/lib.rs
//
// Jumpman level-data interpreter and renderer: decodes the compact binary
// command stream describing a level (girders, ladders, ropes, peanuts) into
// typed commands, draws them into a caller-supplied indexed pixel buffer
// with a parallel pick buffer mapping pixels back to source bytes, and
// re-encodes edited commands byte-exactly.

pub mod builder;
pub mod error;
pub mod grid;
pub mod harvest;
pub mod level;
pub mod render;
pub mod segment;

pub use crate::builder::{HarvestScripts, LevelBuilder, LevelView};
pub use crate::error::{JmError, Result};
pub use crate::harvest::{encode_harvest, parse_harvest, HarvestCommand, HarvestRecord};
pub use crate::level::{encode_level, parse_level, Direction, LevelCommand};
pub use crate::segment::Segment;
