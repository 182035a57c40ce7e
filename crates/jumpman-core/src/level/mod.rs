// crates/jumpman-core/src/level/mod.rs

pub mod command;
pub mod decode;
pub mod encode;

pub use command::{Direction, LevelCommand, PeanutGroup, PeanutPlacement, RunCmd, SpecialBlock};
pub use decode::parse_level;
pub use encode::encode_level;
