// crates/jumpman-cli/src/cmd/mod.rs

pub mod check;
pub mod harvest;
pub mod info;
pub mod list;
pub mod render;
pub mod verify;
