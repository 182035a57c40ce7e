// crates/jumpman-cli/src/io/mod.rs

pub mod ppm;
pub mod raw;
