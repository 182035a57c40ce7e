// crates/jumpman-core/src/render/mod.rs

pub mod overlay;
pub mod rgb;
pub mod screen;
pub mod tiles;

pub use rgb::{atari_rgb, expand_rgb, level_palette, Palette, Rgb};
pub use screen::{clear_buffers, draw_commands, DrawStats};
