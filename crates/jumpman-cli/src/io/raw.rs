// crates/jumpman-cli/src/io/raw.rs

use anyhow::Context;
use clap::Args;
use jumpman_core::builder::{LevelBuilder, LevelView, MAX_STREAM_LEN};
use jumpman_core::Segment;

/// Numeric CLI argument, decimal or 0x-prefixed hex.
pub fn parse_num(s: &str) -> Result<u32, String> {
    let r = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex, 16)
    } else {
        s.parse()
    };
    r.map_err(|e| format!("bad number {s:?}: {e}"))
}

/// Shared arguments for locating a level stream inside an extracted
/// segment file.
#[derive(Args, Debug)]
pub struct SegmentArgs {
    /// Input file holding an extracted segment
    #[arg(long)]
    pub r#in: String,

    /// Load address of the file's first byte
    #[arg(long, default_value = "0x2800", value_parser = parse_num)]
    pub start_addr: u32,

    /// Byte offset of the command stream within the file (default 0)
    #[arg(long, value_parser = parse_num)]
    pub offset: Option<u32>,

    /// Locate the stream via the segment's 0x37/0x38 table pointer instead
    #[arg(long, default_value_t = false)]
    pub table: bool,
}

impl SegmentArgs {
    pub fn load(&self) -> anyhow::Result<Segment> {
        let bytes =
            std::fs::read(&self.r#in).with_context(|| format!("read segment: {}", self.r#in))?;
        anyhow::ensure!(
            self.start_addr <= u16::MAX as u32,
            "start address 0x{:x} out of range",
            self.start_addr
        );
        Ok(Segment::new(self.r#in.clone(), self.start_addr as u16, bytes))
    }

    /// Decode the stream this invocation names, via pointer or offset.
    pub fn view(&self, builder: &LevelBuilder) -> anyhow::Result<LevelView> {
        if self.table {
            anyhow::ensure!(self.offset.is_none(), "--table and --offset are exclusive");
            return Ok(builder.parse_level_table(0)?);
        }
        let origin = self.offset.unwrap_or(0) as usize;
        let commands = builder.parse_commands(self.stream_bytes(builder, origin));
        Ok(LevelView {
            segment: 0,
            origin,
            commands,
        })
    }

    /// The raw stream bytes starting at `origin` in the first segment,
    /// capped like the renderer caps pointer-located streams.
    pub fn stream_bytes<'a>(&self, builder: &'a LevelBuilder, origin: usize) -> &'a [u8] {
        let data = &builder.segments()[0].data;
        let end = data.len().min(origin.saturating_add(MAX_STREAM_LEN));
        if origin < data.len() {
            &data[origin..end]
        } else {
            &[]
        }
    }
}
