// crates/jumpman-cli/src/cmd/info.rs

use anyhow::Context;
use clap::Args;
use crc32fast::Hasher;
use jumpman_core::builder::LEVEL_TABLE_OFFSET;
use jumpman_core::{LevelBuilder, LevelCommand, Segment};

use crate::io::raw::parse_num;

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Input file holding an extracted segment
    #[arg(long)]
    pub r#in: String,

    /// Load address of the file's first byte
    #[arg(long, default_value = "0x2800", value_parser = parse_num)]
    pub start_addr: u32,
}

pub fn run(args: InfoArgs) -> anyhow::Result<()> {
    let bytes =
        std::fs::read(&args.r#in).with_context(|| format!("read segment: {}", args.r#in))?;
    anyhow::ensure!(args.start_addr <= u16::MAX as u32, "start address out of range");

    let mut hasher = Hasher::new();
    hasher.update(&bytes);
    let crc = hasher.finalize();

    eprintln!("--- info ---");
    eprintln!("file        = {}", args.r#in);
    eprintln!("start_addr  = 0x{:04x}", args.start_addr);
    eprintln!("bytes       = {}", bytes.len());
    eprintln!("crc32       = 0x{crc:08x}");

    let builder = LevelBuilder::new(vec![Segment::new(
        args.r#in.clone(),
        args.start_addr as u16,
        bytes,
    )]);
    let seg = &builder.segments()[0];

    if seg.len() > LEVEL_TABLE_OFFSET + 1 {
        let addr = u16::from_le_bytes([
            seg.data[LEVEL_TABLE_OFFSET],
            seg.data[LEVEL_TABLE_OFFSET + 1],
        ]);
        eprintln!("level_table = 0x{addr:04x}");
    } else {
        eprintln!("level_table = (segment too short)");
    }

    let (hx, hy) = builder.harvest_offsets(0);
    eprintln!("harvest     = x={hx} (0x{hx:x}) y={hy} (0x{hy:x})");

    match builder.color_registers(0) {
        Some(regs) => eprintln!(
            "colors      = {:02x} {:02x} {:02x} {:02x} bg={:02x}",
            regs[0], regs[1], regs[2], regs[3], regs[4]
        ),
        None => eprintln!("colors      = (segment too short)"),
    }

    match builder.parse_level_table(0) {
        Ok(view) => {
            let peanuts: usize = view
                .commands
                .iter()
                .map(|c| match c {
                    LevelCommand::Peanuts(g) => g.placements.len(),
                    _ => 0,
                })
                .sum();
            let specials = view
                .commands
                .iter()
                .filter(|c| matches!(c, LevelCommand::Special(_)))
                .count();
            eprintln!(
                "stream      = segment {} offset 0x{:x}",
                view.segment, view.origin
            );
            eprintln!("commands    = {}", view.commands.len());
            eprintln!("peanuts     = {peanuts}");
            eprintln!("specials    = {specials}");
        }
        Err(e) => eprintln!("stream      = ({e})"),
    }

    Ok(())
}
