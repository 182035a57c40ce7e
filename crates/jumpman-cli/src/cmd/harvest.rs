// crates/jumpman-cli/src/cmd/harvest.rs

use anyhow::Context;
use clap::Args;
use jumpman_core::{HarvestCommand, LevelBuilder, Segment};

use crate::io::raw::parse_num;

#[derive(Args, Debug)]
pub struct HarvestArgs {
    /// Input file holding an extracted segment
    #[arg(long)]
    pub r#in: String,

    /// Load address of the file's first byte
    #[arg(long, default_value = "0x2800", value_parser = parse_num)]
    pub start_addr: u32,

    /// Byte offset of the harvest table within the file
    #[arg(long, default_value = "0", value_parser = parse_num)]
    pub offset: u32,

    /// Also resolve and summarize each record's script streams
    #[arg(long, default_value_t = false)]
    pub scripts: bool,
}

pub fn run(args: HarvestArgs) -> anyhow::Result<()> {
    let bytes =
        std::fs::read(&args.r#in).with_context(|| format!("read segment: {}", args.r#in))?;
    anyhow::ensure!(args.start_addr <= u16::MAX as u32, "start address out of range");
    let offset = (args.offset as usize).min(bytes.len());
    let builder = LevelBuilder::new(vec![Segment::new(
        args.r#in.clone(),
        args.start_addr as u16,
        bytes,
    )]);

    let table = &builder.segments()[0].data[offset..];
    let cmds = builder.harvest_commands(table);

    let mut records = 0usize;
    for cmd in &cmds {
        println!("{:04x}  {}", offset + cmd.source_index(), cmd);
        if let HarvestCommand::Record(rec) = cmd {
            records += 1;
            if args.scripts {
                match builder.harvest_scripts(rec) {
                    Ok(s) => println!(
                        "      script: {} commands, paint: {} commands",
                        s.trigger.len(),
                        s.paint.len()
                    ),
                    Err(e) => println!("      {e}"),
                }
            }
        }
    }

    eprintln!(
        "--- harvest ---\nfile    = {}\noffset  = 0x{:x}\nrecords = {}",
        args.r#in, offset, records
    );
    Ok(())
}
