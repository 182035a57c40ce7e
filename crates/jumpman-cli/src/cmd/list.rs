// crates/jumpman-cli/src/cmd/list.rs

use clap::Args;
use jumpman_core::LevelBuilder;

use crate::io::raw::SegmentArgs;

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub seg: SegmentArgs,
}

pub fn run(args: ListArgs) -> anyhow::Result<()> {
    let builder = LevelBuilder::new(vec![args.seg.load()?]);
    let view = args.seg.view(&builder)?;

    for cmd in &view.commands {
        let mut raw = Vec::with_capacity(cmd.encoded_len());
        cmd.encode_into(&mut raw)?;
        let hex: String = raw.iter().map(|b| format!("{b:02x} ")).collect();
        println!("{:04x}  {:<16} {}", view.origin + cmd.source_index(), hex.trim_end(), cmd);
    }

    eprintln!(
        "--- list ---\nfile     = {}\norigin   = 0x{:x} (segment {})\ncommands = {}",
        args.seg.r#in,
        view.origin,
        view.segment,
        view.commands.len()
    );
    Ok(())
}
