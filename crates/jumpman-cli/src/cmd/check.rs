// crates/jumpman-cli/src/cmd/check.rs

use clap::Args;
use jumpman_core::grid::{wrap_col, CELL_PIXELS};
use jumpman_core::render::overlay::{in_col_band, in_row_band};
use jumpman_core::{LevelBuilder, LevelCommand};

use crate::io::raw::{parse_num, SegmentArgs};

#[derive(Args, Debug)]
pub struct CheckArgs {
    #[command(flatten)]
    pub seg: SegmentArgs,

    /// Override the harvest x offset (default: file byte 0x46)
    #[arg(long, value_parser = parse_num)]
    pub hx: Option<u32>,

    /// Override the harvest y offset (default: file byte 0x47)
    #[arg(long, value_parser = parse_num)]
    pub hy: Option<u32>,
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let builder = LevelBuilder::new(vec![args.seg.load()?]);
    let view = args.seg.view(&builder)?;

    let (fhx, fhy) = builder.harvest_offsets(0);
    let hx = args.hx.map(|v| v as u8).unwrap_or(fhx);
    let hy = args.hy.map(|v| v as u8).unwrap_or(fhy);

    let mut total = 0usize;
    let mut bad = 0usize;
    for cmd in &view.commands {
        let LevelCommand::Peanuts(group) = cmd else { continue };
        for p in &group.placements {
            total += 1;
            let col = wrap_col(p.col as i32);
            let px = col * CELL_PIXELS;
            let col_bad = (px..px + CELL_PIXELS).any(|x| in_col_band(x, hx));
            let row_bad = in_row_band(p.row as usize, hy);
            let ok = !(col_bad || row_bad);
            if !ok {
                bad += 1;
            }
            println!(
                "{:04x}  peanut ({:>2},{:>2}) {}",
                view.origin + p.source_index,
                p.col,
                p.row,
                if ok { "ok" } else { "BAD" }
            );
        }
    }

    eprintln!(
        "--- check ---\nharvest offset: x={hx} (0x{hx:x}) y={hy} (0x{hy:x})\npeanuts = {total}\nbad     = {bad}"
    );
    anyhow::ensure!(bad == 0, "{bad} peanut(s) in a bad harvest position");
    Ok(())
}
