// crates/jumpman-cli/src/cmd/render.rs

use clap::Args;
use jumpman_core::grid::{pick_len, screen_len, SCREEN_LINES, SCREEN_WIDTH};
use jumpman_core::render::{self, overlay, Palette};
use jumpman_core::LevelBuilder;

use crate::io::ppm;
use crate::io::raw::{parse_num, SegmentArgs};

#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub seg: SegmentArgs,

    /// Output P6 PPM path
    #[arg(long)]
    pub out: String,

    /// Ignore the file's color registers and use the default palette
    #[arg(long, default_value_t = false)]
    pub plain: bool,

    /// Overlay the bad harvest-position bands
    #[arg(long, default_value_t = false)]
    pub check: bool,

    /// Override the harvest x offset (default: file byte 0x46)
    #[arg(long, value_parser = parse_num)]
    pub hx: Option<u32>,

    /// Override the harvest y offset (default: file byte 0x47)
    #[arg(long, value_parser = parse_num)]
    pub hy: Option<u32>,
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let builder = LevelBuilder::new(vec![args.seg.load()?]);
    let view = args.seg.view(&builder)?;

    let mut screen = vec![0u8; screen_len()];
    let mut pick = vec![0i32; pick_len()];
    let stats = render::draw_commands(&mut screen, &mut pick, &view.commands, view.origin);

    let palette = if args.plain {
        Palette::default()
    } else {
        builder
            .color_registers(0)
            .map(|regs| render::level_palette(&regs))
            .unwrap_or_default()
    };
    let mut rgb = render::expand_rgb(&screen, &palette);

    if args.check {
        let (fhx, fhy) = builder.harvest_offsets(0);
        let hx = args.hx.map(|v| v as u8).unwrap_or(fhx);
        let hy = args.hy.map(|v| v as u8).unwrap_or(fhy);
        overlay::harvest_overlay(&mut rgb, hx, hy);
        eprintln!("harvest overlay: hx={hx} (0x{hx:x}) hy={hy} (0x{hy:x})");
    }

    ppm::write_ppm(&args.out, SCREEN_WIDTH, SCREEN_LINES, &rgb)?;
    eprintln!(
        "render ok: out={} commands={} cells={} clipped={}",
        args.out,
        view.commands.len(),
        stats.cells,
        stats.clipped
    );
    Ok(())
}
