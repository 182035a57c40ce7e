// crates/jumpman-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;
mod io;

#[derive(Parser)]
#[command(name = "jumpman-cli")]
#[command(about = "Jumpman level-data workbench", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Disassemble a level command stream
    List(cmd::list::ListArgs),

    /// Disassemble a harvest table
    Harvest(cmd::harvest::HarvestArgs),

    /// Render a level to a P6 PPM image
    Render(cmd::render::RenderArgs),

    /// Check peanut positions against the harvest offset bands
    Check(cmd::check::CheckArgs),

    /// Decode + re-encode a stream and compare byte-for-byte
    Verify(cmd::verify::VerifyArgs),

    /// Segment summary (length, crc32, pointers, registers, counts)
    Info(cmd::info::InfoArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::List(args) => cmd::list::run(args),
        Commands::Harvest(args) => cmd::harvest::run(args),
        Commands::Render(args) => cmd::render::run(args),
        Commands::Check(args) => cmd::check::run(args),
        Commands::Verify(args) => cmd::verify::run(args),
        Commands::Info(args) => cmd::info::run(args),
    }
}
