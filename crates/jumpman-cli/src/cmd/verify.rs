// crates/jumpman-cli/src/cmd/verify.rs

use clap::Args;
use jumpman_core::LevelBuilder;

use crate::io::raw::SegmentArgs;

#[derive(Args, Debug)]
pub struct VerifyArgs {
    #[command(flatten)]
    pub seg: SegmentArgs,
}

/// Decode the stream, re-encode the command list and compare against the
/// consumed input prefix. Byte-exact for well-formed streams; a divergence
/// means either hand-edited bytes the decoder normalizes (a truncated
/// peanut count) or a decoder bug.
pub fn run(args: VerifyArgs) -> anyhow::Result<()> {
    let builder = LevelBuilder::new(vec![args.seg.load()?]);
    let view = args.seg.view(&builder)?;

    let reenc = builder.encode_commands(&view.commands)?;
    let stream = args.seg.stream_bytes(&builder, view.origin);
    let original = &stream[..reenc.len().min(stream.len())];

    if reenc == original {
        eprintln!(
            "verify ok: {} commands, {} bytes round-trip byte-exact",
            view.commands.len(),
            reenc.len()
        );
        return Ok(());
    }

    let at = reenc
        .iter()
        .zip(original.iter())
        .position(|(a, b)| a != b)
        .unwrap_or(original.len());
    anyhow::bail!(
        "verify failed at offset 0x{:x}: stream=0x{:02x} reencode=0x{:02x}",
        view.origin + at,
        original.get(at).copied().unwrap_or(0),
        reenc.get(at).copied().unwrap_or(0)
    );
}
