// crates/jumpman-cli/src/io/ppm.rs

use anyhow::Context;

/// Write a binary P6 PPM image.
pub fn write_ppm(path: &str, width: usize, height: usize, rgb: &[u8]) -> anyhow::Result<()> {
    anyhow::ensure!(
        rgb.len() == width * height * 3,
        "ppm: {} bytes for {}x{}",
        rgb.len(),
        width,
        height
    );
    let mut out = Vec::with_capacity(rgb.len() + 32);
    out.extend_from_slice(format!("P6\n{width} {height}\n255\n").as_bytes());
    out.extend_from_slice(rgb);
    std::fs::write(path, out).with_context(|| format!("write ppm: {path}"))?;
    Ok(())
}
