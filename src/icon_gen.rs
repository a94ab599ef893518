use anyhow::{Context, Result};
use log::{debug, info};
use std::{
    fs::File,
    io::Write,
    path::{Path, PathBuf},
};

/// Minimal 1x1 RGB PNG written verbatim to every icon.
///
/// The IDAT chunk is kept exactly as shipped with the extension, so its
/// checksums do not verify and strict decoders will reject it.
pub const PLACEHOLDER_PNG: &[u8] = &[
    0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a, 0x00, 0x00, 0x00, 0x0d, // signature, IHDR len
    0x49, 0x48, 0x44, 0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, // IHDR, 1x1
    0x08, 0x02, 0x00, 0x00, 0x00, 0x90, 0x77, 0x53, 0xde, 0x00, 0x00, 0x00, // 8-bit RGB, crc
    0x0c, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9c, 0x63, 0x60, 0xf8, 0x0f, 0x00, // IDAT
    0x00, 0x01, 0x00, 0x01, 0x00, 0x18, 0xdd, 0x8d, 0xb4, 0x00, 0x00, 0x00,
    0x00, 0x49, 0x45, 0x4e, 0x44, 0xae, 0x42, 0x60, 0x82, // IEND
];

/// Icon sizes required by the extension manifest, in generation order.
pub const ICON_SIZES: [u32; 3] = [16, 48, 128];

pub fn icon_filename(size: u32) -> String {
    format!("icon{size}.png")
}

/// Create (or truncate) `icon<size>.png` in `dir` and fill it with the placeholder.
pub fn write_icon(dir: &Path, size: u32) -> Result<PathBuf> {
    let path = dir.join(icon_filename(size));

    let mut file = File::create(&path)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    file.write_all(PLACEHOLDER_PNG)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    debug!("wrote {} bytes to {}", PLACEHOLDER_PNG.len(), path.display());
    Ok(path)
}

/// Write one icon per entry in [`ICON_SIZES`] and report each to `out`.
///
/// Stops at the first failure; icons written before it are left in place.
pub fn generate_icons<W: Write>(dir: &Path, mut out: W) -> Result<()> {
    for size in ICON_SIZES {
        write_icon(dir, size)?;
        writeln!(out, "Created {}", icon_filename(size))?;
    }

    writeln!(out, "All icons created successfully!")?;
    out.flush()?;

    info!("generated {} icons in {}", ICON_SIZES.len(), dir.display());
    Ok(())
}
