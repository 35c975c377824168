//! Persisting rendered logos

use std::path::Path;

use resvg::tiny_skia::Pixmap;

use crate::error::OutputError;

/// File name used when no output path is given
pub const DEFAULT_SVG_PATH: &str = "logo.svg";

/// Write SVG markup to `path` in a single attempt
pub fn write_svg(path: &Path, svg: &str) -> Result<(), OutputError> {
    std::fs::write(path, svg).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!("wrote {} bytes of SVG to {}", svg.len(), path.display());
    Ok(())
}

/// Encode a raster canvas as PNG and write it to `path`
pub fn write_png(path: &Path, pixmap: &Pixmap) -> Result<(), OutputError> {
    let data = pixmap
        .encode_png()
        .map_err(|e| OutputError::Png(e.to_string()))?;
    std::fs::write(path, &data).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::info!(
        "wrote {}x{} PNG to {}",
        pixmap.width(),
        pixmap.height(),
        path.display()
    );
    Ok(())
}
