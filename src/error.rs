//! Error types for input collection, rendering and output

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while collecting or loading a [`LogoSpec`](crate::LogoSpec)
#[derive(Error, Debug)]
pub enum InputError {
    #[error("logo text must be at most three characters, got {len}")]
    TextTooLong { len: usize },

    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse logo spec TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Errors raised while turning a scene into a raster canvas
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("generated SVG could not be parsed: {0}")]
    Svg(#[from] resvg::usvg::Error),

    #[error("cannot allocate a {width}x{height} canvas")]
    Canvas { width: u32, height: u32 },
}

/// Errors raised while persisting the rendered logo
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("failed to write '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode PNG: {0}")]
    Png(String),
}

/// Any failure of a complete run, reported once at the top level
#[derive(Error, Debug)]
pub enum LogoError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Output(#[from] OutputError),
}
