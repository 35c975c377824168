//! Logo Maker - render a small text logo to SVG and to a raster canvas
//!
//! A [`LogoSpec`] (up to three characters of text, a shape and two colors) is
//! turned into a [`Scene`], which is then serialized to SVG markup and drawn
//! onto a pixel canvas.
//!
//! # Example
//!
//! ```rust
//! use logo_maker::{render_svg_only, LogoSpec, RenderConfig, Shape};
//!
//! let spec = LogoSpec::new("AI", "red", Shape::Circle, "blue").unwrap();
//! let svg = render_svg_only(&spec, &RenderConfig::default());
//! assert!(svg.contains(r#"<circle cx="150" cy="100" r="100" fill="red"/>"#));
//! ```

pub mod error;
pub mod logo;
pub mod output;
pub mod prompt;
pub mod renderer;
pub mod scene;

pub use error::{InputError, LogoError, OutputError, RenderError};
pub use logo::{LogoSpec, Shape};
pub use renderer::{render_svg, Rasterizer, SvgConfig};
pub use scene::Scene;

use resvg::tiny_skia::Pixmap;

/// Configuration for the complete render pipeline
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Canvas width in logical units
    pub width: f64,
    /// Canvas height in logical units
    pub height: f64,
    /// Font size of the logo text in logical units
    pub font_size: f64,
    /// Font family named on the logo text
    pub font_family: String,
    /// Fill color of the logo text
    pub text_fill: String,
    /// Pixels per logical unit on the raster canvas
    pub raster_scale: f32,
    /// Load installed fonts so the canvas shows the text
    pub system_fonts: bool,
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 300.0,
            height: 200.0,
            font_size: 20.0,
            font_family: "Arial".to_string(),
            text_fill: "black".to_string(),
            raster_scale: 1.0,
            system_fonts: true,
            svg: SvgConfig::default(),
        }
    }
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas size in logical units
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the raster scale factor
    pub fn with_raster_scale(mut self, scale: f32) -> Self {
        self.raster_scale = scale;
        self
    }

    /// Enable or disable loading of installed fonts for the canvas
    pub fn with_system_fonts(mut self, enabled: bool) -> Self {
        self.system_fonts = enabled;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    fn rasterizer(&self) -> Rasterizer {
        let rasterizer = Rasterizer::new(self.raster_scale);
        if self.system_fonts {
            rasterizer.with_system_fonts()
        } else {
            rasterizer
        }
    }
}

/// A rendered logo: the shared geometry and both of its representations
pub struct Logo {
    pub scene: Scene,
    pub svg: String,
    pub raster: Pixmap,
}

/// Render a logo with default configuration
pub fn render(spec: &LogoSpec) -> Result<Logo, RenderError> {
    render_with_config(spec, &RenderConfig::default())
}

/// Render a logo to SVG markup and a raster canvas
///
/// The geometry is computed once and both outputs are produced from it.
pub fn render_with_config(spec: &LogoSpec, config: &RenderConfig) -> Result<Logo, RenderError> {
    let scene = scene::build(spec, config);
    let svg = render_svg(&scene, &config.svg);
    let raster = config.rasterizer().render(&scene)?;

    Ok(Logo { scene, svg, raster })
}

/// Render only the SVG markup; this step cannot fail
pub fn render_svg_only(spec: &LogoSpec, config: &RenderConfig) -> String {
    render_svg(&scene::build(spec, config), &config.svg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> RenderConfig {
        RenderConfig::new().with_system_fonts(false)
    }

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.width, 300.0);
        assert_eq!(config.height, 200.0);
        assert_eq!(config.font_size, 20.0);
        assert_eq!(config.font_family, "Arial");
        assert_eq!(config.text_fill, "black");
        assert_eq!(config.raster_scale, 1.0);
    }

    #[test]
    fn test_render_produces_both_outputs() {
        let spec = LogoSpec::new("AI", "red", Shape::Circle, "blue").unwrap();
        let logo = render_with_config(&spec, &config()).unwrap();
        assert!(logo.svg.starts_with("<svg"));
        assert_eq!((logo.raster.width(), logo.raster.height()), (300, 200));
        assert_eq!(logo.scene.elements.len(), 3);
    }

    #[test]
    fn test_svg_matches_full_render() {
        let spec = LogoSpec::new("AI", "red", Shape::Square, "blue").unwrap();
        let logo = render_with_config(&spec, &config()).unwrap();
        assert_eq!(logo.svg, render_svg_only(&spec, &config()));
    }

    #[test]
    fn test_raster_scale() {
        let spec = LogoSpec::new("", "red", Shape::Triangle, "blue").unwrap();
        let logo = render_with_config(&spec, &config().with_raster_scale(2.0)).unwrap();
        assert_eq!((logo.raster.width(), logo.raster.height()), (600, 400));
    }
}
