//! Raster canvas generation
//!
//! The rasterizer draws the same serialized scene the SVG output contains, so
//! the canvas and the `.svg` file agree pixel-for-pixel.

use resvg::{tiny_skia, usvg};

use crate::error::RenderError;
use crate::scene::Scene;

use super::{render_svg, SvgConfig};

/// Draws scenes onto a [`tiny_skia::Pixmap`]
pub struct Rasterizer {
    options: usvg::Options<'static>,
    scale: f32,
}

impl Rasterizer {
    /// Create a rasterizer; `scale` maps logical units to pixels
    pub fn new(scale: f32) -> Self {
        Self {
            options: usvg::Options::default(),
            scale,
        }
    }

    /// Make the host's installed fonts available for text rendering
    ///
    /// Without fonts, text elements are skipped on the canvas.
    pub fn with_system_fonts(mut self) -> Self {
        self.options.fontdb_mut().load_system_fonts();
        log::debug!("loaded {} font faces", self.options.fontdb.len());
        self
    }

    /// Size in pixels of the canvas for a scene
    pub fn canvas_size(&self, scene: &Scene) -> (u32, u32) {
        let scale = f64::from(self.scale);
        (
            (scene.width * scale).round() as u32,
            (scene.height * scale).round() as u32,
        )
    }

    /// Draw a scene onto a fresh, transparent canvas
    pub fn render(&self, scene: &Scene) -> Result<tiny_skia::Pixmap, RenderError> {
        let svg = render_svg(scene, &SvgConfig::default());
        let tree = usvg::Tree::from_str(&svg, &self.options)?;

        let (width, height) = self.canvas_size(scene);
        let mut pixmap =
            tiny_skia::Pixmap::new(width, height).ok_or(RenderError::Canvas { width, height })?;

        resvg::render(
            &tree,
            tiny_skia::Transform::from_scale(self.scale, self.scale),
            &mut pixmap.as_mut(),
        );
        Ok(pixmap)
    }
}
