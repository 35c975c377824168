//! Output backends for a logo scene
//!
//! Both backends consume the same [`Scene`](crate::scene::Scene): the SVG
//! serializer produces the markup written to disk, the rasterizer produces the
//! in-memory canvas.

pub mod config;
pub mod raster;
pub mod svg;

pub use config::SvgConfig;
pub use raster::Rasterizer;
pub use svg::render_svg;
