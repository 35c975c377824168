//! Logo geometry
//!
//! A [`Scene`] is computed once from a [`LogoSpec`] and then handed to every
//! output backend (SVG serializer and rasterizer), so the two outputs can never
//! disagree about coordinates or fills.

pub mod types;

pub use types::{BoundingBox, Element, Point};

use crate::logo::{LogoSpec, Shape};
use crate::RenderConfig;

/// The complete, ordered list of elements making up a logo
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub elements: Vec<Element>,
}

impl Scene {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            elements: vec![],
        }
    }

    pub fn add(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// The canvas as a bounding box anchored at the origin
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::new(0.0, 0.0, self.width, self.height)
    }
}

/// Compute the geometry of a logo
///
/// Paint order is background, shape, text. The shape is filled with the
/// spec's text color and the canvas with its shape color.
pub fn build(spec: &LogoSpec, config: &RenderConfig) -> Scene {
    let mut scene = Scene::new(config.width, config.height);
    let canvas = scene.bounds();
    let center = canvas.center();

    scene.add(Element::Rect {
        bounds: None,
        fill: spec.shape_color().to_string(),
    });

    if let Some(shape) = shape_element(spec.shape(), canvas, spec.text_color()) {
        scene.add(shape);
    }

    scene.add(Element::Text {
        content: spec.text().to_string(),
        position: center,
        font_size: config.font_size,
        font_family: config.font_family.clone(),
        fill: config.text_fill.clone(),
    });

    log::debug!(
        "built scene with {} elements for shape '{}'",
        scene.elements.len(),
        spec.shape()
    );
    scene
}

/// The element for one shape kind, or `None` for shapes without geometry
fn shape_element(shape: &Shape, canvas: BoundingBox, fill: &str) -> Option<Element> {
    let fill = fill.to_string();
    let (w, h) = (canvas.width, canvas.height);
    match shape {
        Shape::Circle => Some(Element::Circle {
            center: canvas.center(),
            radius: w / 3.0,
            fill,
        }),
        Shape::Square => Some(Element::Rect {
            bounds: Some(BoundingBox::new(w / 4.0, h / 4.0, w / 2.0, h / 2.0)),
            fill,
        }),
        Shape::Triangle => Some(Element::Polygon {
            points: vec![
                Point::new(w / 2.0, 0.0),
                Point::new(0.0, h),
                Point::new(w, h),
            ],
            fill,
        }),
        Shape::Other(name) => {
            log::info!("unrecognized shape '{}', drawing background and text only", name);
            None
        }
    }
}
