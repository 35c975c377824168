//! SVG generation from a logo scene

use crate::scene::{BoundingBox, Element, Point, Scene};

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
        }
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a rectangle covering the whole canvas
    pub fn add_background(&mut self, fill: &str) {
        self.elements.push(format!(
            r#"{}<rect width="100%" height="100%" fill="{}"/>"#,
            self.indent_str(),
            escape_xml(fill)
        ));
    }

    /// Add a rectangle element
    pub fn add_rect(&mut self, bounds: &BoundingBox, fill: &str) {
        self.elements.push(format!(
            r#"{}<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            self.indent_str(),
            bounds.x,
            bounds.y,
            bounds.width,
            bounds.height,
            escape_xml(fill)
        ));
    }

    /// Add a circle element
    pub fn add_circle(&mut self, center: Point, r: f64, fill: &str) {
        self.elements.push(format!(
            r#"{}<circle cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            self.indent_str(),
            center.x,
            center.y,
            r,
            escape_xml(fill)
        ));
    }

    /// Add a polygon element
    pub fn add_polygon(&mut self, points: &[Point], fill: &str) {
        self.elements.push(format!(
            r#"{}<polygon points="{}" fill="{}"/>"#,
            self.indent_str(),
            points_to_attr(points),
            escape_xml(fill)
        ));
    }

    /// Add a text element centered on `position`
    pub fn add_text(
        &mut self,
        text: &str,
        position: Point,
        font_size: f64,
        font_family: &str,
        fill: &str,
    ) {
        self.elements.push(format!(
            r#"{}<text x="{}" y="{}" font-size="{}" font-family="{}" fill="{}" text-anchor="middle">{}</text>"#,
            self.indent_str(),
            position.x,
            position.y,
            font_size,
            escape_xml(font_family),
            escape_xml(fill),
            escape_xml(text)
        ));
    }

    /// Build the final SVG string
    pub fn build(self, width: f64, height: f64) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        // XML declaration for standalone
        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
            width, height
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a scene to an SVG string
pub fn render_svg(scene: &Scene, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    for element in &scene.elements {
        render_element(element, &mut builder);
    }

    builder.build(scene.width, scene.height)
}

/// Render a single element to the builder
fn render_element(element: &Element, builder: &mut SvgBuilder) {
    match element {
        Element::Rect { bounds: None, fill } => builder.add_background(fill),
        Element::Rect {
            bounds: Some(bounds),
            fill,
        } => builder.add_rect(bounds, fill),
        Element::Circle {
            center,
            radius,
            fill,
        } => builder.add_circle(*center, *radius, fill),
        Element::Polygon { points, fill } => builder.add_polygon(points, fill),
        Element::Text {
            content,
            position,
            font_size,
            font_family,
            fill,
        } => builder.add_text(content, *position, *font_size, font_family, fill),
    }
}

/// Convert points to an SVG `points` attribute value
fn points_to_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Whether XML 1.0 allows `c` anywhere in a document
fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}'
    )
}

/// Escape special XML characters, dropping characters XML cannot represent
fn escape_xml(s: &str) -> String {
    s.chars()
        .filter(|c| is_xml_char(*c))
        .collect::<String>()
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
