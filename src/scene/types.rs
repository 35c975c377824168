//! Core geometry types shared by every output backend

/// A 2D point in canvas coordinates (y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }
}

/// A single drawable item of a [`Scene`](super::Scene)
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A filled rectangle; `None` bounds cover the whole canvas
    Rect {
        bounds: Option<BoundingBox>,
        fill: String,
    },
    Circle {
        center: Point,
        radius: f64,
        fill: String,
    },
    Polygon {
        points: Vec<Point>,
        fill: String,
    },
    /// Text horizontally centered on `position`
    Text {
        content: String,
        position: Point,
        font_size: f64,
        font_family: String,
        fill: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_center() {
        let b = BoundingBox::new(75.0, 50.0, 150.0, 100.0);
        assert_eq!(b.center(), Point::new(150.0, 100.0));
    }
}
