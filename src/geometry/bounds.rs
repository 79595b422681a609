//! Axis-aligned bounding boxes

use super::vector::Vector2D;

/// Axis-aligned bounding box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vector2D,
    pub max: Vector2D,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

impl Bounds {
    /// Create an empty bounding box (will expand on first point)
    pub fn new() -> Self {
        Bounds {
            min: Vector2D::new(f64::MAX, f64::MAX),
            max: Vector2D::new(f64::MIN, f64::MIN),
        }
    }

    /// A degenerate box holding a single point
    pub fn at(point: Vector2D) -> Self {
        Bounds { min: point, max: point }
    }

    /// Check if the bbox is empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: Vector2D) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    /// Expand to include a rectangle given by its top-left corner and size
    pub fn expand_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.expand_point(Vector2D::new(x, y));
        self.expand_point(Vector2D::new(x + width, y + height));
    }

    /// Grow by `horizontal` on the left and right, `vertical` on the top and bottom
    pub fn pad(self, horizontal: f64, vertical: f64) -> Self {
        Bounds {
            min: self.min.sub_coord(horizontal, vertical),
            max: self.max.add_coord(horizontal, vertical),
        }
    }

    pub fn width(&self) -> f64 { self.max.x - self.min.x }

    pub fn height(&self) -> f64 { self.max.y - self.min.y }

    pub fn center(&self) -> Vector2D {
        self.min.add(self.max).div_scalar(2.0)
    }

    /// Whether `other` lies entirely inside this box (edges included)
    pub fn contains(&self, other: &Bounds) -> bool {
        self.min.x <= other.min.x
            && self.min.y <= other.min.y
            && self.max.x >= other.max.x
            && self.max.y >= other.max.y
    }
}
