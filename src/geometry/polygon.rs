//! Closed polygons used as intermediate shape descriptions

use super::bounds::Bounds;
use super::vector::Vector2D;

/// An ordered list of points forming a closed outline.
///
/// Transforms never touch the receiver: they copy the points into a new
/// polygon, keeping count and order.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Polygon2D {
    points: Vec<Vector2D>,
}

impl Polygon2D {
    pub fn new(points: Vec<Vector2D>) -> Self {
        Polygon2D { points }
    }

    pub fn points(&self) -> &[Vector2D] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vector2D> {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Rotate every point around `center` (the origin when `None`).
    pub fn rotate(&self, angle: f64, center: Option<Vector2D>) -> Self {
        self.points.iter().map(|p| p.rotate(angle, center)).collect()
    }

    /// Move every point by `vector`.
    pub fn translate(&self, vector: Vector2D) -> Self {
        self.points.iter().map(|p| p.translate(vector)).collect()
    }

    /// Bounding box of the outline, empty for an empty polygon.
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::new();
        for point in &self.points {
            bounds.expand_point(*point);
        }
        bounds
    }
}

impl FromIterator<Vector2D> for Polygon2D {
    fn from_iter<I: IntoIterator<Item = Vector2D>>(iter: I) -> Self {
        Polygon2D::new(iter.into_iter().collect())
    }
}

impl From<Vec<Vector2D>> for Polygon2D {
    fn from(points: Vec<Vector2D>) -> Self {
        Polygon2D::new(points)
    }
}
