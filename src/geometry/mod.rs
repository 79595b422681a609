//! Plane geometry: vectors, polygons and bounding boxes
//!
//! - `vector`: `Vector2D`, angle constants and quadrant helpers
//! - `polygon`: `Polygon2D`, whole-shape rotate/translate
//! - `bounds`: `Bounds`, the min/max accumulator shared by tiles and tracks

pub mod bounds;
pub mod polygon;
pub mod vector;

pub use bounds::Bounds;
pub use polygon::Polygon2D;
pub use vector::{
    CIRCLE, RIGHT_ANGLE, STRAIGHT_ANGLE, Vector2D, normalize_angle, quadrant, quadrant_angle,
};
