//! Straight tiles

use crate::geometry::{Polygon2D, Vector2D, normalize_angle};

use super::model::{Pose, Tile, TileBase, TileRect, TileType};

/// A straight run of `length × ratio` along the heading.
#[derive(Clone, Debug)]
pub struct StraightTile {
    base: TileBase,
}

impl From<TileBase> for StraightTile {
    fn from(base: TileBase) -> Self {
        StraightTile { base }
    }
}

impl Tile for StraightTile {
    fn base(&self) -> &TileBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut TileBase {
        &mut self.base
    }

    fn kind(&self) -> TileType {
        TileType::Straight
    }

    fn bounding_rect(&self, x: f64, y: f64, angle: f64) -> TileRect {
        let specs = self.specs().get();
        let length = self.length();
        let half = specs.width() / 2.0;

        let input = Pose::new(x, y, angle);
        let exit = input
            .position()
            .add(Vector2D::heading(angle).mul_scalar(length));
        let output = Pose::new(exit.x, exit.y, normalize_angle(angle));

        let footprint = Polygon2D::new(vec![
            Vector2D::new(0.0, -half),
            Vector2D::new(length, -half),
            Vector2D::new(length, half),
            Vector2D::new(0.0, half),
        ]);
        TileRect::from_footprint(&footprint, input, output, specs.padding())
    }
}
