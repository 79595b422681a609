//! Enlarged curves: a quarter turn whose cell grows by one barrier chunk

use crate::geometry::RIGHT_ANGLE;

use super::curved::quarter_turn_rect;
use super::model::{Pose, Tile, TileBase, TileRect, TileType};

/// A right-angle curve over a cell of `length × ratio + barrier_length`.
///
/// Turns like [`CurvedTile`](super::CurvedTile); only the offsets of the
/// output pose and the box differ.
#[derive(Clone, Debug)]
pub struct CurvedEnlargedTile {
    base: TileBase,
}

impl CurvedEnlargedTile {
    pub fn curve_angle(&self) -> f64 {
        RIGHT_ANGLE
    }

    /// Side of the enlarged cell, never below the band width.
    pub fn side(&self) -> f64 {
        let specs = self.specs().get();
        (self.length() + specs.barrier_length()).max(specs.width())
    }

    /// Centre-line radius.
    pub fn radius(&self) -> f64 {
        self.side() - self.specs().get().width() / 2.0
    }

    /// How much further the outer edge reaches compared to a plain curve.
    pub fn addition(&self) -> f64 {
        self.specs().get().barrier_length()
    }
}

impl From<TileBase> for CurvedEnlargedTile {
    fn from(base: TileBase) -> Self {
        CurvedEnlargedTile { base }
    }
}

impl Tile for CurvedEnlargedTile {
    fn base(&self) -> &TileBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut TileBase {
        &mut self.base
    }

    fn kind(&self) -> TileType {
        TileType::CurvedEnlarged
    }

    fn bounding_rect(&self, x: f64, y: f64, angle: f64) -> TileRect {
        let specs = self.specs().get();
        quarter_turn_rect(
            Pose::new(x, y, angle),
            self.side(),
            specs.width(),
            specs.padding(),
            self.direction(),
        )
    }
}
