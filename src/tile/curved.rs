//! Curved tiles
//!
//! A curve turns the heading by a right angle inside a square cell. The
//! centre line enters in the middle of one side and leaves through the
//! adjacent side; its centre of curvature sits at the inner corner of the
//! cell.

use crate::geometry::{Polygon2D, RIGHT_ANGLE, Vector2D, normalize_angle};

use super::model::{Direction, Pose, Tile, TileBase, TileRect, TileType};

/// Rect of a quarter turn inside a cell of `side × side`, for a band of
/// `width` padded by `padding`.
///
/// The cell never gets narrower than the band.
pub(crate) fn quarter_turn_rect(
    input: Pose,
    side: f64,
    width: f64,
    padding: f64,
    direction: Direction,
) -> TileRect {
    let sign = direction.sign();
    let side = side.max(width);
    let half = width / 2.0;
    let radius = side - half;
    let entry = input.position();

    let centre = Vector2D::new(0.0, sign * radius)
        .rotate(input.angle, None)
        .translate(entry);
    let turn = sign * RIGHT_ANGLE;
    let exit = entry.rotate(turn, Some(centre));
    let output = Pose::new(exit.x, exit.y, normalize_angle(input.angle + turn));

    let footprint = Polygon2D::new(vec![
        Vector2D::new(0.0, -sign * half),
        Vector2D::new(side, -sign * half),
        Vector2D::new(side, sign * radius),
        Vector2D::new(0.0, sign * radius),
    ]);
    TileRect::from_footprint(&footprint, input, output, padding)
}

/// A right-angle curve whose cell side is `length × ratio`, clamped to the
/// band width.
#[derive(Clone, Debug)]
pub struct CurvedTile {
    base: TileBase,
}

impl CurvedTile {
    /// Heading change of the curve, before the direction's sign.
    pub fn curve_angle(&self) -> f64 {
        RIGHT_ANGLE
    }

    /// Side of the square cell the curve occupies, never below the band
    /// width so the centre line keeps a radius of at least half the band.
    pub fn side(&self) -> f64 {
        self.length().max(self.specs().get().width())
    }

    /// Centre-line radius.
    pub fn radius(&self) -> f64 {
        self.side() - self.specs().get().width() / 2.0
    }
}

impl From<TileBase> for CurvedTile {
    fn from(base: TileBase) -> Self {
        CurvedTile { base }
    }
}

impl Tile for CurvedTile {
    fn base(&self) -> &TileBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut TileBase {
        &mut self.base
    }

    fn kind(&self) -> TileType {
        TileType::Curved
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
