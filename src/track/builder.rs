//! Track building: thread a pose through every tile and bound the result

use serde::{Deserialize, Serialize};

use crate::geometry::{Bounds, Vector2D};
use crate::tile::{Direction, Pose, Tile, TileList, TileModel, TileRect, TileType};

use super::defaults;

/// Where the first tile starts and how much room to leave around the track
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackOptions {
    pub start_x: f64,
    pub start_y: f64,
    pub start_angle: f64,
    pub h_padding: f64,
    pub v_padding: f64,
}

impl Default for TrackOptions {
    fn default() -> Self {
        TrackOptions {
            start_x: defaults::START_X,
            start_y: defaults::START_Y,
            start_angle: defaults::START_ANGLE,
            h_padding: defaults::H_PADDING,
            v_padding: defaults::V_PADDING,
        }
    }
}

impl TrackOptions {
    pub fn start(&self) -> Pose {
        Pose::new(self.start_x, self.start_y, self.start_angle)
    }
}

/// A tile at its place in the track
#[derive(Clone, Debug, Serialize)]
pub struct PlacedTile {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TileType,
    pub direction: Direction,
    pub ratio: f64,
    /// Input pose of the tile, before its own transform.
    pub x: f64,
    pub y: f64,
    pub angle: f64,
    pub rect: TileRect,
    #[serde(skip)]
    pub model: TileModel,
}

/// Every placed tile and the padded box around all of them
#[derive(Clone, Debug, Serialize)]
pub struct TrackLayout {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub tiles: Vec<PlacedTile>,
}

impl TrackLayout {
    pub fn bounds(&self) -> Bounds {
        Bounds {
            min: Vector2D::new(self.x, self.y),
            max: Vector2D::new(self.x + self.width, self.y + self.height),
        }
    }

    /// Pose the cursor ends at after the last tile, `None` for an empty track.
    pub fn end(&self) -> Option<Pose> {
        self.tiles.last().map(|tile| tile.rect.output)
    }
}

/// Lay out every tile of `list` in order.
pub fn build_track(list: &TileList, options: &TrackOptions) -> TrackLayout {
    build_tiles(list, options)
}

/// Lay out `tiles` in iteration order.
///
/// Each tile starts where the previous one ended. The box always includes
/// the origin, then grows by `h_padding` on the left and right and by
/// `v_padding` on the top and bottom.
pub fn build_tiles<'a>(
    tiles: impl IntoIterator<Item = &'a TileModel>,
    options: &TrackOptions,
) -> TrackLayout {
    let mut cursor = options.start();
    let mut bounds = Bounds::at(Vector2D::ZERO);
    let mut placed = Vec::new();

    for model in tiles {
        let rect = model.bounding_rect(cursor.x, cursor.y, cursor.angle);
        crate::log::debug!(
            id = model.id(),
            kind = %model.kind(),
            x = rect.input.x,
            y = rect.input.y,
            angle = rect.input.angle,
            "placing tile"
        );

        bounds.expand_rect(rect.x, rect.y, rect.width, rect.height);
        placed.push(PlacedTile {
            id: model.id().to_string(),
            kind: model.kind(),
            direction: model.direction(),
            ratio: model.ratio(),
            x: rect.input.x,
            y: rect.input.y,
            angle: rect.input.angle,
            rect,
            model: model.clone(),
        });
        cursor = rect.output;
    }

    let bounds = bounds.pad(options.h_padding, options.v_padding);
    crate::log::debug!(
        tiles = placed.len(),
        x = bounds.min.x,
        y = bounds.min.y,
        width = bounds.width(),
        height = bounds.height(),
        "track built"
    );

    TrackLayout {
        x: bounds.min.x,
        y: bounds.min.y,
        width: bounds.width(),
        height: bounds.height(),
        tiles: placed,
    }
}
