//! Tile models: the capability shared by every tile and the closed set of
//! tile variants
//!
//! A tile turns an input pose (position + heading) into an output pose and
//! reports the box it occupies on the way. Local frame: the origin is the
//! middle of the entry edge, +x runs along the heading and +y points to the
//! right of it (downward on screen for a heading of 0°).

use std::fmt;
use std::str::FromStr;

use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};

use crate::errors::TrackError;
use crate::geometry::{Polygon2D, Vector2D};
use crate::types::finite_or;

use super::curved::CurvedTile;
use super::curved_enlarged::CurvedEnlargedTile;
use super::record::TileRecord;
use super::specs::SharedSpecifications;
use super::straight::StraightTile;

// ============================================================================
// Tile Type & Direction
// ============================================================================

/// Kind of a tile, as named in persisted records
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", try_from = "String")]
pub enum TileType {
    Straight,
    Curved,
    CurvedEnlarged,
}

impl TileType {
    pub const ALL: [TileType; 3] = [TileType::Straight, TileType::Curved, TileType::CurvedEnlarged];

    pub fn as_str(self) -> &'static str {
        match self {
            TileType::Straight => "straight",
            TileType::Curved => "curved",
            TileType::CurvedEnlarged => "curved-enlarged",
        }
    }
}

impl FromStr for TileType {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TileType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| TrackError::InvalidTileType(s.to_string()))
    }
}

impl TryFrom<String> for TileType {
    type Error = TrackError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for TileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Which way a curve turns. Straight tiles carry one too, it just has no
/// effect on their geometry.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// `-1` for left, `1` for right: the sign of the turn on screen.
    pub fn sign(self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }

    pub fn flip(self) -> Direction {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl FromStr for Direction {
    type Err = TrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("left") {
            Ok(Direction::Left)
        } else if s.eq_ignore_ascii_case("right") {
            Ok(Direction::Right)
        } else {
            Err(TrackError::InvalidDirection(s.to_string()))
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = TrackError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Clamp a length ratio to a positive finite value, `1` when unusable.
pub(crate) fn normalize_ratio(ratio: f64) -> f64 {
    let ratio = finite_or(ratio, 0.0).abs();
    if ratio == 0.0 { 1.0 } else { ratio }
}

// ============================================================================
// Poses & Rects
// ============================================================================

/// A position and a heading in degrees
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    pub angle: f64,
}

impl Pose {
    pub fn new(x: f64, y: f64, angle: f64) -> Self {
        Pose { x, y, angle }
    }

    pub fn position(&self) -> Vector2D {
        Vector2D::new(self.x, self.y)
    }
}

/// Where a tile starts and ends, and the padded box it occupies
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TileRect {
    pub input: Pose,
    pub output: Pose,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl TileRect {
    /// Rotate a footprint given in the local frame by the input heading, move
    /// it to the input position and bound it, `padding` on every side.
    pub(crate) fn from_footprint(
        footprint: &Polygon2D,
        input: Pose,
        output: Pose,
        padding: f64,
    ) -> Self {
        let bounds = footprint
            .rotate(input.angle, None)
            .translate(input.position())
            .bounds()
            .pad(padding, padding);
        TileRect {
            input,
            output,
            x: bounds.min.x,
            y: bounds.min.y,
            width: bounds.width(),
            height: bounds.height(),
        }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

// ============================================================================
// Tile Capability
// ============================================================================

/// Fields every tile carries
#[derive(Clone, Debug)]
pub struct TileBase {
    pub(crate) id: String,
    pub(crate) direction: Direction,
    pub(crate) ratio: f64,
    pub(crate) specs: SharedSpecifications,
}

impl TileBase {
    pub fn new(
        id: impl Into<String>,
        specs: SharedSpecifications,
        direction: Direction,
        ratio: f64,
    ) -> Self {
        TileBase {
            id: id.into(),
            direction,
            ratio: normalize_ratio(ratio),
            specs,
        }
    }
}

/// Common behavior for all tiles
#[enum_dispatch]
pub trait Tile {
    fn base(&self) -> &TileBase;

    fn base_mut(&mut self) -> &mut TileBase;

    fn kind(&self) -> TileType;

    /// Input and output poses plus the padded box the tile occupies when it
    /// starts at `(x, y)` heading `angle` degrees.
    fn bounding_rect(&self, x: f64, y: f64, angle: f64) -> TileRect;

    fn id(&self) -> &str {
        &self.base().id
    }

    fn direction(&self) -> Direction {
        self.base().direction
    }

    fn ratio(&self) -> f64 {
        self.base().ratio
    }

    fn specs(&self) -> &SharedSpecifications {
        &self.base().specs
    }

    fn set_direction(&mut self, direction: Direction) {
        self.base_mut().direction = direction;
    }

    fn set_ratio(&mut self, ratio: f64) {
        self.base_mut().ratio = normalize_ratio(ratio);
    }

    /// Length of the tile along its heading before any turn.
    fn length(&self) -> f64 {
        self.specs().get().length() * self.ratio()
    }

    fn to_record(&self) -> TileRecord {
        TileRecord {
            id: Some(self.id().to_string()),
            kind: self.kind(),
            direction: self.direction(),
            ratio: self.ratio(),
        }
    }
}

/// Any tile of a track
#[enum_dispatch(Tile)]
#[derive(Clone, Debug)]
pub enum TileModel {
    Straight(StraightTile),
    Curved(CurvedTile),
    CurvedEnlarged(CurvedEnlargedTile),
}

impl TileModel {
    /// Build a tile of the given kind.
    pub fn new(
        kind: TileType,
        id: impl Into<String>,
        specs: SharedSpecifications,
        direction: Direction,
        ratio: f64,
    ) -> Self {
        Self::from_base(kind, TileBase::new(id, specs, direction, ratio))
    }

    pub(crate) fn from_base(kind: TileType, base: TileBase) -> Self {
        match kind {
            TileType::Straight => TileModel::Straight(StraightTile::from(base)),
            TileType::Curved => TileModel::Curved(CurvedTile::from(base)),
            TileType::CurvedEnlarged => TileModel::CurvedEnlarged(CurvedEnlargedTile::from(base)),
        }
    }

    /// The same tile under another kind, keeping id, direction and ratio.
    pub fn with_kind(&self, kind: TileType) -> Self {
        Self::from_base(kind, self.base().clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::TileSpecifications;

    fn specs() -> SharedSpecifications {
        SharedSpecifications::new(TileSpecifications::new(120.0, 10.0, 4.0))
    }

    #[test]
    fn tile_type_round_trips_through_strings() {
        for kind in TileType::ALL {
            assert_eq!(kind.as_str().parse::<TileType>().unwrap(), kind);
        }
        assert!(matches!(
            "loop".parse::<TileType>(),
            Err(TrackError::InvalidTileType(s)) if s == "loop"
        ));
    }

    #[test]
    fn direction_parsing() {
        assert_eq!("left".parse::<Direction>().unwrap(), Direction::Left);
        assert_eq!("RIGHT".parse::<Direction>().unwrap(), Direction::Right);
        assert!(matches!(
            "up".parse::<Direction>(),
            Err(TrackError::InvalidDirection(_))
        ));
        assert_eq!(Direction::Left.flip(), Direction::Right);
    }

    #[test]
    fn serde_rejects_unknown_values() {
        let err = serde_json::from_str::<Direction>(r#""sideways""#).unwrap_err();
        assert!(err.to_string().contains("invalid direction"), "{}", err);
        let kind: TileType = serde_json::from_str(r#""curved-enlarged""#).unwrap();
        assert_eq!(kind, TileType::CurvedEnlarged);
        assert_eq!(serde_json::to_string(&kind).unwrap(), r#""curved-enlarged""#);
    }

    #[test]
    fn ratio_is_normalized() {
        assert_eq!(normalize_ratio(2.0), 2.0);
        assert_eq!(normalize_ratio(-3.0), 3.0);
        assert_eq!(normalize_ratio(0.0), 1.0);
        assert_eq!(normalize_ratio(f64::NAN), 1.0);
    }

    #[test]
    fn dispatch_reaches_every_variant() {
        for kind in TileType::ALL {
            let mut tile = TileModel::new(kind, "t1", specs(), Direction::Left, 2.0);
            assert_eq!(tile.kind(), kind);
            assert_eq!(tile.id(), "t1");
            assert_eq!(tile.direction(), Direction::Left);
            assert_eq!(tile.ratio(), 2.0);
            assert_eq!(tile.length(), 280.0);

            tile.set_direction(Direction::Right);
            tile.set_ratio(-0.5);
            assert_eq!(tile.direction(), Direction::Right);
            assert_eq!(tile.ratio(), 0.5);
        }
    }

    #[test]
    fn with_kind_keeps_identity() {
        let tile = TileModel::new(TileType::Straight, "a", specs(), Direction::Left, 3.0);
        let curved = tile.with_kind(TileType::Curved);
        assert_eq!(curved.kind(), TileType::Curved);
        assert_eq!(curved.id(), "a");
        assert_eq!(curved.ratio(), 3.0);
        assert!(curved.specs().ptr_eq(tile.specs()));
    }

    #[test]
    fn to_record_carries_public_fields() {
        let tile = TileModel::new(TileType::Curved, "c", specs(), Direction::Left, 1.0);
        assert_eq!(
            tile.to_record(),
            TileRecord {
                id: Some("c".to_string()),
                kind: TileType::Curved,
                direction: Direction::Left,
                ratio: 1.0,
            }
        );
    }
}
