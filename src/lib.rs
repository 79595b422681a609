//! Geometric layout engine for racing-circuit tiles.
//!
//! A track is an ordered list of square tiles (straights, quarter turns and
//! enlarged quarter turns) sharing one set of [`TileSpecifications`]. Building
//! the track threads a pose through every tile and returns where each one
//! sits plus the box around all of them. Decorations are drawn as SVG path
//! data by the functions in [`path`].
//!
//! ```
//! use trackline::{Direction, TileType, Track};
//!
//! let mut track = Track::default();
//! track.tiles_mut().append(TileType::Straight, Direction::Right, 1.0);
//! track.tiles_mut().append(TileType::Curved, Direction::Right, 1.0);
//!
//! let layout = track.build();
//! assert_eq!(layout.tiles[1].rect.input, layout.tiles[0].rect.output);
//! assert_eq!((layout.width, layout.height), (300.0, 160.0));
//! ```

pub mod errors;
pub mod geometry;
pub mod log;
pub mod path;
pub mod tile;
pub mod track;
pub mod types;

pub use errors::TrackError;
pub use geometry::{Bounds, Polygon2D, Vector2D};
pub use path::{PathCommand, SvgPath};
pub use tile::{
    Direction, SharedSpecifications, Tile, TileCounter, TileList, TileListEvent, TileModel,
    TileRecord, TileRect, TileSpecifications, TileType,
};
pub use track::{PlacedTile, Track, TrackConfig, TrackLayout, TrackOptions, build_track};
pub use types::Numeric;
