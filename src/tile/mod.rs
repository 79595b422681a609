//! Tiles: specifications, the three tile variants, the ordered tile list and
//! its counter

mod counter;
mod curved;
mod curved_enlarged;
mod list;
mod model;
mod record;
mod specs;
mod straight;

pub use counter::{TileCount, TileCounter};
pub use curved::CurvedTile;
pub use curved_enlarged::CurvedEnlargedTile;
pub use list::{SubscriptionId, TileList, TileListEvent};
pub use model::{Direction, Pose, Tile, TileBase, TileModel, TileRect, TileType};
pub use record::TileRecord;
pub use specs::{SharedSpecifications, TileSpecifications};
pub use straight::StraightTile;
