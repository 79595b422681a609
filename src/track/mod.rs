//! Tracks: one set of specifications, the tiles bound to it and the options
//! used to lay them out

pub mod builder;
pub mod defaults;

use serde::{Deserialize, Serialize};

use crate::errors::TrackError;
use crate::tile::{SharedSpecifications, TileList, TileRecord, TileSpecifications};

pub use builder::{PlacedTile, TrackLayout, TrackOptions, build_tiles, build_track};

/// Everything needed to rebuild a track, as read from JSON
///
/// ```json
/// {
///   "laneWidth": 120, "barrierWidth": 10, "barrierChunks": 4,
///   "startAngle": 90, "hPadding": 20,
///   "tiles": [{"type": "straight"}, {"type": "curved", "direction": "left"}]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TrackConfig {
    pub lane_width: f64,
    pub barrier_width: f64,
    pub barrier_chunks: f64,
    #[serde(flatten)]
    pub options: TrackOptions,
    pub tiles: Vec<TileRecord>,
}

impl Default for TrackConfig {
    fn default() -> Self {
        TrackConfig {
            lane_width: defaults::LANE_WIDTH,
            barrier_width: defaults::BARRIER_WIDTH,
            barrier_chunks: defaults::BARRIER_CHUNKS,
            options: TrackOptions::default(),
            tiles: Vec::new(),
        }
    }
}

impl TrackConfig {
    pub fn specifications(&self) -> TileSpecifications {
        TileSpecifications::new(self.lane_width, self.barrier_width, self.barrier_chunks)
    }
}

/// A track under edition
#[derive(Debug)]
pub struct Track {
    tiles: TileList,
    options: TrackOptions,
}

impl Default for Track {
    fn default() -> Self {
        Track::new(TileSpecifications::default())
    }
}

impl Track {
    pub fn new(specs: TileSpecifications) -> Self {
        Track {
            tiles: TileList::new(SharedSpecifications::new(specs)),
            options: TrackOptions::default(),
        }
    }

    pub fn from_config(config: TrackConfig) -> Result<Self, TrackError> {
        let mut track = Track::new(config.specifications());
        track.options = config.options;
        track.tiles.import(config.tiles)?;
        Ok(track)
    }

    pub fn from_json(json: &str) -> Result<Self, TrackError> {
        let config: TrackConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }

    /// The configuration this track would be rebuilt from.
    pub fn to_config(&self) -> TrackConfig {
        let specs = self.specs().get();
        TrackConfig {
            lane_width: specs.lane_width(),
            barrier_width: specs.barrier_width(),
            barrier_chunks: specs.barrier_chunks(),
            options: self.options,
            tiles: self.tiles.export(),
        }
    }

    /// Handle on the specifications every tile of this track shares.
    pub fn specs(&self) -> &SharedSpecifications {
        self.tiles.specs()
    }

    pub fn tiles(&self) -> &TileList {
        &self.tiles
    }

    pub fn tiles_mut(&mut self) -> &mut TileList {
        &mut self.tiles
    }

    pub fn options(&self) -> &TrackOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: TrackOptions) {
        self.options = options;
    }

    pub fn build(&self) -> TrackLayout {
        build_track(&self.tiles, &self.options)
    }
}
