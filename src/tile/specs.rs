//! Tile specifications and the handle that shares them across a track

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::track::defaults;
use crate::types::finite_or;

/// Physical dimensions every tile of a track is derived from.
///
/// Setters never fail: negative values are sign-flipped, non-finite values
/// become `0`, and the chunk count is rounded to an integer of at least `1`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawSpecifications")]
pub struct TileSpecifications {
    lane_width: f64,
    barrier_width: f64,
    barrier_chunks: f64,
}

impl Default for TileSpecifications {
    fn default() -> Self {
        TileSpecifications::new(
            defaults::LANE_WIDTH,
            defaults::BARRIER_WIDTH,
            defaults::BARRIER_CHUNKS,
        )
    }
}

impl TileSpecifications {
    pub fn new(lane_width: f64, barrier_width: f64, barrier_chunks: f64) -> Self {
        let mut specs = TileSpecifications {
            lane_width: 0.0,
            barrier_width: 0.0,
            barrier_chunks: 1.0,
        };
        specs
            .set_lane_width(lane_width)
            .set_barrier_width(barrier_width)
            .set_barrier_chunks(barrier_chunks);
        specs
    }

    pub fn set_lane_width(&mut self, value: f64) -> &mut Self {
        self.lane_width = finite_or(value, 0.0).abs();
        self
    }

    pub fn set_barrier_width(&mut self, value: f64) -> &mut Self {
        self.barrier_width = finite_or(value, 0.0).abs();
        self
    }

    pub fn set_barrier_chunks(&mut self, value: f64) -> &mut Self {
        self.barrier_chunks = finite_or(value, 1.0).abs().round().max(1.0);
        self
    }

    pub fn lane_width(&self) -> f64 {
        self.lane_width
    }

    pub fn barrier_width(&self) -> f64 {
        self.barrier_width
    }

    pub fn barrier_chunks(&self) -> f64 {
        self.barrier_chunks
    }

    /// Lane plus a barrier on each side.
    pub fn width(&self) -> f64 {
        self.lane_width + self.barrier_width * 2.0
    }

    /// Side of a tile cell. Cells are square, so this equals `width`.
    pub fn length(&self) -> f64 {
        self.width()
    }

    /// Margin added around each tile's bounding box.
    pub fn padding(&self) -> f64 {
        self.barrier_width
    }

    /// Length of one barrier chunk along a tile side.
    pub fn barrier_length(&self) -> f64 {
        self.length() / self.barrier_chunks
    }
}

impl fmt::Display for TileSpecifications {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lane {} / barrier {} x{}",
            self.lane_width, self.barrier_width, self.barrier_chunks
        )
    }
}

/// Wire shape of the specifications, normalized on the way in.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct RawSpecifications {
    lane_width: f64,
    barrier_width: f64,
    barrier_chunks: f64,
}

impl Default for RawSpecifications {
    fn default() -> Self {
        RawSpecifications {
            lane_width: defaults::LANE_WIDTH,
            barrier_width: defaults::BARRIER_WIDTH,
            barrier_chunks: defaults::BARRIER_CHUNKS,
        }
    }
}

impl From<RawSpecifications> for TileSpecifications {
    fn from(raw: RawSpecifications) -> Self {
        TileSpecifications::new(raw.lane_width, raw.barrier_width, raw.barrier_chunks)
    }
}

/// Specifications shared by identity between every tile of one track.
///
/// Cloning the handle shares the same value: an update through any clone is
/// seen by all of them on the next read, which invalidates every bounding
/// rectangle computed before it.
#[derive(Clone, Default)]
pub struct SharedSpecifications(Rc<Cell<TileSpecifications>>);

impl SharedSpecifications {
    pub fn new(specs: TileSpecifications) -> Self {
        SharedSpecifications(Rc::new(Cell::new(specs)))
    }

    /// Snapshot of the current values.
    pub fn get(&self) -> TileSpecifications {
        self.0.get()
    }

    /// Replace the values for every holder.
    pub fn set(&self, specs: TileSpecifications) {
        self.0.set(specs);
    }

    /// Edit the values in place for every holder.
    pub fn update(&self, edit: impl FnOnce(&mut TileSpecifications)) {
        let mut specs = self.0.get();
        edit(&mut specs);
        self.0.set(specs);
    }

    /// Whether both handles point at the same specifications.
    pub fn ptr_eq(&self, other: &SharedSpecifications) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl From<TileSpecifications> for SharedSpecifications {
    fn from(specs: TileSpecifications) -> Self {
        SharedSpecifications::new(specs)
    }
}

impl fmt::Debug for SharedSpecifications {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedSpecifications").field(&self.get()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_dimensions() {
        let specs = TileSpecifications::new(120.0, 10.0, 4.0);
        assert_eq!(specs.width(), 140.0);
        assert_eq!(specs.length(), 140.0);
        assert_eq!(specs.padding(), 10.0);
        assert_eq!(specs.barrier_length(), 35.0);
    }

    #[test]
    fn setters_take_absolute_values() {
        let mut specs = TileSpecifications::default();
        specs.set_lane_width(-100.0).set_barrier_width(-4.0);
        assert_eq!(specs.lane_width(), 100.0);
        assert_eq!(specs.barrier_width(), 4.0);
    }

    #[test]
    fn barrier_chunks_round_to_positive_integers() {
        let mut specs = TileSpecifications::default();
        assert_eq!(specs.set_barrier_chunks(1.8).barrier_chunks(), 2.0);
        assert_eq!(specs.set_barrier_chunks(-4.0).barrier_chunks(), 4.0);
        assert_eq!(specs.set_barrier_chunks(2.5).barrier_chunks(), 3.0);
        assert_eq!(specs.set_barrier_chunks(0.2).barrier_chunks(), 1.0);
        assert_eq!(specs.set_barrier_chunks(0.0).barrier_chunks(), 1.0);
        assert_eq!(specs.set_barrier_chunks(f64::NAN).barrier_chunks(), 1.0);
    }

    #[test]
    fn non_finite_widths_become_zero() {
        let specs = TileSpecifications::new(f64::NAN, f64::NEG_INFINITY, 2.0);
        assert_eq!(specs.lane_width(), 0.0);
        assert_eq!(specs.barrier_width(), 0.0);
    }

    #[test]
    fn defaults_match_the_track_defaults() {
        let specs = TileSpecifications::default();
        assert_eq!(specs.lane_width(), defaults::LANE_WIDTH);
        assert_eq!(specs.barrier_width(), defaults::BARRIER_WIDTH);
        assert_eq!(specs.barrier_chunks(), defaults::BARRIER_CHUNKS);
    }

    #[test]
    fn deserializing_normalizes() {
        let specs: TileSpecifications =
            serde_json::from_str(r#"{"laneWidth": -80, "barrierChunks": 2.6}"#).unwrap();
        assert_eq!(specs.lane_width(), 80.0);
        assert_eq!(specs.barrier_width(), defaults::BARRIER_WIDTH);
        assert_eq!(specs.barrier_chunks(), 3.0);
    }

    #[test]
    fn shared_handles_see_each_other() {
        let a = SharedSpecifications::new(TileSpecifications::new(120.0, 10.0, 4.0));
        let b = a.clone();
        let other = SharedSpecifications::new(TileSpecifications::new(120.0, 10.0, 4.0));

        a.update(|specs| {
            specs.set_lane_width(200.0);
        });

        assert_eq!(b.get().lane_width(), 200.0);
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&other));
        assert_eq!(other.get().lane_width(), 120.0);
    }
}
