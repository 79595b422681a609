//! Tile counts per type, direction and ratio

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use super::model::{Direction, Tile, TileType};

/// Ratio usable as a map key, ordered with `total_cmp`.
#[derive(Clone, Copy, Debug)]
struct RatioKey(f64);

impl PartialEq for RatioKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for RatioKey {}

impl PartialOrd for RatioKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for RatioKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// One line of a [`TileCounter`]
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct TileCount {
    #[serde(rename = "type")]
    pub kind: TileType,
    pub direction: Direction,
    pub ratio: f64,
    pub count: usize,
}

/// How many tiles of each `(type, direction, ratio)` a track uses
#[derive(Clone, Debug, Default)]
pub struct TileCounter {
    counts: BTreeMap<(TileType, Direction, RatioKey), usize>,
    total: usize,
}

impl TileCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tiles<'a, T: Tile + 'a>(tiles: impl IntoIterator<Item = &'a T>) -> Self {
        let mut counter = TileCounter::new();
        for tile in tiles {
            counter.add(tile.kind(), tile.direction(), tile.ratio());
        }
        counter
    }

    pub fn add(&mut self, kind: TileType, direction: Direction, ratio: f64) {
        *self
            .counts
            .entry((kind, direction, RatioKey(ratio)))
            .or_insert(0) += 1;
        self.total += 1;
    }

    pub fn count(&self, kind: TileType, direction: Direction, ratio: f64) -> usize {
        self.counts
            .get(&(kind, direction, RatioKey(ratio)))
            .copied()
            .unwrap_or(0)
    }

    /// Tiles of one type, all directions and ratios together.
    pub fn count_type(&self, kind: TileType) -> usize {
        self.counts
            .iter()
            .filter(|((k, _, _), _)| *k == kind)
            .map(|(_, count)| count)
            .sum()
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Counts sorted by type, then direction, then ratio.
    pub fn iter(&self) -> impl Iterator<Item = TileCount> + '_ {
        self.counts
            .iter()
            .map(|(&(kind, direction, ratio), &count)| TileCount {
                kind,
                direction,
                ratio: ratio.0,
                count,
            })
    }
}
