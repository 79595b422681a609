//! The ordered, observable list of tiles that makes up a track

use std::collections::HashSet;
use std::fmt;

use crate::errors::TrackError;

use super::counter::TileCounter;
use super::model::{Direction, Tile, TileModel, TileType};
use super::record::TileRecord;
use super::specs::SharedSpecifications;

/// Handle returned by [`TileList::subscribe`]
pub type SubscriptionId = usize;

type Observer = Box<dyn FnMut(&TileListEvent)>;

/// What changed in a [`TileList`]. Observers receive it once the list is
/// consistent again.
#[derive(Clone, Debug, PartialEq)]
pub enum TileListEvent {
    /// A tile was appended at the end.
    Add { id: String, index: usize },
    /// A tile was inserted next to another one.
    Insert { id: String, index: usize },
    Update { id: String },
    Replace { id: String, kind: TileType },
    Remove { id: String, index: usize },
    /// The whole list was replaced by imported records.
    Import { count: usize },
    Clear,
}

impl TileListEvent {
    /// Name of the notification, as consumed by external stores.
    pub fn name(&self) -> &'static str {
        match self {
            TileListEvent::Add { .. } => "add",
            TileListEvent::Insert { .. } => "insert",
            TileListEvent::Update { .. } => "update",
            TileListEvent::Replace { .. } => "replace",
            TileListEvent::Remove { .. } => "remove",
            TileListEvent::Import { .. } => "import",
            TileListEvent::Clear => "clear",
        }
    }
}

/// Ordered tiles bound to one set of specifications.
///
/// Order is traversal order. Ids are unique; generated ones read `tile-N`
/// with `N` taken from a per-list counter that never goes back.
pub struct TileList {
    specs: SharedSpecifications,
    tiles: Vec<TileModel>,
    next_id: usize,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: SubscriptionId,
}

impl TileList {
    pub fn new(specs: SharedSpecifications) -> Self {
        TileList {
            specs,
            tiles: Vec::new(),
            next_id: 1,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn specs(&self) -> &SharedSpecifications {
        &self.specs
    }

    // ------------------------------------------------------------------------
    // Reading
    // ------------------------------------------------------------------------

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TileModel> {
        self.tiles.iter()
    }

    pub fn tiles(&self) -> &[TileModel] {
        &self.tiles
    }

    pub fn get(&self, id: &str) -> Option<&TileModel> {
        self.tiles.iter().find(|tile| tile.id() == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.tiles.iter().position(|tile| tile.id() == id)
    }

    pub fn counter(&self) -> TileCounter {
        TileCounter::from_tiles(&self.tiles)
    }

    // ------------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------------

    /// Append a new tile and return its id.
    pub fn append(&mut self, kind: TileType, direction: Direction, ratio: f64) -> String {
        let model = self.create(kind, direction, ratio);
        let id = model.id().to_string();
        self.tiles.push(model);
        crate::log::debug!(%id, %kind, "tile appended");
        self.notify(TileListEvent::Add {
            id: id.clone(),
            index: self.tiles.len() - 1,
        });
        id
    }

    /// Insert a new tile right before `id`.
    pub fn insert_before(
        &mut self,
        id: &str,
        kind: TileType,
        direction: Direction,
        ratio: f64,
    ) -> Result<String, TrackError> {
        let index = self.require(id)?;
        Ok(self.insert_at(index, kind, direction, ratio))
    }

    /// Insert a new tile right after `id`.
    pub fn insert_after(
        &mut self,
        id: &str,
        kind: TileType,
        direction: Direction,
        ratio: f64,
    ) -> Result<String, TrackError> {
        let index = self.require(id)?;
        Ok(self.insert_at(index + 1, kind, direction, ratio))
    }

    /// Append a tile built elsewhere.
    ///
    /// The tile must share this list's specifications and carry an id the
    /// list does not use yet.
    pub fn add_model(&mut self, model: TileModel) -> Result<String, TrackError> {
        if !model.specs().ptr_eq(&self.specs) {
            crate::log::warn!(id = model.id(), "tile bound to foreign specifications");
            return Err(TrackError::TypeValidation {
                expected: "TileSpecifications",
                found: Some(format!(
                    "tile {} is bound to the specifications of another track",
                    model.id()
                )),
            });
        }
        if self.position(model.id()).is_some() {
            return Err(TrackError::DuplicateId(model.id().to_string()));
        }

        let id = model.id().to_string();
        self.tiles.push(model);
        crate::log::debug!(%id, "tile model added");
        self.notify(TileListEvent::Add {
            id: id.clone(),
            index: self.tiles.len() - 1,
        });
        Ok(id)
    }

    /// Change the direction and ratio of a tile.
    pub fn update(&mut self, id: &str, direction: Direction, ratio: f64) -> Result<(), TrackError> {
        let index = self.require(id)?;
        let tile = &mut self.tiles[index];
        tile.set_direction(direction);
        tile.set_ratio(ratio);
        crate::log::debug!(%id, %direction, ratio = tile.ratio(), "tile updated");
        self.notify(TileListEvent::Update { id: id.to_string() });
        Ok(())
    }

    /// Swap a tile for one of another type, keeping id, direction and ratio.
    pub fn replace(&mut self, id: &str, kind: TileType) -> Result<(), TrackError> {
        let index = self.require(id)?;
        self.tiles[index] = self.tiles[index].with_kind(kind);
        crate::log::debug!(%id, %kind, "tile replaced");
        self.notify(TileListEvent::Replace {
            id: id.to_string(),
            kind,
        });
        Ok(())
    }

    pub fn remove(&mut self, id: &str) -> Result<TileModel, TrackError> {
        let index = self.require(id)?;
        let removed = self.tiles.remove(index);
        crate::log::debug!(%id, index, "tile removed");
        self.notify(TileListEvent::Remove {
            id: id.to_string(),
            index,
        });
        Ok(removed)
    }

    pub fn clear(&mut self) {
        self.tiles.clear();
        crate::log::debug!("tile list cleared");
        self.notify(TileListEvent::Clear);
    }

    // ------------------------------------------------------------------------
    // Import / Export
    // ------------------------------------------------------------------------

    /// Replace the whole list with `records`.
    ///
    /// Either every record is accepted or the list is left untouched. Records
    /// without an id get a generated one.
    pub fn import(
        &mut self,
        records: impl IntoIterator<Item = TileRecord>,
    ) -> Result<(), TrackError> {
        let records: Vec<TileRecord> = records.into_iter().collect();

        let mut taken = HashSet::new();
        for id in records.iter().filter_map(|record| record.id.as_deref()) {
            if !taken.insert(id.to_string()) {
                crate::log::warn!(%id, "import rejected: duplicate id");
                return Err(TrackError::DuplicateId(id.to_string()));
            }
        }

        let mut tiles = Vec::with_capacity(records.len());
        for record in records {
            let id = match record.id {
                Some(id) => id,
                None => {
                    let id = self.generate_id(|candidate| taken.contains(candidate));
                    taken.insert(id.clone());
                    id
                }
            };
            tiles.push(TileModel::new(
                record.kind,
                id,
                self.specs.clone(),
                record.direction,
                record.ratio,
            ));
        }

        self.tiles = tiles;
        crate::log::debug!(count = self.tiles.len(), "tiles imported");
        self.notify(TileListEvent::Import {
            count: self.tiles.len(),
        });
        Ok(())
    }

    /// Records of every tile, in order.
    pub fn export(&self) -> Vec<TileRecord> {
        self.tiles.iter().map(|tile| tile.to_record()).collect()
    }

    /// [`import`](Self::import) from a JSON array of records.
    pub fn import_json(&mut self, json: &str) -> Result<(), TrackError> {
        let records: Vec<TileRecord> = serde_json::from_str(json).map_err(|err| {
            crate::log::warn!(%err, "import rejected: malformed records");
            TrackError::from(err)
        })?;
        self.import(records)
    }

    /// [`export`](Self::export) as a pretty-printed JSON array.
    pub fn export_json(&self) -> Result<String, TrackError> {
        Ok(serde_json::to_string_pretty(&self.export())?)
    }

    // ------------------------------------------------------------------------
    // Observers
    // ------------------------------------------------------------------------

    /// Call `observer` after every mutation.
    pub fn subscribe(&mut self, observer: impl FnMut(&TileListEvent) + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Returns whether the subscription existed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(subscription, _)| *subscription != id);
        self.observers.len() != before
    }

    // ------------------------------------------------------------------------
    // Helpers
    // ------------------------------------------------------------------------

    fn notify(&mut self, event: TileListEvent) {
        for (_, observer) in self.observers.iter_mut() {
            observer(&event);
        }
    }

    fn require(&self, id: &str) -> Result<usize, TrackError> {
        self.position(id)
            .ok_or_else(|| TrackError::UnknownTile(id.to_string()))
    }

    fn create(&mut self, kind: TileType, direction: Direction, ratio: f64) -> TileModel {
        let id = self.generate_id(|_| false);
        TileModel::new(kind, id, self.specs.clone(), direction, ratio)
    }

    fn insert_at(&mut self, index: usize, kind: TileType, direction: Direction, ratio: f64) -> String {
        let model = self.create(kind, direction, ratio);
        let id = model.id().to_string();
        self.tiles.insert(index, model);
        crate::log::debug!(%id, %kind, index, "tile inserted");
        self.notify(TileListEvent::Insert {
            id: id.clone(),
            index,
        });
        id
    }

    /// Next `tile-N` not used by the list nor rejected by `reserved`.
    fn generate_id(&mut self, reserved: impl Fn(&str) -> bool) -> String {
        loop {
            let id = format!("tile-{}", self.next_id);
            self.next_id += 1;
            if !reserved(&id) && self.position(&id).is_none() {
                return id;
            }
        }
    }
}

impl fmt::Debug for TileList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TileList")
            .field("specs", &self.specs)
            .field("tiles", &self.tiles)
            .field("next_id", &self.next_id)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<'a> IntoIterator for &'a TileList {
    type Item = &'a TileModel;
    type IntoIter = std::slice::Iter<'a, TileModel>;

    fn into_iter(self) -> Self::IntoIter {
        self.tiles.iter()
    }
}
