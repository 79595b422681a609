//! Flat tile records, the only persisted form of a track

use serde::{Deserialize, Serialize};

use super::model::{Direction, TileType};

fn default_ratio() -> f64 {
    1.0
}

/// One tile as stored or exchanged: `{"id"?, "type", "direction", "ratio"}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TileRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: TileType,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default = "default_ratio")]
    pub ratio: f64,
}

impl TileRecord {
    pub fn new(kind: TileType, direction: Direction, ratio: f64) -> Self {
        TileRecord {
            id: None,
            kind,
            direction,
            ratio,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let record: TileRecord = serde_json::from_str(r#"{"type": "curved"}"#).unwrap();
        assert_eq!(record, TileRecord::new(TileType::Curved, Direction::Right, 1.0));
    }

    #[test]
    fn id_is_omitted_when_absent() {
        let record = TileRecord::new(TileType::CurvedEnlarged, Direction::Left, 2.0);
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"type":"curved-enlarged","direction":"left","ratio":2.0}"#
        );
        let record = record.with_id("tile-3");
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"id":"tile-3","type":"curved-enlarged","direction":"left","ratio":2.0}"#
        );
    }

    #[test]
    fn unknown_type_is_rejected() {
        let err = serde_json::from_str::<TileRecord>(r#"{"type": "hairpin"}"#).unwrap_err();
        assert!(err.to_string().contains("invalid tile type"), "{}", err);
    }
}
