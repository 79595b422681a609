//! Error types for the layout engine
//!
//! Malformed numbers never end up here: they are normalized where they enter
//! (absolute values, rounded chunk counts, defaulted optional parameters).
//! These errors cover values of the wrong kind and collection bookkeeping.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Track Errors
// ============================================================================

/// Errors raised by tile models, tile lists and the persisted tile format
#[derive(Error, Diagnostic, Debug)]
pub enum TrackError {
    #[error("The object must be an instance of {expected}")]
    #[diagnostic(code(trackline::type_validation))]
    TypeValidation {
        expected: &'static str,
        #[help]
        found: Option<String>,
    },

    #[error("invalid tile type: {0:?}")]
    #[diagnostic(
        code(trackline::invalid_tile_type),
        help("expected one of \"straight\", \"curved\" or \"curved-enlarged\"")
    )]
    InvalidTileType(String),

    #[error("invalid direction: {0:?}")]
    #[diagnostic(
        code(trackline::invalid_direction),
        help("expected \"left\" or \"right\"")
    )]
    InvalidDirection(String),

    #[error("duplicate tile id: {0}")]
    #[diagnostic(code(trackline::duplicate_id))]
    DuplicateId(String),

    #[error("unknown tile id: {0}")]
    #[diagnostic(code(trackline::unknown_tile))]
    UnknownTile(String),

    #[error("malformed track JSON")]
    #[diagnostic(code(trackline::json))]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_validation_message_names_the_expected_type() {
        let err = TrackError::TypeValidation {
            expected: "TileSpecifications",
            found: None,
        };
        assert_eq!(
            err.to_string(),
            "The object must be an instance of TileSpecifications"
        );
    }

    #[test]
    fn json_errors_read_the_same_for_configs_and_records() {
        let err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert_eq!(TrackError::from(err).to_string(), "malformed track JSON");
    }

    #[test]
    fn invalid_direction_quotes_the_value() {
        let err = TrackError::InvalidDirection("up".to_string());
        assert_eq!(err.to_string(), "invalid direction: \"up\"");
    }
}
