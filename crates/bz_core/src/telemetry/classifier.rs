//! Event classification for raw telemetry records.
//!
//! Telemetry events are an open schema: every record carries a `_T`
//! discriminant and an event-specific payload. Only two kinds matter to the
//! extractor; every other kind is ignored rather than rejected. For the two
//! consumed kinds, a missing or mistyped required field is a malformed-event
//! error and never silently defaulted.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::types::{Circle, Point};
use crate::error::{Result, TelemetryError};

/// Event tag for periodic game-state records.
pub const GAME_STATE_EVENT: &str = "LogGameStatePeriodic";

/// Event tag for per-tick player position records.
pub const PLAYER_POSITION_EVENT: &str = "LogPlayerPosition";

/// One classified telemetry record.
#[derive(Debug, Clone, PartialEq)]
pub enum Observation {
    /// Safe-zone announcement carrying the current circle.
    Zone(Circle),
    /// Player position sample with the match-phase gate value.
    Position { point: Point, is_game: f64 },
    /// Any event kind the extractor does not consume.
    Ignored,
}

// Wire shapes for the two consumed event kinds. Deserialization reads only
// the paths named here; unknown sibling fields pass through untouched.

#[derive(Deserialize)]
struct GameStateEvent {
    #[serde(rename = "gameState")]
    game_state: GameState,
}

#[derive(Deserialize)]
struct GameState {
    #[serde(rename = "safetyZonePosition")]
    safety_zone_position: WorldLocation,
    #[serde(rename = "safetyZoneRadius")]
    safety_zone_radius: f64,
}

#[derive(Deserialize)]
struct PlayerPositionEvent {
    character: Character,
    common: Common,
}

#[derive(Deserialize)]
struct Character {
    location: WorldLocation,
}

#[derive(Deserialize)]
struct Common {
    #[serde(rename = "isGame")]
    is_game: f64,
}

#[derive(Deserialize)]
struct WorldLocation {
    x: f64,
    y: f64,
}

/// Classify one raw event record.
///
/// Records without a string `_T` tag, or with a tag the extractor does not
/// consume, are [`Observation::Ignored`].
pub fn classify(event: &Value) -> Result<Observation> {
    match event.get("_T").and_then(Value::as_str) {
        Some(GAME_STATE_EVENT) => {
            let payload: GameStateEvent = decode(GAME_STATE_EVENT, event)?;
            let state = payload.game_state;
            Ok(Observation::Zone(Circle {
                x: state.safety_zone_position.x,
                y: state.safety_zone_position.y,
                r: state.safety_zone_radius,
            }))
        }
        Some(PLAYER_POSITION_EVENT) => {
            let payload: PlayerPositionEvent = decode(PLAYER_POSITION_EVENT, event)?;
            Ok(Observation::Position {
                point: Point {
                    x: payload.character.location.x,
                    y: payload.character.location.y,
                },
                is_game: payload.common.is_game,
            })
        }
        _ => Ok(Observation::Ignored),
    }
}

fn decode<T: DeserializeOwned>(kind: &'static str, event: &Value) -> Result<T> {
    T::deserialize(event).map_err(|err| TelemetryError::MalformedEvent {
        kind,
        reason: err.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_game_state() {
        let event = json!({
            "_T": "LogGameStatePeriodic",
            "gameState": {
                "elapsedTime": 312,
                "safetyZonePosition": {"x": 400000.0, "y": 380000.0, "z": 0.0},
                "safetyZoneRadius": 250000.0,
            },
        });

        let observation = classify(&event).unwrap();

        assert_eq!(
            observation,
            Observation::Zone(Circle { x: 400000.0, y: 380000.0, r: 250000.0 })
        );
    }

    #[test]
    fn test_classify_player_position() {
        let event = json!({
            "_T": "LogPlayerPosition",
            "character": {
                "name": "tracked-player",
                "location": {"x": 1200.5, "y": 3400.25, "z": 150.0},
            },
            "common": {"isGame": 0.1},
        });

        let observation = classify(&event).unwrap();

        assert_eq!(
            observation,
            Observation::Position { point: Point { x: 1200.5, y: 3400.25 }, is_game: 0.1 }
        );
    }

    #[test]
    fn test_integer_coordinates_are_accepted() {
        // The CDN emits whole-number coordinates without a decimal point.
        let event = json!({
            "_T": "LogGameStatePeriodic",
            "gameState": {
                "safetyZonePosition": {"x": 400000, "y": 380000},
                "safetyZoneRadius": 250000,
            },
        });

        let observation = classify(&event).unwrap();

        assert_eq!(
            observation,
            Observation::Zone(Circle { x: 400000.0, y: 380000.0, r: 250000.0 })
        );
    }

    #[test]
    fn test_unknown_tag_is_ignored() {
        let event = json!({"_T": "LogItemPickup", "item": {"itemId": "Item_Weapon_AK47_C"}});
        assert_eq!(classify(&event).unwrap(), Observation::Ignored);
    }

    #[test]
    fn test_missing_tag_is_ignored() {
        assert_eq!(classify(&json!({"foo": 1})).unwrap(), Observation::Ignored);
        assert_eq!(classify(&json!({"_T": 42})).unwrap(), Observation::Ignored);
        assert_eq!(classify(&json!(null)).unwrap(), Observation::Ignored);
    }

    #[test]
    fn test_missing_radius_is_malformed() {
        let event = json!({
            "_T": "LogGameStatePeriodic",
            "gameState": {
                "safetyZonePosition": {"x": 1.0, "y": 2.0},
            },
        });

        let err = classify(&event).unwrap_err();
        assert!(
            matches!(err, TelemetryError::MalformedEvent { kind: GAME_STATE_EVENT, .. }),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_mistyped_is_game_is_malformed() {
        let event = json!({
            "_T": "LogPlayerPosition",
            "character": {"location": {"x": 1.0, "y": 2.0}},
            "common": {"isGame": "0.1"},
        });

        let err = classify(&event).unwrap_err();
        assert!(
            matches!(err, TelemetryError::MalformedEvent { kind: PLAYER_POSITION_EVENT, .. }),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_missing_location_is_malformed() {
        let event = json!({
            "_T": "LogPlayerPosition",
            "character": {"name": "no-location"},
            "common": {"isGame": 0.1},
        });

        assert!(classify(&event).is_err());
    }
}
