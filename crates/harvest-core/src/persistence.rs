//! Save and load: one self-describing JSON blob, tolerant on the way in.
//!
//! The schema is versioned by field presence alone. Missing fields take
//! their fresh-game defaults, a `null` or corrupt slot degrades to a
//! fresh empty slot, and a wholly unreadable blob falls back to a fresh
//! game. [`load_or_default`] never fails the caller.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::state::{GameState, PlantSlot};

/// Errors surfaced by the explicit save/load calls.
#[derive(Debug)]
pub enum SaveError {
    Json(serde_json::Error),
}

impl From<serde_json::Error> for SaveError {
    fn from(e: serde_json::Error) -> Self {
        SaveError::Json(e)
    }
}

impl std::fmt::Display for SaveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaveError::Json(e) => write!(f, "JSON error: {}", e),
        }
    }
}

impl std::error::Error for SaveError {}

/// Serialize the whole game to its persisted JSON form.
pub fn to_json(state: &GameState) -> Result<String, SaveError> {
    Ok(serde_json::to_string(state)?)
}

/// Parse a persisted blob. Missing fields are defaulted and corrupt slots
/// degrade to empty; only a blob that is not a JSON object at all fails.
pub fn from_json(blob: &str) -> Result<GameState, SaveError> {
    Ok(serde_json::from_str(blob)?)
}

/// Parse a persisted blob, falling back to a fresh game if the blob is
/// unreadable. The fallback is logged, never raised.
pub fn load_or_default(blob: &str) -> GameState {
    match from_json(blob) {
        Ok(state) => state,
        Err(e) => {
            log::warn!("save blob unreadable, starting fresh: {}", e);
            GameState::default()
        }
    }
}

/// Deserialize the slot list tolerantly: a corrupt or `null` element
/// becomes a fresh empty slot instead of failing the whole load.
pub(crate) fn lenient_slots<'de, D>(deserializer: D) -> Result<Vec<PlantSlot>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Vec<Value> = Vec::deserialize(deserializer)?;
    Ok(raw
        .into_iter()
        .map(|v| serde_json::from_value(v).unwrap_or_else(|_| PlantSlot::empty()))
        .collect())
}
