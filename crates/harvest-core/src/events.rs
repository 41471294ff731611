//! Tick events: what the field reports outward each tick.
//!
//! Events exist for the embedder's log feed; nothing inside the engine
//! reacts to them.

use serde::{Deserialize, Serialize};

use harvest_logic::hydration::LethalStress;

/// Why a plant died.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeathCause {
    Drought,
    Flood,
    Plague,
}

impl From<LethalStress> for DeathCause {
    fn from(stress: LethalStress) -> Self {
        match stress {
            LethalStress::Drought => Self::Drought,
            LethalStress::Flood => Self::Flood,
        }
    }
}

/// One observable occurrence during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FieldEvent {
    /// A plant died and now blocks its slot until removed.
    PlantDied { index: usize, cause: DeathCause },
    /// An uninfected plant caught the plague.
    PlagueStruck { index: usize },
    /// The vendor automation liquidated stock above the reserve.
    VendorSale { sold: u32, proceeds: f64 },
}

/// Everything one tick reports back to the embedder.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickReport {
    /// Tick counter value after this tick.
    pub tick: u64,
    /// True every 10th tick: the embedder should do a full redraw. State
    /// advances every tick regardless.
    pub refresh: bool,
    pub events: Vec<FieldEvent>,
}
