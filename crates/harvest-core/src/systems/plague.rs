//! Plague system: stress-coupled onset and progression for one slot.

use rand::Rng;

use harvest_logic::plague;

use crate::events::{DeathCause, FieldEvent};
use crate::state::PlantSlot;

/// One tick of plague processing for a living slot that survived the
/// water-death roll. Uninfected plants may catch the plague; infected
/// plants may die of it.
pub fn step_plague(index: usize, slot: &mut PlantSlot, rng: &mut impl Rng) -> Option<FieldEvent> {
    let score = plague::stress_score(slot.drought_ticks, slot.flood_ticks);

    if !slot.plague {
        if rng.gen_bool(plague::onset_chance(score)) {
            slot.plague = true;
            return Some(FieldEvent::PlagueStruck { index });
        }
        return None;
    }

    if rng.gen_bool(plague::kill_chance(score)) {
        slot.kill();
        return Some(FieldEvent::PlantDied {
            index,
            cause: DeathCause::Plague,
        });
    }
    None
}
