//! Water system: evaporation, stress accumulation, and the death roll.

use rand::Rng;

use harvest_logic::hydration::{self, LethalStress, WaterBand};

use crate::events::DeathCause;
use crate::state::PlantSlot;

/// Evaporate and advance the drought/flood counters for one living slot.
pub fn apply_water(slot: &mut PlantSlot) {
    slot.water = hydration::evaporate(slot.water);
    let band = WaterBand::from_water(slot.water);
    let (drought, flood) = hydration::step_stress(band, slot.drought_ticks, slot.flood_ticks);
    slot.drought_ticks = drought;
    slot.flood_ticks = flood;
}

/// Roll for death once a stress counter is past its limit. Returns the
/// cause when the plant dies this tick; the caller kills the slot. Only
/// the counter at its limit is rolled, drought first.
pub fn roll_water_death(slot: &PlantSlot, rng: &mut impl Rng) -> Option<DeathCause> {
    let stress = hydration::lethal_stress(slot.drought_ticks, slot.flood_ticks)?;
    let counter = match stress {
        LethalStress::Drought => slot.drought_ticks,
        LethalStress::Flood => slot.flood_ticks,
    };
    if rng.gen_bool(hydration::water_death_chance(counter)) {
        Some(DeathCause::from(stress))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn test_evaporation_and_drought_accumulation() {
        let mut slot = PlantSlot::seedling();
        slot.water = 5.0;
        apply_water(&mut slot);
        assert!((slot.water - 4.2).abs() < 1e-9);
        assert_eq!(slot.drought_ticks, 1);
        assert_eq!(slot.flood_ticks, 0);
    }

    #[test]
    fn test_flood_accumulation_and_safe_decay() {
        let mut slot = PlantSlot::seedling();
        slot.water = 95.0;
        apply_water(&mut slot);
        // 94.2 is still above the flood line.
        assert_eq!(slot.flood_ticks, 1);

        slot.water = 60.0;
        slot.drought_ticks = 2;
        apply_water(&mut slot);
        assert_eq!(slot.drought_ticks, 1);
        assert_eq!(slot.flood_ticks, 0);
    }

    #[test]
    fn test_no_roll_below_limit() {
        let mut slot = PlantSlot::seedling();
        slot.drought_ticks = 11;
        // Forced-hit RNG, but no counter is at the limit yet.
        assert_eq!(roll_water_death(&slot, &mut StepRng::new(0, 0)), None);
    }

    #[test]
    fn test_forced_drought_death() {
        let mut slot = PlantSlot::seedling();
        slot.drought_ticks = 12;
        let cause = roll_water_death(&slot, &mut StepRng::new(0, 0));
        assert_eq!(cause, Some(DeathCause::Drought));
    }

    #[test]
    fn test_drought_rolled_before_flood() {
        let mut slot = PlantSlot::seedling();
        slot.drought_ticks = 13;
        slot.flood_ticks = 14;
        let cause = roll_water_death(&slot, &mut StepRng::new(0, 0));
        assert_eq!(cause, Some(DeathCause::Drought));
    }

    #[test]
    fn test_survives_when_roll_misses() {
        let mut slot = PlantSlot::seedling();
        slot.flood_ticks = 30;
        let cause = roll_water_death(&slot, &mut StepRng::new(u64::MAX, 0));
        assert_eq!(cause, None);
    }
}
