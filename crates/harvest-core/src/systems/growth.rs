//! Lifecycle system: growth integration, stage transitions, and the
//! harvest reset shared by the manual commands and the picker.

use harvest_logic::constants::{RIPE_THRESHOLD, SPROUT_THRESHOLD};
use harvest_logic::hydration;

use crate::state::{PlantSlot, Stage};
use crate::systems::TickRates;

/// Integrate growth for one living slot, then apply stage transitions.
/// Ripening sets the fruit count; growth resets only on harvest, so an
/// unharvested slot can sit ripe at 100 indefinitely.
pub fn apply_growth(slot: &mut PlantSlot, rates: TickRates) {
    let hydrated = hydration::is_hydrated(slot.water);
    slot.growth = hydration::next_growth(slot.growth, hydrated, slot.plague, rates.growth_rate);

    if slot.stage == Stage::Seedling && slot.growth >= SPROUT_THRESHOLD {
        slot.stage = Stage::Growing;
    }
    if slot.growth >= RIPE_THRESHOLD && slot.stage != Stage::Ripe {
        slot.stage = Stage::Ripe;
        slot.fruits = rates.yield_per_cycle;
    }
}

/// Collect a ripe slot's fruit. Returns the amount collected (0 when the
/// slot is not ripe) and starts the next cycle: stage back to Growing,
/// growth back to 0.
pub fn harvest_slot(slot: &mut PlantSlot) -> u32 {
    if slot.stage != Stage::Ripe || slot.fruits == 0 {
        return 0;
    }
    let collected = slot.fruits;
    slot.fruits = 0;
    slot.stage = Stage::Growing;
    slot.growth = 0.0;
    collected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates() -> TickRates {
        TickRates {
            growth_rate: 2.0,
            yield_per_cycle: 3,
        }
    }

    #[test]
    fn test_seedling_sprouts_at_threshold() {
        let mut slot = PlantSlot::seedling();
        slot.growth = 23.5;
        apply_growth(&mut slot, rates());
        assert_eq!(slot.stage, Stage::Growing);
        assert!((slot.growth - 25.5).abs() < 1e-9);
    }

    #[test]
    fn test_seedling_below_threshold_stays() {
        let mut slot = PlantSlot::seedling();
        slot.growth = 10.0;
        apply_growth(&mut slot, rates());
        assert_eq!(slot.stage, Stage::Seedling);
    }

    #[test]
    fn test_ripens_once_with_yield() {
        let mut slot = PlantSlot::seedling();
        slot.stage = Stage::Growing;
        slot.growth = 99.0;
        apply_growth(&mut slot, rates());
        assert_eq!(slot.stage, Stage::Ripe);
        assert_eq!(slot.fruits, 3);

        // Already ripe: fruit is not set again.
        slot.fruits = 1;
        apply_growth(&mut slot, rates());
        assert_eq!(slot.fruits, 1);
    }

    #[test]
    fn test_dehydrated_withers() {
        let mut slot = PlantSlot::seedling();
        slot.water = 10.0;
        slot.growth = 40.0;
        slot.stage = Stage::Growing;
        apply_growth(&mut slot, rates());
        assert!((slot.growth - 39.5).abs() < 1e-9);
    }

    #[test]
    fn test_plague_blocks_growth_but_not_wither() {
        let mut slot = PlantSlot::seedling();
        slot.stage = Stage::Growing;
        slot.plague = true;
        slot.water = 50.0;
        slot.growth = 40.0;
        apply_growth(&mut slot, rates());
        assert!((slot.growth - 40.0).abs() < 1e-9);

        slot.water = 5.0;
        apply_growth(&mut slot, rates());
        assert!((slot.growth - 39.5).abs() < 1e-9);
    }

    #[test]
    fn test_harvest_resets_cycle() {
        let mut slot = PlantSlot::seedling();
        slot.stage = Stage::Ripe;
        slot.growth = 100.0;
        slot.fruits = 3;
        assert_eq!(harvest_slot(&mut slot), 3);
        assert_eq!(slot.stage, Stage::Growing);
        assert!((slot.growth - 0.0).abs() < 1e-9);
        assert_eq!(slot.fruits, 0);
    }

    #[test]
    fn test_harvest_rejects_non_ripe() {
        let mut slot = PlantSlot::seedling();
        slot.fruits = 2; // inconsistent on purpose
        assert_eq!(harvest_slot(&mut slot), 0);
        assert_eq!(slot.stage, Stage::Seedling);
        assert_eq!(slot.fruits, 2);
    }
}
