//! Automation passes: sprinkler, picker, vendor. Run after the per-slot
//! updates each tick, in that fixed order, gated by the ownership flags.

use harvest_logic::constants::{SPRINKLER_FLOW, SPRINKLER_TRIGGER_BELOW, WATER_MAX};
use harvest_logic::economy;

use crate::events::FieldEvent;
use crate::state::GameState;
use crate::systems::harvest_slot;
use crate::transactions;

/// Sprinkler: top up every living slot below the trigger level. The fee
/// is charged per unit of water with no solvency check, so the balance
/// can run negative.
pub fn sprinkler_pass(state: &mut GameState) {
    if !state.autos.sprinkler {
        return;
    }
    for slot in &mut state.field {
        if !slot.is_living() || slot.water >= SPRINKLER_TRIGGER_BELOW {
            continue;
        }
        let add = SPRINKLER_FLOW.min(WATER_MAX - slot.water);
        if add <= 0.0 {
            continue;
        }
        slot.water += add;
        state.money -= economy::water_cost(add);
    }
}

/// Picker: harvest every ripe slot, same effect as harvesting each by
/// hand in index order. Returns the fruit collected.
pub fn picker_pass(state: &mut GameState) -> u32 {
    if !state.autos.picker {
        return 0;
    }
    let mut collected = 0;
    for slot in &mut state.field {
        collected += harvest_slot(slot);
    }
    state.stock += collected;
    collected
}

/// Vendor: liquidate everything above the reserve at the current price.
pub fn vendor_pass(state: &mut GameState, events: &mut Vec<FieldEvent>) {
    if !state.autos.vendor {
        return;
    }
    if let Some(sale) = transactions::sell_up_to(state, u32::MAX) {
        events.push(FieldEvent::VendorSale {
            sold: sale.sold,
            proceeds: sale.proceeds,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{PlantSlot, Stage};

    #[test]
    fn test_passes_inactive_without_flags() {
        let mut state = GameState::new();
        state.field[0].water = 10.0;
        state.field[1] = PlantSlot::seedling();
        state.field[1].stage = Stage::Ripe;
        state.field[1].fruits = 2;
        state.stock = 20;
        let before = state.clone();

        let mut events = Vec::new();
        sprinkler_pass(&mut state);
        picker_pass(&mut state);
        vendor_pass(&mut state, &mut events);
        assert_eq!(state, before);
        assert!(events.is_empty());
    }

    #[test]
    fn test_sprinkler_tops_up_and_charges() {
        let mut state = GameState::new();
        state.autos.sprinkler = true;
        state.field[0].water = 30.0;
        state.field[1] = PlantSlot::seedling();
        state.field[1].water = 60.0; // at the trigger level, skipped
        state.field[2] = PlantSlot::seedling();
        state.field[2].water = 97.0; // above trigger, skipped

        sprinkler_pass(&mut state);
        assert!((state.field[0].water - 36.0).abs() < 1e-9);
        assert!((state.field[1].water - 60.0).abs() < 1e-9);
        assert!((state.field[2].water - 97.0).abs() < 1e-9);
        assert!((state.money - (5.0 - 0.06)).abs() < 1e-9);
    }

    #[test]
    fn test_sprinkler_caps_at_full_water() {
        let mut state = GameState::new();
        state.autos.sprinkler = true;
        state.field[0].water = 58.0;
        // Trigger is < 60, headroom 42: full 6 units flow.
        sprinkler_pass(&mut state);
        assert!((state.field[0].water - 64.0).abs() < 1e-9);
    }

    #[test]
    fn test_sprinkler_runs_money_negative() {
        let mut state = GameState::new();
        state.autos.sprinkler = true;
        state.money = 0.0;
        state.field[0].water = 10.0;
        sprinkler_pass(&mut state);
        assert!(state.money < 0.0);
    }

    #[test]
    fn test_sprinkler_skips_dead_and_empty() {
        let mut state = GameState::new();
        state.autos.sprinkler = true;
        state.field[0].kill();
        state.field[0].water = 10.0;
        sprinkler_pass(&mut state);
        assert!((state.field[0].water - 10.0).abs() < 1e-9);
        assert!((state.field[1].water - 0.0).abs() < 1e-9);
        assert!((state.money - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_picker_collects_all_ripe() {
        let mut state = GameState::new();
        state.autos.picker = true;
        for i in 0..3 {
            state.field[i] = PlantSlot::seedling();
            state.field[i].stage = Stage::Ripe;
            state.field[i].growth = 100.0;
            state.field[i].fruits = 2;
        }
        let collected = picker_pass(&mut state);
        assert_eq!(collected, 6);
        assert_eq!(state.stock, 6);
        for i in 0..3 {
            assert_eq!(state.field[i].stage, Stage::Growing);
            assert_eq!(state.field[i].fruits, 0);
            assert!((state.field[i].growth - 0.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_vendor_sells_down_to_reserve() {
        let mut state = GameState::new();
        state.autos.vendor = true;
        state.stock = 20;
        let mut events = Vec::new();
        vendor_pass(&mut state, &mut events);
        // Reserve of 20 is 2; 18 sold at price 1.
        assert_eq!(state.stock, 2);
        assert!((state.money - 23.0).abs() < 1e-9);
        assert_eq!(
            events,
            vec![FieldEvent::VendorSale {
                sold: 18,
                proceeds: 18.0,
            }]
        );
    }

    #[test]
    fn test_vendor_silent_when_nothing_sellable() {
        let mut state = GameState::new();
        state.autos.vendor = true;
        state.stock = 1; // reserve is also 1
        let mut events = Vec::new();
        vendor_pass(&mut state, &mut events);
        assert_eq!(state.stock, 1);
        assert!(events.is_empty());
    }
}
