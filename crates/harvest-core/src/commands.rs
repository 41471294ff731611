//! The command surface: every player-facing mutation as a method on
//! [`FarmEngine`], each returning a typed result the renderer can show.
//!
//! Every failure path leaves the state unchanged. While paused, every
//! command except `set_paused` is declined.

use harvest_logic::constants::{MANUAL_WATER_AMOUNT, PURGE_AMOUNT, TREATMENT_FEE, WATER_MAX};
use harvest_logic::economy::{self, AutomationKind, UpgradeKind};

use crate::engine::FarmEngine;
use crate::state::{GameState, PlantSlot, Stage};
use crate::systems::harvest_slot;
use crate::transactions::{self, SaleReceipt};

/// Why a command was declined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    /// The game is paused; only unpausing is allowed.
    Paused,
    /// Not enough money for a purchase or treatment.
    InsufficientFunds,
    /// Selling or planting would dip into the stock reserve.
    ReserveProtected,
    /// No ripe fruit to collect.
    NothingToHarvest,
    /// Slot index past the end of the field.
    NoSuchSlot,
    /// The slot has no plant.
    EmptySlot,
    /// The plant is dead; it only responds to removal.
    DeadPlant,
    /// The slot already hosts a plant.
    SlotOccupied,
    /// The plant has no plague to treat.
    NotInfected,
    /// The automation was already purchased.
    AlreadyOwned,
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let msg = match self {
            CommandError::Paused => "game is paused",
            CommandError::InsufficientFunds => "not enough money",
            CommandError::ReserveProtected => "the stock reserve cannot be spent",
            CommandError::NothingToHarvest => "nothing to harvest",
            CommandError::NoSuchSlot => "no slot at that index",
            CommandError::EmptySlot => "the slot is empty",
            CommandError::DeadPlant => "the plant is dead",
            CommandError::SlotOccupied => "the slot is already planted",
            CommandError::NotInfected => "the plant is healthy",
            CommandError::AlreadyOwned => "automation already owned",
        };
        write!(f, "{}", msg)
    }
}

impl std::error::Error for CommandError {}

/// Receipt for one watering action.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaterReceipt {
    /// Water points actually added after the 100 cap.
    pub added: f64,
    /// Fee charged for the added water, rounded to a millionth.
    pub cost: f64,
}

impl FarmEngine {
    fn guard_unpaused(&self) -> Result<(), CommandError> {
        if self.state.paused {
            Err(CommandError::Paused)
        } else {
            Ok(())
        }
    }

    /// Slot that must hold a living plant.
    fn living_slot_mut(&mut self, index: usize) -> Result<&mut PlantSlot, CommandError> {
        let slot = self
            .state
            .field
            .get_mut(index)
            .ok_or(CommandError::NoSuchSlot)?;
        if !slot.alive {
            Err(CommandError::EmptySlot)
        } else if slot.stage == Stage::Dead {
            Err(CommandError::DeadPlant)
        } else {
            Ok(slot)
        }
    }

    /// Pause or resume. The one command that always works; returns the
    /// new flag.
    pub fn set_paused(&mut self, paused: bool) -> bool {
        self.state.paused = paused;
        self.state.paused
    }

    /// Water one plant by hand: +20 up to the cap. The fee is charged per
    /// unit actually added, with no solvency check - the balance can go
    /// negative.
    pub fn water(&mut self, index: usize) -> Result<WaterReceipt, CommandError> {
        self.guard_unpaused()?;
        let slot = self.living_slot_mut(index)?;
        let added = MANUAL_WATER_AMOUNT.min(WATER_MAX - slot.water);
        slot.water += added;
        let cost = economy::water_cost(added);
        self.state.money -= cost;
        Ok(WaterReceipt { added, cost })
    }

    /// Drain 20 water from one plant. Free.
    pub fn purge(&mut self, index: usize) -> Result<(), CommandError> {
        self.guard_unpaused()?;
        let slot = self.living_slot_mut(index)?;
        slot.water = (slot.water - PURGE_AMOUNT).max(0.0);
        Ok(())
    }

    /// Collect the fruit of one ripe plant into stock.
    pub fn harvest_one(&mut self, index: usize) -> Result<u32, CommandError> {
        self.guard_unpaused()?;
        let slot = self.living_slot_mut(index)?;
        let collected = harvest_slot(slot);
        if collected == 0 {
            return Err(CommandError::NothingToHarvest);
        }
        self.state.stock += collected;
        Ok(collected)
    }

    /// Collect every ripe plant on the field.
    pub fn harvest_all(&mut self) -> Result<u32, CommandError> {
        self.guard_unpaused()?;
        let mut collected = 0;
        for slot in &mut self.state.field {
            collected += harvest_slot(slot);
        }
        if collected == 0 {
            return Err(CommandError::NothingToHarvest);
        }
        self.state.stock += collected;
        Ok(collected)
    }

    /// Clear a slot back to empty, living plant or dead.
    pub fn remove_slot(&mut self, index: usize) -> Result<(), CommandError> {
        self.guard_unpaused()?;
        let slot = self
            .state
            .field
            .get_mut(index)
            .ok_or(CommandError::NoSuchSlot)?;
        if !slot.alive {
            return Err(CommandError::EmptySlot);
        }
        slot.clear();
        Ok(())
    }

    /// Plant a seedling in an empty slot, consuming one fruit from stock.
    pub fn plant_from_stock(&mut self, index: usize) -> Result<(), CommandError> {
        self.guard_unpaused()?;
        let slot = self.state.field.get(index).ok_or(CommandError::NoSuchSlot)?;
        if slot.alive {
            return Err(CommandError::SlotOccupied);
        }
        if !transactions::take_seed(&mut self.state) {
            return Err(CommandError::ReserveProtected);
        }
        self.state.field[index] = PlantSlot::seedling();
        Ok(())
    }

    /// Cure one plant's plague for the flat treatment fee.
    pub fn treat_plague(&mut self, index: usize) -> Result<(), CommandError> {
        self.guard_unpaused()?;
        let slot = self.living_slot_mut(index)?;
        if !slot.plague {
            return Err(CommandError::NotInfected);
        }
        if self.state.money < TREATMENT_FEE {
            return Err(CommandError::InsufficientFunds);
        }
        self.state.money -= TREATMENT_FEE;
        self.state.field[index].plague = false;
        Ok(())
    }

    /// Buy the next level of an upgrade at the ladder price. The plot
    /// upgrade also appends one freshly planted slot to the field.
    /// Returns the price paid.
    pub fn buy_upgrade(&mut self, kind: UpgradeKind) -> Result<f64, CommandError> {
        self.guard_unpaused()?;
        let level = self.state.upgrade_level(kind);
        let price = economy::next_upgrade_price(kind, level);
        if self.state.money < price {
            return Err(CommandError::InsufficientFunds);
        }
        self.state.money -= price;
        match kind {
            UpgradeKind::Quality => self.state.quality_level += 1,
            UpgradeKind::Growth => self.state.growth_level += 1,
            UpgradeKind::Yield => self.state.yield_level += 1,
            UpgradeKind::Plot => {
                self.state.plot_count += 1;
                self.state.field.push(PlantSlot::seedling());
            }
        }
        Ok(price)
    }

    /// Buy an automation. Each can be owned once; the flag never reverts.
    /// Returns the price paid.
    pub fn buy_automation(&mut self, kind: AutomationKind) -> Result<f64, CommandError> {
        self.guard_unpaused()?;
        if self.state.autos.owns(kind) {
            return Err(CommandError::AlreadyOwned);
        }
        let price = kind.price();
        if self.state.money < price {
            return Err(CommandError::InsufficientFunds);
        }
        self.state.money -= price;
        self.state.autos.set_owned(kind);
        Ok(price)
    }

    /// Sell up to `amount` fruit at the current price, keeping the
    /// reserve intact.
    pub fn sell(&mut self, amount: u32) -> Result<SaleReceipt, CommandError> {
        self.guard_unpaused()?;
        transactions::sell_up_to(&mut self.state, amount).ok_or(CommandError::ReserveProtected)
    }

    /// Sell everything above the reserve.
    pub fn sell_all(&mut self) -> Result<SaleReceipt, CommandError> {
        self.sell(u32::MAX)
    }

    /// Start over: replace the whole state with a fresh game.
    pub fn reset(&mut self) -> Result<(), CommandError> {
        self.guard_unpaused()?;
        self.state = GameState::new();
        Ok(())
    }
}
