//! Core data model: the field of plant slots and the top-level game state.
//!
//! Serde attributes here define the persisted wire form directly: camelCase
//! keys, struct-level defaults for missing fields, and a tolerant slot-list
//! deserializer (see `persistence`).

use serde::{Deserialize, Serialize};

use harvest_logic::constants::{DEFAULT_GRID_SIDE, PRICE_BASE, SEEDLING_START_WATER, START_MONEY};
use harvest_logic::economy::{self, AutomationKind, UpgradeKind};

/// Lifecycle phase of one slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// No plant. Only valid while `alive` is false.
    #[default]
    Empty,
    Seedling,
    Growing,
    Ripe,
    Dead,
}

impl Stage {
    /// Whether fruit can be collected in this stage.
    pub fn is_harvestable(self) -> bool {
        matches!(self, Self::Ripe)
    }
}

/// One grid cell. `alive: false` means the slot is empty and every other
/// field sits at its rest default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlantSlot {
    pub alive: bool,
    pub stage: Stage,
    pub water: f64,
    pub growth: f64,
    /// Per-plant quality factor, fixed at 1 for now. Multiplies the global
    /// quality bonus at display time.
    pub quality: f64,
    pub fruits: u32,
    pub plague: bool,
    pub drought_ticks: u32,
    pub flood_ticks: u32,
}

impl Default for PlantSlot {
    fn default() -> Self {
        Self::empty()
    }
}

impl PlantSlot {
    /// An unoccupied slot at rest defaults.
    pub fn empty() -> Self {
        Self {
            alive: false,
            stage: Stage::Empty,
            water: 0.0,
            growth: 0.0,
            quality: 1.0,
            fruits: 0,
            plague: false,
            drought_ticks: 0,
            flood_ticks: 0,
        }
    }

    /// A freshly planted seedling at half water.
    pub fn seedling() -> Self {
        Self {
            alive: true,
            stage: Stage::Seedling,
            water: SEEDLING_START_WATER,
            ..Self::empty()
        }
    }

    /// Occupied by a living plant (not empty, not dead).
    pub fn is_living(&self) -> bool {
        self.alive && self.stage != Stage::Dead
    }

    /// Kill the plant in place. Dead slots keep blocking the field but
    /// carry no fruit, growth, or plague.
    pub fn kill(&mut self) {
        self.stage = Stage::Dead;
        self.fruits = 0;
        self.growth = 0.0;
        self.plague = false;
    }

    /// Clear back to an empty slot.
    pub fn clear(&mut self) {
        *self = Self::empty();
    }
}

/// Ownership flags for the three automations. Purchased once, never
/// revoked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoFlags {
    pub sprinkler: bool,
    pub picker: bool,
    pub vendor: bool,
}

impl AutoFlags {
    pub fn owns(self, kind: AutomationKind) -> bool {
        match kind {
            AutomationKind::Sprinkler => self.sprinkler,
            AutomationKind::Picker => self.picker,
            AutomationKind::Vendor => self.vendor,
        }
    }

    pub fn set_owned(&mut self, kind: AutomationKind) {
        match kind {
            AutomationKind::Sprinkler => self.sprinkler = true,
            AutomationKind::Picker => self.picker = true,
            AutomationKind::Vendor => self.vendor = true,
        }
    }
}

/// The whole game. One instance, mutated only inside tick processing and
/// explicit command handlers; nothing here is shared or static.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameState {
    pub money: f64,
    pub stock: u32,
    pub tick: u64,
    pub paused: bool,
    pub price_base: f64,
    pub quality_level: u32,
    pub growth_level: u32,
    pub yield_level: u32,
    /// Count of plot purchases. Informational; `field.len()` is the
    /// authoritative slot count.
    pub plot_count: u32,
    pub autos: AutoFlags,
    #[serde(deserialize_with = "crate::persistence::lenient_slots")]
    pub field: Vec<PlantSlot>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: default grid with one seedling planted in slot 0.
    pub fn new() -> Self {
        Self::with_grid(DEFAULT_GRID_SIDE)
    }

    /// Fresh game on a `side x side` grid.
    pub fn with_grid(side: usize) -> Self {
        let mut field = vec![PlantSlot::empty(); side * side];
        if let Some(first) = field.first_mut() {
            *first = PlantSlot::seedling();
        }
        Self {
            money: START_MONEY,
            stock: 0,
            tick: 0,
            paused: false,
            price_base: PRICE_BASE,
            quality_level: 0,
            growth_level: 0,
            yield_level: 0,
            plot_count: 0,
            autos: AutoFlags::default(),
            field,
        }
    }

    /// Slot at `index`, if the index is in range.
    pub fn slot(&self, index: usize) -> Option<&PlantSlot> {
        self.field.get(index)
    }

    /// Total uncollected fruit across the field.
    pub fn ripe_fruit_total(&self) -> u32 {
        self.field
            .iter()
            .filter(|s| s.stage.is_harvestable())
            .map(|s| s.fruits)
            .sum()
    }

    /// Current sale price of one fruit.
    pub fn price_per_fruit(&self) -> f64 {
        economy::price_per_fruit(self.price_base, self.quality_level)
    }

    /// Fruit held back from sales and replanting.
    pub fn reserve(&self) -> u32 {
        economy::reserve_amount(self.stock)
    }

    /// Fruit available to sell right now.
    pub fn sellable(&self) -> u32 {
        economy::sellable_stock(self.stock)
    }

    /// Current level of the given upgrade. Plot purchases count as levels
    /// for pricing.
    pub fn upgrade_level(&self, kind: UpgradeKind) -> u32 {
        match kind {
            UpgradeKind::Quality => self.quality_level,
            UpgradeKind::Growth => self.growth_level,
            UpgradeKind::Yield => self.yield_level,
            UpgradeKind::Plot => self.plot_count,
        }
    }
}
