//! Read-only views handed to renderers after ticks and commands.
//!
//! The engine never calls into a renderer; front ends pull a snapshot
//! whenever they want to draw.

use serde::Serialize;

use harvest_logic::economy::{self, AutomationKind, UpgradeKind};

use crate::engine::FarmEngine;
use crate::state::GameState;

/// Asking price for the next level of one upgrade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct UpgradeQuote {
    pub kind: UpgradeKind,
    pub level: u32,
    pub price: f64,
}

/// Price and ownership of one automation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AutomationQuote {
    pub kind: AutomationKind,
    pub price: f64,
    pub owned: bool,
}

/// Derived economy values shown next to the raw state.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EconomyView {
    pub price_per_fruit: f64,
    pub reserve: u32,
    pub sellable: u32,
    pub growth_rate: f64,
    pub yield_per_cycle: u32,
    /// Global quality bonus; multiply by a slot's own factor for its
    /// display quality.
    pub quality_multiplier: f64,
    pub upgrades: Vec<UpgradeQuote>,
    pub automations: Vec<AutomationQuote>,
}

impl EconomyView {
    pub fn of(state: &GameState) -> Self {
        Self {
            price_per_fruit: state.price_per_fruit(),
            reserve: state.reserve(),
            sellable: state.sellable(),
            growth_rate: economy::growth_rate(state.growth_level),
            yield_per_cycle: economy::yield_per_cycle(state.yield_level),
            quality_multiplier: economy::effective_quality(1.0, state.quality_level),
            upgrades: UpgradeKind::ALL
                .iter()
                .map(|&kind| {
                    let level = state.upgrade_level(kind);
                    UpgradeQuote {
                        kind,
                        level,
                        price: economy::next_upgrade_price(kind, level),
                    }
                })
                .collect(),
            automations: AutomationKind::ALL
                .iter()
                .map(|&kind| AutomationQuote {
                    kind,
                    price: kind.price(),
                    owned: state.autos.owns(kind),
                })
                .collect(),
        }
    }
}

/// One observation of the game: the raw state plus everything derived
/// from it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot<'a> {
    pub state: &'a GameState,
    pub economy: EconomyView,
}

impl FarmEngine {
    /// Snapshot the current state with its derived economy values.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            state: self.state(),
            economy: EconomyView::of(self.state()),
        }
    }
}
