//! Harvest Core - Tick-Driven Farm Simulation Engine
//!
//! A grid of plant slots evolves under water, growth, disease, and economic
//! rules. One fixed-cadence tick advances every slot in index order, then
//! runs the purchased automations; everything else happens through explicit
//! commands that return typed results for a front end to display.
//!
//! # Architecture
//!
//! - **State**: `GameState` owns the field of `PlantSlot`s plus money,
//!   stock, and upgrade levels. No ambient/static state anywhere.
//! - **Systems**: per-tick passes over slots (water, growth, plague) and
//!   the automation passes, all free functions.
//! - **Engine**: `FarmEngine` owns the state and the single RNG, drives
//!   ticks, and hosts the command surface.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use harvest_core::prelude::*;
//! use harvest_logic::constants::TICK_MS;
//!
//! let mut engine = FarmEngine::new();
//!
//! loop {
//!     if let Ok(report) = engine.tick() {
//!         if report.refresh {
//!             // redraw from engine.snapshot()
//!         }
//!     }
//!     std::thread::sleep(Duration::from_millis(TICK_MS));
//! }
//! ```

pub mod commands;
pub mod engine;
pub mod events;
pub mod persistence;
pub mod snapshot;
pub mod state;
pub mod systems;
pub mod transactions;

/// Commonly used types for convenient importing
pub mod prelude {
    pub use crate::commands::{CommandError, WaterReceipt};
    pub use crate::engine::FarmEngine;
    pub use crate::events::{DeathCause, FieldEvent, TickReport};
    pub use crate::persistence::{from_json, load_or_default, to_json, SaveError};
    pub use crate::snapshot::{AutomationQuote, EconomyView, Snapshot, UpgradeQuote};
    pub use crate::state::{AutoFlags, GameState, PlantSlot, Stage};
    pub use crate::transactions::SaleReceipt;
    pub use harvest_logic::economy::{AutomationKind, UpgradeKind};
}
