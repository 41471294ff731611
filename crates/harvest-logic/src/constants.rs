//! Tuning constants shared by the engine, the command surface, and the
//! simtest harness. Curve coefficients live next to their formulas in
//! [`crate::economy`], [`crate::hydration`], and [`crate::plague`].

// ── Cadence ────────────────────────────────────────────────────────────

/// Wall-clock interval between scheduler ticks.
pub const TICK_MS: u64 = 500;

/// Suggested autosave interval for embedders. The engine itself never
/// writes saves; this is the cadence the reference front end uses.
pub const AUTOSAVE_MS: u64 = 30_000;

/// Only every Nth tick requests a full external refresh. State still
/// advances every tick; this throttles observation only.
pub const REFRESH_EVERY: u64 = 10;

// ── Field ──────────────────────────────────────────────────────────────

/// Side length of the starting grid (4x4 = 16 slots).
pub const DEFAULT_GRID_SIDE: usize = 4;

/// Starting cash balance of a fresh game.
pub const START_MONEY: f64 = 5.0;

/// Base sale price of one fruit before quality upgrades.
pub const PRICE_BASE: f64 = 1.0;

// ── Water ──────────────────────────────────────────────────────────────

/// Water and growth both live on a 0..=100 scale.
pub const WATER_MAX: f64 = 100.0;
pub const GROWTH_MAX: f64 = 100.0;

/// Water a freshly planted seedling starts with.
pub const SEEDLING_START_WATER: f64 = 50.0;

/// Water lost per tick to evaporation, floored at zero.
pub const EVAPORATION_PER_TICK: f64 = 0.8;

/// Minimum water for a plant to count as hydrated and keep growing.
pub const HYDRATED_MIN: f64 = 20.0;

/// Below this line drought stress accumulates.
pub const DROUGHT_BELOW: f64 = 10.0;

/// Above this line flood stress accumulates.
pub const FLOOD_ABOVE: f64 = 90.0;

/// Consecutive over-stress ticks before death rolls begin.
pub const STRESS_DEATH_LIMIT: u32 = 12;

/// Growth points lost per tick while dehydrated.
pub const DEHYDRATED_GROWTH_LOSS: f64 = 0.5;

// ── Lifecycle ──────────────────────────────────────────────────────────

/// Growth at which a seedling becomes a growing plant.
pub const SPROUT_THRESHOLD: f64 = 25.0;

/// Growth at which a plant ripens and sets fruit.
pub const RIPE_THRESHOLD: f64 = 100.0;

// ── Player actions ─────────────────────────────────────────────────────

/// Water added by one manual watering, clamped to [`WATER_MAX`].
pub const MANUAL_WATER_AMOUNT: f64 = 20.0;

/// Water removed by one purge. Purging is free.
pub const PURGE_AMOUNT: f64 = 20.0;

/// Cost per point of water added, manual or sprinkler (0.2 per full 20).
pub const WATER_COST_PER_UNIT: f64 = 0.01;

/// Flat fee for curing one plant's plague.
pub const TREATMENT_FEE: f64 = 2.0;

// ── Automation ─────────────────────────────────────────────────────────

/// The sprinkler tops up any live slot below this water level.
pub const SPRINKLER_TRIGGER_BELOW: f64 = 60.0;

/// Water the sprinkler adds per slot per tick, capped at the headroom
/// to [`WATER_MAX`].
pub const SPRINKLER_FLOW: f64 = 6.0;

// ── Plague ─────────────────────────────────────────────────────────────

/// Stress ticks forgiven before drought/flood counts toward plague risk.
pub const PLAGUE_STRESS_GRACE: u32 = 4;
