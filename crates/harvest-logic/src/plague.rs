//! Pure plague rules: stress-coupled onset and kill probabilities.
//!
//! The plague never strikes a dead plant and never reduces growth on its
//! own; it blocks growth until treated, and each tick it may kill. Both
//! probabilities scale with accumulated water stress.

use crate::constants::PLAGUE_STRESS_GRACE;

/// Onset chance for an unstressed plant.
const ONSET_BASE: f64 = 0.001;

/// Extra onset chance per point of stress score.
const ONSET_PER_STRESS: f64 = 0.0005;

/// Onset chance cap.
const ONSET_CAP: f64 = 0.05;

/// Kill chance for an infected, unstressed plant.
const KILL_BASE: f64 = 0.01;

/// Extra kill chance per point of stress score.
const KILL_PER_STRESS: f64 = 0.002;

/// Kill chance cap.
const KILL_CAP: f64 = 0.25;

/// Combined drought and flood stress past the grace window. Each counter
/// contributes only the ticks beyond the first four.
pub fn stress_score(drought_ticks: u32, flood_ticks: u32) -> u32 {
    drought_ticks.saturating_sub(PLAGUE_STRESS_GRACE)
        + flood_ticks.saturating_sub(PLAGUE_STRESS_GRACE)
}

/// Chance an uninfected plant catches the plague this tick.
pub fn onset_chance(stress_score: u32) -> f64 {
    (ONSET_BASE + ONSET_PER_STRESS * stress_score as f64).min(ONSET_CAP)
}

/// Chance an infected plant dies this tick.
pub fn kill_chance(stress_score: u32) -> f64 {
    (KILL_BASE + KILL_PER_STRESS * stress_score as f64).min(KILL_CAP)
}
