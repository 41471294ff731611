//! Pure hydration and stress rules: evaporation, the drought/flood bands,
//! the water-death curve, and hydration-gated growth integration.

use crate::constants::{
    DEHYDRATED_GROWTH_LOSS, DROUGHT_BELOW, EVAPORATION_PER_TICK, FLOOD_ABOVE, GROWTH_MAX,
    HYDRATED_MIN, STRESS_DEATH_LIMIT,
};

/// Death chance on the first tick at the stress limit.
const DEATH_CHANCE_BASE: f64 = 0.05;

/// Extra death chance per tick spent over the limit.
const DEATH_CHANCE_PER_TICK: f64 = 0.01;

/// Death chance never exceeds a coin flip.
const DEATH_CHANCE_CAP: f64 = 0.5;

/// Which stress band a slot's water level falls in this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaterBand {
    /// Below 10: drought stress accumulates.
    Drought,
    /// The safe band [10, 90]: both stress counters decay.
    Safe,
    /// Above 90: flood stress accumulates.
    Flood,
}

impl WaterBand {
    pub fn from_water(water: f64) -> Self {
        if water < DROUGHT_BELOW {
            Self::Drought
        } else if water > FLOOD_ABOVE {
            Self::Flood
        } else {
            Self::Safe
        }
    }
}

/// One tick of passive evaporation, floored at zero.
pub fn evaporate(water: f64) -> f64 {
    (water - EVAPORATION_PER_TICK).max(0.0)
}

/// Advance the drought/flood counters one tick for the given band.
/// Only one counter can rise per tick; both decay together when safe.
pub fn step_stress(band: WaterBand, drought_ticks: u32, flood_ticks: u32) -> (u32, u32) {
    match band {
        WaterBand::Drought => (drought_ticks + 1, flood_ticks),
        WaterBand::Flood => (drought_ticks, flood_ticks + 1),
        WaterBand::Safe => (
            drought_ticks.saturating_sub(1),
            flood_ticks.saturating_sub(1),
        ),
    }
}

/// The water stress that has reached lethal levels, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LethalStress {
    Drought,
    Flood,
}

/// Whether a stress counter has hit the death limit this tick. Drought is
/// checked first when both are over.
pub fn lethal_stress(drought_ticks: u32, flood_ticks: u32) -> Option<LethalStress> {
    if drought_ticks >= STRESS_DEATH_LIMIT {
        Some(LethalStress::Drought)
    } else if flood_ticks >= STRESS_DEATH_LIMIT {
        Some(LethalStress::Flood)
    } else {
        None
    }
}

/// Death chance for a counter at or past the limit: 5% plus 1% per tick
/// over, capped at 50%.
pub fn water_death_chance(counter: u32) -> f64 {
    let stress = (counter.saturating_sub(STRESS_DEATH_LIMIT) + 1) as f64;
    (DEATH_CHANCE_BASE + DEATH_CHANCE_PER_TICK * stress).min(DEATH_CHANCE_CAP)
}

/// Whether the plant holds enough water to grow.
pub fn is_hydrated(water: f64) -> bool {
    water >= HYDRATED_MIN
}

/// One tick of growth integration. Hydrated healthy plants gain `rate`;
/// dehydrated plants wither regardless of plague; a plagued but hydrated
/// plant merely holds its growth.
pub fn next_growth(growth: f64, hydrated: bool, plagued: bool, rate: f64) -> f64 {
    if !hydrated {
        (growth - DEHYDRATED_GROWTH_LOSS).max(0.0)
    } else if plagued {
        growth
    } else {
        (growth + rate).min(GROWTH_MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaporation_floors_at_zero() {
        assert!((evaporate(50.0) - 49.2).abs() < 1e-9);
        assert!((evaporate(0.5) - 0.0).abs() < 1e-9);
        assert!((evaporate(0.0) - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_band_edges() {
        assert_eq!(WaterBand::from_water(9.99), WaterBand::Drought);
        assert_eq!(WaterBand::from_water(10.0), WaterBand::Safe);
        assert_eq!(WaterBand::from_water(50.0), WaterBand::Safe);
        assert_eq!(WaterBand::from_water(90.0), WaterBand::Safe);
        assert_eq!(WaterBand::from_water(90.01), WaterBand::Flood);
    }

    #[test]
    fn test_stress_accumulates_exclusively() {
        assert_eq!(step_stress(WaterBand::Drought, 3, 2), (4, 2));
        assert_eq!(step_stress(WaterBand::Flood, 3, 2), (3, 3));
    }

    #[test]
    fn test_safe_band_decays_both_counters() {
        assert_eq!(step_stress(WaterBand::Safe, 3, 2), (2, 1));
        assert_eq!(step_stress(WaterBand::Safe, 0, 0), (0, 0));
    }

    #[test]
    fn test_lethal_stress_prefers_drought() {
        assert_eq!(lethal_stress(11, 11), None);
        assert_eq!(lethal_stress(12, 0), Some(LethalStress::Drought));
        assert_eq!(lethal_stress(0, 12), Some(LethalStress::Flood));
        assert_eq!(lethal_stress(14, 13), Some(LethalStress::Drought));
    }

    #[test]
    fn test_death_chance_starts_at_six_percent() {
        // First tick at the limit: stress 1 -> 0.05 + 0.01.
        assert!((water_death_chance(12) - 0.06).abs() < 1e-9);
        assert!((water_death_chance(13) - 0.07).abs() < 1e-9);
    }

    #[test]
    fn test_death_chance_monotone_and_capped() {
        let mut prev = 0.0;
        for counter in 12..90 {
            let chance = water_death_chance(counter);
            assert!(chance >= prev, "chance must not fall at counter {counter}");
            assert!(chance <= 0.5);
            prev = chance;
        }
        assert!((water_death_chance(56) - 0.5).abs() < 1e-9);
        assert!((water_death_chance(80) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_hydration_threshold() {
        assert!(is_hydrated(20.0));
        assert!(!is_hydrated(19.99));
    }

    #[test]
    fn test_growth_gate() {
        // Hydrated and healthy: grows by the rate, clamped to 100.
        assert!((next_growth(10.0, true, false, 2.0) - 12.0).abs() < 1e-9);
        assert!((next_growth(99.5, true, false, 2.0) - 100.0).abs() < 1e-9);
        // Dehydrated: withers at 0.5/tick regardless of plague, floored at 0.
        assert!((next_growth(10.0, false, false, 2.0) - 9.5).abs() < 1e-9);
        assert!((next_growth(10.0, false, true, 2.0) - 9.5).abs() < 1e-9);
        assert!((next_growth(0.2, false, false, 2.0) - 0.0).abs() < 1e-9);
        // Plagued but hydrated: holds steady.
        assert!((next_growth(40.0, true, true, 2.0) - 40.0).abs() < 1e-9);
    }
}
