//! Pure economy rules: fruit pricing, growth and yield curves, the stock
//! reserve, and the geometric upgrade price ladder.

use serde::{Deserialize, Serialize};

use crate::constants::WATER_COST_PER_UNIT;

/// Price bonus per quality level (+25% of base each).
const QUALITY_PRICE_STEP: f64 = 0.25;

/// Growth-rate bonus per growth level (+25% of base each).
const GROWTH_RATE_STEP: f64 = 0.25;

/// Growth points per tick at level 0.
const GROWTH_RATE_BASE: f64 = 2.0;

/// Fruit per ripening cycle at level 0.
const YIELD_BASE: f64 = 2.0;

/// Yield bonus per yield level (+40% of base each).
const YIELD_STEP: f64 = 0.4;

/// Fraction of stock held back from sales and replanting.
const RESERVE_FRACTION: f64 = 0.10;

/// Geometric growth factor of the upgrade price ladder.
const UPGRADE_PRICE_GROWTH: f64 = 2.2;

/// Sale price of one fruit at the given quality level, rounded to cents.
pub fn price_per_fruit(price_base: f64, quality_level: u32) -> f64 {
    round2(price_base * (1.0 + quality_level as f64 * QUALITY_PRICE_STEP))
}

/// Growth points gained per tick by a hydrated, healthy plant.
pub fn growth_rate(growth_level: u32) -> f64 {
    GROWTH_RATE_BASE * (1.0 + growth_level as f64 * GROWTH_RATE_STEP)
}

/// Fruit set when a plant ripens, rounded to the nearest whole fruit.
pub fn yield_per_cycle(yield_level: u32) -> u32 {
    (YIELD_BASE * (1.0 + yield_level as f64 * YIELD_STEP)).round() as u32
}

/// Fruit that can never be sold or replanted: 10% of stock, rounded up.
pub fn reserve_amount(stock: u32) -> u32 {
    (stock as f64 * RESERVE_FRACTION).ceil() as u32
}

/// Stock available to sell once the reserve is held back.
pub fn sellable_stock(stock: u32) -> u32 {
    stock.saturating_sub(reserve_amount(stock))
}

/// Display quality of one plant: its own factor times the global upgrade
/// bonus. Per-plant factors are currently always 1.
pub fn effective_quality(quality_factor: f64, quality_level: u32) -> f64 {
    quality_factor * (1.0 + quality_level as f64 * QUALITY_PRICE_STEP)
}

/// Cost of adding `units` points of water, rounded to a millionth.
pub fn water_cost(units: f64) -> f64 {
    round6(units * WATER_COST_PER_UNIT)
}

/// Round to 2 decimals (money shown to the player).
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Round to 6 decimals (fractional watering fees).
pub fn round6(x: f64) -> f64 {
    (x * 1_000_000.0).round() / 1_000_000.0
}

/// The four shop upgrades. Quality, Growth, and Yield raise a level
/// counter; Plot adds one slot to the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpgradeKind {
    Quality,
    Growth,
    Yield,
    Plot,
}

impl UpgradeKind {
    pub const ALL: [UpgradeKind; 4] = [Self::Quality, Self::Growth, Self::Yield, Self::Plot];

    /// Price at level 0; later levels climb the geometric ladder.
    pub fn base_price(self) -> f64 {
        match self {
            Self::Quality => 30.0,
            Self::Growth => 40.0,
            Self::Yield => 60.0,
            Self::Plot => 50.0,
        }
    }
}

/// Price of the next level of an upgrade: `ceil(base * 2.2^level)`.
/// Strictly increasing in `level`, no cap.
pub fn next_upgrade_price(kind: UpgradeKind, level: u32) -> f64 {
    (kind.base_price() * UPGRADE_PRICE_GROWTH.powi(level as i32)).ceil()
}

/// The three one-time automation purchases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutomationKind {
    Sprinkler,
    Picker,
    Vendor,
}

impl AutomationKind {
    pub const ALL: [AutomationKind; 3] = [Self::Sprinkler, Self::Picker, Self::Vendor];

    /// Flat purchase price. Automations never expire or revert.
    pub fn price(self) -> f64 {
        match self {
            Self::Sprinkler => 80.0,
            Self::Picker => 120.0,
            Self::Vendor => 150.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_per_fruit_quality_curve() {
        assert!((price_per_fruit(1.0, 0) - 1.0).abs() < 1e-9);
        assert!((price_per_fruit(1.0, 1) - 1.25).abs() < 1e-9);
        assert!((price_per_fruit(1.0, 2) - 1.5).abs() < 1e-9);
        // round2 kicks in on fractional bases: 1.5 * 1.25 = 1.875 -> 1.88
        assert!((price_per_fruit(1.5, 1) - 1.88).abs() < 1e-9);
    }

    #[test]
    fn test_growth_rate_curve() {
        assert!((growth_rate(0) - 2.0).abs() < 1e-9);
        assert!((growth_rate(1) - 2.5).abs() < 1e-9);
        assert!((growth_rate(4) - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_yield_rounds_to_nearest() {
        assert_eq!(yield_per_cycle(0), 2);
        assert_eq!(yield_per_cycle(1), 3); // 2.8
        assert_eq!(yield_per_cycle(2), 4); // 3.6
        assert_eq!(yield_per_cycle(3), 4); // 4.4
        assert_eq!(yield_per_cycle(5), 6); // 6.0
    }

    #[test]
    fn test_reserve_rounds_up() {
        assert_eq!(reserve_amount(0), 0);
        assert_eq!(reserve_amount(1), 1);
        assert_eq!(reserve_amount(9), 1);
        assert_eq!(reserve_amount(10), 1);
        assert_eq!(reserve_amount(11), 2);
        assert_eq!(reserve_amount(95), 10);
    }

    #[test]
    fn test_sellable_never_dips_into_reserve() {
        assert_eq!(sellable_stock(0), 0);
        assert_eq!(sellable_stock(1), 0);
        assert_eq!(sellable_stock(10), 9);
        assert_eq!(sellable_stock(11), 9);
        for stock in 0..500 {
            assert_eq!(
                sellable_stock(stock) + reserve_amount(stock),
                stock,
                "sellable + reserve must account for all stock at {stock}"
            );
        }
    }

    #[test]
    fn test_upgrade_price_ladder() {
        assert!((next_upgrade_price(UpgradeKind::Quality, 0) - 30.0).abs() < 1e-9);
        // ceil(30 * 2.2^2) = ceil(145.2) = 146
        assert!((next_upgrade_price(UpgradeKind::Quality, 2) - 146.0).abs() < 1e-9);
        assert!((next_upgrade_price(UpgradeKind::Growth, 0) - 40.0).abs() < 1e-9);
        assert!((next_upgrade_price(UpgradeKind::Yield, 0) - 60.0).abs() < 1e-9);
        assert!((next_upgrade_price(UpgradeKind::Plot, 0) - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_upgrade_price_strictly_increasing() {
        for kind in UpgradeKind::ALL {
            let mut prev = 0.0;
            for level in 0..12 {
                let price = next_upgrade_price(kind, level);
                assert!(
                    price > prev,
                    "{kind:?} price must rise at level {level}: {price} <= {prev}"
                );
                prev = price;
            }
        }
    }

    #[test]
    fn test_water_cost_per_unit() {
        assert!((water_cost(20.0) - 0.2).abs() < 1e-6);
        assert!((water_cost(6.0) - 0.06).abs() < 1e-6);
        assert!(water_cost(0.0).abs() < 1e-9);
    }

    #[test]
    fn test_effective_quality_combines_multiplicatively() {
        assert!((effective_quality(1.0, 0) - 1.0).abs() < 1e-9);
        assert!((effective_quality(1.0, 2) - 1.5).abs() < 1e-9);
        assert!((effective_quality(2.0, 1) - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_automation_prices() {
        assert!((AutomationKind::Sprinkler.price() - 80.0).abs() < 1e-9);
        assert!((AutomationKind::Picker.price() - 120.0).abs() < 1e-9);
        assert!((AutomationKind::Vendor.price() - 150.0).abs() < 1e-9);
    }
}
