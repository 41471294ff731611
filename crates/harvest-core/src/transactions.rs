//! Stock and money mutations with reserve enforcement, shared by the
//! command surface and the vendor automation.

use harvest_logic::economy;

use crate::state::GameState;

/// Outcome of a completed sale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SaleReceipt {
    pub sold: u32,
    pub proceeds: f64,
    /// Reserve in force when the sale was made (from pre-sale stock).
    pub reserve: u32,
}

/// Sell up to `requested` fruit at the current price, never dipping into
/// the reserve computed from pre-sale stock. Returns `None` when nothing
/// is sellable; the state is untouched in that case.
pub fn sell_up_to(state: &mut GameState, requested: u32) -> Option<SaleReceipt> {
    let reserve = economy::reserve_amount(state.stock);
    let sellable = state.stock.saturating_sub(reserve);
    let n = requested.min(sellable);
    if n == 0 {
        return None;
    }
    let proceeds = n as f64 * state.price_per_fruit();
    state.stock -= n;
    state.money += proceeds;
    Some(SaleReceipt {
        sold: n,
        proceeds,
        reserve,
    })
}

/// Take one fruit from stock for replanting. Fails when the draw would
/// dip into the reserve, which also covers an empty stock.
pub fn take_seed(state: &mut GameState) -> bool {
    if state.stock <= economy::reserve_amount(state.stock) {
        return false;
    }
    state.stock -= 1;
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state_with_stock(stock: u32) -> GameState {
        let mut state = GameState::new();
        state.stock = stock;
        state
    }

    #[test]
    fn test_sell_clamps_to_sellable() {
        let mut state = state_with_stock(10);
        let sale = sell_up_to(&mut state, 100).unwrap();
        // Reserve of 10 is 1: at most 9 sold, stock never below 1.
        assert_eq!(sale.sold, 9);
        assert_eq!(sale.reserve, 1);
        assert_eq!(state.stock, 1);
        assert!((state.money - (5.0 + 9.0)).abs() < 1e-9);
    }

    #[test]
    fn test_sell_partial_request() {
        let mut state = state_with_stock(10);
        let sale = sell_up_to(&mut state, 3).unwrap();
        assert_eq!(sale.sold, 3);
        assert_eq!(state.stock, 7);
    }

    #[test]
    fn test_reserve_computed_before_sale() {
        let mut state = state_with_stock(100);
        let sale = sell_up_to(&mut state, u32::MAX).unwrap();
        // Reserve of 100 is 10; post-sale stock equals that reserve even
        // though the reserve of 10 would only be 1.
        assert_eq!(sale.sold, 90);
        assert_eq!(state.stock, 10);
    }

    #[test]
    fn test_sell_uses_quality_price() {
        let mut state = state_with_stock(10);
        state.quality_level = 2;
        let sale = sell_up_to(&mut state, 2).unwrap();
        assert!((sale.proceeds - 3.0).abs() < 1e-9);
        assert!((state.money - 8.0).abs() < 1e-9);
    }

    #[test]
    fn test_nothing_sellable() {
        for stock in [0, 1] {
            let mut state = state_with_stock(stock);
            assert!(sell_up_to(&mut state, 10).is_none());
            assert_eq!(state.stock, stock);
            assert!((state.money - 5.0).abs() < 1e-9);
        }

        let mut state = state_with_stock(5);
        assert!(sell_up_to(&mut state, 0).is_none());
        assert_eq!(state.stock, 5);
    }

    #[test]
    fn test_take_seed_respects_reserve() {
        let mut state = state_with_stock(0);
        assert!(!take_seed(&mut state));

        // Stock 1: the reserve is also 1, protected.
        let mut state = state_with_stock(1);
        assert!(!take_seed(&mut state));
        assert_eq!(state.stock, 1);

        let mut state = state_with_stock(2);
        assert!(take_seed(&mut state));
        assert_eq!(state.stock, 1);
    }
}
