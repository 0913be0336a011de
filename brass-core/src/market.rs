//! The coal and iron markets: a cube stock against a fixed ascending
//! price ladder.

use serde::Serialize;

/// One resource market. The price of the next unit bought is the ladder
/// entry at index `ladder.len() - stock`; an empty market sells nothing.
#[derive(Debug, Clone, Serialize)]
pub struct Market {
    #[serde(skip)]
    ladder: &'static [i32],
    stock: u8,
}

impl Market {
    pub fn new(ladder: &'static [i32], stock: u8) -> Self {
        debug_assert!(stock as usize <= ladder.len());
        Self { ladder, stock }
    }

    pub fn coal() -> Self {
        use brass_data::defines::market;
        Self::new(market::COAL_PRICES, market::COAL_INITIAL)
    }

    pub fn iron() -> Self {
        use brass_data::defines::market;
        Self::new(market::IRON_PRICES, market::IRON_INITIAL)
    }

    pub fn stock(&self) -> u8 {
        self.stock
    }

    /// Price of the next unit, or `None` when the market is empty.
    pub fn price(&self) -> Option<i32> {
        if self.stock == 0 {
            return None;
        }
        self.ladder.get(self.ladder.len() - self.stock as usize).copied()
    }

    /// Remove one unit, returning what it cost.
    pub fn buy_one(&mut self) -> Option<i32> {
        let price = self.price()?;
        self.stock -= 1;
        Some(price)
    }
}
