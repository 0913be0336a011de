//! Game constants (defines).
//!
//! Fixed numbers from the board game: market price ladders, starting
//! cash, link costs, hand size, and the per-turn action limits.

/// Resource market constants
pub mod market {
    /// Coal market price ladder, cheapest space first. The price of the
    /// next unit sold is `ladder[ladder.len() - stock]`.
    pub const COAL_PRICES: &[i32] = &[1, 1, 2, 2, 3, 3, 4, 4, 5, 5, 6, 7, 8, 8];

    /// Coal cubes at setup (the cheapest space starts empty).
    pub const COAL_INITIAL: u8 = 13;

    /// Iron market price ladder.
    pub const IRON_PRICES: &[i32] = &[1, 1, 2, 2, 3, 3, 4, 5, 6, 6];

    /// Iron cubes at setup (the two cheapest spaces start empty).
    pub const IRON_INITIAL: u8 = 8;
}

/// Player economy constants
pub mod economy {
    /// Starting cash per player.
    pub const INITIAL_MONEY: i32 = 17;

    /// Starting income level.
    pub const INITIAL_INCOME: i32 = 10;

    /// Income track bounds.
    pub const MIN_INCOME: i32 = -10;
    pub const MAX_INCOME: i32 = 30;

    /// Money granted by the Loan action.
    pub const LOAN_AMOUNT: i32 = 30;

    /// Income levels lost when taking a loan.
    pub const LOAN_INCOME_PENALTY: i32 = 3;
}

/// Link building constants
pub mod links {
    /// Flat cost of a canal link.
    pub const CANAL_COST: i32 = 3;

    /// Flat cost of a rail link, before coal.
    pub const RAIL_COST: i32 = 5;

    /// Coal units consumed per rail link.
    pub const COAL_PER_RAIL: u8 = 1;

    /// Link tiles per player, per era type.
    pub const LINKS_PER_PLAYER: u8 = 14;

    /// Victory points a link earns per adjacent merchant location.
    pub const MERCHANT_LINK_VP: i32 = 2;
}

/// Turn structure constants
pub mod turns {
    /// Cards held after replenishing at the end of a turn.
    pub const HAND_SIZE: usize = 8;

    /// Actions per turn in the first round of each era.
    pub const FIRST_ROUND_ACTIONS: u32 = 1;

    /// Actions per turn in every later round.
    pub const ACTIONS_PER_TURN: u32 = 2;
}

/// Card constants
pub mod cards {
    /// Wild location cards in the shared pile.
    pub const WILD_LOCATION_PILE: u8 = 4;

    /// Wild industry cards in the shared pile.
    pub const WILD_INDUSTRY_PILE: u8 = 4;

    /// Cards discarded by the Scout action.
    pub const SCOUT_DISCARDS: usize = 3;
}
