//! # Brass Rules Engine Core
//!
//! Deterministic rules engine for a Brass-style industrial-era board
//! game: canal and rail eras, industry tiles, resource markets, and a
//! shared link network over the board of `brass-data`.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌───────────────┐
//! │  Frontends  │────▶│   Action     │────▶│ execute_action│
//! │  (choose)   │     │ (payload)    │     │ (validated)   │
//! └─────────────┘     └──────────────┘     └──────┬────────┘
//!        ▲                                        │
//!        │            ┌──────────────┐     ┌──────▼────────┐
//!        └────────────│   queries    │◀────│   GameState   │
//!                     │ (targets)    │     │ (aggregate)   │
//!                     └──────────────┘     └───────────────┘
//! ```
//!
//! Every action comes in a query/executor pair: the query enumerates all
//! currently legal targets with their exact costs, and the executor
//! re-validates before mutating, so a failed action never changes state.
//! Queries never mutate; [`GameState::checksum`] makes that testable.
//!
//! ## Key Types
//!
//! | Type | Purpose |
//! |------|---------|
//! | [`GameState`] | Complete game state (players, board, markets, decks) |
//! | [`Action`] | Player actions (Build, Network, Develop, Sell, ...) |
//! | [`execute_action`] | Validated state transition for one action |
//! | [`advance_turn`] | Turn, round, and era progression |
//! | [`score_era`] | End-of-era link and industry scoring |
//!
//! ## Determinism
//!
//! All randomness derives from the setup seed. Identical seeds and
//! action sequences replay to identical [`GameState::checksum`] values,
//! which is what desync detection in lockstep play keys on.

pub mod actions;
pub mod bounded;
pub mod cards;
pub mod connectivity;
pub mod market;
pub mod scheduler;
pub mod scoring;
pub mod state;
pub mod testing;

pub use actions::{
    build_targets, can_perform, execute_action, network_targets, sell_targets,
    valid_cards_for_action, Action, ActionError, ActionKind, BuildCost, BuildTarget,
    DevelopOption, NetworkTarget, SellTarget,
};
pub use bounded::{new_income, BoundedInt};
pub use cards::Card;
pub use connectivity::{
    beer_sources, coal_sources, connected_locations, in_network, iron_sources, BeerSource,
    CoalSource, IronSource,
};
pub use market::Market;
pub use scheduler::{advance_turn, TurnEvent};
pub use scoring::{score_era, PlayerScore};
pub use state::{
    BuiltTile, GameState, Link, MerchantTile, Player, PlayerId, SetupError, TileSite,
};

#[cfg(test)]
mod scenario_tests;
