//! Static map dataset for the rules engine.
//!
//! Everything in this crate is an immutable table: the board topology
//! (cities, brewery farms, connections), the merchant locations and
//! tile sets, the per-industry tile specifications, card deck
//! composition per player count, and the numeric game constants in
//! [`defines`]. No game state lives here.

pub mod deck;
pub mod defines;
pub mod industries;
pub mod map;
pub mod merchants;
pub mod types;

pub use deck::{deck_spec, DeckSpec};
pub use industries::{tiles_for, TileSpec};
pub use map::{
    city, connection, is_brewery_farm, is_city, BreweryFarm, City, Connection, BREWERY_FARMS,
    CITIES, CONNECTIONS,
};
pub use merchants::{
    is_merchant_location, merchant, tiles_for_player_count, Merchant, MerchantBonus,
    MerchantTileSpec,
};
pub use types::{ConnectionId, Era, Industry, LocationId};
