//! External merchant locations and the merchant tile sets placed on them
//! at setup.

use crate::types::{Industry, LocationId};
use serde::Serialize;

/// One-shot reward granted the first time a matching good is sold to a
/// merchant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MerchantBonus {
    VictoryPoints(i32),
    Money(i32),
    Income(i32),
    /// A development that costs no iron, banked for a later Develop
    /// action.
    Develop,
}

/// An off-board merchant location.
#[derive(Debug, Clone, Copy)]
pub struct Merchant {
    pub id: LocationId,
    pub name: &'static str,
    pub slots: u8,
    /// Present only in games with at least this many players.
    pub min_players: usize,
    pub bonus: MerchantBonus,
}

/// A merchant tile dealt to a merchant location at setup. `buys: None`
/// accepts any sellable good.
#[derive(Debug, Clone, Copy)]
pub struct MerchantTileSpec {
    pub location: LocationId,
    pub buys: Option<Industry>,
    /// Tile enters the game only at this player count or above.
    pub min_players: usize,
}

pub const MERCHANTS: &[Merchant] = &[
    Merchant {
        id: "shrewsbury",
        name: "Shrewsbury",
        slots: 1,
        min_players: 2,
        bonus: MerchantBonus::VictoryPoints(4),
    },
    Merchant {
        id: "gloucester",
        name: "Gloucester",
        slots: 2,
        min_players: 2,
        bonus: MerchantBonus::Develop,
    },
    Merchant {
        id: "oxford",
        name: "Oxford",
        slots: 2,
        min_players: 2,
        bonus: MerchantBonus::Income(2),
    },
    Merchant {
        id: "warrington",
        name: "Warrington",
        slots: 2,
        min_players: 3,
        bonus: MerchantBonus::Money(5),
    },
    Merchant {
        id: "nottingham",
        name: "Nottingham",
        slots: 2,
        min_players: 4,
        bonus: MerchantBonus::VictoryPoints(3),
    },
];

const fn mtile(location: LocationId, buys: Option<Industry>, min_players: usize) -> MerchantTileSpec {
    MerchantTileSpec {
        location,
        buys,
        min_players,
    }
}

pub const MERCHANT_TILES: &[MerchantTileSpec] = &[
    mtile("shrewsbury", None, 2),
    mtile("oxford", Some(Industry::Manufacturer), 2),
    mtile("oxford", Some(Industry::CottonMill), 2),
    mtile("gloucester", Some(Industry::CottonMill), 2),
    mtile("gloucester", Some(Industry::Manufacturer), 2),
    mtile("warrington", Some(Industry::Pottery), 3),
    mtile("warrington", None, 3),
    mtile("nottingham", Some(Industry::CottonMill), 4),
    mtile("nottingham", Some(Industry::Manufacturer), 4),
];

pub fn merchant(id: LocationId) -> Option<&'static Merchant> {
    MERCHANTS.iter().find(|m| m.id == id)
}

pub fn is_merchant_location(id: LocationId) -> bool {
    merchant(id).is_some()
}

/// Merchant tiles in play at the given player count, in table order.
/// The caller shuffles them before assigning to merchant slots.
pub fn tiles_for_player_count(num_players: usize) -> Vec<MerchantTileSpec> {
    MERCHANT_TILES
        .iter()
        .copied()
        .filter(|t| t.min_players <= num_players)
        .collect()
}
