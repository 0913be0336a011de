//! Card deck composition per player count.

use crate::types::{Industry, LocationId};

/// Location-card and industry-card counts for one player count.
#[derive(Debug, Clone, Copy)]
pub struct DeckSpec {
    pub locations: &'static [(LocationId, u8)],
    pub industries: &'static [(Industry, u8)],
}

const TWO_PLAYER: DeckSpec = DeckSpec {
    locations: &[
        ("stafford", 2),
        ("burtonOnTrent", 2),
        ("cannock", 2),
        ("tamworth", 1),
        ("walsall", 1),
        ("coalbrookdale", 3),
        ("dudley", 2),
        ("kidderminster", 2),
        ("wolverhampton", 2),
        ("worcester", 2),
        ("birmingham", 3),
        ("coventry", 3),
        ("nuneaton", 1),
        ("redditch", 1),
    ],
    industries: &[
        (Industry::IronWorks, 4),
        (Industry::CoalMine, 2),
        (Industry::Pottery, 2),
        (Industry::Brewery, 5),
    ],
};

const THREE_PLAYER: DeckSpec = DeckSpec {
    locations: &[
        ("leek", 2),
        ("stokeOnTrent", 3),
        ("stone", 2),
        ("uttoxeter", 1),
        ("stafford", 2),
        ("burtonOnTrent", 2),
        ("cannock", 2),
        ("tamworth", 1),
        ("walsall", 1),
        ("coalbrookdale", 3),
        ("dudley", 2),
        ("kidderminster", 2),
        ("wolverhampton", 2),
        ("worcester", 2),
        ("birmingham", 3),
        ("coventry", 3),
        ("nuneaton", 1),
        ("redditch", 1),
    ],
    industries: &[
        (Industry::IronWorks, 4),
        (Industry::CoalMine, 2),
        (Industry::CottonMill, 3),
        (Industry::Manufacturer, 3),
        (Industry::Pottery, 2),
        (Industry::Brewery, 5),
    ],
};

const FOUR_PLAYER: DeckSpec = DeckSpec {
    locations: &[
        ("belper", 2),
        ("derby", 3),
        ("leek", 2),
        ("stokeOnTrent", 3),
        ("stone", 2),
        ("uttoxeter", 2),
        ("stafford", 2),
        ("burtonOnTrent", 2),
        ("cannock", 2),
        ("tamworth", 1),
        ("walsall", 1),
        ("coalbrookdale", 3),
        ("dudley", 2),
        ("kidderminster", 2),
        ("wolverhampton", 2),
        ("worcester", 2),
        ("birmingham", 3),
        ("coventry", 3),
        ("nuneaton", 1),
        ("redditch", 1),
    ],
    industries: &[
        (Industry::IronWorks, 4),
        (Industry::CoalMine, 3),
        (Industry::CottonMill, 4),
        (Industry::Manufacturer, 4),
        (Industry::Pottery, 3),
        (Industry::Brewery, 5),
    ],
};

/// Deck composition for a 2-4 player game.
pub fn deck_spec(num_players: usize) -> Option<&'static DeckSpec> {
    match num_players {
        2 => Some(&TWO_PLAYER),
        3 => Some(&THREE_PLAYER),
        4 => Some(&FOUR_PLAYER),
        _ => None,
    }
}
