//! Industry tile specifications.
//!
//! Each player owns one ordered stack per industry; stacks are listed
//! lowest level first and a player always builds or develops the lowest
//! remaining tile. `copies` is how many identical tiles of that level go
//! into the stack.

use crate::types::Industry;
use serde::Serialize;

/// One row of the industry tile table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TileSpec {
    pub industry: Industry,
    pub level: u8,
    /// Identical copies of this tile in the stack.
    pub copies: u8,
    pub canal_era: bool,
    pub rail_era: bool,
    /// Money cost to build.
    pub cost: i32,
    pub cost_coal: u8,
    pub cost_iron: u8,
    /// `None` = never sold (resource industries). `Some(0)` = sells with
    /// no beer and no merchant check.
    pub beers_to_sell: Option<u8>,
    /// Victory points when flipped.
    pub vp: i32,
    /// Income levels gained when flipped.
    pub income: i32,
    /// Victory points contributed to each adjacent link when flipped.
    pub link_vp: i32,
    pub can_develop: bool,
    /// Resource cubes placed on the tile when built.
    pub cubes: u8,
}

const fn tile(
    industry: Industry,
    level: u8,
    copies: u8,
    canal_era: bool,
    rail_era: bool,
    cost: i32,
    cost_coal: u8,
    cost_iron: u8,
    beers_to_sell: Option<u8>,
    vp: i32,
    income: i32,
    link_vp: i32,
    can_develop: bool,
    cubes: u8,
) -> TileSpec {
    TileSpec {
        industry,
        level,
        copies,
        canal_era,
        rail_era,
        cost,
        cost_coal,
        cost_iron,
        beers_to_sell,
        vp,
        income,
        link_vp,
        can_develop,
        cubes,
    }
}

use Industry::{Brewery, CoalMine, CottonMill, IronWorks, Manufacturer, Pottery};

pub const BREWERY_TILES: &[TileSpec] = &[
    tile(Brewery, 1, 2, true, false, 5, 0, 1, None, 4, 4, 2, true, 1),
    tile(Brewery, 2, 2, true, true, 7, 0, 1, None, 5, 5, 2, true, 1),
    tile(Brewery, 3, 2, true, true, 9, 0, 1, None, 7, 5, 2, true, 1),
    tile(Brewery, 4, 1, false, true, 9, 0, 1, None, 10, 5, 2, true, 2),
];

pub const COAL_MINE_TILES: &[TileSpec] = &[
    tile(CoalMine, 1, 1, true, false, 5, 0, 0, None, 1, 4, 2, true, 2),
    tile(CoalMine, 2, 2, true, true, 7, 0, 0, None, 2, 7, 1, true, 3),
    tile(CoalMine, 3, 2, true, true, 8, 0, 1, None, 3, 6, 1, true, 4),
    tile(CoalMine, 4, 2, true, true, 10, 0, 1, None, 4, 5, 1, true, 5),
];

pub const COTTON_MILL_TILES: &[TileSpec] = &[
    tile(CottonMill, 1, 3, true, false, 12, 0, 0, Some(1), 5, 5, 1, true, 0),
    tile(CottonMill, 2, 2, true, true, 14, 1, 0, Some(1), 5, 4, 2, true, 0),
    tile(CottonMill, 3, 3, true, true, 16, 1, 1, Some(1), 9, 3, 1, true, 0),
    tile(CottonMill, 4, 3, true, true, 18, 1, 1, Some(1), 12, 2, 1, true, 0),
];

pub const IRON_WORKS_TILES: &[TileSpec] = &[
    tile(IronWorks, 1, 1, true, false, 5, 1, 0, None, 3, 3, 1, true, 4),
    tile(IronWorks, 2, 1, true, true, 7, 1, 0, None, 5, 3, 1, true, 4),
    tile(IronWorks, 3, 1, true, true, 9, 1, 0, None, 7, 2, 1, true, 5),
    tile(IronWorks, 4, 1, true, true, 12, 1, 0, None, 9, 1, 1, true, 6),
];

pub const MANUFACTURER_TILES: &[TileSpec] = &[
    tile(Manufacturer, 1, 1, true, false, 8, 1, 0, Some(1), 3, 5, 2, true, 0),
    tile(Manufacturer, 2, 2, true, true, 10, 0, 1, Some(1), 5, 1, 1, true, 0),
    tile(Manufacturer, 3, 1, true, true, 12, 2, 0, Some(0), 4, 4, 0, true, 0),
    tile(Manufacturer, 4, 1, true, true, 8, 0, 1, Some(1), 3, 6, 1, true, 0),
    tile(Manufacturer, 5, 2, true, true, 16, 1, 0, Some(2), 8, 2, 2, true, 0),
    tile(Manufacturer, 6, 1, true, true, 20, 0, 0, Some(1), 7, 6, 1, true, 0),
    tile(Manufacturer, 7, 1, true, true, 16, 1, 1, Some(0), 9, 4, 0, true, 0),
    tile(Manufacturer, 8, 2, true, true, 20, 0, 2, Some(1), 11, 1, 1, true, 0),
];

pub const POTTERY_TILES: &[TileSpec] = &[
    tile(Pottery, 1, 1, true, true, 17, 0, 1, Some(1), 10, 5, 1, false, 0),
    tile(Pottery, 2, 1, true, true, 0, 1, 0, Some(1), 1, 1, 1, true, 0),
    tile(Pottery, 3, 1, true, true, 22, 2, 0, Some(2), 11, 5, 1, false, 0),
    tile(Pottery, 4, 1, true, true, 0, 1, 0, Some(1), 1, 1, 1, true, 0),
    tile(Pottery, 5, 1, false, true, 24, 2, 0, Some(2), 20, 5, 1, true, 0),
];

/// The tile table for one industry, lowest level first.
pub fn tiles_for(industry: Industry) -> &'static [TileSpec] {
    match industry {
        Industry::Brewery => BREWERY_TILES,
        Industry::CoalMine => COAL_MINE_TILES,
        Industry::CottonMill => COTTON_MILL_TILES,
        Industry::IronWorks => IRON_WORKS_TILES,
        Industry::Manufacturer => MANUFACTURER_TILES,
        Industry::Pottery => POTTERY_TILES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacks_are_level_ordered() {
        for industry in Industry::ALL {
            let specs = tiles_for(industry);
            assert!(!specs.is_empty());
            for pair in specs.windows(2) {
                assert!(pair[0].level < pair[1].level, "{industry}");
            }
        }
    }

    #[test]
    fn sellable_tiles_have_beer_requirements() {
        for industry in Industry::ALL {
            for spec in tiles_for(industry) {
                assert_eq!(spec.industry, industry);
                assert_eq!(spec.beers_to_sell.is_some(), industry.is_sellable());
                // Only resource industries carry cubes.
                assert_eq!(spec.cubes > 0, industry.is_resource());
            }
        }
    }

    #[test]
    fn auto_sell_tiles_are_the_two_manufacturers() {
        let auto: Vec<u8> = MANUFACTURER_TILES
            .iter()
            .filter(|t| t.beers_to_sell == Some(0))
            .map(|t| t.level)
            .collect();
        assert_eq!(auto, vec![3, 7]);
    }
}
