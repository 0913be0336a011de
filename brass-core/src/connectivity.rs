//! Graph queries over the built link network: player network membership,
//! reachability, and the resource source lists every action costs and
//! pays through.
//!
//! Source lists are a contract shared by action enumeration and action
//! execution: each entry supplies exactly one unit, tile entries are
//! free, and the market appears as a single trailing entry priced at the
//! current ladder price. Both sides walking the same list is what keeps
//! a query's cost and an execute's payment in agreement.

use crate::state::{GameState, PlayerId, TileSite};
use brass_data::{city, Industry, LocationId, BREWERY_FARMS, CITIES, CONNECTIONS};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

/// One unit of coal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoalSource {
    /// An unflipped coal mine reached through the link network.
    Mine { site: TileSite, distance: u32 },
    /// The coal market at the current ladder price.
    Market { price: i32 },
}

/// One unit of iron. Iron has no locality rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IronSource {
    Works(TileSite),
    Market { price: i32 },
}

/// One unit of beer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeerSource {
    /// The seller's own brewery, anywhere on the board.
    Own(TileSite),
    /// An opponent brewery reached through the link network.
    Opponent(TileSite),
    /// A merchant tile (by index) with its beer still available.
    Merchant(usize),
}

/// True if the location holds one of the player's tiles or touches one
/// of their links (routed-connection waypoints included).
pub fn in_network(state: &GameState, player: PlayerId, location: LocationId) -> bool {
    if let Some(c) = city(location) {
        for slot in 0..c.slots.len() {
            if let Some(tile) = state.board.get(&(location, slot)) {
                if tile.owner == player {
                    return true;
                }
            }
        }
    }
    if let Some(tile) = state.farm_tiles.get(location) {
        if tile.owner == player {
            return true;
        }
    }
    CONNECTIONS.iter().any(|conn| {
        conn.touches(location)
            && state
                .board_links
                .get(conn.id)
                .is_some_and(|link| link.owner == player)
    })
}

/// The set of locations reachable from `start` by following built links
/// of any owner. Reflexive; a built routed connection joins both
/// endpoints and its waypoint. Each connection is expanded once, so
/// cycles terminate.
pub fn connected_locations(state: &GameState, start: LocationId) -> FxHashSet<LocationId> {
    let mut connected = FxHashSet::default();
    connected.insert(start);
    let mut visited_connections = FxHashSet::default();
    let mut frontier = vec![start];

    while let Some(loc) = frontier.pop() {
        for conn in CONNECTIONS {
            if !conn.touches(loc)
                || visited_connections.contains(conn.id)
                || !state.board_links.contains_key(conn.id)
            {
                continue;
            }
            visited_connections.insert(conn.id);
            for reached in [Some(conn.a), Some(conn.b), conn.via].into_iter().flatten() {
                if connected.insert(reached) {
                    frontier.push(reached);
                }
            }
        }
    }
    connected
}

/// City-slot sites in board-table order, for deterministic enumeration.
fn city_sites() -> impl Iterator<Item = TileSite> {
    CITIES.iter().flat_map(|c| {
        (0..c.slots.len()).map(move |slot| TileSite::City {
            city: c.id,
            slot,
        })
    })
}

fn farm_sites() -> impl Iterator<Item = TileSite> {
    BREWERY_FARMS.iter().map(|f| TileSite::Farm(f.id))
}

/// Coal sources for a purchase at `from`: unflipped coal mines reachable
/// through built links, nearest first (ties keep encounter order), then
/// the market if stocked.
pub fn coal_sources(state: &GameState, from: LocationId) -> Vec<CoalSource> {
    let mut sources = Vec::new();
    let mut visited: FxHashSet<LocationId> = FxHashSet::default();
    let mut queue: VecDeque<(LocationId, u32)> = VecDeque::new();
    queue.push_back((from, 0));

    while let Some((loc, distance)) = queue.pop_front() {
        if !visited.insert(loc) {
            continue;
        }

        if let Some(c) = city(loc) {
            for slot in 0..c.slots.len() {
                let site = TileSite::City { city: loc, slot };
                if let Some(tile) = state.board.get(&(loc, slot)) {
                    if tile.industry() == Industry::CoalMine && !tile.flipped && tile.cubes > 0 {
                        sources.push(CoalSource::Mine { site, distance });
                    }
                }
            }
        }

        for conn in CONNECTIONS {
            if !state.board_links.contains_key(conn.id) {
                continue;
            }
            if let Some(other) = conn.other_end(loc) {
                if !visited.contains(other) {
                    queue.push_back((other, distance + 1));
                }
            }
        }
    }

    if let Some(price) = state.coal_market.price() {
        sources.push(CoalSource::Market { price });
    }
    sources
}

/// Iron sources: every unflipped iron works on the board regardless of
/// connectivity or ownership, then the market if stocked.
pub fn iron_sources(state: &GameState) -> Vec<IronSource> {
    let mut sources = Vec::new();
    for site in city_sites() {
        if let Some(tile) = state.tile_at(site) {
            if tile.industry() == Industry::IronWorks && !tile.flipped && tile.cubes > 0 {
                sources.push(IronSource::Works(site));
            }
        }
    }
    if let Some(price) = state.iron_market.price() {
        sources.push(IronSource::Market { price });
    }
    sources
}

/// Beer sources for selling from `from`: the seller's breweries anywhere,
/// then connected opponent breweries, then connected merchants with beer.
pub fn beer_sources(state: &GameState, from: LocationId, player: PlayerId) -> Vec<BeerSource> {
    let mut sources = Vec::new();

    let is_live_brewery = |tile: &crate::state::BuiltTile| {
        tile.industry() == Industry::Brewery && !tile.flipped && tile.cubes > 0
    };

    for site in city_sites().chain(farm_sites()) {
        if let Some(tile) = state.tile_at(site) {
            if tile.owner == player && is_live_brewery(tile) {
                sources.push(BeerSource::Own(site));
            }
        }
    }

    let connected = connected_locations(state, from);
    for site in city_sites().chain(farm_sites()) {
        if !connected.contains(site.location()) {
            continue;
        }
        if let Some(tile) = state.tile_at(site) {
            if tile.owner != player && is_live_brewery(tile) {
                sources.push(BeerSource::Opponent(site));
            }
        }
    }

    for (index, merchant) in state.merchants.iter().enumerate() {
        if merchant.has_beer && connected.contains(merchant.location) {
            sources.push(BeerSource::Merchant(index));
        }
    }

    sources
}
