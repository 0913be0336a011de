//! The Build action: place the next tile of an industry stack into a
//! legal city slot, paying money plus sourced coal and iron.

use crate::actions::{card_allows_build, check_card_index, ActionError};
use crate::connectivity::{coal_sources, in_network, iron_sources, CoalSource, IronSource};
use crate::state::{BuiltTile, GameState, PlayerId, TileSite};
use brass_data::{city, Era, Industry, LocationId, TileSpec, CITIES};
use serde::Serialize;

/// Cost breakdown of one build, as priced at enumeration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildCost {
    pub money: i32,
    pub coal: u8,
    pub coal_cost: i32,
    pub iron: u8,
    pub iron_cost: i32,
    pub total: i32,
}

/// A legal build: industry into a specific city slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BuildTarget {
    pub city: LocationId,
    pub slot: usize,
    pub industry: Industry,
    pub spec: &'static TileSpec,
    pub cost: BuildCost,
}

/// Every currently legal build for the player, with computed costs.
#[tracing::instrument(skip(state))]
pub fn build_targets(state: &GameState, player: PlayerId) -> Vec<BuildTarget> {
    let mut targets = Vec::new();

    for c in CITIES {
        for (slot, allowed) in c.slots.iter().enumerate() {
            for &industry in *allowed {
                if let Some(target) = check_build(state, player, c.id, slot, industry) {
                    targets.push(target);
                }
            }
        }
    }
    targets
}

fn check_build(
    state: &GameState,
    player: PlayerId,
    city_id: LocationId,
    slot: usize,
    industry: Industry,
) -> Option<BuildTarget> {
    let spec = state.next_tile(player, industry)?;

    match state.era {
        Era::Canal if !spec.canal_era => return None,
        Era::Rail if !spec.rail_era => return None,
        _ => {}
    }

    // Canal era: a player may hold only one tile per city.
    if state.era == Era::Canal {
        let c = city(city_id)?;
        let own_tile_here = (0..c.slots.len())
            .any(|i| state.board.get(&(city_id, i)).is_some_and(|t| t.owner == player));
        if own_tile_here {
            return None;
        }
    }

    if let Some(existing) = state.board.get(&(city_id, slot)) {
        if existing.owner == player {
            // Own-tile upgrade: same industry, strictly higher level.
            if existing.industry() != industry || spec.level <= existing.spec.level {
                return None;
            }
        } else {
            // Opponent overbuild: coal/iron only, and only when that
            // resource is gone from market and board alike.
            let overbuildable = matches!(
                existing.industry(),
                Industry::CoalMine | Industry::IronWorks
            );
            if !overbuildable || !resource_depleted(state, existing.industry()) {
                return None;
            }
        }
    }

    let cost = price_build(state, player, spec, city_id)?;

    let has_card = state.players[player].hand.iter().any(|card| {
        card_allows_build(
            card,
            &BuildTarget {
                city: city_id,
                slot,
                industry,
                spec,
                cost,
            },
            in_network(state, player, city_id),
        )
    });
    if !has_card {
        return None;
    }

    Some(BuildTarget {
        city: city_id,
        slot,
        industry,
        spec,
        cost,
    })
}

/// Zero cubes of this resource anywhere: market empty and no unflipped
/// producing tile holding any.
pub fn resource_depleted(state: &GameState, industry: Industry) -> bool {
    let market_stock = match industry {
        Industry::CoalMine => state.coal_market.stock(),
        Industry::IronWorks => state.iron_market.stock(),
        _ => return false,
    };
    if market_stock > 0 {
        return false;
    }
    !state
        .built_tiles()
        .any(|(_, t)| t.industry() == industry && !t.flipped && t.cubes > 0)
}

/// Price the build against the current source lists, or `None` when the
/// resources or money fall short.
fn price_build(
    state: &GameState,
    player: PlayerId,
    spec: &'static TileSpec,
    city_id: LocationId,
) -> Option<BuildCost> {
    let mut coal_cost = 0;
    if spec.cost_coal > 0 {
        let sources = coal_sources(state, city_id);
        let mut remaining = spec.cost_coal;
        for source in &sources {
            if remaining == 0 {
                break;
            }
            if let CoalSource::Market { price } = source {
                coal_cost += price;
            }
            remaining -= 1;
        }
        if remaining > 0 {
            return None;
        }
    }

    let mut iron_cost = 0;
    if spec.cost_iron > 0 {
        let sources = iron_sources(state);
        let mut remaining = spec.cost_iron;
        for source in &sources {
            if remaining == 0 {
                break;
            }
            if let IronSource::Market { price } = source {
                iron_cost += price;
            }
            remaining -= 1;
        }
        if remaining > 0 {
            return None;
        }
    }

    let total = spec.cost + coal_cost + iron_cost;
    if total > state.players[player].money {
        return None;
    }

    Some(BuildCost {
        money: spec.cost,
        coal: spec.cost_coal,
        coal_cost,
        iron: spec.cost_iron,
        iron_cost,
        total,
    })
}

/// Build the industry in the given slot, spending the chosen card.
pub fn execute_build(
    state: &mut GameState,
    player: PlayerId,
    city_id: LocationId,
    slot: usize,
    industry: Industry,
    card_index: usize,
) -> Result<String, ActionError> {
    check_card_index(state, player, card_index)?;

    let Some(target) = check_build(state, player, city_id, slot, industry) else {
        return Err(ActionError::IllegalTarget(format!(
            "cannot build {industry} at {city_id}[{slot}]"
        )));
    };

    let card = &state.players[player].hand[card_index];
    if !card_allows_build(card, &target, in_network(state, player, city_id)) {
        return Err(ActionError::CardMismatch);
    }

    let spec = state
        .use_next_tile(player, industry)
        .ok_or_else(|| ActionError::IllegalTarget(format!("no {industry} tile left")))?;

    state.spend_money(player, target.cost.total);
    consume_coal(state, city_id, target.cost.coal);
    consume_iron(state, target.cost.iron);

    // An overbuilt tile is removed from the game, not returned anywhere.
    state.place_tile(
        TileSite::City { city: city_id, slot },
        BuiltTile {
            owner: player,
            spec,
            flipped: false,
            cubes: spec.cubes,
        },
    );

    state.discard_card(player, card_index);

    let city_name = city(city_id).map_or(city_id, |c| c.name);
    Ok(format!(
        "Built {industry} Level {} in {city_name}",
        spec.level
    ))
}

/// Consume coal units along the source list. Mines lose a cube (and may
/// flip); a market entry's cube was already paid for in the priced total.
pub(crate) fn consume_coal(state: &mut GameState, from: LocationId, count: u8) {
    let sources = coal_sources(state, from);
    let mut remaining = count;
    for source in sources {
        if remaining == 0 {
            break;
        }
        match source {
            CoalSource::Mine { site, .. } => {
                state.consume_cube(site);
            }
            CoalSource::Market { .. } => {
                state.coal_market.buy_one();
            }
        }
        remaining -= 1;
    }
}

pub(crate) fn consume_iron(state: &mut GameState, count: u8) {
    let sources = iron_sources(state);
    let mut remaining = count;
    for source in sources {
        if remaining == 0 {
            break;
        }
        match source {
            IronSource::Works(site) => {
                state.consume_cube(site);
            }
            IronSource::Market { .. } => {
                state.iron_market.buy_one();
            }
        }
        remaining -= 1;
    }
}
