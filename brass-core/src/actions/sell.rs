//! The Sell action: flip sellable tiles by shipping their goods to an
//! accepting merchant, consuming the required beer per tile.
//!
//! Several tiles may be sold in one action. Each tile is re-checked just
//! before it sells, because an earlier sale may have drunk the beer a
//! later one was counting on; tiles that no longer qualify are skipped
//! rather than failing the whole action.

use crate::actions::{check_card_index, ActionError};
use crate::connectivity::{beer_sources, connected_locations, BeerSource};
use crate::state::{GameState, MerchantTile, PlayerId, TileSite};
use brass_data::{merchant, Industry, MerchantBonus};
use serde::Serialize;

/// A tile that can be sold right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SellTarget {
    pub site: TileSite,
    pub industry: Industry,
    pub level: u8,
    pub beers_required: u8,
}

fn accepts(tile: &MerchantTile, industry: Industry) -> bool {
    tile.buys.is_none_or(|bought| bought == industry)
}

/// Every tile the player could sell right now.
#[tracing::instrument(skip(state))]
pub fn sell_targets(state: &GameState, player: PlayerId) -> Vec<SellTarget> {
    let mut targets: Vec<SellTarget> = state
        .built_tiles()
        .filter_map(|(site, _)| check_sell(state, player, site))
        .collect();
    targets.sort_by_key(|t| t.site);
    targets
}

fn check_sell(state: &GameState, player: PlayerId, site: TileSite) -> Option<SellTarget> {
    let tile = state.tile_at(site)?;
    if tile.owner != player || tile.flipped {
        return None;
    }
    let beers = tile.spec.beers_to_sell?;
    let industry = tile.industry();

    // Zero-beer tiles sell unconditionally, with no merchant involved.
    // Acceptance gates only who the goods go to; any connected merchant
    // beer may wet the sale.
    if beers > 0 {
        let connected = connected_locations(state, site.location());
        let merchant_reachable = state
            .merchants
            .iter()
            .any(|m| connected.contains(m.location) && accepts(m, industry));
        if !merchant_reachable {
            return None;
        }
        if beer_sources(state, site.location(), player).len() < beers as usize {
            return None;
        }
    }

    Some(SellTarget {
        site,
        industry,
        level: tile.spec.level,
        beers_required: beers,
    })
}

/// Sell the given tiles in order, spending the chosen card.
pub fn execute_sell(
    state: &mut GameState,
    player: PlayerId,
    sites: &[TileSite],
    card_index: usize,
) -> Result<String, ActionError> {
    check_card_index(state, player, card_index)?;
    if sites.is_empty() {
        return Err(ActionError::IllegalTarget("nothing to sell".to_string()));
    }

    let mut sold = Vec::new();
    for &site in sites {
        let Some(target) = check_sell(state, player, site) else {
            log::debug!("sell skipped {site}: no longer eligible");
            continue;
        };

        let sources = beer_sources(state, site.location(), player);
        for source in sources.into_iter().take(target.beers_required as usize) {
            consume_beer(state, source);
        }
        state.flip_tile(site);
        claim_merchant_bonus(state, player, site, target.industry);
        sold.push(format!("{} Level {}", target.industry, target.level));
    }

    if sold.is_empty() {
        return Err(ActionError::IllegalTarget(
            "no listed tile could be sold".to_string(),
        ));
    }

    state.discard_card(player, card_index);
    Ok(format!("Sold {}", sold.join(" and ")))
}

fn consume_beer(state: &mut GameState, source: BeerSource) {
    match source {
        BeerSource::Own(site) | BeerSource::Opponent(site) => {
            state.consume_cube(site);
        }
        BeerSource::Merchant(index) => {
            state.merchants[index].has_beer = false;
        }
    }
}

/// Each sold tile claims at most one unclaimed merchant bonus from a
/// reachable merchant tile accepting its good.
fn claim_merchant_bonus(
    state: &mut GameState,
    player: PlayerId,
    site: TileSite,
    industry: Industry,
) {
    let connected = connected_locations(state, site.location());
    let claimed = state
        .merchants
        .iter()
        .position(|m| !m.bonus_claimed && connected.contains(m.location) && accepts(m, industry));
    if let Some(index) = claimed {
        state.merchants[index].bonus_claimed = true;
        let location = state.merchants[index].location;
        if let Some(m) = merchant(location) {
            apply_bonus(state, player, m.bonus);
        }
    }
}

fn apply_bonus(state: &mut GameState, player: PlayerId, bonus: MerchantBonus) {
    log::debug!("player {player} claims merchant bonus {bonus:?}");
    match bonus {
        MerchantBonus::VictoryPoints(vp) => state.players[player].vp += vp,
        MerchantBonus::Money(money) => state.players[player].money += money,
        MerchantBonus::Income(levels) => state.adjust_income(player, levels),
        MerchantBonus::Develop => state.players[player].free_develops += 1,
    }
}
