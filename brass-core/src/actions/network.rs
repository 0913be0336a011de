//! The Network action: claim a connection with a canal or rail link.

use crate::actions::build::consume_coal;
use crate::actions::{check_card_index, ActionError};
use crate::connectivity::{coal_sources, in_network, CoalSource};
use crate::state::{GameState, Link, PlayerId};
use brass_data::defines::links;
use brass_data::{connection, ConnectionId, Era, CONNECTIONS};
use serde::Serialize;

/// A claimable connection with its computed cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NetworkTarget {
    pub connection: ConnectionId,
    pub money: i32,
    pub coal_cost: i32,
    pub total: i32,
}

/// Every connection the player could claim right now.
#[tracing::instrument(skip(state))]
pub fn network_targets(state: &GameState, player: PlayerId) -> Vec<NetworkTarget> {
    let mut targets = Vec::new();
    for conn in CONNECTIONS {
        if let Some(target) = check_network(state, player, conn.id) {
            targets.push(target);
        }
    }
    targets
}

fn check_network(
    state: &GameState,
    player: PlayerId,
    connection_id: ConnectionId,
) -> Option<NetworkTarget> {
    let conn = connection(connection_id)?;

    if state.board_links.contains_key(connection_id) {
        return None;
    }
    match state.era {
        Era::Canal if !conn.canal => return None,
        Era::Rail if !conn.rail => return None,
        _ => {}
    }
    if state.players[player].links_remaining(state.era) == 0 {
        return None;
    }

    // A player with no presence on the board may open anywhere; after
    // that, links must extend their own network.
    let has_presence = state.built_tiles().any(|(_, t)| t.owner == player)
        || state.board_links.values().any(|l| l.owner == player);
    if has_presence {
        let adjacent = [Some(conn.a), Some(conn.b), conn.via]
            .into_iter()
            .flatten()
            .any(|loc| in_network(state, player, loc));
        if !adjacent {
            return None;
        }
    }

    let (money, coal_cost) = match state.era {
        Era::Canal => (links::CANAL_COST, 0),
        Era::Rail => {
            // Rail links burn coal, sourced from the first endpoint.
            let sources = coal_sources(state, conn.a);
            let first = sources.first()?;
            let coal_cost = match first {
                CoalSource::Mine { .. } => 0,
                CoalSource::Market { price } => *price,
            };
            (links::RAIL_COST, coal_cost)
        }
    };
    let total = money + coal_cost;
    if total > state.players[player].money {
        return None;
    }

    Some(NetworkTarget {
        connection: connection_id,
        money,
        coal_cost,
        total,
    })
}

/// Claim the connection, spending the chosen card.
pub fn execute_network(
    state: &mut GameState,
    player: PlayerId,
    connection_id: ConnectionId,
    card_index: usize,
) -> Result<String, ActionError> {
    check_card_index(state, player, card_index)?;

    let Some(target) = check_network(state, player, connection_id) else {
        return Err(ActionError::IllegalTarget(format!(
            "cannot claim connection {connection_id}"
        )));
    };

    state.spend_money(player, target.total);
    if state.era == Era::Rail {
        let conn = connection(connection_id).ok_or_else(|| {
            ActionError::IllegalTarget(format!("unknown connection {connection_id}"))
        })?;
        consume_coal(state, conn.a, links::COAL_PER_RAIL);
    }

    let kind = state.era;
    state.board_links.insert(connection_id, Link { owner: player, kind });
    match kind {
        Era::Canal => state.players[player].links_canal -= 1,
        Era::Rail => state.players[player].links_rail -= 1,
    }

    state.discard_card(player, card_index);
    Ok(format!("Built a {kind} link on {connection_id}"))
}
