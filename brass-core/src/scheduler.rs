//! Turn, round, and era progression.
//!
//! Call [`advance_turn`] after every executed action. It ends the turn
//! when the action limit is reached or the hand runs dry, replenishes
//! the hand, and on wrapping the table runs the round bookkeeping:
//! income settlement, spend-ordered seating for the next round, and era
//! transitions once the deck and every hand are empty.

use crate::scoring::{score_era, PlayerScore};
use crate::state::{GameState, PlayerId};
use brass_data::defines::turns;
use brass_data::Era;

/// What the caller should surface after an action. Era and game end carry
/// the scoring breakdown, which is applied exactly once; calling
/// [`advance_turn`] on a finished game returns an empty breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnEvent {
    Continue,
    /// The canal era just ended; play continues in the rail era.
    EndCanalEra(Vec<PlayerScore>),
    EndGame(Vec<PlayerScore>),
}

#[tracing::instrument(skip(state))]
pub fn advance_turn(state: &mut GameState) -> TurnEvent {
    if state.game_over {
        return TurnEvent::EndGame(Vec::new());
    }

    state.actions_this_turn += 1;
    let player = state.current_player_id();
    if state.actions_this_turn < state.actions_per_turn
        && !state.players[player].hand.is_empty()
    {
        return TurnEvent::Continue;
    }

    // Turn over.
    state.draw_cards(player);
    state.actions_this_turn = 0;
    state.current_index += 1;
    skip_empty_hands(state);
    if state.current_index >= state.num_players {
        return end_round(state);
    }
    TurnEvent::Continue
}

/// A player whose hand ran out (deck exhausted) takes no more turns this
/// era.
fn skip_empty_hands(state: &mut GameState) {
    while state.current_index < state.num_players
        && state.current_player().hand.is_empty()
    {
        log::debug!(
            "player {} has no cards, skipping",
            state.current_player_id()
        );
        state.current_index += 1;
    }
}

fn end_round(state: &mut GameState) -> TurnEvent {
    let era_over = state.draw_deck.is_empty()
        && state.players.iter().all(|p| p.hand.is_empty());
    if era_over {
        return match state.era {
            Era::Canal => TurnEvent::EndCanalEra(end_canal_era(state)),
            Era::Rail => TurnEvent::EndGame(end_game(state)),
        };
    }

    settle_income(state);
    reseat_by_spend(state);
    state.round += 1;
    state.current_index = 0;
    state.actions_this_turn = 0;
    if state.is_first_round {
        state.is_first_round = false;
        state.actions_per_turn = turns::ACTIONS_PER_TURN;
    }
    skip_empty_hands(state);
    log::info!("round {} begins, order {:?}", state.round, state.turn_order);
    TurnEvent::Continue
}

/// Pay each player their income. A player who cannot cover a negative
/// income loses a victory point per missing pound and stays at zero.
fn settle_income(state: &mut GameState) {
    for player in 0..state.num_players {
        let income = state.players[player].income.get();
        let p = &mut state.players[player];
        p.money += income;
        if p.money < 0 {
            let shortfall = -p.money;
            log::warn!("player {player} short £{shortfall}, losing {shortfall} vp");
            p.vp = (p.vp - shortfall).max(0);
            p.money = 0;
        }
    }
}

/// Next round's seating: cheapest spender first. The sort is stable, so
/// equal spenders keep their relative order.
fn reseat_by_spend(state: &mut GameState) {
    let spent = state.spent_this_round.clone();
    state.turn_order.sort_by_key(|&player| spent[player]);
    state.spent_this_round = vec![0; state.num_players];
}

/// Canal-era teardown: score, clear the canal infrastructure, and deal
/// the rail era.
fn end_canal_era(state: &mut GameState) -> Vec<PlayerScore> {
    log::info!("canal era over after round {}", state.round);
    let scores = score_era(state);

    // Canal links come off the board and back into player pools.
    let removed: Vec<PlayerId> = state
        .board_links
        .values()
        .filter(|link| link.kind == Era::Canal)
        .map(|link| link.owner)
        .collect();
    state.board_links.retain(|_, link| link.kind != Era::Canal);
    for owner in removed {
        state.players[owner].links_canal += 1;
    }

    // Level 1 tiles are obsolete and leave the game.
    state.board.retain(|_, tile| tile.spec.level > 1);
    state.farm_tiles.retain(|_, tile| tile.spec.level > 1);

    for m in &mut state.merchants {
        m.has_beer = true;
    }

    // The rail era opens like the canal era did: round 1, one action.
    state.era = Era::Rail;
    state.round = 1;
    state.is_first_round = true;
    state.current_index = 0;
    state.actions_this_turn = 0;
    state.actions_per_turn = turns::FIRST_ROUND_ACTIONS;
    reseat_by_spend(state);

    state.rebuild_deck();
    state.deal_hands();
    scores
}

/// Rail-era teardown: final scoring plus an income bonus, then the game
/// is over.
fn end_game(state: &mut GameState) -> Vec<PlayerScore> {
    log::info!("game over after round {}", state.round);
    state.current_index = 0;
    state.actions_this_turn = 0;
    let scores = score_era(state);
    for player in 0..state.num_players {
        let income = state.players[player].income.get();
        state.players[player].vp += income;
    }
    state.game_over = true;
    scores
}
