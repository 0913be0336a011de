//! Loan, Scout, and Pass.

use crate::actions::{check_card_index, ActionError};
use crate::cards::Card;
use crate::state::{GameState, PlayerId};
use brass_data::defines::{cards as card_defs, economy};

/// Take a loan: gain money, drop income levels.
pub fn execute_loan(
    state: &mut GameState,
    player: PlayerId,
    card_index: usize,
) -> Result<String, ActionError> {
    check_card_index(state, player, card_index)?;

    state.players[player].money += economy::LOAN_AMOUNT;
    state.adjust_income(player, -economy::LOAN_INCOME_PENALTY);
    state.discard_card(player, card_index);
    Ok(format!(
        "Took a £{} loan, income now {}",
        economy::LOAN_AMOUNT,
        state.players[player].income.get()
    ))
}

/// Scout needs three discards, no wild card already in hand, and both
/// wild piles stocked.
pub fn can_scout(state: &GameState, player: PlayerId) -> bool {
    let p = &state.players[player];
    p.hand.len() >= card_defs::SCOUT_DISCARDS
        && !p.hand.iter().any(Card::is_wild)
        && state.wild_location_pile > 0
        && state.wild_industry_pile > 0
}

/// Discard three cards for one wild location and one wild industry card.
pub fn execute_scout(
    state: &mut GameState,
    player: PlayerId,
    discards: [usize; 3],
) -> Result<String, ActionError> {
    for index in discards {
        check_card_index(state, player, index)?;
    }
    if discards[0] == discards[1] || discards[0] == discards[2] || discards[1] == discards[2] {
        return Err(ActionError::IllegalTarget(
            "scout discards must be three distinct cards".to_string(),
        ));
    }
    if !can_scout(state, player) {
        return Err(ActionError::IllegalTarget(
            "scout unavailable".to_string(),
        ));
    }

    // Highest index first so earlier removals don't shift later ones.
    let mut ordered = discards;
    ordered.sort_unstable_by(|a, b| b.cmp(a));
    for index in ordered {
        state.discard_card(player, index);
    }

    state.players[player].hand.push(Card::WildLocation);
    state.players[player].hand.push(Card::WildIndustry);
    state.players[player].has_wild_location = true;
    state.players[player].has_wild_industry = true;
    state.wild_location_pile -= 1;
    state.wild_industry_pile -= 1;
    Ok("Scouted a wild location and a wild industry card".to_string())
}

/// Discard a card and do nothing.
pub fn execute_pass(
    state: &mut GameState,
    player: PlayerId,
    card_index: usize,
) -> Result<String, ActionError> {
    check_card_index(state, player, card_index)?;
    state.discard_card(player, card_index);
    Ok("Passed".to_string())
}
