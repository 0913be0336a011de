//! The seven player actions. Each has a query returning every currently
//! legal target with its computed cost, and an executor that re-checks
//! legality, mutates state, and discards the spent hand card. Executors
//! reject illegal targets without touching state.

pub mod build;
pub mod develop;
pub mod minor;
pub mod network;
pub mod sell;

pub use build::{build_targets, execute_build, BuildCost, BuildTarget};
pub use develop::{can_develop, developable_types, execute_develop, DevelopOption};
pub use minor::{can_scout, execute_loan, execute_pass, execute_scout};
pub use network::{execute_network, network_targets, NetworkTarget};
pub use sell::{execute_sell, sell_targets, SellTarget};

use crate::cards::Card;
use crate::connectivity::in_network;
use crate::state::{GameState, PlayerId, TileSite};
use brass_data::{ConnectionId, Industry, LocationId};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("illegal target: {0}")]
    IllegalTarget(String),
    /// Costing diverged between enumeration and execution. Not
    /// user-recoverable; both sides share the source lists, so this
    /// indicates a logic fault.
    #[error("insufficient resources: {0}")]
    InsufficientResources(String),
    #[error("invalid card index {index} for hand of {hand_len}")]
    InvalidCard { index: usize, hand_len: usize },
    #[error("the chosen card does not allow this build")]
    CardMismatch,
    #[error("the game is over")]
    GameOver,
}

/// The seven action kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ActionKind {
    Build,
    Network,
    Develop,
    Sell,
    Loan,
    Scout,
    Pass,
}

/// A fully specified action: the payload each executor needs, alongside
/// the hand card spent on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Action {
    Build {
        city: LocationId,
        slot: usize,
        industry: Industry,
    },
    Network {
        connection: ConnectionId,
    },
    Develop {
        first: Industry,
        second: Option<Industry>,
    },
    Sell {
        sites: Vec<TileSite>,
    },
    Loan,
    /// Two extra hand cards discarded on top of the action card.
    Scout {
        extra: [usize; 2],
    },
    Pass,
}

impl Action {
    pub fn kind(&self) -> ActionKind {
        match self {
            Action::Build { .. } => ActionKind::Build,
            Action::Network { .. } => ActionKind::Network,
            Action::Develop { .. } => ActionKind::Develop,
            Action::Sell { .. } => ActionKind::Sell,
            Action::Loan => ActionKind::Loan,
            Action::Scout { .. } => ActionKind::Scout,
            Action::Pass => ActionKind::Pass,
        }
    }
}

/// Whether the player could take an action of this kind at all.
pub fn can_perform(state: &GameState, player: PlayerId, kind: ActionKind) -> bool {
    if state.game_over || state.players[player].hand.is_empty() {
        return false;
    }
    match kind {
        ActionKind::Build => !build_targets(state, player).is_empty(),
        ActionKind::Network => !network_targets(state, player).is_empty(),
        ActionKind::Develop => can_develop(state, player),
        ActionKind::Sell => !sell_targets(state, player).is_empty(),
        ActionKind::Scout => can_scout(state, player),
        ActionKind::Loan | ActionKind::Pass => true,
    }
}

/// Hand-card indices usable for an action. Only Build restricts the
/// card; every other action discards any card.
pub fn valid_cards_for_action(
    state: &GameState,
    player: PlayerId,
    kind: ActionKind,
    build_target: Option<&BuildTarget>,
) -> Vec<usize> {
    let hand = &state.players[player].hand;
    match (kind, build_target) {
        (ActionKind::Build, Some(target)) => {
            let networked = in_network(state, player, target.city);
            hand.iter()
                .enumerate()
                .filter(|(_, card)| card_allows_build(card, target, networked))
                .map(|(index, _)| index)
                .collect()
        }
        _ => (0..hand.len()).collect(),
    }
}

pub(crate) fn card_allows_build(card: &Card, target: &BuildTarget, networked: bool) -> bool {
    match card {
        Card::Location(loc) => *loc == target.city,
        Card::Industry(industry) => *industry == target.industry && networked,
        Card::WildLocation => true,
        Card::WildIndustry => networked,
    }
}

/// Execute any action, discarding the card at `card_index`. Returns a
/// display message on success; failures leave state untouched.
#[tracing::instrument(skip(state, action), fields(kind = ?action.kind()))]
pub fn execute_action(
    state: &mut GameState,
    player: PlayerId,
    action: &Action,
    card_index: usize,
) -> Result<String, ActionError> {
    if state.game_over {
        return Err(ActionError::GameOver);
    }
    check_card_index(state, player, card_index)?;

    match action {
        Action::Build {
            city,
            slot,
            industry,
        } => execute_build(state, player, *city, *slot, *industry, card_index),
        Action::Network { connection } => execute_network(state, player, *connection, card_index),
        Action::Develop { first, second } => {
            execute_develop(state, player, *first, *second, card_index)
        }
        Action::Sell { sites } => execute_sell(state, player, sites, card_index),
        Action::Loan => execute_loan(state, player, card_index),
        Action::Scout { extra } => execute_scout(state, player, [card_index, extra[0], extra[1]]),
        Action::Pass => execute_pass(state, player, card_index),
    }
}

pub(crate) fn check_card_index(
    state: &GameState,
    player: PlayerId,
    card_index: usize,
) -> Result<(), ActionError> {
    let hand_len = state.players[player].hand.len();
    if card_index >= hand_len {
        return Err(ActionError::InvalidCard {
            index: card_index,
            hand_len,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::GameStateBuilder;

    #[test]
    fn loan_and_pass_always_available_with_cards() {
        let state = GameStateBuilder::new(2).build();
        assert!(can_perform(&state, 0, ActionKind::Loan));
        assert!(can_perform(&state, 0, ActionKind::Pass));
    }

    #[test]
    fn empty_hand_blocks_every_action() {
        let state = GameStateBuilder::new(2).with_hand(0, vec![]).build();
        for kind in [
            ActionKind::Build,
            ActionKind::Network,
            ActionKind::Develop,
            ActionKind::Sell,
            ActionKind::Loan,
            ActionKind::Scout,
            ActionKind::Pass,
        ] {
            assert!(!can_perform(&state, 0, kind));
        }
    }

    #[test]
    fn execute_rejects_out_of_range_card() {
        let mut state = GameStateBuilder::new(2).build();
        let err = execute_action(&mut state, 0, &Action::Pass, 99).unwrap_err();
        assert_eq!(
            err,
            ActionError::InvalidCard {
                index: 99,
                hand_len: 8
            }
        );
    }
}
