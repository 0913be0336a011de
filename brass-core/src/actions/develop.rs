//! The Develop action: remove one or two lowest tiles from the player's
//! stacks, paying one iron per removal. Banked merchant-bonus develops
//! waive the iron.

use crate::actions::build::consume_iron;
use crate::actions::{check_card_index, ActionError};
use crate::connectivity::{iron_sources, IronSource};
use crate::state::{GameState, PlayerId};
use brass_data::Industry;
use serde::Serialize;

/// One removable stack top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DevelopOption {
    pub industry: Industry,
    pub level: u8,
    /// Whether a second copy of the same type could go in the same action.
    pub twice: bool,
}

/// Industries whose next tile may be developed away right now.
pub fn developable_types(state: &GameState, player: PlayerId) -> Vec<DevelopOption> {
    Industry::ALL
        .into_iter()
        .filter_map(|industry| {
            let spec = state.next_tile(player, industry)?;
            if !spec.can_develop {
                return None;
            }
            let stack = &state.players[player].stacks[&industry];
            let twice = stack.len() >= 2 && stack[1].can_develop;
            Some(DevelopOption {
                industry,
                level: spec.level,
                twice,
            })
        })
        .collect()
}

/// True when the player can develop at least one tile and pay for it.
pub fn can_develop(state: &GameState, player: PlayerId) -> bool {
    !developable_types(state, player).is_empty() && develop_cost(state, player, 1).is_some()
}

/// Total money cost of `removals` sequential iron payments, walking the
/// market ladder for units no works or banked free develop covers.
/// `None` when the iron or the money falls short.
fn develop_cost(state: &GameState, player: PlayerId, removals: u8) -> Option<i32> {
    let paid = removals.saturating_sub(state.players[player].free_develops);
    if paid == 0 {
        return Some(0);
    }
    let works = iron_sources(state)
        .iter()
        .filter(|s| matches!(s, IronSource::Works(_)))
        .count() as u8;
    let from_market = paid.saturating_sub(works);

    let mut market = state.iron_market.clone();
    let mut cost = 0;
    for _ in 0..from_market {
        cost += market.buy_one()?;
    }
    (cost <= state.players[player].money).then_some(cost)
}

/// Pay for and take one iron unit, honoring a banked free develop.
fn pay_one_iron(state: &mut GameState, player: PlayerId) {
    if state.players[player].free_develops > 0 {
        state.players[player].free_develops -= 1;
        return;
    }
    if let Some(IronSource::Market { price }) = iron_sources(state).first() {
        state.spend_money(player, *price);
    }
    consume_iron(state, 1);
}

/// Remove the lowest tile of `first` (and optionally `second`), spending
/// the chosen card. Each removal is priced and paid in sequence, so the
/// second removal sees the market as the first one left it.
pub fn execute_develop(
    state: &mut GameState,
    player: PlayerId,
    first: Industry,
    second: Option<Industry>,
    card_index: usize,
) -> Result<String, ActionError> {
    check_card_index(state, player, card_index)?;

    let options = developable_types(state, player);
    let first_option = options
        .iter()
        .find(|o| o.industry == first)
        .copied()
        .ok_or_else(|| ActionError::IllegalTarget(format!("cannot develop {first}")))?;
    if let Some(second) = second {
        let ok = if second == first {
            first_option.twice
        } else {
            options.iter().any(|o| o.industry == second)
        };
        if !ok {
            return Err(ActionError::IllegalTarget(format!(
                "cannot develop {second} as the second removal"
            )));
        }
    }

    // Both removals must be payable before anything mutates.
    let removals = 1 + u8::from(second.is_some());
    if develop_cost(state, player, removals).is_none() {
        return Err(ActionError::InsufficientResources(
            "no iron available for develop".to_string(),
        ));
    }

    let mut removed = Vec::new();
    pay_one_iron(state, player);
    if let Some(spec) = state.use_next_tile(player, first) {
        removed.push(format!("{first} Level {}", spec.level));
    }
    if let Some(second) = second {
        pay_one_iron(state, player);
        if let Some(spec) = state.use_next_tile(player, second) {
            removed.push(format!("{second} Level {}", spec.level));
        }
    }

    state.discard_card(player, card_index);
    Ok(format!("Developed away {}", removed.join(" and ")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TileSite;
    use crate::testing::GameStateBuilder;

    #[test]
    fn every_stack_but_pottery_starts_developable() {
        let state = GameStateBuilder::new(2).build();
        let options = developable_types(&state, 0);
        // Pottery level 1 cannot be developed away.
        assert_eq!(options.len(), Industry::ALL.len() - 1);
        for option in options {
            assert_eq!(option.level, 1);
        }
        assert!(can_develop(&state, 0));
    }

    #[test]
    fn pottery_level_one_is_not_developable() {
        let state = GameStateBuilder::new(2).build();
        let pottery = developable_types(&state, 0)
            .into_iter()
            .find(|o| o.industry == Industry::Pottery);
        assert!(pottery.is_none());
    }

    #[test]
    fn develop_removes_tile_and_pays_market_iron() {
        let mut state = GameStateBuilder::new(2).build();
        let money_before = state.players[0].money;
        let iron_before = state.iron_market.stock();

        let msg =
            execute_develop(&mut state, 0, Industry::CoalMine, None, 0).unwrap();
        assert_eq!(msg, "Developed away Coal Mine Level 1");
        assert_eq!(state.next_tile(0, Industry::CoalMine).unwrap().level, 2);
        assert_eq!(state.players[0].money, money_before - 2);
        assert_eq!(state.iron_market.stock(), iron_before - 1);
        assert_eq!(state.players[0].hand.len(), 7);
    }

    #[test]
    fn double_develop_walks_the_price_ladder() {
        let mut state = GameStateBuilder::new(2).build();
        let money_before = state.players[0].money;

        execute_develop(
            &mut state,
            0,
            Industry::CoalMine,
            Some(Industry::Brewery),
            0,
        )
        .unwrap();
        // Iron starts at price 2; the second unit costs 2 as well.
        assert_eq!(state.players[0].money, money_before - 4);
        assert_eq!(state.next_tile(0, Industry::Brewery).unwrap().level, 1);
        assert_eq!(
            state.players[0].stacks[&Industry::Brewery].len(),
            6,
            "one of two level-1 breweries removed"
        );
    }

    #[test]
    fn board_iron_is_consumed_before_the_market() {
        let mut state = GameStateBuilder::new(2)
            .with_tile("dudley", 1, 1, Industry::IronWorks, 1)
            .build();
        let money_before = state.players[0].money;

        execute_develop(&mut state, 0, Industry::CottonMill, None, 0).unwrap();
        assert_eq!(state.players[0].money, money_before, "works iron is free");
        let works = state
            .tile_at(TileSite::City { city: "dudley", slot: 1 })
            .unwrap();
        assert_eq!(works.cubes, 3);
    }

    #[test]
    fn free_develop_waives_the_iron() {
        let mut state = GameStateBuilder::new(2).build();
        state.players[0].free_develops = 1;
        let money_before = state.players[0].money;
        let iron_before = state.iron_market.stock();

        execute_develop(&mut state, 0, Industry::CoalMine, None, 0).unwrap();
        assert_eq!(state.players[0].free_develops, 0);
        assert_eq!(state.players[0].money, money_before);
        assert_eq!(state.iron_market.stock(), iron_before);
    }

    #[test]
    fn broke_player_cannot_develop_without_board_iron() {
        let state = GameStateBuilder::new(2).with_money(0, 1).build();
        assert!(!can_develop(&state, 0), "market iron costs 2");

        let state = GameStateBuilder::new(2)
            .with_money(0, 1)
            .with_tile("derby", 2, 1, Industry::IronWorks, 1)
            .build();
        assert!(can_develop(&state, 0));
    }

    #[test]
    fn same_type_double_needs_two_developable_copies() {
        let mut state = GameStateBuilder::new(2).build();
        // Drain the coal stack to a single remaining tile.
        let stack = state.players[0].stacks.get_mut(&Industry::CoalMine).unwrap();
        stack.drain(..stack.len() - 1);

        let checksum = state.checksum();
        let err = execute_develop(
            &mut state,
            0,
            Industry::CoalMine,
            Some(Industry::CoalMine),
            0,
        )
        .unwrap_err();
        assert!(matches!(err, ActionError::IllegalTarget(_)));
        assert_eq!(state.checksum(), checksum);
    }
}
