//! End-of-era scoring: link points for built links, victory points for
//! flipped tiles.

use crate::state::{GameState, PlayerId};
use brass_data::defines::links;
use brass_data::{city, connection, is_merchant_location, LocationId};
use serde::Serialize;

/// One player's share of an era scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PlayerScore {
    pub player: PlayerId,
    pub link_vp: i32,
    pub industry_vp: i32,
    pub total: i32,
}

/// Link points one location contributes to an adjacent link: a flat
/// bounty for merchants, otherwise the printed link value of every
/// flipped tile there.
fn location_link_vp(state: &GameState, location: LocationId) -> i32 {
    if is_merchant_location(location) {
        return links::MERCHANT_LINK_VP;
    }
    let mut vp = 0;
    if let Some(c) = city(location) {
        for slot in 0..c.slots.len() {
            if let Some(tile) = state.board.get(&(location, slot)) {
                if tile.flipped {
                    vp += tile.spec.link_vp;
                }
            }
        }
    }
    if let Some(tile) = state.farm_tiles.get(location) {
        if tile.flipped {
            vp += tile.spec.link_vp;
        }
    }
    vp
}

/// Score the current era: every built link earns its owner the link
/// points of all locations it touches (routed waypoints included), and
/// every flipped tile earns its owner its printed victory points. The
/// points are credited to the players and the breakdown returned.
#[tracing::instrument(skip(state))]
pub fn score_era(state: &mut GameState) -> Vec<PlayerScore> {
    let mut scores: Vec<PlayerScore> = (0..state.num_players)
        .map(|player| PlayerScore {
            player,
            link_vp: 0,
            industry_vp: 0,
            total: 0,
        })
        .collect();

    for (&id, link) in &state.board_links {
        let Some(conn) = connection(id) else {
            continue;
        };
        let vp: i32 = [Some(conn.a), Some(conn.b), conn.via]
            .into_iter()
            .flatten()
            .map(|loc| location_link_vp(state, loc))
            .sum();
        scores[link.owner].link_vp += vp;
    }

    for (_, tile) in state.built_tiles() {
        if tile.flipped {
            scores[tile.owner].industry_vp += tile.spec.vp;
        }
    }

    for score in &mut scores {
        score.total = score.link_vp + score.industry_vp;
        state.players[score.player].vp += score.total;
        log::info!(
            "player {} scores {} ({} links, {} industry)",
            score.player,
            score.total,
            score.link_vp,
            score.industry_vp
        );
    }
    scores
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::TileSite;
    use crate::testing::GameStateBuilder;
    use brass_data::{Era, Industry};

    #[test]
    fn flipped_tiles_score_their_printed_vp() {
        let mut state = GameStateBuilder::new(2)
            .with_tile_state(
                TileSite::City { city: "dudley", slot: 0 },
                0,
                Industry::CoalMine,
                1,
                true,
                0,
            )
            .with_tile("derby", 2, 1, Industry::IronWorks, 1)
            .build();

        let scores = score_era(&mut state);
        assert_eq!(scores[0].industry_vp, 1, "flipped coal level 1");
        assert_eq!(scores[1].industry_vp, 0, "unflipped tiles score nothing");
        assert_eq!(state.players[0].vp, 1);
    }

    #[test]
    fn links_score_flipped_neighbours_and_merchants() {
        // Player 0's canal between Birmingham and Oxford: the merchant
        // bounty plus the flipped cotton mill's link value.
        let mut state = GameStateBuilder::new(2)
            .with_tile_state(
                TileSite::City { city: "birmingham", slot: 0 },
                1,
                Industry::CottonMill,
                1,
                true,
                0,
            )
            .with_link("birmingham-oxford", 0, Era::Canal)
            .build();

        let scores = score_era(&mut state);
        assert_eq!(scores[0].link_vp, links::MERCHANT_LINK_VP + 1);
        assert_eq!(scores[1].link_vp, 0, "link vp goes to the link owner");
        assert_eq!(scores[1].industry_vp, 5);
    }

    #[test]
    fn routed_links_score_their_waypoint_farm() {
        // Flipped brewery on the southern farm the connection routes
        // through.
        let mut state = GameStateBuilder::new(2)
            .with_link("kidderminster-worcester", 0, Era::Canal)
            .with_tile_state(TileSite::Farm("southern"), 1, Industry::Brewery, 1, true, 0)
            .build();

        let scores = score_era(&mut state);
        assert_eq!(scores[0].link_vp, 2, "waypoint brewery counts");
    }

    #[test]
    fn empty_board_scores_zero() {
        let mut state = GameStateBuilder::new(3).build();
        let scores = score_era(&mut state);
        assert!(scores.iter().all(|s| s.total == 0));
    }
}
