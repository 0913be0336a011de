//! Test-support builder for assembling board positions directly.

use crate::cards::Card;
use crate::state::{BuiltTile, GameState, Link, PlayerId, TileSite};
use brass_data::{tiles_for, ConnectionId, Era, Industry, LocationId};

pub struct GameStateBuilder {
    state: GameState,
}

const TEST_NAMES: [&str; 4] = ["Red", "Yellow", "Purple", "White"];

impl GameStateBuilder {
    pub fn new(num_players: usize) -> Self {
        Self::with_seed(num_players, 0)
    }

    pub fn with_seed(num_players: usize, seed: u64) -> Self {
        let state = GameState::new(num_players, &TEST_NAMES[..num_players], seed)
            .expect("valid test player count");
        Self { state }
    }

    /// Place an unflipped tile of the given level in a city slot, with
    /// its full starting cubes. The owner's stack is left untouched.
    pub fn with_tile(
        self,
        city: LocationId,
        slot: usize,
        owner: PlayerId,
        industry: Industry,
        level: u8,
    ) -> Self {
        let spec = spec_for(industry, level);
        self.with_tile_state(
            TileSite::City { city, slot },
            owner,
            industry,
            level,
            false,
            spec.cubes,
        )
    }

    pub fn with_farm_tile(self, farm: LocationId, owner: PlayerId, level: u8) -> Self {
        let spec = spec_for(Industry::Brewery, level);
        self.with_tile_state(
            TileSite::Farm(farm),
            owner,
            Industry::Brewery,
            level,
            false,
            spec.cubes,
        )
    }

    /// Full control over flip state and cube count.
    pub fn with_tile_state(
        mut self,
        site: TileSite,
        owner: PlayerId,
        industry: Industry,
        level: u8,
        flipped: bool,
        cubes: u8,
    ) -> Self {
        self.state.place_tile(
            site,
            BuiltTile {
                owner,
                spec: spec_for(industry, level),
                flipped,
                cubes,
            },
        );
        self
    }

    pub fn with_link(mut self, connection: ConnectionId, owner: PlayerId, kind: Era) -> Self {
        self.state.board_links.insert(connection, Link { owner, kind });
        self
    }

    pub fn with_hand(mut self, player: PlayerId, hand: Vec<Card>) -> Self {
        self.state.players[player].hand = hand;
        self
    }

    pub fn with_money(mut self, player: PlayerId, money: i32) -> Self {
        self.state.players[player].money = money;
        self
    }

    pub fn with_empty_deck(mut self) -> Self {
        self.state.draw_deck.clear();
        self
    }

    pub fn in_rail_era(mut self) -> Self {
        self.state.era = Era::Rail;
        self
    }

    pub fn build(self) -> GameState {
        self.state
    }
}

fn spec_for(industry: Industry, level: u8) -> &'static brass_data::TileSpec {
    tiles_for(industry)
        .iter()
        .find(|spec| spec.level == level)
        .expect("tile level exists")
}
