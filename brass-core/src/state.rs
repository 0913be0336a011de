//! The mutable game snapshot: players, board placements, links, markets,
//! merchants, decks, and turn counters. Created once per game; every
//! other component reads or mutates it through an explicit reference.

use crate::bounded::{new_income, BoundedInt};
use crate::cards::{shuffled_deck, Card};
use crate::market::Market;
use brass_data::defines::{cards as card_defs, economy, links, turns};
use brass_data::{
    is_brewery_farm, tiles_for, tiles_for_player_count, ConnectionId, Era, Industry, LocationId,
    TileSpec,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rustc_hash::FxHashMap;
use serde::Serialize;
use serde_json::json;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use thiserror::Error;

pub type PlayerId = usize;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupError {
    #[error("unsupported player count {0}, expected 2-4")]
    PlayerCount(usize),
    #[error("expected {expected} player names, got {got}")]
    NameCount { expected: usize, got: usize },
}

/// Where a built tile sits: a numbered slot of a city, or one of the
/// standalone brewery farms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum TileSite {
    City { city: LocationId, slot: usize },
    Farm(LocationId),
}

impl TileSite {
    /// The location the site belongs to.
    pub fn location(&self) -> LocationId {
        match *self {
            TileSite::City { city, .. } => city,
            TileSite::Farm(farm) => farm,
        }
    }
}

impl std::fmt::Display for TileSite {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TileSite::City { city, slot } => write!(f, "{city}[{slot}]"),
            TileSite::Farm(farm) => write!(f, "farm:{farm}"),
        }
    }
}

/// An industry tile on the board.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BuiltTile {
    pub owner: PlayerId,
    pub spec: &'static TileSpec,
    /// False while active/producing; true once sold or depleted.
    pub flipped: bool,
    pub cubes: u8,
}

impl BuiltTile {
    pub fn industry(&self) -> Industry {
        self.spec.industry
    }
}

/// A canal or rail link occupying a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Link {
    pub owner: PlayerId,
    pub kind: Era,
}

/// A merchant tile dealt to a merchant location at setup.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MerchantTile {
    pub location: LocationId,
    /// `None` buys any sellable good.
    pub buys: Option<Industry>,
    pub has_beer: bool,
    pub bonus_claimed: bool,
}

/// Per-type stack report for UI display.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RemainingStack {
    pub count: usize,
    pub next_level: Option<u8>,
}

#[derive(Debug, Clone)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub money: i32,
    pub income: BoundedInt,
    pub vp: i32,
    pub hand: Vec<Card>,
    /// Unused tiles per industry, lowest level first.
    pub stacks: FxHashMap<Industry, Vec<&'static TileSpec>>,
    pub links_canal: u8,
    pub links_rail: u8,
    pub has_wild_location: bool,
    pub has_wild_industry: bool,
    /// Banked merchant-bonus developments that waive the iron cost.
    pub free_develops: u8,
}

impl Player {
    fn new(id: PlayerId, name: String) -> Self {
        let mut stacks = FxHashMap::default();
        for industry in Industry::ALL {
            let mut stack = Vec::new();
            for spec in tiles_for(industry) {
                for _ in 0..spec.copies {
                    stack.push(spec);
                }
            }
            stacks.insert(industry, stack);
        }
        Self {
            id,
            name,
            money: economy::INITIAL_MONEY,
            income: new_income(),
            vp: 0,
            hand: Vec::new(),
            stacks,
            links_canal: links::LINKS_PER_PLAYER,
            links_rail: links::LINKS_PER_PLAYER,
            has_wild_location: false,
            has_wild_industry: false,
            free_develops: 0,
        }
    }

    pub fn links_remaining(&self, era: Era) -> u8 {
        match era {
            Era::Canal => self.links_canal,
            Era::Rail => self.links_rail,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub num_players: usize,
    pub era: Era,
    pub round: u32,
    pub game_over: bool,
    /// Index into `turn_order` of the player currently acting.
    pub current_index: usize,
    pub actions_this_turn: u32,
    pub actions_per_turn: u32,
    pub is_first_round: bool,
    /// Player ids in this round's acting order.
    pub turn_order: Vec<PlayerId>,
    /// Money spent this round, indexed by player id.
    pub spent_this_round: Vec<i32>,
    pub players: Vec<Player>,
    /// Built tiles in city slots.
    pub board: FxHashMap<(LocationId, usize), BuiltTile>,
    /// Built tiles on the standalone brewery farms.
    pub farm_tiles: FxHashMap<LocationId, BuiltTile>,
    pub board_links: FxHashMap<ConnectionId, Link>,
    pub coal_market: Market,
    pub iron_market: Market,
    pub merchants: Vec<MerchantTile>,
    pub draw_deck: Vec<Card>,
    pub wild_location_pile: u8,
    pub wild_industry_pile: u8,
    /// Seed all shuffles derive from; identical seeds replay identically.
    pub rng_seed: u64,
    shuffles_done: u64,
}

impl GameState {
    pub fn new(num_players: usize, names: &[&str], seed: u64) -> Result<Self, SetupError> {
        if !(2..=4).contains(&num_players) {
            return Err(SetupError::PlayerCount(num_players));
        }
        if names.len() != num_players {
            return Err(SetupError::NameCount {
                expected: num_players,
                got: names.len(),
            });
        }

        let players = names
            .iter()
            .enumerate()
            .map(|(id, name)| Player::new(id, (*name).to_string()))
            .collect();

        let mut state = Self {
            num_players,
            era: Era::Canal,
            round: 1,
            game_over: false,
            current_index: 0,
            actions_this_turn: 0,
            actions_per_turn: turns::FIRST_ROUND_ACTIONS,
            is_first_round: true,
            turn_order: (0..num_players).collect(),
            spent_this_round: vec![0; num_players],
            players,
            board: FxHashMap::default(),
            farm_tiles: FxHashMap::default(),
            board_links: FxHashMap::default(),
            coal_market: Market::coal(),
            iron_market: Market::iron(),
            merchants: Vec::new(),
            draw_deck: Vec::new(),
            wild_location_pile: card_defs::WILD_LOCATION_PILE,
            wild_industry_pile: card_defs::WILD_INDUSTRY_PILE,
            rng_seed: seed,
            shuffles_done: 0,
        };

        state.init_merchants();
        state.rebuild_deck();
        state.deal_hands();
        Ok(state)
    }

    /// A fresh RNG for one shuffle. Each shuffle advances a counter so a
    /// game is fully determined by its seed.
    fn shuffle_rng(&mut self) -> StdRng {
        let rng = StdRng::seed_from_u64(self.rng_seed.wrapping_add(self.shuffles_done));
        self.shuffles_done += 1;
        rng
    }

    fn init_merchants(&mut self) {
        let mut tiles = tiles_for_player_count(self.num_players);
        let mut rng = self.shuffle_rng();
        tiles.shuffle(&mut rng);
        self.merchants = tiles
            .into_iter()
            .map(|spec| MerchantTile {
                location: spec.location,
                buys: spec.buys,
                has_beer: true,
                bonus_claimed: false,
            })
            .collect();
    }

    /// Build a fresh shuffled draw deck (setup and era transition).
    pub(crate) fn rebuild_deck(&mut self) {
        let mut rng = self.shuffle_rng();
        self.draw_deck = shuffled_deck(self.num_players, &mut rng);
    }

    pub(crate) fn deal_hands(&mut self) {
        for id in 0..self.num_players {
            self.draw_cards(id);
        }
    }

    /// Replenish a hand to the hand size from the draw deck.
    pub fn draw_cards(&mut self, player: PlayerId) {
        while self.players[player].hand.len() < turns::HAND_SIZE {
            let Some(card) = self.draw_deck.pop() else {
                break;
            };
            self.players[player].hand.push(card);
        }
    }

    /// Remove a hand card. Wild cards return to the shared piles; other
    /// cards leave the game.
    pub fn discard_card(&mut self, player: PlayerId, card_index: usize) {
        if card_index >= self.players[player].hand.len() {
            return;
        }
        let card = self.players[player].hand.remove(card_index);
        match card {
            Card::WildLocation => {
                self.wild_location_pile += 1;
                self.players[player].has_wild_location = false;
            }
            Card::WildIndustry => {
                self.wild_industry_pile += 1;
                self.players[player].has_wild_industry = false;
            }
            Card::Location(_) | Card::Industry(_) => {}
        }
    }

    // ------------------------------------------------------------------
    // Current player / spending
    // ------------------------------------------------------------------

    pub fn current_player_id(&self) -> PlayerId {
        self.turn_order[self.current_index]
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_id()]
    }

    /// Deduct money and record it in the round spend tracker that drives
    /// next round's turn order.
    pub fn spend_money(&mut self, player: PlayerId, amount: i32) {
        self.players[player].money -= amount;
        self.spent_this_round[player] += amount;
    }

    pub fn adjust_income(&mut self, player: PlayerId, delta: i32) {
        self.players[player].income.add(delta);
    }

    // ------------------------------------------------------------------
    // Board tiles
    // ------------------------------------------------------------------

    pub fn tile_at(&self, site: TileSite) -> Option<&BuiltTile> {
        match site {
            TileSite::City { city, slot } => self.board.get(&(city, slot)),
            TileSite::Farm(farm) => self.farm_tiles.get(farm),
        }
    }

    fn tile_at_mut(&mut self, site: TileSite) -> Option<&mut BuiltTile> {
        match site {
            TileSite::City { city, slot } => self.board.get_mut(&(city, slot)),
            TileSite::Farm(farm) => self.farm_tiles.get_mut(farm),
        }
    }

    pub(crate) fn place_tile(&mut self, site: TileSite, tile: BuiltTile) {
        match site {
            TileSite::City { city, slot } => {
                self.board.insert((city, slot), tile);
            }
            TileSite::Farm(farm) => {
                debug_assert!(is_brewery_farm(farm));
                self.farm_tiles.insert(farm, tile);
            }
        }
    }

    /// All built tiles with their sites, city slots first.
    pub fn built_tiles(&self) -> impl Iterator<Item = (TileSite, &BuiltTile)> {
        let on_board = self
            .board
            .iter()
            .map(|(&(city, slot), tile)| (TileSite::City { city, slot }, tile));
        let on_farms = self
            .farm_tiles
            .iter()
            .map(|(&farm, tile)| (TileSite::Farm(farm), tile));
        on_board.chain(on_farms)
    }

    /// Remove one resource cube. Depletion flips the tile and credits
    /// its income delta to the owner. Returns false if the site has no
    /// cube to give.
    pub fn consume_cube(&mut self, site: TileSite) -> bool {
        let Some(tile) = self.tile_at_mut(site) else {
            return false;
        };
        if tile.cubes == 0 {
            return false;
        }
        tile.cubes -= 1;
        if tile.cubes == 0 {
            self.flip_tile(site);
        }
        true
    }

    /// Flip a tile and credit its income delta. Idempotent.
    pub fn flip_tile(&mut self, site: TileSite) {
        let Some(tile) = self.tile_at_mut(site) else {
            return;
        };
        if tile.flipped {
            return;
        }
        tile.flipped = true;
        let owner = tile.owner;
        let income = tile.spec.income;
        log::debug!("tile at {site} flipped, owner {owner} income +{income}");
        self.adjust_income(owner, income);
    }

    // ------------------------------------------------------------------
    // Player tile stacks
    // ------------------------------------------------------------------

    /// The next (lowest-level) unused tile of a type.
    pub fn next_tile(&self, player: PlayerId, industry: Industry) -> Option<&'static TileSpec> {
        self.players[player].stacks[&industry].first().copied()
    }

    /// Remove and return the next unused tile of a type.
    pub fn use_next_tile(
        &mut self,
        player: PlayerId,
        industry: Industry,
    ) -> Option<&'static TileSpec> {
        let stack = self.players[player].stacks.get_mut(&industry)?;
        if stack.is_empty() {
            return None;
        }
        Some(stack.remove(0))
    }

    /// Stack summary per industry for display.
    pub fn remaining_tiles(&self, player: PlayerId) -> FxHashMap<Industry, RemainingStack> {
        self.players[player]
            .stacks
            .iter()
            .map(|(&industry, stack)| {
                (
                    industry,
                    RemainingStack {
                        count: stack.len(),
                        next_level: stack.first().map(|spec| spec.level),
                    },
                )
            })
            .collect()
    }

    // ------------------------------------------------------------------
    // Determinism / rendering
    // ------------------------------------------------------------------

    /// Deterministic checksum over the whole state, for desync detection
    /// and idempotence tests. Identical states produce identical sums.
    pub fn checksum(&self) -> u64 {
        let mut hasher = DefaultHasher::new();

        self.era.hash(&mut hasher);
        self.round.hash(&mut hasher);
        self.current_index.hash(&mut hasher);
        self.actions_this_turn.hash(&mut hasher);
        self.actions_per_turn.hash(&mut hasher);
        self.game_over.hash(&mut hasher);
        self.turn_order.hash(&mut hasher);
        self.spent_this_round.hash(&mut hasher);

        for p in &self.players {
            p.money.hash(&mut hasher);
            p.income.get().hash(&mut hasher);
            p.vp.hash(&mut hasher);
            p.hand.hash(&mut hasher);
            for industry in Industry::ALL {
                p.stacks[&industry].len().hash(&mut hasher);
            }
            p.links_canal.hash(&mut hasher);
            p.links_rail.hash(&mut hasher);
            p.has_wild_location.hash(&mut hasher);
            p.has_wild_industry.hash(&mut hasher);
            p.free_develops.hash(&mut hasher);
        }

        let mut sites: Vec<_> = self.built_tiles().collect();
        sites.sort_by_key(|(site, _)| *site);
        for (site, tile) in sites {
            site.hash(&mut hasher);
            tile.owner.hash(&mut hasher);
            tile.spec.industry.hash(&mut hasher);
            tile.spec.level.hash(&mut hasher);
            tile.flipped.hash(&mut hasher);
            tile.cubes.hash(&mut hasher);
        }

        let mut link_ids: Vec<_> = self.board_links.keys().collect();
        link_ids.sort();
        for id in link_ids {
            let link = &self.board_links[id];
            id.hash(&mut hasher);
            link.owner.hash(&mut hasher);
            link.kind.hash(&mut hasher);
        }

        self.coal_market.stock().hash(&mut hasher);
        self.iron_market.stock().hash(&mut hasher);
        for m in &self.merchants {
            m.location.hash(&mut hasher);
            m.buys.hash(&mut hasher);
            m.has_beer.hash(&mut hasher);
            m.bonus_claimed.hash(&mut hasher);
        }
        self.draw_deck.hash(&mut hasher);
        self.wild_location_pile.hash(&mut hasher);
        self.wild_industry_pile.hash(&mut hasher);

        hasher.finish()
    }

    /// A compact JSON snapshot for text rendering and logs.
    pub fn summary(&self) -> serde_json::Value {
        json!({
            "era": self.era.to_string(),
            "round": self.round,
            "currentPlayer": self.current_player_id(),
            "actionsRemaining": self.actions_per_turn - self.actions_this_turn,
            "players": self.players.iter().map(|p| json!({
                "id": p.id,
                "name": p.name,
                "money": p.money,
                "income": p.income.get(),
                "vp": p.vp,
                "handSize": p.hand.len(),
                "linksRemaining": { "canal": p.links_canal, "rail": p.links_rail },
            })).collect::<Vec<_>>(),
            "coalMarket": self.coal_market.stock(),
            "ironMarket": self.iron_market.stock(),
            "boardIndustries": self.board.len() + self.farm_tiles.len(),
            "boardLinks": self.board_links.len(),
            "drawDeckSize": self.draw_deck.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_rejects_bad_player_counts() {
        assert_eq!(
            GameState::new(5, &["a", "b", "c", "d", "e"], 0).unwrap_err(),
            SetupError::PlayerCount(5)
        );
        assert!(matches!(
            GameState::new(2, &["a"], 0).unwrap_err(),
            SetupError::NameCount { expected: 2, got: 1 }
        ));
    }

    #[test]
    fn setup_deals_full_hands() {
        let state = GameState::new(2, &["Red", "Yellow"], 3).unwrap();
        for p in &state.players {
            assert_eq!(p.hand.len(), turns::HAND_SIZE);
            assert_eq!(p.money, economy::INITIAL_MONEY);
            assert_eq!(p.income.get(), economy::INITIAL_INCOME);
        }
        assert_eq!(state.draw_deck.len(), 40 - 2 * turns::HAND_SIZE);
        assert_eq!(state.merchants.len(), 5);
    }

    #[test]
    fn same_seed_same_checksum() {
        let a = GameState::new(3, &["a", "b", "c"], 99).unwrap();
        let b = GameState::new(3, &["a", "b", "c"], 99).unwrap();
        assert_eq!(a.checksum(), b.checksum());

        let c = GameState::new(3, &["a", "b", "c"], 100).unwrap();
        assert_ne!(a.checksum(), c.checksum());
    }

    #[test]
    fn consume_cube_flips_on_depletion_and_credits_income() {
        let mut state = GameState::new(2, &["a", "b"], 1).unwrap();
        let spec = &brass_data::industries::COAL_MINE_TILES[0];
        let site = TileSite::City {
            city: "dudley",
            slot: 0,
        };
        state.place_tile(
            site,
            BuiltTile {
                owner: 0,
                spec,
                flipped: false,
                cubes: 1,
            },
        );
        let income_before = state.players[0].income.get();

        assert!(state.consume_cube(site));
        let tile = state.tile_at(site).unwrap();
        assert_eq!(tile.cubes, 0);
        assert!(tile.flipped);
        assert_eq!(state.players[0].income.get(), income_before + spec.income);

        // No cube left; flipping again is a no-op.
        assert!(!state.consume_cube(site));
        state.flip_tile(site);
        assert_eq!(state.players[0].income.get(), income_before + spec.income);
    }

    #[test]
    fn tile_stacks_shrink_by_one_and_never_grow() {
        let mut state = GameState::new(2, &["a", "b"], 1).unwrap();
        let before = state.remaining_tiles(0)[&Industry::CoalMine].count;
        let spec = state.use_next_tile(0, Industry::CoalMine).unwrap();
        assert_eq!(spec.level, 1);
        let after = state.remaining_tiles(0)[&Industry::CoalMine].count;
        assert_eq!(after, before - 1);
        assert_eq!(
            state.next_tile(0, Industry::CoalMine).unwrap().level,
            2,
            "level 1 has a single copy"
        );
    }

    #[test]
    fn wild_discard_returns_to_pile() {
        let mut state = GameState::new(2, &["a", "b"], 1).unwrap();
        state.players[0].hand.push(Card::WildLocation);
        state.players[0].has_wild_location = true;
        state.wild_location_pile -= 1;

        let idx = state.players[0].hand.len() - 1;
        state.discard_card(0, idx);

        assert_eq!(state.wild_location_pile, card_defs::WILD_LOCATION_PILE);
        assert!(!state.players[0].has_wild_location);
    }
}
