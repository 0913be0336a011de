//! Cards and the draw deck.
//!
//! Location and industry cards leave the game when discarded. Wild cards
//! are not part of the deck: they come from two shared piles via the
//! Scout action and return there when discarded.

use brass_data::{city, deck_spec, Industry, LocationId};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Card {
    Location(LocationId),
    Industry(Industry),
    WildLocation,
    WildIndustry,
}

impl Card {
    pub fn name(&self) -> String {
        match *self {
            Card::Location(loc) => city(loc).map_or_else(|| loc.to_string(), |c| c.name.to_string()),
            Card::Industry(industry) => industry.name().to_string(),
            Card::WildLocation => "Wild Location".to_string(),
            Card::WildIndustry => "Wild Industry".to_string(),
        }
    }

    pub fn is_wild(&self) -> bool {
        matches!(self, Card::WildLocation | Card::WildIndustry)
    }
}

/// Build and shuffle the draw deck for a player count. Returns an empty
/// deck for unsupported counts; setup validates the count first.
pub fn shuffled_deck<R: Rng>(num_players: usize, rng: &mut R) -> Vec<Card> {
    let Some(spec) = deck_spec(num_players) else {
        return Vec::new();
    };

    let mut deck = Vec::new();
    for &(location, count) in spec.locations {
        for _ in 0..count {
            deck.push(Card::Location(location));
        }
    }
    for &(industry, count) in spec.industries {
        for _ in 0..count {
            deck.push(Card::Industry(industry));
        }
    }

    deck.shuffle(rng);
    deck
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn deck_sizes_per_player_count() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(shuffled_deck(2, &mut rng).len(), 40);
        assert_eq!(shuffled_deck(3, &mut rng).len(), 54);
        assert_eq!(shuffled_deck(4, &mut rng).len(), 64);
    }

    #[test]
    fn deck_holds_no_wild_cards() {
        let mut rng = StdRng::seed_from_u64(7);
        assert!(shuffled_deck(4, &mut rng).iter().all(|c| !c.is_wild()));
    }

    #[test]
    fn same_seed_same_deck() {
        let a = shuffled_deck(3, &mut StdRng::seed_from_u64(42));
        let b = shuffled_deck(3, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
