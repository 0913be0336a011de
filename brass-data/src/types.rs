use serde::Serialize;

/// Stable key for a board location (city, merchant, or brewery farm).
///
/// Keys are the `&'static str` identifiers from the map tables; they are
/// valid for the whole program and cheap to copy and hash.
pub type LocationId = &'static str;

/// Stable key for a connection between two locations.
pub type ConnectionId = &'static str;

/// The six industry kinds a tile can be.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Industry {
    CottonMill,
    CoalMine,
    IronWorks,
    Manufacturer,
    Pottery,
    Brewery,
}

impl Industry {
    pub const ALL: [Industry; 6] = [
        Industry::CottonMill,
        Industry::CoalMine,
        Industry::IronWorks,
        Industry::Manufacturer,
        Industry::Pottery,
        Industry::Brewery,
    ];

    /// Industries that flip by selling goods through a merchant.
    pub fn is_sellable(self) -> bool {
        matches!(
            self,
            Industry::CottonMill | Industry::Manufacturer | Industry::Pottery
        )
    }

    /// Industries that carry resource cubes and flip when depleted.
    pub fn is_resource(self) -> bool {
        matches!(
            self,
            Industry::CoalMine | Industry::IronWorks | Industry::Brewery
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Industry::CottonMill => "Cotton Mill",
            Industry::CoalMine => "Coal Mine",
            Industry::IronWorks => "Iron Works",
            Industry::Manufacturer => "Manufacturer",
            Industry::Pottery => "Pottery",
            Industry::Brewery => "Brewery",
        }
    }
}

impl std::fmt::Display for Industry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The two eras of the game. A link placed on the board is typed by the
/// era it was built in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Era {
    Canal,
    Rail,
}

impl std::fmt::Display for Era {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Era::Canal => f.write_str("canal"),
            Era::Rail => f.write_str("rail"),
        }
    }
}
