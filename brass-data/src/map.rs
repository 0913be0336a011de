//! Board topology: cities with their industry slots, standalone brewery
//! farms, and the connection list the link network is built on.

use crate::types::{ConnectionId, Industry, LocationId};

/// A city and its ordered industry slots. Each slot lists the industry
/// kinds allowed to be built there.
#[derive(Debug, Clone, Copy)]
pub struct City {
    pub id: LocationId,
    pub name: &'static str,
    pub slots: &'static [&'static [Industry]],
}

/// A standalone single-slot brewery location outside any city.
#[derive(Debug, Clone, Copy)]
pub struct BreweryFarm {
    pub id: LocationId,
    pub name: &'static str,
}

/// An unordered pair of locations a link can be built on. `via` routes
/// the connection through a brewery farm, so a link there touches three
/// locations.
#[derive(Debug, Clone, Copy)]
pub struct Connection {
    pub id: ConnectionId,
    pub a: LocationId,
    pub b: LocationId,
    pub canal: bool,
    pub rail: bool,
    pub via: Option<LocationId>,
}

impl Connection {
    /// The endpoint opposite `loc`, if `loc` is an endpoint.
    pub fn other_end(&self, loc: LocationId) -> Option<LocationId> {
        if self.a == loc {
            Some(self.b)
        } else if self.b == loc {
            Some(self.a)
        } else {
            None
        }
    }

    pub fn touches(&self, loc: LocationId) -> bool {
        self.a == loc || self.b == loc || self.via == Some(loc)
    }
}

use Industry::{Brewery, CoalMine, CottonMill, IronWorks, Manufacturer, Pottery};

pub const CITIES: &[City] = &[
    City {
        id: "belper",
        name: "Belper",
        slots: &[&[CottonMill, Manufacturer], &[CoalMine], &[Pottery]],
    },
    City {
        id: "derby",
        name: "Derby",
        slots: &[
            &[CottonMill, Brewery],
            &[CottonMill, Manufacturer],
            &[IronWorks],
        ],
    },
    City {
        id: "leek",
        name: "Leek",
        slots: &[&[CottonMill, Manufacturer], &[CottonMill, CoalMine]],
    },
    City {
        id: "stokeOnTrent",
        name: "Stoke-on-Trent",
        slots: &[
            &[CottonMill, Manufacturer],
            &[Pottery, IronWorks],
            &[Manufacturer],
        ],
    },
    City {
        id: "stone",
        name: "Stone",
        slots: &[&[CottonMill, Brewery], &[Manufacturer, CoalMine]],
    },
    City {
        id: "uttoxeter",
        name: "Uttoxeter",
        slots: &[&[Manufacturer, Brewery], &[CottonMill, Brewery]],
    },
    City {
        id: "stafford",
        name: "Stafford",
        slots: &[&[Manufacturer, Brewery], &[Pottery]],
    },
    City {
        id: "burtonOnTrent",
        name: "Burton-on-Trent",
        slots: &[&[Manufacturer, CoalMine], &[Brewery]],
    },
    City {
        id: "cannock",
        name: "Cannock",
        slots: &[&[Manufacturer, CoalMine], &[CoalMine]],
    },
    City {
        id: "tamworth",
        name: "Tamworth",
        slots: &[&[CottonMill, CoalMine], &[CottonMill, CoalMine]],
    },
    City {
        id: "walsall",
        name: "Walsall",
        slots: &[&[IronWorks, Manufacturer], &[Manufacturer, Brewery]],
    },
    City {
        id: "wolverhampton",
        name: "Wolverhampton",
        slots: &[&[Manufacturer], &[Manufacturer, CoalMine]],
    },
    City {
        id: "coalbrookdale",
        name: "Coalbrookdale",
        slots: &[&[IronWorks, Brewery], &[IronWorks], &[CoalMine]],
    },
    City {
        id: "dudley",
        name: "Dudley",
        slots: &[&[CoalMine], &[IronWorks]],
    },
    City {
        id: "kidderminster",
        name: "Kidderminster",
        slots: &[&[CottonMill, CoalMine], &[CottonMill]],
    },
    City {
        id: "worcester",
        name: "Worcester",
        slots: &[&[CottonMill], &[CottonMill]],
    },
    City {
        id: "birmingham",
        name: "Birmingham",
        slots: &[
            &[CottonMill, Manufacturer],
            &[Manufacturer],
            &[IronWorks],
            &[Manufacturer],
        ],
    },
    City {
        id: "coventry",
        name: "Coventry",
        slots: &[
            &[Pottery],
            &[Manufacturer, CoalMine],
            &[IronWorks, Manufacturer],
        ],
    },
    City {
        id: "nuneaton",
        name: "Nuneaton",
        slots: &[&[Manufacturer, Brewery], &[CottonMill, CoalMine]],
    },
    City {
        id: "redditch",
        name: "Redditch",
        slots: &[&[Manufacturer, CoalMine], &[IronWorks]],
    },
];

pub const BREWERY_FARMS: &[BreweryFarm] = &[
    BreweryFarm {
        id: "northern",
        name: "Brewery (N)",
    },
    BreweryFarm {
        id: "southern",
        name: "Brewery (S)",
    },
];

const fn conn(id: ConnectionId, a: LocationId, b: LocationId, canal: bool, rail: bool) -> Connection {
    Connection {
        id,
        a,
        b,
        canal,
        rail,
        via: None,
    }
}

pub const CONNECTIONS: &[Connection] = &[
    conn("belper-derby", "belper", "derby", true, true),
    conn("belper-leek", "belper", "leek", false, true),
    conn("birmingham-coventry", "birmingham", "coventry", true, true),
    conn("birmingham-dudley", "birmingham", "dudley", true, true),
    conn("birmingham-nuneaton", "birmingham", "nuneaton", false, true),
    conn("birmingham-oxford", "birmingham", "oxford", true, true),
    conn("birmingham-redditch", "birmingham", "redditch", false, true),
    conn("birmingham-tamworth", "birmingham", "tamworth", true, true),
    conn("birmingham-walsall", "birmingham", "walsall", true, true),
    conn("birmingham-worcester", "birmingham", "worcester", true, true),
    conn("burtonOnTrent-cannock", "burtonOnTrent", "cannock", false, true),
    conn("burtonOnTrent-derby", "burtonOnTrent", "derby", true, true),
    conn("burtonOnTrent-stone", "burtonOnTrent", "stone", true, true),
    conn("burtonOnTrent-tamworth", "burtonOnTrent", "tamworth", true, true),
    conn("burtonOnTrent-walsall", "burtonOnTrent", "walsall", true, false),
    conn("cannock-stafford", "cannock", "stafford", true, true),
    conn("cannock-northern", "cannock", "northern", true, true),
    conn("cannock-walsall", "cannock", "walsall", true, true),
    conn("cannock-wolverhampton", "cannock", "wolverhampton", true, true),
    conn(
        "coalbrookdale-kidderminster",
        "coalbrookdale",
        "kidderminster",
        true,
        true,
    ),
    conn(
        "coalbrookdale-shrewsbury",
        "coalbrookdale",
        "shrewsbury",
        true,
        true,
    ),
    conn(
        "coalbrookdale-wolverhampton",
        "coalbrookdale",
        "wolverhampton",
        true,
        true,
    ),
    conn("coventry-nuneaton", "coventry", "nuneaton", false, true),
    conn("derby-nottingham", "derby", "nottingham", true, true),
    conn("derby-uttoxeter", "derby", "uttoxeter", false, true),
    conn("dudley-kidderminster", "dudley", "kidderminster", true, true),
    conn("dudley-wolverhampton", "dudley", "wolverhampton", true, true),
    conn("gloucester-redditch", "gloucester", "redditch", true, true),
    conn("gloucester-worcester", "gloucester", "worcester", true, true),
    Connection {
        id: "kidderminster-worcester",
        a: "kidderminster",
        b: "worcester",
        canal: true,
        rail: true,
        via: Some("southern"),
    },
    conn("leek-stokeOnTrent", "leek", "stokeOnTrent", true, true),
    conn("nuneaton-tamworth", "nuneaton", "tamworth", true, true),
    conn("redditch-oxford", "redditch", "oxford", true, true),
    conn("stafford-stone", "stafford", "stone", true, true),
    conn("stokeOnTrent-stone", "stokeOnTrent", "stone", true, true),
    conn(
        "stokeOnTrent-warrington",
        "stokeOnTrent",
        "warrington",
        true,
        true,
    ),
    conn("stone-uttoxeter", "stone", "uttoxeter", false, true),
    conn("tamworth-walsall", "tamworth", "walsall", false, true),
    conn("walsall-wolverhampton", "walsall", "wolverhampton", true, true),
];

pub fn city(id: LocationId) -> Option<&'static City> {
    CITIES.iter().find(|c| c.id == id)
}

pub fn connection(id: ConnectionId) -> Option<&'static Connection> {
    CONNECTIONS.iter().find(|c| c.id == id)
}

pub fn is_city(id: LocationId) -> bool {
    city(id).is_some()
}

pub fn is_brewery_farm(id: LocationId) -> bool {
    BREWERY_FARMS.iter().any(|f| f.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merchants::is_merchant_location;

    #[test]
    fn connection_endpoints_are_known_locations() {
        for c in CONNECTIONS {
            for end in [c.a, c.b] {
                assert!(
                    is_city(end) || is_brewery_farm(end) || is_merchant_location(end),
                    "unknown endpoint {end} on {}",
                    c.id
                );
            }
            if let Some(via) = c.via {
                assert!(is_brewery_farm(via));
            }
        }
    }

    #[test]
    fn connection_ids_unique() {
        for (i, c) in CONNECTIONS.iter().enumerate() {
            assert!(
                CONNECTIONS[i + 1..].iter().all(|d| d.id != c.id),
                "duplicate {}",
                c.id
            );
        }
    }

    #[test]
    fn every_connection_buildable_in_some_era() {
        assert!(CONNECTIONS.iter().all(|c| c.canal || c.rail));
    }

    #[test]
    fn other_end_is_symmetric() {
        let c = connection("belper-derby").unwrap();
        assert_eq!(c.other_end("belper"), Some("derby"));
        assert_eq!(c.other_end("derby"), Some("belper"));
        assert_eq!(c.other_end("leek"), None);
    }
}
