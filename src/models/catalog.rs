//! Static catalog of the facility locations covered by the checklist.
//!
//! Locations are grouped by building level. The flattened, order-preserving
//! view is the canonical row order of every checklist entry.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Stable identifier used to address a row (never shown in reports).
    pub id: &'static str,
    pub name: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Level {
    pub name: &'static str,
    pub locations: &'static [Location],
}

const fn loc(id: &'static str, name: &'static str) -> Location {
    Location { id, name }
}

static LEVELS: &[Level] = &[
    Level {
        name: "Basement",
        locations: &[
            loc("b-chiller-plant", "Chiller Plant Room"),
            loc("b-pump-room", "Pump Room"),
            loc("b-lv-switchgear", "LV Switchgear Room"),
            loc("b-fire-pump", "Fire Pump Room"),
            loc("b-water-tank", "Water Tank Room"),
        ],
    },
    Level {
        name: "Ground Floor",
        locations: &[
            loc("gf-lobby", "Main Lobby"),
            loc("gf-security", "Security Control Room"),
            loc("gf-electrical", "Electrical Room GF"),
            loc("gf-ups", "UPS Room"),
            loc("gf-loading-bay", "Loading Bay"),
        ],
    },
    Level {
        name: "First Floor",
        locations: &[
            loc("l1-data-hall-1", "Data Hall 1"),
            loc("l1-data-hall-2", "Data Hall 2"),
            loc("l1-battery", "Battery Room"),
            loc("l1-network", "Network Room"),
            loc("l1-ahu", "AHU Room L1"),
        ],
    },
    Level {
        name: "Second Floor",
        locations: &[
            loc("l2-office", "Office Area"),
            loc("l2-meeting", "Meeting Room"),
            loc("l2-electrical", "Electrical Room L2"),
            loc("l2-ahu", "AHU Room L2"),
        ],
    },
    Level {
        name: "Roof",
        locations: &[
            loc("r-cooling-tower", "Cooling Tower Deck"),
            loc("r-generator", "Generator Enclosure"),
            loc("r-lift-machine", "Lift Machine Room"),
        ],
    },
];

/// Grouped view: levels in building order, each with its locations.
pub fn levels() -> &'static [Level] {
    LEVELS
}

/// Flattened view: every location in level order.
pub fn locations() -> impl Iterator<Item = &'static Location> {
    LEVELS.iter().flat_map(|level| level.locations.iter())
}

pub fn location_count() -> usize {
    LEVELS.iter().map(|level| level.locations.len()).sum()
}

/// Position of a location in the flattened view.
pub fn position_of(id: &str) -> Option<usize> {
    locations().position(|l| l.id == id)
}

pub fn find_by_id(id: &str) -> Option<&'static Location> {
    locations().find(|l| l.id == id)
}

pub fn find_by_name(name: &str) -> Option<&'static Location> {
    locations().find(|l| l.name == name)
}
