//! Geographic regions: mountains, hills and plains.

use super::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub altitude: &'static str,
    pub climate: &'static str,
    /// Share of Nepal's population
    pub population: &'static str,
    pub highlights: &'static [&'static str],
    pub destinations: &'static [&'static str],
    pub activities: &'static [&'static str],
    pub best_time: &'static str,
    pub challenges: &'static [&'static str],
}

impl Record for Region {
    fn id(&self) -> &str {
        self.id
    }

    fn title(&self) -> &str {
        self.name
    }
}

pub static REGIONS: &[Region] = &[
    Region {
        id: "himal",
        name: "Mountains (Himal)",
        emoji: "🏔️",
        description: "The highest mountain region of the world, home to 8 of the 14 highest peaks",
        altitude: "4,000m - 8,849m",
        climate: "Alpine and Arctic",
        population: "6.73%",
        highlights: &[
            "Mount Everest (Sagarmatha) - 8,849m",
            "Annapurna massif",
            "Manaslu and Dhaulagiri ranges",
            "Sherpa and Tibetan communities",
            "Yak herding and high-altitude agriculture",
        ],
        destinations: &[
            "Everest Base Camp",
            "Annapurna Circuit",
            "Manaslu Circuit",
            "Upper Mustang",
            "Dolpo",
        ],
        activities: &[
            "High-altitude trekking",
            "Mountain expeditions",
            "Cultural exploration",
            "Photography",
            "Spiritual journeys",
        ],
        best_time: "March-May and September-November",
        challenges: &[
            "Extreme altitude and weather",
            "Limited infrastructure",
            "Altitude sickness risk",
            "Remote locations",
        ],
    },
    Region {
        id: "pahar",
        name: "Hills (Pahar)",
        emoji: "⛰️",
        description: "The middle region with diverse landscapes, rich culture, and Nepal's major cities",
        altitude: "700m - 4,000m",
        climate: "Temperate and Subtropical",
        population: "43%",
        highlights: &[
            "Kathmandu Valley - UNESCO World Heritage sites",
            "Pokhara - Adventure sports capital",
            "Traditional hill settlements",
            "Diverse ethnic communities",
            "Terraced agriculture",
        ],
        destinations: &["Kathmandu Valley", "Pokhara", "Bandipur", "Gorkha", "Tansen"],
        activities: &[
            "Cultural sightseeing",
            "Moderate trekking",
            "Adventure sports",
            "Heritage tours",
            "Festival celebrations",
        ],
        best_time: "October-March (winter), March-May (spring)",
        challenges: &[
            "Monsoon rains (June-September)",
            "Traffic in urban areas",
            "Tourist crowds in peak season",
        ],
    },
    Region {
        id: "terai",
        name: "Terai (Plains)",
        emoji: "🌾",
        description: "The southern lowland region, Nepal's breadbasket and wildlife paradise",
        altitude: "60m - 700m",
        climate: "Tropical and Subtropical",
        population: "50.27%",
        highlights: &[
            "Chitwan National Park - Royal Bengal tigers",
            "Bardia National Park - Wild elephants",
            "Lumbini - Birthplace of Buddha",
            "Fertile agricultural lands",
            "Tharu indigenous culture",
        ],
        destinations: &[
            "Chitwan National Park",
            "Bardia National Park",
            "Lumbini",
            "Janakpur",
            "Koshi Tappu",
        ],
        activities: &[
            "Wildlife safari",
            "Bird watching",
            "Cultural immersion",
            "River activities",
            "Religious pilgrimage",
        ],
        best_time: "October-March (dry season)",
        challenges: &[
            "Hot and humid summers",
            "Monsoon flooding",
            "Malaria risk in some areas",
        ],
    },
];
