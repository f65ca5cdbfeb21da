//! Top destinations.

use super::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub id: &'static str,
    pub name: &'static str,
    pub region: &'static str,
    pub description: &'static str,
    pub altitude_m: u32,
    pub best_season: &'static str,
    pub difficulty: &'static str,
    pub activities: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub tips: &'static [&'static str],
}

impl Record for Destination {
    fn id(&self) -> &str {
        self.id
    }

    fn title(&self) -> &str {
        self.name
    }
}

/// Emoji shown next to a destination's region.
pub fn region_emoji(region: &str) -> &'static str {
    match region {
        "Khumbu" => "🏔️",
        "Annapurna" => "⛰️",
        "Kathmandu Valley" => "🏛️",
        "Western Hills" => "🏞️",
        "Terai" => "🌿",
        _ => "📍",
    }
}

pub static DESTINATIONS: &[Destination] = &[
    Destination {
        id: "everest-base-camp",
        name: "Mount Everest Base Camp",
        region: "Khumbu",
        description: "World's highest mountain base camp trek through Sherpa villages and monasteries",
        altitude_m: 5364,
        best_season: "March-May, September-November",
        difficulty: "Challenging",
        activities: &["Trekking", "Photography", "Cultural exploration"],
        highlights: &[
            "Views of Mount Everest (8,849m)",
            "Sherpa culture and traditions",
            "Tengboche Monastery",
            "Khumbu Icefall views",
            "Sagarmatha National Park",
        ],
        tips: &[
            "Acclimatize properly to avoid altitude sickness",
            "Book teahouses in advance during peak season",
            "Carry warm clothing and rain gear",
            "Respect local customs and environment",
        ],
    },
    Destination {
        id: "annapurna-circuit",
        name: "Annapurna Circuit",
        region: "Annapurna",
        description: "Classic trek around the Annapurna massif with diverse landscapes",
        altitude_m: 5416,
        best_season: "March-May, October-December",
        difficulty: "Moderate to Challenging",
        activities: &["Trekking", "Mountain views", "Cultural immersion"],
        highlights: &[
            "Thorong La Pass (5,416m)",
            "Diverse landscapes and ecosystems",
            "Hindu and Buddhist culture",
            "Hot springs in Tatopani",
            "Sunrise views from Poon Hill",
        ],
        tips: &[
            "Carry permits (ACAP and TIMS)",
            "Be prepared for weather changes",
            "Stay hydrated at high altitudes",
            "Respect local wildlife and environment",
        ],
    },
    Destination {
        id: "kathmandu-durbar-square",
        name: "Kathmandu Durbar Square",
        region: "Kathmandu Valley",
        description: "Historic palace complex with ancient temples and architecture",
        altitude_m: 1400,
        best_season: "October-March",
        difficulty: "Easy",
        activities: &["Sightseeing", "Cultural exploration", "Photography"],
        highlights: &[
            "Hanuman Dhoka Palace",
            "Kumari Ghar (Living Goddess)",
            "Ancient temples and courtyards",
            "Traditional Newari architecture",
            "UNESCO World Heritage Site",
        ],
        tips: &[
            "Hire a local guide for better understanding",
            "Respect photography restrictions",
            "Dress modestly in temples",
            "Best to visit early morning or late afternoon",
        ],
    },
    Destination {
        id: "pokhara-lakeside",
        name: "Pokhara Lakeside",
        region: "Western Hills",
        description: "Beautiful lake city with stunning mountain views",
        altitude_m: 822,
        best_season: "October-March",
        difficulty: "Easy",
        activities: &["Boating", "Paragliding", "Relaxation"],
        highlights: &[
            "Phewa Lake boat rides",
            "Annapurna range views",
            "Peace Pagoda",
            "Adventure sports hub",
            "Lakeside cafes and restaurants",
        ],
        tips: &[
            "Try paragliding for aerial views",
            "Take early morning boat rides",
            "Visit Davis Falls and caves",
            "Enjoy the relaxed atmosphere",
        ],
    },
    Destination {
        id: "chitwan-national-park",
        name: "Chitwan National Park",
        region: "Terai",
        description: "UNESCO World Heritage site rich in wildlife including rhinos and tigers",
        altitude_m: 150,
        best_season: "October-March",
        difficulty: "Easy",
        activities: &["Wildlife safari", "Jungle walks", "Canoeing"],
        highlights: &[
            "One-horned rhinoceros",
            "Bengal tigers",
            "Elephant safari",
            "Tharu cultural programs",
            "Bird watching (500+ species)",
        ],
        tips: &[
            "Book safari in advance",
            "Wear neutral colored clothing",
            "Bring binoculars for bird watching",
            "Respect wildlife and maintain distance",
        ],
    },
    Destination {
        id: "lumbini",
        name: "Lumbini",
        region: "Terai",
        description: "Birthplace of Lord Buddha, sacred pilgrimage site",
        altitude_m: 150,
        best_season: "October-March",
        difficulty: "Easy",
        activities: &["Spiritual journey", "Meditation", "Cultural exploration"],
        highlights: &[
            "Maya Devi Temple (birthplace)",
            "Sacred Garden",
            "Ashoka Pillar",
            "International monasteries",
            "Peace and meditation",
        ],
        tips: &[
            "Maintain silence in sacred areas",
            "Dress modestly and respectfully",
            "Join meditation sessions",
            "Visit early morning for peaceful experience",
        ],
    },
];
