//! Trip templates and the choices offered by the custom trip builder.

use super::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripTemplate {
    pub id: &'static str,
    pub name: &'static str,
    pub duration: &'static str,
    pub budget: &'static str,
    pub difficulty: &'static str,
    pub interests: &'static [&'static str],
    pub destinations: &'static [&'static str],
    pub activities: &'static [&'static str],
    pub best_time: &'static str,
}

impl Record for TripTemplate {
    fn id(&self) -> &str {
        self.id
    }

    fn title(&self) -> &str {
        self.name
    }
}

pub static TRIP_TEMPLATES: &[TripTemplate] = &[
    TripTemplate {
        id: "classic-adventure",
        name: "Classic Nepal Adventure",
        duration: "14 days",
        budget: "$1,500-2000",
        difficulty: "Moderate",
        interests: &["Culture", "Mountains", "Trekking"],
        destinations: &["Kathmandu", "Pokhara", "Everest Base Camp"],
        activities: &["Heritage site tours", "EBC trek", "Lakeside relaxation"],
        best_time: "March-May, September-November",
    },
    TripTemplate {
        id: "cultural-heritage",
        name: "Cultural Heritage Tour",
        duration: "7 days",
        budget: "$800-1200",
        difficulty: "Easy",
        interests: &["Culture", "History", "Art"],
        destinations: &["Kathmandu Valley", "Bhaktapur", "Patan"],
        activities: &["Durbar square visits", "Temple tours", "Traditional crafts"],
        best_time: "October-March",
    },
    TripTemplate {
        id: "extreme-adventure",
        name: "Extreme Adventure Package",
        duration: "21 days",
        budget: "$3000-4000",
        difficulty: "Challenging",
        interests: &["Adventure", "Mountains", "Extreme Sports"],
        destinations: &["Everest Region", "Annapurna", "Pokhara"],
        activities: &[
            "Everest Base Camp",
            "Annapurna Circuit",
            "Paragliding",
            "Bungee Jumping",
        ],
        best_time: "March-May, September-October",
    },
    TripTemplate {
        id: "wildlife-nature",
        name: "Wildlife & Nature Explorer",
        duration: "10 days",
        budget: "$1200-1600",
        difficulty: "Easy to Moderate",
        interests: &["Wildlife", "Nature", "Photography"],
        destinations: &["Chitwan National Park", "Bardia National Park", "Pokhara"],
        activities: &["Jungle safari", "Bird watching", "Nature photography"],
        best_time: "October-March",
    },
    TripTemplate {
        id: "spiritual-journey",
        name: "Spiritual Journey",
        duration: "12 days",
        budget: "$1000-1400",
        difficulty: "Easy",
        interests: &["Spirituality", "Culture", "Meditation"],
        destinations: &["Lumbini", "Kathmandu", "Rishikesh (India)"],
        activities: &["Temple visits", "Meditation retreats", "Pilgrimage sites"],
        best_time: "October-March, April-May",
    },
];

pub static INTERESTS: &[&str] = &[
    "Culture & Heritage",
    "Mountain Trekking",
    "Adventure Sports",
    "Wildlife & Nature",
    "Spirituality & Meditation",
    "Photography",
    "Local Cuisine",
    "Festivals & Events",
];

pub static BUDGET_RANGES: &[&str] = &[
    "Budget ($30-50/day)",
    "Mid-range ($50-100/day)",
    "Luxury ($100+/day)",
];

pub static DURATIONS: &[&str] = &["1 week", "2 weeks", "3 weeks", "1 month", "2+ months"];

pub static DIFFICULTIES: &[&str] = &[
    "Easy (City tours, short walks)",
    "Moderate (Day hikes, cultural tours)",
    "Challenging (Multi-day treks)",
    "Extreme (High-altitude climbing)",
];

/// General advice shown when reviewing a custom plan.
pub static PLAN_ADVICE: &[&str] = &[
    "Visit Kathmandu Valley for culture",
    "Consider Pokhara for adventure sports",
    "Plan for October-March for best weather",
    "Budget extra for permits and guides",
];
