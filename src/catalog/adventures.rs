//! Adventure activities.

use super::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adventure {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    /// Free-form range such as "Easy to Challenging"
    pub difficulty: &'static str,
    pub highlights: &'static [&'static str],
    pub requirements: &'static [&'static str],
    pub best_time: &'static str,
    pub tips: &'static [&'static str],
}

impl Record for Adventure {
    fn id(&self) -> &str {
        self.id
    }

    fn title(&self) -> &str {
        self.name
    }
}

pub static ADVENTURES: &[Adventure] = &[
    Adventure {
        id: "trekking",
        name: "Trekking & Hiking",
        emoji: "🥾",
        description: "Nepal offers some of the world's most spectacular trekking routes through the Himalayas",
        duration: "3-21 days",
        difficulty: "Easy to Challenging",
        highlights: &[
            "Everest Base Camp Trek (14 days)",
            "Annapurna Circuit (15-20 days)",
            "Langtang Valley Trek (7-10 days)",
            "Manaslu Circuit Trek (14-18 days)",
            "Ghorepani Poon Hill Trek (3-5 days)",
        ],
        requirements: &[
            "Good physical fitness",
            "Proper trekking gear",
            "TIMS card and permits",
            "Travel insurance",
            "Acclimatization planning",
        ],
        best_time: "March-May, September-November",
        tips: &[
            "Start with shorter treks if you're a beginner",
            "Hire local guides and porters",
            "Pack layers for changing weather",
            "Stay hydrated and eat regularly",
        ],
    },
    Adventure {
        id: "climbing",
        name: "Mountain Climbing",
        emoji: "🧗",
        description: "Challenge yourself on Nepal's world-famous peaks, from beginner-friendly to expert-level",
        duration: "15-60 days",
        difficulty: "Challenging to Extreme",
        highlights: &[
            "Mount Everest (8,849m) - World's highest",
            "Annapurna I (8,091m) - First 8000m climbed",
            "Manaslu (8,163m) - Mountain of the Spirit",
            "Cho Oyu (8,188m) - Turquoise Goddess",
            "Island Peak (6,189m) - Perfect training peak",
        ],
        requirements: &[
            "Extensive mountaineering experience",
            "Technical climbing skills",
            "High-altitude experience",
            "Climbing permits and fees",
            "Professional expedition team",
        ],
        best_time: "April-May, September-October",
        tips: &[
            "Start with smaller peaks for experience",
            "Invest in quality gear and training",
            "Consider hiring experienced Sherpa guides",
            "Plan for weather windows carefully",
        ],
    },
    Adventure {
        id: "rafting",
        name: "White Water Rafting",
        emoji: "🚣",
        description: "Experience Nepal's wild rivers with thrilling rapids and stunning scenery",
        duration: "1-10 days",
        difficulty: "Beginner to Advanced",
        highlights: &[
            "Trishuli River - Perfect for beginners",
            "Bhote Koshi - Extreme white water",
            "Kali Gandaki - Multi-day expedition",
            "Sun Koshi - 9-day river journey",
            "Seti River - Gentle family-friendly",
        ],
        requirements: &[
            "Basic swimming ability",
            "Safety briefing completion",
            "Life jacket and helmet",
            "Quick-dry clothing",
            "Waterproof storage",
        ],
        best_time: "September-December, March-May",
        tips: &[
            "Choose river grade based on experience",
            "Bring waterproof camera",
            "Listen carefully to safety instructions",
            "Book with reputable operators",
        ],
    },
    Adventure {
        id: "paragliding",
        name: "Paragliding",
        emoji: "🪂",
        description: "Soar over Nepal's stunning landscapes with the Himalayas as your backdrop",
        duration: "30 minutes - 2 hours",
        difficulty: "Beginner to Intermediate",
        highlights: &[
            "Pokhara - World's 2nd best paragliding site",
            "Sarangkot - Popular launch point",
            "Bandipur - Scenic hill station flights",
            "Nagarkot - Himalayan sunrise flights",
            "Tandem flights available for beginners",
        ],
        requirements: &[
            "No experience needed for tandem",
            "Weight restrictions apply",
            "Good weather conditions",
            "Comfortable clothing",
            "Camera for aerial photos",
        ],
        best_time: "October-April",
        tips: &[
            "Book tandem flights for first experience",
            "Early morning flights offer best views",
            "Bring motion sickness medication if needed",
            "Check weather conditions before booking",
        ],
    },
    Adventure {
        id: "bungee",
        name: "Bungee Jumping",
        emoji: "🤸",
        description: "Take the ultimate leap of faith from Nepal's highest bungee jumping sites",
        duration: "2-4 hours",
        difficulty: "Extreme (no experience required)",
        highlights: &[
            "The Last Resort - 160m highest bungee",
            "Bhote Koshi River gorge",
            "Swiss-designed safety systems",
            "Canyon swing also available",
            "Certificate of bravery provided",
        ],
        requirements: &[
            "Age 16-65 years",
            "Weight 45-110 kg",
            "No heart conditions",
            "Signed waiver required",
            "Mental preparation!",
        ],
        best_time: "October-March",
        tips: &[
            "Eat light breakfast before jumping",
            "Wear comfortable, secure clothing",
            "Bring change of clothes",
            "Take the video package for memories",
        ],
    },
    Adventure {
        id: "wildlife-safari",
        name: "Wildlife Safari",
        emoji: "🦏",
        description: "Explore Nepal's incredible biodiversity in protected national parks",
        duration: "2-7 days",
        difficulty: "Easy to Moderate",
        highlights: &[
            "Chitwan National Park - Rhinos and tigers",
            "Bardia National Park - Wild elephants",
            "Koshi Tappu - Bird watching paradise",
            "Shivapuri Nagarjun - Hiking and wildlife",
            "Elephant back safaris available",
        ],
        requirements: &[
            "Park entry fees and permits",
            "Comfortable walking shoes",
            "Binoculars recommended",
            "Insect repellent",
            "Quiet behavior around wildlife",
        ],
        best_time: "October-March",
        tips: &[
            "Early morning safaris see more wildlife",
            "Stay in jungle lodges for full experience",
            "Respect wildlife and maintain distance",
            "Hire local guides for best spotting",
        ],
    },
];
