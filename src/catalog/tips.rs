//! Travel tips grouped by category.

use super::Record;

/// How urgently a tip should be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Importance {
    Critical,
    High,
    Medium,
    Low,
}

impl Importance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Importance::Critical => "Critical",
            Importance::High => "High",
            Importance::Medium => "Medium",
            Importance::Low => "Low",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Importance::Critical => "🚨",
            Importance::High => "⚠️",
            Importance::Medium => "ℹ️",
            Importance::Low => "💡",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tip {
    pub id: &'static str,
    pub title: &'static str,
    pub content: &'static str,
    pub importance: Importance,
    pub author: &'static str,
}

impl Record for Tip {
    fn id(&self) -> &str {
        self.id
    }

    fn title(&self) -> &str {
        self.title
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipCategory {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub tips: &'static [Tip],
}

impl TipCategory {
    /// Number of tips in this category with the given importance.
    pub fn count(&self, importance: Importance) -> usize {
        self.tips
            .iter()
            .filter(|tip| tip.importance == importance)
            .count()
    }
}

impl Record for TipCategory {
    fn id(&self) -> &str {
        self.id
    }

    fn title(&self) -> &str {
        self.name
    }
}

/// Number of tips across `categories` with the given importance.
pub fn count_by_importance(categories: &[TipCategory], importance: Importance) -> usize {
    categories.iter().map(|c| c.count(importance)).sum()
}

const fn tip(
    id: &'static str,
    title: &'static str,
    content: &'static str,
    importance: Importance,
    author: &'static str,
) -> Tip {
    Tip {
        id,
        title,
        content,
        importance,
        author,
    }
}

pub static TIP_CATEGORIES: &[TipCategory] = &[
    TipCategory {
        id: "health-safety",
        name: "Health & Safety",
        emoji: "🏥",
        description: "Essential health and safety information for traveling in Nepal",
        tips: &[
            tip(
                "altitude-sickness",
                "Altitude Sickness Prevention",
                "Ascend gradually (no more than 500m per day above 3000m), stay hydrated, avoid alcohol, and consider medication like Diamox if prone to altitude sickness. Listen to your body and descend immediately if symptoms worsen.",
                Importance::Critical,
                "Nepal Tourism Board",
            ),
            tip(
                "water-food",
                "Water and Food Safety",
                "Drink only bottled or properly treated water. Avoid ice, raw vegetables, and street food unless from trusted sources. Stick to hot, freshly cooked meals and peeled fruits you peel yourself.",
                Importance::High,
                "Travel Health Expert",
            ),
            tip(
                "insurance",
                "Travel Insurance",
                "Get comprehensive travel insurance that covers high-altitude activities, helicopter evacuation, and medical expenses. Many standard policies exclude trekking above 3000m.",
                Importance::Critical,
                "Insurance Specialist",
            ),
            tip(
                "emergency-contacts",
                "Emergency Contacts",
                "Save emergency numbers: Tourist Police (1144), Tourist Helpline (1168), and your embassy. Keep copies of important documents in separate locations.",
                Importance::High,
                "Embassy Official",
            ),
            tip(
                "vaccinations",
                "Vaccinations Required",
                "Ensure routine vaccines are current. Consider Hepatitis A/B, Typhoid, and Japanese Encephalitis. Yellow fever vaccination required if coming from affected areas.",
                Importance::High,
                "Medical Professional",
            ),
        ],
    },
    TipCategory {
        id: "packing-gear",
        name: "Packing & Gear",
        emoji: "🎒",
        description: "What to pack and essential gear for Nepal adventures",
        tips: &[
            tip(
                "layers",
                "Layered Clothing System",
                "Pack base layers (merino wool), insulating layers (fleece/down), and shell layers (waterproof). Weather changes rapidly in mountains. Avoid cotton - it kills when wet.",
                Importance::Critical,
                "Mountain Guide",
            ),
            tip(
                "footwear",
                "Footwear Essentials",
                "Bring well-broken-in trekking boots, comfortable walking shoes, and flip-flops/sandals for teahouses. Gaiters recommended for dusty trails.",
                Importance::High,
                "Gear Specialist",
            ),
            tip(
                "power",
                "Power and Electronics",
                "Bring portable power bank, universal adapter, headlamp with extra batteries. Charging gets expensive and unreliable at higher altitudes.",
                Importance::Medium,
                "Tech Traveler",
            ),
            tip(
                "first-aid",
                "First Aid Kit",
                "Include altitude sickness medication, diarrhea treatment, bandages, antiseptic, pain relievers, and any personal medications. Add blister treatment for trekking.",
                Importance::High,
                "Wilderness Medic",
            ),
            tip(
                "overpacking",
                "Don't Overpack",
                "You can buy most things in Kathmandu/Pokhara. Focus on quality items you can't easily replace. Porter weight limits are 15kg.",
                Importance::Medium,
                "Experienced Trekker",
            ),
        ],
    },
    TipCategory {
        id: "money-budget",
        name: "Money & Budget",
        emoji: "💰",
        description: "Financial tips and budgeting advice for Nepal travel",
        tips: &[
            tip(
                "cash",
                "Cash is King",
                "ATMs are scarce above Namche Bazaar and Manang. Withdraw enough cash in Kathmandu/Pokhara. US dollars are widely accepted but carry small bills.",
                Importance::Critical,
                "Budget Expert",
            ),
            tip(
                "daily-budget",
                "Daily Budget Planning",
                "Budget $30-50/day for teahouse treks, $20-30/day for city stays, $10-15/day for basic local travel. Prices increase significantly with altitude.",
                Importance::High,
                "Financial Advisor",
            ),
            tip(
                "tipping",
                "Tipping Guidelines",
                "Tip guides 10-15% of total trek cost, porters 5-10%. Restaurant staff 10% for good service. Tipping is expected and important part of income.",
                Importance::Medium,
                "Cultural Guide",
            ),
            tip(
                "bargaining",
                "Bargaining Etiquette",
                "Bargaining is expected in markets but not in fixed-price shops or restaurants. Be respectful and fair - a few dollars means more to locals than tourists.",
                Importance::Medium,
                "Local Business Owner",
            ),
            tip(
                "hidden-costs",
                "Hidden Costs",
                "Budget extra for permits, charging devices, WiFi, hot showers, and laundry on treks. These \"extras\" add up quickly.",
                Importance::Medium,
                "Trek Cost Analyst",
            ),
        ],
    },
    TipCategory {
        id: "cultural-etiquette",
        name: "Cultural Etiquette",
        emoji: "🕉️",
        description: "Respect local customs and cultural practices",
        tips: &[
            tip(
                "temples",
                "Temple and Monastery Etiquette",
                "Remove shoes before entering, dress modestly, don't point feet toward religious objects, ask permission before photographing people or statues.",
                Importance::High,
                "Cultural Expert",
            ),
            tip(
                "greetings",
                "Greeting and Interaction",
                "Use \"Namaste\" with palms together. Avoid public displays of affection. Use right hand for eating and passing objects. Don't touch people's heads.",
                Importance::High,
                "Local Cultural Guide",
            ),
            tip(
                "photography",
                "Photography Ethics",
                "Always ask permission before photographing people, especially in rural areas. Many people expect payment for photos. Respect \"no photography\" signs.",
                Importance::Medium,
                "Photography Ethics Advisor",
            ),
            tip(
                "dress-code",
                "Dress Code",
                "Dress conservatively, especially in temples and rural areas. Cover shoulders and knees. Remove hats in religious places.",
                Importance::High,
                "Cultural Sensitivity Expert",
            ),
            tip(
                "environment",
                "Environmental Responsibility",
                "Pack out all trash, use biodegradable soap, stick to trails, don't pick plants or disturb wildlife. Leave only footprints.",
                Importance::Critical,
                "Environmental Conservationist",
            ),
        ],
    },
    TipCategory {
        id: "transportation",
        name: "Transportation",
        emoji: "🚌",
        description: "Getting around Nepal efficiently and safely",
        tips: &[
            tip(
                "domestic-flights",
                "Domestic Flights",
                "Book mountain flights early and be flexible with dates due to weather cancellations. Weight limits strictly enforced. Consider overland alternatives.",
                Importance::High,
                "Aviation Expert",
            ),
            tip(
                "buses",
                "Bus Travel Tips",
                "Tourist buses are more comfortable than local buses. Book front seats to avoid motion sickness. Bring snacks and entertainment for long journeys.",
                Importance::Medium,
                "Transport Specialist",
            ),
            tip(
                "taxis",
                "Taxi and Rickshaw Use",
                "Always negotiate price before starting journey. Use meter if available. Keep small bills handy. Apps like Tootle work in Kathmandu.",
                Importance::Medium,
                "Local Transport User",
            ),
            tip(
                "airports",
                "Airport Navigation",
                "Arrive 2 hours early for domestic flights, 3 hours for international. Keep passport and boarding pass accessible. Expect security checks.",
                Importance::Medium,
                "Frequent Flyer",
            ),
            tip(
                "roads",
                "Road Conditions",
                "Roads can be rough and dusty. Motion sickness medication recommended. Delays common during monsoon season due to landslides.",
                Importance::Medium,
                "Road Safety Expert",
            ),
        ],
    },
    TipCategory {
        id: "communication",
        name: "Communication",
        emoji: "📱",
        description: "Staying connected and communicating in Nepal",
        tips: &[
            tip(
                "internet",
                "Internet and WiFi",
                "WiFi available in most hotels and cafes in cities, limited on treks. Consider local SIM card for data. Internet speed generally slow by international standards.",
                Importance::Medium,
                "Digital Nomad",
            ),
            tip(
                "mobile",
                "Mobile Networks",
                "Ncell and NTC are main providers. Ncell has better coverage on popular trek routes. Buy SIM card with your passport.",
                Importance::Medium,
                "Telecom Expert",
            ),
            tip(
                "language",
                "Language Basics",
                "Learn basic Nepali phrases: Dhanyabad (thank you), Kasto cha? (how are you?), Kati ho? (how much?). English widely spoken in tourist areas.",
                Importance::Low,
                "Language Teacher",
            ),
            tip(
                "emergency-communication",
                "Emergency Communication",
                "Consider satellite communicator for remote treks. Keep embassy and emergency contacts saved offline. Download offline maps before trekking.",
                Importance::High,
                "Safety Communications Expert",
            ),
            tip(
                "social-media",
                "Social Media Etiquette",
                "Ask permission before posting photos of locals. Be mindful of cultural sensitivity in your posts. WiFi may be too slow for uploading videos.",
                Importance::Low,
                "Social Media Guide",
            ),
        ],
    },
];
