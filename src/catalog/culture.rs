//! Cultural aspects.

use super::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CultureAspect {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub highlights: &'static [&'static str],
    pub practices: &'static [&'static str],
}

impl Record for CultureAspect {
    fn id(&self) -> &str {
        self.id
    }

    fn title(&self) -> &str {
        self.name
    }
}

pub static CULTURE: &[CultureAspect] = &[
    CultureAspect {
        id: "religion",
        name: "Religions & Spirituality",
        emoji: "🕉️",
        description: "Nepal is a spiritual melting pot where Hinduism and Buddhism coexist harmoniously",
        details: &[
            "Hinduism: 81.3% of population",
            "Buddhism: 9% of population",
            "Kiratism: Indigenous religion",
            "Islam, Christianity, and others",
        ],
        highlights: &[
            "Pashupatinath Temple - Sacred Hindu site",
            "Swayambhunath Stupa - Monkey Temple",
            "Boudhanath Stupa - Largest Buddhist stupa",
            "Living Goddess Kumari tradition",
            "Meditation and yoga practices",
        ],
        practices: &[
            "Daily temple visits and offerings",
            "Meditation and prayer wheels",
            "Religious festivals and ceremonies",
            "Pilgrimage to sacred sites",
            "Mantras and spiritual chanting",
        ],
    },
    CultureAspect {
        id: "festivals",
        name: "Festivals & Celebrations",
        emoji: "🎭",
        description: "Nepal celebrates over 50 festivals annually, bringing communities together",
        details: &[
            "Dashain: Biggest Hindu festival (15 days)",
            "Tihar: Festival of lights",
            "Holi: Festival of colors",
            "Buddha Jayanti: Buddha's birthday",
            "Local ethnic festivals",
        ],
        highlights: &[
            "Family reunions and blessings",
            "Traditional dances and music",
            "Special food preparations",
            "Colorful decorations and lights",
            "Cultural performances",
        ],
        practices: &[
            "Kite flying during Dashain",
            "Oil lamp lighting during Tihar",
            "Color throwing during Holi",
            "Community feasts and gatherings",
            "Traditional costume wearing",
        ],
    },
    CultureAspect {
        id: "ethnic-diversity",
        name: "Ethnic Diversity",
        emoji: "👥",
        description: "Nepal is home to over 100 ethnic groups, each with unique traditions",
        details: &[
            "Chhetri: 16.6% - Warrior caste",
            "Brahmin: 12.2% - Priestly caste",
            "Magar: 7.1% - Mountain people",
            "Tharu: 6.6% - Terai indigenous",
            "Tamang: 5.8% - Tibetan origin",
        ],
        highlights: &[
            "Sherpa: Mountain guides and climbers",
            "Newari: Kathmandu Valley natives",
            "Gurung: Famous warriors and trekkers",
            "Rai & Limbu: Eastern hill tribes",
            "Thakali: Annapurna region traders",
        ],
        practices: &[
            "Traditional dress and ornaments",
            "Unique languages and dialects",
            "Distinct cultural ceremonies",
            "Traditional crafts and arts",
            "Ancestral worship and customs",
        ],
    },
    CultureAspect {
        id: "arts-crafts",
        name: "Traditional Arts & Crafts",
        emoji: "🎨",
        description: "Nepal's artistic heritage spans centuries with intricate craftsmanship",
        details: &[
            "Wood carving: Temple and palace art",
            "Metal work: Bronze and brass crafts",
            "Stone sculpture: Religious statues",
            "Painting: Thangka and Paubha art",
            "Pottery: Traditional earthenware",
        ],
        highlights: &[
            "Newari architecture in Kathmandu Valley",
            "Intricate window and door carvings",
            "Buddhist thangka paintings",
            "Singing bowls and prayer wheels",
            "Traditional masks and puppets",
        ],
        practices: &[
            "Family craft traditions passed down",
            "Workshop clusters in old cities",
            "Religious art in temples",
            "Handicraft cooperatives",
            "Art teaching in communities",
        ],
    },
    CultureAspect {
        id: "languages",
        name: "Languages & Literature",
        emoji: "📚",
        description: "Nepal recognizes 123 languages with rich oral and written traditions",
        details: &[
            "Nepali: Official language (44.6%)",
            "Maithili: Terai region (11.7%)",
            "Bhojpuri: Southern plains (6%)",
            "Tharu: Indigenous Terai (5.8%)",
            "Tamang: Central hills (5.1%)",
        ],
        highlights: &[
            "Ancient Sanskrit texts and manuscripts",
            "Folk tales and epic stories",
            "Traditional songs and poems",
            "Oral history preservation",
            "Modern Nepali literature",
        ],
        practices: &[
            "Storytelling traditions",
            "Religious text recitation",
            "Folk song performances",
            "Poetry competitions",
            "Language preservation efforts",
        ],
    },
    CultureAspect {
        id: "cuisine",
        name: "Traditional Cuisine",
        emoji: "🍛",
        description: "Nepali cuisine reflects the country's diverse geography and cultures",
        details: &[
            "Dal Bhat: National dish (lentils & rice)",
            "Momos: Tibetan-style dumplings",
            "Gundruk: Fermented leafy vegetables",
            "Sel Roti: Traditional ring-shaped bread",
            "Dhido: Traditional millet/cornmeal",
        ],
        highlights: &[
            "Spiced with cumin, coriander, turmeric",
            "Regional variations across Nepal",
            "Vegetarian and non-vegetarian options",
            "Tea culture and traditional drinks",
            "Festival-specific special foods",
        ],
        practices: &[
            "Eating with hands traditionally",
            "Sharing meals as community bonding",
            "Seasonal cooking with local ingredients",
            "Food offerings in religious ceremonies",
            "Hospitality through food sharing",
        ],
    },
];
