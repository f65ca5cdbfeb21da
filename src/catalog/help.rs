//! Help sections.

use super::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelpSection {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    /// Display lines; bullet lines start with `•`, empty strings are spacers
    pub content: &'static [&'static str],
}

impl Record for HelpSection {
    fn id(&self) -> &str {
        self.id
    }

    fn title(&self) -> &str {
        self.name
    }
}

pub static HELP_SECTIONS: &[HelpSection] = &[
    HelpSection {
        id: "about",
        name: "About Explore Nepal",
        emoji: "ℹ️",
        content: &[
            "Welcome to Explore Nepal - your interactive terminal-based guide to Nepal!",
            "",
            "This application gives travelers information about Nepal's destinations, culture, adventure activities, and practical travel advice, all from the comfort of the command line.",
            "",
            "Whether you're planning your first visit to Nepal or you're a seasoned traveler looking for new experiences, you'll find:",
            "• Top destinations and attractions",
            "• Cultural insights and traditions",
            "• Adventure activities and sports",
            "• Practical travel tips and advice",
            "• Trip planning tools and templates",
            "• Community messages and experiences",
            "",
            "Navigate using arrow keys and Enter to select. Press Ctrl+C to exit at any time.",
        ],
    },
    HelpSection {
        id: "usage",
        name: "How to Use This App",
        emoji: "📖",
        content: &[
            "Navigation Controls:",
            "• Use ↑↓ arrow keys to navigate through menu options",
            "• Press Enter to select a highlighted option",
            "• Press any key on a detail page to go back to its list",
            "• Press Ctrl+C to exit the application",
            "• Use \"Back to Main Menu\" options to return to previous screens",
            "",
            "Available Commands:",
            "• destinations - Explore Nepal's top tourist destinations",
            "• regions - Learn about Nepal's geographic regions",
            "• culture - Discover Nepali culture and traditions",
            "• adventure - Browse adventure activities and sports",
            "• messages - Read and write community messages",
            "• tips - Access travel tips and advice",
            "• planner - Plan your Nepal trip with templates",
            "• help - View this help information",
            "",
            "You can also open a section directly:",
            "explore-nepal destinations",
            "explore-nepal regions",
            "etc.",
            "",
            "Key bindings can be switched to the vim or emacs preset in config.toml.",
        ],
    },
    HelpSection {
        id: "features",
        name: "Features & Capabilities",
        emoji: "🌟",
        content: &[
            "Interactive Navigation:",
            "• Smooth menu navigation with visual feedback",
            "• Automatic return to main menu after exploring sections",
            "• Consistent user interface across all commands",
            "",
            "Rich Content:",
            "• Detailed destination information with tips and highlights",
            "• Cultural insights from local experts",
            "• Comprehensive adventure activity guides",
            "• Practical travel advice organized by category",
            "",
            "Planning Tools:",
            "• Trip templates for different travel styles",
            "• Custom trip builder with personalized recommendations",
            "• Budget planning and timing advice",
            "",
            "Community Features:",
            "• Read experiences from fellow travelers",
            "• Share your own Nepal travel stories",
            "• Rate and review destinations",
            "",
            "Visual Design:",
            "• Dark, light and no-color themes",
            "• Nepal flag colors and cultural motifs",
            "• Clear information hierarchy and layout",
        ],
    },
    HelpSection {
        id: "commands",
        name: "Available Commands",
        emoji: "⚡",
        content: &[
            "🏔️ destinations",
            "Browse Nepal's top tourist destinations including Everest Base Camp, Annapurna Circuit, Kathmandu Valley, Pokhara, Chitwan National Park, and Lumbini. Each destination includes detailed information about activities, difficulty levels, best times to visit, and practical tips.",
            "",
            "🗺️ regions",
            "Explore Nepal's three main geographic regions: Mountains (Himal), Hills (Pahar), and Terai (Plains). Learn about the unique characteristics, climate, population, and attractions of each region.",
            "",
            "🕉️ culture",
            "Discover Nepal's rich cultural heritage including religions, festivals, ethnic diversity, traditional arts, languages, and cuisine. Gain insights into local customs and practices.",
            "",
            "🏃 adventure",
            "Find information about adventure activities including trekking, mountain climbing, white water rafting, paragliding, bungee jumping, and wildlife safaris. Includes safety tips and requirements.",
            "",
            "💬 messages",
            "Read community messages from fellow travelers sharing their Nepal experiences. Write and share your own travel stories, tips, and destination reviews.",
            "",
            "💡 tips",
            "Access categorized travel tips covering health & safety, packing & gear, money & budget, cultural etiquette, transportation, and communication. Tips are prioritized by importance.",
            "",
            "🎯 planner",
            "Plan your Nepal trip using pre-designed templates or create a custom itinerary. Get recommendations based on your interests, budget, and travel style.",
            "",
            "❓ help",
            "Access this help system with information about using the app, available features, and troubleshooting tips.",
        ],
    },
    HelpSection {
        id: "best-experience",
        name: "Tips for Best Experience",
        emoji: "💡",
        content: &[
            "Terminal Setup:",
            "• Use a terminal with Unicode support for best visual experience",
            "• Ensure your terminal supports colors (most modern terminals do)",
            "• Resize your terminal to at least 80 characters wide for optimal layout",
            "",
            "Navigation Tips:",
            "• Take your time to read through options before selecting",
            "• Use the \"Back to Main Menu\" options to navigate between sections",
            "• Press Ctrl+C if you ever get stuck or want to exit quickly",
            "",
            "Making the Most of Content:",
            "• Read the full descriptions in destination and activity sections",
            "• Pay attention to the difficulty levels and requirements",
            "• Note the \"best time to visit\" information for planning",
            "• Check out the tips section before planning your actual trip",
            "",
            "Contributing:",
            "• Share your experiences in the messages section",
            "• Rate destinations you've visited",
            "• Provide helpful tips for other travelers",
            "",
            "Troubleshooting:",
            "• If text appears garbled, check your terminal's Unicode support",
            "• If colors look wrong, try --no-colors or theme = \"light\"",
            "• If navigation feels unresponsive, ensure your terminal is focused",
        ],
    },
    HelpSection {
        id: "about-nepal",
        name: "About Nepal",
        emoji: "🇳🇵",
        content: &[
            "Nepal Quick Facts:",
            "• Official Name: Federal Democratic Republic of Nepal",
            "• Capital: Kathmandu",
            "• Population: ~30 million people",
            "• Languages: 123 languages (Nepali is official)",
            "• Currency: Nepalese Rupee (NPR)",
            "• Time Zone: Nepal Standard Time (UTC+5:45)",
            "",
            "Geography:",
            "• Area: 147,516 km² (57,000 sq miles)",
            "• Landlocked country between China and India",
            "• Contains 8 of the world's 14 highest peaks",
            "• Altitude ranges from 60m to 8,849m (Mount Everest)",
            "",
            "UNESCO World Heritage Sites:",
            "• Kathmandu Durbar Square",
            "• Patan Durbar Square",
            "• Bhaktapur Durbar Square",
            "• Swayambhunath (Monkey Temple)",
            "• Boudhanath Stupa",
            "• Pashupatinath Temple",
            "• Changu Narayan Temple",
            "• Lumbini (Buddha's birthplace)",
            "• Chitwan National Park",
            "• Sagarmatha National Park",
            "",
            "Cultural Highlights:",
            "• Birthplace of Lord Buddha",
            "• Only Hindu kingdom until 2008",
            "• Home to the Living Goddess (Kumari)",
            "• Land of the Gurkhas",
            "• Non-rectangular flag (only country in the world)",
        ],
    },
    HelpSection {
        id: "technical",
        name: "Technical Information",
        emoji: "🔧",
        content: &[
            "Files:",
            "• Configuration: ~/.config/explore-nepal/config.toml",
            "• Community messages: messages.json in the data directory",
            "• Logs: explore-nepal.log in the cache directory (run `explore-nepal logs`)",
            "",
            "Configuration:",
            "• theme = \"dark\" | \"light\" | \"nocolor\"",
            "• [keymap] preset = \"standard\" | \"vim\" | \"emacs\"",
            "• [[keymap.overrides]] key = \"w\", action = \"move_up\"",
            "• data_dir = \"/path/to/messages\"",
            "",
            "Environment:",
            "• NO_COLOR disables colors",
            "• RUST_LOG controls log verbosity (default: info)",
            "• EXPLORE_NEPAL_CONFIG_DIR and EXPLORE_NEPAL_DATA_DIR relocate files",
            "",
            "Troubleshooting:",
            "• If the message store cannot be read, sample messages are shown instead",
            "• Delete messages.json to reset community messages to the defaults",
            "• Shell completions: explore-nepal completions <shell>",
        ],
    },
];
