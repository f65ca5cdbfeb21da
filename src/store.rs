//! Community message store.
//!
//! Messages are the only mutable data in the application. The store keeps a
//! list of destinations and the messages written about them, and persists both
//! as a single JSON document. Screens treat every store failure as
//! best-effort: reads fall back to the seed data and write failures are logged.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

/// File name of the JSON store inside the data directory.
pub const STORE_FILE_NAME: &str = "messages.json";

/// Lowest and highest star rating a message may carry.
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize messages: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDestination {
    pub id: u32,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredMessage {
    pub id: u32,
    pub username: String,
    pub destination: String,
    pub message: String,
    pub rating: u8,
    /// Local date the message was written, `YYYY-MM-DD`
    pub date: String,
}

/// A message as submitted by the write form, before it has an id and date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub username: String,
    pub destination: String,
    pub message: String,
    pub rating: u8,
}

/// Read/append access to community messages.
pub trait MessageStore {
    /// Every message, newest first.
    fn list_all(&self) -> Result<Vec<StoredMessage>, StoreError>;

    /// Store a message, assigning it an id and today's date.
    fn append(&mut self, message: NewMessage) -> Result<StoredMessage, StoreError>;

    fn destinations(&self) -> Result<Vec<StoreDestination>, StoreError>;

    /// Find a destination by name (case-insensitive), creating it when absent.
    fn ensure_destination(&mut self, name: &str) -> Result<StoreDestination, StoreError>;
}

/// The serialized document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
struct StoreData {
    #[serde(default)]
    destinations: Vec<StoreDestination>,
    #[serde(default)]
    messages: Vec<StoredMessage>,
}

impl StoreData {
    fn seeded() -> Self {
        let destinations = SEED_DESTINATIONS
            .iter()
            .zip(1..)
            .map(|(name, id)| StoreDestination {
                id,
                name: (*name).to_string(),
            })
            .collect();
        Self {
            destinations,
            messages: seed_messages(),
        }
    }

    fn newest_first(&self) -> Vec<StoredMessage> {
        let mut messages = self.messages.clone();
        messages.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
        messages
    }

    fn ensure_destination(&mut self, name: &str) -> StoreDestination {
        let name = name.trim();
        if let Some(existing) = self
            .destinations
            .iter()
            .find(|d| d.name.eq_ignore_ascii_case(name))
        {
            return existing.clone();
        }

        let destination = StoreDestination {
            id: self.destinations.iter().map(|d| d.id).max().unwrap_or(0) + 1,
            name: name.to_string(),
        };
        debug!("Created destination {:?} ({})", destination.name, destination.id);
        self.destinations.push(destination.clone());
        destination
    }

    fn append(&mut self, message: NewMessage, date: String) -> Result<StoredMessage, StoreError> {
        if !(MIN_RATING..=MAX_RATING).contains(&message.rating) {
            return Err(StoreError::InvalidRating(message.rating));
        }

        let destination = self.ensure_destination(&message.destination);
        let stored = StoredMessage {
            id: self.messages.iter().map(|m| m.id).max().unwrap_or(0) + 1,
            username: message.username.trim().to_string(),
            destination: destination.name,
            message: message.message.trim().to_string(),
            rating: message.rating,
            date,
        };
        self.messages.push(stored.clone());
        Ok(stored)
    }
}

fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}

/// Messages persisted as pretty JSON in a single file.
///
/// The document is loaded once when the store is opened and rewritten after
/// every mutation. A mutation that fails to persist leaves the store unchanged.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    data: StoreData,
}

impl JsonFileStore {
    /// Open the store in `data_dir`, seeding a new file if none exists.
    pub fn open(data_dir: &Path) -> Result<Self, StoreError> {
        let path = data_dir.join(STORE_FILE_NAME);

        if !path.exists() {
            std::fs::create_dir_all(data_dir).map_err(|source| StoreError::Io {
                path: data_dir.to_path_buf(),
                source,
            })?;
            let data = StoreData::seeded();
            write_data(&path, &data)?;
            info!("Seeded message store at {:?}", path);
            return Ok(Self { path, data });
        }

        let content = std::fs::read_to_string(&path).map_err(|source| StoreError::Io {
            path: path.clone(),
            source,
        })?;
        let data: StoreData =
            serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?;
        debug!(
            "Loaded {} messages and {} destinations from {:?}",
            data.messages.len(),
            data.destinations.len(),
            path
        );
        Ok(Self { path, data })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn commit(&mut self, data: StoreData) -> Result<(), StoreError> {
        write_data(&self.path, &data)?;
        self.data = data;
        Ok(())
    }
}

fn write_data(path: &Path, data: &StoreData) -> Result<(), StoreError> {
    let content = serde_json::to_string_pretty(data)?;
    std::fs::write(path, content).map_err(|source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    })
}

impl MessageStore for JsonFileStore {
    fn list_all(&self) -> Result<Vec<StoredMessage>, StoreError> {
        Ok(self.data.newest_first())
    }

    fn append(&mut self, message: NewMessage) -> Result<StoredMessage, StoreError> {
        let mut data = self.data.clone();
        let stored = data.append(message, today())?;
        self.commit(data)?;
        info!(
            "Stored message {} from {} about {}",
            stored.id, stored.username, stored.destination
        );
        Ok(stored)
    }

    fn destinations(&self) -> Result<Vec<StoreDestination>, StoreError> {
        Ok(self.data.destinations.clone())
    }

    fn ensure_destination(&mut self, name: &str) -> Result<StoreDestination, StoreError> {
        let mut data = self.data.clone();
        let before = data.destinations.len();
        let destination = data.ensure_destination(name);
        if data.destinations.len() != before {
            self.commit(data)?;
        }
        Ok(destination)
    }
}

/// Messages held in memory only.
///
/// Used when the data directory is unavailable, and in tests.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: StoreData,
}

impl MemoryStore {
    /// A store holding the default destinations and seed messages.
    pub fn seeded() -> Self {
        Self {
            data: StoreData::seeded(),
        }
    }

    /// A store with no destinations and no messages.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl MessageStore for MemoryStore {
    fn list_all(&self) -> Result<Vec<StoredMessage>, StoreError> {
        Ok(self.data.newest_first())
    }

    fn append(&mut self, message: NewMessage) -> Result<StoredMessage, StoreError> {
        self.data.append(message, today())
    }

    fn destinations(&self) -> Result<Vec<StoreDestination>, StoreError> {
        Ok(self.data.destinations.clone())
    }

    fn ensure_destination(&mut self, name: &str) -> Result<StoreDestination, StoreError> {
        Ok(self.data.ensure_destination(name))
    }
}

/// All messages, or the seed messages when the store cannot be read.
pub fn messages_or_seed(store: &dyn MessageStore) -> Vec<StoredMessage> {
    match store.list_all() {
        Ok(messages) => messages,
        Err(e) => {
            warn!("Failed to load messages, showing seed data: {}", e);
            StoreData::seeded().newest_first()
        }
    }
}

/// Destination names known to the store, or `fallback` when the store cannot
/// be read or has none.
pub fn destination_names_or_fallback(store: &dyn MessageStore, fallback: &[&str]) -> Vec<String> {
    let fallback_names = || -> Vec<String> { fallback.iter().map(|s| (*s).to_string()).collect() };
    match store.destinations() {
        Ok(destinations) if !destinations.is_empty() => {
            destinations.into_iter().map(|d| d.name).collect()
        }
        Ok(_) => fallback_names(),
        Err(e) => {
            warn!("Failed to load destinations, using defaults: {}", e);
            fallback_names()
        }
    }
}

/// Built-in messages used to seed a new store.
pub fn seed_messages() -> Vec<StoredMessage> {
    SEED_MESSAGES
        .iter()
        .zip(1..)
        .map(|(&(username, destination, message, rating, date), id)| StoredMessage {
            id,
            username: username.to_string(),
            destination: destination.to_string(),
            message: message.to_string(),
            rating,
            date: date.to_string(),
        })
        .collect()
}

// (username, destination, message, rating, date)
/// Destinations a new store starts with.
const SEED_DESTINATIONS: &[&str] = &[
    "Everest Base Camp",
    "Annapurna Circuit",
    "Kathmandu Valley",
    "Pokhara",
    "Chitwan National Park",
    "Lumbini",
    "Bandipur",
    "Gorkha",
    "Langtang Valley",
    "Manaslu Circuit",
];

const SEED_MESSAGES: &[(&str, &str, &str, u8, &str)] = &[
    (
        "MountainLover22",
        "Everest Base Camp",
        "Just completed the EBC trek! The views were absolutely breathtaking. The Sherpa community was incredibly welcoming. Definitely recommend staying extra days in Namche Bazaar to acclimatize properly.",
        5,
        "2024-10-15",
    ),
    (
        "AdventureSeeker",
        "Annapurna Circuit",
        "Amazing 18-day trek around Annapurna! The diversity of landscapes is incredible - from subtropical forests to high alpine deserts. Thorong La Pass was challenging but so rewarding!",
        5,
        "2024-09-28",
    ),
    (
        "CultureExplorer",
        "Kathmandu Valley",
        "Spent a week exploring the heritage sites in Kathmandu Valley. Bhaktapur Durbar Square is my favorite - the traditional architecture is stunning. Don't miss the pottery square!",
        4,
        "2024-11-02",
    ),
    (
        "WildlifeWatcher",
        "Chitwan National Park",
        "Saw a Royal Bengal Tiger on my second day! The elephant safari was incredible, and the Tharu cultural program in the evening was very authentic. Stay at least 3 days.",
        5,
        "2024-10-20",
    ),
    (
        "SpiritualTraveler",
        "Lumbini",
        "Such a peaceful and spiritual place. The Maya Devi Temple and the sacred garden are must-visits. I spent hours meditating here. The international monasteries are also beautiful.",
        4,
        "2024-11-08",
    ),
    (
        "ParaglidingPro",
        "Pokhara",
        "Paragliding over Pokhara with the Annapurna range as backdrop was a dream come true! The tandem flight operators are very professional. Book early morning flights for clear views.",
        5,
        "2024-10-12",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, StaticCatalog};
    use tempfile::TempDir;

    fn new_message(destination: &str, rating: u8) -> NewMessage {
        NewMessage {
            username: "traveler1".to_string(),
            destination: destination.to_string(),
            message: "great trip".to_string(),
            rating,
        }
    }

    #[test]
    fn test_open_seeds_missing_file() {
        let temp = TempDir::new().unwrap();
        let store = JsonFileStore::open(&temp.path().join("data")).unwrap();

        assert!(store.path().exists());
        assert_eq!(store.list_all().unwrap().len(), 6);
        assert_eq!(store.destinations().unwrap().len(), 10);
    }

    #[test]
    fn test_list_all_is_newest_first() {
        let store = MemoryStore::seeded();
        let messages = store.list_all().unwrap();
        assert_eq!(messages[0].username, "SpiritualTraveler");
        assert_eq!(messages[5].username, "AdventureSeeker");
    }

    #[test]
    fn test_append_assigns_next_id_and_persists() {
        let temp = TempDir::new().unwrap();
        let mut store = JsonFileStore::open(temp.path()).unwrap();

        let stored = store.append(new_message("Pokhara", 5)).unwrap();
        assert_eq!(stored.id, 7);
        assert_eq!(stored.date.len(), 10);

        let reopened = JsonFileStore::open(temp.path()).unwrap();
        let messages = reopened.list_all().unwrap();
        assert_eq!(messages.len(), 7);
        assert!(messages.iter().any(|m| m.id == 7 && m.message == "great trip"));
    }

    #[test]
    fn test_append_rejects_out_of_range_rating() {
        let mut store = MemoryStore::seeded();
        assert!(matches!(
            store.append(new_message("Pokhara", 0)),
            Err(StoreError::InvalidRating(0))
        ));
        assert!(matches!(
            store.append(new_message("Pokhara", 6)),
            Err(StoreError::InvalidRating(6))
        ));
        assert_eq!(store.list_all().unwrap().len(), 6);
    }

    #[test]
    fn test_ensure_destination_matches_case_insensitively() {
        let mut store = MemoryStore::seeded();
        let found = store.ensure_destination("pokhara").unwrap();
        assert_eq!(found.name, "Pokhara");
        assert_eq!(store.destinations().unwrap().len(), 10);
    }

    #[test]
    fn test_append_creates_unknown_destination() {
        let temp = TempDir::new().unwrap();
        let mut store = JsonFileStore::open(temp.path()).unwrap();
        let stored = store.append(new_message("Rara Lake", 4)).unwrap();

        assert_eq!(stored.destination, "Rara Lake");
        let reopened = JsonFileStore::open(temp.path()).unwrap();
        let destinations = reopened.destinations().unwrap();
        assert_eq!(destinations.len(), 11);
        assert_eq!(destinations[10].id, 11);
    }

    #[test]
    fn test_corrupt_file_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join(STORE_FILE_NAME), "{ not json").unwrap();
        assert!(matches!(
            JsonFileStore::open(temp.path()),
            Err(StoreError::Parse { .. })
        ));
    }

    #[test]
    fn test_empty_store_falls_back_to_default_destinations() {
        let store = MemoryStore::empty();
        let names = destination_names_or_fallback(&store, &["Ilam", "Mustang"]);
        assert_eq!(names, vec!["Ilam".to_string(), "Mustang".to_string()]);
    }

    #[test]
    fn test_seeded_store_offers_the_catalog_fallback_names() {
        let fallback = StaticCatalog.fallback_destinations();
        let names = destination_names_or_fallback(&MemoryStore::seeded(), &[]);
        assert_eq!(names, fallback.iter().map(|s| s.to_string()).collect::<Vec<_>>());
    }

    struct BrokenStore;

    impl MessageStore for BrokenStore {
        fn list_all(&self) -> Result<Vec<StoredMessage>, StoreError> {
            Err(StoreError::InvalidRating(0))
        }

        fn append(&mut self, _message: NewMessage) -> Result<StoredMessage, StoreError> {
            Err(StoreError::InvalidRating(0))
        }

        fn destinations(&self) -> Result<Vec<StoreDestination>, StoreError> {
            Err(StoreError::InvalidRating(0))
        }

        fn ensure_destination(&mut self, _name: &str) -> Result<StoreDestination, StoreError> {
            Err(StoreError::InvalidRating(0))
        }
    }

    #[test]
    fn test_read_failures_degrade_to_seed_data() {
        assert_eq!(messages_or_seed(&BrokenStore).len(), 6);
        assert_eq!(
            destination_names_or_fallback(&BrokenStore, StaticCatalog.fallback_destinations()).len(),
            10
        );
    }
}
