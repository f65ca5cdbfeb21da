//! Explore Nepal - an interactive terminal guide to Nepal
//!
//! This library provides the screens, content catalog and message store
//! behind the `explore-nepal` binary.

// Core modules
pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod screens;
pub mod store;
pub mod styles;
pub mod tui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use app::{App, Host, Session};
pub use catalog::{Catalog, StaticCatalog};
pub use config::Config;
pub use screens::{RootDispatcher, Screen, ScreenAction, Topic};
pub use store::{JsonFileStore, MemoryStore, MessageStore, StoreError};

// Keymap re-exports (used by Config and for external API)
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
