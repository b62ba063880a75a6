//! Data models for the mock screens.
//!
//! Nothing here talks to a network. These types hold the in-memory state
//! behind each screen:
//!
//! - `Message`, `MessageKind`: chat transcript entries
//! - `CallState`, `CallRecord`: the simulated call screen
//! - `MediaGallery`, `MediaItem`: the shared-media listing
//! - `AssistantSettings`: reply tone and language preferences
//! - `SettingsPanel`: profile, notification and data options

pub mod assistant;
pub mod call;
pub mod media;
pub mod message;
pub mod settings;

pub use assistant::{AssistantField, AssistantSettings, Language, Tone, SUGGESTIONS};
pub use call::{call_history, CallKind, CallRecord, CallState};
pub use media::{MediaFilter, MediaGallery, MediaItem, MediaKind};
pub use message::{Message, MessageKind};
pub use settings::{Confirmation, SettingsItem, SettingsPanel};
