//! Durable key-value storage.
//!
//! The app persists three things, each under a fixed key:
//! - `user-record`: the authenticated identifier (never the secret)
//! - `message-log`: the chat room transcript
//! - `media-index`: the media gallery listing
//!
//! `FileStore` writes one JSON file per key into the data directory.
//! `MemoryStore` keeps everything in a map and is used by tests.

pub mod store;

pub use store::{
    clear_app_data, FileStore, KeyValueStore, MemoryStore, SharedStore, MEDIA_INDEX_KEY,
    MESSAGE_LOG_KEY, USER_RECORD_KEY,
};
