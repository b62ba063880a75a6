//! PrivyTalk core library.
//!
//! The session gate, navigation controller, durable storage and the
//! in-memory models behind each mock screen. Front ends (the terminal UI)
//! build on top of this crate.

pub mod auth;
pub mod chat;
pub mod config;
pub mod error;
pub mod models;
pub mod navigation;
pub mod storage;

pub use auth::{AllowList, CredentialRecord, Session, SessionStore, ACCESS_DENIED};
pub use chat::ChatRoom;
pub use config::Config;
pub use error::{CredentialError, StoreError};
pub use navigation::{Navigator, Screen, Theme};
pub use storage::{FileStore, KeyValueStore, MemoryStore, SharedStore};
