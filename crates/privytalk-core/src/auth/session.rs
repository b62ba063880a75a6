use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::credentials::AllowList;
use crate::storage::{SharedStore, USER_RECORD_KEY};

/// The only message a failed sign-in ever shows.
/// Unknown identifiers and wrong secrets are deliberately indistinguishable.
pub const ACCESS_DENIED: &str = "Access denied";

/// What gets persisted under `user-record`. Never carries the secret.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub identifier: String,
}

/// The currently signed-in identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub identifier: String,
    pub display_label: String,
}

/// Gates access to the rest of the app.
///
/// All operations are total: storage failures are logged and treated as
/// "nothing persisted" rather than surfaced to the caller.
pub struct SessionStore {
    allow_list: AllowList,
    store: SharedStore,
    session: Option<Session>,
}

impl SessionStore {
    pub fn new(allow_list: AllowList, store: SharedStore) -> Self {
        Self {
            allow_list,
            store,
            session: None,
        }
    }

    /// Sign in if both identifier and secret match an allow-list entry.
    /// A failed attempt leaves any existing session untouched.
    pub fn authorize(&mut self, identifier: &str, secret: &str) -> bool {
        let Some(record) = self.allow_list.verify(identifier, secret) else {
            debug!("Authorization rejected");
            return false;
        };

        let session = Session {
            identifier: record.identifier.clone(),
            display_label: record.display_label.clone(),
        };

        let user_record = UserRecord {
            identifier: session.identifier.clone(),
        };
        if let Err(e) = self.store.save(USER_RECORD_KEY, &user_record) {
            warn!(error = %e, "Failed to persist user record");
        }

        info!(identifier = %session.identifier, "Session established");
        self.session = Some(session);
        true
    }

    /// Rehydrate the session from durable storage.
    ///
    /// Missing, unreadable or stale records all mean "logged out".
    pub fn restore(&mut self) -> Option<Session> {
        let record = match self.store.load::<UserRecord>(USER_RECORD_KEY) {
            Ok(record) => record,
            Err(e) => {
                debug!(error = %e, "Ignoring unreadable user record");
                None
            }
        };

        self.session = record.and_then(|record| {
            let entry = self.allow_list.find(&record.identifier);
            if entry.is_none() {
                debug!(identifier = %record.identifier, "Stored identifier no longer allowed");
            }
            entry.map(|entry| Session {
                identifier: entry.identifier.clone(),
                display_label: entry.display_label.clone(),
            })
        });

        if let Some(ref session) = self.session {
            info!(identifier = %session.identifier, "Session restored");
        }
        self.session.clone()
    }

    /// Sign out and forget the persisted identity. Safe to call repeatedly.
    pub fn clear(&mut self) {
        if let Err(e) = self.store.remove(USER_RECORD_KEY) {
            warn!(error = %e, "Failed to remove user record");
        }
        if self.session.take().is_some() {
            info!("Session cleared");
        }
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    pub fn allow_list(&self) -> &AllowList {
        &self.allow_list
    }
}

// ============================================================================
// Tests
// ============================================================================
