//! Authentication module gating access to the app.
//!
//! This module provides:
//! - `AllowList`/`CredentialRecord`: the injected set of permitted identities,
//!   with secrets held as Argon2 hashes
//! - `SessionStore`: authorize, restore and clear the signed-in session
//!
//! Only the identifier is persisted, under the `user-record` key.

pub mod credentials;
pub mod session;

pub use credentials::{hash_secret, verify_secret, AllowList, CredentialRecord};
pub use session::{Session, SessionStore, UserRecord, ACCESS_DENIED};
