use std::collections::HashSet;
use std::sync::OnceLock;

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::Argon2;
use rand::rngs::OsRng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CredentialError;

/// One entry of the allow-list.
///
/// The secret is only ever held as an Argon2 PHC string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub identifier: String,
    pub secret_hash: String,
    pub display_label: String,
}

impl CredentialRecord {
    /// Build a record from a plaintext secret, hashing it immediately.
    pub fn new(
        identifier: impl Into<String>,
        secret: &str,
        display_label: impl Into<String>,
    ) -> Result<Self, CredentialError> {
        Ok(Self {
            identifier: identifier.into(),
            secret_hash: hash_secret(secret)?,
            display_label: display_label.into(),
        })
    }

    pub fn verify(&self, secret: &str) -> bool {
        verify_secret(secret, &self.secret_hash)
    }
}

/// Hash a secret into an Argon2id PHC string with a fresh random salt.
pub fn hash_secret(secret: &str) -> Result<String, CredentialError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(secret.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| CredentialError::Hash(e.to_string()))
}

/// Check a secret against a PHC string. Malformed hashes never verify.
pub fn verify_secret(secret: &str, secret_hash: &str) -> bool {
    match PasswordHash::new(secret_hash) {
        Ok(parsed) => Argon2::default()
            .verify_password(secret.as_bytes(), &parsed)
            .is_ok(),
        Err(e) => {
            debug!(error = %e, "Unparseable secret hash");
            false
        }
    }
}

/// Hash checked when the identifier is unknown, so a miss costs the same
/// as a wrong secret.
fn decoy_hash() -> &'static str {
    static DECOY: OnceLock<String> = OnceLock::new();
    DECOY.get_or_init(|| hash_secret("privytalk-decoy").unwrap_or_default())
}

/// The fixed set of identities permitted to sign in.
#[derive(Debug, Clone, Default)]
pub struct AllowList {
    records: Vec<CredentialRecord>,
}

impl AllowList {
    pub fn new(records: Vec<CredentialRecord>) -> Result<Self, CredentialError> {
        let mut seen = HashSet::new();
        for record in &records {
            if !seen.insert(record.identifier.as_str()) {
                return Err(CredentialError::DuplicateIdentifier(record.identifier.clone()));
            }
            PasswordHash::new(&record.secret_hash)
                .map_err(|_| CredentialError::MalformedHash(record.identifier.clone()))?;
        }
        Ok(Self { records })
    }

    pub fn find(&self, identifier: &str) -> Option<&CredentialRecord> {
        self.records.iter().find(|r| r.identifier == identifier)
    }

    /// Return the matching record only if both identifier and secret match.
    pub fn verify(&self, identifier: &str, secret: &str) -> Option<&CredentialRecord> {
        match self.find(identifier) {
            Some(record) => record.verify(secret).then_some(record),
            None => {
                let _ = verify_secret(secret, decoy_hash());
                None
            }
        }
    }

    /// The first other member of the allow-list, used as the chat/call peer.
    pub fn peer_of(&self, identifier: &str) -> Option<&CredentialRecord> {
        self.records.iter().find(|r| r.identifier != identifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CredentialRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext_and_verifies() {
        let hash = hash_secret("123456789").unwrap();
        assert!(!hash.contains("123456789"));
        assert!(hash.starts_with("$argon2"));
        assert!(verify_secret("123456789", &hash));
        assert!(!verify_secret("12345678", &hash));
    }

    #[test]
    fn test_same_secret_gets_distinct_salts() {
        let a = hash_secret("same").unwrap();
        let b = hash_secret("same").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_hash_never_verifies() {
        assert!(!verify_secret("anything", "plaintext-secret"));
        assert!(!verify_secret("", ""));
    }

    #[test]
    fn test_allow_list_rejects_duplicates() {
        let a = CredentialRecord::new("Banku", "one", "Banku").unwrap();
        let b = CredentialRecord {
            display_label: "Other".to_string(),
            ..a.clone()
        };
        assert!(matches!(
            AllowList::new(vec![a, b]),
            Err(CredentialError::DuplicateIdentifier(id)) if id == "Banku"
        ));
    }

    #[test]
    fn test_allow_list_rejects_plaintext_secret() {
        let record = CredentialRecord {
            identifier: "Rachit_14".to_string(),
            secret_hash: "123456789".to_string(),
            display_label: "Rachit".to_string(),
        };
        assert!(matches!(
            AllowList::new(vec![record]),
            Err(CredentialError::MalformedHash(_))
        ));
    }

    #[test]
    fn test_verify_and_peer_lookup() {
        let list = AllowList::new(vec![
            CredentialRecord::new("Rachit_14", "123456789", "Rachit").unwrap(),
            CredentialRecord::new("Banku", "123456789", "Banku").unwrap(),
        ])
        .unwrap();

        assert_eq!(list.len(), 2);
        assert!(list.verify("Rachit_14", "123456789").is_some());
        assert!(list.verify("Rachit_14", "wrong").is_none());
        assert!(list.verify("ghost", "123456789").is_none());
        // Identifier matching is exact
        assert!(list.verify("rachit_14", "123456789").is_none());

        assert_eq!(list.peer_of("Rachit_14").unwrap().identifier, "Banku");
        assert_eq!(list.peer_of("Banku").unwrap().identifier, "Rachit_14");
    }
}
