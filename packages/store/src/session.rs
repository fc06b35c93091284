//! Auth session store.
//!
//! The single source of truth for "who is logged in". The session is restored
//! synchronously from storage when the store is created; nothing is validated
//! against the server until a real request fails.

use crate::error::StoreError;
use crate::kv::KeyValueStore;
use crate::models::{Session, UserProfile};

/// Storage key holding the serialized [`Session`].
pub const SESSION_KEY: &str = "nnote.session";

/// Read the bearer token straight from storage.
///
/// The API client calls this for every request so that a login or logout in
/// one place is visible to the very next call.
pub fn stored_token(storage: &impl KeyValueStore) -> Option<String> {
    read_session(storage).map(|s| s.token)
}

/// Persisted session, ignoring one that fails to decode or has no token.
fn read_session(storage: &impl KeyValueStore) -> Option<Session> {
    let raw = storage.get(SESSION_KEY)?;
    serde_json::from_str::<Session>(&raw)
        .ok()
        .filter(|s| !s.token.is_empty())
}

/// Current authenticated session, mirrored to durable storage.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
    current: Option<Session>,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Restore the session persisted in `storage`, if any.
    ///
    /// A blob that no longer decodes, or carries an empty token, is dropped
    /// from storage.
    pub fn load(storage: S) -> Self {
        let current = read_session(&storage);
        if current.is_none() && storage.get(SESSION_KEY).is_some() {
            let _ = storage.remove(SESSION_KEY);
        }
        Self { storage, current }
    }

    /// Store `session` in memory and storage.
    pub fn login(&mut self, session: Session) -> Result<(), StoreError> {
        if session.token.is_empty() {
            return Err(StoreError::MissingToken);
        }
        let raw =
            serde_json::to_string(&session).map_err(|e| StoreError::Storage(e.to_string()))?;
        self.storage.set(SESSION_KEY, &raw)?;
        self.current = Some(session);
        Ok(())
    }

    /// Forget the session. Memory is cleared even if storage refuses the removal.
    pub fn logout(&mut self) -> Result<(), StoreError> {
        self.current = None;
        self.storage.remove(SESSION_KEY)
    }

    pub fn session(&self) -> Option<&Session> {
        self.current.as_ref()
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.current.as_ref().map(|s| &s.user)
    }

    pub fn token(&self) -> Option<&str> {
        self.current.as_ref().map(|s| s.token.as_str())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some_and(|t| !t.is_empty())
    }

    /// Storage handle shared with the API client.
    pub fn storage(&self) -> &S {
        &self.storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryStore;

    fn session(token: &str) -> Session {
        Session {
            token: token.to_string(),
            user: UserProfile {
                id: Some("u1".into()),
                name: "Nok".into(),
                email: "nok@example.com".into(),
                avatar: Some("https://example.com/a.png".into()),
            },
        }
    }

    #[test]
    fn test_starts_unauthenticated() {
        let store = SessionStore::load(MemoryStore::new());
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
        assert!(store.token().is_none());
    }

    #[test]
    fn test_login_then_logout_restores_initial_state() {
        let storage = MemoryStore::new();
        let mut store = SessionStore::load(storage.clone());

        store.login(session("tok-1")).unwrap();
        assert!(store.is_authenticated());
        assert_eq!(store.token(), Some("tok-1"));
        assert_eq!(stored_token(&storage).as_deref(), Some("tok-1"));

        store.logout().unwrap();
        assert!(!store.is_authenticated());
        assert!(store.token().is_none());
        assert!(store.user().is_none());
        assert!(storage.get(SESSION_KEY).is_none());
        assert!(storage.is_empty());
        assert!(stored_token(&storage).is_none());
    }

    #[test]
    fn test_session_survives_reload() {
        let storage = MemoryStore::new();
        SessionStore::load(storage.clone())
            .login(session("tok-2"))
            .unwrap();

        let reloaded = SessionStore::load(storage);
        assert_eq!(reloaded.token(), Some("tok-2"));
        assert_eq!(reloaded.user().unwrap().email, "nok@example.com");
    }

    #[test]
    fn test_relogin_replaces_token() {
        let storage = MemoryStore::new();
        let mut store = SessionStore::load(storage.clone());
        store.login(session("old")).unwrap();
        store.login(session("new")).unwrap();
        assert_eq!(stored_token(&storage).as_deref(), Some("new"));
    }

    #[test]
    fn test_corrupt_blob_is_discarded() {
        let storage = MemoryStore::new();
        storage.set(SESSION_KEY, "{not json").unwrap();

        let store = SessionStore::load(storage.clone());
        assert!(!store.is_authenticated());
        assert!(storage.get(SESSION_KEY).is_none());
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let storage = MemoryStore::new();
        let mut store = SessionStore::load(storage.clone());

        assert_eq!(store.login(session("")), Err(StoreError::MissingToken));
        assert!(!store.is_authenticated());
        assert!(storage.get(SESSION_KEY).is_none());
    }

    #[test]
    fn test_stored_blob_without_token_is_discarded() {
        let storage = MemoryStore::new();
        let blob = serde_json::to_string(&session("")).unwrap();
        storage.set(SESSION_KEY, &blob).unwrap();

        let store = SessionStore::load(storage.clone());
        assert!(!store.is_authenticated());
        assert!(stored_token(&storage).is_none());
        assert!(storage.get(SESSION_KEY).is_none());
    }
}
