use crate::error::StoreError;

/// Synchronous string key/value storage, shaped after `window.localStorage`.
///
/// Reads never fail: a missing key, an unavailable backend and a read error all
/// look the same to callers, which fall back to defaults.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&self, key: &str) -> Result<(), StoreError>;
}
