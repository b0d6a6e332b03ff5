use crate::errors::Result;

/// Trait for whole-value key-value storage.
///
/// Mirrors the browser local-storage surface the exchange persists into:
/// one string value per key, replaced in full on every write. There is no
/// partial update and no cross-writer coordination; the single-writer
/// assumption is the caller's responsibility.
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;
}
