//! Key-value store - the local-storage analogue.

mod file_store;
mod memory_store;
mod store_traits;

// Re-export the public interface
pub use file_store::FileKeyValueStore;
pub use memory_store::MemoryKeyValueStore;
pub use store_traits::KeyValueStore;
