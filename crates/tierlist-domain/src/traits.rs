//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and infrastructure.
//! Infrastructure implementations live in other crates.

/// Durable key-value storage for serialized blobs
///
/// Implemented by the infrastructure layer (tierlist-store).
///
/// Stores are synchronous and process-local. The engine is the only writer
/// within a process; no locking or cross-process coordination is expected.
pub trait KeyValueStore {
    /// Error type for store operations
    type Error;

    /// Read the blob stored under a key
    fn get(&self, key: &str) -> Result<Option<String>, Self::Error>;

    /// Write a blob, replacing any previous value
    fn set(&mut self, key: &str, value: &str) -> Result<(), Self::Error>;

    /// Delete a key; deleting an absent key is not an error
    fn remove(&mut self, key: &str) -> Result<(), Self::Error>;
}
