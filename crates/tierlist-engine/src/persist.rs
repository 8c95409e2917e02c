//! JSON blob helpers over a `KeyValueStore`
//!
//! Malformed blobs are logged and read back as absent, never as errors.

use crate::{EngineError, Result};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::time::{SystemTime, UNIX_EPOCH};
use tierlist_domain::{KeyValueStore, Tier};
use tracing::warn;

/// Persisted ranking of one template
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct StoredRanking {
    #[serde(default)]
    pub(crate) tiers: Vec<Tier>,

    /// Milliseconds since the Unix epoch at write time
    #[serde(default)]
    pub(crate) timestamp: u64,
}

impl StoredRanking {
    pub(crate) fn now(tiers: Vec<Tier>) -> Self {
        Self {
            tiers,
            timestamp: now_millis(),
        }
    }
}

/// Milliseconds since the Unix epoch
pub(crate) fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u64)
        .unwrap_or_default()
}

pub(crate) fn store_error<E: Display>(error: E) -> EngineError {
    EngineError::Store(error.to_string())
}

/// Read and decode a blob; absent and malformed blobs both yield `None`
pub(crate) fn read_json<S, T>(store: &S, key: &str) -> Result<Option<T>>
where
    S: KeyValueStore,
    S::Error: Display,
    T: DeserializeOwned,
{
    let Some(raw) = store.get(key).map_err(store_error)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(value) => Ok(Some(value)),
        Err(e) => {
            warn!(key, error = %e, "Ignoring malformed persisted data");
            Ok(None)
        }
    }
}

/// Encode and write a blob, replacing the previous value
pub(crate) fn write_json<S, T>(store: &mut S, key: &str, value: &T) -> Result<()>
where
    S: KeyValueStore,
    S::Error: Display,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw).map_err(store_error)
}

/// Delete a blob
pub(crate) fn erase<S>(store: &mut S, key: &str) -> Result<()>
where
    S: KeyValueStore,
    S::Error: Display,
{
    store.remove(key).map_err(store_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tierlist_store::MemoryStore;

    #[test]
    fn test_malformed_blob_reads_as_absent() {
        let mut store = MemoryStore::new();
        store.set("k", "{not json").unwrap();

        let value: Option<Vec<u32>> = read_json(&store, "k").unwrap();
        assert!(value.is_none());
    }

    #[test]
    fn test_ranking_without_tiers_field() {
        let mut store = MemoryStore::new();
        store.set("k", r#"{"timestamp": 5}"#).unwrap();

        let ranking: StoredRanking = read_json(&store, "k").unwrap().unwrap();
        assert!(ranking.tiers.is_empty());
        assert_eq!(ranking.timestamp, 5);
    }

    #[test]
    fn test_write_then_read() {
        let mut store = MemoryStore::new();
        write_json(&mut store, "k", &vec![1u32, 2, 3]).unwrap();

        let value: Option<Vec<u32>> = read_json(&store, "k").unwrap();
        assert_eq!(value, Some(vec![1, 2, 3]));

        erase(&mut store, "k").unwrap();
        assert!(!store.contains_key("k"));
    }
}
