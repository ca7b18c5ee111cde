//! JSON persistence over a string key-value backend.
//!
//! Values are whole collections: every save overwrites the previous value
//! and the last writer wins.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, instrument, trace, warn};

pub const USERS_KEY: &str = "mydumbbell_users";
pub const CURRENT_USER_KEY: &str = "mydumbbell_current_user";

#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<String>>;
    async fn set_item(&self, key: &str, value: String) -> Result<()>;
    async fn remove_item(&self, key: &str) -> Result<()>;
}

#[derive(Clone)]
pub struct Store {
    storage: Arc<dyn Storage>,
}

impl Store {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Loads the value under `key`.
    ///
    /// A missing record yields `T::default()`. So does a record that fails to
    /// parse: the corruption is logged and the caller starts from empty.
    #[instrument(skip(self))]
    pub async fn load<T>(&self, key: &str) -> Result<T>
    where
        T: DeserializeOwned + Default,
    {
        let Some(raw) = self.storage.get_item(key).await? else {
            trace!(key, "No stored record, using default");
            return Ok(T::default());
        };

        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(key, bytes = raw.len(), "Loaded stored record");
                Ok(value)
            }
            Err(e) => {
                warn!(key, error = %e, "Stored record is malformed, starting from an empty value");
                Ok(T::default())
            }
        }
    }

    #[instrument(skip(self, value))]
    pub async fn save<T>(&self, key: &str, value: &T) -> Result<()>
    where
        T: Serialize + ?Sized,
    {
        let raw = serde_json::to_string(value)
            .with_context(|| format!("failed to encode record for key {key}"))?;
        trace!(key, bytes = raw.len(), "Writing record");
        self.storage.set_item(key, raw).await
    }

    #[instrument(skip(self))]
    pub async fn remove(&self, key: &str) -> Result<()> {
        self.storage.remove_item(key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::memory::MemoryStorage;

    fn store() -> (Store, MemoryStorage) {
        let storage = MemoryStorage::new();
        (Store::new(Arc::new(storage.clone())), storage)
    }

    #[tokio::test]
    async fn test_load_missing_key_returns_default() {
        let (store, _) = store();
        let loaded: Vec<String> = store.load("nothing").await.unwrap();
        assert!(loaded.is_empty());

        let session: Option<String> = store.load("nothing").await.unwrap();
        assert!(session.is_none());
    }

    #[tokio::test]
    async fn test_round_trip_preserves_order() {
        let (store, _) = store();
        let values = vec!["c".to_string(), "a".to_string(), "b".to_string()];

        store.save("letters", &values).await.unwrap();
        let loaded: Vec<String> = store.load("letters").await.unwrap();

        assert_eq!(loaded, values);
    }

    #[tokio::test]
    async fn test_round_trip_empty_collection() {
        let (store, storage) = store();
        let empty: Vec<u32> = Vec::new();

        store.save("numbers", &empty).await.unwrap();
        assert_eq!(
            storage.get_item("numbers").await.unwrap().as_deref(),
            Some("[]")
        );
        let loaded: Vec<u32> = store.load("numbers").await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_malformed_record_loads_as_default() {
        let (store, storage) = store();
        storage
            .set_item(USERS_KEY, "{not json".to_string())
            .await
            .unwrap();

        let loaded: Vec<u32> = store.load(USERS_KEY).await.unwrap();
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn test_remove_deletes_record() {
        let (store, storage) = store();
        store.save(CURRENT_USER_KEY, "user-1").await.unwrap();
        store.remove(CURRENT_USER_KEY).await.unwrap();

        assert!(storage.get_item(CURRENT_USER_KEY).await.unwrap().is_none());
    }
}
