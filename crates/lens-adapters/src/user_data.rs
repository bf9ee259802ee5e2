//! User data adapter
//!
//! Persists per-installation user data under one storage key, as a JSON
//! object of named entries. Storage failures never propagate to callers:
//! reads degrade to "no data" and writes report plain success/failure, with
//! the underlying detail logged.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;

use crate::keys::INSTALLATION;
use crate::logger::Logger;
use crate::storage::StorageAdapter;

const GET_ERROR: &str = "Error occurred when trying to get user data: ";
const SET_ERROR: &str = "Error occurred when trying to set user data: ";
const REMOVE_ERROR: &str = "Error occurred when trying to remove user data: ";

pub struct UserDataAdapter {
    storage: Arc<dyn StorageAdapter>,
    logger: Arc<dyn Logger>,
}

impl UserDataAdapter {
    pub fn new(storage: Arc<dyn StorageAdapter>, logger: Arc<dyn Logger>) -> Self {
        Self { storage, logger }
    }

    async fn read_entries(&self) -> Result<HashMap<String, Value>, crate::storage::StorageError> {
        let blob = self.storage.get_item(INSTALLATION).await?;
        match blob {
            Some(Value::Object(map)) => Ok(map.into_iter().collect()),
            // Anything else under the key is treated as no data.
            _ => Ok(HashMap::new()),
        }
    }

    /// The requested entries that exist. `None` only when storage itself
    /// failed; absent entries are simply missing from the map.
    pub async fn get_user_data(&self, keys: &[&str]) -> Option<HashMap<String, Value>> {
        match self.read_entries().await {
            Ok(mut entries) => Some(
                keys.iter()
                    .filter_map(|key| entries.remove(*key).map(|v| (key.to_string(), v)))
                    .collect(),
            ),
            Err(e) => {
                self.logger.error(GET_ERROR, &e.to_string());
                None
            }
        }
    }

    /// Returns whether the entry was durably written.
    pub async fn set_user_data(&self, key: &str, value: Value) -> bool {
        let mut entries = match self.read_entries().await {
            Ok(entries) => entries,
            Err(e) => {
                self.logger.error(SET_ERROR, &e.to_string());
                return false;
            }
        };
        entries.insert(key.to_string(), value);

        let blob = Value::Object(entries.into_iter().collect());
        match self.storage.set_item(INSTALLATION, blob).await {
            Ok(()) => true,
            Err(e) => {
                self.logger.error(SET_ERROR, &e.to_string());
                false
            }
        }
    }

    /// Read-prune-write; not atomic against concurrent writers of the same
    /// blob. Removing an absent entry is a no-op.
    pub async fn remove_user_data(&self, key: &str) {
        let mut entries = match self.read_entries().await {
            Ok(entries) => entries,
            Err(e) => {
                self.logger.error(REMOVE_ERROR, &e.to_string());
                return;
            }
        };
        if entries.remove(key).is_none() {
            return;
        }

        let blob = Value::Object(entries.into_iter().collect());
        if let Err(e) = self.storage.set_item(INSTALLATION, blob).await {
            self.logger.error(REMOVE_ERROR, &e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::test_support::RecordingLogger;
    use crate::storage::{MemoryStorageAdapter, StorageError};
    use async_trait::async_trait;
    use serde_json::json;

    /// Reads succeed, every write fails with a fixed backend message.
    struct FailingSetStorage {
        inner: MemoryStorageAdapter,
    }

    #[async_trait]
    impl StorageAdapter for FailingSetStorage {
        async fn get_item(&self, key: &str) -> Result<Option<Value>, StorageError> {
            self.inner.get_item(key).await
        }

        async fn set_item(&self, _key: &str, _value: Value) -> Result<(), StorageError> {
            Err(StorageError::Backend("test-error".to_string()))
        }

        async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
            self.inner.remove_item(key).await
        }
    }

    fn adapter() -> (Arc<RecordingLogger>, UserDataAdapter) {
        let logger = Arc::new(RecordingLogger::default());
        let adapter = UserDataAdapter::new(
            Arc::new(MemoryStorageAdapter::new()),
            Arc::clone(&logger) as Arc<dyn Logger>,
        );
        (logger, adapter)
    }

    #[tokio::test]
    async fn set_then_get_returns_only_requested_entries() {
        let (_, adapter) = adapter();

        assert!(adapter.set_user_data("theme", json!("dark")).await);
        assert!(adapter.set_user_data("seen-welcome", json!(true)).await);

        let data = adapter.get_user_data(&["theme", "unknown"]).await.unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data["theme"], json!("dark"));
    }

    #[tokio::test]
    async fn set_failure_logs_the_backend_detail_and_reports_false() {
        let logger = Arc::new(RecordingLogger::default());
        let adapter = UserDataAdapter::new(
            Arc::new(FailingSetStorage {
                inner: MemoryStorageAdapter::new(),
            }),
            Arc::clone(&logger) as Arc<dyn Logger>,
        );

        let ok = adapter.set_user_data("theme", json!("dark")).await;

        assert!(!ok);
        let errors = logger.errors.lock().unwrap();
        assert_eq!(
            *errors,
            vec![(
                "Error occurred when trying to set user data: ".to_string(),
                "test-error".to_string(),
            )]
        );
    }

    #[tokio::test]
    async fn remove_prunes_one_entry_and_keeps_the_rest() {
        let (_, adapter) = adapter();
        adapter.set_user_data("a", json!(1)).await;
        adapter.set_user_data("b", json!(2)).await;

        adapter.remove_user_data("a").await;

        let data = adapter.get_user_data(&["a", "b"]).await.unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data["b"], json!(2));
    }

    #[tokio::test]
    async fn removing_an_unknown_entry_is_a_silent_noop() {
        let (logger, adapter) = adapter();

        adapter.remove_user_data("never-set").await;

        assert!(logger.errors.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn remove_write_failure_is_logged_not_propagated() {
        let logger = Arc::new(RecordingLogger::default());
        let failing = FailingSetStorage {
            inner: MemoryStorageAdapter::new(),
        };
        failing
            .inner
            .set_item(INSTALLATION, json!({"a": 1}))
            .await
            .unwrap();
        let adapter = UserDataAdapter::new(
            Arc::new(failing),
            Arc::clone(&logger) as Arc<dyn Logger>,
        );

        adapter.remove_user_data("a").await;

        let errors = logger.errors.lock().unwrap();
        assert_eq!(errors[0].0, "Error occurred when trying to remove user data: ");
        assert_eq!(errors[0].1, "test-error");
    }
}
