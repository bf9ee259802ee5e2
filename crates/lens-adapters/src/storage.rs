//! Key/value storage behind a capability trait
//!
//! Consumers depend on [`StorageAdapter`] only; which backend is wired in is
//! a shell decision. Keys are flat strings, values are arbitrary JSON. Reads
//! of absent keys are `Ok(None)`, never an error.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Debug, Error)]
pub enum StorageError {
    /// Backend-reported failure, carrying the backend's own message.
    #[error("{0}")]
    Backend(String),
    #[error("storage io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage contained malformed data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Async key/value persistence. Implementations must serialize their own
/// concurrent access; callers issue operations from any task.
#[async_trait]
pub trait StorageAdapter: Send + Sync {
    async fn get_item(&self, key: &str) -> Result<Option<Value>, StorageError>;
    async fn set_item(&self, key: &str, value: Value) -> Result<(), StorageError>;
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend, used by the desktop shell before a profile directory
/// is chosen and throughout the test suites.
#[derive(Default)]
pub struct MemoryStorageAdapter {
    items: Mutex<HashMap<String, Value>>,
}

impl MemoryStorageAdapter {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageAdapter for MemoryStorageAdapter {
    async fn get_item(&self, key: &str) -> Result<Option<Value>, StorageError> {
        Ok(self.items.lock().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: Value) -> Result<(), StorageError> {
        self.items.lock().await.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.lock().await.remove(key);
        Ok(())
    }
}

/// File-backed backend: one JSON object per file, whole-file read-modify-write
/// under a mutex. A missing file reads as an empty map.
pub struct JsonFileStorageAdapter {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStorageAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            lock: Mutex::new(()),
        }
    }

    async fn read_map(&self) -> Result<HashMap<String, Value>, StorageError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(HashMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_map(&self, map: &HashMap<String, Value>) -> Result<(), StorageError> {
        let bytes = serde_json::to_vec_pretty(map)?;
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, bytes).await?;
        Ok(())
    }
}

#[async_trait]
impl StorageAdapter for JsonFileStorageAdapter {
    async fn get_item(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let _guard = self.lock.lock().await;
        Ok(self.read_map().await?.remove(key))
    }

    async fn set_item(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), value);
        self.write_map(&map).await
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut map = self.read_map().await?;
        if map.remove(key).is_some() {
            self.write_map(&map).await?;
        }
        Ok(())
    }
}
