//! Shell adapters
//!
//! Everything the core needs from its host environment, behind capability
//! traits: key/value storage, logging, app metadata. Shells pick concrete
//! implementations; the core and tests inject their own.

pub mod app_info;
pub mod keys;
pub mod logger;
pub mod paths;
pub mod storage;
pub mod user_data;

pub use app_info::{AppDataAdapter, BuildInfoAppDataAdapter};
pub use logger::{FacadeLogger, Logger};
pub use storage::{JsonFileStorageAdapter, MemoryStorageAdapter, StorageAdapter, StorageError};
pub use user_data::UserDataAdapter;
