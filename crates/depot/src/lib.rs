//! Flat-file depot holding one uploaded file per token

pub mod error;
pub mod filesystem;

use async_trait::async_trait;

pub use error::StorageError;
pub use filesystem::FilesystemStorage;

/// Storage backend trait for depot entries
#[async_trait]
pub trait Storage: Send + Sync {
    /// Persist `content` under `token`.
    /// The entry must not exist yet; the bytes are synced to disk before this
    /// returns.
    async fn store(&self, token: &str, content: &[u8]) -> Result<(), StorageError>;

    /// Read the full content stored under `token`
    async fn read(&self, token: &str) -> Result<Vec<u8>, StorageError>;
}
