//! Filesystem-based depot implementation

use crate::{Storage, StorageError};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

/// Depot backed by a single flat directory, one file per token
#[derive(Debug, Clone)]
pub struct FilesystemStorage {
    depot_dir: PathBuf,
}

impl FilesystemStorage {
    /// Open the depot at `depot_dir`, creating the directory if needed.
    /// Fails if the path is not a directory or cannot be written to.
    pub async fn open(depot_dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let depot_dir = depot_dir.into();

        match tokio::fs::metadata(&depot_dir).await {
            Ok(_) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tokio::fs::create_dir_all(&depot_dir)
                    .await
                    .map_err(|e| StorageError::io(&depot_dir, e))?;
                info!(depot = ?depot_dir, "Created depot directory");
            }
            Err(e) => return Err(StorageError::io(&depot_dir, e)),
        }

        let metadata = tokio::fs::metadata(&depot_dir)
            .await
            .map_err(|e| StorageError::io(&depot_dir, e))?;
        if !metadata.is_dir() {
            return Err(StorageError::NotADirectory(depot_dir));
        }
        if metadata.permissions().readonly() {
            return Err(StorageError::ReadOnly(depot_dir));
        }
        check_writable(&depot_dir).await?;

        Ok(Self { depot_dir })
    }

    /// Map a token to its location in the depot. No validation is done here.
    pub fn resolve(&self, token: &str) -> PathBuf {
        self.depot_dir.join(token)
    }

    pub fn depot_dir(&self) -> &Path {
        &self.depot_dir
    }
}

#[async_trait]
impl Storage for FilesystemStorage {
    async fn store(&self, token: &str, content: &[u8]) -> Result<(), StorageError> {
        common::validate(token)?;
        let file_path = self.resolve(token);

        let file = tokio::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&file_path)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => StorageError::AlreadyExists(token.to_string()),
                _ => StorageError::io(&file_path, e),
            })?;

        if let Err(e) = write_entry(file, content).await {
            return Err(discard_entry(&file_path, e).await);
        }

        Ok(())
    }

    async fn read(&self, token: &str) -> Result<Vec<u8>, StorageError> {
        common::validate(token)?;
        let file_path = self.resolve(token);

        tokio::fs::read(&file_path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound(token.to_string()),
            _ => StorageError::io(&file_path, e),
        })
    }
}

/// Name of the scratch file used to test depot writability. It contains a
/// `.` so it can never collide with a token.
const WRITE_CHECK_FILE: &str = ".write-check";

/// Create and remove a scratch file to make sure the process can actually
/// write to `depot_dir`, whatever the mode bits say.
async fn check_writable(depot_dir: &Path) -> Result<(), StorageError> {
    let check_path = depot_dir.join(WRITE_CHECK_FILE);

    tokio::fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&check_path)
        .await
        .map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => StorageError::ReadOnly(depot_dir.to_path_buf()),
            _ => StorageError::io(&check_path, e),
        })?;

    tokio::fs::remove_file(&check_path)
        .await
        .map_err(|e| StorageError::io(&check_path, e))
}

/// Write `content` to a freshly created entry and sync it to disk.
async fn write_entry(mut file: tokio::fs::File, content: &[u8]) -> std::io::Result<()> {
    file.write_all(content).await?;
    // tokio writes in the background; only flush reports that write's error
    file.flush().await?;
    file.sync_all().await
}

/// Remove a partially written entry and return the error that interrupted it
async fn discard_entry(file_path: &Path, e: std::io::Error) -> StorageError {
    if let Err(remove_err) = tokio::fs::remove_file(file_path).await {
        warn!(
            path = ?file_path,
            error = %remove_err,
            "Failed to remove partial depot entry"
        );
    }
    StorageError::io(file_path, e)
}
