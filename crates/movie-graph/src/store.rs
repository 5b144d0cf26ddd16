//! Flat-file persistence for the record collections.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::types::{Movie, User};

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to encode user collection: {source}")]
    Encode { source: serde_json::Error },
}

/// Storage backend for the collections. The user collection is the only
/// one ever written back, and always as a whole.
pub trait CollectionStore: Send + Sync {
    fn load_users(&self) -> Result<Vec<User>, StoreError>;
    fn load_movies(&self) -> Result<Vec<Movie>, StoreError>;
    fn persist_users(&self, users: &[User]) -> Result<(), StoreError>;
}

/// One JSON array per collection, read eagerly and overwritten wholesale
/// on persist. No partial writes, no backup, no retry.
pub struct JsonFileStore {
    users_path: PathBuf,
    movies_path: PathBuf,
}

impl JsonFileStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        let data_dir = data_dir.as_ref();
        JsonFileStore {
            users_path: data_dir.join("users.json"),
            movies_path: data_dir.join("movies.json"),
        }
    }
}

impl CollectionStore for JsonFileStore {
    fn load_users(&self) -> Result<Vec<User>, StoreError> {
        read_collection(&self.users_path)
    }

    fn load_movies(&self) -> Result<Vec<Movie>, StoreError> {
        read_collection(&self.movies_path)
    }

    fn persist_users(&self, users: &[User]) -> Result<(), StoreError> {
        let encoded =
            serde_json::to_vec(users).map_err(|source| StoreError::Encode { source })?;
        fs::write(&self.users_path, encoded).map_err(|source| StoreError::Write {
            path: self.users_path.clone(),
            source,
        })?;
        debug!(count = users.len(), "persisted user collection");
        Ok(())
    }
}

fn read_collection<T: serde::de::DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let raw = fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
        path: path.to_owned(),
        source,
    })
}
