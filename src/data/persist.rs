//! Durable storage for authored posts.
//!
//! One namespaced JSON file holding `{ "blogs": [...] }`. Loading and
//! saving are explicit operations invoked by the content store, so failure
//! behavior is testable without any UI in the loop: reads fail open to an
//! empty sequence, writes report a [`StoreError`] that the store treats as
//! best-effort.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{data::types::Post, log};

/// Storage namespace; the store file is `<key>.json` inside the storage
/// directory.
const STORAGE_KEY: &str = "blog-storage";

/// Persistence errors. Only `save` surfaces them; `load` recovers locally.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error when writing `{0}`")]
    Io(PathBuf, #[source] io::Error),

    #[error("store serialization error")]
    Serialize(#[from] serde_json::Error),
}

/// On-disk shape of the store file.
#[derive(Debug, Deserialize)]
struct StoredBlogs {
    blogs: Vec<Post>,
}

/// Borrowing twin of [`StoredBlogs`] for writes.
#[derive(Serialize)]
struct StoredBlogsRef<'a> {
    blogs: &'a [Post],
}

/// JSON-file storage backend for the content store.
#[derive(Debug, Clone)]
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Storage rooted at `dir`; the file itself is created on first save.
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{STORAGE_KEY}.json")),
        }
    }

    /// Path of the underlying store file.
    #[allow(dead_code)]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted post sequence.
    ///
    /// Fails open: a missing, unreadable or corrupt file yields an empty
    /// sequence (logged, never raised). A fresh client and a broken store
    /// file look the same to the caller.
    pub fn load(&self) -> Vec<Post> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(err) => {
                log!("store"; "could not read {}: {err}", self.path.display());
                return Vec::new();
            }
        };

        match serde_json::from_str::<StoredBlogs>(&raw) {
            Ok(stored) => stored.blogs,
            Err(err) => {
                log!("store"; "discarding corrupt store file {}: {err}", self.path.display());
                Vec::new()
            }
        }
    }

    /// Persist the full post sequence, creating the storage directory if
    /// it does not exist yet. Order is preserved on disk.
    pub fn save(&self, posts: &[Post]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(&StoredBlogsRef { blogs: posts })?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|err| StoreError::Io(parent.to_path_buf(), err))?;
        }
        fs::write(&self.path, json).map_err(|err| StoreError::Io(self.path.clone(), err))
    }
}
