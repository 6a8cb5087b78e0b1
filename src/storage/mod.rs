//! Persistent side channel for the favorite-team selection.
//!
//! One value, one file: the favorite team id is stored as a base-10 integer
//! string in the platform config directory. The store is deliberately
//! forgiving on the read side - a missing file or garbage content simply
//! means "no favorite".

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, warn};

use crate::config::paths::get_favorite_store_path;
use crate::error::AppError;

/// File-backed store for the favorite team id.
#[derive(Debug, Clone)]
pub struct FavoriteStore {
    path: PathBuf,
}

impl FavoriteStore {
    /// Store at the default platform location.
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(get_favorite_store_path()),
        }
    }

    /// Store at a custom path. Used by tests and by callers that manage
    /// their own state directory.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the persisted favorite team id.
    ///
    /// Returns `None` when the file is missing or its content does not parse
    /// as an integer; neither case is an error.
    pub async fn load(&self) -> Option<i32> {
        match fs::read_to_string(&self.path).await {
            Ok(content) => match content.trim().parse::<i32>() {
                Ok(id) => Some(id),
                Err(_) => {
                    warn!(
                        "Ignoring unparseable favorite-team value in {}",
                        self.path.display()
                    );
                    None
                }
            },
            Err(e) => {
                debug!("No persisted favorite team ({e})");
                None
            }
        }
    }

    /// Persists the favorite team id, creating the parent directory first.
    pub async fn save(&self, team_id: i32) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent).await?;
        }
        fs::write(&self.path, team_id.to_string()).await?;
        Ok(())
    }

    /// Removes the persisted value. Removing an already-absent value is not
    /// an error.
    pub async fn clear(&self) -> Result<(), AppError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    #[allow(dead_code)] // Used in tests
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FavoriteStore {
    fn default() -> Self {
        Self::new()
    }
}
