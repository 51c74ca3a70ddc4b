use anyhow::Result;
use tracing::{debug, info, warn};
use watchlist_models::Movie;

use crate::storage::{KeyValueStorage, StorageError};
use crate::store::WatchlistObserver;

/// Storage key holding the JSON array of movies
pub const WATCHLIST_KEY: &str = "watchlist";

/// Storage key receiving a stored value that could not be read or parsed
pub const BACKUP_KEY: &str = "watchlist.bak";

/// Result of the startup read
#[derive(Debug, Default)]
pub struct LoadReport {
    pub movies: Vec<Movie>,
    pub warning: Option<String>,
}

/// Load/save boundary between the in-memory watchlist and durable storage
pub struct PersistenceBridge<S> {
    storage: S,
    // Set when the stored value could neither be loaded nor backed up
    protected: bool,
}

impl<S: KeyValueStorage> PersistenceBridge<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            protected: false,
        }
    }

    /// Raw stored value, exactly as persisted
    pub fn stored_json(&self) -> Result<Option<String>, StorageError> {
        self.storage.get_item(WATCHLIST_KEY)
    }

    /// Read the stored watchlist.
    ///
    /// Never fails: a missing value yields an empty list, and an unreadable
    /// or unparseable value yields an empty list plus a warning. Such data is
    /// copied to [`BACKUP_KEY`] before anything can overwrite it; if that copy
    /// fails, later saves are refused so the original stays in place.
    pub fn load(&mut self) -> LoadReport {
        let raw = match self.storage.get_item(WATCHLIST_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!("No stored watchlist, starting empty");
                return LoadReport::default();
            }
            Err(e) => {
                warn!("Failed to read stored watchlist: {}. Starting empty.", e);
                let backup = self.storage.copy_item(WATCHLIST_KEY, BACKUP_KEY);
                return self.start_empty(format!("Could not read saved watchlist ({})", e), backup);
            }
        };

        match serde_json::from_str::<Vec<Movie>>(&raw) {
            Ok(movies) => {
                info!("Loaded watchlist ({} movies)", movies.len());
                LoadReport { movies, warning: None }
            }
            Err(e) => {
                warn!("Stored watchlist is corrupted: {}. Starting empty.", e);
                let backup = self.storage.set_item(BACKUP_KEY, &raw);
                self.start_empty(format!("Saved watchlist was unreadable ({})", e), backup)
            }
        }
    }

    fn start_empty(&mut self, problem: String, backup: Result<(), StorageError>) -> LoadReport {
        let warning = match backup {
            Ok(()) => {
                info!("Backed up stored watchlist to key {:?}", BACKUP_KEY);
                format!("{}; starting empty. The old data was kept under \"{}\"", problem, BACKUP_KEY)
            }
            Err(backup_err) => {
                warn!("Failed to back up stored watchlist: {}. Saving is disabled.", backup_err);
                self.protected = true;
                format!(
                    "{}; starting empty. It could not be backed up, so changes will not be saved this session",
                    problem
                )
            }
        };
        LoadReport {
            movies: Vec::new(),
            warning: Some(warning),
        }
    }

    /// Overwrite the stored value with the full list
    pub fn save(&mut self, movies: &[Movie]) -> Result<(), StorageError> {
        if self.protected {
            return Err(StorageError::Protected {
                key: WATCHLIST_KEY.to_string(),
            });
        }
        let json = serde_json::to_string(movies).map_err(|source| StorageError::Serialize {
            key: WATCHLIST_KEY.to_string(),
            source,
        })?;
        self.storage.set_item(WATCHLIST_KEY, &json)?;
        debug!("Saved watchlist ({} movies)", movies.len());
        Ok(())
    }
}

impl<S: KeyValueStorage> WatchlistObserver for PersistenceBridge<S> {
    fn name(&self) -> &str {
        "persistence"
    }

    fn watchlist_changed(&mut self, movies: &[Movie]) -> Result<()> {
        self.save(movies)
            .map_err(|e| anyhow::anyhow!("Changes are kept for this session but were not saved: {}", e))
    }
}
