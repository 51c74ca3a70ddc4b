use anyhow::Result;
use std::path::{Path, PathBuf};

/// Directory override from the `WATCHLIST_HOME` environment variable, if set
pub fn home_override() -> Option<PathBuf> {
    std::env::var("WATCHLIST_HOME")
        .ok()
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

pub struct PathManager {
    config_dir: PathBuf,
    data_dir: PathBuf,
}

impl PathManager {
    pub fn new() -> Result<Self> {
        let base_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?
            .join("watchlist");

        Ok(Self::with_base(base_dir))
    }

    /// Lay everything out under one directory: config at the top level,
    /// data in a subdirectory.
    pub fn with_base(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        Self {
            config_dir: base.clone(),
            data_dir: base.join("data"),
        }
    }

    /// Resolve paths, preferring an explicit directory, then `WATCHLIST_HOME`,
    /// then the platform config directory.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(dir) = explicit {
            return Ok(Self::with_base(dir));
        }
        if let Some(dir) = home_override() {
            return Ok(Self::with_base(dir));
        }
        Self::new()
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Root of the key-value storage, one `<key>.json` file per key
    pub fn storage_dir(&self) -> PathBuf {
        self.data_dir.join("storage")
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }

    pub fn ensure_directories(&self) -> Result<()> {
        std::fs::create_dir_all(&self.config_dir)?;
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(self.storage_dir())?;
        Ok(())
    }
}
