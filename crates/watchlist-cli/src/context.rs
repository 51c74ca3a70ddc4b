use crate::output::Output;
use color_eyre::Result;
use std::path::Path;
use watchlist_config::{Config, PathManager};
use watchlist_core::{FileStorage, StarGlyphs, WatchlistSession, generator_for};

/// Paths and configuration shared by every command
pub struct AppContext {
    pub paths: PathManager,
    pub config: Config,
}

impl AppContext {
    pub fn load(data_dir: Option<&Path>) -> Result<Self> {
        let paths = PathManager::resolve(data_dir)
            .map_err(|e| color_eyre::eyre::eyre!("Failed to resolve watchlist directories: {}", e))?;
        let config = Config::load_or_default(&paths.config_file())
            .map_err(|e| color_eyre::eyre::eyre!("{:#}", e))?;
        Ok(Self { paths, config })
    }

    pub fn storage(&self) -> FileStorage {
        FileStorage::new(self.paths.storage_dir())
    }

    pub fn glyphs(&self) -> StarGlyphs {
        StarGlyphs::from_config(&self.config.display)
    }

    /// Start a session on the configured storage, reporting load problems as warnings
    pub fn open_session(&self, output: &Output) -> WatchlistSession {
        let (session, report) = WatchlistSession::start(self.storage(), generator_for(self.config.ids.strategy));
        tracing::debug!(loaded = report.loaded, storage = %self.paths.storage_dir().display(), "Session opened");
        for warning in &report.warnings {
            output.warn(warning);
        }
        session
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use tempfile::TempDir;
    use watchlist_config::IdStrategy;
    use watchlist_core::{KeyValueStorage, WATCHLIST_KEY};

    #[test]
    fn test_load_without_config_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let ctx = AppContext::load(Some(dir.path())).unwrap();
        assert_eq!(ctx.config, Config::default());
        assert_eq!(ctx.glyphs().filled, "★");
    }

    #[test]
    fn test_sessions_share_file_storage() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("config.toml"), "[ids]\nstrategy = \"timestamp\"\n").unwrap();
        let ctx = AppContext::load(Some(dir.path())).unwrap();
        assert_eq!(ctx.config.ids.strategy, IdStrategy::Timestamp);

        let output = Output::new(OutputFormat::Json, true);
        let mut session = ctx.open_session(&output);
        session.set_title("Dune");
        session.set_genre("Sci-Fi");
        session.set_rating(5).unwrap();
        let submitted = session.submit().unwrap();
        assert!(submitted.movie.id.parse::<i64>().is_ok());
        drop(session);

        let reopened = ctx.open_session(&output);
        assert_eq!(reopened.movies().len(), 1);
        assert!(ctx.storage().get_item(WATCHLIST_KEY).unwrap().is_some());
    }
}
