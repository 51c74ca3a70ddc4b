use std::sync::Arc;
use tracing::info;
use watchlist_models::{Draft, Movie};

use crate::draft::{DraftError, DraftForm};
use crate::ids::IdGenerator;
use crate::persistence::PersistenceBridge;
use crate::storage::KeyValueStorage;
use crate::store::WatchlistStore;

/// What happened while starting a session
#[derive(Debug, Default)]
pub struct StartReport {
    pub loaded: usize,
    pub warnings: Vec<String>,
}

/// A movie accepted by [`WatchlistSession::submit`]
#[derive(Debug)]
pub struct Submitted {
    pub movie: Movie,
    pub len: usize,
    /// Non-blocking problems, e.g. the list could not be saved
    pub warnings: Vec<String>,
}

/// One running watchlist: the store, its persistence subscription and the
/// draft form. Created at startup, dropped at exit.
pub struct WatchlistSession {
    store: WatchlistStore,
    form: DraftForm,
    ids: Box<dyn IdGenerator>,
}

impl WatchlistSession {
    /// Load the stored list, subscribe the persistence bridge, then install
    /// the loaded list (which writes it straight back).
    pub fn start<S>(storage: S, ids: Box<dyn IdGenerator>) -> (Self, StartReport)
    where
        S: KeyValueStorage + 'static,
    {
        let mut bridge = PersistenceBridge::new(storage);
        let loaded = bridge.load();

        let mut store = WatchlistStore::new();
        store.subscribe(Box::new(bridge));

        let mut warnings: Vec<String> = loaded.warning.into_iter().collect();
        let change = store.install(loaded.movies);
        warnings.extend(change.warnings);

        info!("Watchlist session started with {} movies", change.len);

        let session = Self {
            store,
            form: DraftForm::new(),
            ids,
        };
        let report = StartReport {
            loaded: change.len,
            warnings,
        };
        (session, report)
    }

    pub fn movies(&self) -> Arc<Vec<Movie>> {
        self.store.snapshot()
    }

    pub fn draft(&self) -> &Draft {
        self.form.draft()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.form.set_title(title);
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.form.set_genre(genre);
    }

    pub fn set_rating(&mut self, rating: u8) -> Result<(), DraftError> {
        self.form.set_rating(rating)
    }

    /// Turn the draft into a movie and append it.
    ///
    /// On a validation error nothing changes. On success the draft is reset
    /// after the append; save failures come back as warnings.
    pub fn submit(&mut self) -> Result<Submitted, DraftError> {
        self.form.validate()?;

        let draft = self.form.draft();
        let movie = Movie::new(self.ids.next_id(), draft.title.clone(), draft.genre.clone(), draft.rating);

        let change = self.store.append(movie.clone());
        self.form.reset();

        info!(id = %movie.id, title = %movie.title, "Added movie to watchlist");

        Ok(Submitted {
            movie,
            len: change.len,
            warnings: change.warnings,
        })
    }
}

#[cfg(test)]
mod tests;
