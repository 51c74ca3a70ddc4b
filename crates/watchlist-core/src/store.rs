use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, warn};
use watchlist_models::Movie;

/// Notified synchronously after every change to the watchlist.
///
/// A failing observer does not roll back the change; the in-memory list stays
/// authoritative and the failure is reported to the caller of the mutation.
pub trait WatchlistObserver {
    fn name(&self) -> &str;
    fn watchlist_changed(&mut self, movies: &[Movie]) -> Result<()>;
}

/// Outcome of a store mutation
#[derive(Debug, Default)]
pub struct ChangeReport {
    pub len: usize,
    /// Messages from observers that failed to handle the change
    pub warnings: Vec<String>,
}

/// Ordered, append-only movie list.
///
/// Every mutation swaps in a new `Arc`, so snapshots handed out earlier keep
/// showing the list as it was when they were taken.
#[derive(Default)]
pub struct WatchlistStore {
    movies: Arc<Vec<Movie>>,
    observers: Vec<Box<dyn WatchlistObserver>>,
}

impl WatchlistStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Box<dyn WatchlistObserver>) {
        debug!("Watchlist observer subscribed: {}", observer.name());
        self.observers.push(observer);
    }

    pub fn snapshot(&self) -> Arc<Vec<Movie>> {
        Arc::clone(&self.movies)
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Replace the contents with the initial list read at startup
    pub fn install(&mut self, movies: Vec<Movie>) -> ChangeReport {
        self.movies = Arc::new(movies);
        self.notify()
    }

    /// Add a movie at the end of the list
    pub fn append(&mut self, movie: Movie) -> ChangeReport {
        let mut next = Vec::with_capacity(self.movies.len() + 1);
        next.extend(self.movies.iter().cloned());
        next.push(movie);
        self.movies = Arc::new(next);
        self.notify()
    }

    fn notify(&mut self) -> ChangeReport {
        let movies = Arc::clone(&self.movies);
        let mut warnings = Vec::new();

        for observer in &mut self.observers {
            if let Err(e) = observer.watchlist_changed(&movies) {
                warn!("Watchlist observer {} failed: {:#}", observer.name(), e);
                warnings.push(format!("{:#}", e));
            }
        }

        ChangeReport {
            len: movies.len(),
            warnings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        seen: Rc<RefCell<Vec<usize>>>,
    }

    impl WatchlistObserver for Recorder {
        fn name(&self) -> &str {
            "recorder"
        }

        fn watchlist_changed(&mut self, movies: &[Movie]) -> Result<()> {
            self.seen.borrow_mut().push(movies.len());
            Ok(())
        }
    }

    struct Broken;

    impl WatchlistObserver for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn watchlist_changed(&mut self, _movies: &[Movie]) -> Result<()> {
            Err(anyhow::anyhow!("disk full"))
        }
    }

    fn movie(id: &str) -> Movie {
        Movie::new(id, format!("Movie {}", id), "Drama", 3)
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = WatchlistStore::new();
        store.append(movie("1"));
        store.append(movie("2"));
        store.append(movie("3"));

        let ids: Vec<_> = store.snapshot().iter().map(|m| m.id.clone()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_append_is_copy_on_write() {
        let mut store = WatchlistStore::new();
        store.append(movie("1"));
        let before = store.snapshot();

        store.append(movie("2"));
        let after = store.snapshot();

        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
        assert!(!Arc::ptr_eq(&before, &after));
    }

    #[test]
    fn test_observers_see_every_change() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = WatchlistStore::new();
        store.subscribe(Box::new(Recorder { seen: Rc::clone(&seen) }));

        store.install(vec![movie("1")]);
        store.append(movie("2"));

        assert_eq!(*seen.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_failing_observer_does_not_block_append() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = WatchlistStore::new();
        store.subscribe(Box::new(Broken));
        store.subscribe(Box::new(Recorder { seen: Rc::clone(&seen) }));

        let report = store.append(movie("1"));

        assert_eq!(report.len, 1);
        assert_eq!(report.warnings, vec!["disk full".to_string()]);
        assert_eq!(store.len(), 1);
        assert_eq!(*seen.borrow(), vec![1]);
    }
}
