pub mod draft;
pub mod ids;
pub mod persistence;
pub mod session;
pub mod storage;
pub mod store;
pub mod view;

pub use draft::{DraftError, DraftForm};
pub use ids::{IdGenerator, TimestampIds, UuidIds, generator_for};
pub use persistence::{BACKUP_KEY, LoadReport, PersistenceBridge, WATCHLIST_KEY};
pub use session::{StartReport, Submitted, WatchlistSession};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage, StorageError};
pub use store::{ChangeReport, WatchlistObserver, WatchlistStore};
pub use view::{FormView, MovieCard, StarGlyphs, render_card, render_form, render_list};
