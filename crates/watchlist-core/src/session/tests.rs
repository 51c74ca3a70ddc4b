use super::*;
use crate::ids::{TimestampIds, UuidIds};
use crate::persistence::{BACKUP_KEY, WATCHLIST_KEY};
use crate::storage::{FileStorage, MemoryStorage};
use std::collections::HashSet;
use tempfile::TempDir;
use watchlist_models::Draft;

fn start_with(storage: MemoryStorage) -> (WatchlistSession, StartReport) {
    WatchlistSession::start(storage, Box::new(UuidIds))
}

fn fill(session: &mut WatchlistSession, title: &str, genre: &str, rating: u8) {
    session.set_title(title);
    session.set_genre(genre);
    if rating > 0 {
        session.set_rating(rating).unwrap();
    }
}

fn stored(storage: &MemoryStorage) -> Vec<Movie> {
    let raw = storage.get_item(WATCHLIST_KEY).unwrap().unwrap();
    serde_json::from_str(&raw).unwrap()
}

#[test]
fn test_valid_submission_appends_draft_values() {
    let (mut session, _) = start_with(MemoryStorage::new());

    for (i, rating) in (1..=5).enumerate() {
        let title = format!("Movie {}", i);
        fill(&mut session, &title, "Drama", rating);

        let submitted = session.submit().unwrap();
        assert_eq!(submitted.len, i + 1);
        assert_eq!(submitted.movie.title, title);
        assert_eq!(submitted.movie.genre, "Drama");
        assert_eq!(submitted.movie.rating, rating);
        assert!(submitted.warnings.is_empty());

        let movies = session.movies();
        assert_eq!(movies.len(), i + 1);
        assert_eq!(movies.last().unwrap(), &submitted.movie);
    }
}

#[test]
fn test_invalid_submissions_leave_list_unchanged() {
    let (mut session, _) = start_with(MemoryStorage::new());
    fill(&mut session, "Kept", "Drama", 2);
    session.submit().unwrap();

    let cases = [("", "Sci-Fi", 5), ("Dune", "", 5), ("Dune", "Sci-Fi", 0)];
    for (title, genre, rating) in cases {
        session.form.reset();
        fill(&mut session, title, genre, rating);

        assert!(matches!(session.submit(), Err(DraftError::MissingFields(_))));
        assert_eq!(session.movies().len(), 1);
        // Rejected submissions keep the draft for correction
        assert_eq!(session.draft().title, title);
        assert_eq!(session.draft().rating, rating);
    }
}

#[test]
fn test_whitespace_fields_are_accepted() {
    let storage = MemoryStorage::new();
    let (mut session, _) = start_with(storage.clone());
    fill(&mut session, "  ", " ", 3);

    let submitted = session.submit().unwrap();
    assert_eq!(submitted.movie.title, "  ");
    assert_eq!(submitted.movie.genre, " ");
    assert_eq!(stored(&storage), vec![submitted.movie]);
}

#[test]
fn test_draft_resets_after_submit() {
    let (mut session, _) = start_with(MemoryStorage::new());
    fill(&mut session, "Dune", "Sci-Fi", 5);
    session.submit().unwrap();

    assert_eq!(session.draft(), &Draft::default());
    assert_eq!(
        (session.draft().title.as_str(), session.draft().genre.as_str(), session.draft().rating),
        ("", "", 0)
    );
}

#[test]
fn test_first_submission_is_persisted() {
    let storage = MemoryStorage::new();
    let (mut session, report) = start_with(storage.clone());
    assert_eq!(report.loaded, 0);

    fill(&mut session, "Dune", "Sci-Fi", 5);
    session.submit().unwrap();

    let movies = session.movies();
    assert_eq!(movies.len(), 1);
    assert!(movies[0].same_entry(&Movie::new("", "Dune", "Sci-Fi", 5)));

    let persisted = stored(&storage);
    assert_eq!(persisted.as_slice(), movies.as_slice());
}

#[test]
fn test_prepopulated_storage_is_shown_on_start() {
    let mut storage = MemoryStorage::new();
    storage
        .set_item(WATCHLIST_KEY, r#"[{"id":"1","title":"Heat","genre":"Crime","rating":4}]"#)
        .unwrap();

    let (session, report) = start_with(storage);

    assert_eq!(report.loaded, 1);
    assert!(report.warnings.is_empty());
    assert_eq!(session.movies().as_slice(), &[Movie::new("1", "Heat", "Crime", 4)]);
}

#[test]
fn test_start_rewrites_loaded_list() {
    let mut storage = MemoryStorage::new();
    // Extra whitespace and an unknown field disappear after the start-up save
    storage
        .set_item(
            WATCHLIST_KEY,
            r#"[ {"id":"1","title":"Heat","genre":"Crime","rating":4,"extra":1} ]"#,
        )
        .unwrap();

    let _ = start_with(storage.clone());

    assert_eq!(
        storage.get_item(WATCHLIST_KEY).unwrap().as_deref(),
        Some(r#"[{"id":"1","title":"Heat","genre":"Crime","rating":4}]"#)
    );
}

#[test]
fn test_empty_storage_is_written_on_start() {
    let storage = MemoryStorage::new();
    let _ = start_with(storage.clone());
    assert_eq!(storage.get_item(WATCHLIST_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_round_trip_through_file_storage() {
    let dir = TempDir::new().unwrap();
    let entries = [("Dune", "Sci-Fi", 5), ("Heat", "Crime", 4), ("Up", "Animation", 3)];

    let (mut session, _) = WatchlistSession::start(FileStorage::new(dir.path()), Box::new(UuidIds));
    for (title, genre, rating) in entries {
        fill(&mut session, title, genre, rating);
        session.submit().unwrap();
    }
    let before = session.movies();
    drop(session);

    let (reopened, report) = WatchlistSession::start(FileStorage::new(dir.path()), Box::new(UuidIds));
    assert_eq!(report.loaded, entries.len());
    assert_eq!(reopened.movies(), before);
}

#[test]
fn test_corrupted_storage_starts_empty() {
    let mut storage = MemoryStorage::new();
    storage.set_item(WATCHLIST_KEY, "[{\"id\":").unwrap();

    let (session, report) = start_with(storage.clone());

    assert!(session.movies().is_empty());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(storage.get_item(BACKUP_KEY).unwrap().as_deref(), Some("[{\"id\":"));
    // The start-up save replaced the unreadable value
    assert_eq!(storage.get_item(WATCHLIST_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_unreadable_file_is_backed_up_before_start_save() {
    let dir = TempDir::new().unwrap();
    let storage = FileStorage::new(dir.path());
    // Latin-1 bytes from another tool: not valid UTF-8
    let raw: &[u8] = b"[{\"id\":\"1\",\"title\":\"Am\xE9lie\",\"genre\":\"Romance\",\"rating\":3}]";
    std::fs::write(storage.path_for(WATCHLIST_KEY), raw).unwrap();

    let (session, report) = WatchlistSession::start(storage.clone(), Box::new(UuidIds));

    assert!(session.movies().is_empty());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(std::fs::read(storage.path_for(BACKUP_KEY)).unwrap(), raw);
    assert_eq!(storage.get_item(WATCHLIST_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_save_failure_keeps_session_going() {
    // Room for the initial "[]" but not for a movie
    let storage = MemoryStorage::with_quota(16);
    let (mut session, report) = start_with(storage.clone());
    assert!(report.warnings.is_empty());

    fill(&mut session, "Dune", "Sci-Fi", 5);
    let submitted = session.submit().unwrap();

    assert_eq!(submitted.len, 1);
    assert_eq!(submitted.warnings.len(), 1);
    assert!(submitted.warnings[0].contains("quota"));
    assert_eq!(session.movies().len(), 1);
    assert_eq!(session.draft(), &Draft::default());
    assert_eq!(storage.get_item(WATCHLIST_KEY).unwrap().as_deref(), Some("[]"));
}

#[test]
fn test_rapid_timestamp_ids_stay_unique() {
    let (mut session, _) =
        WatchlistSession::start(MemoryStorage::new(), Box::new(TimestampIds::with_clock(|| 42)));

    for _ in 0..10 {
        fill(&mut session, "Dup", "Dup", 1);
        session.submit().unwrap();
    }

    let ids: HashSet<String> = session.movies().iter().map(|m| m.id.clone()).collect();
    assert_eq!(ids.len(), 10);
}
