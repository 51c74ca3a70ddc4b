use serde::{Deserialize, Serialize};

/// A committed watchlist entry.
///
/// The serialized shape is a flat object `{id, title, genre, rating}` so that
/// lists written by earlier versions of the app load unchanged. Unknown fields
/// are ignored on read.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub genre: String,
    pub rating: u8, // 1-5 stars
}

impl Movie {
    pub fn new(id: impl Into<String>, title: impl Into<String>, genre: impl Into<String>, rating: u8) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            genre: genre.into(),
            rating,
        }
    }

    /// True when the other record carries the same user-supplied fields,
    /// ignoring the generated id.
    pub fn same_entry(&self, other: &Movie) -> bool {
        self.title == other.title && self.genre == other.genre && self.rating == other.rating
    }
}
