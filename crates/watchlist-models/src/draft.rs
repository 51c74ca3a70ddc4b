use serde::{Deserialize, Serialize};

use crate::rating::UNSET_RATING;

/// In-progress field values for a movie that has not been submitted yet.
/// Never persisted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub genre: String,
    pub rating: u8, // 0 = unset
}

impl Draft {
    /// Names of the fields that still block submission, in form order
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.title.is_empty() {
            missing.push("title");
        }
        if self.genre.is_empty() {
            missing.push("genre");
        }
        if self.rating == UNSET_RATING {
            missing.push("rating");
        }
        missing
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
