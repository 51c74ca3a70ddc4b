use watchlist_models::{Draft, MAX_STARS, is_valid_rating};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum DraftError {
    #[error("Please fill in: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Rating must be between 1 and {max} stars, got {got}")]
    RatingOutOfRange { got: u8, max: u8 },
}

/// Holds the draft fields and enforces the submission guard
#[derive(Debug, Default)]
pub struct DraftForm {
    draft: Draft,
}

impl DraftForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_genre(&mut self, genre: impl Into<String>) {
        self.draft.genre = genre.into();
    }

    /// Select star `rating`. Always absolute; selecting the current star keeps it.
    pub fn set_rating(&mut self, rating: u8) -> Result<(), DraftError> {
        if !is_valid_rating(rating) {
            return Err(DraftError::RatingOutOfRange { got: rating, max: MAX_STARS });
        }
        self.draft.rating = rating;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), DraftError> {
        let missing = self.draft.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(DraftError::MissingFields(missing))
        }
    }

    pub fn reset(&mut self) {
        self.draft.clear();
    }
}
