//! Presentation projection: plain data derived from the draft and the list.
//! Nothing here mutates state.

use serde::Serialize;
use watchlist_config::DisplayConfig;
use watchlist_models::{Draft, Movie, StarState, MAX_STARS, star_states};

/// The draft form as it should currently be shown
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FormView {
    pub title: String,
    pub genre: String,
    pub rating: u8,
    pub stars: [StarState; MAX_STARS as usize],
    pub ready: bool,
}

/// One list entry
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MovieCard {
    pub id: String,
    pub title: String,
    pub genre: String,
    pub rating: u8,
    pub stars: [StarState; MAX_STARS as usize],
}

pub fn render_form(draft: &Draft) -> FormView {
    FormView {
        title: draft.title.clone(),
        genre: draft.genre.clone(),
        rating: draft.rating,
        stars: star_states(draft.rating),
        ready: draft.missing_fields().is_empty(),
    }
}

pub fn render_card(movie: &Movie) -> MovieCard {
    MovieCard {
        id: movie.id.clone(),
        title: movie.title.clone(),
        genre: movie.genre.clone(),
        rating: movie.rating,
        stars: star_states(movie.rating),
    }
}

pub fn render_list(movies: &[Movie]) -> Vec<MovieCard> {
    movies.iter().map(render_card).collect()
}

/// Text glyphs for star indicators
#[derive(Debug, Clone)]
pub struct StarGlyphs {
    pub filled: String,
    pub empty: String,
}

impl StarGlyphs {
    pub fn from_config(display: &DisplayConfig) -> Self {
        Self {
            filled: display.filled_star.clone(),
            empty: display.empty_star.clone(),
        }
    }

    pub fn glyph(&self, star: StarState) -> &str {
        match star {
            StarState::Filled => &self.filled,
            StarState::Empty => &self.empty,
        }
    }

    pub fn line(&self, stars: &[StarState]) -> String {
        stars.iter().map(|s| self.glyph(*s)).collect()
    }
}

impl Default for StarGlyphs {
    fn default() -> Self {
        Self::from_config(&DisplayConfig::default())
    }
}
