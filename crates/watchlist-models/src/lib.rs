pub mod draft;
pub mod movie;
pub mod rating;

pub use draft::Draft;
pub use movie::Movie;
pub use rating::{StarState, MAX_STARS, UNSET_RATING, is_valid_rating, star_states};
