use serde::{Deserialize, Serialize};

/// Number of stars in every rating control.
pub const MAX_STARS: u8 = 5;

/// Draft rating value meaning "no star selected yet".
pub const UNSET_RATING: u8 = 0;

/// Display state of a single star indicator
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StarState {
    Filled,
    Empty,
}

pub fn is_valid_rating(rating: u8) -> bool {
    (1..=MAX_STARS).contains(&rating)
}

/// Star states for a rating: position `i` (1-based) is filled when `i <= rating`.
pub fn star_states(rating: u8) -> [StarState; MAX_STARS as usize] {
    let mut stars = [StarState::Empty; MAX_STARS as usize];
    for (i, star) in stars.iter_mut().enumerate() {
        if (i as u8) < rating {
            *star = StarState::Filled;
        }
    }
    stars
}
