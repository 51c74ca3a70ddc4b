use crate::output::Output;
use owo_colors::OwoColorize;
use serde_json::json;
use watchlist_core::{FormView, MovieCard, StarGlyphs};
use watchlist_models::{StarState, MAX_STARS, star_states};

fn star_line(stars: &[StarState], glyphs: &StarGlyphs, color: bool) -> String {
    if !color {
        return glyphs.line(stars);
    }
    stars
        .iter()
        .map(|star| match star {
            StarState::Filled => glyphs.glyph(*star).yellow().to_string(),
            StarState::Empty => glyphs.glyph(*star).dimmed().to_string(),
        })
        .collect()
}

pub fn format_card(card: &MovieCard, glyphs: &StarGlyphs, color: bool) -> String {
    let stars = star_line(&card.stars, glyphs, color);
    if color {
        format!("{}\n  Genre: {}\n  {}", card.title.bold(), card.genre.dimmed(), stars)
    } else {
        format!("{}\n  Genre: {}\n  {}", card.title, card.genre, stars)
    }
}

pub fn format_form(form: &FormView, glyphs: &StarGlyphs) -> String {
    format!(
        "Title:  {}\nGenre:  {}\nRating: {}",
        form.title,
        form.genre,
        glyphs.line(&form.stars)
    )
}

/// Labels for the star selector, index `i` selecting `i + 1` stars
pub fn star_choices(glyphs: &StarGlyphs) -> Vec<String> {
    (1..=MAX_STARS)
        .map(|n| {
            let noun = if n == 1 { "star" } else { "stars" };
            format!("{}  {} {}", glyphs.line(&star_states(n)), n, noun)
        })
        .collect()
}

pub fn print_watchlist(cards: &[MovieCard], glyphs: &StarGlyphs, output: &Output) {
    if !output.is_human() {
        output.json(&json!({
            "type": "watchlist",
            "count": cards.len(),
            "movies": cards,
        }));
        return;
    }
    if output.is_quiet() {
        return;
    }

    println!("\n{}", "Your Watchlist".bright_cyan().bold());
    if cards.is_empty() {
        println!("{}", "No movies yet. Add one with 'watchlist add' or 'watchlist form'.".dimmed());
        return;
    }
    for card in cards {
        println!("\n{}", format_card(card, glyphs, true));
    }
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use watchlist_core::{render_card, render_form};
    use watchlist_models::{Draft, Movie};

    fn ascii() -> StarGlyphs {
        StarGlyphs {
            filled: "*".to_string(),
            empty: ".".to_string(),
        }
    }

    #[test]
    fn test_format_card_plain() {
        let card = render_card(&Movie::new("1", "Dune", "Sci-Fi", 4));
        assert_eq!(format_card(&card, &ascii(), false), "Dune\n  Genre: Sci-Fi\n  ****.");
    }

    #[test]
    fn test_format_form_shows_live_rating() {
        let draft = Draft {
            title: "Heat".to_string(),
            genre: String::new(),
            rating: 2,
        };
        let text = format_form(&render_form(&draft), &ascii());
        assert!(text.ends_with("Rating: **..."));
    }

    #[test]
    fn test_star_choices() {
        let choices = star_choices(&ascii());
        assert_eq!(choices.len(), 5);
        assert_eq!(choices[0], "*....  1 star");
        assert_eq!(choices[4], "*****  5 stars");
    }
}
