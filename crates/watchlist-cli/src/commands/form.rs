use super::add::report_added;
use super::prompts::{is_interactive, prompt_select, prompt_string, prompt_yes_no};
use crate::context::AppContext;
use crate::output::Output;
use crate::render::{format_form, print_watchlist, star_choices};
use color_eyre::Result;
use watchlist_core::{WatchlistSession, render_form, render_list};
use watchlist_models::UNSET_RATING;

pub fn run_form(ctx: &AppContext, output: &Output) -> Result<()> {
    if !is_interactive() {
        return Err(color_eyre::eyre::eyre!(
            "The form needs an interactive terminal; use 'watchlist add --title .. --genre .. --rating ..' instead"
        ));
    }

    let glyphs = ctx.glyphs();
    let choices = star_choices(&glyphs);
    let mut session = ctx.open_session(output);
    print_watchlist(&render_list(&session.movies()), &glyphs, output);

    loop {
        output.info("Add a movie");
        fill_draft(&mut session, &choices)?;

        if output.is_human() {
            output.info(format_form(&render_form(session.draft()), &glyphs));
        }

        let again = match session.submit() {
            Ok(submitted) => {
                report_added(ctx, &submitted, output);
                print_watchlist(&render_list(&session.movies()), &glyphs, output);
                prompt_yes_no("Add another movie?", Some(true))?
            }
            Err(e) => {
                // Draft is kept, so the next round starts from what was entered
                output.error(e.to_string());
                prompt_yes_no("Fix and try again?", Some(true))?
            }
        };

        if !again {
            break;
        }
    }

    Ok(())
}

fn fill_draft(session: &mut WatchlistSession, choices: &[String]) -> Result<()> {
    let title = prompt_string("Title", Some(session.draft().title.as_str()))?;
    session.set_title(title);

    let genre = prompt_string("Genre", Some(session.draft().genre.as_str()))?;
    session.set_genre(genre);

    let current = session.draft().rating;
    let default = if current == UNSET_RATING { 0 } else { usize::from(current) - 1 };
    let index = prompt_select("Rating", choices, default)?;
    // Choices cover exactly 1..=5 stars
    let rating = u8::try_from(index + 1).unwrap_or(u8::MAX);
    session.set_rating(rating)?;

    Ok(())
}
