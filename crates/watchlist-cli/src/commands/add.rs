use crate::context::AppContext;
use crate::output::Output;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use serde_json::json;
use watchlist_core::{Submitted, render_card};

pub fn run_add(ctx: &AppContext, title: String, genre: String, rating: Option<u8>, output: &Output) -> Result<()> {
    let mut session = ctx.open_session(output);

    session.set_title(title);
    session.set_genre(genre);
    if let Some(rating) = rating {
        session.set_rating(rating).wrap_err("Movie was not added")?;
    }

    let submitted = session.submit().wrap_err("Movie was not added")?;
    report_added(ctx, &submitted, output);
    Ok(())
}

/// Announce an accepted movie and any save warnings
pub fn report_added(ctx: &AppContext, submitted: &Submitted, output: &Output) {
    for warning in &submitted.warnings {
        output.warn(warning);
    }

    let card = render_card(&submitted.movie);
    if output.is_human() {
        output.success(format!(
            "Added {} ({}, {}) - {} in watchlist",
            card.title,
            card.genre,
            ctx.glyphs().line(&card.stars),
            submitted.len
        ));
    } else {
        output.json(&json!({
            "type": "added",
            "movie": card,
            "count": submitted.len,
            "saved": submitted.warnings.is_empty(),
        }));
    }
}
