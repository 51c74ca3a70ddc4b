use crate::context::AppContext;
use crate::output::Output;
use crate::render::print_watchlist;
use color_eyre::Result;
use watchlist_core::render_list;

pub fn run_list(ctx: &AppContext, output: &Output) -> Result<()> {
    let session = ctx.open_session(output);
    let cards = render_list(&session.movies());
    print_watchlist(&cards, &ctx.glyphs(), output);
    Ok(())
}
