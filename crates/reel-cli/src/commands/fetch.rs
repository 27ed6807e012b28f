//! Fetch command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use reel_core::{MovieView, RenderState};

use crate::output;
use crate::source::Target;

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Print movies as JSON lines instead of text
    #[arg(long)]
    pub json: bool,

    /// Do not print the date footer
    #[arg(long)]
    pub no_footer: bool,
}

pub async fn run(args: FetchArgs, target: &Target) -> Result<()> {
    let source = target.open()?;

    let view = MovieView::mount(source);
    if !args.json {
        output::render(&view.render_state());
    }

    let state = view.settled().await.render_state();

    if let RenderState::Error(message) = &state {
        bail!("{}", message);
    }

    if args.json {
        for movie in state.movies() {
            output::json(movie).context("Failed to write movie")?;
        }
        return Ok(());
    }

    output::render(&state);
    if !args.no_footer {
        output::date_footer();
    }

    Ok(())
}
