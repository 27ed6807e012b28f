//! Add command implementation.

use anyhow::{Context, Result};
use clap::Args;

use reel_core::{MovieView, NewMovie};

use crate::output;
use crate::source::Target;

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Movie title
    #[arg(long)]
    pub title: String,

    /// Opening text
    #[arg(long)]
    pub opening_text: String,

    /// Release date, kept as given
    #[arg(long)]
    pub release_date: String,

    /// Fetch and print the collection afterwards
    #[arg(long)]
    pub fetch: bool,
}

pub async fn run(args: AddArgs, target: &Target) -> Result<()> {
    let source = target.open()?;
    let view = MovieView::new(source);

    let movie = NewMovie::new(args.title, args.opening_text, args.release_date);
    view.try_submit_movie(&movie)
        .await
        .context("Failed to add movie")?;

    output::success(&format!("Added movie: {}", movie.title));

    if args.fetch {
        view.fetch_movies().await;
        output::render(&view.render_state());
    }

    Ok(())
}
