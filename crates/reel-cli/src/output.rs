//! Output formatting helpers.

use anyhow::Result;
use chrono::Local;
use colored::Colorize;
use serde::Serialize;

use reel_core::{MovieRecord, RenderState};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a render state: one line for loading, error and empty, one block
/// per movie otherwise.
pub fn render(state: &RenderState) {
    match state {
        RenderState::Loading => eprintln!("{}", "Loading...".dimmed()),
        RenderState::Error(message) => error(message),
        RenderState::Empty => println!("Found no movies."),
        RenderState::Populated(movies) => {
            for movie in movies {
                movie_block(movie);
            }
        }
    }
}

fn movie_block(movie: &MovieRecord) {
    println!("{}", movie.title.bold());
    println!("  {}", movie.release_date.dimmed());
    println!("  {}", movie.opening_text);
    println!();
}

/// Print the current-date footer.
pub fn date_footer() {
    println!("{} {}", "Current Date".dimmed(), current_date());
}

/// Today's date as "Month D, YYYY".
pub fn current_date() -> String {
    Local::now().format("%B %-d, %Y").to_string()
}
