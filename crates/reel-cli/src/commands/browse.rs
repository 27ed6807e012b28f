//! Browse command implementation.
//!
//! Mounts a view and re-renders it on every status change while reading
//! commands from stdin.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use futures_util::StreamExt;
use tokio::io::{AsyncBufReadExt, BufReader};

use reel_core::{MovieView, NewMovie};

use crate::output;
use crate::source::Target;

const HELP: &str = "Commands: fetch (f), add <title> | <opening text> | <release date>, quit (q)";

#[derive(Args, Debug)]
pub struct BrowseArgs {}

/// A parsed stdin command.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Fetch,
    Add(NewMovie),
    Help,
    Quit,
    Nothing,
    Unknown(String),
}

fn parse_input(line: &str) -> Input {
    let line = line.trim();
    let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

    match command {
        "" => Input::Nothing,
        "f" | "fetch" => Input::Fetch,
        "q" | "quit" | "exit" => Input::Quit,
        "h" | "help" | "?" => Input::Help,
        "add" => {
            let fields: Vec<_> = rest.split('|').map(str::trim).collect();
            match fields.as_slice() {
                [title, opening_text, release_date] => {
                    Input::Add(NewMovie::new(*title, *opening_text, *release_date))
                }
                _ => Input::Unknown(line.to_string()),
            }
        }
        _ => Input::Unknown(line.to_string()),
    }
}

pub async fn run(_args: BrowseArgs, target: &Target) -> Result<()> {
    let source = target.open()?;
    eprintln!("{}", HELP.dimmed());

    let view = MovieView::mount(source);

    let mut updates = view.updates();
    let renderer = tokio::spawn(async move {
        while let Some(status) = updates.next().await {
            output::render(&status.render_state());
        }
    });

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            Input::Fetch => {
                let view = view.clone();
                tokio::spawn(async move { view.fetch_movies().await });
            }
            Input::Add(movie) => {
                let view = view.clone();
                tokio::spawn(async move { view.submit_movie(&movie).await });
                output::success("Submitted; fetch to see it.");
            }
            Input::Help => eprintln!("{}", HELP.dimmed()),
            Input::Quit => break,
            Input::Nothing => {}
            Input::Unknown(other) => output::error(&format!("Unknown command: {other}")),
        }
    }

    view.dispose();
    renderer.abort();

    Ok(())
}
