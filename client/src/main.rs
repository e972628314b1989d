//! Shelf terminal client.

use shelf_client::command::{Command, ParseError, HELP};
use shelf_client::render::Screen;
use shelf_client::{BookApi, ClientConfig, HttpBookApi, LibraryView, Result};
use std::io::{self, Write};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

enum Flow {
    Continue,
    Quit,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they don't interleave with the screen
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shelf_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let config = ClientConfig::from_env();
    tracing::info!("Using catalog at {}", config.api_url);

    let mut view = LibraryView::new(HttpBookApi::new(config.api_url));
    if let Err(e) = view.mount().await {
        eprintln!("Error loading books: {}", e);
    }
    println!("{}", Screen(&view));
    println!("Type `help` for commands.");

    while let Some(line) = prompt("> ")? {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(ParseError::Empty) => continue,
            Err(e) => {
                println!("{}", e);
                continue;
            }
        };

        match run(&mut view, command).await {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    Ok(())
}

async fn run<A: BookApi>(view: &mut LibraryView<A>, command: Command) -> Result<Flow> {
    match command {
        Command::Refresh => view.refresh().await?,
        Command::Next => view.next_page().await?,
        Command::Previous => {
            if !view.previous_page().await? {
                println!("Already on the first page.");
                return Ok(Flow::Continue);
            }
        }
        Command::Sort(sort_by) => view.set_sort_by(sort_by).await?,
        Command::Order(sort_order) => view.set_sort_order(sort_order).await?,
        Command::Set { field, value } => view.set_field(&field, value)?,
        Command::Edit(id) => {
            if !view.edit_displayed(id) {
                println!("Book #{} is not on this page.", id);
                return Ok(Flow::Continue);
            }
        }
        Command::Cancel => view.cancel_edit(),
        Command::Submit => {
            let book = view.submit().await?;
            println!("Saved #{} {}", book.id, book.title);
        }
        Command::Delete(id) => {
            let mut ask = |question: &str| confirm(question).unwrap_or(false);
            if !view.delete(id, &mut ask).await? {
                return Ok(Flow::Continue);
            }
        }
        Command::Help => {
            println!("{}", HELP);
            return Ok(Flow::Continue);
        }
        Command::Quit => return Ok(Flow::Quit),
    }

    println!("{}", Screen(&*view));
    Ok(Flow::Continue)
}

/// Print `text` and read one line. `None` at end of input.
fn prompt(text: &str) -> io::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn confirm(question: &str) -> io::Result<bool> {
    let answer = prompt(&format!("{} [y/N] ", question))?.unwrap_or_default();
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
