mod commands;
mod config;
mod error;
mod handlers;
mod models;
mod transport;
mod ui;
mod units;

use std::{io::Write, path::Path, sync::Arc};

use commands::{Command, HELP};
use handlers::VideoLibraryClient;
use models::SelectedFile;
use transport::HttpTransport;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use ui::TerminalView;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vidshelf=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting vidshelf");

    let config = models::Config::load()?;
    tracing::info!("Configuration loaded successfully");
    tracing::debug!("API URL: {}", config.api_url);
    tracing::debug!(
        "Upload limit: {} bytes, quota: {} bytes",
        config.upload_limit_bytes,
        config.quota_bytes
    );

    let transport = Arc::new(HttpTransport::new(&config.api_url)?);
    let view = Arc::new(TerminalView::new());
    let client = VideoLibraryClient::new(transport, view.clone(), config.limits());

    client.load_videos().await;
    println!("{}", HELP);

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = view.read_line().await else {
            break;
        };

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => run(&client, &view, command).await,
            Err(usage) => println!("{}", usage),
        }
    }

    tracing::info!("Shutting down");
    Ok(())
}

async fn run(client: &VideoLibraryClient, view: &TerminalView, command: Command) {
    match command {
        Command::List => client.load_videos().await,
        Command::Select(path) => {
            select(client, view, &path).await;
        }
        Command::Upload(path) => {
            if let Some(path) = path {
                if !select(client, view, &path).await {
                    return;
                }
            }
            client.submit_upload(view.selected_file().as_ref()).await;
        }
        Command::View(n) => match view.row(n) {
            Some(row) => client.view_video(&row),
            None => println!("No video number {}", n),
        },
        Command::Delete(n) => match view.row(n) {
            Some(row) => client.delete_video(&row).await,
            None => println!("No video number {}", n),
        },
        Command::Status => view.print_status(),
        Command::Help => println!("{}", HELP),
        Command::Quit | Command::Empty => {}
    }
}

/// Puts `path` into the file input. Returns false when nothing usable was selected.
async fn select(client: &VideoLibraryClient, view: &TerminalView, path: &Path) -> bool {
    let file = match SelectedFile::from_path(path).await {
        Ok(file) => file,
        Err(e) => {
            tracing::warn!("Cannot select {}: {}", path.display(), e);
            println!("Cannot open {}", path.display());
            return false;
        }
    };

    view.select_file(file.clone());
    client.on_file_selected(&file)
}
