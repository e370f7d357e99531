pub mod cli;
pub mod client;
pub mod config;
pub mod prompt;
pub mod rows;

use std::io;

use anyhow::Context;
use clap::Parser;
use langgen_core::{audio_file_name, extract_entries, AddNoteRequest, CardTemplate, Menu};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{CardArgs, Cli, Command};
use crate::client::{AnkiClient, ImageDownloader};
use crate::config::Config;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let config = Config::from_env()?.with_overrides(
        cli.from.as_deref(),
        cli.to.as_deref(),
        cli.deck.as_deref(),
    )?;
    tracing::info!(languages = %config.languages, deck = %config.deck, "configured");

    match cli.command {
        Command::Card(args) => generate_card(&config, &args).await,
        Command::Check => check_anki(&config).await,
        Command::Media => {
            match config.media_folder() {
                Some(dir) => println!("{}", dir.display()),
                None => println!("Anki media folder not found."),
            }
            Ok(())
        }
    }
}

async fn generate_card(config: &Config, args: &CardArgs) -> anyhow::Result<()> {
    let word = args.word();
    tracing::info!(%word, rows = %args.rows.display(), "generating card");

    let rows = rows::load_rows(&args.rows)?;
    let menu = Menu::new(extract_entries(&rows, config.languages.source()));
    if menu.is_empty() {
        println!("No entries found for '{word}'.");
        return Ok(());
    }

    let selection = {
        let stdin = io::stdin();
        let mut input = stdin.lock();
        let mut output = io::stdout();
        prompt::choose(&menu, &mut input, &mut output)?
    };
    let Some(selection) = selection else {
        tracing::info!("no phrase selected");
        return Ok(());
    };

    let image = resolve_image(config, args).await?;
    let audio = args
        .audio
        .then(|| audio_file_name(config.languages.source(), &selection.choice.phrase));
    let card = CardTemplate {
        word: &word,
        definitions: &selection.entry.definitions,
        sentence: &selection.choice.phrase,
        translation: &selection.choice.gloss,
        image: image.as_deref(),
        audio: audio.as_deref(),
    };
    let request = AddNoteRequest::cloze(&config.deck, card.render(), "");

    if args.dry_run {
        println!("{}", serde_json::to_string_pretty(&request)?);
        return Ok(());
    }

    let note_id = AnkiClient::new(&config.anki_url).add_note(&request).await?;
    tracing::info!(note_id, deck = %config.deck, "card added");
    Ok(())
}

async fn resolve_image(config: &Config, args: &CardArgs) -> anyhow::Result<Option<String>> {
    if let Some(name) = &args.image {
        return Ok(Some(name.clone()));
    }
    if args.image_url.is_none() && !args.ask_image {
        return Ok(None);
    }

    let media_dir = config
        .media_folder()
        .context("Anki media folder not found, set ANKI_MEDIA_DIR")?;
    let downloader = ImageDownloader::new();

    if let Some(url) = &args.image_url {
        let name = downloader.download(url, media_dir).await?;
        return Ok(Some(name));
    }

    loop {
        let url = prompt::ask_image_url(&mut io::stdin().lock(), &mut io::stdout())?;
        let Some(url) = url else {
            return Ok(None);
        };
        match downloader.download(&url, media_dir).await {
            Ok(name) => {
                println!("Image saved to the media folder as {name}.");
                return Ok(Some(name));
            }
            Err(e) => println!("Failed to download image: {e}"),
        }
    }
}

async fn check_anki(config: &Config) -> anyhow::Result<()> {
    let client = AnkiClient::new(&config.anki_url);
    match client.version().await {
        Ok(version) => {
            println!("Anki connection succeeded (AnkiConnect v{version}).");
            Ok(())
        }
        Err(e) => {
            tracing::error!(url = %client.url(), error = %e, "Anki check failed");
            println!("Unable to communicate with Anki!");
            Err(e.into())
        }
    }
}
