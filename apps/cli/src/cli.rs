//! Command-line arguments.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "langgen", version, about = "Turn dictionary listings into Anki cloze cards")]
pub struct Cli {
    /// Language looked up (ISO 639-1), overrides LANGGEN_LANG_FROM.
    #[arg(long, global = true)]
    pub from: Option<String>,

    /// Language translated into (ISO 639-1), overrides LANGGEN_LANG_TO.
    #[arg(long, global = true)]
    pub to: Option<String>,

    /// Target deck, overrides ANKI_DECK.
    #[arg(long, global = true)]
    pub deck: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pick a phrase from a parsed dictionary listing and add it as a cloze card.
    Card(CardArgs),
    /// Check that AnkiConnect is reachable.
    Check,
    /// Print the Anki media folder.
    Media,
}

#[derive(Debug, Args)]
pub struct CardArgs {
    /// Word looked up; several arguments are joined with spaces.
    #[arg(required = true, num_args = 1..)]
    pub word: Vec<String>,

    /// JSON file holding the parsed table rows of the dictionary page.
    #[arg(long)]
    pub rows: PathBuf,

    /// Image file name, already present in the media folder.
    #[arg(long, conflicts_with_all = ["image_url", "ask_image"])]
    pub image: Option<String>,

    /// Download the card image from this URL into the media folder.
    #[arg(long, conflicts_with = "ask_image")]
    pub image_url: Option<String>,

    /// Ask for an image URL after the phrase is chosen.
    #[arg(long)]
    pub ask_image: bool,

    /// Reference the pronunciation file for the chosen phrase.
    #[arg(long)]
    pub audio: bool,

    /// Print the AnkiConnect request instead of sending it.
    #[arg(long)]
    pub dry_run: bool,
}

impl CardArgs {
    pub fn word(&self) -> String {
        self.word.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_card_command() {
        let cli = Cli::parse_from([
            "langgen", "card", "chat", "perché", "--rows", "chat.json", "--from", "fr", "--audio",
        ]);
        assert_eq!(cli.from.as_deref(), Some("fr"));
        let Command::Card(args) = cli.command else {
            panic!("expected card command");
        };
        assert_eq!(args.word(), "chat perché");
        assert_eq!(args.rows, PathBuf::from("chat.json"));
        assert!(args.audio);
        assert!(!args.dry_run);
        assert_eq!(args.image, None);
    }

    #[test]
    fn image_sources_are_exclusive() {
        let cli = Cli::parse_from([
            "langgen", "card", "chat", "--rows", "chat.json", "--image-url", "https://example.com/chat.jpg",
        ]);
        let Command::Card(args) = cli.command else {
            panic!("expected card command");
        };
        assert_eq!(args.image_url.as_deref(), Some("https://example.com/chat.jpg"));
        assert!(!args.ask_image);

        assert!(Cli::try_parse_from([
            "langgen", "card", "chat", "--rows", "chat.json", "--image", "chat.jpg", "--ask-image",
        ])
        .is_err());
    }

    #[test]
    fn card_requires_rows() {
        assert!(Cli::try_parse_from(["langgen", "card", "chat"]).is_err());
    }

    #[test]
    fn parses_check_command() {
        let cli = Cli::parse_from(["langgen", "check", "--deck", "Spanish"]);
        assert!(matches!(cli.command, Command::Check));
        assert_eq!(cli.deck.as_deref(), Some("Spanish"));
    }
}
