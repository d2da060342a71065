use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand, ValueEnum,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use covercli::{
    cli, config, error,
    providers::{GoogleProvider, SerpApiProvider},
};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Search for cover art
    Search(SearchOptions),

    /// Scan a library for albums missing artwork
    Scan(ScanOptions),

    /// Download one image into an album folder
    Fetch(FetchOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SearchOptions {
    /// The image search query, typically "artist album"
    pub query: String,

    /// Simulate the search without making network calls
    #[clap(long)]
    pub simulate: bool,

    /// Search backend to use
    #[clap(long, value_enum, default_value = "google")]
    pub provider: ProviderKind,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ProviderKind {
    Google,
    Serpapi,
}

#[derive(Parser, Debug, Clone)]
pub struct ScanOptions {
    /// Root directory containing one folder per album
    pub root: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct FetchOptions {
    /// URL of the image to download
    pub url: String,

    /// Album folder to save the artwork into
    pub album_dir: PathBuf,

    /// Overwrite existing cover art
    #[clap(long)]
    pub force: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Search(opt) => match opt.provider {
            ProviderKind::Google => {
                // Simulate mode never touches the credentials, so a dry run
                // works without a configured API key.
                let provider = if opt.simulate {
                    GoogleProvider::new(String::new(), String::new())
                } else {
                    GoogleProvider::from_config()
                };
                cli::search(provider, &opt.query, opt.simulate).await
            }
            ProviderKind::Serpapi => {
                cli::search(SerpApiProvider::new(), &opt.query, opt.simulate).await
            }
        },

        Command::Scan(opt) => cli::scan(&opt.root),

        Command::Fetch(opt) => cli::fetch(&opt.url, &opt.album_dir, opt.force).await,

        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
