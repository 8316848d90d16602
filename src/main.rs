use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotstats::{cli, config, error};

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
    /// Analyze exported streaming history files
    History(HistoryOptions),

    /// Analyze a saved recently-played response
    Recent(RecentOptions),

    /// Show configuration and the export files found
    Info,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct HistoryOptions {
    /// Directory holding the exported JSON files
    #[clap(long)]
    pub dir: Option<PathBuf>,

    /// Only analyze plays from this year
    #[clap(long)]
    pub year: Option<i32>,

    /// Number of entries in top lists
    #[clap(long)]
    pub top: Option<usize>,

    /// Minimum play duration in milliseconds for a play to count
    #[clap(long)]
    pub min_ms: Option<u64>,

    /// UTC offset used for hours, months and years (e.g. -05:00, UTC, local)
    #[clap(long, allow_hyphen_values = true)]
    pub utc_offset: Option<String>,

    /// Width of a full-length bar in the ASCII graphs
    #[clap(long)]
    pub scale: Option<usize>,

    /// Artist genre lookup file
    #[clap(long)]
    pub genres: Option<PathBuf>,

    /// Print the report as JSON
    #[clap(long)]
    pub json: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct RecentOptions {
    /// Saved recently-played response
    #[clap(long)]
    pub file: PathBuf,

    /// Number of entries in top lists
    #[clap(long)]
    pub top: Option<usize>,

    /// UTC offset used for hours (e.g. -05:00, UTC, local)
    #[clap(long, allow_hyphen_values = true)]
    pub utc_offset: Option<String>,

    /// Artist genre lookup file
    #[clap(long)]
    pub genres: Option<PathBuf>,

    /// Print the report as JSON
    #[clap(long)]
    pub json: bool,
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
        Command::History(opt) => {
            cli::history(cli::HistoryRequest {
                dir: opt.dir,
                year: opt.year,
                top: opt.top,
                min_ms: opt.min_ms,
                utc_offset: opt.utc_offset,
                scale: opt.scale,
                genres: opt.genres,
                json: opt.json,
            })
            .await
        }
        Command::Recent(opt) => {
            cli::recent(opt.file, opt.top, opt.utc_offset, opt.genres, opt.json).await
        }
        Command::Info => cli::info().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
