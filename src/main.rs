use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use kworblist::{
    Res,
    cli::{self, Mode, Outcome},
    config, error, info,
    kworb::Kworb,
    management::TokenManager,
    spotify::SpotifyClient,
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
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
  args_conflicts_with_subcommands = true, // a playlist request or a subcommand, never both
)]
struct Cli {
    #[clap(subcommand)]
    command: Option<Command>,

    /// Artist name, chart period (all_time, a year 2016-2026, or a decade
    /// such as 1960), or a playlist .json file
    #[clap(allow_hyphen_values = true)]
    target: Option<String>,

    /// Number of tracks to take from the chart
    #[clap(value_parser = clap::value_parser!(u32).range(1..))]
    length: Option<u32>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Authorize with Spotify API
    Auth,

    /// Get shell completions
    Completions(CompletionsOption),
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

    let args = Cli::parse_from(cli::positional_args(std::env::args_os()));

    match args.command {
        Some(Command::Auth) => {
            if let Err(e) = cli::auth().await {
                error!("{}", e);
            }
        }
        Some(Command::Completions(opt)) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
        None => {
            let Some(mode) = cli::classify(args.target.as_deref(), args.length) else {
                println!("{}", cli::usage());
                std::process::exit(1);
            };

            if let Err(e) = create(mode).await {
                error!("{}", e);
            }
        }
    }
}

async fn create(mode: Mode) -> Res<()> {
    let mut token_mgr = TokenManager::load().await?;
    let spotify = SpotifyClient::new(config::spotify_apiurl(), token_mgr.get_valid_token().await);
    let kworb = Kworb::new(config::kworb_url())?;

    if cli::run(&mode, &spotify, &kworb).await? == Outcome::NothingCreated {
        info!("Nothing created.");
    }
    Ok(())
}
