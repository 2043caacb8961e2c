mod commands;
mod render;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use celebration_core::config::AppConfig;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "celebrate")]
#[command(about = "Turn a few personal facts into a year of daily celebrations")]
struct Cli {
    /// Use this config file instead of ~/.config/celebration/config.toml
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a year of celebrations and save it as an .ics file
    Generate {
        /// Profile file (.toml or .json)
        #[arg(short, long)]
        profile: PathBuf,

        /// Year to generate (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Directory to save the calendar in (defaults to output_dir from config)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show a few random celebrations without saving anything
    Preview {
        /// Profile file (.toml or .json)
        #[arg(short, long)]
        profile: PathBuf,

        /// Year to generate (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Number of events to show (defaults to preview_count from config)
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
    /// List the celebrations in an existing .ics file
    Show {
        file: PathBuf,

        /// Only list the first N events
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Show the config location and effective settings
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    utils::logging::init_logging()?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            profile,
            year,
            output,
        } => {
            let config = load_config(cli.config.as_deref())?;
            commands::generate::run(&config, &profile, year, output).await
        }
        Commands::Preview {
            profile,
            year,
            count,
        } => {
            let config = load_config(cli.config.as_deref())?;
            commands::preview::run(&config, &profile, year, count).await
        }
        Commands::Show { file, limit } => commands::show::run(&file, limit),
        Commands::Config => commands::config::run(cli.config.as_deref()),
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<AppConfig> {
    let config = match path {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    Ok(config)
}
