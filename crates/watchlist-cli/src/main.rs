use clap::{ArgAction, Parser, Subcommand};
use commands::{add, config, export, form, list};
use std::path::PathBuf;

mod commands;
mod context;
mod logging;
mod output;
mod render;

#[derive(Parser)]
#[command(name = "watchlist")]
#[command(about = "Keep a list of movies you want to watch, with a genre and a star rating")]
#[command(version)]
struct Cli {
    /// Enable verbose output (use multiple times for more verbosity: -v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "human", value_enum)]
    output: output::OutputFormat,

    /// Directory holding config, data and logs (overrides WATCHLIST_HOME)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a movie to the watchlist
    #[command(long_about = "Add one movie. Title, genre and a rating of 1-5 stars are all required; the movie is saved immediately.")]
    Add {
        /// Movie title
        #[arg(long, default_value = "")]
        title: String,

        /// Genre, free text (e.g. "Sci-Fi")
        #[arg(long, default_value = "")]
        genre: String,

        /// Star rating from 1 to 5
        #[arg(long)]
        rating: Option<u8>,
    },
    /// Fill in the add-movie form interactively
    #[command(long_about = "Run the interactive form: enter a title and genre, pick a star rating, and the movie is added. The watchlist is shown after every addition.")]
    Form,
    /// Show the watchlist
    List,
    /// Print the stored watchlist JSON
    #[command(long_about = "Write the stored watchlist exactly as persisted: a JSON array of {id, title, genre, rating} objects.")]
    Export {
        /// Write to this file instead of stdout
        #[arg(long, value_name = "PATH")]
        file: Option<PathBuf>,
    },
    /// Inspect or create the configuration file
    Config {
        #[command(subcommand)]
        cmd: Option<ConfigCommands>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Print the configuration file path
    Path,
    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long, action = ArgAction::SetTrue)]
        force: bool,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    let ctx = context::AppContext::load(cli.data_dir.as_deref())?;

    let log_file = ctx.config.logging.file.clone();
    logging::init_logging_with_file(cli.verbose, cli.quiet, log_file)
        .map_err(|e| color_eyre::eyre::eyre!("{}", e))?;

    let output = output::Output::new(cli.output, cli.quiet);

    match cli.command {
        Commands::Add { title, genre, rating } => add::run_add(&ctx, title, genre, rating, &output),
        Commands::Form => form::run_form(&ctx, &output),
        Commands::List => list::run_list(&ctx, &output),
        Commands::Export { file } => export::run_export(&ctx, file, &output),
        Commands::Config { cmd } => config::run_config(&ctx, cmd.unwrap_or(ConfigCommands::Show), &output),
    }
}
