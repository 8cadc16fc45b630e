//! Daily Word - CLI
//!
//! One five-letter puzzle per day, played in a TUI or line by line.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use daily_word::{
    commands::{StatusReport, run_simple},
    config::{DEFAULT_ATTEMPTS, GameConfig},
    daily::{DEFAULT_EPOCH, SystemClock},
    game::{PuzzleSession, Stats},
    output::{print_stats, print_status},
    store::{FileStore, MemoryStore, Storage},
    wordlists::{Dictionary, loader::load_from_file},
};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};

/// Log file written inside the data directory
const LOG_FILE: &str = "daily-word.log";

#[derive(Parser)]
#[command(
    name = "daily_word",
    about = "A new five-letter word puzzle every day",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory for saved progress, stats and the log file
    #[arg(long, global = true, env = "DAILY_WORD_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Number of guesses per day
    #[arg(short, long, global = true, default_value_t = DEFAULT_ATTEMPTS)]
    attempts: usize,

    /// First day of the word sequence (YYYY-MM-DD)
    #[arg(long, global = true, default_value = DEFAULT_EPOCH)]
    epoch: NaiveDate,

    /// Keep state in memory only; nothing is saved
    #[arg(long, global = true)]
    memory: bool,

    /// Extra acceptable guesses, one word per line
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (one guess per line, no TUI)
    Simple,

    /// Show saved statistics
    Stats,

    /// Show today's puzzle number, progress and time to the next word
    Status,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = resolve_data_dir(cli.data_dir.clone());
    init_logging(&data_dir);

    let dictionary = load_dictionary(cli.wordlist.as_deref())?;
    let store = open_store(&data_dir, cli.memory)?;
    let config = GameConfig::new()
        .with_attempts(cli.attempts)
        .with_epoch(cli.epoch);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, store, config),
        Commands::Simple => {
            let mut session = PuzzleSession::open(&dictionary, store, SystemClock, config)?;
            run_simple(&mut session)
        }
        Commands::Stats => {
            print_stats(&Stats::load(&store));
            Ok(())
        }
        Commands::Status => {
            let session = PuzzleSession::open(&dictionary, store, SystemClock, config)?;
            print_status(&StatusReport::from_session(&session));
            Ok(())
        }
    }
}

fn resolve_data_dir(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| dirs::data_local_dir().map(|dir| dir.join("daily-word")))
        .unwrap_or_else(|| PathBuf::from(".daily-word"))
}

/// Route logs to a file so they never draw over the TUI
fn init_logging(data_dir: &Path) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    let file = fs::create_dir_all(data_dir).and_then(|()| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(data_dir.join(LOG_FILE))
    });
    match file {
        Ok(file) => builder.target(env_logger::Target::Pipe(Box::new(file))),
        Err(_) => builder.target(env_logger::Target::Pipe(Box::new(std::io::sink()))),
    };

    // Only fails if a logger is already installed
    let _ = builder.try_init();
}

/// Embedded lists plus an optional user list of extra guesses
fn load_dictionary(wordlist: Option<&Path>) -> Result<Dictionary> {
    let dictionary = Dictionary::embedded();
    let Some(path) = wordlist else {
        return Ok(dictionary);
    };

    let extra = load_from_file(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    log::info!("Loaded {} extra guesses from {}", extra.len(), path.display());
    Ok(dictionary.with_extra_guesses(extra))
}

fn open_store(data_dir: &Path, memory: bool) -> Result<Box<dyn Storage>> {
    if memory {
        return Ok(Box::new(MemoryStore::new()));
    }
    let store = FileStore::open(data_dir)
        .with_context(|| format!("Failed to open saved state in {}", data_dir.display()))?;
    Ok(Box::new(store))
}

fn run_play_command(
    dictionary: &Dictionary,
    store: Box<dyn Storage>,
    config: GameConfig,
) -> Result<()> {
    use daily_word::interactive::{App, run_tui};

    let session = PuzzleSession::open(dictionary, store, SystemClock, config)?;
    run_tui(App::new(session))
}
