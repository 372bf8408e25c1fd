use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;
use simplelog::LevelFilter;
use snake_game::game::GameConfig;
use snake_game::logging;
use snake_game::modes::HumanMode;
use snake_game::storage::{JsonFileStore, MemoryStore};

#[derive(Parser)]
#[command(name = "snake_game")]
#[command(version, about = "Snake in the terminal")]
struct Cli {
    /// File the high score is kept in
    #[arg(long, default_value = "snake_highscore.json")]
    store: PathBuf,

    /// Keep the high score in memory only
    #[arg(long)]
    no_persist: bool,

    /// Where log output goes
    #[arg(long, default_value = "snake.log")]
    log_file: PathBuf,

    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_file, cli.log_level.into())?;
    info!("starting snake_game {}", env!("CARGO_PKG_VERSION"));

    let config = GameConfig::default();

    if cli.no_persist {
        info!("high score persistence disabled");
        let mut mode = HumanMode::new(config, MemoryStore::new());
        mode.run().await
    } else {
        let store = JsonFileStore::new(cli.store);
        info!("high score store: {:?}", store.path());
        let mut mode = HumanMode::new(config, store);
        mode.run().await
    }
}
