mod config;
mod engine;
mod game;
mod grid;
mod input;
mod render;
mod snake;
mod term;
mod ticker;

use std::fs::File;
use std::path::PathBuf;
use std::sync::mpsc;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use simplelog::{Config, LevelFilter, WriteLogger};

use config::GameConfig;

pub type TermInt = u16;
pub type Coords = (u16, u16);
/// Value stored in a board cell
pub type Cell = i32;

#[derive(Parser)]
#[command(name = "kigyo")]
#[command(version, about = "Snake in the terminal")]
struct Cli {
    /// Board height, borders included
    #[arg(long, default_value_t = 20)]
    height: usize,

    /// Board width, borders included
    #[arg(long, default_value_t = 50)]
    width: usize,

    /// Length of the snake at the start
    #[arg(long, default_value_t = 5)]
    initial_length: usize,

    /// Milliseconds between ticks at the start
    #[arg(long, default_value_t = 200.0)]
    interval_ms: f64,

    /// The interval is multiplied by this every time food is eaten
    #[arg(long, default_value_t = 0.9)]
    speed_factor: f64,

    /// The interval never drops below this many milliseconds
    #[arg(long, default_value_t = 1.0)]
    min_interval_ms: f64,

    /// Write a log to this file; nothing is logged otherwise
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level used with --log-file
    #[arg(long, default_value = "info")]
    log_level: LevelFilter,
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            height: self.height,
            width: self.width,
            initial_length: self.initial_length,
            initial_interval_ms: self.interval_ms,
            speed_factor: self.speed_factor,
            min_interval_ms: self.min_interval_ms,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        let file = File::create(path)
            .with_context(|| format!("Failed to create log file {}", path.display()))?;
        WriteLogger::init(cli.log_level, Config::default(), file)
            .context("Failed to initialize logger")?;
    }

    let config = cli.game_config();
    config.validate().context("Invalid game configuration")?;
    info!("Starting with {:?}", config);

    let (tx, rx) = mpsc::channel();
    let mut game = game::SnakeGame::new(config, rx)?;
    game.initialize()?;
    input::spawn_listener(tx);

    // The terminal is restored whatever the outcome
    let result = game.run();
    game.restore()?;

    result
}
