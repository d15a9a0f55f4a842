mod collision;
mod config;
mod error;
mod game;
mod input;
mod logging;
mod player;
mod render;
mod track;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use clap::Parser;
use log::{LevelFilter, info, warn};
use macroquad::prelude::*;

// --- Command Line Arguments ---
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for obstacle placement; a random seed is chosen and logged if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Debug filter to specify log topics (e.g., "game,track,input")
    /// Available topics: game, track, input
    #[arg(long)]
    debug_filter: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn window_conf() -> Conf {
    Conf {
        window_title: WINDOW_TITLE.to_owned(),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    let args = Args::parse();

    let (log_level, level_error) = match logging::parse_log_level(&args.log_level) {
        Ok(level) => (level, None),
        Err(e) => (LevelFilter::Info, Some(e)),
    };

    if let Err(e) = logging::init_logger(log_level, args.debug_filter) {
        eprintln!("Warning: {}", e);
    }
    if let Some(e) = level_error {
        warn!("{}, falling back to info", e);
    }

    info!("Initializing racing game...");

    let seed = args.seed.unwrap_or_else(::rand::random);
    let generator = track::ObstacleGenerator::new(seed);
    let mut game = game::Game::new(generator);

    let mut renderer = render::Renderer::new();
    info!("Renderer initialized.");

    game.run(&mut renderer).await;
}
