//! Connect-five GUI
//!
//! A graphical interface for playing against the AI or another player.

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use gomoku::config::{DEFAULT_AI_DEPTH, DEFAULT_SAVE_PATH};
use gomoku::ui::GomokuApp;
use gomoku::{GameConfig, Stone, DEFAULT_BOARD_SIZE};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Board side length
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Search depth for AI moves (1-8)
    #[arg(long, default_value_t = DEFAULT_AI_DEPTH)]
    depth: u32,

    /// Start with the AI enabled
    #[arg(long)]
    ai: bool,

    /// Let the AI play black instead of white
    #[arg(long)]
    ai_black: bool,

    /// File used by save (S) and load (L)
    #[arg(long, default_value = DEFAULT_SAVE_PATH)]
    save_path: PathBuf,
}

fn main() -> Result<(), eframe::Error> {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "info" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .init();

    let config = GameConfig {
        board_size: args.size,
        ai_depth: args.depth,
        vs_ai: args.ai,
        ai_player: if args.ai_black { Stone::Black } else { Stone::White },
        save_path: args.save_path,
    };
    if let Err(e) = config.validate() {
        log::error!("Invalid settings: {e}");
        std::process::exit(2);
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Connect Five"),
        ..Default::default()
    };

    eframe::run_native(
        "Connect Five",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, &config)))),
    )
}
