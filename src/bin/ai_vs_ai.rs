//! Headless self-play: one engine plays both sides and prints the game

use std::io::Write;

use clap::Parser;
use gomoku::{AIEngine, Board, ConfigError, GameConfig, Stone, DEFAULT_BOARD_SIZE};
use log::info;

#[derive(Parser, Debug)]
#[command(author, version, about = "Let the AI play against itself", long_about = None)]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Search depth for both sides
    #[arg(long, default_value_t = 2)]
    depth: u32,

    /// Stop after this many plies
    #[arg(long, default_value_t = 200)]
    max_moves: usize,

    /// Board side length
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE)]
    size: usize,

    /// Seed for the random fallback
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<(), ConfigError> {
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
        vs_ai: true,
        ..GameConfig::default()
    };
    config.validate()?;

    let mut engine = args.seed.map_or_else(AIEngine::new, AIEngine::with_seed);
    let mut board = Board::new(config.board_size);
    let mut player = Stone::Black;

    info!(
        "self-play on {0}x{0}, depth {1}, at most {2} moves",
        config.board_size, config.ai_depth, args.max_moves
    );

    for ply in 1..=args.max_moves {
        let result = engine.choose_move_with_stats(&board, player, config.ai_depth);
        let Some(pos) = result.best_move else {
            println!("No move available: draw");
            return Ok(());
        };

        board.place_move(pos.x, pos.y, player);
        println!(
            "{ply:>3}. {player:?} -> ({}, {})  score {} [{:?}, {} nodes, {}ms]",
            pos.x, pos.y, result.score, result.search_type, result.nodes, result.time_ms
        );
        println!("{board}\n");

        if let Some(win) = board.check_win(None) {
            let line: Vec<String> = win.line.iter().map(|p| format!("({}, {})", p.x, p.y)).collect();
            println!("{:?} wins: {}", win.winner, line.join(" "));
            return Ok(());
        }

        player = player.opponent();
    }

    println!("Move limit of {} reached", args.max_moves);
    Ok(())
}
