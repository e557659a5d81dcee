//! Perft / divide runner for validating move generation.
//!
//! Usage:
//! `cargo run --release --bin perft_runner`
//! `cargo run --release --bin perft_runner -- --depth 5 --fen "r3k2r/8/8/8/8/8/8/R3K2R w KQkq -" --divide`
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

use std::time::Instant;

use chessbot::game_state::chess_rules::STARTING_POSITION_FEN;
use chessbot::game_state::game_state::GameState;
use chessbot::move_generation::perft::{perft_divide, perft_legal};
use chessbot::utils::long_algebraic::move_to_long_algebraic;
use chessbot::utils::render_game_state::render_game_state;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn arg_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|idx| args.get(idx + 1))
        .cloned()
}

fn parse_arg_u8(args: &[String], flag: &str, default: u8) -> u8 {
    arg_value(args, flag)
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(default)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let depth = parse_arg_u8(&args, "--depth", 3);
    let fen = arg_value(&args, "--fen").unwrap_or_else(|| STARTING_POSITION_FEN.to_owned());
    let divide = args.iter().any(|arg| arg == "--divide");

    let mut game = GameState::from_fen(&fen)?;
    println!("{}", render_game_state(&game));

    let started = Instant::now();
    let nodes = if divide {
        let mut total = 0u64;
        for (mv, count) in perft_divide(&mut game, depth)? {
            println!("{}: {count}", move_to_long_algebraic(mv)?);
            total += count;
        }
        total
    } else {
        perft_legal(&mut game, depth)?
    };
    let elapsed = started.elapsed();

    let nps = (nodes as f64 / elapsed.as_secs_f64().max(1e-9)) as u64;
    info!(depth, nodes, elapsed_ms = elapsed.as_millis() as u64, nps, "perft complete");
    println!("nodes: {nodes}");
    Ok(())
}
