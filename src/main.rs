//! Thick-Goban driver.
//!
//! ## Usage
//!
//! - `thick-goban` - Show a demo playout on the default board
//! - `thick-goban playout --size 9 --count 100` - Run random playouts and
//!   summarise the scores
//! - `thick-goban demo --size 13 --seed 4` - Show one finished playout
//!
//! Set `RUST_LOG=debug` to see captures and ko locks.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use log::info;

use thick_goban::constants::{DEFAULT_KOMI, DEFAULT_SIZE, MIN_SIZE};
use thick_goban::neighbors::NeighborCache;
use thick_goban::playout::UniformRandom;
use thick_goban::position::Position;

/// Thick-Goban: Go positions with lazily discovered liberties
#[derive(Parser)]
#[command(name = "thick-goban")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run random playouts from the empty board and summarise the scores
    Playout {
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: usize,
        #[arg(long, default_value_t = DEFAULT_KOMI, allow_negative_numbers = true)]
        komi: f64,
        #[arg(long, default_value_t = 100)]
        count: usize,
        /// Seed for reproducible playouts
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play out one game and print the final board
    Demo {
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: usize,
        #[arg(long)]
        seed: Option<u64>,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Playout {
            size,
            komi,
            count,
            seed,
        }) => run_playouts(size, komi, count, seed),
        Some(Commands::Demo { size, seed }) => run_demo(size, seed),
        None => run_demo(DEFAULT_SIZE, None),
    }
}

fn policy(seed: Option<u64>) -> UniformRandom {
    seed.map_or_else(UniformRandom::new, UniformRandom::seeded)
}

fn check_size(size: usize) -> Result<()> {
    if size < MIN_SIZE {
        bail!("--size must be at least {MIN_SIZE}");
    }
    Ok(())
}

fn run_playouts(size: usize, komi: f64, count: usize, seed: Option<u64>) -> Result<()> {
    check_size(size)?;
    if count == 0 {
        bail!("--count must be >= 1");
    }

    let mut cache = NeighborCache::new();
    let start = Position::with_table(cache.get(size), komi);
    let mut policy = policy(seed);

    let (mut black_wins, mut total_moves, mut total_score) = (0usize, 0usize, 0.0);
    for i in 0..count {
        let (end, moves) = start.random_playout_with(&mut policy);
        let score = end.score();
        if score > 0.0 {
            black_wins += 1;
        }
        total_moves += moves.len();
        total_score += score;
        info!("playout {i}: {} moves, score {score:+.1}", moves.len());
    }

    println!(
        "{count} playouts on {size}x{size}: Black wins {:.1}%, mean score {:+.2}, mean length {:.1}",
        100.0 * black_wins as f64 / count as f64,
        total_score / count as f64,
        total_moves as f64 / count as f64,
    );
    Ok(())
}

fn run_demo(size: usize, seed: Option<u64>) -> Result<()> {
    check_size(size)?;
    println!("Thick-Goban: random playout on {size}x{size}\n");

    let start = Position::new(size);
    let (end, moves) = start.random_playout_with(&mut policy(seed));
    println!("{}", end.board());
    println!(
        "{} moves, terminal: {}, score {:+.1}",
        moves.len(),
        end.is_terminal(),
        end.score()
    );
    Ok(())
}
