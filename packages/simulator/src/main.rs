//! Simulator CLI: plays complete all-AI games through the engine's public API
//! and writes one finished-game record per line.

mod metrics;
mod output;
mod simulator;
mod types;

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;
use engine::domain::derive_dealing_seed;
use engine::EngineConfig;
use metrics::build_game_metrics;
use output::OutputWriter;
use simulator::{GameResult, Simulator};
use tracing::{info, warn};
use types::{AiType, ModeArg};

#[derive(Parser)]
#[command(name = "simulator")]
#[command(about = "Headless AI-vs-AI games for the trick-taking engine")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Base seed; each game derives its own seed from it
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long, value_enum, default_value = "classic")]
    mode: ModeArg,

    /// Overrides the mode's target score
    #[arg(long)]
    target_score: Option<i32>,

    /// End the game after this many rounds
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Team 1 roster, e.g. "Alice/Charlie"; empty seats become bots
    #[arg(long, default_value = "")]
    team1: String,

    #[arg(long, default_value = "")]
    team2: String,

    /// Strategy for every seat
    #[arg(long, value_enum, default_value = "heuristic")]
    ai: AiType,

    /// Output directory for results
    #[arg(long, default_value = "./simulation-results")]
    output_dir: PathBuf,

    /// Gzip the JSONL output
    #[arg(long)]
    compress: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = EngineConfig {
        mode: args.mode.into(),
        target_score: args.target_score,
        max_rounds: args.max_rounds,
        ..EngineConfig::default()
    };
    config.validate()?;
    info!(games = args.games, mode = %config.mode, ai = args.ai.name(), "Starting simulator");

    let mut output_writer = OutputWriter::new(&args.output_dir, args.compress)?;
    let simulator = Simulator::new(config, args.ai);
    let base_seed = args.seed.unwrap_or_else(rand::random);

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let seed = derive_dealing_seed(base_seed, game_num);

        match simulator.simulate_game(seed, &args.team1, &args.team2) {
            Ok(result) => {
                let duration_ms = game_start.elapsed().as_secs_f64() * 1000.0;
                let metrics = build_game_metrics(game_num, args.ai.name(), &result, duration_ms);
                if let Err(e) = output_writer.write_game(&metrics) {
                    warn!("Failed to write metrics for game {}: {}", game_num, e);
                }
                if args.verbose {
                    info!("Game {} completed: scores={:?}", game_num, result.record.team_scores);
                }
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!("Game {} failed: {}", game_num, e);
            }
        }
    }

    let elapsed = start.elapsed();
    let (jsonl_path, csv_path) = output_writer.output_paths();
    let (jsonl_path, csv_path) = (jsonl_path.to_path_buf(), csv_path.to_path_buf());
    output_writer.finish()?;

    info!("Detailed results written to: {}", jsonl_path.display());
    info!("Summary CSV written to: {}", csv_path.display());
    print_summary(&results, errors, elapsed, args.games);
    Ok(())
}

fn print_summary(results: &[GameResult], errors: u32, elapsed: Duration, total: u32) {
    println!("\n=== Simulation Summary ===");
    println!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        println!("Errors: {errors}");
    }
    println!("Total time: {elapsed:?}");
    if results.is_empty() {
        return;
    }
    println!("Average time per game: {:?}", elapsed / results.len() as u32);

    let mut wins = [0u32; 2];
    let mut total_scores = [0i64; 2];
    let mut rounds = 0u64;
    for result in results {
        wins[result.record.winning_team_id as usize] += 1;
        for (team, &score) in result.record.team_scores.iter().enumerate() {
            total_scores[team] += i64::from(score);
        }
        rounds += u64::from(result.record.total_rounds);
    }

    println!("\n=== Results by Team ===");
    for team in 0..2 {
        let name = &results[0].record.team_names[team];
        let avg_score = total_scores[team] as f64 / results.len() as f64;
        let win_rate = f64::from(wins[team]) / results.len() as f64 * 100.0;
        println!(
            "{name}: avg={avg_score:.1}, wins={} ({win_rate:.1}%)",
            wins[team]
        );
    }
    println!("Average rounds per game: {:.1}", rounds as f64 / results.len() as f64);
}
