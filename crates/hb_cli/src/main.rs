//! Hardball simulation CLI
//!
//! Runs seeded game batches against neutral or tiered personnel and prints
//! aggregate rates; optionally dumps the per-pitch decision log as JSON
//! lines for calibration work.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use hb_core::calibration::StatSnapshot;
use hb_core::engine::debug_log::PitchLogCollector;
use hb_core::engine::game::{neutral_team, run_games, GameSim};
use hb_core::SimConfig;

#[derive(Parser)]
#[command(name = "hb_cli")]
#[command(about = "Deterministic baseball at-bat/game simulation runner", long_about = None)]
struct Cli {
    /// Path to a JSON or YAML SimConfig; defaults to the built-in realistic config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a batch of games and print aggregate rates
    Simulate {
        /// Number of games
        #[arg(long, default_value_t = 100)]
        games: u64,

        /// Base seed; per-game seeds derive from (seed, game_index)
        #[arg(long, default_value_t = 1)]
        seed: u64,

        /// Worker threads (results are identical for any value)
        #[arg(long, default_value_t = 4)]
        threads: usize,

        /// Write per-game results as JSON to this path
        #[arg(long)]
        out: Option<PathBuf>,

        /// Write the per-pitch decision log (JSON lines) to this path.
        /// Forces a serial run so logs merge in game order.
        #[arg(long)]
        debug_log: Option<PathBuf>,
    },

    /// Validate a configuration file and exit
    CheckConfig {
        /// File to validate
        path: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt().init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SimConfig::load_from_path(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SimConfig::realistic(),
    };

    match cli.command {
        Commands::Simulate { games, seed, threads, out, debug_log } => {
            simulate(&config, games, seed, threads, out, debug_log)
        }
        Commands::CheckConfig { path } => {
            SimConfig::load_from_path(&path)
                .with_context(|| format!("validating {}", path.display()))?;
            println!("{} is valid", path.display());
            Ok(())
        }
    }
}

fn simulate(
    config: &SimConfig,
    games: u64,
    seed: u64,
    threads: usize,
    out: Option<PathBuf>,
    debug_log: Option<PathBuf>,
) -> Result<()> {
    let home = neutral_team(config, "Home");
    let away = neutral_team(config, "Away");

    let results = if let Some(log_path) = &debug_log {
        // Serial run: collect and merge pitch logs in game order.
        let mut merged = PitchLogCollector::new(true);
        let mut results = Vec::with_capacity(games as usize);
        for game_index in 0..games {
            let mut log = PitchLogCollector::new(true);
            let result = GameSim::new(config, &home, &away, seed, game_index)?
                .simulate(&mut log)?;
            merged.merge(log);
            results.push(result);
        }
        std::fs::write(log_path, merged.to_json_lines())
            .with_context(|| format!("writing pitch log to {}", log_path.display()))?;
        println!("wrote {} pitch log entries to {}", merged.len(), log_path.display());
        results
    } else {
        run_games(config, &home, &away, seed, games, threads)?
    };

    let mut snapshot = StatSnapshot::default();
    for r in &results {
        snapshot.record_game(r);
    }

    println!("games:  {}", results.len());
    println!("PA:     {}", snapshot.plate_appearances);
    println!("K%:     {:.1}", snapshot.k_pct() * 100.0);
    println!("BB%:    {:.1}", snapshot.bb_pct() * 100.0);
    println!("HR%:    {:.1}", snapshot.hr_pct() * 100.0);
    println!("hits:   {}", snapshot.hits());
    println!("P/PA:   {:.2}", snapshot.pitches_per_pa());

    if let Some(out_path) = out {
        let json = serde_json::to_string_pretty(&results)?;
        std::fs::write(&out_path, json)
            .with_context(|| format!("writing results to {}", out_path.display()))?;
        println!("wrote {} game results to {}", results.len(), out_path.display());
    }
    Ok(())
}
