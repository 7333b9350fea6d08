use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use hearts_core::game::store::{FileStore, GameStore, MemoryStore};
use hearts_sim::config::SimConfig;
use hearts_sim::logging::init_logging;
use hearts_sim::session::GameSession;
use hearts_sim::table_from_config;

/// Headless Hearts table: plays complete games between configured seats.
#[derive(Debug, Parser)]
#[command(
    name = "hearts-sim",
    author,
    version,
    about = "Deterministic four-player Hearts simulator"
)]
struct Cli {
    /// Path to the YAML configuration file.
    #[arg(short, long, value_name = "FILE", default_value = "sim/sim.yaml")]
    config: PathBuf,

    /// Override the run identifier (substitutes {run_id} templates).
    #[arg(long, value_name = "RUN_ID")]
    run_id: Option<String>,

    /// Override the number of games to play.
    #[arg(long, value_name = "GAMES")]
    games: Option<usize>,

    /// Override the RNG seed; game N uses seed + N.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Continue the saved game (if any) before starting fresh ones.
    #[arg(long)]
    resume: bool,

    /// Exit after validating the configuration (no game is played).
    #[arg(long)]
    validate_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut config = SimConfig::from_path(&cli.config)?;

    if let Some(run_id) = cli.run_id {
        config.run_id = run_id;
    }

    if let Some(games) = cli.games {
        config.games = games;
    }

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }

    config.validate()?;

    let run_id = config.run_id.clone();
    let games = config.games;
    println!(
        "Loaded configuration '{run_id}' ({games} game{})",
        if games == 1 { "" } else { "s" }
    );

    if cli.validate_only {
        println!("Validation-only mode: no games played.");
        return Ok(());
    }

    let log_path = config.resolved_log_path();
    let _logging_guard = init_logging(&config.logging, log_path.as_deref())?;
    let (roster, difficulties) = table_from_config(&config)?;
    let save_path = config.resolved_save_path();

    for game in 0..games {
        let mut store: Box<dyn GameStore> = match save_path.as_ref() {
            Some(path) => Box::new(FileStore::new(path)),
            None => Box::new(MemoryStore::new()),
        };
        if !(cli.resume && game == 0) {
            store.clear();
        }

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(game as u64)),
            None => StdRng::from_entropy(),
        };

        let mut session = GameSession::start(roster.clone(), difficulties, store, rng)
            .with_autoplay_humans(true);
        if session.resumed() {
            println!("Game {}: resuming saved hand {}", game + 1, session.state().hand_number);
        }
        let summary = session.run_to_completion()?;

        let totals = summary
            .names
            .iter()
            .zip(summary.totals.iter())
            .map(|(name, total)| format!("{name}={total}"))
            .collect::<Vec<_>>()
            .join(", ");
        println!(
            "Game {}: {} wins after {} hands ({totals})",
            game + 1,
            summary.winner_name,
            summary.hands
        );
    }

    if let Some(path) = save_path.as_ref() {
        println!("Save file: {}", path.display());
    }

    Ok(())
}
