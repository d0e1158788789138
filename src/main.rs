#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use broadside::{
    init_logging, play_game_with, play_seeded_match, print_board, print_heatmap, run_simulations,
    BattleBoard, HeatmapPlayer, Player, Side, SimConfig, Strategy, DEFAULT_COLS, DEFAULT_ROWS,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play many solo games in parallel and report move statistics.
    Simulate {
        #[arg(long, default_value_t = 1000)]
        games: usize,
        #[arg(long, default_value_t = 4)]
        workers: usize,
        #[arg(long, help = "Base seed; game i uses seed + i")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_COLS)]
        cols: usize,
        #[arg(long, default_value_t = DEFAULT_ROWS)]
        rows: usize,
        #[arg(long, value_enum, default_value_t = Strategy::Heatmap)]
        strategy: Strategy,
        #[arg(long, help = "Print the report as JSON")]
        json: bool,
    },
    /// Watch the heatmap player clear a single randomly seeded board.
    Play {
        #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_COLS)]
        cols: usize,
        #[arg(long, default_value_t = DEFAULT_ROWS)]
        rows: usize,
        #[arg(long, help = "Print the heatmap behind every shot")]
        verbose: bool,
    },
    /// Pit two automated players against each other, one fleet each.
    Versus {
        #[arg(long, value_enum, default_value_t = Strategy::Heatmap, help = "Strategy of side A (fires first)")]
        a: Strategy,
        #[arg(long, value_enum, default_value_t = Strategy::Random, help = "Strategy of side B")]
        b: Strategy,
        #[arg(long, help = "Fix RNG seed for reproducible matches")]
        seed: Option<u64>,
        #[arg(long, default_value_t = DEFAULT_COLS)]
        cols: usize,
        #[arg(long, default_value_t = DEFAULT_ROWS)]
        rows: usize,
        #[arg(long, help = "Print the match outcome as JSON")]
        json: bool,
    },
}

#[cfg(feature = "std")]
fn pick_seed(seed: Option<u64>) -> u64 {
    use rand::Rng;
    seed.unwrap_or_else(|| rand::rng().random())
}

#[cfg(feature = "std")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate {
            games,
            workers,
            seed,
            cols,
            rows,
            strategy,
            json,
        } => {
            let config = SimConfig {
                games,
                workers,
                seed: pick_seed(seed),
                cols,
                rows,
                strategy,
            };
            let report = run_simulations(&config).await?;
            if json {
                println!("{}", serde_json::to_string(&report)?);
            } else {
                println!("Simulation finished for {} games in {} ms", report.games, report.elapsed_ms);
                println!("Base seed: {}", config.seed);
                println!("Completed: {} (anomalies: {})", report.completed, report.anomalies);
                println!("Average score: {:.2}", report.average_moves);
                println!("Best score: {}", report.best);
                println!("Worst score: {}", report.worst);
                println!("Median score: {:.2}", report.median);
                println!("Average think time: {:.1} us", report.mean_think_micros);
            }
        }
        Commands::Play {
            seed,
            cols,
            rows,
            verbose,
        } => {
            let seed = pick_seed(seed);
            println!("Using seed: {} (rerun with --seed to reproduce)", seed);
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut target = BattleBoard::try_new(cols, rows)?;
            for kind in target.seed_board(&mut rng) {
                println!("Warning: {} could not be placed", kind);
            }
            print_board("Fleet", &target);

            let mut player = HeatmapPlayer::new(cols, rows);
            let mut moves = 0;
            let outcome = play_game_with(&mut player, &mut target, &mut rng, |player, shot| {
                if verbose {
                    print_heatmap(player.heatmap());
                }
                moves += 1;
                println!("Move {:3}: ({}, {}) -> {:?}", moves, shot.x, shot.y, shot.result);
            })?;
            print_board("Final view", player.view());
            if outcome.completed {
                println!("\nAll ships sunk in {} moves.", outcome.moves);
            } else {
                println!("\nGame stopped after {} moves with ships still afloat.", outcome.moves);
            }
        }
        Commands::Versus {
            a,
            b,
            seed,
            cols,
            rows,
            json,
        } => {
            let seed = pick_seed(seed);
            let outcome = play_seeded_match(a, b, cols, rows, seed)?;
            if json {
                println!("{}", serde_json::to_string(&outcome)?);
                return Ok(());
            }
            println!("Using seed: {} (rerun with --seed to reproduce)", seed);
            for shot in &outcome.shots {
                println!(
                    "{:?}: ({}, {}) -> {:?}",
                    shot.side, shot.shot.x, shot.shot.y, shot.shot.result
                );
            }
            let name = |side: Side| match side {
                Side::A => format!("A ({:?})", a),
                Side::B => format!("B ({:?})", b),
            };
            match outcome.winner {
                Some(side) => println!(
                    "\n{} wins. Moves: A {}, B {}.",
                    name(side),
                    outcome.moves_a,
                    outcome.moves_b
                ),
                None => println!(
                    "\nNo winner. Moves: A {}, B {}.",
                    outcome.moves_a, outcome.moves_b
                ),
            }
        }
    }
    Ok(())
}
