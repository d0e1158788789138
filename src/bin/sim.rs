use broadside::{play_seeded_game, Strategy, DEFAULT_COLS, DEFAULT_ROWS};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [heatmap|random]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let strategy = match args.get(2).map(String::as_str) {
        None | Some("heatmap") => Strategy::Heatmap,
        Some("random") => Strategy::Random,
        Some(other) => anyhow::bail!("unknown strategy {}", other),
    };

    let outcome = play_seeded_game(strategy, DEFAULT_COLS, DEFAULT_ROWS, seed)?;
    let shots: Vec<[i32; 2]> = outcome.shots.iter().map(|s| [s.x, s.y]).collect();

    let result = json!({
        "seed": seed,
        "strategy": strategy,
        "moves": outcome.moves,
        "completed": outcome.completed,
        "shots": shots,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
