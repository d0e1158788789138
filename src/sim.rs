#![cfg(feature = "std")]

//! Simulation harness: solo games, batches of them, and two-fleet matches.
//!
//! Each game owns its own boards, heatmap and generator. Batches are spread
//! over blocking tokio tasks and the per-game summaries flow back to the
//! caller over an mpsc channel.

use std::time::{Duration, Instant};

use rand::{rngs::SmallRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::{
    board::BattleBoard,
    common::{AttackResult, BoardError},
    config::{DEFAULT_COLS, DEFAULT_ROWS, MOVE_CEILING_FACTOR},
    player::Player,
    player_ai::{HeatmapPlayer, RandomPlayer},
    ship::ShipKind,
};

/// Which automated player drives a simulated game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Heatmap,
    Random,
}

impl Strategy {
    /// A fresh player of this kind with an empty `cols × rows` view.
    pub fn player(self, cols: usize, rows: usize) -> StrategyPlayer {
        match self {
            Strategy::Heatmap => StrategyPlayer::Heatmap(HeatmapPlayer::new(cols, rows)),
            Strategy::Random => StrategyPlayer::Random(RandomPlayer::new(cols, rows)),
        }
    }
}

/// A player picked at runtime from a [`Strategy`].
#[derive(Debug, Clone)]
pub enum StrategyPlayer {
    Heatmap(HeatmapPlayer),
    Random(RandomPlayer),
}

impl Player for StrategyPlayer {
    fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(i32, i32)> {
        match self {
            StrategyPlayer::Heatmap(p) => p.select_target(rng),
            StrategyPlayer::Random(p) => p.select_target(rng),
        }
    }

    fn handle_attack_result(
        &mut self,
        target: (i32, i32),
        result: AttackResult,
        sunk_cells: &[(usize, usize)],
    ) {
        match self {
            StrategyPlayer::Heatmap(p) => p.handle_attack_result(target, result, sunk_cells),
            StrategyPlayer::Random(p) => p.handle_attack_result(target, result, sunk_cells),
        }
    }

    fn view(&self) -> &BattleBoard {
        match self {
            StrategyPlayer::Heatmap(p) => p.view(),
            StrategyPlayer::Random(p) => p.view(),
        }
    }
}

/// Parameters of a simulation batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    pub games: usize,
    pub workers: usize,
    pub seed: u64,
    pub cols: usize,
    pub rows: usize,
    pub strategy: Strategy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            games: 1000,
            workers: 4,
            seed: 0,
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            strategy: Strategy::Heatmap,
        }
    }
}

/// One attack taken during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shot {
    pub x: i32,
    pub y: i32,
    pub result: AttackResult,
}

/// Result of a single simulated game.
#[derive(Debug, Clone, Serialize)]
pub struct GameOutcome {
    /// Attacks made before the game ended.
    pub moves: usize,
    /// `false` when the move ceiling ran out or the player had no open cell
    /// left before every ship sank.
    pub completed: bool,
    /// Time the player spent choosing targets.
    pub think_time: Duration,
    /// Ships the seeding step could not place.
    pub skipped_ships: Vec<ShipKind>,
    pub shots: Vec<Shot>,
}

impl GameOutcome {
    fn summary(&self) -> GameSummary {
        GameSummary {
            moves: self.moves,
            completed: self.completed,
            think_time: self.think_time,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct GameSummary {
    moves: usize,
    completed: bool,
    think_time: Duration,
}

/// Aggregate statistics over a batch. Move statistics cover completed games
/// only; games that did not finish are counted as anomalies.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationReport {
    pub games: usize,
    pub completed: usize,
    pub anomalies: usize,
    pub average_moves: f64,
    pub best: usize,
    pub worst: usize,
    pub median: f64,
    pub mean_think_micros: f64,
    pub elapsed_ms: u128,
}

impl SimulationReport {
    fn from_summaries(summaries: &[GameSummary], elapsed: Duration) -> Self {
        let mut moves: Vec<usize> = summaries
            .iter()
            .filter(|s| s.completed)
            .map(|s| s.moves)
            .collect();
        moves.sort_unstable();

        let completed = moves.len();
        let average_moves = if completed == 0 {
            0.0
        } else {
            moves.iter().sum::<usize>() as f64 / completed as f64
        };
        let median = match completed {
            0 => 0.0,
            n if n % 2 == 0 => (moves[n / 2 - 1] + moves[n / 2]) as f64 / 2.0,
            n => moves[n / 2] as f64,
        };

        let total_moves: usize = summaries.iter().map(|s| s.moves).sum();
        let total_think: Duration = summaries.iter().map(|s| s.think_time).sum();
        let mean_think_micros = if total_moves == 0 {
            0.0
        } else {
            total_think.as_secs_f64() * 1_000_000.0 / total_moves as f64
        };

        SimulationReport {
            games: summaries.len(),
            completed,
            anomalies: summaries.len() - completed,
            average_moves,
            best: moves.first().copied().unwrap_or(0),
            worst: moves.last().copied().unwrap_or(0),
            median,
            mean_think_micros,
            elapsed_ms: elapsed.as_millis(),
        }
    }
}

/// Let `player` pick a cell, fire at `target`, and report the result back.
/// `None` means the player had no open cell left.
fn take_shot<P, R>(
    player: &mut P,
    target: &mut BattleBoard,
    rng: &mut R,
    think_time: &mut Duration,
) -> Result<Option<Shot>, BoardError>
where
    P: Player,
    R: Rng + ?Sized,
{
    let started = Instant::now();
    let choice = player.select_target(rng);
    *think_time += started.elapsed();
    let Some((x, y)) = choice else {
        return Ok(None);
    };

    let result = target.attack(x, y)?;
    let sunk_cells = match result {
        AttackResult::Sink(kind) => target.hit_cells_of(kind),
        _ => Vec::new(),
    };
    player.handle_attack_result((x, y), result, &sunk_cells);
    Ok(Some(Shot { x, y, result }))
}

/// Play `player` against `target` until every ship is sunk, the player runs
/// out of open cells, or `cols * rows * MOVE_CEILING_FACTOR` moves pass.
///
/// An attack error means the player picked a cell it had already fired at;
/// that is returned rather than retried.
pub fn play_game<P, R>(
    player: &mut P,
    target: &mut BattleBoard,
    rng: &mut R,
) -> Result<GameOutcome, BoardError>
where
    P: Player,
    R: Rng + ?Sized,
{
    play_game_with(player, target, rng, |_, _| {})
}

/// [`play_game`] that calls `on_shot` after every attack, once the player
/// has seen the result.
pub fn play_game_with<P, R, F>(
    player: &mut P,
    target: &mut BattleBoard,
    rng: &mut R,
    mut on_shot: F,
) -> Result<GameOutcome, BoardError>
where
    P: Player,
    R: Rng + ?Sized,
    F: FnMut(&P, &Shot),
{
    let ceiling = target.cols() * target.rows() * MOVE_CEILING_FACTOR;
    let mut outcome = GameOutcome {
        moves: 0,
        completed: false,
        think_time: Duration::ZERO,
        skipped_ships: Vec::new(),
        shots: Vec::new(),
    };

    while outcome.moves < ceiling {
        let Some(shot) = take_shot(player, target, rng, &mut outcome.think_time)? else {
            log::warn!("player ran out of open cells after {} moves", outcome.moves);
            break;
        };
        outcome.moves += 1;
        on_shot(player, &shot);
        outcome.shots.push(shot);

        if target.all_ships_sunk() {
            outcome.completed = true;
            return Ok(outcome);
        }
    }

    log::warn!("game ended without sinking the fleet after {} moves", outcome.moves);
    Ok(outcome)
}

/// Seed a fresh `cols × rows` board from `seed` and play one game on it.
pub fn play_seeded_game(
    strategy: Strategy,
    cols: usize,
    rows: usize,
    seed: u64,
) -> Result<GameOutcome, BoardError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut target = BattleBoard::try_new(cols, rows)?;
    let skipped = target.seed_board(&mut rng);

    let mut player = strategy.player(cols, rows);
    let mut outcome = play_game(&mut player, &mut target, &mut rng)?;
    outcome.skipped_ships = skipped;
    Ok(outcome)
}

/// One side of a two-fleet match. Side `A` fires first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    A,
    B,
}

impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }
}

/// An attack taken during a match, tagged with the side that fired it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchShot {
    pub side: Side,
    #[serde(flatten)]
    pub shot: Shot,
}

/// Result of a two-fleet match.
#[derive(Debug, Clone, Serialize)]
pub struct MatchOutcome {
    /// Side that sank the whole opposing fleet, or `None` when the match
    /// stopped on the move ceiling or a shooter ran out of open cells.
    pub winner: Option<Side>,
    pub moves_a: usize,
    pub moves_b: usize,
    /// Ships the seeding step could not place, per fleet.
    pub skipped_a: Vec<ShipKind>,
    pub skipped_b: Vec<ShipKind>,
    pub shots: Vec<MatchShot>,
}

/// Seed one fleet per side (sized like each player's view of the enemy)
/// and play a match between them. See [`play_match_on`].
pub fn play_match<A, B, R>(a: &mut A, b: &mut B, rng: &mut R) -> Result<MatchOutcome, BoardError>
where
    A: Player,
    B: Player,
    R: Rng + ?Sized,
{
    // A's fleet is the board B aims at, and the other way round.
    let mut fleet_a = BattleBoard::try_new(b.view().cols(), b.view().rows())?;
    let mut fleet_b = BattleBoard::try_new(a.view().cols(), a.view().rows())?;
    let skipped_a = fleet_a.seed_board(rng);
    let skipped_b = fleet_b.seed_board(rng);

    let mut outcome = play_match_on(a, b, &mut fleet_a, &mut fleet_b, rng)?;
    outcome.skipped_a = skipped_a;
    outcome.skipped_b = skipped_b;
    Ok(outcome)
}

/// Alternate fire between `a` (aiming at `fleet_b`) and `b` (aiming at
/// `fleet_a`). `a` shoots first. A hit or sink keeps the turn; a miss hands
/// it to the other side. The first side to sink the entire opposing fleet
/// wins.
///
/// Each side may fire at most `cols * rows * MOVE_CEILING_FACTOR` times at
/// the board it aims at. A repeated coordinate is returned as the attack
/// error.
pub fn play_match_on<A, B, R>(
    a: &mut A,
    b: &mut B,
    fleet_a: &mut BattleBoard,
    fleet_b: &mut BattleBoard,
    rng: &mut R,
) -> Result<MatchOutcome, BoardError>
where
    A: Player,
    B: Player,
    R: Rng + ?Sized,
{
    let ceiling_a = fleet_b.cols() * fleet_b.rows() * MOVE_CEILING_FACTOR;
    let ceiling_b = fleet_a.cols() * fleet_a.rows() * MOVE_CEILING_FACTOR;
    let mut outcome = MatchOutcome {
        winner: None,
        moves_a: 0,
        moves_b: 0,
        skipped_a: Vec::new(),
        skipped_b: Vec::new(),
        shots: Vec::new(),
    };
    let mut think_time = Duration::ZERO;
    let mut turn = Side::A;

    loop {
        let fired = match turn {
            Side::A if outcome.moves_a < ceiling_a => {
                take_shot(a, fleet_b, rng, &mut think_time)?
            }
            Side::B if outcome.moves_b < ceiling_b => {
                take_shot(b, fleet_a, rng, &mut think_time)?
            }
            _ => {
                log::warn!("side {:?} reached the move ceiling", turn);
                break;
            }
        };
        let Some(shot) = fired else {
            log::warn!("side {:?} ran out of open cells", turn);
            break;
        };

        let defender = match turn {
            Side::A => {
                outcome.moves_a += 1;
                &*fleet_b
            }
            Side::B => {
                outcome.moves_b += 1;
                &*fleet_a
            }
        };
        outcome.shots.push(MatchShot { side: turn, shot });

        if defender.all_ships_sunk() {
            log::debug!(
                "side {:?} won after {} + {} moves",
                turn,
                outcome.moves_a,
                outcome.moves_b
            );
            outcome.winner = Some(turn);
            break;
        }
        if !shot.result.is_hit() {
            turn = turn.other();
        }
    }

    Ok(outcome)
}

/// Seed both fleets from `seed` and play `a` against `b` on `cols × rows`
/// boards.
pub fn play_seeded_match(
    a: Strategy,
    b: Strategy,
    cols: usize,
    rows: usize,
    seed: u64,
) -> Result<MatchOutcome, BoardError> {
    BattleBoard::try_new(cols, rows)?;
    let mut rng = SmallRng::seed_from_u64(seed);
    play_match(&mut a.player(cols, rows), &mut b.player(cols, rows), &mut rng)
}

/// Run `config.games` independent games across `config.workers` blocking
/// tasks. Game `i` is seeded with `config.seed + i`, so the move statistics
/// of a report are reproducible.
pub async fn run_simulations(config: &SimConfig) -> anyhow::Result<SimulationReport> {
    anyhow::ensure!(config.games > 0, "at least one game is required");
    BattleBoard::try_new(config.cols, config.rows)?;

    let workers = config.workers.clamp(1, config.games);
    let (tx, mut rx) = mpsc::unbounded_channel::<Result<GameSummary, BoardError>>();
    let started = Instant::now();

    let mut handles = Vec::with_capacity(workers);
    for worker in 0..workers {
        let tx = tx.clone();
        let cfg = config.clone();
        handles.push(tokio::task::spawn_blocking(move || {
            for game in (worker..cfg.games).step_by(workers) {
                let seed = cfg.seed.wrapping_add(game as u64);
                let summary = play_seeded_game(cfg.strategy, cfg.cols, cfg.rows, seed)
                    .map(|o| o.summary());
                if tx.send(summary).is_err() {
                    break;
                }
            }
        }));
    }
    drop(tx);

    let mut summaries = Vec::with_capacity(config.games);
    while let Some(summary) = rx.recv().await {
        summaries.push(summary?);
    }
    for handle in handles {
        handle.await?;
    }

    let report = SimulationReport::from_summaries(&summaries, started.elapsed());
    log::info!(
        "{} games ({} anomalies) in {} ms, average {:.2} moves",
        report.games,
        report.anomalies,
        report.elapsed_ms,
        report.average_moves
    );
    Ok(report)
}
