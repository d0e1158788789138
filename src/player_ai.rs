use rand::Rng;

use crate::{
    board::BattleBoard,
    common::AttackResult,
    heatmap::Heatmap,
    player::Player,
    targeting::{calc_heatmap_and_target, random_open_cell},
};

/// Player that recomputes the heatmap every turn and fires at its hottest
/// open cell.
#[derive(Debug, Clone)]
pub struct HeatmapPlayer {
    view: BattleBoard,
    heatmap: Heatmap,
}

impl HeatmapPlayer {
    pub fn new(cols: usize, rows: usize) -> Self {
        let view = BattleBoard::new(cols, rows);
        let heatmap = Heatmap::for_board(&view);
        Self { view, heatmap }
    }

    /// Heatmap as of the last call to `select_target`.
    pub fn heatmap(&self) -> &Heatmap {
        &self.heatmap
    }
}

impl Player for HeatmapPlayer {
    fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(i32, i32)> {
        calc_heatmap_and_target(&self.view, &mut self.heatmap, rng)
    }

    fn handle_attack_result(
        &mut self,
        target: (i32, i32),
        result: AttackResult,
        sunk_cells: &[(usize, usize)],
    ) {
        self.view.observe(target, result, sunk_cells);
    }

    fn view(&self) -> &BattleBoard {
        &self.view
    }
}

/// Baseline player that fires at a uniformly random cell it has not tried
/// yet.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    view: BattleBoard,
}

impl RandomPlayer {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            view: BattleBoard::new(cols, rows),
        }
    }
}

impl Player for RandomPlayer {
    fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(i32, i32)> {
        random_open_cell(&self.view, rng)
    }

    fn handle_attack_result(
        &mut self,
        target: (i32, i32),
        result: AttackResult,
        sunk_cells: &[(usize, usize)],
    ) {
        self.view.observe(target, result, sunk_cells);
    }

    fn view(&self) -> &BattleBoard {
        &self.view
    }
}
