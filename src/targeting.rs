// Next-shot selection from a computed heatmap.

use alloc::vec::Vec;
use log::trace;
use rand::{seq::IndexedRandom, Rng};

use crate::{board::BattleBoard, heatmap::Heatmap};

/// Choose the next cell to attack on `board` from `heatmap`.
///
/// Only `Empty` cells are candidates. The hottest cell wins; ties go to the
/// candidate whose eight surrounding cells carry the most heat, and any tie
/// left after that is broken at random. When no open cell has positive
/// heat, a random open cell is returned. `None` means nothing is left to
/// attack.
pub fn select_target<R: Rng + ?Sized>(
    board: &BattleBoard,
    heatmap: &Heatmap,
    rng: &mut R,
) -> Option<(i32, i32)> {
    let mut best = 0;
    let mut candidates: Vec<(i32, i32)> = Vec::new();
    for (x, y, cell) in board.grid().iter() {
        if !cell.is_empty() {
            continue;
        }
        let (x, y) = (x as i32, y as i32);
        let heat = heatmap.heat(x, y);
        if heat > best {
            best = heat;
            candidates.clear();
            candidates.push((x, y));
        } else if heat == best && heat > 0 {
            candidates.push((x, y));
        }
    }

    match candidates.len() {
        0 => {
            trace!("no positive heat, falling back to a random open cell");
            random_open_cell(board, rng)
        }
        1 => Some(candidates[0]),
        _ => {
            let scored: Vec<((i32, i32), i32)> = candidates
                .into_iter()
                .map(|(x, y)| ((x, y), heatmap.neighborhood_sum(x, y)))
                .collect();
            let top = scored.iter().map(|&(_, s)| s).max()?;
            let survivors: Vec<(i32, i32)> = scored
                .into_iter()
                .filter(|&(_, s)| s == top)
                .map(|(pos, _)| pos)
                .collect();
            trace!(
                "heat {} tie broken by neighborhood sum {} ({} left)",
                best,
                top,
                survivors.len()
            );
            survivors.choose(rng).copied()
        }
    }
}

/// Uniformly random `Empty` cell, or `None` when every cell was attacked.
pub fn random_open_cell<R: Rng + ?Sized>(board: &BattleBoard, rng: &mut R) -> Option<(i32, i32)> {
    let open: Vec<(i32, i32)> = board
        .grid()
        .iter()
        .filter(|&(_, _, cell)| cell.is_empty())
        .map(|(x, y, _)| (x as i32, y as i32))
        .collect();
    open.choose(rng).copied()
}

/// Convenience wrapper that recomputes `heatmap` from `board` and
/// immediately selects a target.
pub fn calc_heatmap_and_target<R: Rng + ?Sized>(
    board: &BattleBoard,
    heatmap: &mut Heatmap,
    rng: &mut R,
) -> Option<(i32, i32)> {
    heatmap.calculate(board);
    select_target(board, heatmap, rng)
}
