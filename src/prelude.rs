//! Commonly used types and utilities for ease of import.

pub use crate::{
    calc_heatmap_and_target, select_target, AttackResult, BattleBoard, BoardError, Cell, Grid,
    Heatmap, HeatmapPlayer, Orientation, Player, RandomPlayer, ShipKind,
};

#[cfg(feature = "std")]
pub use crate::{
    init_logging, play_game, play_match, print_board, print_heatmap, run_simulations, Side,
    SimConfig, Strategy,
};
