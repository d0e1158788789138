#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod grid;
mod heatmap;
#[cfg(feature = "std")]
pub mod logging;
mod player;
mod player_ai;
mod ship;
#[cfg(feature = "std")]
pub mod sim;
mod targeting;
pub mod prelude;
#[cfg(feature = "std")]
pub mod ui;

pub use board::*;
pub use common::*;
pub use config::*;
pub use grid::*;
pub use heatmap::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, init_logging_with};
pub use player::*;
pub use player_ai::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use sim::{
    play_game, play_game_with, play_match, play_match_on, play_seeded_game, play_seeded_match,
    run_simulations, GameOutcome, MatchOutcome, MatchShot, Shot, Side, SimConfig,
    SimulationReport, Strategy, StrategyPlayer,
};
pub use targeting::*;
#[cfg(feature = "std")]
pub use ui::{print_board, print_heatmap};
