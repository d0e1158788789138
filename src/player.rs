use rand::Rng;

use crate::{board::BattleBoard, common::AttackResult};

/// Interface implemented by automated shooters.
///
/// A player keeps its own observer view of the enemy board; it never sees
/// the ground truth, only the results of its own attacks.
pub trait Player {
    /// Choose the next coordinate to attack, or `None` when the view has no
    /// open cell left.
    fn select_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(i32, i32)>;

    /// Inform the player of the result of its last attack. `sunk_cells`
    /// lists every cell of the sunk ship when `result` is a sink and is
    /// empty otherwise.
    fn handle_attack_result(
        &mut self,
        target: (i32, i32),
        result: AttackResult,
        sunk_cells: &[(usize, usize)],
    );

    /// The player's current view of the enemy board.
    fn view(&self) -> &BattleBoard;
}
