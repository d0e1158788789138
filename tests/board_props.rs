use broadside::{AttackResult, BattleBoard, BoardError, Cell, DEFAULT_COLS, DEFAULT_ROWS, FLEET};
use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

fn random_board(seed: u64) -> BattleBoard {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut board = BattleBoard::new(DEFAULT_COLS, DEFAULT_ROWS);
    board.seed_board(&mut rng);
    let guesses = rng.random_range(0..DEFAULT_COLS * DEFAULT_ROWS / 2);
    for _ in 0..guesses {
        let x = rng.random_range(0..DEFAULT_COLS as i32);
        let y = rng.random_range(0..DEFAULT_ROWS as i32);
        let _ = board.attack(x, y);
    }
    board
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn second_attack_is_rejected_and_changes_nothing(
        seed in any::<u64>(),
        x in 0..DEFAULT_COLS as i32,
        y in 0..DEFAULT_ROWS as i32,
    ) {
        let mut board = random_board(seed);
        let _ = board.attack(x, y);
        let after_first = board.clone();
        let err = board.attack(x, y).unwrap_err();
        prop_assert_eq!(err, BoardError::AlreadyAttacked { x: x as usize, y: y as usize });
        prop_assert_eq!(&board, &after_first);
    }

    #[test]
    fn each_ship_sinks_on_its_last_cell(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = BattleBoard::new(DEFAULT_COLS, DEFAULT_ROWS);
        prop_assert!(board.seed_board(&mut rng).is_empty());

        for kind in FLEET {
            let cells: Vec<(i32, i32)> = board
                .grid()
                .iter()
                .filter(|&(_, _, c)| c == Cell::Ship(kind))
                .map(|(x, y, _)| (x as i32, y as i32))
                .collect();
            prop_assert_eq!(cells.len(), kind.length());

            let others_before: Vec<Cell> = board
                .grid()
                .as_slice()
                .iter()
                .copied()
                .filter(|&c| matches!(c, Cell::Ship(k) if k != kind))
                .collect();

            let (last, rest) = cells.split_last().unwrap();
            for &(x, y) in rest {
                prop_assert_eq!(board.attack(x, y).unwrap(), AttackResult::Hit(kind));
                prop_assert!(!board.is_ship_sunk(kind));
            }
            prop_assert_eq!(board.attack(last.0, last.1).unwrap(), AttackResult::Sink(kind));
            for &(x, y) in &cells {
                prop_assert_eq!(board.cell(x, y), Cell::Sunk);
            }

            let others_after: Vec<Cell> = board
                .grid()
                .as_slice()
                .iter()
                .copied()
                .filter(|&c| matches!(c, Cell::Ship(k) if k != kind))
                .collect();
            prop_assert_eq!(others_before, others_after);
        }
        prop_assert!(board.all_ships_sunk());
    }

    #[test]
    fn board_reads_wrap(seed in any::<u64>(), x in -50i32..50, y in -50i32..50) {
        let board = random_board(seed);
        let (w, h) = (DEFAULT_COLS as i32, DEFAULT_ROWS as i32);
        prop_assert_eq!(board.cell(x, y), board.cell(x + w, y + h));
        prop_assert_eq!(board.is_cell_sunk(x, y), board.is_cell_sunk(x - w, y - h));
    }
}
