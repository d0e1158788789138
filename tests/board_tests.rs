use broadside::{
    fleet_cells, ship_length, AttackResult, BattleBoard, BoardError, Cell, Orientation, ShipKind,
    FLEET, TOTAL_SHIP_CELLS,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn count(board: &BattleBoard, cell: Cell) -> usize {
    board.grid().as_slice().iter().filter(|&&c| c == cell).count()
}

#[test]
fn test_attack_hit() {
    let mut board = BattleBoard::new(10, 10);
    board
        .place_ship(0, 0, ShipKind::Destroyer, Orientation::Horizontal)
        .unwrap();

    let res = board.attack(0, 0).unwrap();
    assert_eq!(res, AttackResult::Hit(ShipKind::Destroyer));
    assert!(res.is_hit());
    assert!(!res.is_sunk());
    assert_eq!(board.cell(0, 0), Cell::Hit);
    assert_eq!(board.hit_locations().get(&(0, 0)), Some(&ShipKind::Destroyer));
}

#[test]
fn test_attack_miss() {
    let mut board = BattleBoard::new(10, 10);
    let res = board.attack(0, 0).unwrap();
    assert_eq!(res, AttackResult::Miss);
    assert_eq!(res.kind(), None);
    assert_eq!(board.cell(0, 0), Cell::Miss);
}

#[test]
fn test_attack_twice_is_rejected_without_mutation() {
    let mut board = BattleBoard::new(10, 10);
    board
        .place_ship(3, 3, ShipKind::Cruiser, Orientation::Vertical)
        .unwrap();
    board.attack(0, 0).unwrap();
    board.attack(3, 3).unwrap();
    let before = board.clone();

    assert_eq!(
        board.attack(0, 0).unwrap_err(),
        BoardError::AlreadyAttacked { x: 0, y: 0 }
    );
    assert_eq!(
        board.attack(3, 3).unwrap_err(),
        BoardError::AlreadyAttacked { x: 3, y: 3 }
    );
    assert_eq!(board, before);
}

#[test]
fn test_attack_sinks_destroyer() {
    let mut board = BattleBoard::new(10, 10);
    board
        .place_ship(0, 0, ShipKind::Destroyer, Orientation::Horizontal)
        .unwrap();

    board.attack(0, 0).unwrap();
    let res = board.attack(1, 0).unwrap();
    assert_eq!(res, AttackResult::Sink(ShipKind::Destroyer));
    assert!(board.is_ship_sunk(ShipKind::Destroyer));
    assert_eq!(board.cell(0, 0), Cell::Sunk);
    assert_eq!(board.cell(1, 0), Cell::Sunk);
    assert!(board.is_cell_sunk(0, 0));
    assert!(board.is_cell_sunk(1, 0));
    assert!(!board.all_ships_sunk());

    // sunk cells cannot be attacked again either
    assert_eq!(
        board.attack(1, 0).unwrap_err(),
        BoardError::AlreadyAttacked { x: 1, y: 0 }
    );
}

#[test]
fn test_sinking_takes_exactly_length_hits() {
    let mut board = BattleBoard::new(10, 10);
    board
        .place_ship(0, 0, ShipKind::Carrier, Orientation::Horizontal)
        .unwrap();
    board
        .place_ship(0, 1, ShipKind::Cruiser, Orientation::Horizontal)
        .unwrap();

    for x in 0..4 {
        assert_eq!(
            board.attack(x, 0).unwrap(),
            AttackResult::Hit(ShipKind::Carrier)
        );
        assert!(!board.is_ship_sunk(ShipKind::Carrier));
    }
    assert_eq!(
        board.attack(4, 0).unwrap(),
        AttackResult::Sink(ShipKind::Carrier)
    );
    for x in 0..5 {
        assert_eq!(board.cell(x, 0), Cell::Sunk);
    }
    for x in 0..3 {
        assert_eq!(board.cell(x, 1), Cell::Ship(ShipKind::Cruiser));
    }
    assert_eq!(board.hit_cells_of(ShipKind::Carrier).len(), 5);
    assert!(board.hit_cells_of(ShipKind::Cruiser).is_empty());
}

#[test]
fn test_attack_coordinates_wrap() {
    let mut board = BattleBoard::new(10, 10);
    board
        .place_ship(0, 0, ShipKind::Destroyer, Orientation::Horizontal)
        .unwrap();
    assert_eq!(
        board.attack(-10, 10).unwrap(),
        AttackResult::Hit(ShipKind::Destroyer)
    );
    assert_eq!(
        board.attack(0, 0).unwrap_err(),
        BoardError::AlreadyAttacked { x: 0, y: 0 }
    );
    assert_eq!(
        board.attack(11, -10).unwrap(),
        AttackResult::Sink(ShipKind::Destroyer)
    );
}

#[test]
fn test_placement_flush_against_far_edge() {
    let mut board = BattleBoard::new(10, 10);
    assert!(board.can_place(5, 0, ShipKind::Carrier, Orientation::Horizontal));
    assert!(!board.can_place(6, 0, ShipKind::Carrier, Orientation::Horizontal));
    assert!(board.can_place(0, 5, ShipKind::Carrier, Orientation::Vertical));
    assert!(!board.can_place(0, 6, ShipKind::Carrier, Orientation::Vertical));

    board
        .place_ship(5, 0, ShipKind::Carrier, Orientation::Horizontal)
        .unwrap();
    assert_eq!(board.cell(9, 0), Cell::Ship(ShipKind::Carrier));
    // nothing wrapped around to the left edge
    assert_eq!(board.cell(0, 0), Cell::Empty);

    assert_eq!(
        board
            .place_ship(0, 8, ShipKind::Cruiser, Orientation::Vertical)
            .unwrap_err(),
        BoardError::ShipOutOfBounds
    );
}

#[test]
fn test_placement_start_must_be_on_board() {
    let mut board = BattleBoard::new(10, 10);
    for (x, y) in [(-1, 0), (0, -1), (10, 0), (0, 10)] {
        for orientation in Orientation::BOTH {
            assert_eq!(
                board
                    .place_ship(x, y, ShipKind::Destroyer, orientation)
                    .unwrap_err(),
                BoardError::ShipOutOfBounds
            );
        }
    }
    assert_eq!(count(&board, Cell::Empty), 100);
}

#[test]
fn test_overlapping_placement_leaves_board_untouched() {
    let mut board = BattleBoard::new(10, 10);
    board
        .place_ship(2, 2, ShipKind::Battleship, Orientation::Horizontal)
        .unwrap();
    let before = board.clone();
    assert_eq!(
        board
            .place_ship(3, 0, ShipKind::Cruiser, Orientation::Vertical)
            .unwrap_err(),
        BoardError::ShipOverlaps
    );
    assert_eq!(board, before);
}

#[test]
fn test_malformed_codes_are_rejected() {
    let mut board = BattleBoard::new(10, 10);
    assert_eq!(
        board.place_ship_code(0, 0, 9, 0).unwrap_err(),
        BoardError::UnknownShipKind(9)
    );
    assert_eq!(
        board.place_ship_code(0, 0, 0, 2).unwrap_err(),
        BoardError::UnknownOrientation(2)
    );
    assert_eq!(count(&board, Cell::Empty), 100);

    board.place_ship_code(0, 0, 4, 1).unwrap();
    assert_eq!(board.cell(0, 1), Cell::Ship(ShipKind::Destroyer));

    assert_eq!(ship_length(0), 5);
    assert_eq!(ship_length(4), 2);
    assert_eq!(ship_length(5), 0);
}

#[test]
fn test_seed_board_places_full_fleet() {
    let mut board = BattleBoard::new(10, 10);
    let mut rng = SmallRng::seed_from_u64(42);
    let skipped = board.seed_board(&mut rng);
    assert!(skipped.is_empty());
    assert_eq!(count(&board, Cell::Empty), 100 - TOTAL_SHIP_CELLS);
    for kind in FLEET {
        assert_eq!(count(&board, Cell::Ship(kind)), kind.length());
    }
    assert!(!board.all_ships_sunk());
}

#[test]
fn test_seed_board_resets_registry() {
    let mut board = BattleBoard::new(10, 10);
    let mut rng = SmallRng::seed_from_u64(7);
    board.seed_board(&mut rng);
    let (x, y, _) = board
        .grid()
        .iter()
        .find(|&(_, _, c)| matches!(c, Cell::Ship(_)))
        .unwrap();
    board.attack(x as i32, y as i32).unwrap();
    for kind in FLEET {
        board.record_sunk_ship(kind);
    }
    assert!(board.all_ships_sunk());

    board.seed_board(&mut rng);
    assert!(!board.all_ships_sunk());
    assert!(board.hit_locations().is_empty());
    assert_eq!(count(&board, Cell::Hit), 0);
    assert!(board.sunk_ships().iter().all(|&s| !s));
}

#[test]
fn test_partially_seeded_board_never_reports_all_sunk() {
    let mut board = BattleBoard::new(4, 4);
    let mut rng = SmallRng::seed_from_u64(3);
    let skipped = board.seed_board(&mut rng);
    assert!(skipped.contains(&ShipKind::Carrier));

    for y in 0..4 {
        for x in 0..4 {
            board.attack(x, y).unwrap();
        }
    }
    for kind in FLEET {
        assert_eq!(board.is_ship_sunk(kind), !skipped.contains(&kind));
    }
    assert!(!board.all_ships_sunk());
}

#[test]
fn test_is_ship_sunk_does_not_mutate() {
    let board = BattleBoard::new(10, 10);
    // no carrier on the board, yet checking must not register it as sunk
    assert!(!board.is_ship_sunk(ShipKind::Carrier));
    assert!(!board.is_ship_sunk(ShipKind::Carrier));
    assert!(!board.all_ships_sunk());
}

#[test]
fn test_record_sunk_ship_is_idempotent() {
    let mut board = BattleBoard::new(10, 10);
    board.record_sunk_ship(ShipKind::Submarine);
    let once = board.clone();
    board.record_sunk_ship(ShipKind::Submarine);
    assert_eq!(board, once);
    assert!(board.is_ship_sunk(ShipKind::Submarine));
    assert_eq!(
        board.remaining_ships().collect::<Vec<_>>(),
        vec![
            ShipKind::Carrier,
            ShipKind::Battleship,
            ShipKind::Cruiser,
            ShipKind::Destroyer
        ]
    );
}

#[test]
fn test_hit_cell_counts_as_sunk_once_ship_recorded() {
    let mut board = BattleBoard::new(10, 10);
    board
        .place_ship(0, 0, ShipKind::Cruiser, Orientation::Vertical)
        .unwrap();
    board.attack(0, 0).unwrap();
    assert!(!board.is_cell_sunk(0, 0));

    board.record_sunk_ship(ShipKind::Cruiser);
    assert_eq!(board.cell(0, 0), Cell::Hit);
    assert!(board.is_cell_sunk(0, 0));
    assert!(!board.is_cell_sunk(0, 1));
}

#[test]
fn test_all_ships_sunk_requires_every_kind() {
    let mut board = BattleBoard::new(10, 10);
    for (i, kind) in FLEET.into_iter().enumerate() {
        assert!(!board.all_ships_sunk());
        board.record_sunk_ship(kind);
        assert_eq!(board.all_ships_sunk(), i == FLEET.len() - 1);
    }
}

#[test]
fn test_observe_mirrors_results_on_view() {
    let mut view = BattleBoard::new(10, 10);
    view.observe((0, 0), AttackResult::Miss, &[]);
    view.observe((4, 4), AttackResult::Hit(ShipKind::Destroyer), &[]);
    assert_eq!(view.cell(0, 0), Cell::Miss);
    assert_eq!(view.cell(4, 4), Cell::Hit);

    view.observe(
        (5, 4),
        AttackResult::Sink(ShipKind::Destroyer),
        &[(4, 4), (5, 4)],
    );
    assert_eq!(view.cell(4, 4), Cell::Sunk);
    assert_eq!(view.cell(5, 4), Cell::Sunk);
    assert!(view.is_ship_sunk(ShipKind::Destroyer));
}

#[test]
fn test_display_renders_glyphs() {
    let mut board = BattleBoard::new(3, 2);
    board
        .place_ship(0, 0, ShipKind::Destroyer, Orientation::Horizontal)
        .unwrap();
    board.attack(0, 0).unwrap();
    board.attack(2, 1).unwrap();
    assert_eq!(board.to_string(), "x D .\n. . o\n");
}

#[test]
fn test_invalid_dimensions() {
    assert_eq!(
        BattleBoard::try_new(0, 10).unwrap_err(),
        BoardError::InvalidDimensions { cols: 0, rows: 10 }
    );
}

#[test]
fn test_total_ship_cells_follows_fleet() {
    let summed: usize = FLEET.iter().map(|k| k.length()).sum();
    assert_eq!(TOTAL_SHIP_CELLS, summed);
    assert_eq!(TOTAL_SHIP_CELLS, 17);
    assert_eq!(fleet_cells(&[ShipKind::Destroyer, ShipKind::Destroyer]), 4);
    assert_eq!(fleet_cells(&[]), 0);
}

#[test]
fn test_seeded_ships_are_whole_and_straight() {
    for seed in 0..50 {
        let mut board = BattleBoard::new(10, 10);
        let mut rng = SmallRng::seed_from_u64(seed);
        assert!(board.seed_board(&mut rng).is_empty());
        assert_eq!(count(&board, Cell::Empty), 100 - TOTAL_SHIP_CELLS);

        for kind in FLEET {
            let cells: Vec<(usize, usize)> = board
                .grid()
                .iter()
                .filter(|&(_, _, c)| c == Cell::Ship(kind))
                .map(|(x, y, _)| (x, y))
                .collect();
            assert_eq!(cells.len(), kind.length(), "seed {} {}", seed, kind);
            let same_row = cells.iter().all(|&(_, y)| y == cells[0].1);
            let same_col = cells.iter().all(|&(x, _)| x == cells[0].0);
            assert!(same_row || same_col, "seed {}: {} is bent", seed, kind);
        }
    }
}
