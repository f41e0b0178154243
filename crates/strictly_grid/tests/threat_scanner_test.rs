//! Tests for the gravity threat scanner and the placement heuristics.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use strictly_grid::{
    Cell, GameState, Grid, Placement, PlacementScanner, ThreatScanner, WinDetector,
    random_open_column,
};

fn drops(rows: usize, cols: usize, moves: &[(usize, char)]) -> Grid<char> {
    let mut grid = Grid::new(rows, cols).unwrap();
    for &(col, m) in moves {
        assert!(grid.drop_marker(col, m).is_some());
    }
    grid
}

#[test]
fn test_stacked_column_must_be_answered() {
    let grid = drops(6, 7, &[(3, 'y'), (3, 'y'), (3, 'y')]);
    assert_eq!(grid.heights()[3], 3);
    let scanner = ThreatScanner::new(4).unwrap();
    // Blocking for the opponent.
    assert_eq!(scanner.next_move(&grid, &grid.heights(), &'r', &'y'), Some(3));
    // Winning for the owner.
    assert_eq!(scanner.next_move(&grid, &grid.heights(), &'y', &'r'), Some(3));
}

#[test]
fn test_no_threat_returns_none() {
    let grid = drops(6, 7, &[(0, 'y'), (6, 'r')]);
    let scanner = ThreatScanner::new(4).unwrap();
    assert_eq!(scanner.next_move(&grid, &grid.heights(), &'y', &'r'), None);
}

#[test]
fn test_first_win_beats_earlier_block() {
    // Column 0 blocks three 'r' along row 5; column 4 completes 'y' along row 4.
    let grid = drops(
        6,
        7,
        &[(1, 'r'), (2, 'r'), (3, 'r'), (4, 'y'), (6, 'y'), (1, 'y'), (2, 'y'), (3, 'y')],
    );
    let scanner = ThreatScanner::new(4).unwrap();
    let report = scanner.scan(&grid, &grid.heights(), &'y', &'r');
    assert!(report.blocks().contains(&0));
    assert_eq!(report.wins(), &vec![4]);
    assert_eq!(
        scanner.next_move(&grid, &grid.heights(), &'y', &'r'),
        report.wins().first().copied()
    );
}

#[test]
fn test_up_diagonal_needs_occupied_neighbour() {
    // Staircase rising to the right from (5,1): drop at column 0 row 5 wins
    // only once (4,1) lies on top of (5,1).
    let grid = drops(
        6,
        7,
        &[(1, 'o'), (1, 'x'), (2, 'o'), (2, 'o'), (2, 'x'), (3, 'o'), (3, 'o'), (3, 'o'), (3, 'x')],
    );
    let scanner = ThreatScanner::new(4).unwrap();
    let report = scanner.scan(&grid, &grid.heights(), &'x', &'o');
    assert_eq!(report.wins(), &vec![0]);
}

#[test]
fn test_mismatched_heights_are_ignored() {
    let grid = drops(6, 7, &[(3, 'y'), (3, 'y'), (3, 'y')]);
    let scanner = ThreatScanner::new(4).unwrap();
    // A stale height pointing at an occupied cell is skipped; a short
    // height vector leaves the remaining columns unplayable.
    let mut stale = grid.heights();
    stale[3] = 4;
    assert_eq!(scanner.next_move(&grid, &stale, &'r', &'y'), None);
    assert_eq!(scanner.next_move(&grid, &grid.heights()[..3], &'r', &'y'), None);
}

/// Random gravity board with no completed line yet.
fn random_board(rng: &mut StdRng, rows: usize, cols: usize, n: usize) -> Grid<char> {
    let detector = WinDetector::new(n).unwrap();
    let mut grid = Grid::new(rows, cols).unwrap();
    let plies = rng.random_range(0..rows * cols);
    let mut marker = 'x';
    for _ in 0..plies {
        let Some(col) = random_open_column(&grid.heights(), rng) else {
            break;
        };
        let row = grid.drop_marker(col, marker).unwrap();
        if detector.check(&grid).unwrap().is_some() {
            grid.force_set(row, col, Cell::Empty);
            break;
        }
        marker = if marker == 'x' { 'o' } else { 'x' };
    }
    grid
}

#[test]
fn test_reported_wins_are_confirmed_by_detector() {
    let mut rng = StdRng::seed_from_u64(42);
    for (rows, cols, n) in [(6, 7, 4), (5, 5, 3), (7, 9, 5), (4, 4, 2)] {
        let detector = WinDetector::new(n).unwrap();
        let scanner = ThreatScanner::new(n).unwrap();
        for _ in 0..200 {
            let grid = random_board(&mut rng, rows, cols, n);
            let heights = grid.heights();
            let report = scanner.scan(&grid, &heights, &'x', &'o');
            for col in 0..cols {
                let mut after_x = grid.clone();
                let mut after_o = grid.clone();
                let x_wins = after_x.drop_marker(col, 'x').is_some()
                    && detector.check(&after_x).unwrap().is_some();
                let o_wins = after_o.drop_marker(col, 'o').is_some()
                    && detector.check(&after_o).unwrap().is_some();
                assert_eq!(report.wins().contains(&col), x_wins, "win col {col}\n{grid:?}");
                assert_eq!(report.blocks().contains(&col), o_wins, "block col {col}\n{grid:?}");
            }
            let expected = report
                .wins()
                .first()
                .or(report.blocks().last())
                .copied();
            assert_eq!(scanner.next_move(&grid, &heights, &'x', &'o'), expected);
        }
    }
}

fn tic_tac_toe(first: char, moves: &[(usize, usize, char)]) -> (Grid<char>, GameState<char>) {
    let mut grid = Grid::new(3, 3).unwrap();
    let mut state = GameState::new(first);
    for &(r, c, m) in moves {
        assert!(grid.place(r, c, m));
        state = state.with_placement(Placement::new(m, r, c));
    }
    (grid, state)
}

#[test]
fn test_placement_prefers_win_over_block() {
    let (grid, state) = tic_tac_toe(
        'o',
        &[(1, 1, 'o'), (0, 0, 'x'), (2, 2, 'o'), (0, 2, 'x'), (2, 0, 'o')],
    );
    // 'o' threatens (2,1) but 'x' completes row 0 at (0,1).
    let scanner = PlacementScanner::new(3).unwrap();
    let cell = scanner.next_placement(&grid, &state, &'x', &'o').unwrap();
    assert_eq!(cell, Some((0, 1)));
}

#[test]
fn test_placement_blocks_column_threat() {
    let (grid, state) = tic_tac_toe('x', &[(0, 0, 'x'), (1, 1, 'o'), (2, 2, 'x'), (0, 1, 'o')]);
    let scanner = PlacementScanner::new(3).unwrap();
    let cell = scanner.next_placement(&grid, &state, &'x', &'o').unwrap();
    assert_eq!(cell, Some((2, 1)));
}

#[test]
fn test_placement_on_full_board_is_none() {
    let (grid, state) = tic_tac_toe(
        'x',
        &[
            (0, 0, 'x'),
            (0, 1, 'o'),
            (0, 2, 'x'),
            (1, 0, 'o'),
            (1, 1, 'x'),
            (1, 2, 'x'),
            (2, 0, 'o'),
            (2, 1, 'x'),
            (2, 2, 'o'),
        ],
    );
    let scanner = PlacementScanner::new(3).unwrap();
    assert_eq!(scanner.next_placement(&grid, &state, &'x', &'o').unwrap(), None);
}
