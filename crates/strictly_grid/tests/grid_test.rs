//! Tests for grid storage and line extraction.

use strictly_grid::{Cell, DiagonalOrientation, Direction, Grid, Horizontal, Vertical};

fn numbered(rows: usize, cols: usize) -> Grid<usize> {
    let mut grid = Grid::new(rows, cols).unwrap();
    for r in 0..rows {
        for c in 0..cols {
            assert!(grid.place(r, c, r * cols + c));
        }
    }
    grid
}

#[test]
fn test_place_rejects_occupied_and_out_of_range() {
    let mut grid = Grid::new(3, 3).unwrap();
    assert!(grid.place(1, 1, 'x'));
    assert!(!grid.place(1, 1, 'o'));
    assert!(!grid.place(3, 0, 'o'));
    assert_eq!(grid.cell_at(1, 1), Some(Cell::Occupied('x')));
}

#[test]
fn test_out_of_range_reads_are_not_errors() {
    let grid: Grid<char> = Grid::new(2, 2).unwrap();
    assert!(!grid.is_occupied(5, 5));
    assert!(!grid.in_bounds(2, 0));
    assert_eq!(grid.cell_at(0, 2), None);
    assert_eq!(grid.whole_row(2), None);
    assert_eq!(grid.whole_column(2), None);
    assert_eq!(grid.segment(0, 0, 3, Vertical::Down, Horizontal::Right), None);
    assert_eq!(grid.segment(1, 1, 2, Vertical::Up, Horizontal::Left).map(|s| s.len()), Some(2));
}

#[test]
fn test_force_set_overwrites() {
    let mut grid = Grid::new(2, 2).unwrap();
    grid.place(0, 0, 'x');
    assert!(grid.force_set(0, 0, Cell::Occupied('o')));
    assert!(grid.force_set(0, 0, Cell::Empty));
    assert!(!grid.is_occupied(0, 0));
    assert!(!grid.force_set(2, 2, Cell::Occupied('o')));
}

#[test]
fn test_snapshot_is_independent_of_later_moves() {
    let mut grid = Grid::new(2, 3).unwrap();
    grid.place(0, 0, 'x');
    let snapshot = grid.snapshot();
    let row = grid.whole_row(0).unwrap();
    grid.place(0, 1, 'o');
    grid.reset();

    assert_eq!(snapshot[0][0], Cell::Occupied('x'));
    assert_eq!(snapshot[0][1], Cell::Empty);
    assert_eq!(row[0], Cell::Occupied('x'));
    assert!(grid.empty_cells().len() == 6);
}

#[test]
fn test_row_and_column_segments() {
    let grid = numbered(4, 5);
    let col = grid.column_segment(3, 2, 4, Direction::Backward).unwrap();
    assert_eq!(
        col,
        vec![Cell::Occupied(17), Cell::Occupied(12), Cell::Occupied(7), Cell::Occupied(2)]
    );
    assert_eq!(grid.column_segment(1, 2, 4, Direction::Forward), None);
    assert_eq!(grid.whole_column(4).unwrap().len(), 4);
}

#[test]
fn test_diagonal_counts() {
    let grid = numbered(6, 7);
    assert_eq!(grid.all_diagonals_of_length(4, DiagonalOrientation::DownRight).len(), 12);
    assert_eq!(grid.all_diagonals_of_length(4, DiagonalOrientation::DownLeft).len(), 12);
    assert!(grid.all_diagonals_of_length(7, DiagonalOrientation::DownRight).is_empty());
}

#[test]
fn test_diagonal_mirror_symmetry() {
    let grid = numbered(5, 6);
    let mirror = grid.mirrored();
    let cols = grid.cols();
    for len in 1..=5 {
        for r in 0..grid.rows() {
            for c in 0..cols {
                let right = grid.segment(r, c, len, Vertical::Down, Horizontal::Right);
                let left = mirror.segment(r, cols - 1 - c, len, Vertical::Down, Horizontal::Left);
                assert_eq!(right, left, "len {len} at ({r}, {c})");
            }
        }
    }
}

#[test]
fn test_enumerated_diagonals_mirror() {
    let grid = numbered(4, 6);
    let mirror = grid.mirrored();
    let len = 3;
    let anchor_cols = grid.cols() - len + 1;
    let right = grid.all_diagonals_of_length(len, DiagonalOrientation::DownRight);
    let left = mirror.all_diagonals_of_length(len, DiagonalOrientation::DownLeft);
    for (i, diagonal) in right.iter().enumerate() {
        let (row, col) = (i / anchor_cols, i % anchor_cols);
        let mirrored_index = row * anchor_cols + (anchor_cols - 1 - col);
        assert_eq!(diagonal, &left[mirrored_index]);
    }
}

#[test]
fn test_gravity_heights() {
    let mut grid = Grid::new(3, 2).unwrap();
    assert_eq!(grid.heights(), vec![3, 3]);
    assert_eq!(grid.drop_marker(0, 'x'), Some(2));
    assert_eq!(grid.drop_marker(0, 'o'), Some(1));
    assert_eq!(grid.drop_marker(0, 'x'), Some(0));
    assert_eq!(grid.drop_marker(0, 'o'), None);
    assert_eq!(grid.drop_marker(2, 'o'), None);
    assert_eq!(grid.heights(), vec![0, 3]);
    assert_eq!(grid.open_columns(), vec![1]);
}
