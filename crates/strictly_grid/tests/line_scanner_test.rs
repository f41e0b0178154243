//! Tests for the sliding-window pattern matcher.

use strictly_grid::{Cell, LineScanner, OtherSpec};

const E: Cell<char> = Cell::Empty;
const X: Cell<char> = Cell::Occupied('x');
const O: Cell<char> = Cell::Occupied('o');

#[test]
fn test_one_empty_two_same_grouped_by_marker() {
    let scanner = LineScanner::new(E, 1, OtherSpec::Any, 2, 3).unwrap();
    let sequence = [X, X, E, O, O, E, X, O];
    let matches = scanner.scan(&sequence);

    assert_eq!(matches.len(), 2);
    let xs = &matches[&X];
    assert_eq!(xs.len(), 1);
    assert_eq!(*xs[0].window_index(), 0);
    assert_eq!(xs[0].relative_indices(), &vec![2]);
    assert_eq!(xs[0].absolute_indices(), &vec![2]);

    let os = &matches[&O];
    let starts: Vec<usize> = os.iter().map(|m| *m.window_index()).collect();
    assert_eq!(starts, vec![2, 3]);
    assert_eq!(*os[0].first_index(), Some(0));
    assert_eq!(*os[0].first_absolute_index(), Some(2));
    assert_eq!(*os[1].first_index(), Some(2));
    assert_eq!(*os[1].first_absolute_index(), Some(5));
}

#[test]
fn test_mixed_window_is_rejected_not_ignored() {
    let scanner = LineScanner::new(E, 1, OtherSpec::Any, 2, 3).unwrap();
    // [X, O, E] has a third distinct value and must not match either marker.
    assert!(scanner.scan(&[X, O, E]).is_empty());
}

#[test]
fn test_exact_counts_required() {
    let scanner = LineScanner::new(E, 1, OtherSpec::Any, 2, 3).unwrap();
    assert!(scanner.scan(&[E, E, X]).is_empty());
    assert!(scanner.scan(&[X, X, X]).is_empty());
}

#[test]
fn test_two_blanks_for_concrete_marker() {
    let scanner = LineScanner::new(E, 2, OtherSpec::Value(X), 2, 4).unwrap();
    let matches = scanner.scan(&[X, E, X, E, O]);
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[&X][0].absolute_indices(), &vec![1, 3]);
}

#[test]
fn test_short_sequence_has_no_windows() {
    let scanner = LineScanner::new(E, 1, OtherSpec::Any, 3, 4).unwrap();
    assert!(scanner.scan(&[X, X, E]).is_empty());
}

#[test]
fn test_scan_ordered_interleaves_keys_by_window() {
    let scanner = LineScanner::new(E, 1, OtherSpec::Any, 1, 2).unwrap();
    let ordered = scanner.scan_ordered(&[X, E, O]);
    let keys: Vec<Cell<char>> = ordered.iter().map(|(k, _)| *k).collect();
    assert_eq!(keys, vec![X, O]);
}

#[test]
fn test_plain_integers() {
    let scanner = LineScanner::new(0u8, 1, OtherSpec::Any, 3, 4).unwrap();
    let matches = scanner.scan(&[7, 7, 0, 7, 7]);
    assert_eq!(matches[&7].len(), 2);
}
