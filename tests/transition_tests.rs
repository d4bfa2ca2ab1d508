//! Generation transition on bounded boards.

use tui_life::core::{next_generation, parse_pattern, GridError, GridState, GLIDER};
use tui_life::types::{ALIVE, DEAD};

fn step(grid: &GridState) -> GridState {
    let cells = next_generation(grid.cells(), grid.size()).unwrap();
    GridState::from_cells(grid.size(), cells).unwrap()
}

fn steps(grid: &GridState, k: usize) -> GridState {
    (0..k).fold(grid.clone(), |g, _| step(&g))
}

#[test]
fn block_is_a_still_life() {
    let block = parse_pattern(4, "0000\n0110\n0110\n0000").unwrap();
    assert_eq!(step(&block), block);
    assert_eq!(steps(&block, 10), block);
}

#[test]
fn blinker_oscillates_with_period_two() {
    let horizontal = parse_pattern(5, "00000\n00000\n01110\n00000\n00000").unwrap();
    let vertical = parse_pattern(5, "00000\n00100\n00100\n00100\n00000").unwrap();

    assert_eq!(step(&horizontal), vertical);
    assert_eq!(step(&vertical), horizontal);
}

#[test]
fn glider_moves_one_cell_diagonally_every_four_generations() {
    let start = GLIDER.place(10, 1, 1).unwrap();
    let expected = GLIDER.place(10, 2, 2).unwrap();
    assert_eq!(steps(&start, 4), expected);
}

#[test]
fn glider_settles_into_a_block_in_the_corner() {
    let mut grid = GLIDER.place(8, 0, 0).unwrap();
    for _ in 0..40 {
        grid = step(&grid);
    }
    let block = GridState::from_live_cells(8, [(6, 6), (6, 7), (7, 6), (7, 7)]).unwrap();
    assert_eq!(grid, block);
}

#[test]
fn edge_cells_only_count_in_board_neighbors() {
    // A full top row of three: the middle survives with 2, the ends die with 1,
    // and the cell below the middle is born with 3.
    let grid = parse_pattern(3, "111\n000\n000").unwrap();
    let next = step(&grid);
    assert_eq!(next.cells(), &[0, 1, 0, 0, 1, 0, 0, 0, 0]);
}

#[test]
fn middle_row_turns_vertical() {
    let grid = parse_pattern(3, "000\n111\n000").unwrap();
    assert_eq!(step(&grid).cells(), &[0, 1, 0, 0, 1, 0, 0, 1, 0]);
}

#[test]
fn single_cell_dies() {
    let grid = GridState::from_live_cells(3, [(1, 1)]).unwrap();
    assert!(step(&grid).is_extinct());
}

#[test]
fn dead_board_stays_dead() {
    let grid = GridState::dead(7).unwrap();
    assert_eq!(step(&grid), grid);
}

#[test]
fn wrong_length_is_rejected() {
    assert_eq!(
        next_generation(&[ALIVE; 8], 3),
        Err(GridError::InvalidGridSize {
            expected: 9,
            actual: 8
        })
    );
}

#[test]
fn method_and_free_function_agree() {
    let grid = parse_pattern(5, "01000\n00100\n11100\n00000\n00011").unwrap();
    assert_eq!(grid.next_generation(), step(&grid));
}
