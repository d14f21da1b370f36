//! Tier behavior of the computer opponent.

use noughts_core::{Board, Coord, Difficulty, Mark, choose_move};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn place(board: &mut Board, row: usize, col: usize, mark: Mark) {
    board.place(Coord::new(row, col).unwrap(), mark).unwrap();
}

fn coord(row: usize, col: usize) -> Coord {
    Coord::new(row, col).unwrap()
}

#[test]
fn test_medium_and_hard_complete_their_own_win() {
    // O has two in the top row; X simultaneously threatens row 1.
    // Winning takes priority over blocking.
    let mut board = Board::new();
    place(&mut board, 0, 0, Mark::O);
    place(&mut board, 0, 1, Mark::O);
    place(&mut board, 1, 0, Mark::X);
    place(&mut board, 1, 1, Mark::X);

    for tier in [Difficulty::Medium, Difficulty::Hard] {
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let cell = choose_move(&board, tier, Mark::O, &mut rng).unwrap();
            assert_eq!(cell, coord(0, 2), "{tier} should win, chose {cell}");
        }
    }
}

#[test]
fn test_medium_and_hard_block_opponent_threat() {
    // X has two in column 0 and O has no winning move of its own.
    let mut board = Board::new();
    place(&mut board, 0, 0, Mark::X);
    place(&mut board, 1, 0, Mark::X);
    place(&mut board, 1, 1, Mark::O);

    for tier in [Difficulty::Medium, Difficulty::Hard] {
        for seed in 0..16 {
            let mut rng = StdRng::seed_from_u64(seed);
            let cell = choose_move(&board, tier, Mark::O, &mut rng).unwrap();
            assert_eq!(cell, coord(2, 0), "{tier} should block, chose {cell}");
        }
    }
}

#[test]
fn test_hard_takes_center_on_empty_board() {
    let board = Board::new();
    for seed in 0..16 {
        let mut rng = StdRng::seed_from_u64(seed);
        let cell = choose_move(&board, Difficulty::Hard, Mark::O, &mut rng).unwrap();
        assert_eq!(cell, Coord::CENTER);
    }
}

#[test]
fn test_easy_reaches_every_empty_cell() {
    let mut board = Board::new();
    place(&mut board, 1, 1, Mark::X);

    let mut rng = StdRng::seed_from_u64(3);
    let mut seen = std::collections::HashSet::new();
    for _ in 0..400 {
        let cell = choose_move(&board, Difficulty::Easy, Mark::O, &mut rng).unwrap();
        assert!(board.is_empty(cell));
        seen.insert(cell.index());
    }
    // Uniform selection over 8 cells should visit all of them.
    assert_eq!(seen.len(), 8);
}

#[test]
fn test_easy_ignores_available_win() {
    // Easy plays at random even with a win on the table, so over many
    // draws it must sometimes pass the winning cell up.
    let mut board = Board::new();
    place(&mut board, 0, 0, Mark::O);
    place(&mut board, 0, 1, Mark::O);
    place(&mut board, 1, 0, Mark::X);

    let mut rng = StdRng::seed_from_u64(11);
    let mut missed_win = false;
    for _ in 0..64 {
        let cell = choose_move(&board, Difficulty::Easy, Mark::O, &mut rng).unwrap();
        if cell != coord(0, 2) {
            missed_win = true;
            break;
        }
    }
    assert!(missed_win);
}
