use proptest::prelude::*;
use tictactoe::{apply_move, Board, Cell, Mark, Move, TurnOutcome, BOARD_SIZE};

const LINES: [[(u8, u8); 3]; 8] = [
    [(1, 1), (1, 2), (1, 3)],
    [(2, 1), (2, 2), (2, 3)],
    [(3, 1), (3, 2), (3, 3)],
    [(1, 1), (2, 1), (3, 1)],
    [(1, 2), (2, 2), (3, 2)],
    [(1, 3), (2, 3), (3, 3)],
    [(1, 1), (2, 2), (3, 3)],
    [(1, 3), (2, 2), (3, 1)],
];

fn cell_strategy() -> impl Strategy<Value = Cell> {
    prop_oneof![
        Just(Cell::Empty),
        Just(Cell::Occupied(Mark::X)),
        Just(Cell::Occupied(Mark::O)),
    ]
}

fn board_from(cells: &[Cell]) -> Board {
    let mut board = Board::new();
    for (i, cell) in cells.iter().enumerate() {
        if let Cell::Occupied(mark) = cell {
            let mv = Move::new(i as u8 / 3 + 1, i as u8 % 3 + 1).unwrap();
            board.place_mark(mv, *mark).unwrap();
        }
    }
    board
}

fn move_strategy() -> impl Strategy<Value = Move> {
    (1..=BOARD_SIZE, 1..=BOARD_SIZE).prop_map(|(r, c)| Move::new(r, c).unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn winning_line_matches_brute_force(cells in proptest::collection::vec(cell_strategy(), 9)) {
        let board = board_from(&cells);
        for mark in [Mark::X, Mark::O] {
            let expected = LINES.iter().any(|line| {
                line.iter().all(|&(r, c)| board.cell(Move::new(r, c).unwrap()) == Cell::Occupied(mark))
            });
            prop_assert_eq!(board.has_winning_line(mark), expected);
        }
        if board.winner().is_some() {
            prop_assert!(board.has_winning_line(Mark::X) || board.has_winning_line(Mark::O));
        }
    }

    #[test]
    fn render_parse_roundtrip(cells in proptest::collection::vec(cell_strategy(), 9)) {
        let board = board_from(&cells);
        let text = board.render();
        prop_assert_eq!(text.len(), 12);
        prop_assert_eq!(Board::parse_rendered(&text).unwrap(), board);
    }

    #[test]
    fn occupied_rejection_is_idempotent(first in move_strategy(), mark in prop_oneof![Just(Mark::X), Just(Mark::O)]) {
        let mut board = Board::new();
        prop_assert_eq!(apply_move(&mut board, first, Mark::X, 1).unwrap(), TurnOutcome::Continue);
        let snapshot = board;
        for _ in 0..3 {
            prop_assert_eq!(apply_move(&mut board, first, mark, 2).unwrap(), TurnOutcome::RejectedOccupied);
            prop_assert_eq!(board, snapshot);
        }
    }

    #[test]
    fn filled_counts_accepted_moves(moves in proptest::collection::vec(move_strategy(), 0..20)) {
        let mut board = Board::new();
        let mut accepted = 0u8;
        let mut mark = Mark::X;
        for mv in moves {
            let outcome = apply_move(&mut board, mv, mark, accepted + 1).unwrap();
            if outcome.is_accepted() {
                accepted += 1;
                prop_assert_eq!(board.cell(mv), Cell::Occupied(mark));
                mark = mark.opponent();
            }
            prop_assert_eq!(board.filled(), accepted as usize);
            prop_assert_eq!(board.empty_cells().count(), 9 - accepted as usize);
            if outcome.is_terminal() {
                break;
            }
        }
    }
}
