use tictactoe::{apply_move, Board, BoardError, Cell, Mark, Move, TurnOutcome};

fn mv(row: u8, column: u8) -> Move {
    Move::new(row, column).unwrap()
}

#[test]
fn new_board_renders_empty_grid() {
    let board = Board::new();
    assert_eq!(board.render(), "***\n***\n***\n");
    assert_eq!(board.filled(), 0);
    assert!(!board.is_full());
    assert_eq!(board.empty_cells().count(), 9);
}

#[test]
fn move_rejects_out_of_range_coordinates() {
    assert!(Move::new(1, 3).is_ok());
    assert_eq!(
        Move::new(0, 1),
        Err(BoardError::OutOfRange { row: 0, column: 1 })
    );
    assert_eq!(
        Move::new(2, 4),
        Err(BoardError::OutOfRange { row: 2, column: 4 })
    );
}

#[test]
fn render_is_row_major() {
    let mut board = Board::new();
    board.place_mark(mv(1, 3), Mark::X).unwrap();
    board.place_mark(mv(3, 1), Mark::O).unwrap();
    assert_eq!(board.render(), "**X\n***\nO**\n");
    assert_eq!(board.cell(mv(1, 3)), Cell::Occupied(Mark::X));
    assert_eq!(board.cell(mv(3, 1)), Cell::Occupied(Mark::O));
    assert!(board.is_cell_empty(mv(2, 2)));
}

#[test]
fn parse_rendered_inverts_render() {
    let text = "XO*\n*X*\nO*X\n";
    let board: Board = text.parse().unwrap();
    assert_eq!(board.render(), text);
    assert!(board.has_winning_line(Mark::X));
}

#[test]
fn parse_rendered_rejects_malformed_text() {
    assert_eq!(Board::parse_rendered("***\n***\n"), Err(BoardError::InvalidRender));
    assert_eq!(Board::parse_rendered("****\n***\n***\n"), Err(BoardError::InvalidRender));
    assert_eq!(Board::parse_rendered("***\n*Z*\n***\n"), Err(BoardError::InvalidRender));
    assert_eq!(
        Board::parse_rendered("***\n***\n***\n***\n"),
        Err(BoardError::InvalidRender)
    );
}

#[test]
fn detects_every_line() {
    let lines: [[(u8, u8); 3]; 8] = [
        [(1, 1), (1, 2), (1, 3)],
        [(2, 1), (2, 2), (2, 3)],
        [(3, 1), (3, 2), (3, 3)],
        [(1, 1), (2, 1), (3, 1)],
        [(1, 2), (2, 2), (3, 2)],
        [(1, 3), (2, 3), (3, 3)],
        [(1, 1), (2, 2), (3, 3)],
        [(1, 3), (2, 2), (3, 1)],
    ];
    for line in lines {
        let mut board = Board::new();
        for (r, c) in line {
            board.place_mark(mv(r, c), Mark::O).unwrap();
        }
        assert!(board.has_winning_line(Mark::O), "line {:?}", line);
        assert!(!board.has_winning_line(Mark::X));
        assert_eq!(board.winner(), Some(Mark::O));
    }
}

#[test]
fn two_in_a_row_is_not_a_win() {
    let mut board = Board::new();
    board.place_mark(mv(1, 1), Mark::X).unwrap();
    board.place_mark(mv(1, 2), Mark::X).unwrap();
    board.place_mark(mv(1, 3), Mark::O).unwrap();
    assert!(!board.has_winning_line(Mark::X));
    assert_eq!(board.winner(), None);
}

#[test]
fn winner_takes_first_complete_row() {
    let board: Board = "XXX\n***\nOOO\n".parse().unwrap();
    assert!(board.has_winning_line(Mark::X));
    assert!(board.has_winning_line(Mark::O));
    assert_eq!(board.winner(), Some(Mark::X));
}

#[test]
fn winner_lets_later_column_override() {
    let board: Board = "XO*\nXO*\nXO*\n".parse().unwrap();
    assert!(board.has_winning_line(Mark::X));
    assert!(board.has_winning_line(Mark::O));
    assert_eq!(board.winner(), Some(Mark::O));
}

#[test]
fn apply_move_rejects_occupied_cell_without_change() {
    let mut board = Board::new();
    assert_eq!(
        apply_move(&mut board, mv(1, 1), Mark::X, 1),
        Ok(TurnOutcome::Continue)
    );
    let before = board;
    assert_eq!(
        apply_move(&mut board, mv(1, 1), Mark::O, 2),
        Ok(TurnOutcome::RejectedOccupied)
    );
    assert_eq!(board, before);
    assert_eq!(board.cell(mv(1, 1)), Cell::Occupied(Mark::X));
}

#[test]
fn apply_move_reports_win_before_tie_on_last_move() {
    let mut board: Board = "OOX\nXOX\nOX*\n".parse().unwrap();
    assert_eq!(
        apply_move(&mut board, mv(3, 3), Mark::X, 9),
        Ok(TurnOutcome::Win)
    );
    assert!(board.is_full());
}

#[test]
fn apply_move_reports_tie_on_ninth_move_without_line() {
    let mut board: Board = "XOX\nXOO\nOX*\n".parse().unwrap();
    assert_eq!(
        apply_move(&mut board, mv(3, 3), Mark::X, 9),
        Ok(TurnOutcome::Tie)
    );
    assert!(board.is_full());
}
