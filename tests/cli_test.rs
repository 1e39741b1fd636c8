use std::io::Cursor;

use tictactoe::{Axis, Board, CliPlayer, Mark, Move, Player};

fn player(input: &'static str) -> CliPlayer<Cursor<&'static [u8]>, Vec<u8>> {
    CliPlayer::new(Cursor::new(input.as_bytes()), Vec::new())
}

fn output(p: CliPlayer<Cursor<&'static [u8]>, Vec<u8>>) -> String {
    String::from_utf8(p.into_output()).unwrap()
}

#[test]
fn reads_row_and_column_on_separate_lines() {
    let mut p = player("2\n3\n");
    let mv = p.select_move(&Board::new(), Mark::X).unwrap();
    assert_eq!(mv, Move::new(2, 3).unwrap());
    assert_eq!(
        output(p),
        "Player X it is your move.\n\
         Please enter a row number(1-3): \
         Please enter a column number(1-3): "
    );
}

#[test]
fn reads_both_coordinates_from_one_line() {
    let mut p = player("1 3\n");
    let mv = p.select_move(&Board::new(), Mark::O).unwrap();
    assert_eq!(mv, Move::new(1, 3).unwrap());
}

#[test]
fn out_of_range_and_garbage_are_reprompted() {
    let mut p = player("5\nabc\n2\n0\n3\n");
    let mv = p.select_move(&Board::new(), Mark::X).unwrap();
    assert_eq!(mv, Move::new(2, 3).unwrap());
    let text = output(p);
    assert_eq!(
        text.matches("Invalid selection. Please enter a row number from 1 to 3: ")
            .count(),
        2
    );
    assert_eq!(
        text.matches("Invalid selection. Please enter a column number from 1 to 3: ")
            .count(),
        1
    );
}

#[test]
fn invalid_token_discards_rest_of_line() {
    let mut p = player("9 1\n2\n2\n");
    let mv = p.select_move(&Board::new(), Mark::X).unwrap();
    assert_eq!(mv, Move::new(2, 2).unwrap());
}

#[test]
fn read_validated_honours_bounds() {
    let mut p = player("4\n1\n3\n");
    assert_eq!(p.read_validated(2, 3, Axis::Column).unwrap(), 3);
}

#[test]
fn exhausted_input_is_an_error() {
    let mut p = player("2\n");
    let err = p.select_move(&Board::new(), Mark::X).unwrap_err();
    assert!(err.to_string().contains("Input closed"));
}

#[test]
fn status_and_final_board_are_printed() {
    let mut p = player("");
    let board: Board = "XXX\nOO*\n***\n".parse().unwrap();
    p.handle_update("Player X move:", &board);
    p.handle_game_over("Server won", &board);
    assert_eq!(
        output(p),
        "Player X move:\nXXX\nOO*\n***\n\
         ----------\nXXX\nOO*\n***\nServer won\n----------\n"
    );
}
