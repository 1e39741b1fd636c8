#![cfg(feature = "std")]

use std::io::{self, Write};

use crate::core::{Board, GameStatus, Participant};
use crate::protocol::{MSG_SERVER_WON, MSG_TIE};

pub const DASH_LINE: &str = "----------";

/// Result line shown to `me` once the game is over.
pub fn outcome_banner(status: GameStatus, me: Participant) -> &'static str {
    match status {
        GameStatus::Tie => MSG_TIE,
        GameStatus::Won(winner) if winner == me => "You win",
        GameStatus::Won(Participant::Client) => "Client won",
        GameStatus::Won(Participant::Server) => MSG_SERVER_WON,
        GameStatus::InProgress => "Game in progress",
    }
}

pub fn write_board<W: Write>(out: &mut W, board: &Board) -> io::Result<()> {
    write!(out, "{}", board.render())
}

/// A status line followed by the board.
pub fn write_status<W: Write>(out: &mut W, message: &str, board: &Board) -> io::Result<()> {
    writeln!(out, "{}", message)?;
    write_board(out, board)?;
    out.flush()
}

/// Final board and banner framed by dash lines.
pub fn write_final<W: Write>(out: &mut W, banner: &str, board: &Board) -> io::Result<()> {
    writeln!(out, "{}", DASH_LINE)?;
    write_board(out, board)?;
    writeln!(out, "{}", banner)?;
    writeln!(out, "{}", DASH_LINE)?;
    out.flush()
}
