//! Move validation and application.

use super::board::Board;
use super::common::{BoardError, Mark, Move, TurnOutcome};
use super::config::MAX_MOVES;

/// Validate and apply one move attempt.
///
/// `move_number` is the 1-based index this move would take among accepted
/// moves. The board is mutated only when the outcome is accepted.
pub fn apply_move(
    board: &mut Board,
    mv: Move,
    mark: Mark,
    move_number: u8,
) -> Result<TurnOutcome, BoardError> {
    if !board.is_cell_empty(mv) {
        return Ok(TurnOutcome::RejectedOccupied);
    }
    board.place_mark(mv, mark)?;
    if board.has_winning_line(mark) {
        Ok(TurnOutcome::Win)
    } else if move_number >= MAX_MOVES {
        Ok(TurnOutcome::Tie)
    } else {
        Ok(TurnOutcome::Continue)
    }
}
