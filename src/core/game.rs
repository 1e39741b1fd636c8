use super::{
    board::Board,
    common::{Move, Participant, TurnError, TurnOutcome},
    rules::apply_move,
};

/// Whose move the session is waiting for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    ServerTurn,
    ClientTurn,
    GameOver,
}

impl SessionPhase {
    fn of(participant: Participant) -> Self {
        match participant {
            Participant::Server => SessionPhase::ServerTurn,
            Participant::Client => SessionPhase::ClientTurn,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Participant),
    Tie,
}

/// Authoritative game state: the board plus turn alternation.
///
/// The server moves first. A rejected move leaves the phase and the move
/// counter untouched so the same participant tries again.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    phase: SessionPhase,
    moves_played: u8,
    status: GameStatus,
}

impl GameEngine {
    /// Create a new engine with an empty board, server to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            phase: SessionPhase::ServerTurn,
            moves_played: 0,
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Number of accepted moves so far.
    pub fn moves_played(&self) -> u8 {
        self.moves_played
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.phase == SessionPhase::GameOver
    }

    /// Participant expected to move next, or `None` once the game is over.
    pub fn active(&self) -> Option<Participant> {
        match self.phase {
            SessionPhase::ServerTurn => Some(Participant::Server),
            SessionPhase::ClientTurn => Some(Participant::Client),
            SessionPhase::GameOver => None,
        }
    }

    /// Apply a move on behalf of `participant` and advance the session.
    pub fn submit(&mut self, participant: Participant, mv: Move) -> Result<TurnOutcome, TurnError> {
        match self.active() {
            None => return Err(TurnError::GameOver),
            Some(active) if active != participant => {
                return Err(TurnError::NotYourTurn(participant))
            }
            Some(_) => {}
        }

        let outcome = apply_move(
            &mut self.board,
            mv,
            participant.mark(),
            self.moves_played + 1,
        )
        .map_err(TurnError::Board)?;

        match outcome {
            TurnOutcome::RejectedOccupied => {}
            TurnOutcome::Continue => {
                self.moves_played += 1;
                self.phase = SessionPhase::of(participant.other());
            }
            TurnOutcome::Win => {
                self.moves_played += 1;
                self.phase = SessionPhase::GameOver;
                self.status = GameStatus::Won(participant);
            }
            TurnOutcome::Tie => {
                self.moves_played += 1;
                self.phase = SessionPhase::GameOver;
                self.status = GameStatus::Tie;
            }
        }
        Ok(outcome)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
