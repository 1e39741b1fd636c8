use crate::{
    core::{Board, GameStatus, Participant},
    player::Player,
    protocol::{Message, MoveEnvelope, StatusEnvelope, StatusKind},
    transport::Transport,
    ui,
};

/// Remote side of a session: plays `O` and mirrors the server's board from
/// the status envelopes it receives.
pub struct ClientNode {
    player: Box<dyn Player>,
    transport: Box<dyn Transport>,
    board: Board,
    status: GameStatus,
}

impl ClientNode {
    pub fn new(player: Box<dyn Player>, transport: Box<dyn Transport>) -> Self {
        Self {
            player,
            transport,
            board: Board::new(),
            status: GameStatus::InProgress,
        }
    }

    /// Play until the server reports a win or a tie.
    pub async fn run(&mut self) -> anyhow::Result<GameStatus> {
        loop {
            // The server always reports its own move first.
            let update = self.recv_status().await?;
            match update.kind() {
                StatusKind::Rejected => {
                    log::error!(
                        "[ClientNode] Rejection received while waiting for the server's move"
                    );
                    return Err(anyhow::anyhow!(
                        "Unexpected rejection before any move was sent (closing session)"
                    ));
                }
                StatusKind::Update => {
                    self.player.handle_update(&update.status_message, &self.board)
                }
                kind => return Ok(self.finish(kind)),
            }

            loop {
                let mv = self
                    .player
                    .select_move(&self.board, Participant::Client.mark())?;
                self.transport
                    .send(Message::Move(MoveEnvelope::from(mv)))
                    .await?;
                let reply = self.recv_status().await?;
                match reply.kind() {
                    StatusKind::Rejected => {
                        log::debug!("Move {} rejected by server", mv);
                        self.player
                            .handle_rejected(mv, &reply.status_message, &self.board);
                    }
                    StatusKind::Update => {
                        self.player.handle_update(&reply.status_message, &self.board);
                        break;
                    }
                    kind => return Ok(self.finish(kind)),
                }
            }
        }
    }

    async fn recv_status(&mut self) -> anyhow::Result<StatusEnvelope> {
        match self.transport.recv().await? {
            Message::Status(env) => {
                self.board = env.board().map_err(|e| {
                    log::error!("[ClientNode] Server sent a malformed board: {:?}", env.game_board);
                    anyhow::anyhow!(e)
                })?;
                log::debug!("status {:?}", env.status_message);
                Ok(env)
            }
            other => {
                log::error!(
                    "[ClientNode] Expected a status update, got unexpected message: {:?}",
                    other
                );
                Err(anyhow::anyhow!(
                    "Expected a status update, got unexpected message (closing session)"
                ))
            }
        }
    }

    fn finish(&mut self, kind: StatusKind) -> GameStatus {
        self.status = match kind {
            StatusKind::ClientWon => GameStatus::Won(Participant::Client),
            StatusKind::ServerWon => GameStatus::Won(Participant::Server),
            _ => GameStatus::Tie,
        };
        log::info!("Game over: {:?}", self.status);
        self.player.handle_game_over(
            ui::outcome_banner(self.status, Participant::Client),
            &self.board,
        );
        self.status
    }

    /// Last board received from the server.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }
}
