use crate::{
    core::{GameEngine, GameStatus, Move, Participant, TurnOutcome},
    player::Player,
    protocol::{Message, StatusEnvelope},
    transport::Transport,
    ui,
};

const LOCAL_REJECTED: &str = "Invalid move. Please try again.";
const LOCAL_ACCEPTED: &str = "Your move was a success.";
const REMOTE_ACCEPTED: &str = "Received player O move.";

/// Hosts the authoritative board. The local player is `X` and moves first;
/// the remote client plays `O`.
pub struct ServerNode {
    player: Box<dyn Player>,
    engine: GameEngine,
    transport: Box<dyn Transport>,
}

impl ServerNode {
    pub fn new(player: Box<dyn Player>, transport: Box<dyn Transport>) -> Self {
        Self {
            player,
            engine: GameEngine::new(),
            transport,
        }
    }

    /// Play one full game. Returns once a win or tie has been reported to
    /// the client; any transport or protocol error aborts the session.
    pub async fn run(&mut self) -> anyhow::Result<GameStatus> {
        self.player
            .handle_update("Game started. You are X.", self.engine.board());
        while !self.engine.is_over() {
            self.server_turn().await?;
            if self.engine.is_over() {
                break;
            }
            self.client_turn().await?;
        }

        let status = self.engine.status();
        log::info!(
            "Game over after {} moves: {:?}",
            self.engine.moves_played(),
            status
        );
        self.player.handle_game_over(
            ui::outcome_banner(status, Participant::Server),
            self.engine.board(),
        );
        Ok(status)
    }

    async fn server_turn(&mut self) -> anyhow::Result<()> {
        loop {
            let mv = self
                .player
                .select_move(self.engine.board(), Participant::Server.mark())?;
            let outcome = self.submit(Participant::Server, mv)?;
            if outcome == TurnOutcome::RejectedOccupied {
                self.player
                    .handle_rejected(mv, LOCAL_REJECTED, self.engine.board());
                continue;
            }

            self.report(Participant::Server, outcome).await?;
            if !outcome.is_terminal() {
                self.player.handle_update(LOCAL_ACCEPTED, self.engine.board());
            }
            return Ok(());
        }
    }

    async fn client_turn(&mut self) -> anyhow::Result<()> {
        loop {
            let mv = self.recv_move().await?;
            let outcome = self.submit(Participant::Client, mv)?;
            self.report(Participant::Client, outcome).await?;
            match outcome {
                TurnOutcome::RejectedOccupied => {
                    log::info!("Client chose occupied cell {}, waiting for retry", mv);
                }
                TurnOutcome::Continue => {
                    self.player.handle_update(REMOTE_ACCEPTED, self.engine.board());
                    return Ok(());
                }
                TurnOutcome::Win | TurnOutcome::Tie => return Ok(()),
            }
        }
    }

    fn submit(&mut self, who: Participant, mv: Move) -> anyhow::Result<TurnOutcome> {
        let outcome = self
            .engine
            .submit(who, mv)
            .map_err(|e| anyhow::anyhow!(e))?;
        log::debug!("{} played {}: {:?}", who, mv, outcome);
        Ok(outcome)
    }

    async fn recv_move(&mut self) -> anyhow::Result<Move> {
        match self.transport.recv().await? {
            Message::Move(env) => env.to_move().map_err(|e| {
                log::error!("[ServerNode] Client sent an invalid move: {}", e);
                anyhow::anyhow!(e)
            }),
            other => {
                log::error!(
                    "[ServerNode] Expected a move, got unexpected message: {:?}",
                    other
                );
                Err(anyhow::anyhow!(
                    "Expected a move, got unexpected message (closing session)"
                ))
            }
        }
    }

    async fn report(&mut self, mover: Participant, outcome: TurnOutcome) -> anyhow::Result<()> {
        let status = StatusEnvelope::for_outcome(mover, outcome, self.engine.board());
        self.transport.send(Message::Status(status)).await
    }

    /// Current status of the underlying game engine.
    pub fn status(&self) -> GameStatus {
        self.engine.status()
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }
}
