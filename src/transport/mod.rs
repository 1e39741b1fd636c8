use core::fmt;

use crate::protocol::Message;

/// One end of a game session: delivers whole messages in order.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()>;
    async fn recv(&mut self) -> anyhow::Result<Message>;
}

/// Transport failures. Every variant ends the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Could not bind or listen on the server address.
    Bind(String),
    /// Could not reach the server.
    Connect(String),
    Send(String),
    Receive(String),
    /// Peer closed or reset the connection.
    Closed,
    Timeout,
    FrameTooLarge { len: u32, max: u32 },
    EmptyFrame,
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::Bind(e) => write!(f, "Bind error: {}", e),
            TransportError::Connect(e) => write!(f, "Connect error: {}", e),
            TransportError::Send(e) => write!(f, "Write error: {}", e),
            TransportError::Receive(e) => write!(f, "Read error: {}", e),
            TransportError::Closed => write!(f, "Connection closed by peer"),
            TransportError::Timeout => write!(f, "Operation timed out"),
            TransportError::FrameTooLarge { len, max } => {
                write!(f, "Message too large: {} bytes (max: {})", len, max)
            }
            TransportError::EmptyFrame => write!(f, "Invalid message length: 0"),
        }
    }
}

impl std::error::Error for TransportError {}

pub mod in_memory;
pub mod tcp;
