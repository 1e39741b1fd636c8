use std::io::ErrorKind;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream, ToSocketAddrs};
use tokio::time::{timeout, Duration};

use crate::core::config::MAX_FRAME_SIZE;
use crate::protocol::{self, Message};
use crate::transport::{Transport, TransportError};

/// A single game connection carrying length-prefixed JSON frames.
///
/// Each frame is a 4-byte big-endian length followed by one JSON document.
/// Operations block until complete unless a timeout is configured.
pub struct TcpTransport {
    stream: TcpStream,
    timeout_duration: Option<Duration>,
    max_frame_size: u32,
}

impl TcpTransport {
    pub fn new(stream: TcpStream) -> Self {
        Self {
            stream,
            timeout_duration: None,
            max_frame_size: MAX_FRAME_SIZE,
        }
    }

    /// Bound every send and receive by `timeout_duration`.
    pub fn with_timeout(stream: TcpStream, timeout_duration: Duration) -> Self {
        Self {
            timeout_duration: Some(timeout_duration),
            ..Self::new(stream)
        }
    }

    pub fn with_config(
        stream: TcpStream,
        timeout_duration: Option<Duration>,
        max_frame_size: u32,
    ) -> Self {
        Self {
            stream,
            timeout_duration,
            max_frame_size,
        }
    }

    pub async fn connect<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let stream = TcpStream::connect(addr)
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;
        Ok(Self::new(stream))
    }

    /// Bind `addr`, wait for exactly one client and return its connection.
    pub async fn accept_one<A: ToSocketAddrs>(addr: A) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| TransportError::Bind(e.to_string()))?;
        log::info!("Listening on {}", listener.local_addr()?);
        Self::accept_from(&listener).await
    }

    /// Accept one client from an already bound listener.
    pub async fn accept_from(listener: &TcpListener) -> anyhow::Result<Self> {
        let (stream, peer) = listener
            .accept()
            .await
            .map_err(|e| TransportError::Connect(e.to_string()))?;
        log::info!("Client connected from {}", peer);
        Ok(Self::new(stream))
    }

    pub fn peer_addr(&self) -> anyhow::Result<std::net::SocketAddr> {
        Ok(self.stream.peer_addr()?)
    }
}

fn write_error(e: std::io::Error) -> TransportError {
    match e.kind() {
        ErrorKind::BrokenPipe | ErrorKind::ConnectionReset => TransportError::Closed,
        _ => TransportError::Send(e.to_string()),
    }
}

fn read_error(e: std::io::Error) -> TransportError {
    match e.kind() {
        ErrorKind::UnexpectedEof | ErrorKind::ConnectionReset => TransportError::Closed,
        _ => TransportError::Receive(e.to_string()),
    }
}

#[async_trait::async_trait]
impl Transport for TcpTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        let data = protocol::encode(&msg)?;
        let len = data.len() as u32;
        if len > self.max_frame_size {
            return Err(TransportError::FrameTooLarge {
                len,
                max: self.max_frame_size,
            }
            .into());
        }
        log::trace!("send {} bytes: {}", len, String::from_utf8_lossy(&data));

        let limit = self.timeout_duration;
        let stream = &mut self.stream;
        let send_op = async move {
            stream.write_all(&len.to_be_bytes()).await.map_err(write_error)?;
            stream.write_all(&data).await.map_err(write_error)?;
            stream.flush().await.map_err(write_error)?;
            anyhow::Ok(())
        };
        match limit {
            Some(limit) => timeout(limit, send_op)
                .await
                .map_err(|_| anyhow::Error::new(TransportError::Timeout))?,
            None => send_op.await,
        }
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        let max = self.max_frame_size;
        let limit = self.timeout_duration;
        let stream = &mut self.stream;
        let recv_op = async move {
            let mut len_buf = [0u8; 4];
            stream.read_exact(&mut len_buf).await.map_err(read_error)?;
            let len = u32::from_be_bytes(len_buf);
            if len > max {
                return Err(TransportError::FrameTooLarge { len, max }.into());
            }
            if len == 0 {
                return Err(TransportError::EmptyFrame.into());
            }

            let mut buf = vec![0u8; len as usize];
            stream.read_exact(&mut buf).await.map_err(read_error)?;
            log::trace!("recv {} bytes: {}", len, String::from_utf8_lossy(&buf));
            let msg = protocol::decode(&buf)?;
            anyhow::Ok(msg)
        };
        match limit {
            Some(limit) => timeout(limit, recv_op)
                .await
                .map_err(|_| anyhow::Error::new(TransportError::Timeout))?,
            None => recv_op.await,
        }
    }
}
