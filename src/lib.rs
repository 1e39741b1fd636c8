#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod core;
mod player;

#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod node;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
pub mod transport;
#[cfg(feature = "std")]
pub mod ui;

pub mod prelude;

pub use crate::core::*;
pub use player::*;

#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use node::{ClientNode, ServerNode};
#[cfg(feature = "std")]
pub use protocol::{Message, MoveEnvelope, StatusEnvelope, StatusKind};
#[cfg(feature = "std")]
pub use transport::{in_memory::InMemoryTransport, tcp::TcpTransport, Transport, TransportError};
