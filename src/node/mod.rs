#![cfg(feature = "std")]
//! Game loops binding a [`crate::Player`] to a [`crate::transport::Transport`].

mod client;
mod server;

pub use client::ClientNode;
pub use server::ServerNode;
