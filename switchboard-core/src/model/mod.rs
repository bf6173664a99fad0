mod action;
mod client;
mod connection;
mod envelope;
mod room;
mod signaling;

pub use action::Action;
pub use client::ClientIdentity;
pub use connection::ConnectionId;
pub use envelope::{DecodeError, Envelope};
pub use room::RoomId;
pub use signaling::{OutboundMessage, PresenceUpdate, ServerMessage};
