//! Signaling relay: clients join named rooms over a WebSocket, learn who else
//! is there, and exchange negotiation and presence messages through the
//! server. Media never passes through here.

mod config;
mod error;
mod relay;
mod room;
mod server;
mod signaling;
mod transport;

pub use config::*;
pub use error::*;
pub use relay::*;
pub use room::*;
pub use server::*;
pub use signaling::*;
pub use transport::*;
