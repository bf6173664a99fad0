mod connection_handle;
mod inbound;
mod ws_connection;

pub use connection_handle::*;
pub use inbound::*;
#[cfg(test)]
pub(crate) use recording::RecordingConnection;
pub use ws_connection::*;
