mod room_membership;
mod room_registry;
mod room_snapshot;

pub use room_membership::*;
pub use room_registry::*;
pub use room_snapshot::*;
