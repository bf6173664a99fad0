use crate::transport::SharedConnection;
use switchboard_core::ClientIdentity;

/// Point-in-time copy of a room's members, taken under the registry lock and
/// used for sending after the lock is released.
///
/// `connections[i]` belongs to `clients[i]`.
#[derive(Clone, Default)]
pub struct RoomSnapshot {
    pub connections: Vec<SharedConnection>,
    pub clients: Vec<ClientIdentity>,
}

impl RoomSnapshot {
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

/// Result of a join: the new identity and the room as it stood right after
/// the insert, newcomer included.
#[derive(Clone)]
pub struct JoinSnapshot {
    pub identity: ClientIdentity,
    pub room: RoomSnapshot,
}

/// Result of a leave. `identity` is `None` when the connection was already
/// gone, which only happens on a duplicate leave.
#[derive(Clone, Default)]
pub struct LeaveSnapshot {
    pub identity: Option<ClientIdentity>,
    pub remaining: RoomSnapshot,
}
