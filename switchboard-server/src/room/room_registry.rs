use crate::room::{JoinSnapshot, LeaveSnapshot, RoomMembership, RoomSnapshot};
use crate::transport::SharedConnection;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;
use switchboard_core::{ClientIdentity, ConnectionId, RoomId};
use tracing::debug;

/// Every room and who is in it.
///
/// Each operation holds the lock for the room's shard only for the in-memory
/// map work, returning snapshots so that sends happen after the lock is
/// released. Rooms hashed to the same shard share that lock, so operations on
/// different rooms can contend briefly, though never across a send. Readers share the lock; joins and leaves take it exclusively,
/// and a mutation and its snapshot happen under one acquisition.
#[derive(Clone, Default)]
pub struct RoomRegistry {
    rooms: Arc<DashMap<RoomId, RoomMembership>>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `connection` to the room under a fresh identity, creating the
    /// room if needed.
    pub fn join(
        &self,
        room_id: &RoomId,
        username: impl Into<String>,
        connection: SharedConnection,
    ) -> JoinSnapshot {
        let identity = ClientIdentity::new(username);

        let mut room = self.rooms.entry(room_id.clone()).or_default();
        if room.is_empty() {
            debug!(room = %room_id, "Creating room");
        }
        room.insert(identity.clone(), connection);
        let snapshot = room.snapshot();
        drop(room);

        JoinSnapshot {
            identity,
            room: snapshot,
        }
    }

    /// Removes the connection from the room. A room left empty is pruned in
    /// the same critical section.
    pub fn leave(&self, room_id: &RoomId, id: &ConnectionId) -> LeaveSnapshot {
        let Entry::Occupied(mut entry) = self.rooms.entry(room_id.clone()) else {
            return LeaveSnapshot::default();
        };

        let identity = entry.get_mut().remove(id);
        let remaining = entry.get().snapshot();
        if entry.get().is_empty() {
            entry.remove();
            debug!(room = %room_id, "Pruned empty room");
        }

        LeaveSnapshot {
            identity,
            remaining,
        }
    }

    pub fn snapshot_all(&self, room_id: &RoomId) -> RoomSnapshot {
        self.rooms
            .get(room_id)
            .map(|room| room.snapshot())
            .unwrap_or_default()
    }

    /// Resolves a `socketId` taken from a client payload. Only the exact text
    /// handed out in WELCOME matches; other spellings of the same UUID and
    /// anything that is not a current member of this room resolve to `None`.
    pub fn find_by_socket_id(&self, room_id: &RoomId, target: &str) -> Option<SharedConnection> {
        let target = target
            .parse::<ConnectionId>()
            .ok()
            .filter(|id| id.to_string() == target)?;
        let room = self.rooms.get(room_id)?;
        room.get(&target).map(|member| member.connection.clone())
    }

    pub fn identity_of(&self, room_id: &RoomId, id: &ConnectionId) -> Option<ClientIdentity> {
        let room = self.rooms.get(room_id)?;
        room.get(id).map(|member| member.identity.clone())
    }

    pub fn member_count(&self, room_id: &RoomId) -> usize {
        self.rooms.get(room_id).map(|room| room.len()).unwrap_or(0)
    }

    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}
