use crate::room::RoomSnapshot;
use crate::transport::SharedConnection;
use std::collections::HashMap;
use switchboard_core::{ClientIdentity, ConnectionId};

#[derive(Clone)]
pub struct Member {
    pub connection: SharedConnection,
    pub identity: ClientIdentity,
}

/// The connections currently joined to one room, keyed by the id each was
/// given on join. A connection and its identity are stored as one entry.
#[derive(Default)]
pub struct RoomMembership {
    members: HashMap<ConnectionId, Member>,
}

impl RoomMembership {
    pub fn insert(&mut self, identity: ClientIdentity, connection: SharedConnection) {
        self.members.insert(
            identity.socket_id,
            Member {
                connection,
                identity,
            },
        );
    }

    pub fn remove(&mut self, id: &ConnectionId) -> Option<ClientIdentity> {
        self.members.remove(id).map(|member| member.identity)
    }

    pub fn get(&self, id: &ConnectionId) -> Option<&Member> {
        self.members.get(id)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn snapshot(&self) -> RoomSnapshot {
        let mut snapshot = RoomSnapshot {
            connections: Vec::with_capacity(self.members.len()),
            clients: Vec::with_capacity(self.members.len()),
        };

        for member in self.members.values() {
            snapshot.connections.push(member.connection.clone());
            snapshot.clients.push(member.identity.clone());
        }

        snapshot
    }
}
