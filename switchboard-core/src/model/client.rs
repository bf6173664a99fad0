use crate::model::connection::ConnectionId;
use serde::{Deserialize, Serialize};

/// Who a connection is: the id it was given on join and the name it asked for.
///
/// The display name is never validated; duplicates and empty names are fine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientIdentity {
    pub socket_id: ConnectionId,
    pub username: String,
}

impl ClientIdentity {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            socket_id: ConnectionId::new(),
            username: username.into(),
        }
    }
}
