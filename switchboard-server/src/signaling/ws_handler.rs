use crate::signaling::{Session, SignalingService};
use crate::transport::WsConnection;
use axum::extract::ws::{WebSocket, WebSocketUpgrade};
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use futures::StreamExt;
use std::sync::Arc;
use switchboard_core::RoomId;
use tracing::{debug, warn};

/// Query parameters of the upgrade request. Missing values are empty strings
/// and a repeated key keeps its first value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JoinParams {
    pub room_id: String,
    pub username: String,
}

impl JoinParams {
    pub fn from_query(pairs: Vec<(String, String)>) -> Self {
        let mut room_id = None;
        let mut username = None;
        for (key, value) in pairs {
            match key.as_str() {
                "roomId" => {
                    room_id.get_or_insert(value);
                }
                "username" => {
                    username.get_or_insert(value);
                }
                _ => {}
            }
        }

        Self {
            room_id: room_id.unwrap_or_default(),
            username: username.unwrap_or_default(),
        }
    }
}

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    Query(query): Query<Vec<(String, String)>>,
    State(service): State<SignalingService>,
) -> impl IntoResponse {
    let params = JoinParams::from_query(query);
    ws.on_failed_upgrade(|e| warn!("WebSocket upgrade failed: {}", e))
        .on_upgrade(move |socket| handle_socket(socket, params, service))
}

async fn handle_socket(socket: WebSocket, params: JoinParams, service: SignalingService) {
    let (sink, stream) = socket.split();
    let (connection, writer) = WsConnection::spawn(sink);

    let room_id = RoomId::from(params.room_id);
    debug!(room = %room_id, "New WebSocket connection for '{}'", params.username);

    Session::run(service, room_id, params.username, Arc::new(connection), stream).await;

    writer.abort();
}
