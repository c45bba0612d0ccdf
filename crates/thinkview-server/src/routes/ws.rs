//! WebSocket route handler.

use crate::state::AppState;
use crate::websocket::handle_stream;
use axum::{
    extract::{
        ws::{WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use std::sync::Arc;
use uuid::Uuid;

pub async fn upgrade(State(state): State<Arc<AppState>>, ws: WebSocketUpgrade) -> Response {
    ws.on_upgrade(move |socket| handle_connection(socket, state))
}

async fn handle_connection(socket: WebSocket, state: Arc<AppState>) {
    let connection_id = Uuid::new_v4();
    if let Err(e) = handle_stream(socket, state, connection_id).await {
        tracing::error!(target: "thinkview::ws", "WebSocket error for connection {}: {}", connection_id, e);
    }
}
