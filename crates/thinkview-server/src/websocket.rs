//! Streaming classification over WebSocket.
//!
//! Each text frame carries the latest full snapshot of a thinking trace; the
//! server answers every snapshot with a fresh classification. No state is
//! kept between frames.

use crate::state::AppState;
use anyhow::Result;
use axum::extract::ws::{Message, WebSocket};
use futures::{SinkExt, StreamExt};
use std::sync::Arc;
use thinkview_core::Classifier;
use thinkview_types::{StreamClientMessage, StreamServerMessage};
use uuid::Uuid;

/// Handle a streaming classification connection.
pub async fn handle_stream(socket: WebSocket, state: Arc<AppState>, connection_id: Uuid) -> Result<()> {
    let (mut ws_tx, mut ws_rx) = socket.split();
    tracing::info!(target: "thinkview::ws", "Stream client {} connected", connection_id);

    let mut snapshots: u64 = 0;
    while let Some(msg) = ws_rx.next().await {
        let reply = match msg? {
            Message::Text(text) => respond(&state.classifier, text.as_str()),
            Message::Close(_) => {
                tracing::debug!(target: "thinkview::ws", "Stream client {} closed connection", connection_id);
                break;
            }
            // Pong is handled automatically by axum
            _ => continue,
        };

        if matches!(reply, StreamServerMessage::Classification { .. }) {
            snapshots += 1;
        }

        let json = serde_json::to_string(&reply)?;
        if ws_tx.send(Message::Text(json.into())).await.is_err() {
            tracing::debug!(target: "thinkview::ws", "Stream client {} went away", connection_id);
            break;
        }
    }

    tracing::info!(
        target: "thinkview::ws",
        "Stream client {} disconnected after {} snapshots",
        connection_id,
        snapshots
    );
    Ok(())
}

/// Answer one client frame.
pub fn respond(classifier: &Classifier, frame: &str) -> StreamServerMessage {
    match serde_json::from_str::<StreamClientMessage>(frame) {
        Ok(StreamClientMessage::Snapshot { content }) => StreamServerMessage::Classification {
            result: classifier.format_for_simple_display(content.as_deref().unwrap_or_default()),
        },
        Ok(StreamClientMessage::Ping { timestamp }) => StreamServerMessage::Pong { timestamp },
        Err(e) => {
            tracing::debug!(target: "thinkview::ws", "Unparseable stream frame: {}", e);
            StreamServerMessage::Error {
                message: format!("Invalid message: {}", e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thinkview_types::ThinkingStatus;

    #[test]
    fn test_snapshot_is_classified() {
        let reply = respond(
            Classifier::global(),
            r#"{"type":"snapshot","content":"<thinking>Reading files"}"#,
        );
        match reply {
            StreamServerMessage::Classification { result } => {
                assert_eq!(result.status, ThinkingStatus::Thinking);
                assert_eq!(result.current_step, "Reading files");
            }
            other => panic!("Expected classification, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_content_is_idle() {
        match respond(Classifier::global(), r#"{"type":"snapshot"}"#) {
            StreamServerMessage::Classification { result } => {
                assert_eq!(result.status, ThinkingStatus::Idle);
                assert!(!result.has_content);
            }
            other => panic!("Expected classification, got {:?}", other),
        }
    }

    #[test]
    fn test_ping() {
        match respond(Classifier::global(), r#"{"type":"ping","timestamp":42}"#) {
            StreamServerMessage::Pong { timestamp } => assert_eq!(timestamp, 42),
            other => panic!("Expected pong, got {:?}", other),
        }
    }

    #[test]
    fn test_garbage_frame() {
        assert!(matches!(
            respond(Classifier::global(), "not json"),
            StreamServerMessage::Error { .. }
        ));
    }
}
