//! WebSocket message protocol for streaming classification.

use serde::{Deserialize, Serialize};

use crate::ClassificationResult;

/// Messages sent from client to server.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamClientMessage {
    /// Latest snapshot of the streaming content.
    /// A missing `content` field classifies as empty input.
    Snapshot {
        #[serde(default)]
        content: Option<String>,
    },
    /// Ping for keepalive.
    Ping { timestamp: u64 },
}

/// Messages sent from server to client.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamServerMessage {
    /// Classification of the most recent snapshot.
    Classification { result: ClassificationResult },
    /// Pong response to ping.
    Pong { timestamp: u64 },
    /// The client frame could not be understood.
    Error { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_without_content() {
        let msg: StreamClientMessage = serde_json::from_str(r#"{"type":"snapshot"}"#).unwrap();
        match msg {
            StreamClientMessage::Snapshot { content } => assert!(content.is_none()),
            other => panic!("Expected snapshot, got {:?}", other),
        }
    }

    #[test]
    fn test_pong_shape() {
        let json = serde_json::to_string(&StreamServerMessage::Pong { timestamp: 7 }).unwrap();
        assert_eq!(json, r#"{"type":"pong","timestamp":7}"#);
    }
}
