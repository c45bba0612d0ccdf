//! Classification output for a snapshot of streaming thinking content.

use serde::{Deserialize, Serialize};

/// Coarse state of a thinking trace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThinkingStatus {
    /// Nothing readable yet.
    #[default]
    Idle,
    /// A thinking block is open and still streaming.
    Thinking,
    /// The trace finished, explicitly or by default.
    Complete,
    /// The trace reports an error or failure.
    Error,
}

impl ThinkingStatus {
    /// Short text shown next to the progress indicator.
    pub fn label(&self) -> &'static str {
        match self {
            ThinkingStatus::Idle => "Idle",
            ThinkingStatus::Thinking => "Thinking...",
            ThinkingStatus::Complete => "Complete",
            ThinkingStatus::Error => "Error",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThinkingStatus::Idle => "idle",
            ThinkingStatus::Thinking => "thinking",
            ThinkingStatus::Complete => "complete",
            ThinkingStatus::Error => "error",
        }
    }
}

impl std::fmt::Display for ThinkingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Condensed view of one content snapshot.
///
/// Every field is recomputed from scratch on each call; two snapshots never
/// share state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassificationResult {
    /// Most recent action-bearing line, empty if none qualified
    pub current_step: String,
    pub status: ThinkingStatus,
    /// Estimate in `0..=100`
    pub progress: u8,
    /// Bounded-length narrative
    pub summary: String,
    /// Set for errors and requests for user input
    pub requires_attention: bool,
    /// Whether the trimmed raw content is non-empty
    pub has_content: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&ThinkingStatus::Thinking).unwrap();
        assert_eq!(json, "\"thinking\"");

        let status: ThinkingStatus = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(status, ThinkingStatus::Error);
    }

    #[test]
    fn test_result_uses_camel_case_fields() {
        let result = ClassificationResult {
            current_step: "Analyzing input".to_string(),
            status: ThinkingStatus::Complete,
            progress: 100,
            summary: "Analyzing input".to_string(),
            requires_attention: false,
            has_content: true,
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["currentStep"], "Analyzing input");
        assert_eq!(value["status"], "complete");
        assert_eq!(value["progress"], 100);
        assert_eq!(value["requiresAttention"], false);
        assert_eq!(value["hasContent"], true);
    }

    #[test]
    fn test_default_result_is_idle() {
        let result = ClassificationResult::default();
        assert_eq!(result.status, ThinkingStatus::Idle);
        assert_eq!(result.progress, 0);
        assert!(result.current_step.is_empty());
        assert!(!result.has_content);
    }
}
