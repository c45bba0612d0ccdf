//! Classification routes.

use crate::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thinkview_types::{ClassificationResult, DisplayDecision, DisplayOptions};

/// Body for `POST /api/classify`. A missing `content` classifies as empty.
#[derive(Debug, Default, Deserialize)]
pub struct ClassifyRequest {
    #[serde(default)]
    pub content: Option<String>,
}

/// POST /api/classify - Classify one content snapshot.
pub async fn classify(
    State(state): State<Arc<AppState>>,
    Json(req): Json<ClassifyRequest>,
) -> Json<ClassificationResult> {
    let content = req.content.unwrap_or_default();
    let result = state.classifier.format_for_simple_display(&content);
    tracing::debug!(
        target: "thinkview::api",
        "Classified snapshot ({} bytes): {}",
        content.len(),
        result.status
    );
    Json(result)
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayRequest {
    #[serde(default)]
    pub content: Option<String>,
    /// Falls back to the configured default
    #[serde(default)]
    pub show_thinking: Option<bool>,
    #[serde(default)]
    pub preview_length: Option<usize>,
}

/// POST /api/display - Decide how a thinking block should render.
pub async fn display(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DisplayRequest>,
) -> Json<DisplayDecision> {
    let defaults = state.config.display_options();
    let options = DisplayOptions {
        show_thinking: req.show_thinking.unwrap_or(defaults.show_thinking),
        preview_length: req.preview_length.unwrap_or(defaults.preview_length),
    };
    let content = req.content.unwrap_or_default();
    Json(state.classifier.decide_display(&content, &options))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRequest {
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub max_length: Option<usize>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}

/// POST /api/summary - Summary with a caller-chosen length bound.
pub async fn summary(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SummaryRequest>,
) -> Json<SummaryResponse> {
    let max_length = req.max_length.unwrap_or(state.config.summary_max_length);
    let content = req.content.unwrap_or_default();
    Json(SummaryResponse {
        summary: state.classifier.extract_summary(&content, max_length),
    })
}
