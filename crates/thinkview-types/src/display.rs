//! Rendering decisions for a thinking block.
//!
//! The host either shows the full trace or a condensed indicator. Content that
//! needs the user's attention is never hidden entirely; it gets a compact view
//! instead of the indicator.

use serde::{Deserialize, Serialize};

use crate::ThinkingStatus;

/// Preview length used on regular screens.
pub const DEFAULT_PREVIEW_LENGTH: usize = 50;

/// Preview length used on narrow screens.
pub const COMPACT_PREVIEW_LENGTH: usize = 25;

/// Max chars of stripped content shown in the compact view when no summary exists.
pub const COMPACT_TEXT_LENGTH: usize = 200;

/// Host-side inputs to the rendering decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayOptions {
    /// Show the full trace instead of the condensed indicator
    pub show_thinking: bool,
    /// Stripped length above which the full view can expand
    pub preview_length: usize,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_thinking: false,
            preview_length: DEFAULT_PREVIEW_LENGTH,
        }
    }
}

/// How a thinking block should be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum DisplayDecision {
    /// Nothing readable; render nothing.
    Hidden,
    /// Condensed indicator.
    ProgressIndicator {
        status: ThinkingStatus,
        current_step: String,
        progress: u8,
        /// Only drawn while the block is still streaming
        show_progress: bool,
    },
    /// Condensed mode, but the content needs the user's attention.
    Compact {
        text: String,
        is_thinking: bool,
        is_complete: bool,
    },
    /// Full trace.
    Full {
        text: String,
        is_thinking: bool,
        is_complete: bool,
        can_expand: bool,
        auto_expand: bool,
    },
}

impl DisplayDecision {
    pub fn is_hidden(&self) -> bool {
        matches!(self, DisplayDecision::Hidden)
    }
}
