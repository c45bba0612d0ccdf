//! Thinking-content classifier.
//!
//! Turns a raw, possibly partial snapshot of a model's thinking trace into a
//! [`ClassificationResult`]: status, current step, progress, summary and an
//! attention flag. Every operation is a pure function of its input string.
//!
//! The free functions below use the built-in keyword tables. Build a
//! [`Classifier`] from custom [`KeywordTables`] to extend or localize them.

mod attention;
mod classifier;
mod delimiters;
mod display;
mod error;
mod keywords;
mod progress;
mod step;
mod status;
mod summary;

pub use classifier::Classifier;
pub use delimiters::{Delimiters, is_space, strip_markup, trim_space};
pub use error::ThinkviewError;
pub use keywords::{KeywordExtensions, KeywordTables};
pub use summary::DEFAULT_SUMMARY_LENGTH;

use thinkview_types::{ClassificationResult, DisplayDecision, DisplayOptions, ThinkingStatus};

/// Result type for Thinkview operations.
pub type Result<T> = std::result::Result<T, ThinkviewError>;

/// Classify a snapshot with the built-in tables.
pub fn format_for_simple_display(content: &str) -> ClassificationResult {
    Classifier::global().format_for_simple_display(content)
}

pub fn detect_status(content: &str) -> ThinkingStatus {
    Classifier::global().detect_status(content)
}

pub fn extract_current_step(content: &str) -> String {
    Classifier::global().extract_current_step(content)
}

pub fn calculate_progress(content: &str) -> u8 {
    Classifier::global().calculate_progress(content)
}

pub fn extract_summary(content: &str, max_length: usize) -> String {
    Classifier::global().extract_summary(content, max_length)
}

pub fn requires_attention(content: &str) -> bool {
    Classifier::global().requires_attention(content)
}

/// Whether anything but delimiters and whitespace is left in `content`.
pub fn content_is_readable(content: &str) -> bool {
    Classifier::global().delimiters().is_readable(content)
}

pub fn decide_display(content: &str, options: &DisplayOptions) -> DisplayDecision {
    Classifier::global().decide_display(content, options)
}
