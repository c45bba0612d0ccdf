//! Status detection.

use thinkview_types::ThinkingStatus;

use crate::Classifier;
use crate::delimiters::{strip_markup, trim_space};
use crate::keywords::contains_any;

impl Classifier {
    /// Classify `content` as idle, thinking, complete or error.
    ///
    /// Signals are lexical, checked in order: error patterns, completion
    /// keywords, an open block with no close, then any remaining text counts
    /// as complete.
    pub fn detect_status(&self, content: &str) -> ThinkingStatus {
        let lower = strip_markup(content).to_lowercase();

        if self.matches_error(&lower) {
            return ThinkingStatus::Error;
        }

        if contains_any(&lower, &self.tables().completion) {
            return ThinkingStatus::Complete;
        }

        if self.delimiters().is_open_without_close(content) {
            return ThinkingStatus::Thinking;
        }

        if !trim_space(&lower).is_empty() {
            return ThinkingStatus::Complete;
        }

        ThinkingStatus::Idle
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(content: &str) -> ThinkingStatus {
        Classifier::global().detect_status(content)
    }

    #[test]
    fn test_empty_is_idle() {
        assert_eq!(detect(""), ThinkingStatus::Idle);
        assert_eq!(detect("   \n"), ThinkingStatus::Idle);
        assert_eq!(detect("<thinking></thinking>"), ThinkingStatus::Idle);
        assert_eq!(detect("\u{FEFF}"), ThinkingStatus::Idle);
        assert_eq!(detect("<thinking>\u{FEFF}\n</thinking>"), ThinkingStatus::Idle);
    }

    #[test]
    fn test_open_block_is_thinking() {
        assert_eq!(detect("<thinking>partial"), ThinkingStatus::Thinking);
        assert_eq!(detect("<thought>"), ThinkingStatus::Thinking);
    }

    #[test]
    fn test_closed_block_with_keyword() {
        assert_eq!(detect("<thinking>done</thinking>"), ThinkingStatus::Complete);
    }

    #[test]
    fn test_closed_block_without_keyword_defaults_to_complete() {
        assert_eq!(detect("<thinking>pondering</thinking>"), ThinkingStatus::Complete);
        assert_eq!(detect("plain text with no tags"), ThinkingStatus::Complete);
    }

    #[test]
    fn test_completion_keyword_wins_over_open_block() {
        assert_eq!(detect("<thinking>Step finished, moving on"), ThinkingStatus::Complete);
    }

    #[test]
    fn test_error_wins_regardless_of_tags() {
        assert_eq!(detect("An error occurred"), ThinkingStatus::Error);
        assert_eq!(detect("<thinking>An error occurred"), ThinkingStatus::Error);
        assert_eq!(detect("<thinking>An error occurred</thinking>"), ThinkingStatus::Error);
        assert_eq!(detect("Task completed but an Exception was logged"), ThinkingStatus::Error);
    }

    #[test]
    fn test_chinese_keywords() {
        assert_eq!(detect("<thinking>讀取檔案時發生錯誤"), ThinkingStatus::Error);
        assert_eq!(detect("<thinking>分析已完成"), ThinkingStatus::Complete);
    }

    #[test]
    fn test_error_tag_names_are_ignored() {
        // only the tag carries the word; the text itself is clean
        assert_eq!(detect("<error>pondering"), ThinkingStatus::Complete);
    }
}
