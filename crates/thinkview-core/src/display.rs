//! Rendering decision for one thinking block.

use thinkview_types::{COMPACT_TEXT_LENGTH, DisplayDecision, DisplayOptions, ThinkingStatus};

use crate::Classifier;
use crate::classifier::char_len;

impl Classifier {
    /// Decide how the host renders `content`.
    ///
    /// Unreadable content is hidden in every mode. In condensed mode content
    /// that needs attention gets a compact view; everything else gets the
    /// progress indicator.
    pub fn decide_display(&self, content: &str, options: &DisplayOptions) -> DisplayDecision {
        let delimiters = self.delimiters();
        if !delimiters.is_readable(content) {
            return DisplayDecision::Hidden;
        }

        let is_thinking = delimiters.is_open_without_close(content);
        let is_complete = delimiters.is_complete_or_closed(content);
        let stripped = delimiters.strip_first(content);

        if !options.show_thinking {
            let data = self.format_for_simple_display(content);

            if data.requires_attention {
                let text: String = if data.summary.is_empty() {
                    stripped.chars().take(COMPACT_TEXT_LENGTH).collect()
                } else {
                    data.summary
                };
                return DisplayDecision::Compact {
                    text,
                    is_thinking,
                    is_complete,
                };
            }

            let current_step = if !data.current_step.is_empty() {
                data.current_step
            } else if is_thinking {
                ThinkingStatus::Thinking.label().to_string()
            } else {
                ThinkingStatus::Complete.label().to_string()
            };

            return DisplayDecision::ProgressIndicator {
                status: data.status,
                current_step,
                progress: data.progress,
                show_progress: data.status == ThinkingStatus::Thinking,
            };
        }

        let can_expand = char_len(&stripped) > options.preview_length;
        DisplayDecision::Full {
            text: stripped,
            is_thinking,
            is_complete,
            can_expand,
            auto_expand: is_thinking && can_expand,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use thinkview_types::{COMPACT_PREVIEW_LENGTH, DEFAULT_PREVIEW_LENGTH};

    fn condensed() -> DisplayOptions {
        DisplayOptions::default()
    }

    fn full(preview_length: usize) -> DisplayOptions {
        DisplayOptions {
            show_thinking: true,
            preview_length,
        }
    }

    #[test]
    fn test_unreadable_is_hidden_in_both_modes() {
        let classifier = Classifier::global();
        for content in ["", "   ", "<thinking>\n</thinking>", "\u{FEFF}<thinking>\u{FEFF}"] {
            assert!(classifier.decide_display(content, &condensed()).is_hidden());
            assert!(classifier.decide_display(content, &full(DEFAULT_PREVIEW_LENGTH)).is_hidden());
        }
    }

    #[test]
    fn test_condensed_shows_progress_indicator() {
        let decision = Classifier::global()
            .decide_display("<thinking>Reading the schema file", &condensed());

        match decision {
            DisplayDecision::ProgressIndicator {
                status,
                current_step,
                show_progress,
                ..
            } => {
                assert_eq!(status, ThinkingStatus::Thinking);
                assert_eq!(current_step, "Reading the schema file");
                assert!(show_progress);
            }
            other => panic!("Expected progress indicator, got {:?}", other),
        }
    }

    #[test]
    fn test_condensed_falls_back_to_status_label() {
        let decision = Classifier::global().decide_display("<thinking>hmm", &condensed());
        match decision {
            DisplayDecision::ProgressIndicator { current_step, .. } => {
                assert_eq!(current_step, "Thinking...");
            }
            other => panic!("Expected progress indicator, got {:?}", other),
        }

        let decision = Classifier::global().decide_display("<thinking>ok</thinking>", &condensed());
        match decision {
            DisplayDecision::ProgressIndicator {
                current_step,
                show_progress,
                ..
            } => {
                assert_eq!(current_step, "Complete");
                assert!(!show_progress);
            }
            other => panic!("Expected progress indicator, got {:?}", other),
        }
    }

    #[test]
    fn test_attention_content_is_compact_not_hidden() {
        let decision = Classifier::global()
            .decide_display("<thinking>Please provide the target branch", &condensed());

        match decision {
            DisplayDecision::Compact {
                text, is_thinking, ..
            } => {
                assert_eq!(text, "Please provide the target branch");
                assert!(is_thinking);
            }
            other => panic!("Expected compact view, got {:?}", other),
        }
    }

    #[test]
    fn test_full_mode_expansion() {
        let long = format!("<thinking>{}", "a".repeat(40));

        match Classifier::global().decide_display(&long, &full(DEFAULT_PREVIEW_LENGTH)) {
            DisplayDecision::Full {
                can_expand,
                auto_expand,
                ..
            } => {
                assert!(!can_expand);
                assert!(!auto_expand);
            }
            other => panic!("Expected full view, got {:?}", other),
        }

        match Classifier::global().decide_display(&long, &full(COMPACT_PREVIEW_LENGTH)) {
            DisplayDecision::Full {
                text,
                is_thinking,
                can_expand,
                auto_expand,
                ..
            } => {
                assert_eq!(text, "a".repeat(40));
                assert!(is_thinking);
                assert!(can_expand);
                assert!(auto_expand);
            }
            other => panic!("Expected full view, got {:?}", other),
        }
    }

    #[test]
    fn test_full_mode_closed_block_does_not_auto_expand() {
        let content = format!("<thinking>{}</thinking>", "b".repeat(80));
        match Classifier::global().decide_display(&content, &full(DEFAULT_PREVIEW_LENGTH)) {
            DisplayDecision::Full {
                is_complete,
                can_expand,
                auto_expand,
                ..
            } => {
                assert!(is_complete);
                assert!(can_expand);
                assert!(!auto_expand);
            }
            other => panic!("Expected full view, got {:?}", other),
        }
    }
}
