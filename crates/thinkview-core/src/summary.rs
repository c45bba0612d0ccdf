//! Summary extraction.

use crate::Classifier;
use crate::classifier::char_len;
use crate::delimiters::{strip_markup, trim_space};

/// Summary length used by [`Classifier::format_for_simple_display`].
pub const DEFAULT_SUMMARY_LENGTH: usize = 100;

const ELLIPSIS: &str = "...";

fn is_sentence_end(c: char) -> bool {
    matches!(c, '.' | '!' | '?' | '。' | '！' | '？')
}

/// Space-joined sentences with a running char count.
#[derive(Default)]
struct SummaryBuilder {
    text: String,
    len: usize,
}

impl SummaryBuilder {
    /// The `+ 1` for the separator is counted even for the first sentence.
    fn fits(&self, sentence: &str, max_length: usize) -> bool {
        self.len + char_len(sentence) + 1 <= max_length
    }

    fn push(&mut self, sentence: &str) {
        if !self.text.is_empty() {
            self.text.push(' ');
            self.len += 1;
        }
        self.text.push_str(sentence);
        self.len += char_len(sentence);
    }
}

fn truncate_with_ellipsis(text: &str, max_length: usize) -> String {
    if char_len(text) <= max_length {
        return text.to_string();
    }
    if max_length < ELLIPSIS.len() {
        return text.chars().take(max_length).collect();
    }
    let mut truncated: String = text.chars().take(max_length - ELLIPSIS.len()).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

impl Classifier {
    /// Condensed narrative of at most `max_length` chars.
    ///
    /// Sentences with important keywords are preferred and joined greedily
    /// until the next one would overflow. A summary under half the budget is
    /// topped up with any other sentence that still fits. If nothing fits,
    /// the cleaned text is truncated with an ellipsis.
    pub fn extract_summary(&self, content: &str, max_length: usize) -> String {
        let clean = strip_markup(content);
        let sentences: Vec<&str> = clean
            .split(is_sentence_end)
            .map(trim_space)
            .filter(|s| !s.is_empty())
            .collect();

        if sentences.is_empty() {
            return String::new();
        }

        let important: Vec<&str> = sentences
            .iter()
            .copied()
            .filter(|s| self.has_important_keyword(s))
            .collect();
        let selected = if important.is_empty() { &sentences } else { &important };

        let mut summary = SummaryBuilder::default();
        for sentence in selected {
            if !summary.fits(sentence, max_length) {
                break;
            }
            summary.push(sentence);
        }

        if summary.len * 2 < max_length {
            for sentence in &sentences {
                if !summary.text.contains(sentence) && summary.fits(sentence, max_length) {
                    summary.push(sentence);
                }
            }
        }

        if summary.text.is_empty() {
            return truncate_with_ellipsis(&clean, max_length);
        }

        summary.text
    }
}
