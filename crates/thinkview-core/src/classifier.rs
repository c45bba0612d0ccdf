//! Classifier built from a set of keyword tables.

use once_cell::sync::Lazy;
use thinkview_types::ClassificationResult;
use tracing::{debug, trace};

use crate::delimiters::{Delimiters, trim_space};
use crate::keywords::{KeywordTables, contains_any};
use crate::summary::DEFAULT_SUMMARY_LENGTH;
use crate::Result;

static DEFAULT_CLASSIFIER: Lazy<Classifier> = Lazy::new(|| {
    Classifier::new(KeywordTables::default()).expect("Invalid built-in keyword tables")
});

/// Stateless classifier for thinking-content snapshots.
///
/// Holds only immutable tables and compiled matchers, so one instance can be
/// shared freely across threads. Every method recomputes its answer from the
/// input alone.
#[derive(Debug, Clone)]
pub struct Classifier {
    tables: KeywordTables,
    delimiters: Delimiters,
}

impl Classifier {
    /// Validate `tables` and compile the delimiter matchers.
    pub fn new(tables: KeywordTables) -> Result<Self> {
        tables.validate()?;
        let delimiters = Delimiters::new(&tables.open_tags, &tables.close_tags())?;
        debug!(
            target: "thinkview::classifier",
            "Built classifier ({} important keywords, {} open tags)",
            tables.important.len(),
            tables.open_tags.len()
        );

        Ok(Self {
            tables: tables.normalized(),
            delimiters,
        })
    }

    /// Shared classifier over the built-in tables.
    pub fn global() -> &'static Classifier {
        &DEFAULT_CLASSIFIER
    }

    pub fn tables(&self) -> &KeywordTables {
        &self.tables
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    /// Classify one snapshot. Each part is computed independently from `content`.
    pub fn format_for_simple_display(&self, content: &str) -> ClassificationResult {
        let result = ClassificationResult {
            current_step: self.extract_current_step(content),
            status: self.detect_status(content),
            progress: self.calculate_progress(content),
            summary: self.extract_summary(content, DEFAULT_SUMMARY_LENGTH),
            requires_attention: self.requires_attention(content),
            has_content: !trim_space(content).is_empty(),
        };

        trace!(
            target: "thinkview::classifier",
            "Classified {} chars: status={} progress={}",
            content.len(),
            result.status,
            result.progress
        );

        result
    }

    pub(crate) fn has_important_keyword(&self, text: &str) -> bool {
        contains_any(&text.to_lowercase(), &self.tables.important)
    }

    /// `lower` must already be lower-cased.
    pub(crate) fn matches_error(&self, lower: &str) -> bool {
        contains_any(lower, &self.tables.error_patterns)
    }
}

/// Length in chars, which is what every bound in the classifier counts.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::KeywordExtensions;
    use thinkview_types::ThinkingStatus;

    #[test]
    fn test_empty_input_gives_defaults() {
        let result = Classifier::global().format_for_simple_display("");
        assert_eq!(result, ClassificationResult::default());
    }

    #[test]
    fn test_whitespace_only_has_no_content() {
        let result = Classifier::global().format_for_simple_display("  \n\t ");
        assert!(!result.has_content);
        assert_eq!(result.status, ThinkingStatus::Idle);
    }

    #[test]
    fn test_bom_only_stream_is_empty() {
        let result = Classifier::global().format_for_simple_display("\u{FEFF}");
        assert!(!result.has_content);
        assert_eq!(result.status, ThinkingStatus::Idle);
        assert_eq!(result.progress, 0);
        assert!(result.summary.is_empty());
    }

    #[test]
    fn test_nel_counts_as_content() {
        let result = Classifier::global().format_for_simple_display("\u{0085}");
        assert!(result.has_content);
    }

    #[test]
    fn test_streaming_snapshot() {
        let content = "<thinking>\nLet me look at this.\nReading the configuration file";
        let result = Classifier::global().format_for_simple_display(content);

        assert!(result.has_content);
        assert_eq!(result.status, ThinkingStatus::Thinking);
        assert_eq!(result.current_step, "Reading the configuration file");
        assert!(!result.requires_attention);
        assert!(result.progress < 90);
    }

    #[test]
    fn test_error_snapshot_requires_attention() {
        let content = "<thinking>Reading input\nThe build failed with exit code 2</thinking>";
        let result = Classifier::global().format_for_simple_display(content);

        assert_eq!(result.status, ThinkingStatus::Error);
        assert_eq!(result.progress, 0);
        assert!(result.requires_attention);
        assert_eq!(result.current_step, "The build failed with exit code 2");
    }

    #[test]
    fn test_is_idempotent() {
        let content = "<think>Step one: analyzing the data. 2/5 files read.</think>";
        let classifier = Classifier::global();
        assert_eq!(
            classifier.format_for_simple_display(content),
            classifier.format_for_simple_display(content)
        );
    }

    #[test]
    fn test_custom_open_tag() {
        let tables = KeywordTables::default().extended(&KeywordExtensions {
            open_tags: vec!["reasoning".into()],
            ..Default::default()
        });
        let classifier = Classifier::new(tables).unwrap();

        assert_eq!(classifier.detect_status("<reasoning>hmm"), ThinkingStatus::Thinking);
        assert_eq!(Classifier::global().detect_status("<reasoning>hmm"), ThinkingStatus::Complete);
    }

    #[test]
    fn test_custom_attention_phrase_is_case_insensitive() {
        let tables = KeywordTables::default().extended(&KeywordExtensions {
            attention: vec!["Awaiting Approval".into()],
            ..Default::default()
        });
        let classifier = Classifier::new(tables).unwrap();

        assert!(classifier.requires_attention("Plan ready, awaiting approval"));
        assert!(!Classifier::global().requires_attention("Plan ready, awaiting approval"));
    }

    #[test]
    fn test_invalid_tables_rejected() {
        let tables = KeywordTables {
            open_tags: vec!["bad tag".into()],
            ..Default::default()
        };
        assert!(Classifier::new(tables).is_err());
    }
}
