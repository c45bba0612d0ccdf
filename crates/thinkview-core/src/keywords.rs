//! Keyword and phrase tables driving the classifier.
//!
//! English and Traditional Chinese entries share each table; matching is plain
//! case-insensitive substring containment over the union, with no language
//! detection.

use serde::Deserialize;

use crate::{Result, ThinkviewError};

/// Action and state words that mark a line or sentence as worth showing.
const IMPORTANT_KEYWORDS: &[&str] = &[
    // actions
    "search",
    "found",
    "analyzing",
    "processing",
    "generating",
    "creating",
    "reading",
    "writing",
    "calculating",
    "executing",
    "completing",
    // states
    "error",
    "failed",
    "success",
    "completed",
    "finished",
    "done",
    "搜尋",
    "找到",
    "分析",
    "處理",
    "生成",
    "創建",
    "讀取",
    "寫入",
    "計算",
    "執行",
    "完成",
    "錯誤",
    "失敗",
    "成功",
    "已完成",
    "結束",
    "完畢",
];

const ERROR_PATTERNS: &[&str] = &["error", "failed", "exception", "錯誤", "失敗", "異常"];

const COMPLETION_KEYWORDS: &[&str] = &[
    "completed",
    "finished",
    "done",
    "success",
    "完成",
    "結束",
    "成功",
];

/// Phrases that mean the model is waiting on the user.
const ATTENTION_PHRASES: &[&str] = &[
    "input required",
    "please provide",
    "need more information",
    "clarification needed",
    "user confirmation",
    "需要輸入",
    "請提供",
    "需要更多資訊",
    "需要確認",
    "使用者確認",
];

const OPEN_TAGS: &[&str] = &["thought", "thinking", "think", "thought_chain"];

/// Tags that close a thinking block in addition to the open tags themselves.
const EXTRA_CLOSE_TAGS: &[&str] = &["response", "answer"];

fn owned(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

/// Full set of tables one [`crate::Classifier`] works from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTables {
    pub important: Vec<String>,
    pub error_patterns: Vec<String>,
    pub completion: Vec<String>,
    pub attention: Vec<String>,
    pub open_tags: Vec<String>,
    pub extra_close_tags: Vec<String>,
}

impl Default for KeywordTables {
    fn default() -> Self {
        Self {
            important: owned(IMPORTANT_KEYWORDS),
            error_patterns: owned(ERROR_PATTERNS),
            completion: owned(COMPLETION_KEYWORDS),
            attention: owned(ATTENTION_PHRASES),
            open_tags: owned(OPEN_TAGS),
            extra_close_tags: owned(EXTRA_CLOSE_TAGS),
        }
    }
}

/// Extra entries appended to the built-in tables, usually read from config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KeywordExtensions {
    pub important: Vec<String>,
    pub error_patterns: Vec<String>,
    pub completion: Vec<String>,
    pub attention: Vec<String>,
    pub open_tags: Vec<String>,
    pub extra_close_tags: Vec<String>,
}

impl KeywordExtensions {
    pub fn is_empty(&self) -> bool {
        self.important.is_empty()
            && self.error_patterns.is_empty()
            && self.completion.is_empty()
            && self.attention.is_empty()
            && self.open_tags.is_empty()
            && self.extra_close_tags.is_empty()
    }
}

impl KeywordTables {
    /// Append extension entries, skipping ones already present.
    pub fn extended(mut self, extensions: &KeywordExtensions) -> Self {
        append_unique(&mut self.important, &extensions.important);
        append_unique(&mut self.error_patterns, &extensions.error_patterns);
        append_unique(&mut self.completion, &extensions.completion);
        append_unique(&mut self.attention, &extensions.attention);
        append_unique(&mut self.open_tags, &extensions.open_tags);
        append_unique(&mut self.extra_close_tags, &extensions.extra_close_tags);
        self
    }

    /// Tags accepted as closing delimiters: every open tag plus the extras.
    pub fn close_tags(&self) -> Vec<String> {
        self.open_tags
            .iter()
            .chain(self.extra_close_tags.iter())
            .cloned()
            .collect()
    }

    /// Reject entries that would match everything or break tag syntax.
    pub fn validate(&self) -> Result<()> {
        for (table, entries) in [
            ("important", &self.important),
            ("error_patterns", &self.error_patterns),
            ("completion", &self.completion),
            ("attention", &self.attention),
        ] {
            if let Some(bad) = entries.iter().find(|k| k.trim().is_empty()) {
                return Err(ThinkviewError::InvalidKeyword {
                    table,
                    keyword: bad.clone(),
                });
            }
        }

        if self.open_tags.is_empty() {
            return Err(ThinkviewError::EmptyTable("open_tags"));
        }

        for (table, entries) in [
            ("open_tags", &self.open_tags),
            ("extra_close_tags", &self.extra_close_tags),
        ] {
            if let Some(bad) = entries.iter().find(|t| !is_tag_name(t)) {
                return Err(ThinkviewError::InvalidKeyword {
                    table,
                    keyword: bad.clone(),
                });
            }
        }

        Ok(())
    }

    /// Lower-case the phrase tables so matching can compare against lower-cased text.
    pub(crate) fn normalized(mut self) -> Self {
        for entries in [
            &mut self.important,
            &mut self.error_patterns,
            &mut self.completion,
            &mut self.attention,
        ] {
            for entry in entries.iter_mut() {
                *entry = entry.to_lowercase();
            }
        }
        self
    }
}

fn append_unique(target: &mut Vec<String>, extra: &[String]) {
    for entry in extra {
        if !target.contains(entry) {
            target.push(entry.clone());
        }
    }
}

fn is_tag_name(tag: &str) -> bool {
    !tag.is_empty()
        && tag
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | ':' | '.'))
}

/// True if any entry occurs in `haystack`. Entries must already be lower-case.
pub(crate) fn contains_any(haystack: &str, entries: &[String]) -> bool {
    entries.iter().any(|entry| haystack.contains(entry.as_str()))
}
