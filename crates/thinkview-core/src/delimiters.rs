//! Thinking-block delimiter recognition.
//!
//! Three matchers are built from the tag tables:
//! - open: `<thinking ...>` for any open tag
//! - close: `</thinking ...>` for any close tag
//! - complete: an open tag, a non-greedy body, and its own close tag
//!
//! Tag names are matched case-sensitively and any attributes inside the angle
//! brackets are tolerated.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::Result;

/// Any markup tag at all, not just thinking delimiters.
static MARKUP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("Invalid markup regex"));

/// Whitespace as browsers define it: includes the BOM (U+FEFF), excludes NEL (U+0085).
pub fn is_space(c: char) -> bool {
    c == '\u{FEFF}' || (c != '\u{0085}' && c.is_whitespace())
}

/// Trim leading and trailing [`is_space`] chars.
pub fn trim_space(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Regex class matching exactly the chars [`is_space`] accepts.
pub(crate) const SPACE_CLASS: &str = r"[[\s\x{FEFF}]--\x{85}]";

/// Remove every `<...>` tag from `content`.
pub fn strip_markup(content: &str) -> Cow<'_, str> {
    MARKUP_RE.replace_all(content, "")
}

/// Compiled open/close/complete matchers for one tag table.
#[derive(Debug, Clone)]
pub struct Delimiters {
    open: Regex,
    close: Regex,
    complete: Regex,
}

impl Delimiters {
    pub fn new(open_tags: &[String], close_tags: &[String]) -> Result<Self> {
        let open = open_tags
            .iter()
            .map(|tag| format!(r"<{}{SPACE_CLASS}*(?:[^>]*?)?{SPACE_CLASS}*>", regex::escape(tag)))
            .collect::<Vec<_>>()
            .join("|");

        let close = close_tags
            .iter()
            .map(|tag| format!(r"</{}{SPACE_CLASS}*(?:[^>]*?)?>", regex::escape(tag)))
            .collect::<Vec<_>>()
            .join("|");

        let complete = open_tags
            .iter()
            .map(|tag| {
                let tag = regex::escape(tag);
                format!(
                    r"<{tag}{SPACE_CLASS}*(?:[^>]*?)?{SPACE_CLASS}*>(?s:.)*?</{tag}{SPACE_CLASS}*(?:[^>]*?)?>"
                )
            })
            .collect::<Vec<_>>()
            .join("|");

        Ok(Self {
            open: Regex::new(&open)?,
            close: Regex::new(&close)?,
            complete: Regex::new(&complete)?,
        })
    }

    pub fn has_open(&self, content: &str) -> bool {
        self.open.is_match(content)
    }

    pub fn has_close(&self, content: &str) -> bool {
        self.close.is_match(content)
    }

    /// A thinking block is open and still streaming.
    pub fn is_open_without_close(&self, content: &str) -> bool {
        self.has_open(content) && !self.has_close(content)
    }

    /// A thinking block has finished.
    pub fn is_complete_or_closed(&self, content: &str) -> bool {
        self.complete.is_match(content) || self.has_close(content)
    }

    /// Remove the first open delimiter, then the first close delimiter.
    ///
    /// Later delimiters stay in place, so content with several thinking
    /// blocks keeps its inner tags. See [`Delimiters::strip_all`].
    pub fn strip_first(&self, content: &str) -> String {
        let without_open = self.open.replace(content, "");
        self.close.replace(&without_open, "").into_owned()
    }

    /// Remove every open and close delimiter.
    pub fn strip_all(&self, content: &str) -> String {
        let without_open = self.open.replace_all(content, "");
        self.close.replace_all(&without_open, "").into_owned()
    }

    /// Whether anything but delimiters and whitespace is left after
    /// [`Delimiters::strip_first`].
    pub fn is_readable(&self, content: &str) -> bool {
        self.strip_first(trim_space(content))
            .chars()
            .any(|c| !is_space(c))
    }
}
