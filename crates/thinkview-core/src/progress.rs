//! Progress estimation.

use once_cell::sync::Lazy;
use regex::Regex;
use thinkview_types::ThinkingStatus;

use crate::Classifier;
use crate::classifier::char_len;
use crate::delimiters::{SPACE_CLASS, strip_markup};

/// Length-based estimates never pass this without an explicit signal.
const MAX_ESTIMATED_PROGRESS: f64 = 90.0;

/// Chars of cleaned content that count as a full estimate.
const FULL_LENGTH: f64 = 1000.0;

static PERCENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)%").expect("Invalid percent regex"));

static RATIO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([0-9]+)/([0-9]+)").expect("Invalid ratio regex"));

static STEP_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!(r"(?i)step{SPACE_CLASS}+([0-9]+)")).expect("Invalid step regex"));

/// Digits beyond `u64` saturate; they clamp to 100 anyway.
fn parse_number(digits: &str) -> u64 {
    digits.parse().unwrap_or(u64::MAX)
}

fn clamp_percent(value: u64) -> u8 {
    value.min(100) as u8
}

/// First explicit progress token in `clean`, in priority order.
///
/// `step N` yields `N` itself rather than a percentage; callers depend on that.
fn explicit_progress(clean: &str) -> Option<u8> {
    if let Some(caps) = PERCENT_RE.captures(clean) {
        return Some(clamp_percent(parse_number(&caps[1])));
    }

    if let Some(caps) = RATIO_RE.captures(clean) {
        let current = parse_number(&caps[1]) as f64;
        let total = parse_number(&caps[2]) as f64;
        if total == 0.0 {
            return Some(0);
        }
        let percent = (current / total * 100.0).round().min(100.0);
        return Some(percent as u8);
    }

    STEP_RE
        .captures(clean)
        .map(|caps| clamp_percent(parse_number(&caps[1])))
}

impl Classifier {
    /// Estimate progress in `0..=100`.
    ///
    /// Explicit tokens (`N%`, `A/B`, `step N`) win. Otherwise a complete trace
    /// reports 100, an errored one 0, and anything else a length-based
    /// estimate capped at 90.
    pub fn calculate_progress(&self, content: &str) -> u8 {
        let clean = strip_markup(content);

        if let Some(progress) = explicit_progress(&clean) {
            return progress;
        }

        match self.detect_status(content) {
            ThinkingStatus::Complete => 100,
            ThinkingStatus::Error => 0,
            ThinkingStatus::Idle | ThinkingStatus::Thinking => {
                let estimate = char_len(&clean) as f64 / FULL_LENGTH * 100.0;
                estimate.min(MAX_ESTIMATED_PROGRESS).round() as u8
            }
        }
    }
}
