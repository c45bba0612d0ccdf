//! Current-step extraction.

use crate::Classifier;
use crate::classifier::char_len;
use crate::delimiters::{strip_markup, trim_space};

/// Lines must be strictly longer than this to serve as a step label.
const MIN_STEP_LENGTH: usize = 5;

/// Lines must be strictly shorter than this to serve as a step label.
const MAX_STEP_LENGTH: usize = 200;

fn within_bounds(line: &str) -> bool {
    let len = char_len(line);
    len > MIN_STEP_LENGTH && len < MAX_STEP_LENGTH
}

impl Classifier {
    /// Best single-line label for what the model is doing right now.
    ///
    /// Scans lines from the end and takes the most recent one carrying an
    /// important keyword. Falls back to the last line, then the first, as long
    /// as they fit the length bounds.
    pub fn extract_current_step(&self, content: &str) -> String {
        let clean = strip_markup(content);
        let lines: Vec<&str> = clean
            .split('\n')
            .map(trim_space)
            .filter(|line| !line.is_empty())
            .collect();

        if let Some(line) = lines
            .iter()
            .rev()
            .find(|line| self.has_important_keyword(line) && within_bounds(line))
        {
            return line.to_string();
        }

        [lines.last(), lines.first()]
            .into_iter()
            .flatten()
            .find(|line| within_bounds(line))
            .map(|line| line.to_string())
            .unwrap_or_default()
    }
}
