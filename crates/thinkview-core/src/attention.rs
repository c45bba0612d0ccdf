//! Attention detection.

use crate::Classifier;
use crate::delimiters::strip_markup;
use crate::keywords::contains_any;

impl Classifier {
    /// Whether the content reports an error or asks the user for input.
    ///
    /// Such content must stay visible in the condensed display mode.
    pub fn requires_attention(&self, content: &str) -> bool {
        let lower = strip_markup(content).to_lowercase();
        self.matches_error(&lower) || contains_any(&lower, &self.tables().attention)
    }
}
