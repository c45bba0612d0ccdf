//! Error types for Thinkview.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThinkviewError {
    #[error("Invalid keyword in {table} table: {keyword:?}")]
    InvalidKeyword { table: &'static str, keyword: String },

    #[error("Keyword table must not be empty: {0}")]
    EmptyTable(&'static str),

    #[error("Pattern error: {0}")]
    PatternError(#[from] regex::Error),
}
