//! Shared application state.

use crate::config::Config;
use thinkview_core::Classifier;

/// Shared application state.
pub struct AppState {
    pub classifier: Classifier,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let classifier = config.build_classifier()?;
        Ok(Self { classifier, config })
    }
}
