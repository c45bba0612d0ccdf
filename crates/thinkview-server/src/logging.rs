//! Log filtering for the server's targets.
//!
//! Every target thinkview emits on has one row in [`TARGETS`] giving its level
//! under each [`LogPreset`]. `--log name=level` replaces a single cell, and
//! `RUST_LOG` bypasses the table entirely.

use anyhow::{Context, Result, bail};
use clap::ValueEnum;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Column of [`TARGETS`] to start from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum LogPreset {
    Quiet,
    #[default]
    Normal,
    Debug,
    /// Adds one line per classified snapshot
    Trace,
}

impl LogPreset {
    fn column(self) -> usize {
        match self {
            LogPreset::Quiet => 0,
            LogPreset::Normal => 1,
            LogPreset::Debug => 2,
            LogPreset::Trace => 3,
        }
    }
}

/// A log target and its level per preset, in [`LogPreset`] order.
struct Target {
    /// Short name accepted by `--log`.
    name: &'static str,
    /// `tracing` target the directive applies to.
    target: &'static str,
    levels: [LevelFilter; 4],
}

const TARGETS: &[Target] = &[
    Target {
        name: "startup",
        target: "thinkview::startup",
        levels: [LevelFilter::WARN, LevelFilter::INFO, LevelFilter::DEBUG, LevelFilter::TRACE],
    },
    Target {
        name: "api",
        target: "thinkview::api",
        levels: [LevelFilter::WARN, LevelFilter::INFO, LevelFilter::DEBUG, LevelFilter::TRACE],
    },
    Target {
        name: "ws",
        target: "thinkview::ws",
        levels: [LevelFilter::WARN, LevelFilter::INFO, LevelFilter::DEBUG, LevelFilter::TRACE],
    },
    Target {
        name: "classifier",
        target: "thinkview::classifier",
        levels: [LevelFilter::WARN, LevelFilter::WARN, LevelFilter::DEBUG, LevelFilter::TRACE],
    },
    // request spans from the TraceLayer
    Target {
        name: "http",
        target: "tower_http",
        levels: [LevelFilter::ERROR, LevelFilter::WARN, LevelFilter::DEBUG, LevelFilter::DEBUG],
    },
];

fn find_target(name: &str) -> Option<usize> {
    TARGETS
        .iter()
        .position(|t| t.name == name || t.target == name)
}

/// Resolved level for every row of [`TARGETS`].
#[derive(Debug, Clone)]
pub struct LogConfig {
    levels: Vec<LevelFilter>,
    pub format: LogFormat,
}

impl LogConfig {
    /// Start from `preset` and apply `overrides`.
    ///
    /// Each override is `name=level`, repeated or comma-joined. Unknown target
    /// names and levels are errors so a typo never silently does nothing.
    pub fn new(preset: LogPreset, overrides: &[String], format: LogFormat) -> Result<Self> {
        let mut levels: Vec<LevelFilter> = TARGETS
            .iter()
            .map(|t| t.levels[preset.column()])
            .collect();

        for part in overrides.iter().flat_map(|o| o.split(',')) {
            let Some((name, level)) = part.split_once('=') else {
                bail!("Expected TARGET=LEVEL, got '{}'", part);
            };
            let name = name.trim();
            let Some(index) = find_target(name) else {
                let known: Vec<&str> = TARGETS.iter().map(|t| t.name).collect();
                bail!("Unknown log target '{}' (known: {})", name, known.join(", "));
            };
            levels[index] = level
                .trim()
                .parse()
                .with_context(|| format!("Invalid level for log target '{}'", name))?;
        }

        Ok(Self { levels, format })
    }

    /// Level currently assigned to the target called `name`.
    pub fn level(&self, name: &str) -> Option<LevelFilter> {
        find_target(name).map(|index| self.levels[index])
    }

    /// `EnvFilter` directive string, one entry per target.
    pub fn directives(&self) -> String {
        TARGETS
            .iter()
            .zip(&self.levels)
            .map(|(t, level)| format!("{}={}", t.target, level))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// `RUST_LOG` when set, otherwise the table.
    pub fn build_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::builder().parse_lossy(self.directives()))
    }
}

/// Install the global subscriber.
pub fn init(config: &LogConfig) {
    let layer: Box<dyn Layer<Registry> + Send + Sync> = match config.format {
        LogFormat::Text => fmt::layer().with_target(true).boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .boxed(),
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(config.build_filter())
        .init();
}
