//! Runtime configuration read from the process environment.

use std::env::vars;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::Deserialize;
use triggers_business::{StatusColors, parse_color};
use triggers_states::DEFAULT_PAGE_SIZE;

// The final, validated configuration.
#[derive(Debug, Clone)]
pub struct Config {
    snapshot_path: Option<PathBuf>,
    page_size: usize,
    status_colors: StatusColors,
}

// Intermediate struct for deserializing environment variables, where every
// field is optional.
#[derive(Deserialize)]
struct RawConfig {
    triggers_snapshot_path: Option<String>,
    triggers_page_size: Option<usize>,
    triggers_ok_color: Option<String>,
    triggers_problem_color: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: None,
            page_size: DEFAULT_PAGE_SIZE,
            status_colors: StatusColors::default(),
        }
    }
}

impl Config {
    /// Configuration that loads rows from `path`, everything else default.
    pub fn with_snapshot_path(path: impl Into<PathBuf>) -> Self {
        Self {
            snapshot_path: Some(path.into()),
            ..Self::default()
        }
    }

    pub fn snapshot_path(&self) -> Option<&Path> {
        self.snapshot_path.as_deref()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn status_colors(&self) -> &StatusColors {
        &self.status_colors
    }

    /// Reads `TRIGGERS_*` variables from the environment and applies
    /// defaults.
    pub fn init() -> anyhow::Result<Self> {
        log::info!("Loading configuration from environment variables");

        let raw_config: RawConfig = serde_env::from_iter(vars())?;
        Self::from_raw(raw_config)
    }

    fn from_raw(raw_config: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            triggers_snapshot_path,
            triggers_page_size,
            triggers_ok_color,
            triggers_problem_color,
        } = raw_config;

        let page_size = match triggers_page_size {
            Some(0) => anyhow::bail!("TRIGGERS_PAGE_SIZE must be at least 1"),
            Some(size) => size,
            None => {
                log::info!("TRIGGERS_PAGE_SIZE not set, defaulting to {DEFAULT_PAGE_SIZE}");
                DEFAULT_PAGE_SIZE
            }
        };

        let defaults = StatusColors::default();
        let status_colors = StatusColors {
            ok: match triggers_ok_color {
                Some(raw) => parse_color(&raw).context("TRIGGERS_OK_COLOR is not a valid color")?,
                None => defaults.ok,
            },
            problem: match triggers_problem_color {
                Some(raw) => {
                    parse_color(&raw).context("TRIGGERS_PROBLEM_COLOR is not a valid color")?
                }
                None => defaults.problem,
            },
        };

        if triggers_snapshot_path.is_none() {
            log::info!("TRIGGERS_SNAPSHOT_PATH not set, starting with an empty list");
        }

        Ok(Self {
            snapshot_path: triggers_snapshot_path.map(PathBuf::from),
            page_size,
            status_colors,
        })
    }
}
