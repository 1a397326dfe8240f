use triggers_business::ProblemSnapshot;

use crate::config::Config;
use crate::widgets::ProblemListState;

/// The main application state.
pub struct State {
    pub config: Config,
    /// Rows, options and presentation state of the problem list.
    pub problems: ProblemListState,
    /// Message of the last failed snapshot load, cleared on success.
    pub last_error: Option<String>,
}

impl Default for State {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

impl State {
    pub fn new(config: Config) -> Self {
        let problems = ProblemListState::new(config.page_size())
            .with_status_colors(*config.status_colors());
        Self {
            config,
            problems,
            last_error: None,
        }
    }

    /// State with `snapshot` already loaded.
    pub fn with_snapshot(config: Config, snapshot: ProblemSnapshot) -> Self {
        let mut state = Self::new(config);
        state.problems.set_snapshot(snapshot);
        state
    }

    /// Loads the snapshot file named in the configuration. On failure the
    /// current rows stay and the error is kept for display.
    pub fn reload(&mut self) {
        let Some(path) = self.config.snapshot_path() else {
            self.last_error = Some("TRIGGERS_SNAPSHOT_PATH is not set".to_owned());
            return;
        };

        match ProblemSnapshot::from_path(path) {
            Ok(snapshot) => {
                self.problems.set_snapshot(snapshot);
                self.last_error = None;
            }
            Err(err) => {
                log::error!("Reload failed: {err}");
                self.last_error = Some(err.to_string());
            }
        }
    }
}
