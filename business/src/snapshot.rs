//! One render cycle's worth of input: rows, display options and the
//! loading flag, as produced by the data-fetch side.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::options::PanelDisplayOptions;
use crate::problem::ProblemRecord;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse snapshot: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProblemSnapshot {
    pub problems: Vec<ProblemRecord>,
    pub panel_options: PanelDisplayOptions,
    pub loading: bool,
}

impl ProblemSnapshot {
    pub fn from_json_str(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, SnapshotError> {
        let json = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let snapshot = Self::from_json_str(&json)?;
        log::debug!(
            "Loaded {} problems from {}",
            snapshot.problems.len(),
            path.display()
        );
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DisplayOption;

    #[test]
    fn empty_object_is_an_empty_snapshot() {
        let snapshot = ProblemSnapshot::from_json_str("{}").expect("empty snapshot");
        assert!(snapshot.problems.is_empty());
        assert!(!snapshot.loading);
        assert_eq!(snapshot.panel_options, PanelDisplayOptions::default());
    }

    #[test]
    fn reads_rows_options_and_loading() {
        let snapshot = ProblemSnapshot::from_json_str(
            r##"{
                "problems": [
                    {"triggerid": "1", "description": "Disk full", "color": "#E5AC0E", "age": "2d", "value": "1"},
                    {"triggerid": "2", "description": "Ping lost", "color": "rgb(191, 27, 0)", "age": "5m", "value": "0"}
                ],
                "panelOptions": {"severityField": true},
                "loading": true
            }"##,
        )
        .expect("snapshot");

        assert_eq!(snapshot.problems.len(), 2);
        assert_eq!(snapshot.problems[1].description, "Ping lost");
        assert!(snapshot.loading);
        assert!(snapshot.panel_options.is_enabled(DisplayOption::Severity));
        // Keys not given fall back to field-level `None`, which shows the column.
        assert!(snapshot.panel_options.is_enabled(DisplayOption::HostProxy));
    }

    #[test]
    fn one_odd_row_does_not_drop_its_siblings() {
        let snapshot = ProblemSnapshot::from_json_str(
            r##"{
                "problems": [
                    {"color": "#BF1B00", "age": "1m"},
                    {"color": "red", "age": "2m", "priority": "3"},
                    {"color": "#F00", "age": "3m", "maintenance": null, "datasource": null},
                    {"age": "4m", "host": null}
                ]
            }"##,
        )
        .expect("every row loads");

        assert_eq!(snapshot.problems.len(), 4);
        assert_eq!(snapshot.problems[1].color, None);
        assert_eq!(
            snapshot.problems[2].color,
            Some(egui::Color32::from_rgb(255, 0, 0))
        );
        assert!(!snapshot.problems[2].maintenance);
        assert_eq!(snapshot.problems[3].host, "");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = ProblemSnapshot::from_json_str("{\"problems\": [").expect_err("truncated json");
        assert!(matches!(err, SnapshotError::Parse(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = ProblemSnapshot::from_path(Path::new("/nonexistent/problems.json"))
            .expect_err("missing file");
        assert!(matches!(err, SnapshotError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/problems.json"));
    }
}
