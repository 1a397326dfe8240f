//! Data model and pure presentation logic for the problems panel.
//!
//! Nothing in this crate renders; the UI crate turns the column
//! descriptors and formatter outputs produced here into widgets.

mod color;
pub mod columns;
pub mod format;
mod options;
mod problem;
mod severity;
mod snapshot;

pub use color::{ColorParseError, parse_color};
pub use columns::{CellFormatter, ColumnDescriptor, ProblemField, compose_columns, time_column_width};
pub use format::{StatusColors, StatusDisplay, join_group_names, status_display, tag_color, tag_key, tag_text};
pub use options::{DisplayOption, PanelDisplayOptions};
pub use problem::{
    AcknowledgeRecord, EventKind, HostGroup, ItemReading, ProblemRecord, ProblemStatus, Tag,
};
pub use severity::Severity;
pub use snapshot::{ProblemSnapshot, SnapshotError};
