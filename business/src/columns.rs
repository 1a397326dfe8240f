//! Column composition for the problems table.
//!
//! The master order below is the left-to-right order of the table. Toggles
//! only filter it; they never reorder it.

use crate::options::{DisplayOption, PanelDisplayOptions};
use crate::problem::ProblemRecord;

/// Pixels reserved per character of the `lastchange` timestamp.
pub const TIME_CHAR_WIDTH: f32 = 9.0;
/// Time column width when there is no row to measure.
pub const DEFAULT_TIME_COLUMN_WIDTH: f32 = 160.0;

pub const SEVERITY_COLUMN_WIDTH: f32 = 120.0;
pub const STATUS_COLUMN_WIDTH: f32 = 100.0;
pub const PROBLEM_COLUMN_MIN_WIDTH: f32 = 200.0;
pub const EXPANDER_COLUMN_WIDTH: f32 = 60.0;

/// Record field a column reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProblemField {
    Host,
    HostTechName,
    Groups,
    Proxy,
    Severity,
    Value,
    Description,
    Tags,
    LastChange,
}

impl ProblemField {
    pub fn key(self) -> &'static str {
        match self {
            Self::Host => "host",
            Self::HostTechName => "hostTechName",
            Self::Groups => "groups",
            Self::Proxy => "proxy",
            Self::Severity => "severity",
            Self::Value => "value",
            Self::Description => "description",
            Self::Tags => "tags",
            Self::LastChange => "lastchange",
        }
    }

    /// Plain text of the field, for columns without a dedicated formatter.
    pub fn text(self, problem: &ProblemRecord) -> &str {
        match self {
            Self::Host => &problem.host,
            Self::HostTechName => &problem.host_tech_name,
            Self::Proxy => problem.proxy().unwrap_or_default(),
            Self::Severity => problem.severity_label(),
            Self::Value => &problem.value,
            Self::Description => &problem.description,
            Self::LastChange => &problem.lastchange,
            Self::Groups | Self::Tags => "",
        }
    }
}

/// The closed set of cell formatters a column can use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellFormatter {
    Plain,
    Groups,
    Severity,
    Status,
    Problem,
    Tags,
    Expander,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDescriptor {
    pub header: &'static str,
    /// `None` for the expander column, which reads no field.
    pub field: Option<ProblemField>,
    pub width: Option<f32>,
    pub min_width: Option<f32>,
    pub class_name: Option<&'static str>,
    pub formatter: CellFormatter,
}

impl ColumnDescriptor {
    const fn new(header: &'static str, field: Option<ProblemField>, formatter: CellFormatter) -> Self {
        Self {
            header,
            field,
            width: None,
            min_width: None,
            class_name: None,
            formatter,
        }
    }

    const fn width(mut self, width: f32) -> Self {
        self.width = Some(width);
        self
    }

    const fn min_width(mut self, width: f32) -> Self {
        self.min_width = Some(width);
        self
    }

    const fn class_name(mut self, class_name: &'static str) -> Self {
        self.class_name = Some(class_name);
        self
    }
}

/// Width of the time column, measured from the first row only.
pub fn time_column_width(problems: &[ProblemRecord]) -> f32 {
    problems
        .first()
        .map(|p| p.lastchange.chars().count() as f32 * TIME_CHAR_WIDTH)
        .unwrap_or(DEFAULT_TIME_COLUMN_WIDTH)
}

/// Every column in master order, each paired with the toggle that can hide it.
fn master_columns(time_width: f32) -> [(Option<DisplayOption>, ColumnDescriptor); 10] {
    use CellFormatter as F;
    use ProblemField as P;

    [
        (
            Some(DisplayOption::Host),
            ColumnDescriptor::new("Host", Some(P::Host), F::Plain),
        ),
        (
            Some(DisplayOption::HostTechName),
            ColumnDescriptor::new("Host (Technical Name)", Some(P::HostTechName), F::Plain),
        ),
        (
            Some(DisplayOption::HostGroups),
            ColumnDescriptor::new("Host Groups", Some(P::Groups), F::Groups),
        ),
        (
            Some(DisplayOption::HostProxy),
            ColumnDescriptor::new("Proxy", Some(P::Proxy), F::Plain),
        ),
        (
            Some(DisplayOption::Severity),
            ColumnDescriptor::new("Severity", Some(P::Severity), F::Severity)
                .class_name("problem-severity")
                .width(SEVERITY_COLUMN_WIDTH),
        ),
        (
            Some(DisplayOption::Status),
            ColumnDescriptor::new("Status", Some(P::Value), F::Status).width(STATUS_COLUMN_WIDTH),
        ),
        (
            None,
            ColumnDescriptor::new("Problem", Some(P::Description), F::Problem)
                .min_width(PROBLEM_COLUMN_MIN_WIDTH),
        ),
        (
            Some(DisplayOption::Tags),
            ColumnDescriptor::new("Tags", Some(P::Tags), F::Tags).class_name("problem-tags"),
        ),
        (
            None,
            ColumnDescriptor::new("Time", Some(P::LastChange), F::Plain)
                .class_name("last-change")
                .width(time_width),
        ),
        (
            None,
            ColumnDescriptor::new("Details", None, F::Expander)
                .class_name("custom-expander")
                .width(EXPANDER_COLUMN_WIDTH),
        ),
    ]
}

/// Builds the visible columns for the given options and rows.
///
/// Rows are only consulted for the time column width.
pub fn compose_columns(
    options: &PanelDisplayOptions,
    problems: &[ProblemRecord],
) -> Vec<ColumnDescriptor> {
    master_columns(time_column_width(problems))
        .into_iter()
        .filter(|(toggle, _)| toggle.is_none_or(|option| options.is_enabled(option)))
        .map(|(_, column)| column)
        .collect()
}
