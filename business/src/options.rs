//! Panel display options: one toggle per optional table column.

use serde::Deserialize;

/// The seven column toggles the panel editor exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayOption {
    Host,
    HostTechName,
    HostGroups,
    HostProxy,
    Severity,
    Status,
    Tags,
}

impl DisplayOption {
    pub const ALL: [Self; 7] = [
        Self::Host,
        Self::HostTechName,
        Self::HostGroups,
        Self::HostProxy,
        Self::Severity,
        Self::Status,
        Self::Tags,
    ];

    /// Option key as stored in the panel JSON.
    pub fn key(self) -> &'static str {
        match self {
            Self::Host => "hostField",
            Self::HostTechName => "hostTechNameField",
            Self::HostGroups => "hostGroups",
            Self::HostProxy => "hostProxy",
            Self::Severity => "severityField",
            Self::Status => "statusField",
            Self::Tags => "showTags",
        }
    }
}

/// Column toggles. A `None` (missing key) shows the column; only an
/// explicit `false` hides it.
///
/// Deserializing leaves absent keys as `None`; the editor defaults from
/// [`Default`] apply only when no options object is supplied at all.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanelDisplayOptions {
    pub host_field: Option<bool>,
    pub host_tech_name_field: Option<bool>,
    pub host_groups: Option<bool>,
    pub host_proxy: Option<bool>,
    pub severity_field: Option<bool>,
    pub status_field: Option<bool>,
    pub show_tags: Option<bool>,
}

impl Default for PanelDisplayOptions {
    fn default() -> Self {
        Self {
            host_field: Some(true),
            host_tech_name_field: Some(false),
            host_groups: Some(false),
            host_proxy: Some(false),
            severity_field: Some(false),
            status_field: Some(true),
            show_tags: Some(true),
        }
    }
}

impl PanelDisplayOptions {
    /// Options with every key left unset, so every column shows.
    pub fn unset() -> Self {
        Self {
            host_field: None,
            host_tech_name_field: None,
            host_groups: None,
            host_proxy: None,
            severity_field: None,
            status_field: None,
            show_tags: None,
        }
    }

    pub fn get(&self, option: DisplayOption) -> Option<bool> {
        match option {
            DisplayOption::Host => self.host_field,
            DisplayOption::HostTechName => self.host_tech_name_field,
            DisplayOption::HostGroups => self.host_groups,
            DisplayOption::HostProxy => self.host_proxy,
            DisplayOption::Severity => self.severity_field,
            DisplayOption::Status => self.status_field,
            DisplayOption::Tags => self.show_tags,
        }
    }

    pub fn set(&mut self, option: DisplayOption, enabled: bool) {
        let slot = match option {
            DisplayOption::Host => &mut self.host_field,
            DisplayOption::HostTechName => &mut self.host_tech_name_field,
            DisplayOption::HostGroups => &mut self.host_groups,
            DisplayOption::HostProxy => &mut self.host_proxy,
            DisplayOption::Severity => &mut self.severity_field,
            DisplayOption::Status => &mut self.status_field,
            DisplayOption::Tags => &mut self.show_tags,
        };
        *slot = Some(enabled);
    }

    #[must_use]
    pub fn with(mut self, option: DisplayOption, enabled: bool) -> Self {
        self.set(option, enabled);
        self
    }

    pub fn is_enabled(&self, option: DisplayOption) -> bool {
        self.get(option) != Some(false)
    }
}
