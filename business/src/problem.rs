//! Problem records handed over by the data-fetch side of the panel.
//!
//! Records are immutable snapshots. Optional fields follow the backend's
//! loose typing: ordinals and codes may arrive as strings or numbers, any
//! field may be an explicit `null`, and an empty string or empty list means
//! "not present".

use egui::Color32;
use serde::{Deserialize, Deserializer};

use crate::color::deserialize_lenient_color;
use crate::severity::Severity;

/// Status code the backend uses for a resolved trigger.
pub const STATUS_OK_CODE: &str = "0";

/// Event type code for triggers that generate an event on every evaluation.
pub const EVENT_KIND_REPEATED_CODE: &str = "1";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HostGroup {
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub groupid: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Tag {
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub tag: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub value: String,
}

/// An instrumented item attached to a problem.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ItemReading {
    #[serde(default, deserialize_with = "deserialize_code")]
    pub itemid: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub lastvalue: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AcknowledgeRecord {
    #[serde(default, deserialize_with = "deserialize_code")]
    pub acknowledgeid: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub time: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub user: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemStatus {
    Ok,
    Problem,
}

impl ProblemStatus {
    pub fn from_code(code: &str) -> Self {
        if code == STATUS_OK_CODE {
            Self::Ok
        } else {
            Self::Problem
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Ok => "OK",
            Self::Problem => "PROBLEM",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventKind {
    #[default]
    Single,
    Repeated,
}

impl EventKind {
    pub fn from_code(code: &str) -> Self {
        if code == EVENT_KIND_REPEATED_CODE {
            Self::Repeated
        } else {
            Self::Single
        }
    }
}

impl<'de> Deserialize<'de> for EventKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = Option::<Code>::deserialize(deserializer)?;
        Ok(code.map_or_else(Self::default, |code| Self::from_code(&code.into_string())))
    }
}

/// One monitoring problem (trigger instance).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProblemRecord {
    #[serde(default, deserialize_with = "deserialize_code")]
    pub triggerid: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub host: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub host_tech_name: String,
    #[serde(default)]
    pub groups: Option<Vec<HostGroup>>,
    #[serde(default)]
    pub proxy: Option<String>,
    #[serde(default, deserialize_with = "deserialize_priority")]
    pub priority: u8,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub severity: String,
    #[serde(default, deserialize_with = "deserialize_lenient_color")]
    pub color: Option<Color32>,
    #[serde(default, deserialize_with = "deserialize_code")]
    pub value: String,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub description: String,
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub lastchange: String,
    pub age: String,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: EventKind,
    #[serde(default)]
    pub items: Option<Vec<ItemReading>>,
    #[serde(default)]
    pub acknowledges: Option<Vec<AcknowledgeRecord>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub datasource: String,
    #[serde(default, deserialize_with = "deserialize_flag")]
    pub maintenance: bool,
}

impl ProblemRecord {
    pub fn status(&self) -> ProblemStatus {
        ProblemStatus::from_code(&self.value)
    }

    pub fn is_repeated_event(&self) -> bool {
        self.kind == EventKind::Repeated
    }

    /// The record's own severity label, or the stock label for its priority.
    pub fn severity_label(&self) -> &str {
        if !self.severity.is_empty() {
            return &self.severity;
        }
        Severity::from_priority(self.priority)
            .map(Severity::default_label)
            .unwrap_or_default()
    }

    /// The record's own color, or the stock color for its priority.
    pub fn severity_color(&self) -> Option<Color32> {
        self.color
            .or_else(|| Severity::from_priority(self.priority).map(Severity::default_color))
    }

    pub fn comment(&self) -> Option<&str> {
        self.comments.as_deref().filter(|c| !c.is_empty())
    }

    pub fn proxy(&self) -> Option<&str> {
        self.proxy.as_deref().filter(|p| !p.is_empty())
    }

    pub fn groups(&self) -> Option<&[HostGroup]> {
        self.groups.as_deref()
    }

    pub fn tags(&self) -> &[Tag] {
        self.tags.as_deref().unwrap_or_default()
    }

    pub fn items(&self) -> &[ItemReading] {
        self.items.as_deref().unwrap_or_default()
    }

    pub fn acknowledges(&self) -> Option<&[AcknowledgeRecord]> {
        self.acknowledges.as_deref().filter(|acks| !acks.is_empty())
    }
}

/// Identifier or code that may be sent as a JSON string or number.
#[derive(Deserialize)]
#[serde(untagged)]
enum Code {
    Number(i64),
    Text(String),
}

impl Code {
    fn into_string(self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s,
        }
    }
}

/// Boolean flag sent as `true`, `1` or `"1"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Number(i64),
    Text(String),
}

impl Flag {
    fn is_set(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Number(n) => *n != 0,
            Self::Text(s) => matches!(s.trim(), "1" | "true"),
        }
    }
}

/// Reads `null` the same as a missing key.
fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn deserialize_code<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Code>::deserialize(deserializer)?
        .map(Code::into_string)
        .unwrap_or_default())
}

fn deserialize_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Flag>::deserialize(deserializer)?.is_some_and(|flag| flag.is_set()))
}

/// Priorities outside `0..=255` or non-numeric ones read as 0 (not classified).
fn deserialize_priority<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<Code>::deserialize(deserializer)?.map(Code::into_string) else {
        return Ok(0);
    };
    Ok(raw.trim().parse::<u8>().unwrap_or_else(|_| {
        log::warn!("Ignoring invalid priority `{raw}`");
        0
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_RECORD: &str = r##"{
        "triggerid": "13491",
        "host": "web-01",
        "hostTechName": "web01.dc1",
        "groups": [{"groupid": "2", "name": "Linux servers"}, {"name": "Web"}],
        "proxy": "proxy-dc1",
        "priority": "4",
        "severity": "High",
        "color": "#BF1B00",
        "value": "1",
        "description": "CPU load is too high",
        "tags": [{"tag": "service", "value": "nginx"}],
        "lastchange": "2018-10-04 12:01:07",
        "age": "3h 2m",
        "comments": "Check the worker pool.",
        "type": 1,
        "items": [{"itemid": 28100, "name": "CPU load", "lastvalue": "7.12"}],
        "acknowledges": [{"acknowledgeid": "7", "time": "12:05", "user": "admin", "message": "on it"}],
        "datasource": "Zabbix DC1",
        "maintenance": true
    }"##;

    #[test]
    fn deserializes_a_full_record() {
        let record: ProblemRecord = serde_json::from_str(FULL_RECORD).expect("valid record");

        assert_eq!(record.host_tech_name, "web01.dc1");
        assert_eq!(record.priority, 4);
        assert_eq!(record.color, Some(Color32::from_rgb(0xBF, 0x1B, 0x00)));
        assert_eq!(record.status(), ProblemStatus::Problem);
        assert!(record.is_repeated_event());
        assert_eq!(record.items()[0].itemid, "28100");
        assert_eq!(record.proxy(), Some("proxy-dc1"));
        assert_eq!(record.comment(), Some("Check the worker pool."));
        assert_eq!(record.acknowledges().map(<[_]>::len), Some(1));
        assert!(record.maintenance);
    }

    #[test]
    fn missing_optionals_read_as_absent() {
        let record: ProblemRecord =
            serde_json::from_str(r##"{"color": "#000000", "age": "1m", "proxy": "", "comments": "", "acknowledges": []}"##)
                .expect("minimal record");

        assert!(record.groups().is_none());
        assert!(record.tags().is_empty());
        assert!(record.items().is_empty());
        assert_eq!(record.proxy(), None);
        assert_eq!(record.comment(), None);
        assert_eq!(record.acknowledges(), None);
        assert!(!record.maintenance);
        assert_eq!(record.kind, EventKind::Single);
    }

    #[test]
    fn unparsable_color_falls_back_to_priority_color() {
        let record: ProblemRecord =
            serde_json::from_str(r#"{"color": "blue-ish", "priority": 4, "age": "1m"}"#)
                .expect("bad color is not fatal");

        assert_eq!(record.color, None);
        assert_eq!(record.severity_color(), Some(Severity::High.default_color()));
    }

    #[test]
    fn no_color_and_unknown_priority_has_no_severity_color() {
        let record: ProblemRecord = serde_json::from_str(r#"{"priority": "9", "age": "1m"}"#)
            .expect("record without color");

        assert_eq!(record.severity_color(), None);
    }

    #[test]
    fn explicit_nulls_read_as_absent() {
        let record: ProblemRecord = serde_json::from_str(
            r#"{
                "triggerid": null, "host": null, "hostTechName": null, "groups": null,
                "proxy": null, "priority": null, "severity": null, "color": null,
                "value": null, "description": null, "tags": [{"tag": "scope", "value": null}],
                "lastchange": null, "age": "1m", "comments": null, "type": null,
                "items": null, "acknowledges": null, "datasource": null, "maintenance": null
            }"#,
        )
        .expect("nulls are tolerated");

        assert_eq!(record.host, "");
        assert_eq!(record.datasource, "");
        assert_eq!(record.priority, 0);
        assert_eq!(record.kind, EventKind::Single);
        assert_eq!(record.tags()[0].value, "");
        assert!(!record.maintenance);
    }

    #[test]
    fn maintenance_accepts_numeric_codes() {
        let parse = |raw: &str| {
            let json = format!(r#"{{"age": "1m", "maintenance": {raw}}}"#);
            serde_json::from_str::<ProblemRecord>(&json)
                .expect("maintenance flag")
                .maintenance
        };

        assert!(parse(r#""1""#));
        assert!(parse("1"));
        assert!(parse("true"));
        assert!(!parse(r#""0""#));
        assert!(!parse("0"));
    }

    #[test]
    fn severity_label_falls_back_to_priority() {
        let record = ProblemRecord {
            priority: 5,
            ..ProblemRecord::default()
        };
        assert_eq!(record.severity_label(), "Disaster");

        let out_of_range = ProblemRecord {
            priority: 9,
            ..ProblemRecord::default()
        };
        assert_eq!(out_of_range.severity_label(), "");
    }

    #[test]
    fn status_is_two_valued() {
        assert_eq!(ProblemStatus::from_code("0"), ProblemStatus::Ok);
        assert_eq!(ProblemStatus::from_code("1"), ProblemStatus::Problem);
        assert_eq!(ProblemStatus::from_code(""), ProblemStatus::Problem);
    }
}
