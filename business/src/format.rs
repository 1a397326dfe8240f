//! Renderer-independent parts of the cell formatters.
//!
//! Every function here is total: missing or empty inputs produce empty
//! output instead of an error.

use egui::Color32;

use crate::problem::{HostGroup, ProblemStatus, Tag};

pub const DEFAULT_OK_COLOR: Color32 = Color32::from_rgb(56, 189, 113);
pub const DEFAULT_PROBLEM_COLOR: Color32 = Color32::from_rgb(215, 0, 0);

/// Chip backgrounds for tags, picked by hashing the tag key.
const TAG_PALETTE: [Color32; 8] = [
    Color32::from_rgb(0x3F, 0x6C, 0x9E),
    Color32::from_rgb(0x6E, 0x4F, 0x9A),
    Color32::from_rgb(0x2F, 0x82, 0x6B),
    Color32::from_rgb(0x9A, 0x5B, 0x2C),
    Color32::from_rgb(0x8C, 0x35, 0x5A),
    Color32::from_rgb(0x4B, 0x7A, 0x2E),
    Color32::from_rgb(0x2C, 0x6F, 0x8A),
    Color32::from_rgb(0x7A, 0x6A, 0x2A),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusColors {
    pub ok: Color32,
    pub problem: Color32,
}

impl Default for StatusColors {
    fn default() -> Self {
        Self {
            ok: DEFAULT_OK_COLOR,
            problem: DEFAULT_PROBLEM_COLOR,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusDisplay {
    pub label: &'static str,
    pub color: Color32,
}

/// Maps a raw status code to its label and text color.
pub fn status_display(value: &str, colors: &StatusColors) -> StatusDisplay {
    let status = ProblemStatus::from_code(value);
    let color = match status {
        ProblemStatus::Ok => colors.ok,
        ProblemStatus::Problem => colors.problem,
    };
    StatusDisplay {
        label: status.label(),
        color,
    }
}

pub fn join_group_names(groups: Option<&[HostGroup]>) -> String {
    groups
        .unwrap_or_default()
        .iter()
        .map(|g| g.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Render identity of a tag chip.
pub fn tag_key(tag: &Tag) -> String {
    format!("{}{}", tag.tag, tag.value)
}

pub fn tag_text(tag: &Tag) -> String {
    if tag.value.is_empty() {
        tag.tag.clone()
    } else {
        format!("{}: {}", tag.tag, tag.value)
    }
}

pub fn tag_color(tag: &Tag) -> Color32 {
    // FNV-1a, stable across runs and platforms.
    let hash = tag
        .tag
        .bytes()
        .fold(0x811c_9dc5_u32, |acc, b| (acc ^ u32::from(b)).wrapping_mul(0x0100_0193));
    TAG_PALETTE[hash as usize % TAG_PALETTE.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(name: &str) -> HostGroup {
        HostGroup {
            groupid: String::new(),
            name: name.to_owned(),
        }
    }

    #[test]
    fn status_zero_is_ok() {
        let colors = StatusColors::default();
        assert_eq!(
            status_display("0", &colors),
            StatusDisplay {
                label: "OK",
                color: DEFAULT_OK_COLOR
            }
        );
    }

    #[test]
    fn any_other_status_is_problem() {
        let colors = StatusColors {
            ok: Color32::WHITE,
            problem: Color32::YELLOW,
        };
        for code in ["1", "2", "", "OK", " 0"] {
            let display = status_display(code, &colors);
            assert_eq!(display.label, "PROBLEM", "code {code:?}");
            assert_eq!(display.color, Color32::YELLOW, "code {code:?}");
        }
    }

    #[test]
    fn overridden_ok_color_is_used() {
        let colors = StatusColors {
            ok: Color32::LIGHT_BLUE,
            ..StatusColors::default()
        };
        assert_eq!(status_display("0", &colors).color, Color32::LIGHT_BLUE);
    }

    #[test]
    fn groups_join_with_comma() {
        let groups = [group("Linux servers"), group("Web")];
        assert_eq!(join_group_names(Some(&groups)), "Linux servers, Web");
    }

    #[test]
    fn missing_or_empty_groups_render_empty() {
        assert_eq!(join_group_names(None), "");
        assert_eq!(join_group_names(Some(&[])), "");
    }

    #[test]
    fn tag_identity_and_text() {
        let tag = Tag {
            tag: "service".to_owned(),
            value: "nginx".to_owned(),
        };
        assert_eq!(tag_key(&tag), "servicenginx");
        assert_eq!(tag_text(&tag), "service: nginx");

        let bare = Tag {
            tag: "critical".to_owned(),
            value: String::new(),
        };
        assert_eq!(tag_text(&bare), "critical");
    }

    #[test]
    fn tag_color_depends_on_key_only() {
        let a = Tag {
            tag: "env".to_owned(),
            value: "prod".to_owned(),
        };
        let b = Tag {
            tag: "env".to_owned(),
            value: "staging".to_owned(),
        };
        assert_eq!(tag_color(&a), tag_color(&b));
    }
}
