//! Cell rendering functions for the problems table.
//!
//! One function per [`CellFormatter`]. None of them can fail: an absent or
//! empty value renders as nothing, so one bad field never affects its
//! neighbours.

use egui::{Button, Color32, Frame, Label, Margin, RichText, Stroke, Ui};
use triggers_business::{
    CellFormatter, ColumnDescriptor, HostGroup, ProblemRecord, StatusColors, Tag,
    join_group_names, status_display, tag_color, tag_key, tag_text,
};

use crate::utils::colors::COLOR_ON_BADGE;
use crate::widgets::problems::icons;

/// What a cell needs beyond the record itself.
pub struct CellContext<'a> {
    pub status_colors: &'a StatusColors,
    pub expanded: bool,
}

/// Renders the cell of `column` for `problem`.
///
/// Returns `true` if the expander was clicked.
pub fn render_cell(
    ui: &mut Ui,
    column: &ColumnDescriptor,
    problem: &ProblemRecord,
    ctx: &CellContext<'_>,
) -> bool {
    match column.formatter {
        CellFormatter::Plain => {
            let text = column.field.map(|f| f.text(problem)).unwrap_or_default();
            render_plain_cell(ui, text);
        }
        CellFormatter::Groups => render_groups_cell(ui, problem.groups()),
        CellFormatter::Severity => {
            render_severity_cell(ui, problem.severity_label(), problem.severity_color());
        }
        CellFormatter::Status => render_status_cell(ui, &problem.value, ctx.status_colors),
        CellFormatter::Problem => {
            render_problem_cell(ui, &problem.description, problem.comment().is_some());
        }
        CellFormatter::Tags => render_tags_cell(ui, problem.tags()),
        CellFormatter::Expander => return render_expander_cell(ui, ctx.expanded),
    }
    false
}

#[inline]
pub fn render_plain_cell(ui: &mut Ui, text: &str) {
    if !text.is_empty() {
        ui.add(Label::new(text).truncate());
    }
}

#[inline]
pub fn render_groups_cell(ui: &mut Ui, groups: Option<&[HostGroup]>) {
    render_plain_cell(ui, &join_group_names(groups));
}

/// Severity label on the record's color. Without one the badge is only
/// outlined.
#[inline]
pub fn render_severity_cell(ui: &mut Ui, label: &str, color: Option<Color32>) {
    let frame = Frame::NONE
        .inner_margin(Margin::symmetric(6, 2))
        .corner_radius(3.0);
    let (frame, text) = match color {
        Some(color) => (frame.fill(color), RichText::new(label).color(COLOR_ON_BADGE)),
        None => (
            frame.stroke(Stroke::new(1.0, ui.visuals().weak_text_color())),
            RichText::new(label),
        ),
    };
    frame.show(ui, |ui| {
        ui.add(Label::new(text).truncate());
    });
}

#[inline]
pub fn render_status_cell(ui: &mut Ui, value: &str, colors: &StatusColors) {
    let status = status_display(value, colors);
    ui.colored_label(status.color, status.label);
}

/// Description, followed by a notes glyph when the problem has a comment.
/// The comment text itself is left to the detail panel.
#[inline]
pub fn render_problem_cell(ui: &mut Ui, description: &str, has_notes: bool) {
    ui.horizontal(|ui| {
        render_plain_cell(ui, description);
        if has_notes {
            ui.label(icons::NOTES).on_hover_text("Has notes");
        }
    });
}

#[inline]
pub fn render_tags_cell(ui: &mut Ui, tags: &[Tag]) {
    ui.horizontal(|ui| render_tag_chips(ui, tags));
}

/// Info glyph toggling the row's detail panel.
///
/// Returns `true` if it was clicked.
#[inline]
pub fn render_expander_cell(ui: &mut Ui, expanded: bool) -> bool {
    let (text, hover) = if expanded {
        (RichText::new(icons::INFO).strong(), "Hide details")
    } else {
        (RichText::new(icons::INFO), "Show details")
    };
    ui.centered_and_justified(|ui| {
        ui.add(Button::new(text).frame(false).selected(expanded))
            .on_hover_text(hover)
            .clicked()
    })
    .inner
}

/// Tag chips keyed by tag and value, so a chip keeps its identity when the
/// list around it changes.
pub(crate) fn render_tag_chips(ui: &mut Ui, tags: &[Tag]) {
    for tag in tags {
        ui.push_id(tag_key(tag), |ui| render_tag_chip(ui, tag));
    }
}

fn render_tag_chip(ui: &mut Ui, tag: &Tag) {
    Frame::NONE
        .fill(tag_color(tag))
        .inner_margin(Margin::symmetric(6, 1))
        .corner_radius(3.0)
        .show(ui, |ui| {
            ui.label(RichText::new(tag_text(tag)).small().color(COLOR_ON_BADGE));
        });
}
