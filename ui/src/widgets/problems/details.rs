//! Detail panel shown under an expanded problem row.
//!
//! Three regions side by side: the problem itself (age, items, comment,
//! event kind, tags), the acknowledgement history when there is one, and a
//! metadata sidebar. Every block except age and the sidebar's datasource and
//! groups lines is skipped when its field is absent.

use egui::{Frame, Margin, Stroke, Ui};
use triggers_business::{AcknowledgeRecord, ItemReading, ProblemRecord, join_group_names};
use triggers_states::{DetailPanelState, FrameScheduler};

use super::icons;
use super::table::cells::render_tag_chips;
use crate::utils::colors::TABLE_BORDER_COLOR;

/// Length of the fade-in once the panel turns visible.
pub const FADE_SECONDS: f32 = 0.2;

/// Renders the detail panel of one expanded row.
///
/// The first call for a panel queues its flip to visible; the flip lands on
/// the next frame and the panel fades in from there.
pub fn problem_details(
    ui: &mut Ui,
    problem: &ProblemRecord,
    panel: &mut DetailPanelState,
    scheduler: &FrameScheduler,
) {
    if panel.mount(scheduler) {
        ui.ctx().request_repaint();
    }

    let opacity = ui.ctx().animate_bool_with_time(
        ui.id().with(("problem_details", panel.id().generation())),
        panel.is_visible(),
        FADE_SECONDS,
    );

    ui.scope(|ui| {
        ui.set_opacity(opacity);
        Frame::NONE
            .fill(ui.visuals().extreme_bg_color)
            .inner_margin(Margin::same(12))
            .corner_radius(4.0)
            .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
            .show(ui, |ui| details_body(ui, problem));
    });
}

fn details_body(ui: &mut Ui, problem: &ProblemRecord) {
    let acknowledges = problem.acknowledges();
    let regions = if acknowledges.is_some() { 3 } else { 2 };

    ui.columns(regions, |columns| {
        problem_summary(&mut columns[0], problem);
        if let Some(acknowledges) = acknowledges {
            acknowledges_section(&mut columns[1], acknowledges);
        }
        metadata_sidebar(&mut columns[regions - 1], problem);
    });
}

fn problem_summary(ui: &mut Ui, problem: &ProblemRecord) {
    ui.strong("Problem Details");

    ui.horizontal(|ui| {
        ui.label(icons::CLOCK);
        ui.label(&problem.age);
    });

    problem_items(ui, problem.items());

    if let Some(comment) = problem.comment() {
        ui.horizontal_wrapped(|ui| {
            ui.strong("Description:");
            ui.label(comment);
        });
    }

    if problem.is_repeated_event() {
        ui.label(icons::REPEATED_EVENT)
            .on_hover_text("Generates an event on every evaluation");
    }

    ui.horizontal_wrapped(|ui| render_tag_chips(ui, problem.tags()));
}

/// A lone item shows only its value; several items are labelled by name.
fn problem_items(ui: &mut Ui, items: &[ItemReading]) {
    match items {
        [] => {}
        [item] => item_line(ui, item, false),
        items => {
            for (index, item) in items.iter().enumerate() {
                ui.push_id(index, |ui| item_line(ui, item, true));
            }
        }
    }
}

fn item_line(ui: &mut Ui, item: &ItemReading, show_name: bool) {
    ui.horizontal(|ui| {
        ui.label(icons::THERMOMETER);
        if show_name {
            ui.weak(format!("{}:", item.name));
        }
        ui.label(&item.lastvalue);
    });
}

fn acknowledges_section(ui: &mut Ui, acknowledges: &[AcknowledgeRecord]) {
    ui.strong(format!("{} Acknowledges", icons::ACKNOWLEDGES));
    for (index, ack) in acknowledges.iter().enumerate() {
        ui.push_id(index, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.weak(&ack.time);
                ui.strong(&ack.user);
                ui.label(&ack.message);
            });
        });
    }
}

fn metadata_sidebar(ui: &mut Ui, problem: &ProblemRecord) {
    metadata_line(ui, icons::DATASOURCE, &problem.datasource);
    if let Some(proxy) = problem.proxy() {
        metadata_line(ui, icons::PROXY, proxy);
    }
    // Recomputed here rather than shared with the groups column, which may be hidden.
    metadata_line(ui, icons::GROUPS, &join_group_names(problem.groups()));
    if problem.maintenance {
        ui.label(icons::MAINTENANCE).on_hover_text("Host in maintenance");
    }
}

fn metadata_line(ui: &mut Ui, icon: &str, value: &str) {
    ui.horizontal(|ui| {
        ui.label(icon);
        ui.label(value);
    });
}
