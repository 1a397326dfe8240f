//! Problem table.
//!
//! The current page is drawn as one or more table segments: a segment ends
//! after every expanded row, and that row's detail panel is drawn between
//! it and the next segment at full width. All segments share the same
//! column layout, and only the first carries the header.

use egui::{Align, Frame, Layout, Margin, Rect, Response, ScrollArea, Stroke, Ui, UiBuilder};
use egui_extras::{TableBody, TableBuilder};
use triggers_business::{ColumnDescriptor, ProblemRecord, StatusColors};
use triggers_states::ExpansionState;

use super::details::problem_details;
use super::pagination::{PaginationAction, pagination_footer};
use super::state::ProblemListState;
use super::table::columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use super::table::header::render_table_header;
use super::table::row::{ProblemRowData, render_problem_row};
use crate::utils::colors::TABLE_BORDER_COLOR;

pub const NO_ROWS_TEXT: &str = "No rows found";
pub const LOADING_TEXT: &str = "Loading...";

/// Displays the problem list: table, detail panels, loading overlay and
/// pagination footer.
pub fn problem_list(ui: &mut Ui, state: &mut ProblemListState) -> Response {
    // Flips queued by panels drawn last frame land before anything is drawn.
    let revealed = state.expansion.apply_pending_flips();
    if revealed > 0 {
        log::trace!("{revealed} detail panels turned visible");
    }

    let columns = state.columns();
    let range = state.pagination.page_range(state.problems.len());
    let mut toggled_row = None;

    let response = ui.vertical(|ui| {
        let table = Frame::NONE
            .stroke(Stroke::new(1.0, TABLE_BORDER_COLOR))
            .inner_margin(Margin::same(4))
            .show(ui, |ui| {
                ScrollArea::vertical()
                    .id_salt("problems_scroll")
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        toggled_row = problem_table(
                            ui,
                            &columns,
                            &state.problems[range.clone()],
                            &mut state.expansion,
                            &state.status_colors,
                        );
                    });
            });

        if state.loading {
            loading_overlay(ui, table.response.rect);
        }

        ui.add_space(8.0);
        pagination_footer(ui, &state.pagination, state.problems.len())
    });

    // Apply after drawing; the clicked row was drawn from the old state.
    if let Some(row) = toggled_row {
        state.toggle_row(row);
    }

    match response.inner {
        Some(PaginationAction::Previous) => {
            state.previous_page();
        }
        Some(PaginationAction::Next) => {
            state.next_page();
        }
        Some(PaginationAction::PageSize(size)) => {
            state.set_page_size(size);
        }
        None => {}
    }

    response.response
}

/// Draws the page rows and the detail panels of expanded rows.
///
/// Returns the page row whose expander was clicked, if any.
fn problem_table(
    ui: &mut Ui,
    columns: &[ColumnDescriptor],
    rows: &[ProblemRecord],
    expansion: &mut ExpansionState,
    status_colors: &StatusColors,
) -> Option<usize> {
    if rows.is_empty() {
        table_segment(ui, 0, columns, rows, 0, expansion, status_colors);
        ui.add_space(8.0);
        ui.vertical_centered(|ui| {
            ui.weak(NO_ROWS_TEXT);
        });
        return None;
    }

    let mut toggled = None;
    let mut start = 0;
    for (segment, end) in segment_ends(rows.len(), expansion).into_iter().enumerate() {
        let segment_rows = &rows[start..end];
        if let Some(row) = table_segment(ui, segment, columns, segment_rows, start, expansion, status_colors) {
            toggled = Some(row);
        }

        let last = end - 1;
        if let Some((panel, scheduler)) = expansion.panel_mut(last) {
            ui.push_id(("problem_details", last), |ui| {
                problem_details(ui, &rows[last], panel, scheduler);
            });
        }
        start = end;
    }
    toggled
}

/// Exclusive end of each table segment of a page: one after every expanded
/// row, plus the end of the page.
fn segment_ends(row_count: usize, expansion: &ExpansionState) -> Vec<usize> {
    let mut ends: Vec<usize> = expansion
        .expanded_rows()
        .filter(|&row| row < row_count)
        .map(|row| row + 1)
        .collect();
    if ends.last() != Some(&row_count) {
        ends.push(row_count);
    }
    ends
}

fn table_segment(
    ui: &mut Ui,
    segment: usize,
    columns: &[ColumnDescriptor],
    rows: &[ProblemRecord],
    first_row: usize,
    expansion: &ExpansionState,
    status_colors: &StatusColors,
) -> Option<usize> {
    let mut toggled = None;

    ui.push_id(("problems_segment", segment), |ui| {
        let mut table = TableBuilder::new(ui)
            .striped(true)
            .resizable(false)
            .vscroll(false)
            .cell_layout(Layout::left_to_right(Align::Center));
        for column in table_columns(columns) {
            table = table.column(column);
        }

        let body = |mut body: TableBody<'_>| {
            for (offset, problem) in rows.iter().enumerate() {
                let index = first_row + offset;
                let data = ProblemRowData {
                    problem,
                    expanded: expansion.is_expanded(index),
                };
                body.row(ROW_HEIGHT, |mut row| {
                    if render_problem_row(&mut row, columns, &data, status_colors).toggle_expansion {
                        toggled = Some(index);
                    }
                });
            }
        };

        if segment == 0 {
            table
                .header(HEADER_HEIGHT, |mut header| {
                    render_table_header(&mut header, columns);
                })
                .body(body);
        } else {
            table.body(body);
        }
    });

    toggled
}

/// Dims `rect` and shows a spinner over it. Rows underneath stay drawn.
fn loading_overlay(ui: &mut Ui, rect: Rect) {
    let fill = ui.visuals().panel_fill.gamma_multiply(0.8);
    ui.painter().rect_filled(rect, 0.0, fill);
    ui.scope_builder(
        UiBuilder::new()
            .max_rect(rect)
            .layout(Layout::top_down(Align::Center)),
        |ui| {
            ui.add_space((rect.height() / 2.0 - 20.0).max(0.0));
            ui.spinner();
            ui.label(LOADING_TEXT);
        },
    );
}
