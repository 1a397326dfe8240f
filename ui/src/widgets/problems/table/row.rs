//! Row rendering for the problems table.

use egui::{Stroke, Ui};
use egui_extras::TableRow;
use triggers_business::{ColumnDescriptor, ProblemRecord, StatusColors};

use super::cells::{CellContext, render_cell};

/// Data needed to render one problem row.
pub struct ProblemRowData<'a> {
    pub problem: &'a ProblemRecord,
    pub expanded: bool,
}

/// Result of rendering a problem row.
#[derive(Debug, Default)]
pub struct ProblemRowResult {
    pub toggle_expansion: bool,
}

/// Renders one cell per composed column, in column order.
#[inline]
pub fn render_problem_row(
    row: &mut TableRow<'_, '_>,
    columns: &[ColumnDescriptor],
    data: &ProblemRowData<'_>,
    status_colors: &StatusColors,
) -> ProblemRowResult {
    let mut result = ProblemRowResult::default();
    let ctx = CellContext {
        status_colors,
        expanded: data.expanded,
    };

    for column in columns {
        row.col(|ui| {
            if render_cell(ui, column, data.problem, &ctx) {
                result.toggle_expansion = true;
            }
            draw_cell_bottom_border(ui);
        });
    }

    result
}

/// Draws a bottom border line for a cell.
#[inline]
fn draw_cell_bottom_border(ui: &mut Ui) {
    let rect = ui.max_rect();
    let border_color = ui.visuals().widgets.noninteractive.bg_stroke.color;
    ui.painter().hline(
        rect.left()..=rect.right(),
        rect.bottom(),
        Stroke::new(1.0, border_color),
    );
}
