//! Table header rendering for the problems table.

use egui::Ui;
use egui_extras::TableRow;
use triggers_business::ColumnDescriptor;

/// Renders one bold label per composed column.
#[inline]
pub fn render_table_header(header: &mut TableRow<'_, '_>, columns: &[ColumnDescriptor]) {
    for column in columns {
        header.col(|ui| {
            render_header_cell(ui, column.header);
        });
    }
}

#[inline]
fn render_header_cell(ui: &mut Ui, label: &str) {
    ui.centered_and_justified(|ui| {
        ui.strong(label);
    });
}
