//! Column layout for the problems table.

use egui_extras::Column;
use triggers_business::ColumnDescriptor;

pub const ROW_HEIGHT: f32 = 30.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Minimum width of a column that has neither a fixed nor a minimum width.
pub const FLEXIBLE_MIN_WIDTH: f32 = 80.0;

/// Maps composed column descriptors to table columns, in the same order.
///
/// Fixed-width descriptors become exact columns; the rest share the
/// remaining space. Every table segment of a page uses the same mapping, so
/// segments line up as long as they get the same available width.
#[inline]
pub fn table_columns(descriptors: &[ColumnDescriptor]) -> Vec<Column> {
    descriptors.iter().map(table_column).collect()
}

fn table_column(descriptor: &ColumnDescriptor) -> Column {
    match descriptor.width {
        Some(width) => Column::exact(width),
        None => Column::remainder().at_least(descriptor.min_width.unwrap_or(FLEXIBLE_MIN_WIDTH)),
    }
}

#[cfg(test)]
mod tests {
    use triggers_business::{PanelDisplayOptions, compose_columns};

    use super::*;

    #[test]
    fn one_table_column_per_descriptor() {
        let descriptors = compose_columns(&PanelDisplayOptions::unset(), &[]);
        assert_eq!(table_columns(&descriptors).len(), descriptors.len());
    }
}
