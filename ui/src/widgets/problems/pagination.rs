//! Pagination footer under the problems table.

use egui::{Button, ComboBox, Ui};
use triggers_states::{PAGE_SIZE_OPTIONS, Pagination};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationAction {
    Previous,
    Next,
    PageSize(usize),
}

/// Renders Previous / page indicator / page size / Next.
///
/// Returns the action the user picked, if any; the caller applies it.
pub fn pagination_footer(ui: &mut Ui, pagination: &Pagination, total: usize) -> Option<PaginationAction> {
    let mut action = None;

    ui.horizontal(|ui| {
        if ui
            .add_enabled(pagination.can_previous(), Button::new("Previous"))
            .clicked()
        {
            action = Some(PaginationAction::Previous);
        }

        ui.label(format!(
            "Page {} of {}",
            pagination.page() + 1,
            pagination.page_count(total)
        ));

        let current = pagination.page_size();
        let mut selected = current;
        ComboBox::from_id_salt("problems_page_size")
            .selected_text(format!("{current} rows"))
            .show_ui(ui, |ui| {
                for size in PAGE_SIZE_OPTIONS {
                    ui.selectable_value(&mut selected, size, format!("{size} rows"));
                }
            });
        if selected != current {
            action = Some(PaginationAction::PageSize(selected));
        }

        if ui
            .add_enabled(pagination.can_next(total), Button::new("Next"))
            .clicked()
        {
            action = Some(PaginationAction::Next);
        }
    });

    action
}

#[cfg(test)]
mod tests {
    use egui_kittest::Harness;
    use kittest::Queryable;

    use super::*;

    struct FooterFixture {
        pagination: Pagination,
        total: usize,
        action: Option<PaginationAction>,
    }

    fn harness(total: usize) -> Harness<'static, FooterFixture> {
        Harness::new_ui_state(
            |ui, fixture: &mut FooterFixture| {
                if let Some(action) = pagination_footer(ui, &fixture.pagination, fixture.total) {
                    fixture.action = Some(action);
                }
            },
            FooterFixture {
                pagination: Pagination::default(),
                total,
                action: None,
            },
        )
    }

    #[test]
    fn shows_page_indicator() {
        let harness = harness(25);
        assert!(harness.query_by_label("Page 1 of 3").is_some());
    }

    #[test]
    fn empty_list_still_has_one_page() {
        let harness = harness(0);
        assert!(harness.query_by_label("Page 1 of 1").is_some());
    }

    #[test]
    fn next_click_is_reported() {
        let mut harness = harness(25);
        harness.get_by_label("Next").click();
        harness.step();

        assert_eq!(harness.state().action, Some(PaginationAction::Next));
    }

    #[test]
    fn disabled_previous_reports_nothing() {
        let mut harness = harness(25);
        harness.get_by_label("Previous").click();
        harness.step();

        assert_eq!(harness.state().action, None);
    }
}
