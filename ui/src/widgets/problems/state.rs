//! State for the problem list: the current snapshot plus the presentation
//! state (expanded rows and page) derived from it.

use std::ops::Range;

use triggers_business::{
    ColumnDescriptor, PanelDisplayOptions, ProblemRecord, ProblemSnapshot, StatusColors,
    compose_columns,
};
use triggers_states::{ExpansionState, Pagination, RowExpansion};

#[derive(Debug, Default)]
pub struct ProblemListState {
    /// Rows of the current snapshot, in display order.
    pub(crate) problems: Vec<ProblemRecord>,
    pub(crate) options: PanelDisplayOptions,
    /// Opaque flag from the data-fetch side, shown as an overlay.
    pub(crate) loading: bool,
    pub(crate) status_colors: StatusColors,
    /// Expanded rows, keyed by position on the current page.
    pub(crate) expansion: ExpansionState,
    pub(crate) pagination: Pagination,
}

impl ProblemListState {
    pub fn new(page_size: usize) -> Self {
        Self {
            pagination: Pagination::new(page_size),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_status_colors(mut self, status_colors: StatusColors) -> Self {
        self.status_colors = status_colors;
        self
    }

    /// Replaces everything the data-fetch side owns.
    pub fn set_snapshot(&mut self, snapshot: ProblemSnapshot) {
        let ProblemSnapshot {
            problems,
            panel_options,
            loading,
        } = snapshot;
        self.set_problems(problems);
        self.options = panel_options;
        self.loading = loading;
    }

    /// Replaces the rows. Positions now point at other records, so every
    /// expansion is dropped and the page is pulled back into range.
    pub fn set_problems(&mut self, problems: Vec<ProblemRecord>) {
        log::debug!("Problem list now has {} rows", problems.len());
        self.problems = problems;
        self.expansion.reset();
        self.pagination.clamp(self.problems.len());
    }

    pub fn set_options(&mut self, options: PanelDisplayOptions) {
        self.options = options;
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    pub fn problems(&self) -> &[ProblemRecord] {
        &self.problems
    }

    pub fn options(&self) -> &PanelDisplayOptions {
        &self.options
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn status_colors(&self) -> &StatusColors {
        &self.status_colors
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    pub fn columns(&self) -> Vec<ColumnDescriptor> {
        compose_columns(&self.options, &self.problems)
    }

    pub fn page_range(&self) -> Range<usize> {
        self.pagination.page_range(self.problems.len())
    }

    pub fn page_rows(&self) -> &[ProblemRecord] {
        &self.problems[self.page_range()]
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.problems.len())
    }

    /// Toggles the detail panel of the `row`-th row on the current page.
    /// Rows off the page are ignored.
    pub fn toggle_row(&mut self, row: usize) -> RowExpansion {
        if row >= self.page_range().len() {
            log::warn!("Ignoring expansion toggle for row {row} outside the page");
            return RowExpansion::Collapsed;
        }
        self.expansion.toggle(row)
    }

    pub fn row_state(&self, row: usize) -> RowExpansion {
        self.expansion.row_state(row)
    }

    pub fn next_page(&mut self) -> bool {
        let changed = self.pagination.next(self.problems.len());
        self.after_page_change(changed)
    }

    pub fn previous_page(&mut self) -> bool {
        let changed = self.pagination.previous();
        self.after_page_change(changed)
    }

    pub fn set_page(&mut self, page: usize) -> bool {
        let changed = self.pagination.set_page(page, self.problems.len());
        self.after_page_change(changed)
    }

    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        let changed = self.pagination.set_page_size(page_size, self.problems.len());
        self.after_page_change(changed)
    }

    fn after_page_change(&mut self, changed: bool) -> bool {
        if changed {
            self.expansion.reset();
        }
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problems(count: usize) -> Vec<ProblemRecord> {
        (0..count)
            .map(|i| ProblemRecord {
                triggerid: i.to_string(),
                description: format!("Problem {i}"),
                ..ProblemRecord::default()
            })
            .collect()
    }

    #[test]
    fn page_rows_follow_pagination() {
        let mut state = ProblemListState::new(10);
        state.set_problems(problems(25));

        assert_eq!(state.page_rows().len(), 10);
        assert!(state.next_page());
        assert!(state.next_page());
        assert_eq!(state.page_rows().len(), 5);
        assert_eq!(state.page_rows()[0].description, "Problem 20");
        assert_eq!(state.page_count(), 3);
    }

    #[test]
    fn page_change_collapses_rows() {
        let mut state = ProblemListState::new(10);
        state.set_problems(problems(25));
        state.toggle_row(3);
        assert!(state.expansion().is_expanded(3));

        state.next_page();
        assert!(state.expansion().is_empty());
    }

    #[test]
    fn failed_page_change_keeps_rows_expanded() {
        let mut state = ProblemListState::new(10);
        state.set_problems(problems(5));
        state.toggle_row(1);

        assert!(!state.next_page());
        assert!(state.expansion().is_expanded(1));
    }

    #[test]
    fn new_rows_collapse_and_clamp() {
        let mut state = ProblemListState::new(10);
        state.set_problems(problems(30));
        state.set_page(2);
        state.toggle_row(0);

        state.set_problems(problems(12));
        assert!(state.expansion().is_empty());
        assert_eq!(state.pagination().page(), 1);
        assert_eq!(state.page_rows().len(), 2);
    }

    #[test]
    fn toggle_outside_page_is_ignored() {
        let mut state = ProblemListState::new(10);
        state.set_problems(problems(3));
        assert_eq!(state.toggle_row(5), RowExpansion::Collapsed);
        assert!(state.expansion().is_empty());
    }

    #[test]
    fn options_change_keeps_expansion() {
        let mut state = ProblemListState::new(10);
        state.set_problems(problems(3));
        state.toggle_row(0);
        state.set_options(PanelDisplayOptions::unset());
        assert!(state.expansion().is_expanded(0));
    }
}
