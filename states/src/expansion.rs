//! Which rows of the current page are expanded, and the detail panel each
//! expanded row owns.
//!
//! Rows are identified by their position on the page, not by record id.
//! Anything that changes which record sits at a position (new data, another
//! page, another page size) must call [`ExpansionState::reset`].

use std::collections::BTreeMap;

use crate::scheduler::FrameScheduler;
use crate::transition::{DetailPanelState, PanelId, TransitionPhase};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowExpansion {
    Collapsed,
    Entering,
    Visible,
}

#[derive(Debug, Default)]
pub struct ExpansionState {
    panels: BTreeMap<usize, DetailPanelState>,
    next_generation: u64,
    scheduler: FrameScheduler,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expands a collapsed row or collapses an expanded one. Returns the
    /// row's state afterwards.
    pub fn toggle(&mut self, row: usize) -> RowExpansion {
        if !self.collapse(row) {
            self.expand(row);
        }
        self.row_state(row)
    }

    /// Creates a fresh detail panel for `row`. Returns `false` if the row
    /// was already expanded.
    pub fn expand(&mut self, row: usize) -> bool {
        if self.panels.contains_key(&row) {
            return false;
        }
        let id = PanelId::new(self.next_generation);
        self.next_generation += 1;
        self.panels.insert(row, DetailPanelState::new(id));
        log::debug!("Expanded row {row} with detail panel {id:?}");
        true
    }

    /// Drops the detail panel of `row`. Returns `false` if it had none.
    pub fn collapse(&mut self, row: usize) -> bool {
        let removed = self.panels.remove(&row);
        if let Some(panel) = &removed {
            log::debug!("Collapsed row {row}, disposed detail panel {:?}", panel.id());
        }
        removed.is_some()
    }

    pub fn is_expanded(&self, row: usize) -> bool {
        self.panels.contains_key(&row)
    }

    pub fn row_state(&self, row: usize) -> RowExpansion {
        match self.panels.get(&row).map(DetailPanelState::phase) {
            None => RowExpansion::Collapsed,
            Some(TransitionPhase::Entering) => RowExpansion::Entering,
            Some(TransitionPhase::Visible) => RowExpansion::Visible,
        }
    }

    /// Expanded row positions in ascending order.
    pub fn expanded_rows(&self) -> impl Iterator<Item = usize> + '_ {
        self.panels.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    pub fn panel(&self, row: usize) -> Option<&DetailPanelState> {
        self.panels.get(&row)
    }

    /// The panel of `row` together with the scheduler it mounts against.
    pub fn panel_mut(&mut self, row: usize) -> Option<(&mut DetailPanelState, &FrameScheduler)> {
        let scheduler = &self.scheduler;
        self.panels.get_mut(&row).map(|panel| (panel, scheduler))
    }

    /// Collapses every row. Flips already queued by the dropped panels are
    /// left in the scheduler and discarded as stale when drained.
    pub fn reset(&mut self) {
        if !self.panels.is_empty() {
            log::debug!("Resetting {} expanded rows", self.panels.len());
        }
        self.panels.clear();
    }

    /// Applies the flips queued during earlier frames. Call once at the start
    /// of each frame, before anything is drawn. Returns how many panels
    /// became visible.
    pub fn apply_pending_flips(&mut self) -> usize {
        let mut applied = 0;
        for flip in self.scheduler.drain() {
            if flip.is_stale() {
                log::trace!("Discarding stale flip for {:?}", flip.panel());
                continue;
            }
            match self.panels.values_mut().find(|p| p.id() == flip.panel()) {
                Some(panel) => {
                    panel.reveal();
                    applied += 1;
                }
                None => log::trace!("No live panel for flip {:?}", flip.panel()),
            }
        }
        applied
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }
}
