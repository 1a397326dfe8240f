//! Interaction state for the problems table: which rows are expanded, how
//! far each detail panel has got through its entry transition, and which
//! page is showing.
//!
//! Everything here is plain data driven by the UI once per frame. No type in
//! this crate knows about egui.

mod expansion;
mod pagination;
mod scheduler;
mod transition;

pub use expansion::{ExpansionState, RowExpansion};
pub use pagination::{DEFAULT_PAGE_SIZE, PAGE_SIZE_OPTIONS, Pagination};
pub use scheduler::{DeferredFlip, FrameScheduler};
pub use transition::{DetailPanelState, PanelId, TransitionPhase};
