//! Table components for the problems list.
//!
//! - `columns`: descriptor to `egui_extras::Column` mapping and row sizes
//! - `header`: header row
//! - `row`: one problem row
//! - `cells`: one render function per cell formatter

pub(crate) mod cells;
pub mod columns;
pub mod header;
pub mod row;
