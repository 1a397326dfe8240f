//! Problems panel widgets.
//!
//! - `state`: rows, display options and presentation state
//! - `panel`: the problem list (table segments, overlay, footer)
//! - `details`: detail panel of an expanded row
//! - `pagination`: pagination footer
//! - `table`: columns, header, rows and cells
//! - `icons`: glyphs shared by cells and details

mod details;
pub mod icons;
mod pagination;
mod panel;
mod state;
pub mod table;

pub use details::{FADE_SECONDS, problem_details};
pub use pagination::{PaginationAction, pagination_footer};
pub use panel::{LOADING_TEXT, NO_ROWS_TEXT, problem_list};
pub use state::ProblemListState;
