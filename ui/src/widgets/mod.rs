pub mod problems;

pub use problems::{ProblemListState, problem_list};
