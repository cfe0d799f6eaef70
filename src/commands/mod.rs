pub mod count;

pub use count::{count_lines, run_count, run_count_impl};
