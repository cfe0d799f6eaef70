mod lines;
mod summary;

pub use lines::LineCounter;
pub use summary::{CountSummary, FileCount};
