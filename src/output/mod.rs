// Output: report files, JSON summary, and terminal display.

pub mod report;
pub mod summary;
pub mod terminal;
