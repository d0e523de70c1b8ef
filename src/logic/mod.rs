//! Pure logic, separated from state and I/O for testability

pub mod listing;
pub mod navigation;
