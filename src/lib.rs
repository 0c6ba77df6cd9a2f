//! lgbrowse library exports for the binary and integration tests

pub mod app;
pub mod aws;
pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
