//! ocnav library exports (also used by the integration tests)

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
