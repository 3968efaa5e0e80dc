//! Internal test modules - whitebox tests with crate access
//!
//! These drive `TuiApp` through the test harness and need crate-private
//! helpers, so they live inside the crate.
