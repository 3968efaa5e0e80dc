//! dragcal
//!
//! Terminal month calendar with tap and drag multi-day selection.
//!
//! Pure core (`model`, `view_state`, `state`) with an impure shell (`view`,
//! `config`, `logging`). Everything below `view` is testable without a
//! terminal.

pub mod config;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;
pub mod view_state;

#[cfg(test)]
mod test_harness;

#[cfg(test)]
mod tests;
