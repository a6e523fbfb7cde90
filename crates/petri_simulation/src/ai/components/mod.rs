//! AI components

pub mod hunter;
pub mod bacteria;
pub mod chase;

// Tests (separate files with _tests suffix)
#[cfg(test)]
mod fsm_tests;

// Re-export all components
pub use hunter::*;
pub use bacteria::*;
pub use chase::*;
