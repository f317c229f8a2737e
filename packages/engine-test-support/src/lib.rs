//! Engine test support utilities
//!
//! Shared by the engine's unit and integration tests: logging bootstrap, proptest
//! configuration and helpers for writing scripted answers.

pub mod answers;
pub mod proptest_prelude;
pub mod test_logging;
