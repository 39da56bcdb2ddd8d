//! One-time MongoDB bootstrap for the site builder backing store.
//!
//! The runner connects with administrative credentials, selects the target
//! database, then executes the registered steps in order: application user,
//! collection, seed document.

pub mod runner;
pub mod steps;

pub use runner::{run, SUCCESS_MESSAGE};
