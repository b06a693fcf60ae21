//! Reporters for outputting survey results

mod console;
mod json;

pub use console::{threshold_hint, ConsoleReporter};
pub use json::JsonReporter;
