//! Terminal output formatting
//!
//! Colored rendering of rows and messages for the plain CLI mode.

pub mod formatters;

pub use formatters::{colored_message, colored_row};
