//! Library side of the `numfield` command-line driver.

pub mod commands;
pub mod logging;
pub mod script;
pub mod types;
