//! Command-line front end for `locid-scanner`.

pub mod cli;
pub mod logging;

pub use cli::{Cli, run};
