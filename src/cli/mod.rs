//! CLI module for rowgate
//!
//! Provides the command-line interface:
//! - serve: bind the port and answer HTTP requests until stopped
//! - cgi: answer one request from the CGI environment and exit

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::run;
pub use errors::{CliError, CliResult};
