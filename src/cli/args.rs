//! CLI argument definitions using clap
//!
//! Commands:
//! - rowgate serve [--port <port>] [--bind <addr>]
//! - rowgate cgi

use clap::{Parser, Subcommand};

use crate::config::DEFAULT_PORT;

/// rowgate - URI-to-SQL gateway returning JSON
#[derive(Parser, Debug)]
#[command(name = "rowgate")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Listen for HTTP requests and serve them until stopped
    Serve {
        /// Port to listen on
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,

        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        bind: String,
    },

    /// Answer one request from the CGI environment and exit
    Cgi,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
