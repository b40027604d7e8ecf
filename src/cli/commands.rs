//! CLI command implementations
//!
//! Builds the process configuration (environment-seeded, flag-overridden),
//! constructs the engine, and hands control to the chosen transport. All
//! configuration happens here, once, before any request is served.

use crate::cgi;
use crate::config::GatewayConfig;
use crate::engine::PgEngine;
use crate::handler::Gateway;
use crate::http::HttpServer;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|err| CliError::Runtime(err.to_string()))?;

    match cli.command {
        Command::Serve { port, bind } => {
            let mut config = GatewayConfig::from_env();
            config.port = port;
            config.bind_address = bind;
            runtime.block_on(serve(config))
        }
        Command::Cgi => {
            let config = GatewayConfig::from_env();
            runtime.block_on(answer_cgi(config))
        }
    }
}

/// Run the HTTP accept loop until it fails.
async fn serve(config: GatewayConfig) -> CliResult<()> {
    let engine = PgEngine::new(&config);
    let server = HttpServer::new(config, engine);
    server
        .run()
        .await
        .map_err(|err| CliError::Serve(err.to_string()))
}

/// Answer a single CGI request.
async fn answer_cgi(config: GatewayConfig) -> CliResult<()> {
    let engine = PgEngine::new(&config);
    let gateway = Gateway::new(engine);
    cgi::respond(&gateway)
        .await
        .map_err(|err| CliError::Cgi(err.to_string()))
}
