//! HTTP accept loop
//!
//! Binds the configured address and serves each connection on its own task:
//! read the request head, parse the request line, run the handler, write the
//! framed reply back on the same connection. Per-request state is owned by
//! the task; nothing mutable is shared across requests. A failed accept or a
//! failed request is logged and the loop keeps serving.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::AsyncWriteExt;
use tokio::net::{TcpListener, TcpStream};

use crate::config::GatewayConfig;
use crate::engine::Engine;
use crate::handler::{Gateway, Reply};
use crate::observability::Logger;

use super::errors::{HttpError, HttpResult};
use super::request::{read_head, RequestLine};
use super::response::{assemble, Framing, Status};

/// The raw-socket HTTP transport.
pub struct HttpServer<E: Engine> {
    config: GatewayConfig,
    gateway: Arc<Gateway<E>>,
}

impl<E: Engine + 'static> HttpServer<E> {
    /// Creates a server over the given engine
    pub fn new(config: GatewayConfig, engine: E) -> Self {
        Self {
            config,
            gateway: Arc::new(Gateway::new(engine)),
        }
    }

    /// Run the accept loop. Returns only if the listener cannot be bound.
    pub async fn run(&self) -> HttpResult<()> {
        let addr = self.config.bind_addr();
        let listener = TcpListener::bind(&addr).await.map_err(|err| HttpError::Bind {
            addr: addr.clone(),
            reason: err.to_string(),
        })?;
        Logger::info("SERVER_STARTED", &[("addr", addr.as_str())]);

        loop {
            match listener.accept().await {
                Ok((stream, peer)) => {
                    let gateway = self.gateway.clone();
                    let receive_timeout = self.config.receive_timeout;
                    let peer = peer.to_string();
                    tokio::spawn(async move {
                        serve_connection(gateway, stream, peer, receive_timeout).await;
                    });
                }
                Err(err) => {
                    let reason = err.to_string();
                    Logger::warn("ACCEPT_FAILED", &[("reason", &reason)]);
                }
            }
        }
    }
}

async fn serve_connection<E: Engine>(
    gateway: Arc<Gateway<E>>,
    mut stream: TcpStream,
    peer: String,
    receive_timeout: Duration,
) {
    let reply = match receive_request(&mut stream, receive_timeout).await {
        Ok(line) => {
            Logger::info(
                "REQUEST_RECEIVED",
                &[
                    ("method", line.method.as_str()),
                    ("path", line.path.as_str()),
                    ("peer", peer.as_str()),
                ],
            );
            gateway.handle(&line.method, &line.path).await
        }
        Err(err) => {
            let reason = err.to_string();
            Logger::warn("REQUEST_UNREADABLE", &[("peer", &peer), ("reason", &reason)]);
            Reply::error(Status::BadRequest, &reason)
        }
    };

    let bytes = assemble(Framing::Http10, reply.status, &reply.body);
    if let Err(err) = stream.write_all(&bytes).await {
        let reason = err.to_string();
        Logger::warn("RESPONSE_WRITE_FAILED", &[("peer", &peer), ("reason", &reason)]);
        return;
    }
    let _ = stream.shutdown().await;
}

async fn receive_request(
    stream: &mut TcpStream,
    receive_timeout: Duration,
) -> HttpResult<RequestLine> {
    let head = read_head(stream, receive_timeout).await?;
    RequestLine::parse(&head)
}
