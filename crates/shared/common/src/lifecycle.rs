//! HTTP service lifecycle: start, wait for a termination signal, drain.
//!
//! [`ServiceLifecycle`] is a two-state machine (`Stopped -> Running -> Stopped`)
//! that owns the listener task. `start` returns as soon as the listener is
//! bound; the accept loop runs on a background task. `shutdown` stops accepting
//! new connections and waits for in-flight requests, bounded by a grace period.
//!
//! Every connection task lives in a `JoinSet` owned by the accept loop, so
//! aborting that loop tears down the connections with it.

use std::any::Any;
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

use axum::response::{IntoResponse, Response};
use axum::Router;
use hyper::body::Incoming;
use hyper_util::rt::{TokioExecutor, TokioIo};
use hyper_util::server::conn::auto::Builder;
use thiserror::Error;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{oneshot, watch};
use tokio::task::{JoinHandle, JoinSet};
use tower::ServiceExt;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, warn};

use crate::config::ServiceConfig;
use crate::error::AppError;
use crate::signal::TerminationSignal;

/// Errors raised while starting or stopping a service.
#[derive(Error, Debug)]
pub enum LifecycleError {
    #[error("{0} is already running")]
    AlreadyRunning(String),

    #[error("{0} is not running")]
    NotRunning(String),

    #[error("failed to listen on {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("failed to register termination signals: {0}")]
    Signal(#[source] io::Error),

    #[error("server task failed: {0}")]
    Task(String),

    #[error("in-flight requests did not finish within {0:?}; server was terminated")]
    ForcedTermination(Duration),
}

/// Handles owned while the server is accepting connections.
struct RunningServer {
    local_addr: SocketAddr,
    stop: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

enum State {
    Stopped,
    Running(RunningServer),
}

/// Start/stop controller for one HTTP service.
pub struct ServiceLifecycle {
    name: String,
    addr: SocketAddr,
    grace_period: Duration,
    state: State,
}

impl ServiceLifecycle {
    pub fn new(name: impl Into<String>, addr: SocketAddr, grace_period: Duration) -> Self {
        Self {
            name: name.into(),
            addr,
            grace_period,
            state: State::Stopped,
        }
    }

    /// Build a controller from the shared listener configuration.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, std::net::AddrParseError> {
        Ok(Self::new(
            config.service_name.clone(),
            config.addr()?,
            config.shutdown_grace(),
        ))
    }

    pub fn is_running(&self) -> bool {
        matches!(self.state, State::Running(_))
    }

    /// Address actually bound, once running. Differs from the configured one
    /// when port 0 was requested.
    pub fn local_addr(&self) -> Option<SocketAddr> {
        match &self.state {
            State::Running(server) => Some(server.local_addr),
            State::Stopped => None,
        }
    }

    /// Bind the listener and start serving `router` on a background task.
    ///
    /// Every request runs behind a panic boundary, so one failing handler
    /// answers 500 without taking the accept loop down. Returns the handle the
    /// caller awaits to learn about SIGINT/SIGTERM.
    pub async fn start(&mut self, router: Router) -> Result<TerminationSignal, LifecycleError> {
        if self.is_running() {
            return Err(LifecycleError::AlreadyRunning(self.name.clone()));
        }

        let listener = TcpListener::bind(self.addr)
            .await
            .map_err(|source| LifecycleError::Bind {
                addr: self.addr,
                source,
            })?;
        let local_addr = listener.local_addr().map_err(|source| LifecycleError::Bind {
            addr: self.addr,
            source,
        })?;
        let signal = TerminationSignal::register().map_err(LifecycleError::Signal)?;

        let app = router
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(TraceLayer::new_for_http());

        let (stop, stopped) = oneshot::channel::<()>();
        let task = tokio::spawn(accept_loop(listener, app, self.name.clone(), stopped));

        info!("{} listening on {}", self.name, local_addr);
        self.state = State::Running(RunningServer {
            local_addr,
            stop,
            task,
        });

        Ok(signal)
    }

    /// Stop accepting connections and drain in-flight requests.
    ///
    /// The controller is `Stopped` when this returns, whatever the outcome.
    pub async fn shutdown(&mut self) -> Result<(), LifecycleError> {
        let RunningServer { stop, mut task, .. } =
            match std::mem::replace(&mut self.state, State::Stopped) {
                State::Running(server) => server,
                State::Stopped => return Err(LifecycleError::NotRunning(self.name.clone())),
            };

        info!(
            "Shutting down {} (grace period {:?})",
            self.name, self.grace_period
        );
        // The receiver is gone only if the server task already exited.
        let _ = stop.send(());

        match tokio::time::timeout(self.grace_period, &mut task).await {
            Ok(Ok(())) => {
                info!("{} drained and stopped", self.name);
                Ok(())
            }
            Ok(Err(join_error)) => {
                error!("{} server task failed: {}", self.name, join_error);
                Err(LifecycleError::Task(join_error.to_string()))
            }
            Err(_) => {
                warn!(
                    "{} did not drain within {:?}, forcing termination",
                    self.name, self.grace_period
                );
                task.abort();
                // Dropping the accept loop drops its JoinSet, which aborts
                // every connection still being served.
                let _ = task.await;
                Err(LifecycleError::ForcedTermination(self.grace_period))
            }
        }
    }
}

/// Accept connections until `stopped` fires, then drain the open ones.
async fn accept_loop(
    listener: TcpListener,
    app: Router,
    name: String,
    mut stopped: oneshot::Receiver<()>,
) {
    let (drain, draining) = watch::channel(());
    let mut connections = JoinSet::new();

    loop {
        tokio::select! {
            _ = &mut stopped => break,
            accepted = listener.accept() => match accepted {
                Ok((stream, peer)) => {
                    connections.spawn(serve_connection(stream, peer, app.clone(), draining.clone()));
                }
                Err(e) => accept_backoff(e).await,
            },
            Some(_) = connections.join_next(), if !connections.is_empty() => {}
        }
    }

    drop(listener);
    info!("{} stopped accepting connections", name);

    let _ = drain.send(());
    while connections.join_next().await.is_some() {}
}

/// Serve one connection; on drain, finish the current request and close.
async fn serve_connection(
    stream: TcpStream,
    peer: SocketAddr,
    app: Router,
    mut draining: watch::Receiver<()>,
) {
    let service = hyper::service::service_fn(move |request: hyper::Request<Incoming>| {
        app.clone().oneshot(request)
    });

    let builder = Builder::new(TokioExecutor::new());
    let connection = builder.serve_connection_with_upgrades(TokioIo::new(stream), service);
    tokio::pin!(connection);

    let mut drain_requested = false;
    loop {
        tokio::select! {
            result = connection.as_mut() => {
                if let Err(e) = result {
                    debug!("Connection from {} closed with error: {}", peer, e);
                }
                break;
            }
            _ = draining.changed(), if !drain_requested => {
                drain_requested = true;
                connection.as_mut().graceful_shutdown();
            }
        }
    }
}

async fn accept_backoff(error: io::Error) {
    if matches!(
        error.kind(),
        io::ErrorKind::ConnectionRefused
            | io::ErrorKind::ConnectionAborted
            | io::ErrorKind::ConnectionReset
    ) {
        return;
    }

    error!("Accept error: {}", error);
    tokio::time::sleep(Duration::from_secs(1)).await;
}

/// A panicking handler answers 500 with the usual `{"message": ...}` body.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = panic.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic"
    };
    error!("Request handler panicked: {}", detail);

    AppError::internal("internal server error").into_response()
}
