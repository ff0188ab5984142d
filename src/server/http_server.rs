//! HTTP server implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use log::{debug, error, info, warn};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::signal;
use tokio::sync::{mpsc, Semaphore};
use tokio::task::JoinSet;

use crate::parser::parse_request;
use crate::router::Router;
use crate::server::config::ServerConfig;
use crate::server::error::Error;
use crate::server::response::HttpResponse;
use crate::status::StatusCode;

/// An HTTP server in front of a [`Router`].
pub struct HttpServer {
    /// The server configuration.
    pub config: ServerConfig,
    /// The router every request is dispatched to.
    pub router: Arc<Router>,
}

impl HttpServer {
    /// Create a new HTTP server. The router's table is fixed from here on.
    pub fn new(config: ServerConfig, router: Router) -> Self {
        Self {
            config,
            router: Arc::new(router),
        }
    }

    /// Log the registered routes.
    fn display_server_info(&self) {
        let mut routes: Vec<_> = self
            .router
            .table()
            .iter()
            .map(|entry| format!("{} ({})", entry.key, entry.kind()))
            .collect();
        routes.sort();

        info!("Registered routes:");
        for route in routes {
            info!("  GET {route}");
        }
    }

    /// Set up the TCP listener.
    async fn setup_listener(&self) -> Result<TcpListener, Error> {
        let listener = TcpListener::bind(&self.config.addr).await?;
        info!("Server listening on http://{addr}", addr = self.config.addr);
        Ok(listener)
    }

    /// Set up a Ctrl+C handler for graceful shutdown.
    fn setup_ctrl_c_handler(shutdown_tx: mpsc::Sender<()>, tasks: &mut JoinSet<()>) {
        tasks.spawn(async move {
            match signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl+C, initiating graceful shutdown");
                    let _ = shutdown_tx.send(()).await;
                }
                Err(e) => {
                    error!("Error setting up Ctrl+C handler: {e}");
                }
            }
        });
    }

    /// Handle a new connection.
    fn handle_new_connection(
        mut socket: TcpStream,
        addr: SocketAddr,
        semaphore: Arc<Semaphore>,
        router: Arc<Router>,
        read_buffer_size: usize,
        tasks: &mut JoinSet<()>,
    ) {
        let Ok(permit) = semaphore.try_acquire_owned() else {
            warn!("Connection limit reached, rejecting connection from {addr}");
            tasks.spawn(async move {
                let response = HttpResponse::new(StatusCode::ServiceUnavailable)
                    .with_content_type("text/plain")
                    .with_body_string("Server is at capacity, please try again later");
                let _ = socket.write_all(&response.to_bytes()).await;
            });
            return;
        };

        tasks.spawn(async move {
            // The permit is dropped when the task completes, releasing the semaphore slot
            let _permit = permit;

            if let Err(e) = Self::handle_connection(&mut socket, &router, read_buffer_size).await {
                match e {
                    Error::IoError(_) => error!("Error handling connection from {addr}: {e}"),
                    _ => debug!("Rejected request from {addr}: {e}"),
                }
            }
        });
    }

    /// Handle errors returned by `accept`. Returns true if the server should stop.
    async fn handle_accept_error(e: std::io::Error) -> bool {
        error!("Error accepting connection: {e}");

        if e.kind() == std::io::ErrorKind::BrokenPipe {
            error!("Critical error accepting connection, shutting down");
            return true;
        }

        // For other errors, wait a bit before retrying
        tokio::time::sleep(tokio::time::Duration::from_millis(100)).await;
        false
    }

    /// Perform graceful shutdown.
    async fn perform_shutdown(tasks: &mut JoinSet<()>) {
        info!("Waiting for {len} active connections to complete...", len = tasks.len());
        let shutdown_timeout = tokio::time::Duration::from_secs(30);
        let drained = tokio::time::timeout(shutdown_timeout, async {
            while let Some(res) = tasks.join_next().await {
                if let Err(e) = res {
                    error!("Task failed during shutdown: {e}");
                }
            }
        })
        .await;

        if drained.is_err() {
            warn!("Shutdown timeout reached, aborting {len} connections", len = tasks.len());
            tasks.abort_all();
        }
        info!("Server shutdown complete");
    }

    /// Start the server and listen for incoming connections until Ctrl+C.
    pub async fn start(&self) -> Result<(), Error> {
        let (shutdown_tx, shutdown_rx) = mpsc::channel::<()>(1);
        let mut tasks = JoinSet::new();
        Self::setup_ctrl_c_handler(shutdown_tx, &mut tasks);
        self.serve(shutdown_rx, tasks).await
    }

    /// Run the accept loop until a message arrives on `shutdown_rx`.
    ///
    /// Tasks already in `tasks` are drained along with the connections on shutdown.
    pub async fn serve(&self, mut shutdown_rx: mpsc::Receiver<()>, mut tasks: JoinSet<()>) -> Result<(), Error> {
        self.display_server_info();
        let listener = self.setup_listener().await?;
        let semaphore = Arc::new(Semaphore::new(self.config.max_connections));

        loop {
            tokio::select! {
                _ = shutdown_rx.recv() => {
                    info!("Shutting down server...");
                    break;
                }

                accept_result = listener.accept() => {
                    match accept_result {
                        Ok((socket, addr)) => {
                            Self::handle_new_connection(
                                socket,
                                addr,
                                semaphore.clone(),
                                self.router.clone(),
                                self.config.read_buffer_size,
                                &mut tasks,
                            );
                        }
                        Err(e) => {
                            if Self::handle_accept_error(e).await {
                                break;
                            }
                        }
                    }
                }
            }

            // reap finished connection tasks so the set does not grow unbounded
            while tasks.try_join_next().is_some() {}
        }

        Self::perform_shutdown(&mut tasks).await;
        Ok(())
    }

    /// Handle a single request on a connection.
    ///
    /// A response is always written before returning; the error only tells the
    /// caller why the request was not routed.
    pub async fn handle_connection(
        socket: &mut (impl AsyncRead + AsyncWrite + Unpin),
        router: &Router,
        read_buffer_size: usize,
    ) -> Result<(), Error> {
        let mut buf = vec![0; read_buffer_size];

        let n = socket.read(&mut buf).await?;
        if n == 0 {
            return Ok(()); // Connection closed
        }

        let request = match parse_request(&buf[..n]) {
            Ok(req) => req,
            Err(e) => {
                let response = HttpResponse::new(StatusCode::BadRequest)
                    .with_content_type("text/plain")
                    .with_body_string(format!("Error parsing request: {e}"));
                socket.write_all(&response.to_bytes()).await?;
                return Err(Error::ParseError(e));
            }
        };

        if !request.method.is_served() {
            info!("{method} {target} -> 405", method = request.method, target = request.target);
            let response = HttpResponse::new(StatusCode::MethodNotAllowed)
                .with_header("Allow", "GET")
                .with_content_type("text/plain")
                .with_body_string(format!(
                    "Method {method} not allowed for path: {path}. Allowed methods: GET",
                    method = request.method,
                    path = request.path()
                ));
            socket.write_all(&response.to_bytes()).await?;
            return Err(Error::MethodNotAllowed(request.method, request.target));
        }

        let info = router.dispatch(request.path());
        info!("GET {target} -> {status}", target = request.target, status = info.status.as_u16());

        let response = HttpResponse::from(info);
        socket.write_all(&response.to_bytes()).await?;
        socket.flush().await?;

        Ok(())
    }
}
