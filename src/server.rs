use {
    crate::{AppState, adapters::internal::internal_handler},
    axum::{Router, http::StatusCode, routing::any},
    std::{future::Future, io, net::SocketAddr, time::Duration},
    tokio::net::TcpListener,
    tower_http::timeout::TimeoutLayer,
};

/// Route table for the service. Usable directly with `tower::ServiceExt`
/// in tests, no socket required.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    Router::new()
        .route("/internal", any(internal_handler))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .with_state(state)
}

/// A bound listener plus its routes. Nothing is served until [`Server::run`].
pub struct Server {
    listener: TcpListener,
    router: Router,
}

impl Server {
    pub async fn bind(addr: SocketAddr, router: Router) -> io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener, router })
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests.
    pub async fn run<F>(self, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.listener.local_addr()?;
        tracing::info!(%addr, "listening");

        axum::serve(
            self.listener,
            self.router
                .into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(shutdown)
        .await?;

        tracing::info!("server stopped");
        Ok(())
    }
}
