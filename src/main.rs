use {
    internal_audit::{
        AppState, config::Config, infra::postgres::audit_repo::PgAuditSink, server,
        services::audit_recorder::AuditRecorder,
    },
    sqlx::postgres::PgPoolOptions,
    std::{error::Error, sync::Arc, time::Duration},
    tokio::signal,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let config = Config::from_env().inspect_err(|e| tracing::error!("config: {e}"))?;

    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(3))
        .connect(&config.database_url)
        .await
        .inspect_err(|e| tracing::error!("failed to connect to database: {e}"))?;

    let recorder = AuditRecorder::new(
        Arc::new(PgAuditSink::new(pool)),
        config.service.clone(),
        config.audit_timeout,
    );
    let state = AppState {
        recorder,
        greeting: config.greeting.clone(),
    };

    let app = server::router(state, config.request_timeout);
    let server = server::Server::bind(config.bind_addr, app)
        .await
        .inspect_err(|e| tracing::error!(addr = %config.bind_addr, "failed to bind: {e}"))?;

    tracing::info!(service = %config.service, "starting");
    server.run(shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to listen for ctrl+c: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl+c, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
