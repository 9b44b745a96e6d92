pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::middleware;
    use tokio::net::TcpListener;
    use tower_http::services::ServeDir;

    use shared::llm::{CredentialSource, EnvCredential};

    let log_file = system::tracing::initialize()?;
    tracing::info!("Logging to {}", log_file.display());

    let config = shared::config::load_config()?;
    if EnvCredential::new(config.llm.api_key_env.clone())
        .api_key()
        .is_none()
    {
        tracing::warn!(
            "{} is not set; /api/analyze will answer 500 until it is",
            config.llm.api_key_env
        );
    }

    let state = shared::state::AppState::from_config(&config);

    let app = routes::configure_routes(state)
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(system::middleware::request_logger));

    let addr = config.server.socket_addr()?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
