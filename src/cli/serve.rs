use std::sync::Arc;

use poem::{listener::TcpListener, Server};

use crate::api::build_routes;
use crate::app_data::AppData;
use crate::config::{BootstrapSettings, DatabaseConnections};

/// Connect, migrate, and serve the HTTP API until shutdown
pub async fn run_server(bootstrap_settings: &BootstrapSettings) -> Result<(), Box<dyn std::error::Error>> {
    let connections = DatabaseConnections::init(bootstrap_settings).await?;
    connections.migrate().await?;

    let app_data = Arc::new(AppData::init(connections, bootstrap_settings));

    let bind_address = bootstrap_settings.server_address();
    let server_url = format!("http://localhost:{}", bootstrap_settings.server_port());
    let app = build_routes(app_data, &server_url);

    tracing::info!("Starting server on http://{}", bind_address);
    tracing::info!("Swagger UI available at {}/swagger", server_url);
    tracing::info!("API endpoints available at {}/api", server_url);

    Server::new(TcpListener::bind(bind_address)).run(app).await?;

    Ok(())
}
