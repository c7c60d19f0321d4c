use chrono::Utc;
use poem_openapi::{payload::Json, OpenApi, Tags};

use crate::config::DatabaseConnections;
use crate::types::dto::common::HealthResponse;

/// Health check API
pub struct HealthApi {
    connections: DatabaseConnections,
}

impl HealthApi {
    pub fn new(connections: DatabaseConnections) -> Self {
        Self { connections }
    }
}

/// API tags for health endpoints
#[derive(Tags)]
enum ApiTags {
    /// Health check endpoints
    Health,
}

fn store_status(reachable: bool) -> String {
    if reachable { "up" } else { "down" }.to_string()
}

#[OpenApi]
impl HealthApi {
    /// Health check endpoint
    ///
    /// Pings both stores. The service reports `degraded` when only the audit
    /// store is down, since writes still succeed without it.
    #[oai(path = "/health", method = "get", tag = "ApiTags::Health")]
    async fn health(&self) -> Json<HealthResponse> {
        let primary_up = self.connections.primary.ping().await.is_ok();
        let audit_up = self.connections.audit.ping().await.is_ok();

        let status = match (primary_up, audit_up) {
            (true, true) => "healthy",
            (true, false) => "degraded",
            _ => "unhealthy",
        };

        Json(HealthResponse {
            status: status.to_string(),
            primary_store: store_status(primary_up),
            audit_store: store_status(audit_up),
            timestamp: Utc::now().to_rfc3339(),
        })
    }
}
