use poem_openapi::Object;

/// Response model for health check endpoint
#[derive(Object, Debug)]
pub struct HealthResponse {
    /// `healthy`, `degraded` or `unhealthy`
    pub status: String,

    /// Primary store reachability (`up` / `down`)
    pub primary_store: String,

    /// Audit log store reachability (`up` / `down`)
    pub audit_store: String,

    /// Timestamp of the health check (ISO 8601 format)
    pub timestamp: String,
}
