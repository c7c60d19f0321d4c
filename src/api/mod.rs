// API layer - HTTP endpoints
pub mod employees;
pub mod health;

use std::sync::Arc;

use poem::Route;
use poem_openapi::OpenApiService;

pub use employees::EmployeeApi;
pub use health::HealthApi;

use crate::app_data::AppData;
use crate::coordinators::EmployeeCoordinator;

/// Compose the OpenAPI service and Swagger UI into one route tree
///
/// Endpoints are served under `/api`, the Swagger UI under `/swagger`.
pub fn build_routes(app_data: Arc<AppData>, server_url: &str) -> Route {
    let health_api = HealthApi::new(app_data.connections.clone());
    let employee_coordinator = Arc::new(EmployeeCoordinator::new(app_data));
    let employee_api = EmployeeApi::new(employee_coordinator);

    let api_service = OpenApiService::new((health_api, employee_api), "Employee Ledger API", "1.0.0")
        .server(format!("{}/api", server_url));

    let ui = api_service.swagger_ui();

    Route::new().nest("/api", api_service).nest("/swagger", ui)
}
