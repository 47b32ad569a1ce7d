use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ems::common::config::AppConfig;
use ems::common::di::AppServiceFactory;
use ems::interfaces::create_api_routes;

/// EMS - Employee Management System backend
///
/// REST resource for employees consumed by the list view:
///
/// - `GET    /api/employees`       list every employee
/// - `POST   /api/employees`       create one (the id is assigned here)
/// - `GET    /api/employees/{id}`  fetch one
/// - `PUT    /api/employees/{id}`  replace name and email
/// - `DELETE /api/employees/{id}`  delete one
///
/// Storage is PostgreSQL when `EMS_DATABASE_URL` is set and an in-memory
/// table otherwise.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment variables
    let config = AppConfig::from_env();
    let addr = config.server.bind_address();

    let factory = AppServiceFactory::new(config);
    let app_state = factory.create_app_state().await;
    let app = create_api_routes(app_state);

    // Create a standard TCP listener
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Starting EMS server on http://{}", addr);

    axum::serve(listener, app).await?;

    tracing::info!("Server shutdown completed");

    Ok(())
}
