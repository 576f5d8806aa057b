use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::Method;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use catalog_api::{router, AppState};
use catalog_infrastructure::database::connection;
use catalog_infrastructure::{PgDishRepository, PgMenuRepository, PgSubmenuRepository};
use catalog_shared::config::AppConfig;
use catalog_shared::AppError;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    catalog_shared::telemetry::init_telemetry();

    info!("Catalog server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            let e = AppError::from(e);
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Connect to Database
    info!("Connecting to database...");
    let pool = connection::create_pool(
        &config.database.url,
        config.database.max_connections,
        config.database.min_connections,
    )
    .await?;
    info!("Database connection established.");

    // Apply pending migrations
    sqlx::migrate!("../../migrations").run(&pool).await?;
    info!("Migrations applied.");

    // Create App State
    let state = AppState {
        menus: Arc::new(PgMenuRepository::new(pool.clone())),
        submenus: Arc::new(PgSubmenuRepository::new(pool.clone())),
        dishes: Arc::new(PgDishRepository::new(pool)),
    };

    // Build router
    let app = router(state)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([
                    Method::GET,
                    Method::POST,
                    Method::PATCH,
                    Method::DELETE,
                    Method::OPTIONS,
                ])
                .allow_headers([axum::http::header::CONTENT_TYPE]),
        );

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
