use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use cit_dispatch_api::api::{router, AppState};
use cit_dispatch_api::config::Settings;
use cit_dispatch_api::domain::calendar::BusinessCalendar;
use cit_dispatch_api::telemetry;

#[tokio::main]
async fn main() {
    // Initialize tracing
    telemetry::init();

    // Load environment variables
    dotenv::dotenv().ok();

    let settings = match Settings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Connecting to database...");
    let pool = match PgPoolOptions::new()
        .max_connections(settings.max_connections)
        .connect(&settings.database_url)
        .await
    {
        Ok(pool) => pool,
        Err(e) => {
            tracing::error!("Failed to connect to database: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = sqlx::migrate!("./migrations").run(&pool).await {
        tracing::error!("Failed to run migrations: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Database connected and migrated");

    // Configure CORS for the dashboard
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    tracing::info!("Business day offset is UTC{}", settings.business_utc_offset);
    let calendar = BusinessCalendar::new(settings.business_utc_offset);

    let app = router(AppState::postgres(pool, &settings.jwt_secret, calendar))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    tracing::info!("Server listening on {}", settings.bind_addr);

    let listener = match tokio::net::TcpListener::bind(settings.bind_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {}: {}", settings.bind_addr, e);
            std::process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        tracing::error!("Server failed: {}", e);
        std::process::exit(1);
    }
}
