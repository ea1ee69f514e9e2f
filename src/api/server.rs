use axum::{
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::api::handlers::skills::{
    create_skill, list_my_skills, list_shared_skills, list_skills_by_category, list_teachers,
    list_users_with_skill,
};
use crate::db::connection::create_pool;
use crate::domain::aggregates::{AggregateUpdater, PgAggregateUpdater};

/// Shared state handed to every handler: the store pool plus the
/// aggregate-bookkeeping capability.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub aggregates: Arc<dyn AggregateUpdater>,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        let aggregates: Arc<dyn AggregateUpdater> =
            Arc::new(PgAggregateUpdater::new(pool.clone()));
        Self { pool, aggregates }
    }
}

pub fn init_tracing() {
    let json_logs = env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,sqlx=warn,hyper=warn,tower=warn"));

    if json_logs {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_target(false))
            .with(filter)
            .init();
    } else {
        tracing_subscriber::registry()
            .with(fmt::layer().with_target(false))
            .with(filter)
            .init();
    }
}

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/skills", post(create_skill))
        .route("/skills/mine", get(list_my_skills))
        .route("/skills/category/{category}", get(list_skills_by_category))
        .route("/skills/teachers/{skill_name}", get(list_teachers))
        .route("/skills/shared/{category}", get(list_shared_skills))
        .route("/skills/users", get(list_users_with_skill))
        .route("/health", get(health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}

pub async fn run_server() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting skillswap server");

    let database_url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set")?;
    let pool = create_pool(&database_url).await?;

    sqlx::migrate!().run(&pool).await?;
    info!("Migrations applied");

    let shutdown = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install CTRL+C signal handler");
        info!("Shutting down gracefully...");
    };

    let app = create_app(AppState::new(pool));

    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT")
        .unwrap_or_else(|_| "5000".to_string())
        .parse::<u16>()?;
    let addr: SocketAddr = format!("{host}:{port}").parse()?;

    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    Ok(())
}
