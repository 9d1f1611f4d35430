use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod config;
mod error;
mod models;
mod routes;

use adapters::{InMemoryTeacherRepository, PgTeacherRepository};
use application::TeacherService;
use config::{ServerConfig, StoreBackend};
use faculty::TeacherRepository;

/// Teacher service over whichever record store was configured
pub type AppTeacherService = TeacherService<dyn TeacherRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub teacher_service: Arc<AppTeacherService>,
    pub store: StoreBackend,
}

impl AppState {
    pub fn new(repo: Arc<dyn TeacherRepository>, store: StoreBackend) -> Self {
        Self {
            teacher_service: Arc::new(TeacherService::new(repo)),
            store,
        }
    }

    /// State over a fresh in-memory store
    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryTeacherRepository::new()), StoreBackend::Memory)
    }
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
    store: String,
}

async fn health_check(State(state): State<AppState>) -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
        message: "Faculty API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        store: state.store.to_string(),
    })
}

/// Full HTTP surface with shared state applied
pub fn build_router(state: AppState) -> Router {
    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::teacher::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[shuttle_runtime::main]
async fn main(
    #[shuttle_shared_db::Postgres] pool: PgPool,
    #[shuttle_runtime::Secrets] secrets: shuttle_runtime::SecretStore,
) -> shuttle_axum::ShuttleAxum {
    tracing::info!("📚 Faculty API initializing...");

    let config = ServerConfig::load(&secrets)?;

    let repo: Arc<dyn TeacherRepository> = match config.store {
        StoreBackend::Postgres => {
            sqlx::migrate!().run(&pool).await.map_err(anyhow::Error::from)?;
            tracing::info!("✅ Database migrations completed");
            Arc::new(PgTeacherRepository::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("⚠️  In-memory store selected - records are lost on restart");
            Arc::new(InMemoryTeacherRepository::new())
        }
    };

    let state = AppState::new(repo, config.store);
    let router = build_router(state);

    tracing::info!("📖 Swagger UI: /swagger-ui");
    tracing::info!("✅ Faculty API ready ({} store)", config.store);

    Ok(router.into())
}
