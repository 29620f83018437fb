use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    routing::{get, MethodRouter},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::api::openapi;
use crate::config::AppConfig;
use crate::database::{AirplaneStore, DatabaseManager, PgAirplaneStore};
use crate::handlers::{airplanes, service};

/// Shared handler state, cloned per request
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn AirplaneStore>,
    /// Present when backed by PostgreSQL; used by /health
    pub database: Option<DatabaseManager>,
}

impl AppState {
    pub fn new(store: Arc<dyn AirplaneStore>) -> Self {
        Self { store, database: None }
    }

    pub fn postgres(database: DatabaseManager) -> Self {
        let store = PgAirplaneStore::new(database.pool().clone());
        Self {
            store: Arc::new(store),
            database: Some(database),
        }
    }
}

pub fn app(state: AppState, config: &AppConfig) -> Router {
    let mut router = Router::new()
        .route("/", json_errors(get(service::root)))
        .route("/health", json_errors(get(service::health)))
        .merge(airplane_routes());

    if config.api.enable_docs {
        router = router.merge(docs_routes());
    }

    let router = router
        .fallback(service::not_found)
        .layer(DefaultBodyLimit::max(config.api.max_request_size_bytes))
        .with_state(state);

    let router = if config.security.enable_cors {
        router.layer(cors_layer(&config.security.cors_origins))
    } else {
        router
    };

    if config.api.enable_request_logging {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

fn airplane_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/airplanes",
            json_errors(
                get(airplanes::list)
                    .post(airplanes::create)
                    .put(airplanes::update),
            ),
        )
        .route(
            "/airplanes/:id",
            json_errors(get(airplanes::get).delete(airplanes::delete)),
        )
}

fn docs_routes() -> Router<AppState> {
    Router::new()
        .route("/openapi.json", json_errors(get(openapi::openapi_json)))
        .route("/docs", json_errors(get(openapi::docs)))
}

/// Unsupported methods on a known path answer 405 with a message body
fn json_errors(route: MethodRouter<AppState>) -> MethodRouter<AppState> {
    route.fallback(service::method_not_allowed)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any)
}
