// FICHIER : src-api/src/api/mod.rs

//! Couche HTTP : routeur axum, en-têtes CORS et serveur.

pub mod handlers;
pub mod response;
pub mod router;

use crate::store::CollectionStore;
use crate::utils::prelude::*;
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    CONTENT_TYPE,
};
use axum::http::{HeaderValue, Method};
use axum::middleware;
use axum::response::Response;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub const ALLOWED_METHODS: &str = "GET, POST, DELETE, OPTIONS";

/// État partagé par les handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: CollectionStore,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: CollectionStore, config: Arc<AppConfig>) -> Self {
        Self { store, config }
    }
}

pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .fallback(handlers::dispatch)
        .layer(cors)
        .layer(middleware::map_response(cors_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Les trois en-têtes sont posés sur toutes les réponses, erreurs comprises.
async fn cors_headers(mut response: Response) -> Response {
    let headers = response.headers_mut();
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static("*"));
    headers.insert(
        ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOWED_METHODS),
    );
    headers.insert(
        ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type"),
    );
    response
}

/// Lie l'adresse configurée et sert jusqu'à Ctrl-C.
pub async fn serve(config: Arc<AppConfig>, store: CollectionStore) -> VitrineResult<()> {
    let listener = tokio::net::TcpListener::bind(config.server.bind_address()).await?;
    info!(
        address = %listener.local_addr()?,
        backend = store.backend().backend_name(),
        "🚀 Serveur vitrine démarré"
    );

    let app = build_router(AppState::new(store, config));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Serveur arrêté proprement");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Signal d'arrêt reçu"),
        Err(e) => {
            warn!("Écoute de Ctrl-C impossible : {}", e);
            std::future::pending::<()>().await;
        }
    }
}
