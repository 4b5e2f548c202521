// FICHIER : src-api/src/api/handlers.rs

use super::response::{self, ApiError};
use super::router;
use super::AppState;
use crate::collections::CollectionsManager;
use crate::utils::prelude::*;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use std::collections::HashMap;

/// Point d'entrée unique : toutes les requêtes arrivent ici puis sont
/// aiguillées selon `{ collection, id }` et la méthode.
pub async fn dispatch(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Bytes,
) -> Response {
    if method == Method::OPTIONS && router::is_api_path(uri.path()) {
        return StatusCode::OK.into_response();
    }

    match handle(&state, &method, &uri, &body).await {
        Ok(payload) => Json(payload).into_response(),
        Err(e) => ApiError::new(e, !state.config.is_production()).into_response(),
    }
}

async fn handle(state: &AppState, method: &Method, uri: &Uri, body: &[u8]) -> VitrineResult<Value> {
    let route = router::resolve(uri.path())?;
    let collection = route.collection;
    let manager = CollectionsManager::new(&state.store);
    debug!(%method, %collection, item_id = ?route.item_id, "Requête routée");

    if *method == Method::GET && route.item_id.is_none() {
        let records = manager.list(collection).await?;
        Ok(response::listing(collection, records))
    } else if *method == Method::POST && route.item_id.is_none() {
        let payload = parse_body(body)?;
        let record = manager.create(collection, payload).await?;
        Ok(response::created(collection, record))
    } else if *method == Method::DELETE {
        let id = match route.item_id {
            Some(id) => id,
            None => router::parse_item_id(query_id(uri)?.as_deref())?,
        };
        manager.delete(collection, id).await?;
        Ok(response::deleted(collection))
    } else {
        Err(AppError::MethodNotAllowed(method.to_string()))
    }
}

fn parse_body(body: &[u8]) -> VitrineResult<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::BadRequest("Request body is required".to_string()));
    }
    serde_json::from_slice(body)
        .map_err(|e| AppError::BadRequest(format!("Invalid JSON body: {}", e)))
}

fn query_id(uri: &Uri) -> VitrineResult<Option<String>> {
    let Query(mut params) = Query::<HashMap<String, String>>::try_from_uri(uri)
        .map_err(|_| AppError::BadRequest("Invalid query string".to_string()))?;
    Ok(params.remove("id"))
}
