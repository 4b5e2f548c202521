// FICHIER : src-api/src/api/response.rs

//! Corps JSON des réponses et conversion `AppError -> réponse HTTP`.

use crate::collections::CollectionName;
use crate::utils::prelude::*;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// `GET` : tableau nu, sauf `products` qui est enveloppé.
pub fn listing(collection: CollectionName, records: Vec<Value>) -> Value {
    if collection.wraps_listing() {
        let mut body = Map::new();
        body.insert("success".to_string(), Value::Bool(true));
        body.insert(collection.as_str().to_string(), Value::Array(records));
        Value::Object(body)
    } else {
        Value::Array(records)
    }
}

pub fn created(collection: CollectionName, record: Value) -> Value {
    json!({
        "success": true,
        "message": collection.created_message(),
        "data": record,
    })
}

pub fn deleted(collection: CollectionName) -> Value {
    json!({
        "success": true,
        "message": collection.deleted_message(),
    })
}

pub fn status_code(err: &AppError) -> StatusCode {
    match err {
        AppError::InvalidPath(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        AppError::UnknownCollection(_) | AppError::NotFound(_) => StatusCode::NOT_FOUND,
        AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
        AppError::Structured(_)
        | AppError::Config(_)
        | AppError::Io(_)
        | AppError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Message renvoyé à l'appelant (le texte interne reste dans les logs).
pub fn client_message(err: &AppError) -> String {
    match err {
        AppError::InvalidPath(_) => "Invalid API path".to_string(),
        AppError::UnknownCollection(name) => format!("Unknown collection '{}'", name),
        AppError::BadRequest(msg) | AppError::NotFound(msg) => msg.clone(),
        AppError::MethodNotAllowed(_) => "Method not allowed".to_string(),
        _ => "Internal server error".to_string(),
    }
}

/// Erreur prête à être renvoyée par un handler.
#[derive(Debug)]
pub struct ApiError {
    inner: AppError,
    expose_detail: bool,
}

impl ApiError {
    /// `expose_detail` : ajoute le champ `error` aux pannes serveur (hors production).
    pub fn new(inner: AppError, expose_detail: bool) -> Self {
        Self {
            inner,
            expose_detail,
        }
    }

    pub fn body(&self) -> Value {
        let mut body = json!({
            "success": false,
            "message": client_message(&self.inner),
        });
        if self.expose_detail && !self.inner.is_client_error() {
            body["error"] = Value::String(self.inner.to_string());
        }
        body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_code(&self.inner);
        if status.is_server_error() {
            error!(status = status.as_u16(), "{}", self.inner);
        } else {
            warn!(status = status.as_u16(), "{}", self.inner);
        }
        (status, Json(self.body())).into_response()
    }
}
