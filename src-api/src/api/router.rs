// FICHIER : src-api/src/api/router.rs

//! Résolution `chemin HTTP -> { collection, id }`.

use crate::collections::CollectionName;
use crate::utils::error::{AppError, VitrineResult};
use regex::Regex;
use std::sync::OnceLock;

pub const API_PREFIX: &str = "/api";

/// Cible d'une requête : une collection, éventuellement un élément.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub collection: CollectionName,
    pub item_id: Option<i64>,
}

fn route_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^/api/([A-Za-z0-9_-]+)(?:/(\d+))?/?$").expect("motif de route constant")
    })
}

/// `/api/<nom>` ou `/api/<nom>/<chiffres>`, barre finale tolérée.
///
/// Un chemin hors de ces deux formes est `InvalidPath` ; un nom hors de la
/// liste connue est `UnknownCollection`.
pub fn resolve(path: &str) -> VitrineResult<Route> {
    let Some(caps) = route_pattern().captures(path) else {
        return Err(AppError::InvalidPath(path.to_string()));
    };

    let collection: CollectionName = caps[1].parse()?;
    let item_id = match caps.get(2) {
        Some(m) => Some(
            m.as_str()
                .parse::<i64>()
                .map_err(|_| AppError::InvalidPath(path.to_string()))?,
        ),
        None => None,
    };

    Ok(Route {
        collection,
        item_id,
    })
}

/// Identifiant passé en paramètre de requête (`?id=`).
pub fn parse_item_id(raw: Option<&str>) -> VitrineResult<i64> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Err(AppError::BadRequest("Item id is required".to_string()));
    };
    raw.parse::<i64>()
        .map_err(|_| AppError::BadRequest(format!("Invalid item id '{}'", raw)))
}

pub fn is_api_path(path: &str) -> bool {
    path == API_PREFIX || path.starts_with("/api/")
}
