// FICHIER : src-api/src/utils/env.rs

use crate::utils::error::{AppError, VitrineResult};
use std::env;
use std::str::FromStr;

/// Récupère une variable d'environnement (Optionnel), valeur nettoyée.
pub fn get_optional(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Récupère une variable d'environnement avec valeur par défaut.
pub fn get_or(key: &str, default: &str) -> String {
    get_optional(key).unwrap_or_else(|| default.to_string())
}

/// Récupère et parse une variable (ex: PORT=8080).
/// `Ok(None)` si absente, erreur si présente mais illisible.
pub fn get_parsed<T: FromStr>(key: &str) -> VitrineResult<Option<T>> {
    match get_optional(key) {
        None => Ok(None),
        Some(val) => val.parse::<T>().map(Some).map_err(|_| {
            AppError::Config(format!(
                "Impossible de parser la variable : {} = '{}'",
                key, val
            ))
        }),
    }
}
