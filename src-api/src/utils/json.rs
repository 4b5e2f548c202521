// FICHIER : src-api/src/utils/json.rs

use crate::raise_error;
use crate::utils::error::VitrineResult;
use serde::de::DeserializeOwned;
use serde::Serialize;

// --- RE-EXPORTS (Single Source of Truth pour le JSON) ---
pub use serde_json::{json, Map, Value};

/// Parse une chaîne JSON en un type T.
/// Capture un extrait du contenu en cas d'échec.
pub fn parse<T: DeserializeOwned>(s: &str) -> VitrineResult<T> {
    match serde_json::from_str(s) {
        Ok(val) => Ok(val),
        Err(e) => {
            let snippet: String = s.chars().take(100).collect();
            raise_error!(
                "ERR_JSON_PARSE",
                error = e,
                context = json!({ "snippet": snippet })
            );
        }
    }
}

/// Convertit un type T en chaîne JSON formatée (pretty).
pub fn stringify_pretty<T: Serialize>(v: &T) -> VitrineResult<String> {
    match serde_json::to_string_pretty(v) {
        Ok(s) => Ok(s),
        Err(e) => raise_error!("ERR_JSON_STRINGIFY_PRETTY", error = e),
    }
}
