// FICHIER : src-api/src/utils/net.rs

use crate::raise_error;
use crate::utils::error::VitrineResult;
use reqwest::Client;
use std::time::Duration;

pub const USER_AGENT: &str = concat!("Vitrine-Api/", env!("CARGO_PKG_VERSION"));

/// Construit le client HTTP partagé (pool de connexions interne à reqwest).
/// Construit une seule fois au démarrage puis injecté dans le store.
pub fn build_client(timeout: Duration) -> VitrineResult<Client> {
    match Client::builder()
        .timeout(timeout)
        .pool_idle_timeout(Duration::from_secs(90))
        .user_agent(USER_AGENT)
        .build()
    {
        Ok(client) => Ok(client),
        Err(e) => raise_error!(
            "ERR_NET_CLIENT_BUILD",
            error = e,
            context = serde_json::json!({ "timeout_secs": timeout.as_secs() })
        ),
    }
}

// --- TESTS UNITAIRES ---
