// FICHIER : src-api/src/main.rs

use std::sync::Arc;

use vitrine::store::CollectionStore;
use vitrine::utils::config::AppConfig;
use vitrine::utils::{init_logging, tracing};

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(c) => Arc::new(c),
        Err(e) => {
            eprintln!("❌ Erreur fatale de configuration : {}", e);
            std::process::exit(1);
        }
    };
    init_logging(&config.log);
    tracing::info!(env = ?config.env_mode, "Démarrage de vitrine...");

    // Le store est construit une seule fois puis injecté dans le routeur.
    let store = match CollectionStore::open(&config) {
        Ok(s) => s,
        Err(e) => {
            tracing::error!("Initialisation du store impossible : {}", e);
            eprintln!("❌ Initialisation du store impossible : {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = vitrine::api::serve(config, store).await {
        tracing::error!("Arrêt du serveur sur erreur : {}", e);
        std::process::exit(1);
    }
}
