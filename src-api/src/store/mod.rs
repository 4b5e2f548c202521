// FICHIER : src-api/src/store/mod.rs

//! Adaptateur de stockage : toutes les lectures/écritures vers la base de
//! documents passent par ici.
//!
//! Chaque écriture remplace entièrement le noeud visé (aucune fusion, aucune
//! primitive ligne à ligne). Deux requêtes concurrentes sur la même
//! collection peuvent donc s'écraser mutuellement (lecture-modification-
//! écriture sans isolation) : limitation connue et assumée.

pub mod file_store;
pub mod firebase;
pub mod layout;
pub mod memory;
pub mod tree;

use crate::utils::config::StoreBackend;
use crate::utils::net;
use crate::utils::prelude::*;
use std::time::Duration;

pub use file_store::JsonFileStore;
pub use firebase::FirebaseStore;
pub use layout::{RecordLocation, StoredCollection};
pub use memory::MemoryStore;

/// Primitive minimale d'une base de documents arborescente.
#[async_trait]
pub trait DocumentStore: Send + Sync + std::fmt::Debug {
    /// Lit le noeud à `path` ; `None` s'il n'existe pas.
    async fn get(&self, path: &str) -> VitrineResult<Option<Value>>;

    /// Remplace le noeud à `path`.
    async fn set(&self, path: &str, value: &Value) -> VitrineResult<()>;

    /// Supprime le noeud à `path` et tout son contenu.
    async fn remove(&self, path: &str) -> VitrineResult<()>;

    fn backend_name(&self) -> &'static str;
}

/// Vue "collection" au-dessus d'un `DocumentStore`.
/// Construit une fois au démarrage puis partagé par les handlers.
#[derive(Debug, Clone)]
pub struct CollectionStore {
    backend: Arc<dyn DocumentStore>,
}

impl CollectionStore {
    pub fn new(backend: Arc<dyn DocumentStore>) -> Self {
        Self { backend }
    }

    /// Construit le backend choisi par la configuration.
    /// Toute erreur ici est une erreur de démarrage.
    pub fn open(config: &AppConfig) -> VitrineResult<Self> {
        let backend: Arc<dyn DocumentStore> = match config.store.backend {
            StoreBackend::Firebase => {
                let client =
                    net::build_client(Duration::from_secs(config.store.http_timeout_secs))?;
                Arc::new(FirebaseStore::new(client, &config.firebase)?)
            }
            StoreBackend::Memory => Arc::new(MemoryStore::new()),
            StoreBackend::File => {
                let store = JsonFileStore::new(config.store.data_file.clone());
                info!(path = ?store.path(), "Fichier de données");
                Arc::new(store)
            }
        };
        info!(backend = backend.backend_name(), "Store initialisé");
        Ok(Self::new(backend))
    }

    pub fn backend(&self) -> &dyn DocumentStore {
        self.backend.as_ref()
    }

    /// Lit la collection à `path` en conservant sa forme physique.
    pub async fn read_collection(&self, path: &str) -> VitrineResult<StoredCollection> {
        let node = self.backend.get(path).await?;
        Ok(StoredCollection::from_node(node))
    }

    /// Remplace toute la collection par la séquence donnée.
    pub async fn write_collection(&self, path: &str, records: &[Value]) -> VitrineResult<()> {
        self.backend
            .set(path, &Value::Array(records.to_vec()))
            .await
    }

    pub async fn delete_collection(&self, path: &str) -> VitrineResult<()> {
        self.backend.remove(path).await
    }

    /// Supprime un seul enfant d'une collection à clés.
    pub async fn delete_entry(&self, path: &str, key: &str) -> VitrineResult<()> {
        self.backend.remove(&entry_path(path, key)).await
    }
}

pub fn entry_path(path: &str, key: &str) -> String {
    format!("{}/{}", path.trim_end_matches('/'), key)
}
