// FICHIER : src-api/src/store/memory.rs

use super::{tree, DocumentStore};
use crate::utils::prelude::*;
use tokio::sync::RwLock;

/// Arbre JSON en mémoire : développement local et tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    root: RwLock<Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pré-remplit l'arbre (fixtures).
    pub fn with_data(root: Value) -> Self {
        Self {
            root: RwLock::new(root),
        }
    }

    /// Copie complète de l'arbre courant.
    pub async fn snapshot(&self) -> Value {
        self.root.read().await.clone()
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn get(&self, path: &str) -> VitrineResult<Option<Value>> {
        let root = self.root.read().await;
        Ok(tree::get_at(&root, path).cloned())
    }

    async fn set(&self, path: &str, value: &Value) -> VitrineResult<()> {
        let mut root = self.root.write().await;
        tree::set_at(&mut root, path, value.clone());
        Ok(())
    }

    async fn remove(&self, path: &str) -> VitrineResult<()> {
        let mut root = self.root.write().await;
        tree::remove_at(&mut root, path);
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
