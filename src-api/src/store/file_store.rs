// FICHIER : src-api/src/store/file_store.rs

//! Arbre JSON persisté dans un seul fichier (écriture atomique).
//! Chaque écriture relit puis réécrit le fichier entier sous verrou.

use super::{tree, DocumentStore};
use crate::utils::fs::{self, Path, PathBuf};
use crate::utils::json;
use crate::utils::prelude::*;
use tokio::sync::Mutex;

#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> VitrineResult<Value> {
        match fs::read_to_string_opt(&self.path).await? {
            Some(content) if !content.trim().is_empty() => json::parse(&content),
            _ => Ok(Value::Null),
        }
    }

    async fn save(&self, root: &Value) -> VitrineResult<()> {
        // Un arbre vide reste un document JSON valide
        let content = if root.is_null() {
            "{}".to_string()
        } else {
            json::stringify_pretty(root)?
        };
        fs::write_atomic(&self.path, content.as_bytes()).await
    }
}

#[async_trait]
impl DocumentStore for JsonFileStore {
    async fn get(&self, path: &str) -> VitrineResult<Option<Value>> {
        let root = self.load().await?;
        Ok(tree::get_at(&root, path).cloned())
    }

    async fn set(&self, path: &str, value: &Value) -> VitrineResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut root = self.load().await?;
        tree::set_at(&mut root, path, value.clone());
        self.save(&root).await
    }

    async fn remove(&self, path: &str) -> VitrineResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut root = self.load().await?;
        tree::remove_at(&mut root, path);
        self.save(&root).await
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
