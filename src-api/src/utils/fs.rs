// FICHIER : src-api/src/utils/fs.rs

use crate::raise_error;
use crate::utils::error::VitrineResult;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::instrument;

pub use std::path::{Path, PathBuf};

/// Crée le dossier (et ses parents) s'il n'existe pas.
pub async fn ensure_dir(path: &Path) -> VitrineResult<()> {
    if let Err(e) = fs::create_dir_all(path).await {
        raise_error!(
            "ERR_FS_ENSURE_DIR",
            error = e,
            context = serde_json::json!({ "path": path.to_string_lossy() })
        );
    }
    Ok(())
}

/// Lit un fichier texte ; `None` si le fichier n'existe pas.
#[instrument(skip(path), fields(path = ?path))]
pub async fn read_to_string_opt(path: &Path) -> VitrineResult<Option<String>> {
    match fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => raise_error!(
            "ERR_FS_READ_FILE",
            error = e,
            context = serde_json::json!({ "path": path.to_string_lossy() })
        ),
    }
}

/// Écriture atomique : fichier temporaire puis renommage.
pub async fn write_atomic(path: &Path, content: &[u8]) -> VitrineResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_dir(parent).await?;
    }

    let tmp_path = path.with_extension("tmp");
    let mut file = match fs::File::create(&tmp_path).await {
        Ok(f) => f,
        Err(e) => raise_error!(
            "ERR_FS_CREATE_TMP_FILE",
            error = e,
            context = serde_json::json!({ "tmp_path": tmp_path.to_string_lossy() })
        ),
    };

    if let Err(e) = file.write_all(content).await {
        raise_error!(
            "ERR_FS_WRITE_TMP",
            error = e,
            context = serde_json::json!({ "path": tmp_path.to_string_lossy() })
        );
    }
    file.flush().await.ok();
    file.sync_all().await.ok();

    if let Err(e) = fs::rename(&tmp_path, path).await {
        let _ = fs::remove_file(&tmp_path).await;
        raise_error!(
            "ERR_FS_RENAME_ATOMIC",
            error = e,
            context = serde_json::json!({
                "from": tmp_path.to_string_lossy(),
                "to": path.to_string_lossy()
            })
        );
    }
    Ok(())
}
