// FICHIER : src-api/src/utils/error.rs

use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::io;

/// Type de résultat standard de l'application.
pub type VitrineResult<T> = std::result::Result<T, AppError>;

/// Erreur technique enrichie, levée par `raise_error!`.
/// Le composant est déduit du code : `ERR_STORE_HTTP_STATUS` -> `STORE`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StructuredError {
    pub code: String,
    pub component: String,
    pub message: String,
    pub context: Value,
}

impl StructuredError {
    pub fn new(code: &str, message: impl Into<String>, context: Value) -> Self {
        Self {
            code: code.to_string(),
            component: component_from_code(code),
            message: message.into(),
            context,
        }
    }
}

impl fmt::Display for StructuredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

/// Extrait le segment composant d'un code d'erreur (`ERR_<COMPOSANT>_...`).
pub fn component_from_code(code: &str) -> String {
    code.strip_prefix("ERR_")
        .and_then(|rest| rest.split('_').next())
        .filter(|segment| !segment.is_empty())
        .unwrap_or("CORE")
        .to_string()
}

/// Enumération centrale des erreurs de l'application.
///
/// Les variantes "client" (`InvalidPath` .. `MethodNotAllowed`) portent le
/// message destiné à l'appelant HTTP ; `Structured` couvre les pannes du
/// stockage et de l'infrastructure.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Erreur de configuration : {0}")]
    Config(String),

    #[error("Chemin invalide : {0}")]
    InvalidPath(String),

    #[error("Collection inconnue : {0}")]
    UnknownCollection(String),

    #[error("Requête invalide : {0}")]
    BadRequest(String),

    #[error("Introuvable : {0}")]
    NotFound(String),

    #[error("Méthode non autorisée : {0}")]
    MethodNotAllowed(String),

    #[error("{0}")]
    Structured(Box<StructuredError>),

    #[error("Erreur d'entrée/sortie : {0}")]
    Io(#[from] io::Error),

    #[error("Erreur de sérialisation : {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    /// Vrai pour les erreurs imputables à l'appelant (4xx).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            AppError::InvalidPath(_)
                | AppError::UnknownCollection(_)
                | AppError::BadRequest(_)
                | AppError::NotFound(_)
                | AppError::MethodNotAllowed(_)
        )
    }
}

// Sérialisation en simple chaîne (sortie JSON du CLI).
impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}
