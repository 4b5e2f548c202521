// FICHIER : src-api/src/utils/config.rs

use crate::utils::env;
use crate::utils::error::{AppError, VitrineResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Valeurs par défaut (Single Source of Truth)
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DATA_FILE: &str = "vitrine-data.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Configuration globale, lue une seule fois au démarrage puis injectée.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub env_mode: EnvMode,
    pub server: ServerConfig,
    pub store: StoreConfig,
    pub log: LogConfig,
    #[serde(default)]
    pub firebase: FirebaseConfig,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnvMode {
    Development,
    Production,
    Test,
}

impl FromStr for EnvMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(EnvMode::Development),
            "production" | "prod" => Ok(EnvMode::Production),
            "test" => Ok(EnvMode::Test),
            other => Err(AppError::Config(format!(
                "VITRINE_ENV_MODE invalide : '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Firebase,
    Memory,
    File,
}

impl FromStr for StoreBackend {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "firebase" => Ok(StoreBackend::Firebase),
            "memory" => Ok(StoreBackend::Memory),
            "file" => Ok(StoreBackend::File),
            other => Err(AppError::Config(format!(
                "VITRINE_STORE invalide : '{}' (attendu firebase, memory ou file)",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    pub data_file: PathBuf,
    pub http_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LogConfig {
    pub level: String,
    pub dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            dir: None,
        }
    }
}

/// Paramètres du projet Firebase (mêmes clés que le SDK web).
#[derive(Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct FirebaseConfig {
    pub api_key: Option<String>,
    pub auth_domain: Option<String>,
    pub database_url: Option<String>,
    pub project_id: Option<String>,
    pub storage_bucket: Option<String>,
    pub messaging_sender_id: Option<String>,
    pub app_id: Option<String>,
    pub measurement_id: Option<String>,
    /// Secret ou jeton passé en paramètre `auth=` aux appels REST.
    pub database_secret: Option<String>,
}

// Les secrets ne doivent jamais apparaître dans les logs.
impl fmt::Debug for FirebaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FirebaseConfig")
            .field("database_url", &self.database_url)
            .field("project_id", &self.project_id)
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("database_secret", &self.database_secret.as_ref().map(|_| "***"))
            .finish_non_exhaustive()
    }
}

impl FirebaseConfig {
    pub fn from_env() -> Self {
        Self {
            api_key: env::get_optional("FIREBASE_API_KEY"),
            auth_domain: env::get_optional("FIREBASE_AUTH_DOMAIN"),
            database_url: env::get_optional("FIREBASE_DATABASE_URL"),
            project_id: env::get_optional("FIREBASE_PROJECT_ID"),
            storage_bucket: env::get_optional("FIREBASE_STORAGE_BUCKET"),
            messaging_sender_id: env::get_optional("FIREBASE_MESSAGING_SENDER_ID"),
            app_id: env::get_optional("FIREBASE_APP_ID"),
            measurement_id: env::get_optional("FIREBASE_MEASUREMENT_ID"),
            database_secret: env::get_optional("FIREBASE_DATABASE_SECRET"),
        }
    }
}

// --- IMPLÉMENTATION PRINCIPALE ---

impl AppConfig {
    /// Charge la configuration depuis l'environnement et la valide.
    pub fn from_env() -> VitrineResult<Self> {
        let env_mode = match env::get_optional("VITRINE_ENV_MODE") {
            Some(raw) => raw.parse()?,
            None if cfg!(debug_assertions) => EnvMode::Development,
            None => EnvMode::Production,
        };

        let backend = match env::get_optional("VITRINE_STORE") {
            Some(raw) => raw.parse()?,
            None => StoreBackend::Firebase,
        };

        let config = Self {
            env_mode,
            server: ServerConfig {
                host: env::get_or("VITRINE_HOST", DEFAULT_HOST),
                port: env::get_parsed("VITRINE_PORT")?.unwrap_or(DEFAULT_PORT),
            },
            store: StoreConfig {
                backend,
                data_file: PathBuf::from(env::get_or("VITRINE_DATA_FILE", DEFAULT_DATA_FILE)),
                http_timeout_secs: env::get_parsed("VITRINE_HTTP_TIMEOUT_SECS")?
                    .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
            },
            log: LogConfig {
                level: env::get_or("VITRINE_LOG_LEVEL", DEFAULT_LOG_LEVEL),
                dir: env::get_optional("VITRINE_LOG_DIR").map(PathBuf::from),
            },
            firebase: FirebaseConfig::from_env(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Configuration en mémoire, sans dépendance à l'environnement (tests, outils).
    pub fn in_memory(env_mode: EnvMode) -> Self {
        Self {
            env_mode,
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            store: StoreConfig {
                backend: StoreBackend::Memory,
                data_file: PathBuf::from(DEFAULT_DATA_FILE),
                http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
            },
            log: LogConfig::default(),
            firebase: FirebaseConfig::default(),
        }
    }

    pub fn validate(&self) -> VitrineResult<()> {
        if self.store.backend == StoreBackend::Firebase && self.firebase.database_url.is_none() {
            return Err(AppError::Config(
                "FIREBASE_DATABASE_URL est requis avec VITRINE_STORE=firebase".to_string(),
            ));
        }
        if self.store.http_timeout_secs == 0 {
            return Err(AppError::Config(
                "VITRINE_HTTP_TIMEOUT_SECS doit être strictement positif".to_string(),
            ));
        }
        Ok(())
    }

    /// Les détails techniques des erreurs ne sont exposés qu'hors production.
    pub fn is_production(&self) -> bool {
        self.env_mode == EnvMode::Production
    }
}

// --- TESTS UNITAIRES ---
