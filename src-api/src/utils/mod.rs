// FICHIER : src-api/src/utils/mod.rs

// =========================================================================
//  VITRINE UTILS - Foundation Layer
// =========================================================================

pub mod config;
pub mod env;
pub mod error;
pub mod fs;
pub mod json;
pub mod logger;
pub mod macros;
pub mod net;

// Requis par les macros exportées (`$crate::utils::tracing::error!`).
pub use tracing;

/// **Application Context** : Config, Logs.
pub mod context {
    pub use super::config::{AppConfig, EnvMode, StoreBackend};
    pub use super::logger::init_logging;
}

/// **Le Prélude** : À utiliser via `use crate::utils::prelude::*;`
pub mod prelude {
    pub use super::config::AppConfig;
    pub use super::error::{AppError, VitrineResult};
    pub use super::json::{json, Map, Value};
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
    pub use std::sync::Arc;
    pub use tracing::{debug, error, info, instrument, warn};
}

pub use config::AppConfig;
pub use error::{AppError, VitrineResult};
pub use logger::init_logging;
