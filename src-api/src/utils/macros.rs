// FICHIER : src-api/src/utils/macros.rs

/// Logue une erreur technique structurée puis retourne
/// `Err(AppError::Structured(..))` depuis la fonction appelante.
///
/// ```ignore
/// let body = match response.text().await {
///     Ok(b) => b,
///     Err(e) => raise_error!("ERR_STORE_HTTP_BODY", error = e, context = json!({ "path": path })),
/// };
/// ```
#[macro_export]
macro_rules! raise_error {
    ($code:expr, error = $err:expr, context = $ctx:expr) => {{
        let data = $crate::utils::error::StructuredError::new($code, ($err).to_string(), $ctx);
        $crate::utils::tracing::error!(
            code = %data.code,
            component = %data.component,
            context = %data.context,
            "{}",
            data.message
        );
        return Err($crate::utils::error::AppError::Structured(Box::new(data)));
    }};
    ($code:expr, error = $err:expr) => {
        $crate::raise_error!(
            $code,
            error = $err,
            context = $crate::utils::json::Value::Null
        )
    };
}

/// Affiche un succès à l'utilisateur
#[macro_export]
macro_rules! user_success {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        println!("✅ {}", msg);
        $crate::utils::tracing::info!(event = "user_success", message = %msg);
    }};
}

/// Affiche une erreur à l'utilisateur
#[macro_export]
macro_rules! user_error {
    ($($arg:tt)*) => {{
        let msg = format!($($arg)*);
        eprintln!("❌ {}", msg);
        $crate::utils::tracing::error!(event = "user_error", message = %msg);
    }};
}

// --- TESTS UNITAIRES ---
#[cfg(test)]
mod tests {
    use crate::utils::error::{AppError, VitrineResult};
    use serde_json::json;

    fn failing(path: &str) -> VitrineResult<u32> {
        raise_error!(
            "ERR_STORE_HTTP_SEND",
            error = "connexion refusée",
            context = json!({ "path": path })
        );
    }

    fn failing_without_context() -> VitrineResult<u32> {
        raise_error!("ERR_FS_READ_FILE", error = "fichier verrouillé");
    }

    #[test]
    fn test_raise_error_returns_structured() {
        match failing("faqs") {
            Err(AppError::Structured(data)) => {
                assert_eq!(data.code, "ERR_STORE_HTTP_SEND");
                assert_eq!(data.component, "STORE");
                assert_eq!(data.message, "connexion refusée");
                assert_eq!(data.context["path"], "faqs");
            }
            other => panic!("Attendu AppError::Structured, reçu {:?}", other),
        }
    }

    #[test]
    fn test_raise_error_default_context() {
        let Err(AppError::Structured(data)) = failing_without_context() else {
            panic!("Attendu AppError::Structured");
        };
        assert_eq!(data.component, "FS");
        assert!(data.context.is_null());
    }

    #[test]
    fn test_user_macros_do_not_panic() {
        user_success!("Élément {} supprimé", 1);
        user_error!("Élément {} introuvable", 42);
    }
}
