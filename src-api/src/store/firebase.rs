// FICHIER : src-api/src/store/firebase.rs

//! Adaptateur REST de la base temps réel Firebase.
//!
//! Chaque noeud est adressé par `{database_url}/{path}.json` :
//! GET lit (`null` si absent), PUT remplace, DELETE supprime.
//! Aucun appel n'est rejoué en cas d'échec.

use super::DocumentStore;
use crate::raise_error;
use crate::utils::config::FirebaseConfig;
use crate::utils::prelude::*;
use reqwest::{Client, Method, RequestBuilder, Response, Url};

#[derive(Clone)]
pub struct FirebaseStore {
    client: Client,
    base_url: String,
    secret: Option<String>,
}

impl std::fmt::Debug for FirebaseStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirebaseStore")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl FirebaseStore {
    pub fn new(client: Client, config: &FirebaseConfig) -> VitrineResult<Self> {
        let Some(raw_url) = config.database_url.as_deref() else {
            return Err(AppError::Config(
                "FIREBASE_DATABASE_URL manquant pour le store firebase".to_string(),
            ));
        };
        let base_url = raw_url.trim_end_matches('/').to_string();
        if Url::parse(&base_url).is_err() {
            return Err(AppError::Config(format!(
                "FIREBASE_DATABASE_URL invalide : '{}'",
                base_url
            )));
        }

        Ok(Self {
            client,
            base_url,
            secret: config.database_secret.clone(),
        })
    }

    /// URL REST du noeud, avec `auth=` si un secret est configuré.
    pub fn node_url(&self, path: &str) -> VitrineResult<Url> {
        let raw = format!("{}/{}.json", self.base_url, path.trim_matches('/'));
        let mut url = match Url::parse(&raw) {
            Ok(u) => u,
            Err(e) => raise_error!(
                "ERR_STORE_URL_PARSE",
                error = e,
                context = json!({ "path": path })
            ),
        };
        if let Some(secret) = &self.secret {
            url.query_pairs_mut().append_pair("auth", secret);
        }
        Ok(url)
    }

    fn request(&self, method: Method, path: &str) -> VitrineResult<RequestBuilder> {
        Ok(self.client.request(method, self.node_url(path)?))
    }

    async fn send(&self, builder: RequestBuilder, op: &str, path: &str) -> VitrineResult<Response> {
        let response = match builder.send().await {
            Ok(r) => r,
            // `without_url` : l'URL peut porter le secret
            Err(e) => raise_error!(
                "ERR_STORE_HTTP_SEND",
                error = e.without_url(),
                context = json!({ "op": op, "path": path })
            ),
        };

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            raise_error!(
                "ERR_STORE_HTTP_STATUS",
                error = format!("HTTP {} : {}", status.as_u16(), body.trim()),
                context = json!({ "op": op, "path": path, "status": status.as_u16() })
            );
        }
        Ok(response)
    }
}

#[async_trait]
impl DocumentStore for FirebaseStore {
    #[instrument(skip(self))]
    async fn get(&self, path: &str) -> VitrineResult<Option<Value>> {
        let builder = self.request(Method::GET, path)?;
        let response = self.send(builder, "get", path).await?;

        let value: Value = match response.json().await {
            Ok(v) => v,
            Err(e) => raise_error!(
                "ERR_STORE_JSON_DECODE",
                error = e.without_url(),
                context = json!({ "path": path })
            ),
        };
        Ok(if value.is_null() { None } else { Some(value) })
    }

    #[instrument(skip(self, value))]
    async fn set(&self, path: &str, value: &Value) -> VitrineResult<()> {
        let builder = self.request(Method::PUT, path)?.json(value);
        self.send(builder, "set", path).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn remove(&self, path: &str) -> VitrineResult<()> {
        let builder = self.request(Method::DELETE, path)?;
        self.send(builder, "remove", path).await?;
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "firebase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str, secret: Option<&str>) -> FirebaseConfig {
        FirebaseConfig {
            database_url: Some(url.to_string()),
            database_secret: secret.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_node_url_layout() {
        let store = FirebaseStore::new(Client::new(), &config("https://demo.firebaseio.com/", None))
            .unwrap();
        assert_eq!(
            store.node_url("faqs").unwrap().as_str(),
            "https://demo.firebaseio.com/faqs.json"
        );
        assert_eq!(
            store.node_url("/faqs/-Nk1/").unwrap().as_str(),
            "https://demo.firebaseio.com/faqs/-Nk1.json"
        );
    }

    #[test]
    fn test_secret_goes_to_auth_query() {
        let store = FirebaseStore::new(
            Client::new(),
            &config("https://demo.firebaseio.com", Some("s3cr&t")),
        )
        .unwrap();
        let url = store.node_url("products").unwrap();
        assert_eq!(url.query(), Some("auth=s3cr%26t"));
        assert!(!format!("{:?}", store).contains("s3cr"));
    }

    #[test]
    fn test_missing_or_invalid_url_is_config_error() {
        let res = FirebaseStore::new(Client::new(), &FirebaseConfig::default());
        assert!(matches!(res, Err(AppError::Config(_))));

        let res = FirebaseStore::new(Client::new(), &config("pas une url", None));
        assert!(matches!(res, Err(AppError::Config(_))));
    }
}
