// FICHIER : src-api/src/collections/manager.rs

use super::ids::next_id;
use super::CollectionName;
use crate::store::{CollectionStore, RecordLocation};
use crate::utils::prelude::*;
use chrono::{DateTime, SecondsFormat, Utc};

/// Opérations CRUD génériques, paramétrées par le nom de collection.
///
/// Chaque opération fait au plus une lecture puis une écriture, en séquence.
#[derive(Debug, Clone)]
pub struct CollectionsManager<'a> {
    store: &'a CollectionStore,
}

impl<'a> CollectionsManager<'a> {
    pub fn new(store: &'a CollectionStore) -> Self {
        Self { store }
    }

    /// Tous les enregistrements, dans l'ordre de la base (vide si absente).
    #[instrument(skip(self))]
    pub async fn list(&self, collection: CollectionName) -> VitrineResult<Vec<Value>> {
        let stored = self.store.read_collection(collection.store_path()).await?;
        debug!(count = stored.len(), keyed = stored.is_keyed(), "Collection lue");
        Ok(stored.into_records())
    }

    /// Ajoute un enregistrement et renvoie sa version stockée.
    ///
    /// La collection entière est réécrite en tableau, y compris si elle était
    /// stockée sous forme d'objet à clés.
    #[instrument(skip(self, payload))]
    pub async fn create(&self, collection: CollectionName, payload: Value) -> VitrineResult<Value> {
        let fields = match payload {
            Value::Object(map) if !map.is_empty() => map,
            _ => return Err(AppError::BadRequest("Request body is required".to_string())),
        };

        let stored = self.store.read_collection(collection.store_path()).await?;
        let id = next_id(stored.records());
        let record = build_record(fields, id, Utc::now());

        let mut records = stored.into_records();
        records.push(record.clone());
        self.store
            .write_collection(collection.store_path(), &records)
            .await?;

        info!(id, total = records.len(), "Enregistrement créé");
        Ok(record)
    }

    /// Supprime l'enregistrement `id`.
    ///
    /// Tableau : la séquence filtrée est réécrite. Objet à clés : seule la clé
    /// concernée est supprimée. Si plus rien ne reste, le noeud de la
    /// collection est supprimé au lieu d'écrire une séquence vide.
    #[instrument(skip(self))]
    pub async fn delete(&self, collection: CollectionName, id: i64) -> VitrineResult<()> {
        let path = collection.store_path();
        let stored = self.store.read_collection(path).await?;
        if stored.is_empty() {
            return Err(AppError::NotFound("No data found".to_string()));
        }

        let Some(location) = stored.locate(id) else {
            return Err(AppError::NotFound("Item not found".to_string()));
        };

        let remaining = stored.without(&location);
        if remaining.is_empty() {
            self.store.delete_collection(path).await?;
        } else {
            match &location {
                RecordLocation::Key(key) => self.store.delete_entry(path, key).await?,
                RecordLocation::Index(_) => self.store.write_collection(path, &remaining).await?,
            }
        }

        info!(id, remaining = remaining.len(), "Enregistrement supprimé");
        Ok(())
    }
}

/// `{...champs soumis, id, createdAt}` : l'`id` et la date du serveur
/// écrasent toujours ceux éventuellement fournis par le client.
pub fn build_record(mut fields: Map<String, Value>, id: i64, now: DateTime<Utc>) -> Value {
    fields.insert("id".to_string(), Value::from(id));
    fields.insert("createdAt".to_string(), Value::String(timestamp(now)));
    Value::Object(fields)
}

/// Horodatage ISO-8601 UTC à la milliseconde (`2026-10-16T08:30:00.000Z`).
pub fn timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}
