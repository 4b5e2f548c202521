// FICHIER : src-api/src/store/layout.rs

use crate::collections::ids::matches_id;
use serde_json::{Map, Value};
use tracing::warn;

/// Forme physique d'une collection telle que la base la renvoie.
///
/// La base stocke indifféremment un tableau (clés entières consécutives) ou
/// un objet à clés opaques. La forme est relue à chaque opération ; les
/// suppressions s'en servent pour viser la bonne clé.
#[derive(Debug, Clone, PartialEq)]
pub enum StoredCollection {
    Array(Vec<Value>),
    Keyed(Map<String, Value>),
}

/// Emplacement physique d'un enregistrement dans sa collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordLocation {
    Index(usize),
    Key(String),
}

impl Default for StoredCollection {
    fn default() -> Self {
        StoredCollection::Array(Vec::new())
    }
}

impl StoredCollection {
    /// Normalise le noeud lu. Absent -> vide ; les trous `null` (clés
    /// entières non consécutives) ne sont pas des enregistrements.
    pub fn from_node(node: Option<Value>) -> Self {
        match node {
            None | Some(Value::Null) => Self::default(),
            Some(Value::Array(items)) => {
                StoredCollection::Array(items.into_iter().filter(|v| !v.is_null()).collect())
            }
            Some(Value::Object(map)) => {
                StoredCollection::Keyed(map.into_iter().filter(|(_, v)| !v.is_null()).collect())
            }
            Some(other) => {
                warn!(kind = %json_kind(&other), "Noeud de collection scalaire ignoré");
                Self::default()
            }
        }
    }

    pub fn is_keyed(&self) -> bool {
        matches!(self, StoredCollection::Keyed(_))
    }

    pub fn len(&self) -> usize {
        match self {
            StoredCollection::Array(items) => items.len(),
            StoredCollection::Keyed(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Enregistrements dans l'ordre d'énumération de la base.
    pub fn records(&self) -> Vec<&Value> {
        match self {
            StoredCollection::Array(items) => items.iter().collect(),
            StoredCollection::Keyed(map) => map.values().collect(),
        }
    }

    pub fn into_records(self) -> Vec<Value> {
        match self {
            StoredCollection::Array(items) => items,
            StoredCollection::Keyed(map) => map.into_iter().map(|(_, v)| v).collect(),
        }
    }

    /// Premier enregistrement dont l'`id` vaut exactement `id`.
    pub fn locate(&self, id: i64) -> Option<RecordLocation> {
        match self {
            StoredCollection::Array(items) => items
                .iter()
                .position(|r| matches_id(r, id))
                .map(RecordLocation::Index),
            StoredCollection::Keyed(map) => map
                .iter()
                .find(|(_, r)| matches_id(r, id))
                .map(|(key, _)| RecordLocation::Key(key.clone())),
        }
    }

    /// Copie de la collection privée de l'enregistrement visé.
    pub fn without(&self, location: &RecordLocation) -> Vec<Value> {
        match (self, location) {
            (StoredCollection::Array(items), RecordLocation::Index(idx)) => items
                .iter()
                .enumerate()
                .filter(|(i, _)| i != idx)
                .map(|(_, v)| v.clone())
                .collect(),
            (StoredCollection::Keyed(map), RecordLocation::Key(key)) => map
                .iter()
                .filter(|(k, _)| *k != key)
                .map(|(_, v)| v.clone())
                .collect(),
            _ => self.records().into_iter().cloned().collect(),
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
