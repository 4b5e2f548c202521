// FICHIER : src-api/src/collections/ids.rs

//! Allocation des identifiants entiers.

use serde_json::Value;

/// `id` numérique d'un enregistrement ; absent ou non numérique -> 0.
///
/// Les entiers, les flottants à partie entière nulle et les chaînes de
/// chiffres (`"12"`) sont reconnus.
pub fn record_id(record: &Value) -> i64 {
    match record.get("id") {
        Some(Value::Number(n)) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64))
            .unwrap_or(0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

/// Vrai si l'`id` de l'enregistrement est exactement l'entier `id`.
///
/// Sert à la recherche d'un enregistrement : contrairement à `record_id`, un
/// `id` absent, nul, textuel ou fractionnaire ne correspond à rien.
pub fn matches_id(record: &Value, id: i64) -> bool {
    match record.get("id") {
        Some(Value::Number(n)) => {
            n.as_i64() == Some(id)
                || n.as_f64().is_some_and(|f| f.fract() == 0.0 && f == id as f64)
        }
        _ => false,
    }
}

/// Prochain identifiant : `max(id, 0) + 1`, donc `1` pour une collection vide.
pub fn next_id<'a, I>(records: I) -> i64
where
    I: IntoIterator<Item = &'a Value>,
{
    records
        .into_iter()
        .map(record_id)
        .fold(0, i64::max)
        .saturating_add(1)
}
