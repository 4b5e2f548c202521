// FICHIER : src-api/src/store/tree.rs

//! Navigation dans un arbre JSON avec la sémantique de la base temps réel :
//! chemins `a/b/c`, écrire `null` (ou un noeud vide) supprime, et un parent
//! vidé de son dernier enfant disparaît aussi.

use serde_json::{Map, Value};

/// Découpe un chemin en segments non vides (`/faqs/` -> `["faqs"]`).
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Un noeud "vide" n'existe pas pour la base : null, `{}`, `[]` ou tableau de null.
pub fn is_empty_node(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.iter().all(Value::is_null),
        _ => false,
    }
}

pub fn get_at<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut node = root;
    for seg in segments(path) {
        node = match node {
            Value::Object(map) => map.get(seg)?,
            Value::Array(items) => items.get(seg.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    if is_empty_node(node) {
        None
    } else {
        Some(node)
    }
}

/// Remplace le noeud à `path` (pas de fusion). Un noeud vide vaut suppression.
pub fn set_at(root: &mut Value, path: &str, value: Value) {
    if is_empty_node(&value) {
        remove_at(root, path);
        return;
    }
    let mut node = root;
    for seg in segments(path) {
        node = child_entry(node, seg);
    }
    *node = value;
}

/// Supprime le noeud à `path` puis élague les parents devenus vides.
pub fn remove_at(root: &mut Value, path: &str) {
    let segs = segments(path);
    if segs.is_empty() {
        *root = Value::Null;
        return;
    }
    remove_in(root, &segs);
    if is_empty_node(root) {
        *root = Value::Null;
    }
}

fn remove_in(node: &mut Value, segs: &[&str]) {
    let Some((head, rest)) = segs.split_first() else {
        return;
    };
    if rest.is_empty() {
        detach(node, head);
        return;
    }
    let prune = match child_mut(node, head) {
        Some(child) => {
            remove_in(child, rest);
            is_empty_node(child)
        }
        None => false,
    };
    if prune {
        detach(node, head);
    }
}

fn detach(node: &mut Value, key: &str) {
    match node {
        Value::Object(map) => {
            map.shift_remove(key);
        }
        Value::Array(items) => {
            // Un tableau garde ses indices : on laisse un trou
            if let Some(slot) = key.parse::<usize>().ok().and_then(|i| items.get_mut(i)) {
                *slot = Value::Null;
            }
        }
        _ => {}
    }
}

fn child_mut<'a>(node: &'a mut Value, key: &str) -> Option<&'a mut Value> {
    match node {
        Value::Object(map) => map.get_mut(key),
        Value::Array(items) => key.parse::<usize>().ok().and_then(move |i| items.get_mut(i)),
        _ => None,
    }
}

/// Descend d'un niveau en créant le noeud si besoin.
fn child_entry<'a>(node: &'a mut Value, key: &str) -> &'a mut Value {
    let index = match node {
        Value::Array(items) => key.parse::<usize>().ok().filter(|i| *i < items.len()),
        _ => None,
    };
    if let Some(i) = index {
        return &mut node[i];
    }
    if !node.is_object() {
        *node = Value::Object(Map::new());
    }
    &mut node[key]
}
