// FICHIER : src-api/src/lib.rs

pub mod api;
pub mod collections;
pub mod store;
pub mod utils;
