// FICHIER : src-api/src/collections/mod.rs

//! Collections exposées par l'API et leurs opérations CRUD.

pub mod ids;
pub mod manager;

use crate::utils::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub use manager::CollectionsManager;

/// Collections reconnues statiquement par le routeur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionName {
    Inquiries,
    Contacts,
    Intents,
    Products,
    Services,
    Testimonials,
    Faqs,
}

impl CollectionName {
    pub const ALL: [CollectionName; 7] = [
        CollectionName::Inquiries,
        CollectionName::Contacts,
        CollectionName::Intents,
        CollectionName::Products,
        CollectionName::Services,
        CollectionName::Testimonials,
        CollectionName::Faqs,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionName::Inquiries => "inquiries",
            CollectionName::Contacts => "contacts",
            CollectionName::Intents => "intents",
            CollectionName::Products => "products",
            CollectionName::Services => "services",
            CollectionName::Testimonials => "testimonials",
            CollectionName::Faqs => "faqs",
        }
    }

    /// Chemin du noeud dans la base (la racine porte directement les collections).
    pub fn store_path(&self) -> &'static str {
        self.as_str()
    }

    /// Libellé singulier utilisé dans les messages de l'API.
    pub fn label(&self) -> &'static str {
        match self {
            CollectionName::Inquiries => "Inquiry",
            CollectionName::Contacts => "Contact message",
            CollectionName::Intents => "Intent",
            CollectionName::Products => "Product",
            CollectionName::Services => "Service",
            CollectionName::Testimonials => "Testimonial",
            CollectionName::Faqs => "FAQ",
        }
    }

    /// Seule `products` enveloppe sa liste : `{ success, products: [...] }`.
    pub fn wraps_listing(&self) -> bool {
        matches!(self, CollectionName::Products)
    }

    pub fn created_message(&self) -> String {
        match self {
            CollectionName::Inquiries | CollectionName::Contacts | CollectionName::Intents => {
                format!("{} submitted successfully", self.label())
            }
            _ => format!("{} added successfully", self.label()),
        }
    }

    pub fn deleted_message(&self) -> String {
        format!("{} deleted successfully", self.label())
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionName {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CollectionName::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| AppError::UnknownCollection(s.to_string()))
    }
}
