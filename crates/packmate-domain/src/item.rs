//! Packing item domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single item on a packing list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PackingItem {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub quantity: u32,
    pub packed: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl PackingItem {
    /// Create a new unpacked item with quantity 1.
    pub fn new(name: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: None,
            category_id: None,
            quantity: 1,
            packed: false,
            created_at: Some(Utc::now()),
        }
    }

    /// Assign the item to a category.
    pub fn with_category(mut self, category_id: &str) -> Self {
        self.category_id = Some(category_id.to_string());
        self
    }

    /// Set the quantity to pack.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// Attach a free-form description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Toggle the packed state.
    pub fn toggle_packed(&mut self) {
        self.packed = !self.packed;
    }
}
