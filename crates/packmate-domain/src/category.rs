//! Category representation for grouping items within a list

use serde::{Deserialize, Serialize};

/// A category (e.g. "Clothing", "Toiletries") within a packing list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub list_id: Option<String>,
    pub sort_order: i32,
}

impl Category {
    /// Create a new category.
    pub fn new(name: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            list_id: None,
            sort_order: 0,
        }
    }

    /// Attach the category to a list.
    pub fn with_list(mut self, list_id: &str) -> Self {
        self.list_id = Some(list_id.to_string());
        self
    }
}
