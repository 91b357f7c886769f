//! Packing list domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A packing list. Template lists are ordinary lists flagged as reusable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PackingList {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_template: bool,
    pub created_at: Option<DateTime<Utc>>,
}

impl PackingList {
    /// Create a new regular list.
    pub fn new(name: &str) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            description: None,
            is_template: false,
            created_at: Some(Utc::now()),
        }
    }

    /// Create a reusable template list.
    pub fn new_template(name: &str) -> Self {
        Self {
            is_template: true,
            ..Self::new(name)
        }
    }

    /// Attach a free-form description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}
