//! Todo record type

use serde::{Deserialize, Serialize};

/// A single todo as persisted in the data file.
///
/// Every field is required; a record missing any of them fails the load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Opaque identifier, persisted as `_id`
    #[serde(rename = "_id")]
    pub id: String,
    pub owner: String,
    /// `true` = complete, `false` = incomplete
    pub status: bool,
    pub body: String,
    pub category: String,
}

impl Todo {
    /// Creates a new todo
    pub fn new(
        id: impl Into<String>,
        owner: impl Into<String>,
        status: bool,
        body: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            owner: owner.into(),
            status,
            body: body.into(),
            category: category.into(),
        }
    }

    /// Returns the todo ID
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Returns true if the todo is complete
    pub fn is_complete(&self) -> bool {
        self.status
    }
}
