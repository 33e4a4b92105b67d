//! In-memory todo store
//!
//! Loaded once, read-only afterwards. Safe to share across threads behind an `Arc`.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::errors::{StoreError, StoreResult};
use super::record::Todo;

/// Canonical, immutable collection of todos.
#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    /// Todos in load order
    todos: Vec<Todo>,
    /// id -> position in `todos` (first occurrence)
    by_id: HashMap<String, usize>,
}

impl TodoStore {
    /// Builds a store from todos in load order.
    ///
    /// Fails if any todo has an empty id. Duplicate ids are kept in the
    /// collection, but lookups resolve to the first occurrence.
    pub fn from_todos(todos: Vec<Todo>) -> StoreResult<Self> {
        let mut by_id = HashMap::with_capacity(todos.len());

        for (index, todo) in todos.iter().enumerate() {
            if todo.id.is_empty() {
                return Err(StoreError::EmptyId(index));
            }
            by_id.entry(todo.id.clone()).or_insert(index);
        }

        Ok(Self { todos, by_id })
    }

    /// Parses the persisted JSON array format.
    pub fn from_json_str(content: &str) -> StoreResult<Self> {
        let todos: Vec<Todo> = serde_json::from_str(content)?;
        Self::from_todos(todos)
    }

    /// Loads the store from a JSON data file.
    pub fn load(path: &Path) -> StoreResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_json_str(&content)
    }

    /// Number of loaded todos
    pub fn size(&self) -> usize {
        self.todos.len()
    }

    /// Returns true if the store holds no todos
    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Looks up a todo by id.
    pub fn get(&self, id: &str) -> Option<&Todo> {
        self.by_id.get(id).map(|&index| &self.todos[index])
    }

    /// Every todo in load order.
    ///
    /// The slice is shared and immutable; queries copy what they keep.
    pub fn all(&self) -> &[Todo] {
        &self.todos
    }
}
