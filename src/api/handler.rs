//! API handler binding the query engine to one store snapshot.

use std::sync::Arc;

use crate::executor::{OrderField, QueryEngine, QueryError, QueryParams, QueryResult, ORDER_BY};
use crate::observability::{Logger, MetricsRegistry};
use crate::store::{Todo, TodoStore};

/// Read-only todo API over a shared store snapshot.
///
/// Cheap to share between threads: the store is immutable and the metrics
/// are atomic.
#[derive(Debug)]
pub struct TodoApi {
    store: Arc<TodoStore>,
    metrics: Arc<MetricsRegistry>,
}

impl TodoApi {
    /// Creates an API over a fully loaded store
    pub fn new(store: Arc<TodoStore>) -> Self {
        Self::with_metrics(store, Arc::new(MetricsRegistry::new()))
    }

    /// Creates an API reporting into an existing registry
    pub fn with_metrics(store: Arc<TodoStore>, metrics: Arc<MetricsRegistry>) -> Self {
        metrics.set_records_loaded(store.size() as u64);
        Self { store, metrics }
    }

    /// Returns the underlying store
    pub fn store(&self) -> &TodoStore {
        &self.store
    }

    /// Returns the metrics registry
    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    /// Returns the todo with the given id.
    pub fn lookup_by_id(&self, id: &str) -> QueryResult<Todo> {
        match self.store.get(id) {
            Some(todo) => {
                self.metrics.record_lookup(true);
                Logger::trace("LOOKUP_COMPLETE", &[("id", id)]);
                Ok(todo.clone())
            }
            None => {
                self.metrics.record_lookup(false);
                Logger::info("LOOKUP_MISS", &[("id", id)]);
                Err(QueryError::NotFound(id.to_string()))
            }
        }
    }

    /// Evaluates a query against the full snapshot.
    pub fn query(&self, params: &QueryParams) -> QueryResult<Vec<Todo>> {
        let query_string = params.to_query_string();

        if let Some(value) = params.get(ORDER_BY) {
            if OrderField::parse(value).is_none() {
                Logger::warn("ORDER_BY_IGNORED", &[("value", value)]);
            }
        }

        match QueryEngine::evaluate(self.store.all(), params) {
            Ok(todos) => {
                self.metrics.record_query(todos.len() as u64);
                let returned = todos.len().to_string();
                Logger::info(
                    "QUERY_COMPLETE",
                    &[("params", query_string.as_str()), ("returned", returned.as_str())],
                );
                Ok(todos)
            }
            Err(err) => {
                self.metrics.record_rejection();
                Logger::warn(
                    "QUERY_REJECTED",
                    &[
                        ("code", err.code()),
                        ("params", query_string.as_str()),
                        ("value", err.value()),
                    ],
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> TodoApi {
        let store = TodoStore::from_todos(vec![
            Todo::new("58895985f0a4bbea24084abf", "Blanche", false, "Buy eggs", "groceries"),
            Todo::new("b", "Fry", true, "Play", "video games"),
        ])
        .unwrap();
        TodoApi::new(Arc::new(store))
    }

    #[test]
    fn test_lookup_existing() {
        let api = api();
        let todo = api.lookup_by_id("58895985f0a4bbea24084abf").unwrap();

        assert_eq!(todo.owner, "Blanche");
        assert_eq!(api.metrics().snapshot().lookups_served, 1);
    }

    #[test]
    fn test_lookup_missing() {
        let api = api();
        let err = api.lookup_by_id("nonexistent").unwrap_err();

        assert_eq!(err, QueryError::NotFound("nonexistent".to_string()));
        assert_eq!(api.metrics().snapshot().lookups_missed, 1);
    }

    #[test]
    fn test_query_counts() {
        let api = api();
        let todos = api.query(&QueryParams::new().with("owner", "Fry")).unwrap();
        assert_eq!(todos.len(), 1);

        let err = api.query(&QueryParams::new().with("limit", "many")).unwrap_err();
        assert_eq!(err.code(), "TODO_BAD_INPUT");

        let s = api.metrics().snapshot();
        assert_eq!(s.records_loaded, 2);
        assert_eq!(s.queries_executed, 1);
        assert_eq!(s.records_returned, 1);
        assert_eq!(s.queries_rejected, 1);
    }

    #[test]
    fn test_query_unknown_order_by_still_succeeds() {
        let api = api();
        let todos = api.query(&QueryParams::new().with("orderBy", "priority")).unwrap();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id(), "58895985f0a4bbea24084abf");
    }
}
