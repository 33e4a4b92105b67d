//! Pipeline stage table
//!
//! Each recognized parameter key maps to one stage. The table order is the
//! execution order; the engine never reorders it.

use crate::store::Todo;

use super::errors::{QueryError, QueryResult};
use super::filters::{status_from_param, TodoFilter};
use super::params::{CATEGORY, CONTAINS, LIMIT, ORDER_BY, OWNER, STATUS};
use super::sorter::{OrderField, ResultSorter};

/// Transform applied when a stage's key is present
pub type StageFn = for<'a> fn(&[&'a Todo], &str) -> QueryResult<Vec<&'a Todo>>;

/// One pipeline step: a parameter key and the transform it triggers
#[derive(Clone, Copy)]
pub struct Stage {
    /// Parameter key that activates this stage
    pub key: &'static str,
    /// Transform over the current sequence
    pub apply: StageFn,
}

impl std::fmt::Debug for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stage").field("key", &self.key).finish()
    }
}

/// Stages in execution order: filters, then limit, then order-by.
pub const PIPELINE: &[Stage] = &[
    Stage {
        key: OWNER,
        apply: owner_stage,
    },
    Stage {
        key: CATEGORY,
        apply: category_stage,
    },
    Stage {
        key: STATUS,
        apply: status_stage,
    },
    Stage {
        key: CONTAINS,
        apply: contains_stage,
    },
    Stage {
        key: LIMIT,
        apply: apply_limit,
    },
    Stage {
        key: ORDER_BY,
        apply: order_by_stage,
    },
];

fn owner_stage<'a>(todos: &[&'a Todo], value: &str) -> QueryResult<Vec<&'a Todo>> {
    Ok(TodoFilter::by_owner(todos.iter().copied(), value))
}

fn category_stage<'a>(todos: &[&'a Todo], value: &str) -> QueryResult<Vec<&'a Todo>> {
    Ok(TodoFilter::by_category(todos.iter().copied(), value))
}

fn status_stage<'a>(todos: &[&'a Todo], value: &str) -> QueryResult<Vec<&'a Todo>> {
    Ok(TodoFilter::by_status(todos.iter().copied(), status_from_param(value)))
}

fn contains_stage<'a>(todos: &[&'a Todo], value: &str) -> QueryResult<Vec<&'a Todo>> {
    Ok(TodoFilter::by_body(todos.iter().copied(), value))
}

fn order_by_stage<'a>(todos: &[&'a Todo], value: &str) -> QueryResult<Vec<&'a Todo>> {
    match OrderField::parse(value) {
        Some(field) => Ok(ResultSorter::sort(todos, field)),
        // Unrecognized field: pass through in current order
        None => Ok(todos.to_vec()),
    }
}

/// Parses a `limit` value as a base-10 count.
///
/// Non-numeric, negative and out-of-range values are all `BadInput`.
pub fn parse_limit(raw: &str) -> QueryResult<usize> {
    raw.parse::<usize>()
        .map_err(|_| QueryError::BadInput(raw.to_string()))
}

/// Keeps the first N todos, N parsed from `raw`.
///
/// N larger than the sequence keeps everything.
pub fn apply_limit<'a>(todos: &[&'a Todo], raw: &str) -> QueryResult<Vec<&'a Todo>> {
    let limit = parse_limit(raw)?;
    Ok(todos.iter().take(limit).copied().collect())
}
