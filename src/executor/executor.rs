//! Query engine for tododb
//!
//! Walks the stage table in order, applying each stage whose key is present
//! in the parameter set. Stateless: every call is evaluated on its own.

use crate::store::Todo;

use super::errors::QueryResult;
use super::params::QueryParams;
use super::stages::PIPELINE;

/// Evaluates query parameters against a todo snapshot
pub struct QueryEngine;

impl QueryEngine {
    /// Evaluates `params` against `records` and returns owned results.
    ///
    /// This method is deterministic: same snapshot + same params = same
    /// results. `records` is never modified.
    pub fn evaluate(records: &[Todo], params: &QueryParams) -> QueryResult<Vec<Todo>> {
        let matched = Self::evaluate_refs(records, params)?;
        Ok(matched.into_iter().cloned().collect())
    }

    /// Evaluates `params` and returns references into `records`.
    pub fn evaluate_refs<'a>(
        records: &'a [Todo],
        params: &QueryParams,
    ) -> QueryResult<Vec<&'a Todo>> {
        let mut current: Vec<&'a Todo> = records.iter().collect();

        for stage in PIPELINE {
            if let Some(value) = params.get(stage.key) {
                current = (stage.apply)(&current, value)?;
            }
        }

        Ok(current)
    }
}
