//! Result sorting for query execution
//!
//! Single field, ascending, stable.

use std::cmp::Ordering;
use std::fmt;

use crate::store::Todo;

/// Fields a result can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Owner,
    Category,
    Status,
    Body,
}

impl OrderField {
    /// Parses an `orderBy` value.
    ///
    /// Returns `None` for anything unrecognized, including `_id` and
    /// differently-cased names; the engine then leaves the order unchanged.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "owner" => Some(OrderField::Owner),
            "category" => Some(OrderField::Category),
            "status" => Some(OrderField::Status),
            "body" => Some(OrderField::Body),
            _ => None,
        }
    }

    /// Returns the parameter spelling of this field
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderField::Owner => "owner",
            OrderField::Category => "category",
            OrderField::Status => "status",
            OrderField::Body => "body",
        }
    }

    /// Compares two todos on this field.
    ///
    /// Strings compare lexicographically; status puts `false` first.
    pub fn compare(&self, a: &Todo, b: &Todo) -> Ordering {
        match self {
            OrderField::Owner => a.owner.cmp(&b.owner),
            OrderField::Category => a.category.cmp(&b.category),
            OrderField::Status => a.status.cmp(&b.status),
            OrderField::Body => a.body.cmp(&b.body),
        }
    }
}

impl fmt::Display for OrderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Sorts result sequences
pub struct ResultSorter;

impl ResultSorter {
    /// Returns a new sequence ordered ascending by `field`.
    ///
    /// Stable: ties keep their input order. The input is not modified.
    pub fn sort<'a>(todos: &[&'a Todo], field: OrderField) -> Vec<&'a Todo> {
        let mut sorted = todos.to_vec();
        sorted.sort_by(|a, b| field.compare(a, b));
        sorted
    }
}
