//! Predicate filtering for query execution
//!
//! Exact match on owner and category, literal substring on body.
//! Case-sensitive, no trimming, no coercion.

use crate::store::Todo;

/// Maps a `status` parameter value to the completion state it selects.
///
/// This is a two-way classifier, not a boolean parser. `"incomplete"`
/// selects incomplete todos and EVERY other value selects complete ones,
/// including `"complete"`, `"false"`, the empty string and typos such as
/// `"incompelte"`. Callers get no error for a misspelled status.
#[allow(clippy::match_like_matches_macro)]
pub fn status_from_param(value: &str) -> bool {
    match value {
        "incomplete" => false,
        _ => true,
    }
}

/// Filters todos into freshly allocated sequences
pub struct TodoFilter;

impl TodoFilter {
    /// Keeps todos whose owner equals `owner` exactly
    pub fn by_owner<'a, I>(todos: I, owner: &str) -> Vec<&'a Todo>
    where
        I: IntoIterator<Item = &'a Todo>,
    {
        todos.into_iter().filter(|t| t.owner == owner).collect()
    }

    /// Keeps todos whose category equals `category` exactly
    pub fn by_category<'a, I>(todos: I, category: &str) -> Vec<&'a Todo>
    where
        I: IntoIterator<Item = &'a Todo>,
    {
        todos.into_iter().filter(|t| t.category == category).collect()
    }

    /// Keeps todos whose completion state equals `status`
    pub fn by_status<'a, I>(todos: I, status: bool) -> Vec<&'a Todo>
    where
        I: IntoIterator<Item = &'a Todo>,
    {
        todos.into_iter().filter(|t| t.status == status).collect()
    }

    /// Keeps todos whose body contains `needle` as a literal substring
    pub fn by_body<'a, I>(todos: I, needle: &str) -> Vec<&'a Todo>
    where
        I: IntoIterator<Item = &'a Todo>,
    {
        todos.into_iter().filter(|t| t.body.contains(needle)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Todo> {
        vec![
            Todo::new("1", "Blanche", false, "Buy bananas and bread", "groceries"),
            Todo::new("2", "blanche", true, "Finish essay", "homework"),
            Todo::new("3", "Fry", true, "Buy Bananas", "groceries"),
            Todo::new("4", "Blanche", true, "Beat the final boss", "video games"),
        ]
    }

    fn ids(todos: &[&Todo]) -> Vec<String> {
        todos.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_status_incomplete_maps_to_false() {
        assert!(!status_from_param("incomplete"));
    }

    #[test]
    fn test_status_anything_else_maps_to_true() {
        assert!(status_from_param("complete"));
        assert!(status_from_param("false"));
        assert!(status_from_param(""));
        assert!(status_from_param("Incomplete"));
        // A typo silently selects complete todos
        assert!(status_from_param("incompelte"));
    }

    #[test]
    fn test_owner_exact_and_case_sensitive() {
        let todos = sample();
        let result = TodoFilter::by_owner(&todos, "Blanche");
        assert_eq!(ids(&result), vec!["1", "4"]);

        let result = TodoFilter::by_owner(&todos, "Blan");
        assert!(result.is_empty());
    }

    #[test]
    fn test_category_exact() {
        let todos = sample();
        let result = TodoFilter::by_category(&todos, "groceries");
        assert_eq!(ids(&result), vec!["1", "3"]);

        assert!(TodoFilter::by_category(&todos, "grocery").is_empty());
    }

    #[test]
    fn test_status() {
        let todos = sample();
        assert_eq!(ids(&TodoFilter::by_status(&todos, false)), vec!["1"]);
        assert_eq!(ids(&TodoFilter::by_status(&todos, true)), vec!["2", "3", "4"]);
    }

    #[test]
    fn test_body_substring_case_sensitive() {
        let todos = sample();
        assert_eq!(ids(&TodoFilter::by_body(&todos, "bananas")), vec!["1"]);
        assert_eq!(ids(&TodoFilter::by_body(&todos, "Buy")), vec!["1", "3"]);
        assert!(TodoFilter::by_body(&todos, "banana split").is_empty());
    }

    #[test]
    fn test_filters_compose_over_references() {
        let todos = sample();
        let owned = TodoFilter::by_owner(&todos, "Blanche");
        let done = TodoFilter::by_status(owned.iter().copied(), true);

        assert_eq!(ids(&done), vec!["4"]);
        // Input sequence untouched
        assert_eq!(owned.len(), 2);
    }
}
