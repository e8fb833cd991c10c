//! Insertion-ordered set used for skills and qualifications.
//!
//! Keeps the first occurrence of every value and yields values in the order
//! they were first inserted. Serializes as a plain JSON array.

use std::hash::Hash;

use indexmap::IndexSet;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct OrderedSet<T>(IndexSet<T>);

impl<T: Eq + Hash> OrderedSet<T> {
    pub fn new() -> Self {
        Self(IndexSet::new())
    }

    /// Inserts `value` unless an equal value is already present.
    /// Returns `true` when the value was new.
    pub fn insert(&mut self, value: T) -> bool {
        self.0.insert(value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> indexmap::set::Iter<'_, T> {
        self.0.iter()
    }
}

impl<T: Eq + Hash> Default for OrderedSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

// IndexSet equality ignores order; two sets here are equal only when they
// hold the same values in the same order.
impl<T: Eq + Hash> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.iter().eq(other.0.iter())
    }
}

impl<T: Eq + Hash> Eq for OrderedSet<T> {}

impl<T: Eq + Hash> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl<T: Eq + Hash> FromIterator<T> for OrderedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = indexmap::set::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(set: &OrderedSet<String>) -> Vec<&str> {
        set.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_insert_keeps_first_seen_order() {
        let mut set = OrderedSet::new();
        assert!(set.insert("SQL".to_string()));
        assert!(set.insert("Python".to_string()));
        assert!(!set.insert("SQL".to_string()));
        assert!(set.insert("Excel".to_string()));
        assert_eq!(values(&set), ["SQL", "Python", "Excel"]);
    }

    #[test]
    fn test_equality_is_case_sensitive() {
        let set: OrderedSet<String> = ["Python", "python", "Python"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(values(&set), ["Python", "python"]);
    }

    #[test]
    fn test_equality_depends_on_order() {
        let a: OrderedSet<&str> = ["Go", "Rust"].into_iter().collect();
        let b: OrderedSet<&str> = ["Rust", "Go"].into_iter().collect();
        let c: OrderedSet<&str> = ["Go", "Rust", "Go"].into_iter().collect();
        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn test_serializes_as_array_in_insertion_order() {
        let empty: OrderedSet<String> = OrderedSet::new();
        assert!(empty.is_empty());
        assert_eq!(serde_json::to_string(&empty).unwrap(), "[]");

        let mut set = OrderedSet::new();
        set.extend(["b", "a", "b", "c"]);
        assert_eq!(set.len(), 3);
        assert_eq!(serde_json::to_string(&set).unwrap(), r#"["b","a","c"]"#);
    }
}
