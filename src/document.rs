//! The output of one indexing pass: an insertion-ordered mapping from field
//! name to scalar or list value, ready for the caller's search-engine client.

use serde::Serialize;
use serde_json::{Map, Value};

/// A partial or complete search document. Field order is insertion order, so
/// repeated passes over identical input serialize identically.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Document(Map<String, Value>);

impl Document {
    pub fn new() -> Document {
        Document(Map::new())
    }

    /// Insert unconditionally. Reserved for fields whose contract says they
    /// are always present (constants, counts that may be zero).
    pub fn insert(&mut self, field: &str, value: Value) {
        self.0.insert(field.to_string(), value);
    }

    /// Insert unless the value is blank: null, an empty string, or an empty
    /// list. Indexers omit a key rather than emit an empty value.
    pub fn insert_nonblank(&mut self, field: &str, value: Value) {
        let blank = match &value {
            Value::Null => true,
            Value::String(s) => s.trim().is_empty(),
            Value::Array(items) => items.is_empty(),
            _ => false,
        };
        if !blank {
            self.insert(field, value);
        }
    }

    /// Shallow key-wise overwrite: every field of `other` lands in `self`,
    /// replacing any existing value in full. Field ownership across indexers
    /// is disjoint by convention; a collision resolves to the later writer.
    pub fn merge(&mut self, other: Document) {
        for (field, value) in other.0 {
            self.0.insert(field, value);
        }
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

/// A single value when the list has one entry, otherwise the whole list.
/// Mirrors how single-valued origin fields have historically been indexed.
pub fn scalar_or_list(mut values: Vec<String>) -> Value {
    if values.len() == 1 {
        Value::String(values.remove(0))
    } else {
        Value::from(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_merge_later_writer_wins() {
        let mut first = Document::new();
        first.insert("x", json!("from first"));
        first.insert("only_first", json!(1));

        let mut second = Document::new();
        second.insert("x", json!("from second"));

        first.merge(second);
        assert_eq!(first.get("x"), Some(&json!("from second")));
        assert_eq!(first.get("only_first"), Some(&json!(1)));
    }

    #[test]
    fn test_insert_nonblank_suppresses_empties() {
        let mut doc = Document::new();
        doc.insert_nonblank("a", Value::Null);
        doc.insert_nonblank("b", json!(""));
        doc.insert_nonblank("c", json!([]));
        doc.insert_nonblank("d", json!("kept"));
        doc.insert_nonblank("e", json!(0));

        assert!(!doc.contains_field("a"));
        assert!(!doc.contains_field("b"));
        assert!(!doc.contains_field("c"));
        assert_eq!(doc.get("d"), Some(&json!("kept")));
        assert_eq!(doc.get("e"), Some(&json!(0)));
    }

    #[test]
    fn test_field_order_is_insertion_order() {
        let mut doc = Document::new();
        doc.insert("z", json!(1));
        doc.insert("a", json!(2));
        doc.insert("m", json!(3));

        let fields: Vec<&String> = doc.iter().map(|(k, _)| k).collect();
        assert_eq!(fields, ["z", "a", "m"]);
    }

    #[test]
    fn test_scalar_or_list() {
        assert_eq!(scalar_or_list(vec!["one".to_string()]), json!("one"));
        assert_eq!(
            scalar_or_list(vec!["one".to_string(), "two".to_string()]),
            json!(["one", "two"])
        );
        assert_eq!(scalar_or_list(vec![]), json!([]));
    }
}
