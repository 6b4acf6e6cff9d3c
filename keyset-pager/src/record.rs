//! Field access by name on fetched rows.

use std::collections::{BTreeMap, HashMap};

use crate::value::Value;

/// A row whose fields can be read by name.
///
/// The paginator reads the pagination field and the primary key of the first
/// and last row of every page to build cursors. Use `#[derive(Record)]` for
/// structs with named fields.
pub trait Record {
    /// Returns the value of `name`, or `None` if the row has no such field.
    fn field(&self, name: &str) -> Option<Value>;
}

impl<T: Record + ?Sized> Record for &T {
    fn field(&self, name: &str) -> Option<Value> {
        (**self).field(name)
    }
}

impl Record for HashMap<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl Record for BTreeMap<String, Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl Record for serde_json::Map<String, serde_json::Value> {
    fn field(&self, name: &str) -> Option<Value> {
        self.get(name).map(Value::from)
    }
}

/// Raw JSON rows. Anything other than an object has no fields.
impl Record for serde_json::Value {
    fn field(&self, name: &str) -> Option<Value> {
        self.as_object().and_then(|obj| obj.field(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_row_fields() {
        let row = serde_json::json!({"id": 7, "title": "hello", "score": 1.5});
        assert_eq!(row.field("id"), Some(Value::Int(7)));
        assert_eq!(row.field("title"), Some(Value::String("hello".into())));
        assert_eq!(row.field("score"), Some(Value::Float(1.5)));
        assert_eq!(row.field("missing"), None);
    }

    #[test]
    fn test_non_object_json_has_no_fields() {
        assert_eq!(serde_json::json!([1, 2]).field("id"), None);
    }

    #[test]
    fn test_map_rows() {
        let row = BTreeMap::from([("id".to_string(), Value::Int(1))]);
        assert_eq!(row.field("id"), Some(Value::Int(1)));
        assert_eq!((&row).field("id"), Some(Value::Int(1)));
    }
}
